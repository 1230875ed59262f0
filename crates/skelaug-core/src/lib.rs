//! Core primitives for `skelaug`, a skeleton sequence augmentation library.
//!
//! This crate provides the building blocks used by the augmentation
//! operations in the `skelaug` crate:
//!
//! - scalar/vector aliases (`Real`, `Vec3`),
//! - an owned `frames × joints` coordinate buffer ([`SkeletonSequence`]),
//! - a segment scheduler that splits a timeline into randomized active
//!   windows separated by randomized gaps ([`schedule`]),
//! - a rejection-sampling region placer for the time × joint grid
//!   ([`place_region`]), built on a bounded retry combinator
//!   ([`sample_until`]),
//! - Gaussian and uniform coordinate draws over an injected RNG.
//!
//! Every random operation takes the generator explicitly, so results are
//! reproducible from a seed:
//!
//! ```
//! use rand::{SeedableRng, rngs::StdRng};
//! use skelaug_core::{SegmentOptions, schedule};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let windows: Vec<_> = schedule(&mut rng, 40, &SegmentOptions::default()).collect();
//! for w in &windows {
//!     assert!(w.len() >= 5 && w.len() <= 10);
//! }
//! ```

/// Scalar and vector type aliases.
mod math;
/// Gaussian and uniform coordinate draws.
mod noise;
/// Rejection-sampling placement of erasure regions.
mod region;
/// Bounded "sample until accepted" combinator.
mod sampling;
/// Randomized active-window scheduling over a timeline.
mod schedule;
/// Owned skeleton sequence buffer.
mod sequence;
/// Deterministic synthetic skeleton sequences.
///
/// Used by workspace tests and useful for benchmarking; not intended as a
/// motion model.
pub mod synthetic;

pub use math::*;
pub use noise::*;
pub use region::*;
pub use sampling::*;
pub use schedule::*;
pub use sequence::*;
