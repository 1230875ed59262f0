//! Jitter and occlusion augmentation for 3D skeleton sequences.
//!
//! Skeleton sequences (`frames × joints × xyz`) used to train pose-based
//! action recognition models are augmented in place by:
//!
//! - **jitter**: zero-mean Gaussian noise on all frames, on frames picked by
//!   a per-frame Bernoulli trial, or on randomly scheduled windows of
//!   consecutive frames, with one sigma or a limb/torso split;
//! - **occlusion**: uniform random fill over whole joint columns or over
//!   rectangular time × joint regions placed inside scheduled windows.
//!
//! # Quick Start
//!
//! ```
//! use skelaug::prelude::*;
//! use skelaug::core::synthetic::swaying_sequence;
//!
//! let config = AugmentationConfig::from_json(
//!     r#"{
//!         "steps": [
//!             { "op": "jitter",
//!               "frames": { "type": "segments", "min_len": 5, "max_len": 10 },
//!               "magnitude": { "type": "split", "sigma_high": 0.5, "sigma_low": 0.05 } },
//!             { "op": "occlusion", "probability": 0.5,
//!               "mode": { "type": "random_block_segments" },
//!               "fill": [-1.0, 1.0] }
//!         ]
//!     }"#,
//! )
//! .unwrap();
//!
//! let augmenter = Augmenter::new(config).unwrap();
//! let mut seq = swaying_sequence(120, 25, 0.2).unwrap();
//! augmenter.apply_seeded(&mut seq, 7);
//! assert_eq!(seq.shape(), (120, 25));
//! ```
//!
//! # Module Organization
//!
//! - [`jitter`](mod@jitter) - Gaussian noise passes (`add_gaussian_noise`, `jitter`)
//! - [`occlusion`] - uniform fill passes (`fill_block`, `occlude`)
//! - [`joints`] - named joint tables and selections
//! - [`config`] - serde configuration and range checks
//! - [`pipeline`] - [`Augmenter`], ordered application of passes
//! - [`core`] - sequence buffer, window scheduling, region placement

// ═══════════════════════════════════════════════════════════════════════════════
// Augmentation Passes
// ═══════════════════════════════════════════════════════════════════════════════

pub mod config;
pub mod jitter;
pub mod joints;
pub mod occlusion;
pub mod pipeline;

pub use config::{AugmentStep, AugmentationConfig, ConfigError};
pub use jitter::{
    FrameSelection, JitterMagnitude, JitterOptions, JitterReport, add_gaussian_noise, jitter,
    select_frames,
};
pub use joints::{JointGroup, JointGroups, JointSelection, JointSet};
pub use occlusion::{
    ErasedBlock, OcclusionMode, OcclusionOptions, OcclusionReport, fill_block, fill_region,
    occlude,
};
pub use pipeline::{Augmenter, StepReport};

// ═══════════════════════════════════════════════════════════════════════════════
// Foundation Crate
// ═══════════════════════════════════════════════════════════════════════════════

/// Sequence buffer, window scheduling, region placement and random draws.
pub mod core {
    pub use skelaug_core::*;
}

/// Common imports for augmentation workflows.
pub mod prelude {
    pub use crate::{
        AugmentStep, AugmentationConfig, Augmenter, FrameSelection, JitterMagnitude,
        JitterOptions, JointGroup, JointGroups, JointSelection, JointSet, OcclusionMode,
        OcclusionOptions, StepReport,
    };
    pub use skelaug_core::{
        Real, Region, RegionOptions, SegmentOptions, SkeletonSequence, Vec3,
    };
}
