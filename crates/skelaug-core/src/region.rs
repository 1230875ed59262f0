//! Placement of erasure regions on the time × joint grid.
//!
//! A region is sized from a random area budget `se` (a fraction of the
//! addressable grid) and a random aspect ratio `re`:
//! `fe = floor(sqrt(se * re))` frames by `ke = floor(sqrt(se / re))` joints.
//! Candidates that do not fit the grid or the confining window are rejected
//! and redrawn, up to [`RegionOptions::max_attempts`] times.

use std::ops::Range;

use log::{debug, trace};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{Real, SampleOutcome, sample_until, uniform_real};

/// A rectangular block of the time × joint grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    /// Frame range `[ye, ye + fe)`.
    pub frames: Range<usize>,
    /// Joint range `[xe, xe + ke)`.
    pub joints: Range<usize>,
}

impl Region {
    pub fn num_frames(&self) -> usize {
        self.frames.len()
    }

    pub fn num_joints(&self) -> usize {
        self.joints.len()
    }

    /// Number of grid cells covered.
    pub fn area(&self) -> usize {
        self.num_frames() * self.num_joints()
    }
}

/// How the joint axis of a region is chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum JointAxis {
    /// Joint extent and offset are drawn; `extent` is the joint axis size.
    Randomized { extent: usize },
    /// The joint range is fixed to `span`; only the time axis is sampled and
    /// the aspect ratio is held at 1.
    Fixed { span: Range<usize> },
}

impl JointAxis {
    /// Full-width fixed axis over `num_joints` joints.
    pub fn full(num_joints: usize) -> Self {
        Self::Fixed {
            span: 0..num_joints,
        }
    }

    /// Size of the addressable joint axis used for the area budget.
    pub fn extent(&self) -> usize {
        match self {
            Self::Randomized { extent } => *extent,
            Self::Fixed { span } => span.len(),
        }
    }
}

/// Sampling parameters for region placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionOptions {
    /// Area fraction range `[s_l, s_h]` of the addressable grid.
    pub area: [Real; 2],
    /// Aspect ratio range `[r_l, r_h]` (frames per joint). Ignored for
    /// [`JointAxis::Fixed`].
    pub aspect: [Real; 2],
    /// Hard cap on candidate draws.
    pub max_attempts: usize,
}

impl Default for RegionOptions {
    fn default() -> Self {
        Self {
            area: [0.02, 0.4],
            aspect: [0.3, 1.0 / 0.3],
            max_attempts: 100,
        }
    }
}

/// Sample an erasure region inside `confine` and the `num_frames × joints`
/// grid.
///
/// Returns `None` when no candidate fits within `opts.max_attempts` draws.
/// That is the normal outcome for windows too short to hold the sampled
/// extents; callers skip the window.
pub fn place_region<R>(
    rng: &mut R,
    confine: Range<usize>,
    num_frames: usize,
    joints: &JointAxis,
    opts: &RegionOptions,
) -> Option<Region>
where
    R: Rng + ?Sized,
{
    place_region_outcome(rng, confine, num_frames, joints, opts).into_value()
}

/// Same as [`place_region`], also reporting how many draws were spent.
pub fn place_region_outcome<R>(
    rng: &mut R,
    confine: Range<usize>,
    num_frames: usize,
    joints: &JointAxis,
    opts: &RegionOptions,
) -> SampleOutcome<Region>
where
    R: Rng + ?Sized,
{
    let joint_extent = joints.extent();
    let grid_area = num_frames as Real * joint_extent as Real;
    let [s_l, s_h] = opts.area;
    let [r_l, r_h] = opts.aspect;

    let draw = |rng: &mut R| -> Option<Region> {
        let se = uniform_real(rng, s_l, s_h) * grid_area;
        let re = match joints {
            JointAxis::Randomized { .. } => uniform_real(rng, r_l, r_h),
            JointAxis::Fixed { .. } => 1.0,
        };

        let fe = (se * re).sqrt().floor() as usize;
        if fe == 0 || fe >= num_frames {
            return None;
        }

        let joint_range = match joints {
            JointAxis::Randomized { extent } => {
                let ke = (se / re).sqrt().floor() as usize;
                if ke == 0 || ke >= *extent {
                    return None;
                }
                let xe = rng.random_range(0..extent - ke);
                xe..xe + ke
            }
            JointAxis::Fixed { span } => span.clone(),
        };

        let lo = confine.start;
        let hi = confine.end.saturating_sub(fe).min(num_frames - fe);
        if lo >= hi {
            return None;
        }
        let ye = rng.random_range(lo..hi);

        Some(Region {
            frames: ye..ye + fe,
            joints: joint_range,
        })
    };

    let joint_bound = match joints {
        JointAxis::Randomized { extent } => *extent,
        JointAxis::Fixed { span } => span.end,
    };
    let fits = |r: &Region| r.frames.end <= num_frames && r.joints.end <= joint_bound;

    let outcome = sample_until(rng, opts.max_attempts, draw, fits);
    match &outcome.value {
        Some(region) => trace!(
            "placed region {:?} in window {:?} after {} attempts",
            region, confine, outcome.attempts
        ),
        None => debug!(
            "no region placed in window {:?} after {} attempts",
            confine, outcome.attempts
        ),
    }
    outcome
}
