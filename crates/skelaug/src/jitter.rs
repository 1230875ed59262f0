//! Gaussian jitter on selected frames and joints.
//!
//! A jitter pass is a frame selection (every frame, a per-frame Bernoulli
//! trial, or scheduled windows) combined with a magnitude rule (one sigma on
//! a joint selection, or a high/low split between limb joints and the rest).

use log::trace;
use rand::Rng;
use serde::{Deserialize, Serialize};
use skelaug_core::{Real, SegmentOptions, SkeletonSequence, gaussian_vec3, schedule};

use crate::config::{ConfigError, check_probability, check_segments, check_sigma};
use crate::{JointGroup, JointGroups, JointSelection};

/// Which frames receive noise.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FrameSelection {
    /// Every frame.
    #[default]
    All,
    /// Each frame independently, when a uniform draw is below `probability`.
    Bernoulli {
        #[serde(default = "default_frame_probability")]
        probability: Real,
    },
    /// Frames inside scheduled active windows.
    Segments(SegmentOptions),
}

/// How much noise each joint receives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum JitterMagnitude {
    /// One standard deviation on the selected joints; others are untouched.
    Uniform {
        sigma: Real,
        #[serde(default)]
        joints: JointSelection,
    },
    /// `sigma_high` on `high_joints`, `sigma_low` on every other joint.
    Split {
        sigma_high: Real,
        sigma_low: Real,
        #[serde(default = "default_high_joints")]
        high_joints: JointSelection,
    },
}

fn default_frame_probability() -> Real {
    0.5
}

fn default_high_joints() -> JointSelection {
    JointSelection::group(JointGroup::HighNoise)
}

impl Default for JitterMagnitude {
    fn default() -> Self {
        Self::Uniform {
            sigma: 0.5,
            joints: JointSelection::All,
        }
    }
}

impl JitterMagnitude {
    /// High/low split with the default limb group.
    pub fn split(sigma_high: Real, sigma_low: Real) -> Self {
        Self::Split {
            sigma_high,
            sigma_low,
            high_joints: default_high_joints(),
        }
    }

    /// `(joints, sigma)` groups for a skeleton with `num_joints` joints.
    fn plan(&self, groups: &JointGroups, num_joints: usize) -> Vec<(Vec<usize>, Real)> {
        match self {
            Self::Uniform { sigma, joints } => vec![(joints.resolve(groups, num_joints), *sigma)],
            Self::Split {
                sigma_high,
                sigma_low,
                high_joints,
            } => {
                let high = high_joints.resolve(groups, num_joints);
                let low = (0..num_joints).filter(|j| !high.contains(j)).collect();
                vec![(high, *sigma_high), (low, *sigma_low)]
            }
        }
    }
}

/// Options for one jitter pass.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JitterOptions {
    pub frames: FrameSelection,
    pub magnitude: JitterMagnitude,
}

impl JitterOptions {
    pub fn validate(&self) -> Result<(), ConfigError> {
        match &self.frames {
            FrameSelection::All => {}
            FrameSelection::Bernoulli { probability } => {
                check_probability("frame probability", *probability)?
            }
            FrameSelection::Segments(seg) => check_segments(seg)?,
        }
        match &self.magnitude {
            JitterMagnitude::Uniform { sigma, .. } => check_sigma("sigma", *sigma),
            JitterMagnitude::Split {
                sigma_high,
                sigma_low,
                ..
            } => {
                check_sigma("sigma_high", *sigma_high)?;
                check_sigma("sigma_low", *sigma_low)
            }
        }
    }
}

/// Frames touched by a jitter pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JitterReport {
    /// Selected frame indices, in increasing order.
    pub frames: Vec<usize>,
}

/// Add independent zero-mean Gaussian noise with standard deviation `sigma`
/// to every `(frame, joint)` coordinate in `frames × joints`.
///
/// With `sigma == 0` the sequence is left bit-identical.
///
/// # Panics
/// Panics if a frame or joint index is outside the sequence.
pub fn add_gaussian_noise<R>(
    seq: &mut SkeletonSequence,
    frames: &[usize],
    joints: &[usize],
    sigma: Real,
    rng: &mut R,
) where
    R: Rng + ?Sized,
{
    if sigma == 0.0 {
        return;
    }
    for &frame in frames {
        for &joint in joints {
            *seq.joint_mut(frame, joint) += gaussian_vec3(rng, sigma);
        }
    }
}

/// Frame indices picked by `selection` on a timeline of `num_frames`.
pub fn select_frames<R>(selection: &FrameSelection, num_frames: usize, rng: &mut R) -> Vec<usize>
where
    R: Rng + ?Sized,
{
    match selection {
        FrameSelection::All => (0..num_frames).collect(),
        FrameSelection::Bernoulli { probability } => (0..num_frames)
            .filter(|_| rng.random::<Real>() < *probability)
            .collect(),
        FrameSelection::Segments(seg) => schedule(rng, num_frames, seg).flatten().collect(),
    }
}

/// Apply one jitter pass to `seq` in place.
pub fn jitter<R>(
    seq: &mut SkeletonSequence,
    opts: &JitterOptions,
    groups: &JointGroups,
    rng: &mut R,
) -> JitterReport
where
    R: Rng + ?Sized,
{
    let frames = select_frames(&opts.frames, seq.num_frames(), rng);
    for (joints, sigma) in opts.magnitude.plan(groups, seq.num_joints()) {
        add_gaussian_noise(seq, &frames, &joints, sigma, rng);
    }
    trace!("jittered {} of {} frames", frames.len(), seq.num_frames());
    JitterReport { frames }
}
