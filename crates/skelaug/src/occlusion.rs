//! Occlusion by overwriting blocks of the time × joint grid.
//!
//! Windowed modes schedule active windows over the timeline and, inside each
//! window, place one erasure region with [`place_region`]. Windows where
//! placement runs out of attempts are skipped. Erased coordinates are
//! replaced with independent uniform draws from the fill range.

use std::ops::Range;

use log::{debug, trace};
use rand::Rng;
use serde::{Deserialize, Serialize};
use skelaug_core::{
    JointAxis, Real, Region, RegionOptions, SegmentOptions, SkeletonSequence, place_region,
    schedule, uniform_vec3,
};

use crate::config::{ConfigError, check_fill, check_probability, check_region, check_segments};
use crate::{JointGroup, JointGroups, JointSelection};

/// Which part of the grid an occlusion pass erases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OcclusionMode {
    /// Erase the selected joints over every frame.
    SubsetAllFrames {
        #[serde(default = "default_static_joints")]
        joints: JointSelection,
    },
    /// Per scheduled window, erase the selected joints over a sampled frame
    /// range.
    SubsetSegments {
        #[serde(default = "default_windowed_joints")]
        joints: JointSelection,
        #[serde(default)]
        segments: SegmentOptions,
    },
    /// Per scheduled window, erase a sampled frame × joint block.
    RandomBlockSegments {
        #[serde(default)]
        segments: SegmentOptions,
    },
    /// Per scheduled window, erase every joint over a sampled frame range.
    AllJointsSegments {
        #[serde(default)]
        segments: SegmentOptions,
    },
}

fn default_static_joints() -> JointSelection {
    JointSelection::group(JointGroup::StaticOcclusion)
}

fn default_windowed_joints() -> JointSelection {
    JointSelection::group(JointGroup::WindowedOcclusion)
}

impl Default for OcclusionMode {
    fn default() -> Self {
        Self::RandomBlockSegments {
            segments: SegmentOptions::default(),
        }
    }
}

impl OcclusionMode {
    fn segments(&self) -> Option<&SegmentOptions> {
        match self {
            Self::SubsetAllFrames { .. } => None,
            Self::SubsetSegments { segments, .. }
            | Self::RandomBlockSegments { segments }
            | Self::AllJointsSegments { segments } => Some(segments),
        }
    }
}

/// Options for one occlusion pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OcclusionOptions {
    pub mode: OcclusionMode,
    /// Probability that the pass runs at all.
    pub probability: Real,
    /// Area, aspect ratio and retry budget for region placement.
    pub region: RegionOptions,
    /// Fill value range `[v_l, v_h]`.
    pub fill: [Real; 2],
}

impl Default for OcclusionOptions {
    fn default() -> Self {
        Self {
            mode: OcclusionMode::default(),
            probability: 1.0,
            region: RegionOptions::default(),
            fill: [0.0, 0.0],
        }
    }
}

impl OcclusionOptions {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_probability("occlusion probability", self.probability)?;
        check_fill(self.fill)?;
        if let Some(segments) = self.mode.segments() {
            check_segments(segments)?;
            check_region(&self.region)?;
        }
        Ok(())
    }
}

/// One overwritten block of the grid, in skeleton coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErasedBlock {
    pub frames: Range<usize>,
    /// Skeleton joint indices, in fill order.
    pub joints: Vec<usize>,
}

/// What an occlusion pass erased.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OcclusionReport {
    /// `false` when the probability draw skipped the pass.
    pub applied: bool,
    /// Number of scheduled windows (windowed modes only).
    pub windows: usize,
    /// Windows skipped because no region fit within the retry budget.
    pub exhausted: usize,
    /// Erased blocks: one per successful window, or a single whole-timeline
    /// block for [`OcclusionMode::SubsetAllFrames`].
    pub blocks: Vec<ErasedBlock>,
    /// Erased frame indices, in erase order.
    pub erased_frames: Vec<usize>,
}

/// Overwrite every coordinate of `frames × joints` with independent uniform
/// draws from `[fill[0], fill[1]]`.
///
/// # Panics
/// Panics if a frame or joint index is outside the sequence.
pub fn fill_block<R>(
    seq: &mut SkeletonSequence,
    frames: Range<usize>,
    joints: &[usize],
    fill: [Real; 2],
    rng: &mut R,
) where
    R: Rng + ?Sized,
{
    for frame in frames {
        for &joint in joints {
            *seq.joint_mut(frame, joint) = uniform_vec3(rng, fill[0], fill[1]);
        }
    }
}

/// Overwrite a placed region; its joint range addresses the skeleton directly.
pub fn fill_region<R>(seq: &mut SkeletonSequence, region: &Region, fill: [Real; 2], rng: &mut R)
where
    R: Rng + ?Sized,
{
    let joints: Vec<usize> = region.joints.clone().collect();
    fill_block(seq, region.frames.clone(), &joints, fill, rng);
}

/// Apply one occlusion pass to `seq` in place.
pub fn occlude<R>(
    seq: &mut SkeletonSequence,
    opts: &OcclusionOptions,
    groups: &JointGroups,
    rng: &mut R,
) -> OcclusionReport
where
    R: Rng + ?Sized,
{
    let mut report = OcclusionReport::default();
    if rng.random::<Real>() > opts.probability {
        debug!("occlusion pass skipped by probability {}", opts.probability);
        return report;
    }
    report.applied = true;

    let (num_frames, num_joints) = seq.shape();
    let (joints, axis, segments) = match &opts.mode {
        OcclusionMode::SubsetAllFrames { joints } => {
            let joints = joints.resolve(groups, num_joints);
            fill_block(seq, 0..num_frames, &joints, opts.fill, rng);
            if !joints.is_empty() {
                report.erased_frames.extend(0..num_frames);
                report.blocks.push(ErasedBlock {
                    frames: 0..num_frames,
                    joints,
                });
            }
            return report;
        }
        OcclusionMode::SubsetSegments { joints, segments } => {
            let joints = joints.resolve(groups, num_joints);
            let axis = JointAxis::Fixed {
                span: 0..joints.len(),
            };
            (joints, axis, segments)
        }
        OcclusionMode::RandomBlockSegments { segments } => (
            (0..num_joints).collect(),
            JointAxis::Randomized { extent: num_joints },
            segments,
        ),
        OcclusionMode::AllJointsSegments { segments } => (
            (0..num_joints).collect(),
            JointAxis::full(num_joints),
            segments,
        ),
    };
    if joints.is_empty() {
        debug!("occlusion pass has no joints on a {num_joints}-joint skeleton");
        return report;
    }

    let windows: Vec<Range<usize>> = schedule(rng, num_frames, segments).collect();
    report.windows = windows.len();
    for window in windows {
        let Some(region) = place_region(rng, window, num_frames, &axis, &opts.region) else {
            report.exhausted += 1;
            continue;
        };
        // Region joints index into `joints`; identity for the full-skeleton modes.
        let targets = joints[region.joints].to_vec();
        fill_block(seq, region.frames.clone(), &targets, opts.fill, rng);
        report.erased_frames.extend(region.frames.clone());
        report.blocks.push(ErasedBlock {
            frames: region.frames,
            joints: targets,
        });
    }
    trace!(
        "occluded {} blocks over {} windows ({} exhausted)",
        report.blocks.len(),
        report.windows,
        report.exhausted
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};
    use skelaug_core::synthetic::swaying_sequence;

    const FILL: [Real; 2] = [-7.0, -7.0];
    const MARK: Real = -7.0;

    fn run(seq: &mut SkeletonSequence, opts: &OcclusionOptions, seed: u64) -> OcclusionReport {
        occlude(seq, opts, &JointGroups::default(), &mut StdRng::seed_from_u64(seed))
    }

    fn is_filled(seq: &SkeletonSequence, frame: usize, joint: usize) -> bool {
        seq.joint(frame, joint).iter().all(|&c| c == MARK)
    }

    #[test]
    fn fill_with_degenerate_range_is_idempotent() {
        let mut a = swaying_sequence(20, 10, 0.2).unwrap();
        let region = Region {
            frames: 3..9,
            joints: 2..5,
        };
        fill_region(&mut a, &region, FILL, &mut StdRng::seed_from_u64(0));
        let once = a.clone();
        fill_region(&mut a, &region, FILL, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, once);
        for f in 0..20 {
            for j in 0..10 {
                let inside = region.frames.contains(&f) && region.joints.contains(&j);
                assert_eq!(is_filled(&a, f, j), inside, "frame {f} joint {j}");
            }
        }
    }

    #[test]
    fn subset_all_frames_erases_whole_columns() {
        let mut seq = swaying_sequence(15, 25, 0.2).unwrap();
        let opts = OcclusionOptions {
            mode: OcclusionMode::SubsetAllFrames {
                joints: default_static_joints(),
            },
            fill: FILL,
            ..OcclusionOptions::default()
        };
        let report = run(&mut seq, &opts, 1);
        assert!(report.applied);
        assert_eq!(report.erased_frames, (0..15).collect::<Vec<_>>());
        assert_eq!(
            report.blocks,
            vec![ErasedBlock {
                frames: 0..15,
                joints: vec![2, 3, 4, 5],
            }]
        );
        for f in 0..15 {
            for j in 0..25 {
                assert_eq!(is_filled(&seq, f, j), (2..=5).contains(&j));
            }
        }
    }

    #[test]
    fn zero_probability_skips_pass() {
        let original = swaying_sequence(40, 25, 0.2).unwrap();
        let mut seq = original.clone();
        let opts = OcclusionOptions {
            probability: 0.0,
            fill: FILL,
            ..OcclusionOptions::default()
        };
        let report = run(&mut seq, &opts, 2);
        assert!(!report.applied);
        assert_eq!(seq, original);
    }

    #[test]
    fn all_joints_segments_erase_full_rows_inside_windows() {
        let mut seq = swaying_sequence(200, 25, 0.2).unwrap();
        let opts = OcclusionOptions {
            mode: OcclusionMode::AllJointsSegments {
                segments: SegmentOptions::new(10, 20),
            },
            region: RegionOptions {
                area: [0.001, 0.002],
                aspect: [1.0, 1.0],
                max_attempts: 100,
            },
            fill: FILL,
            ..OcclusionOptions::default()
        };
        let report = run(&mut seq, &opts, 3);
        assert!(report.applied);
        assert!(!report.blocks.is_empty());
        assert_eq!(report.blocks.len() + report.exhausted, report.windows);
        for block in &report.blocks {
            assert_eq!(block.joints, (0..25).collect::<Vec<_>>());
            for f in block.frames.clone() {
                assert!((0..25).all(|j| is_filled(&seq, f, j)));
            }
        }
        for f in 0..200 {
            let erased = report.blocks.iter().any(|b| b.frames.contains(&f));
            assert_eq!(is_filled(&seq, f, 0), erased, "frame {f}");
        }
    }

    #[test]
    fn subset_segments_only_touch_listed_joints() {
        let mut seq = swaying_sequence(120, 25, 0.2).unwrap();
        let opts = OcclusionOptions {
            mode: OcclusionMode::SubsetSegments {
                joints: default_windowed_joints(),
                segments: SegmentOptions::new(8, 16),
            },
            region: RegionOptions {
                area: [0.01, 0.03],
                aspect: [1.0, 1.0],
                max_attempts: 100,
            },
            fill: FILL,
            ..OcclusionOptions::default()
        };
        let report = run(&mut seq, &opts, 4);
        assert!(!report.blocks.is_empty());
        let listed = [7, 8, 9, 15, 16, 17];
        for block in &report.blocks {
            // Aspect 1 on a fixed axis keeps every listed joint in the block.
            assert_eq!(block.joints, listed);
            for f in block.frames.clone() {
                for &j in &block.joints {
                    assert!(is_filled(&seq, f, j), "joint {j} kept at frame {f}");
                }
            }
        }
        for f in 0..120 {
            for j in 0..25 {
                if is_filled(&seq, f, j) {
                    assert!(listed.contains(&j), "joint {j} erased at frame {f}");
                }
            }
        }
    }

    #[test]
    fn random_blocks_land_inside_windows() {
        let mut seq = swaying_sequence(300, 25, 0.2).unwrap();
        let opts = OcclusionOptions {
            mode: OcclusionMode::RandomBlockSegments {
                segments: SegmentOptions::new(20, 40),
            },
            region: RegionOptions {
                area: [0.002, 0.01],
                aspect: [0.5, 2.0],
                max_attempts: 100,
            },
            fill: FILL,
            ..OcclusionOptions::default()
        };
        let report = run(&mut seq, &opts, 5);
        assert!(!report.blocks.is_empty());
        for block in &report.blocks {
            assert!(!block.joints.is_empty() && block.joints.len() < 25);
            assert!(block.joints.windows(2).all(|w| w[1] == w[0] + 1));
            for f in block.frames.clone() {
                for &j in &block.joints {
                    assert!(is_filled(&seq, f, j));
                }
            }
        }
    }

    #[test]
    fn exhausted_windows_leave_sequence_untouched() {
        let original = swaying_sequence(30, 25, 0.2).unwrap();
        let mut seq = original.clone();
        let opts = OcclusionOptions {
            mode: OcclusionMode::AllJointsSegments {
                segments: SegmentOptions::new(5, 10),
            },
            region: RegionOptions {
                area: [1.0, 1.0],
                aspect: [1.0, 1.0],
                max_attempts: 100,
            },
            fill: FILL,
            ..OcclusionOptions::default()
        };
        let report = run(&mut seq, &opts, 6);
        assert!(report.applied);
        assert!(report.blocks.is_empty());
        assert_eq!(report.exhausted, report.windows);
        assert_eq!(seq, original);
    }

    #[test]
    fn validation_ignores_region_for_static_mode() {
        let opts = OcclusionOptions {
            mode: OcclusionMode::SubsetAllFrames {
                joints: JointSelection::All,
            },
            region: RegionOptions {
                area: [0.0, 0.0],
                ..RegionOptions::default()
            },
            ..OcclusionOptions::default()
        };
        assert!(opts.validate().is_ok());
        let opts = OcclusionOptions {
            fill: [1.0, -1.0],
            ..OcclusionOptions::default()
        };
        assert_eq!(
            opts.validate(),
            Err(ConfigError::FillRange { lo: 1.0, hi: -1.0 })
        );
    }
}
