//! Ordered application of augmentation passes to one sequence.

use anyhow::{Context, Result};
use log::debug;
use rand::{Rng, SeedableRng, rngs::StdRng};
use skelaug_core::{SkeletonSequence, Vec3};

use crate::{AugmentStep, AugmentationConfig, JitterReport, OcclusionReport, jitter, occlude};

/// Per-step outcome of [`Augmenter::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepReport {
    Jitter(JitterReport),
    Occlusion(OcclusionReport),
}

/// Validated augmentation configuration, ready to apply.
///
/// # Example
///
/// ```
/// use skelaug::prelude::*;
/// use skelaug::core::synthetic::swaying_sequence;
///
/// let config = AugmentationConfig {
///     steps: vec![
///         AugmentStep::Jitter(JitterOptions::default()),
///         AugmentStep::Occlusion(OcclusionOptions::default()),
///     ],
///     ..Default::default()
/// };
/// let augmenter = Augmenter::new(config).unwrap();
///
/// let mut seq = swaying_sequence(64, 25, 0.2).unwrap();
/// let reports = augmenter.apply_seeded(&mut seq, 42);
/// assert_eq!(reports.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Augmenter {
    config: AugmentationConfig,
}

impl Augmenter {
    /// Validate `config` and build an augmenter.
    pub fn new(config: AugmentationConfig) -> Result<Self> {
        config
            .validate()
            .context("invalid augmentation configuration")?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AugmentationConfig {
        &self.config
    }

    /// Run every step in order on `seq`, drawing randomness from `rng`.
    pub fn apply<R>(&self, seq: &mut SkeletonSequence, rng: &mut R) -> Vec<StepReport>
    where
        R: Rng + ?Sized,
    {
        let groups = &self.config.joint_groups;
        let mut reports = Vec::with_capacity(self.config.steps.len());
        for (idx, step) in self.config.steps.iter().enumerate() {
            debug!("applying augmentation step {idx}");
            let report = match step {
                AugmentStep::Jitter(opts) => StepReport::Jitter(jitter(seq, opts, groups, rng)),
                AugmentStep::Occlusion(opts) => {
                    StepReport::Occlusion(occlude(seq, opts, groups, rng))
                }
            };
            reports.push(report);
        }
        reports
    }

    /// [`Augmenter::apply`] with a fresh `StdRng` seeded from `seed`.
    pub fn apply_seeded(&self, seq: &mut SkeletonSequence, seed: u64) -> Vec<StepReport> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.apply(seq, &mut rng)
    }

    /// Build a sequence from nested frames, augment it, and return it.
    ///
    /// Fails if the frames are empty, ragged or contain non-finite values.
    pub fn augment_frames(&self, frames: Vec<Vec<Vec3>>, seed: u64) -> Result<SkeletonSequence> {
        let mut seq =
            SkeletonSequence::from_frames(frames).context("malformed skeleton buffer")?;
        self.apply_seeded(&mut seq, seed);
        Ok(seq)
    }
}
