//! Parameter range checks for augmentation options.
//!
//! The scheduling and placement algorithms assume valid parameters; these
//! checks run once when an [`crate::Augmenter`] is built.

use serde::{Deserialize, Serialize};
use skelaug_core::{Real, RegionOptions, SegmentOptions};
use thiserror::Error;

use crate::{JitterOptions, JointGroups, OcclusionOptions};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be a finite value >= 0, got {value}")]
    NegativeSigma { name: &'static str, value: Real },
    #[error("{name} must be a probability in [0, 1], got {value}")]
    Probability { name: &'static str, value: Real },
    #[error("segment bounds need 1 <= min_len <= max_len, got {min_len}..={max_len}")]
    SegmentBounds { min_len: usize, max_len: usize },
    #[error("area fraction range needs 0 < s_l <= s_h <= 1, got [{lo}, {hi}]")]
    AreaRange { lo: Real, hi: Real },
    #[error("aspect ratio range needs 0 < r_l <= r_h, got [{lo}, {hi}]")]
    AspectRange { lo: Real, hi: Real },
    #[error("fill value range needs finite v_l <= v_h, got [{lo}, {hi}]")]
    FillRange { lo: Real, hi: Real },
}

pub(crate) fn check_sigma(name: &'static str, value: Real) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NegativeSigma { name, value })
    }
}

pub(crate) fn check_probability(name: &'static str, value: Real) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::Probability { name, value })
    }
}

pub(crate) fn check_segments(opts: &SegmentOptions) -> Result<(), ConfigError> {
    if opts.min_len >= 1 && opts.min_len <= opts.max_len {
        Ok(())
    } else {
        Err(ConfigError::SegmentBounds {
            min_len: opts.min_len,
            max_len: opts.max_len,
        })
    }
}

pub(crate) fn check_region(opts: &RegionOptions) -> Result<(), ConfigError> {
    let [lo, hi] = opts.area;
    if !(lo > 0.0 && lo <= hi && hi <= 1.0) {
        return Err(ConfigError::AreaRange { lo, hi });
    }
    let [lo, hi] = opts.aspect;
    if !(lo > 0.0 && lo <= hi && hi.is_finite()) {
        return Err(ConfigError::AspectRange { lo, hi });
    }
    Ok(())
}

pub(crate) fn check_fill([lo, hi]: [Real; 2]) -> Result<(), ConfigError> {
    if lo.is_finite() && hi.is_finite() && lo <= hi {
        Ok(())
    } else {
        Err(ConfigError::FillRange { lo, hi })
    }
}

/// One augmentation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum AugmentStep {
    Jitter(JitterOptions),
    Occlusion(OcclusionOptions),
}

impl AugmentStep {
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            Self::Jitter(opts) => opts.validate(),
            Self::Occlusion(opts) => opts.validate(),
        }
    }
}

/// Ordered augmentation passes plus the joint tables they refer to.
///
/// # Example
///
/// ```
/// use skelaug::AugmentationConfig;
///
/// let config = AugmentationConfig::from_json(
///     r#"{
///         "steps": [
///             { "op": "jitter", "frames": { "type": "bernoulli", "probability": 0.3 } },
///             { "op": "occlusion", "mode": { "type": "all_joints_segments" } }
///         ]
///     }"#,
/// )
/// .unwrap();
/// assert_eq!(config.steps.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AugmentationConfig {
    pub joint_groups: JointGroups,
    pub steps: Vec<AugmentStep>,
}

impl AugmentationConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every step's parameter ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.steps.iter().try_for_each(AugmentStep::validate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_checks() {
        assert!(check_sigma("sigma", 0.0).is_ok());
        assert!(check_sigma("sigma", -0.1).is_err());
        assert!(check_sigma("sigma", Real::NAN).is_err());
        assert!(check_probability("p", 1.0).is_ok());
        assert!(check_probability("p", 1.5).is_err());
        assert!(check_segments(&SegmentOptions::new(0, 3)).is_err());
        assert!(check_segments(&SegmentOptions::new(6, 5)).is_err());
        assert!(check_segments(&SegmentOptions::new(5, 5)).is_ok());
        assert!(check_fill([1.0, 0.0]).is_err());
        assert!(check_fill([0.0, 0.0]).is_ok());
    }

    #[test]
    fn region_checks() {
        let ok = RegionOptions::default();
        assert!(check_region(&ok).is_ok());
        let zero_area = RegionOptions {
            area: [0.0, 0.3],
            ..ok
        };
        assert_eq!(
            check_region(&zero_area),
            Err(ConfigError::AreaRange { lo: 0.0, hi: 0.3 })
        );
        let flipped_aspect = RegionOptions {
            aspect: [2.0, 1.0],
            ..ok
        };
        assert!(check_region(&flipped_aspect).is_err());
    }

    #[test]
    fn invalid_json_step_is_rejected() {
        let err = AugmentationConfig::from_json(
            r#"{"steps": [{"op": "jitter", "magnitude": {"type": "uniform", "sigma": -1.0}}]}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("sigma"), "{err}");
    }
}
