//! Named joint groups and joint selections.
//!
//! Joint index tables depend on the skeleton layout, so they are carried as
//! configuration rather than constants. [`JointGroups::default`] holds limb
//! tables for layouts with at least 18 joints; indices beyond a smaller
//! skeleton are dropped when a selection is resolved.

use log::debug;
use serde::{Deserialize, Serialize};

/// Ordered list of joint indices.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JointSet(Vec<usize>);

impl JointSet {
    pub fn new(joints: impl Into<Vec<usize>>) -> Self {
        Self(joints.into())
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, joint: usize) -> bool {
        self.0.contains(&joint)
    }

    /// Joints of this set that exist on a skeleton with `num_joints` joints,
    /// in set order.
    pub fn within(&self, num_joints: usize) -> Vec<usize> {
        let kept: Vec<usize> = self.0.iter().copied().filter(|&j| j < num_joints).collect();
        if kept.len() != self.0.len() {
            debug!(
                "dropped {} joint indices outside a {}-joint skeleton",
                self.0.len() - kept.len(),
                num_joints
            );
        }
        kept
    }

    /// Joints in `0..num_joints` that are not in this set.
    pub fn complement(&self, num_joints: usize) -> Vec<usize> {
        (0..num_joints).filter(|&j| !self.contains(j)).collect()
    }
}

impl From<Vec<usize>> for JointSet {
    fn from(joints: Vec<usize>) -> Self {
        Self(joints)
    }
}

/// Name of a joint group in [`JointGroups`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JointGroup {
    /// Limb joints that receive the larger jitter magnitude.
    HighNoise,
    /// Joints erased over the whole timeline.
    StaticOcclusion,
    /// Joints erased inside scheduled windows.
    WindowedOcclusion,
}

/// Joint index tables for one skeleton layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JointGroups {
    pub high_noise: JointSet,
    pub static_occlusion: JointSet,
    pub windowed_occlusion: JointSet,
}

impl Default for JointGroups {
    fn default() -> Self {
        Self {
            high_noise: JointSet::new([3, 4, 5, 11, 12, 13, 7, 8, 9, 15, 16, 17]),
            static_occlusion: JointSet::new([2, 3, 4, 5]),
            windowed_occlusion: JointSet::new([7, 8, 9, 15, 16, 17]),
        }
    }
}

impl JointGroups {
    pub fn get(&self, group: JointGroup) -> &JointSet {
        match group {
            JointGroup::HighNoise => &self.high_noise,
            JointGroup::StaticOcclusion => &self.static_occlusion,
            JointGroup::WindowedOcclusion => &self.windowed_occlusion,
        }
    }
}

/// Which joints an operation touches.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum JointSelection {
    /// Every joint of the skeleton.
    #[default]
    All,
    /// A named group looked up in [`JointGroups`].
    Group { group: JointGroup },
    /// An explicit list of joint indices.
    List { joints: JointSet },
}

impl JointSelection {
    pub fn group(group: JointGroup) -> Self {
        Self::Group { group }
    }

    /// Concrete joint indices for a skeleton with `num_joints` joints.
    ///
    /// Indices outside the skeleton are dropped.
    pub fn resolve(&self, groups: &JointGroups, num_joints: usize) -> Vec<usize> {
        match self {
            Self::All => (0..num_joints).collect(),
            Self::Group { group } => groups.get(*group).within(num_joints),
            Self::List { joints } => joints.within(num_joints),
        }
    }
}
