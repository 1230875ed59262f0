use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Vec3, is_finite};

/// Structural errors raised when building a [`SkeletonSequence`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SequenceError {
    #[error("skeleton sequence needs at least one frame and one joint")]
    Empty,
    #[error("buffer holds {got} coordinates, expected {expected} (frames × joints)")]
    ShapeMismatch { expected: usize, got: usize },
    #[error("frame {frame} has {got} joints, expected {expected}")]
    RaggedFrame {
        frame: usize,
        expected: usize,
        got: usize,
    },
    #[error("non-finite coordinate at frame {frame}, joint {joint}")]
    NonFinite { frame: usize, joint: usize },
}

/// A sequence of skeleton frames, each holding `num_joints` 3D coordinates.
///
/// Storage is a single contiguous, frame-major buffer. The shape is fixed at
/// construction; augmentation operations mutate coordinates in place and
/// never resize the sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkeletonSequence {
    num_joints: usize,
    coords: Vec<Vec3>,
}

impl SkeletonSequence {
    /// Build a sequence from a frame-major flat buffer.
    ///
    /// Fails if the shape is empty, if `coords.len()` is not a multiple of
    /// `num_joints`, or if any coordinate is non-finite.
    pub fn from_flat(coords: Vec<Vec3>, num_joints: usize) -> Result<Self, SequenceError> {
        if num_joints == 0 || coords.is_empty() {
            return Err(SequenceError::Empty);
        }
        if coords.len() % num_joints != 0 {
            let frames = coords.len().div_ceil(num_joints);
            return Err(SequenceError::ShapeMismatch {
                expected: frames * num_joints,
                got: coords.len(),
            });
        }
        if let Some(idx) = coords.iter().position(|c| !is_finite(c)) {
            return Err(SequenceError::NonFinite {
                frame: idx / num_joints,
                joint: idx % num_joints,
            });
        }
        Ok(Self { num_joints, coords })
    }

    /// Build a sequence from nested per-frame joint lists.
    ///
    /// Every frame must hold the same number of joints as the first one.
    pub fn from_frames(frames: Vec<Vec<Vec3>>) -> Result<Self, SequenceError> {
        let num_joints = frames.first().map(Vec::len).ok_or(SequenceError::Empty)?;
        let mut coords = Vec::with_capacity(frames.len() * num_joints);
        for (frame, joints) in frames.into_iter().enumerate() {
            if joints.len() != num_joints {
                return Err(SequenceError::RaggedFrame {
                    frame,
                    expected: num_joints,
                    got: joints.len(),
                });
            }
            coords.extend(joints);
        }
        Self::from_flat(coords, num_joints)
    }

    /// A sequence with every coordinate at the origin.
    pub fn zeros(num_frames: usize, num_joints: usize) -> Result<Self, SequenceError> {
        Self::from_flat(vec![Vec3::zeros(); num_frames * num_joints], num_joints)
    }

    /// Number of frames (time axis extent).
    pub fn num_frames(&self) -> usize {
        self.coords.len() / self.num_joints
    }

    /// Number of joints per frame (joint axis extent).
    pub fn num_joints(&self) -> usize {
        self.num_joints
    }

    /// `(num_frames, num_joints)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.num_frames(), self.num_joints)
    }

    pub fn frame(&self, frame: usize) -> &[Vec3] {
        let start = frame * self.num_joints;
        &self.coords[start..start + self.num_joints]
    }

    pub fn frame_mut(&mut self, frame: usize) -> &mut [Vec3] {
        let start = frame * self.num_joints;
        &mut self.coords[start..start + self.num_joints]
    }

    /// Coordinate of `joint` in `frame`.
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    pub fn joint(&self, frame: usize, joint: usize) -> &Vec3 {
        assert!(joint < self.num_joints, "joint index {joint} out of bounds");
        &self.coords[frame * self.num_joints + joint]
    }

    /// Mutable coordinate of `joint` in `frame`.
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    pub fn joint_mut(&mut self, frame: usize, joint: usize) -> &mut Vec3 {
        assert!(joint < self.num_joints, "joint index {joint} out of bounds");
        &mut self.coords[frame * self.num_joints + joint]
    }

    /// Frame-major view of all coordinates.
    pub fn as_slice(&self) -> &[Vec3] {
        &self.coords
    }

    pub fn into_inner(self) -> Vec<Vec3> {
        self.coords
    }
}
