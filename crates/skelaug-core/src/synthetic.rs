//! Synthetic skeleton helpers.
//!
//! The functions here build small deterministic sequences: a rest pose laid
//! out as a vertical column of joints, animated by a per-joint sinusoid. No
//! randomness is involved, so tests can compare buffers exactly.

use crate::{Real, SequenceError, SkeletonSequence, Vec3};

/// Rest pose with `num_joints` joints stacked along +Y, `spacing` apart.
pub fn rest_pose(num_joints: usize, spacing: Real) -> Vec<Vec3> {
    (0..num_joints)
        .map(|j| Vec3::new(0.0, j as Real * spacing, 0.0))
        .collect()
}

/// Animate [`rest_pose`] with a lateral sway of `amplitude` over `num_frames`.
///
/// Joint `j` at frame `t` is offset by
/// `amplitude * sin(0.1 * t + 0.3 * j)` along X and a smaller cosine along Z.
pub fn swaying_sequence(
    num_frames: usize,
    num_joints: usize,
    amplitude: Real,
) -> Result<SkeletonSequence, SequenceError> {
    let pose = rest_pose(num_joints, 0.1);
    let mut coords = Vec::with_capacity(num_frames * num_joints);
    for t in 0..num_frames {
        for (j, p) in pose.iter().enumerate() {
            let phase = 0.1 * t as Real + 0.3 * j as Real;
            let sway = Vec3::new(amplitude * phase.sin(), 0.0, 0.5 * amplitude * phase.cos());
            coords.push(p + sway);
        }
    }
    SkeletonSequence::from_flat(coords, num_joints)
}
