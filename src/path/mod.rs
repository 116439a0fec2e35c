//! Path evaluators.
//!
//! Each [`PathMode`] has one evaluator that turns a profile and a time value
//! (in tics since the camera engaged) into a [`CameraPose`] plus the
//! normalized progress along the path. [`evaluate`] is the single dispatch
//! point.
//!
//! With `overshoot` off, a progress of 1 or more snaps to the exact terminal
//! control values so floating round-off never carries the camera past the
//! end. With it on, the evaluators extrapolate in both directions; the
//! smoothing look-ahead relies on this.

mod bezier;
mod linear;
mod radial;

use glam::Vec3;
use serde::Serialize;

use crate::profile::{CameraProfile, PathMode};
use crate::session::SessionState;

/// Camera position and orientation for one tic.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CameraPose {
    /// World position.
    pub position: Vec3,
    /// Yaw in turns. Not wrapped; may leave `[0, 1)` while smoothing.
    pub yaw: f32,
    /// Pitch in turns.
    pub pitch: f32,
}

/// Result of evaluating a path at one point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathSample {
    /// Pose at the requested time.
    pub pose: CameraPose,
    /// Normalized progress; 1 is the nominal end of the path.
    pub progress: f32,
}

impl PathSample {
    /// Whether the sample lies at or past the end of the path.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }
}

/// Evaluate the profile's path at time `t`.
///
/// Only relative Bezier paths touch `state`: they unwrap their tangent
/// heading against the previous one and store the result.
pub fn evaluate(
    profile: &CameraProfile,
    t: f32,
    overshoot: bool,
    state: &mut SessionState,
) -> PathSample {
    match profile.path_mode {
        PathMode::Linear => linear::evaluate(profile, t, overshoot),
        PathMode::Radial => radial::evaluate(profile, t, overshoot),
        PathMode::Bezier => bezier::evaluate(profile, t, overshoot, state),
    }
}

/// Progress for distance-based paths: `speed * t / extent`.
///
/// A zero extent means there is nowhere to travel, so the path counts as
/// already complete.
fn distance_progress(speed: f32, t: f32, extent: f32) -> f32 {
    if extent == 0.0 {
        1.0
    } else {
        speed * t / extent
    }
}
