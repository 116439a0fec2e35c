//! Quadratic Bezier path.
//!
//! The curve starts at point 0, ends at point 2 and is pulled toward
//! point 1. Bezier paths are always time-based. In relative angle mode the
//! heading comes from a finite difference between this tic's position and
//! the previous tic's, unwrapped so it stays continuous across east.

use glam::Vec3;

use super::{CameraPose, PathSample};
use crate::angle::{unwrap_turns, vector_bearing};
use crate::profile::{AngleMode, CameraProfile};
use crate::session::SessionState;

pub(super) fn evaluate(
    profile: &CameraProfile,
    t: f32,
    overshoot: bool,
    state: &mut SessionState,
) -> PathSample {
    let progress = profile.time_progress(t);

    let snap = !overshoot && progress >= 1.0;
    let mut pose = CameraPose {
        position: if snap {
            profile.points[2]
        } else {
            curve_point(&profile.points, progress)
        },
        yaw: profile.yaw.at_or_end(progress, snap),
        pitch: profile.pitch.at_or_end(progress, snap),
    };

    if profile.angle_mode == AngleMode::Relative {
        let previous =
            curve_point(&profile.points, profile.time_progress(t - 1.0));
        let mut heading =
            vector_bearing((pose.position - previous).truncate());
        if state.was_active {
            heading = unwrap_turns(heading, state.prev_tangent_angle);
        }
        state.prev_tangent_angle = heading;
        pose.yaw += heading;
    }

    PathSample { pose, progress }
}

/// Point on the curve at parameter `p`; `p` may leave `[0, 1]`.
fn curve_point(points: &[Vec3; 3], p: f32) -> Vec3 {
    let [p0, p1, p2] = *points;
    let omp = 1.0 - p;
    p1 + (p0 - p1) * (omp * omp) + (p2 - p1) * (p * p)
}
