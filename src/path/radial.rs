//! Arc around an orbit center.
//!
//! Sweep angle, radius and center all interpolate with progress, so a
//! changing radius or a moving center turns the arc into a spiral.

use std::f32::consts::TAU;

use glam::Vec2;

use super::{distance_progress, CameraPose, PathSample};
use crate::angle::vector_bearing;
use crate::profile::{AngleMode, CameraProfile, Span, SpeedMode};

pub(super) fn evaluate(
    profile: &CameraProfile,
    t: f32,
    overshoot: bool,
) -> PathSample {
    let progress = match profile.speed_mode {
        SpeedMode::Distance => {
            let sweep = (profile.sweep.end - profile.sweep.start).abs();
            distance_progress(profile.speed, t, sweep)
        }
        SpeedMode::Time => profile.time_progress(t),
    };

    let snap = !overshoot && progress >= 1.0;
    let sweep = profile.sweep.at_or_end(progress, snap);
    let radius = profile.radius.at_or_end(progress, snap);
    let center = profile.center.at_or_end(progress, snap);
    let height = Span::new(profile.points[0].z, profile.points[1].z);

    let radians = sweep * TAU;
    let ground = center + Vec2::new(radians.cos(), radians.sin()) * radius;
    let mut pose = CameraPose {
        position: ground.extend(height.at_or_end(progress, snap)),
        yaw: profile.yaw.at_or_end(progress, snap),
        pitch: profile.pitch.at_or_end(progress, snap),
    };

    // Relative heading looks at the orbit center, not along the arc.
    if profile.angle_mode == AngleMode::Relative {
        pose.yaw += vector_bearing(center - ground);
    }

    PathSample { pose, progress }
}
