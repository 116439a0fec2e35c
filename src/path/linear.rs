//! Straight path from point 0 to point 1.

use super::{distance_progress, CameraPose, PathSample};
use crate::angle::{vector_bearing, vector_length};
use crate::profile::{AngleMode, CameraProfile, Span, SpeedMode};

pub(super) fn evaluate(
    profile: &CameraProfile,
    t: f32,
    overshoot: bool,
) -> PathSample {
    let [start, end, _] = profile.points;
    // Speed and heading are horizontal; z just follows along.
    let direction = (end - start).truncate();

    let progress = match profile.speed_mode {
        SpeedMode::Distance => {
            distance_progress(profile.speed, t, vector_length(direction))
        }
        SpeedMode::Time => profile.time_progress(t),
    };

    let snap = !overshoot && progress >= 1.0;
    let mut pose = CameraPose {
        position: Span::new(start, end).at_or_end(progress, snap),
        yaw: profile.yaw.at_or_end(progress, snap),
        pitch: profile.pitch.at_or_end(progress, snap),
    };

    if profile.angle_mode == AngleMode::Relative {
        pose.yaw += vector_bearing(direction);
    }

    PathSample { pose, progress }
}
