//! Camera path profiles.
//!
//! A [`CameraProfile`] is the static description of one camera run: when it
//! starts, which kind of path it follows, how fast, and how the camera yaw is
//! derived. Profiles are usually read from `.cman` files (see
//! [`CameraProfile::load`]) and stay immutable for the lifetime of a session.

mod loader;

use std::ops::{Add, Mul, Sub};

use glam::{Vec2, Vec3};

/// Longest supported angle smoothing window, in tics.
pub const MAX_ANGLE_BUFFER_LEN: usize = 1024;

/// Shape of the camera path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathMode {
    /// Straight segment from point 0 to point 1.
    #[default]
    Linear,
    /// Arc around a (possibly moving) center with a (possibly changing)
    /// radius.
    Radial,
    /// Quadratic Bezier curve through the three control points. Always
    /// time-based.
    Bezier,
}

/// How `speed` maps tics to progress along the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpeedMode {
    /// `speed` is map units (or turns, for radial paths) per tic.
    #[default]
    Distance,
    /// `speed` is the total duration of the path in tics.
    Time,
}

/// Whether yaw includes the heading of the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleMode {
    /// Yaw endpoints are offsets on top of the path heading.
    #[default]
    Relative,
    /// Yaw endpoints are used as-is.
    Absolute,
}

/// Start and end values of a linearly interpolated quantity.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Span<T> {
    /// Value at progress 0.
    pub start: T,
    /// Value at progress 1.
    pub end: T,
}

impl<T> Span<T>
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<f32, Output = T>,
{
    /// Span between two values.
    pub const fn new(start: T, end: T) -> Self {
        Self { start, end }
    }

    /// Value at `progress`, extrapolating outside `[0, 1]`.
    #[inline]
    pub fn at(&self, progress: f32) -> T {
        self.start + (self.end - self.start) * progress
    }

    /// Exact end value when `snap` is set, otherwise [`Span::at`].
    ///
    /// Paths that stop at their end use this so round-off in the
    /// interpolation can't leave them a hair short of (or past) the target.
    #[inline]
    pub fn at_or_end(&self, progress: f32, snap: bool) -> T {
        if snap {
            self.end
        } else {
            self.at(progress)
        }
    }
}

/// Static description of a camera run.
///
/// Only the control data for the active [`PathMode`] matters: linear paths
/// read `points[0..2]`, Bezier paths all three `points`, and radial paths the
/// `sweep`, `radius` and `center` spans plus the z of `points[0..2]`.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraProfile {
    /// Tics after level start before the camera engages. Negative disables
    /// the camera entirely.
    pub delay: i32,
    /// Path shape.
    pub path_mode: PathMode,
    /// Progress normalization. Ignored by Bezier paths.
    pub speed_mode: SpeedMode,
    /// Yaw derivation.
    pub angle_mode: AngleMode,
    /// Keep extrapolating past the end of the path instead of stopping on
    /// the final control values.
    pub overshoot: bool,
    /// Move the player along with the camera (not during demo playback).
    pub warp_player: bool,
    /// Hide the player sprite while the camera is active.
    pub hide_player: bool,
    /// Length of the yaw smoothing window for relative Bezier paths. 0 and 1
    /// disable smoothing.
    pub angle_buffer_len: usize,
    /// Speed or duration, depending on [`SpeedMode`].
    pub speed: f32,
    /// Control points 0, 1 and 2.
    pub points: [Vec3; 3],
    /// Yaw endpoints, in turns.
    pub yaw: Span<f32>,
    /// Pitch endpoints, in turns.
    pub pitch: Span<f32>,
    /// Radial sweep endpoints, in turns.
    pub sweep: Span<f32>,
    /// Radial distance endpoints.
    pub radius: Span<f32>,
    /// Radial orbit center endpoints.
    pub center: Span<Vec2>,
}

impl Default for CameraProfile {
    fn default() -> Self {
        Self {
            delay: 0,
            path_mode: PathMode::Linear,
            speed_mode: SpeedMode::Distance,
            angle_mode: AngleMode::Relative,
            overshoot: false,
            warp_player: false,
            hide_player: false,
            angle_buffer_len: 0,
            speed: 1.0,
            points: [Vec3::ZERO; 3],
            yaw: Span::default(),
            pitch: Span::default(),
            sweep: Span::default(),
            radius: Span::default(),
            center: Span::default(),
        }
    }
}

impl CameraProfile {
    /// Whether this profile ever engages the camera.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.delay >= 0
    }

    /// Size of the yaw smoothing window, if smoothing applies to this
    /// profile.
    ///
    /// Smoothing only makes sense where the yaw follows a noisy tangent
    /// estimate, i.e. relative Bezier paths.
    #[must_use]
    pub fn smoothing_window(&self) -> Option<usize> {
        (self.angle_buffer_len > 1
            && self.path_mode == PathMode::Bezier
            && self.angle_mode == AngleMode::Relative)
            .then_some(self.angle_buffer_len)
    }

    /// Progress for time-based paths. A zero duration never advances.
    #[inline]
    pub(crate) fn time_progress(&self, t: f32) -> f32 {
        if self.speed == 0.0 {
            0.0
        } else {
            t / self.speed
        }
    }
}
