//! Per-tic camera state machine.
//!
//! A [`CameraSession`] owns everything that lives longer than a tic: the
//! profile, the activity flag, the last tangent heading and the smoothing
//! window. The host calls [`CameraSession::tick`] exactly once per
//! simulation tic.
//!
//! ```text
//! Disabled                      (no profile, or negative delay)
//! Pending ──delay elapsed──▶ Active ──progress ≥ 1──▶ Completed
//!    ▲                                                    │
//!    └───────────────────────level start──────────────────┘
//! ```

use serde::Serialize;

use crate::host::{CameraHost, HostCamera};
use crate::options::PlaybackOptions;
use crate::path::{self, CameraPose, PathSample};
use crate::profile::CameraProfile;
use crate::smoothing::AngleBuffer;

/// Clock input for one tic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TicInput {
    /// Tics since the current level started.
    pub level_time: i32,
    /// Whether this is the first tic of a level.
    pub level_start: bool,
}

/// Where the session stands after a tic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// No usable profile; the session never engages.
    Disabled,
    /// Waiting for the profile's delay to elapse.
    Pending,
    /// Following the path; the host shows the camera.
    Active,
    /// Past the end of the path.
    Completed,
}

impl Phase {
    /// Whether the session controls the camera in this phase. Stays true
    /// after completion so the host doesn't snap back to the player.
    #[must_use]
    pub fn is_engaged(self) -> bool {
        matches!(self, Self::Active | Self::Completed)
    }
}

/// Session-scoped values carried from one tic to the next.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SessionState {
    /// Set once the session has evaluated a pose since the last level
    /// start.
    pub was_active: bool,
    /// Last unwrapped Bezier tangent heading, in turns.
    pub prev_tangent_angle: f32,
}

/// Camera run over one profile.
#[derive(Debug, Clone)]
pub struct CameraSession {
    profile: CameraProfile,
    auto_skip: bool,
    auto_exit: bool,
    state: SessionState,
    buffer: Option<AngleBuffer>,
    phase: Phase,
    last_pose: Option<CameraPose>,
}

impl CameraSession {
    /// Session for `profile`. A negative delay yields a disabled session.
    #[must_use]
    pub fn new(profile: CameraProfile, options: &PlaybackOptions) -> Self {
        let options = options.resolved();
        let buffer = profile.smoothing_window().map(AngleBuffer::new);
        let phase = if profile.is_enabled() {
            log::info!(
                "Camera session: {:?} path, {:?} angles, delay {} tics",
                profile.path_mode,
                profile.angle_mode,
                profile.delay
            );
            Phase::Pending
        } else {
            Phase::Disabled
        };
        Self {
            profile,
            auto_skip: options.auto_skip,
            auto_exit: options.auto_exit,
            state: SessionState::default(),
            buffer,
            phase,
            last_pose: None,
        }
    }

    /// Session that never engages, for runs without a profile.
    #[must_use]
    pub fn disabled() -> Self {
        let profile = CameraProfile {
            delay: -1,
            ..CameraProfile::default()
        };
        Self::new(profile, &PlaybackOptions::default())
    }

    /// The session's profile.
    #[must_use]
    pub fn profile(&self) -> &CameraProfile {
        &self.profile
    }

    /// Phase after the most recent tic.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Carried-over state.
    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Smoothing window, if the profile uses one.
    #[must_use]
    pub fn angle_buffer(&self) -> Option<&AngleBuffer> {
        self.buffer.as_ref()
    }

    /// Last pose handed to the host since the last level start.
    #[must_use]
    pub fn last_pose(&self) -> Option<CameraPose> {
        self.last_pose
    }

    /// Tics the host may fast-forward at level start, when auto-skip is on.
    #[must_use]
    pub fn skip_tics(&self) -> Option<i32> {
        (self.auto_skip && self.profile.is_enabled())
            .then_some(self.profile.delay)
    }

    /// Advance one tic and drive `host` accordingly.
    ///
    /// Returns the new phase; [`Phase::is_engaged`] tells the host whether
    /// the camera overrides its own view this tic.
    pub fn tick<H>(&mut self, tic: TicInput, host: &mut H) -> Phase
    where
        H: CameraHost + ?Sized,
    {
        if !self.profile.is_enabled() {
            self.phase = Phase::Disabled;
            return self.phase;
        }

        if tic.level_start {
            self.state = SessionState::default();
            self.last_pose = None;
            host.clear_camera();
        }

        // Relative time is exactly 0 on the first tic after the delay.
        let relative = tic
            .level_time
            .saturating_sub(self.profile.delay)
            .saturating_sub(1);
        if relative < 0 {
            self.phase = Phase::Pending;
            return self.phase;
        }

        let previous = self.phase;
        let sample = self.sample(relative as f32);

        if sample.is_complete() {
            self.phase = Phase::Completed;
            if previous != Phase::Completed {
                log::info!(
                    "Camera path complete at level time {}",
                    tic.level_time
                );
            }
            if self.auto_exit && !host.is_skipping() {
                host.request_exit();
            }
        } else {
            self.phase = Phase::Active;
            if !self.state.was_active {
                log::debug!(
                    "Camera engaged at level time {}",
                    tic.level_time
                );
                host.reset_view_interpolation();
            }
            self.show(&sample.pose, host);
        }

        self.state.was_active = true;
        self.phase
    }

    /// Evaluate the path for relative time `t`, smoothing yaw if the
    /// profile asks for it.
    fn sample(&mut self, t: f32) -> PathSample {
        let profile = &self.profile;
        // The window is refreshed first; its look-ahead samples must not see
        // this tic's evaluation.
        if let Some(buffer) = self.buffer.as_mut() {
            buffer.advance(profile, t, &mut self.state);
        }
        let mut sample =
            path::evaluate(profile, t, profile.overshoot, &mut self.state);
        if let Some(buffer) = &self.buffer {
            sample.pose.yaw = buffer.average();
        }
        sample
    }

    fn show<H>(&mut self, pose: &CameraPose, host: &mut H)
    where
        H: CameraHost + ?Sized,
    {
        let camera = HostCamera::from_pose(pose);
        host.set_camera(camera);
        if self.profile.warp_player && !host.is_demo_playback() {
            host.warp_player(camera);
        }
        if self.profile.hide_player {
            host.hide_player();
        }
        self.last_pose = Some(*pose);
    }
}
