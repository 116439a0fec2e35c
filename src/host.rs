//! The seam between a [`CameraSession`](crate::session::CameraSession) and
//! the engine that owns the view.
//!
//! The session never touches engine state directly: it asks a
//! [`CameraHost`] to show a camera, reset view interpolation, move or hide
//! the player, or exit. [`HeadlessHost`] is a recording implementation used
//! by the `cman-play` driver and by tests.

use serde::Serialize;

use crate::angle::{to_fixed, Bam};
use crate::path::CameraPose;

/// Camera override in the host's native units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct HostCamera {
    /// X in 16.16 fixed point.
    pub x: i32,
    /// Y in 16.16 fixed point.
    pub y: i32,
    /// Z in 16.16 fixed point.
    pub z: i32,
    /// Yaw, wrapped into a single turn.
    pub angle: Bam,
    /// Pitch, wrapped into a single turn.
    pub pitch: Bam,
}

impl HostCamera {
    /// Convert a pose to host units. Yaw and pitch wrap here, and only here.
    #[must_use]
    pub fn from_pose(pose: &CameraPose) -> Self {
        Self {
            x: to_fixed(pose.position.x),
            y: to_fixed(pose.position.y),
            z: to_fixed(pose.position.z),
            angle: Bam::from_turns(pose.yaw),
            pitch: Bam::from_turns(pose.pitch),
        }
    }
}

/// Engine services a camera session relies on.
pub trait CameraHost {
    /// Whether a recorded demo is being played back. Player warps are
    /// skipped then, since they would desync the demo.
    fn is_demo_playback(&self) -> bool;

    /// Whether the host is fast-forwarding without rendering.
    fn is_skipping(&self) -> bool;

    /// Drop any camera override and return to the player's view.
    fn clear_camera(&mut self);

    /// Show the view from `camera` instead of the player's.
    fn set_camera(&mut self, camera: HostCamera);

    /// Skip view interpolation for one frame so the camera cuts instead of
    /// sliding in from the previous view.
    fn reset_view_interpolation(&mut self);

    /// Move the player to `camera` with zero momentum. The host may reject
    /// the move (e.g. if blocked); the session does not retry.
    fn warp_player(&mut self, camera: HostCamera);

    /// Stop drawing the player.
    fn hide_player(&mut self);

    /// Ask the host to shut down cleanly.
    fn request_exit(&mut self);
}

/// Host without an engine behind it: records every request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadlessHost {
    /// Answer for [`CameraHost::is_demo_playback`].
    pub demo_playback: bool,
    /// Answer for [`CameraHost::is_skipping`].
    pub skipping: bool,
    /// Current camera override.
    pub camera: Option<HostCamera>,
    /// Where the player was last warped to.
    pub player: Option<HostCamera>,
    /// Whether the player has been hidden.
    pub player_hidden: bool,
    /// Number of camera overrides received.
    pub camera_updates: u32,
    /// Number of view interpolation resets requested.
    pub interpolation_resets: u32,
    /// Whether an exit was requested.
    pub exit_requested: bool,
}

impl CameraHost for HeadlessHost {
    fn is_demo_playback(&self) -> bool {
        self.demo_playback
    }

    fn is_skipping(&self) -> bool {
        self.skipping
    }

    fn clear_camera(&mut self) {
        self.camera = None;
    }

    fn set_camera(&mut self, camera: HostCamera) {
        self.camera = Some(camera);
        self.camera_updates += 1;
    }

    fn reset_view_interpolation(&mut self) {
        self.interpolation_resets += 1;
    }

    fn warp_player(&mut self, camera: HostCamera) {
        self.player = Some(camera);
    }

    fn hide_player(&mut self) {
        self.player_hidden = true;
    }

    fn request_exit(&mut self) {
        self.exit_requested = true;
    }
}
