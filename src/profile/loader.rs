//! `.cman` profile files.
//!
//! One `key = value` parameter per line, in any order. Lines that don't fit
//! that shape, unknown keys and out-of-range mode values are skipped, so a
//! profile written by a newer authoring tool still loads.

use std::path::{Path, PathBuf};

use super::{
    AngleMode, CameraProfile, PathMode, SpeedMode, MAX_ANGLE_BUFFER_LEN,
};
use crate::error::CmanError;

const PROFILE_EXTENSION: &str = "cman";

impl CameraProfile {
    /// Load a profile from disk.
    ///
    /// The path is tried as given, then with a `.cman` extension appended.
    pub fn load(path: &Path) -> Result<Self, CmanError> {
        let path = resolve_profile_path(path)?;
        log::info!("Loading camera profile: {}", path.display());
        let content = std::fs::read_to_string(&path)?;
        Ok(Self::parse(&content))
    }

    /// Parse profile text. Never fails: anything unusable is ignored and the
    /// corresponding fields keep their defaults.
    #[must_use]
    pub fn parse(source: &str) -> Self {
        let mut profile = Self::default();
        for line in source.lines() {
            let Some((key, value)) = split_param(line) else {
                continue;
            };
            log::debug!(" camera param: {key} = {value}");
            profile.apply_param(key, value);
        }
        profile
    }

    fn apply_param(&mut self, key: &str, value: f32) {
        match key {
            "delay" => self.delay = value as i32,
            "path_mode" => match value as i32 {
                0 => self.path_mode = PathMode::Linear,
                1 => self.path_mode = PathMode::Radial,
                2 => self.path_mode = PathMode::Bezier,
                _ => ignore_mode(key, value),
            },
            "speed_mode" => match value as i32 {
                0 => self.speed_mode = SpeedMode::Distance,
                1 => self.speed_mode = SpeedMode::Time,
                _ => ignore_mode(key, value),
            },
            "angle_mode" => match value as i32 {
                0 => self.angle_mode = AngleMode::Relative,
                1 => self.angle_mode = AngleMode::Absolute,
                _ => ignore_mode(key, value),
            },
            "overshoot" => self.overshoot = flag(value),
            "warp_player" => self.warp_player = flag(value),
            "hide_player" => self.hide_player = flag(value),
            "ga_buffer_len" => self.angle_buffer_len = buffer_len(value),
            "speed" => self.speed = value,
            "x0" => self.points[0].x = value,
            "y0" => self.points[0].y = value,
            "z0" => self.points[0].z = value,
            "x1" => self.points[1].x = value,
            "y1" => self.points[1].y = value,
            "z1" => self.points[1].z = value,
            "x2" => self.points[2].x = value,
            "y2" => self.points[2].y = value,
            "z2" => self.points[2].z = value,
            "a0" => self.yaw.start = value,
            "a1" => self.yaw.end = value,
            "p0" => self.pitch.start = value,
            "p1" => self.pitch.end = value,
            "ra0" => self.sweep.start = value,
            "ra1" => self.sweep.end = value,
            "r0" => self.radius.start = value,
            "r1" => self.radius.end = value,
            "cx0" => self.center.start.x = value,
            "cy0" => self.center.start.y = value,
            "cx1" => self.center.end.x = value,
            "cy1" => self.center.end.y = value,
            _ => log::debug!(" ignoring unknown camera param: {key}"),
        }
    }
}

/// Split `key = value`, tolerating trailing text after the number.
fn split_param(line: &str) -> Option<(&str, f32)> {
    let (key, rest) = line.split_once('=')?;
    let key = key.trim();
    if key.is_empty() || key.contains(char::is_whitespace) {
        return None;
    }
    let value = rest.split_whitespace().next()?.parse().ok()?;
    Some((key, value))
}

fn flag(value: f32) -> bool {
    value as i32 != 0
}

fn buffer_len(value: f32) -> usize {
    let len = (value as i32).max(0) as usize;
    if len > MAX_ANGLE_BUFFER_LEN {
        log::warn!(
            "ga_buffer_len {len} exceeds {MAX_ANGLE_BUFFER_LEN}, capping"
        );
        return MAX_ANGLE_BUFFER_LEN;
    }
    len
}

fn ignore_mode(key: &str, value: f32) {
    log::warn!("ignoring unsupported {key} value {value}");
}

fn resolve_profile_path(path: &Path) -> Result<PathBuf, CmanError> {
    if path.is_file() {
        return Ok(path.to_path_buf());
    }
    let mut with_ext = path.as_os_str().to_owned();
    with_ext.push(".");
    with_ext.push(PROFILE_EXTENSION);
    let with_ext = PathBuf::from(with_ext);
    if with_ext.is_file() {
        return Ok(with_ext);
    }
    Err(CmanError::ProfileNotFound(path.to_path_buf()))
}
