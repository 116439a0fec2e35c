//! End-to-end playback: `.cman` text in, host camera overrides out.

use std::path::PathBuf;

use cameraman::angle::Bam;
use cameraman::host::{HeadlessHost, HostCamera};
use cameraman::options::PlaybackOptions;
use cameraman::profile::CameraProfile;
use cameraman::session::{CameraSession, Phase, TicInput};
use tempfile::tempdir;

const ORBIT: &str = "\
# quarter orbit around the origin, looking in
path_mode = 1
speed_mode = 1
delay = 2
speed = 20
ra0 = 0
ra1 = 0.25
r0 = 50
r1 = 50
z0 = 41
z1 = 41
";

const VALLEY: &str = "\
path_mode = 2
speed = 40
ga_buffer_len = 8
x0 = -100
y0 = 100
x1 = 0
y1 = 0
x2 = 100
y2 = 100
z2 = 64
";

fn tic(level_time: i32) -> TicInput {
    TicInput {
        level_time,
        level_start: level_time == 0,
    }
}

/// Run from level start until exit or `max_tics`, collecting what the host
/// shows on every tic it doesn't skip.
fn play(
    session: &mut CameraSession,
    host: &mut HeadlessHost,
    max_tics: i32,
) -> Vec<(i32, Phase, Option<HostCamera>)> {
    let skip = session.skip_tics();
    let mut shown = Vec::new();
    for level_time in 0..max_tics {
        host.skipping = skip.is_some_and(|delay| level_time < delay);
        let phase = session.tick(tic(level_time), host);
        if !host.skipping {
            shown.push((level_time, phase, host.camera));
        }
        if host.exit_requested {
            break;
        }
    }
    shown
}

#[test]
fn orbit_looks_at_center() {
    let profile = CameraProfile::parse(ORBIT);
    let mut session = CameraSession::new(profile, &PlaybackOptions::default());
    let mut host = HeadlessHost::default();
    let shown = play(&mut session, &mut host, 40);

    assert_eq!(shown.len(), 40);
    assert!(shown[..3]
        .iter()
        .all(|(_, p, c)| *p == Phase::Pending && c.is_none()));

    let (_, phase, camera) = shown[3];
    assert_eq!(phase, Phase::Active);
    let camera = camera.unwrap();
    assert_eq!((camera.x, camera.y, camera.z), (50 << 16, 0, 41 << 16));
    assert_eq!(camera.angle, Bam(0x8000_0000));

    assert_eq!(shown[22].1, Phase::Active);
    assert!(shown[23..].iter().all(|(_, p, _)| *p == Phase::Completed));
    assert_eq!(host.camera_updates, 20);
    assert_eq!(host.interpolation_resets, 1);
}

#[test]
fn capture_skips_lead_in_and_exits() {
    let profile = CameraProfile::parse(ORBIT);
    let options = PlaybackOptions {
        dump: Some(PathBuf::from("unused.jsonl")),
        ..PlaybackOptions::default()
    };
    let mut session = CameraSession::new(profile, &options);
    assert_eq!(session.skip_tics(), Some(2));
    let mut host = HeadlessHost::default();
    let shown = play(&mut session, &mut host, 1000);

    assert_eq!(shown.first().map(|s| s.0), Some(2));
    assert_eq!(
        shown.last().map(|s| (s.0, s.1)),
        Some((23, Phase::Completed))
    );
    assert!(host.exit_requested);
}

#[test]
fn smoothed_bezier_heading_stays_continuous() {
    let profile = CameraProfile::parse(VALLEY);
    assert_eq!(profile.smoothing_window(), Some(8));
    let mut session = CameraSession::new(profile, &PlaybackOptions::default());
    let mut host = HeadlessHost::default();

    let mut tangents = Vec::new();
    let mut yaws = Vec::new();
    for level_time in 0..40 {
        let _ = session.tick(tic(level_time), &mut host);
        if let Some(pose) = session.last_pose() {
            tangents.push(session.state().prev_tangent_angle);
            yaws.push(pose.yaw);
        }
    }

    assert_eq!(tangents.len(), 39);
    for pair in tangents.windows(2) {
        assert!((pair[1] - pair[0]).abs() < 0.5, "tangent jumped: {pair:?}");
    }
    for pair in yaws.windows(2) {
        assert!((pair[1] - pair[0]).abs() < 0.1, "yaw jumped: {pair:?}");
    }
    let buffer = session.angle_buffer().unwrap();
    assert_eq!(buffer.sum(), buffer.values().iter().sum::<f32>());
}

#[test]
fn loads_profile_without_extension() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("orbit.cman"), ORBIT).unwrap();

    let loaded = CameraProfile::load(&dir.path().join("orbit")).unwrap();
    assert_eq!(loaded, CameraProfile::parse(ORBIT));
    assert!(CameraProfile::load(&dir.path().join("missing")).is_err());
}

#[test]
fn replays_are_identical() {
    let run = || {
        let mut session = CameraSession::new(
            CameraProfile::parse(VALLEY),
            &PlaybackOptions::default(),
        );
        let mut host = HeadlessHost::default();
        play(&mut session, &mut host, 80)
    };
    assert_eq!(run(), run());
}

#[test]
fn camera_serializes_in_host_units() {
    let mut session = CameraSession::new(
        CameraProfile::parse(ORBIT),
        &PlaybackOptions::default(),
    );
    let mut host = HeadlessHost::default();
    let _ = play(&mut session, &mut host, 4);

    let json = serde_json::to_value(host.camera.unwrap()).unwrap();
    assert_eq!(json["x"], 50 << 16);
    assert_eq!(json["angle"], 0x8000_0000_u32);
}
