//! Benchmarks for path evaluation and per-tic session updates.
#![allow(missing_docs)]

use std::hint::black_box;

use cameraman::host::HeadlessHost;
use cameraman::options::PlaybackOptions;
use cameraman::path;
use cameraman::profile::{CameraProfile, PathMode, Span};
use cameraman::session::{CameraSession, SessionState, TicInput};
use criterion::{criterion_group, criterion_main, Criterion};
use glam::{Vec2, Vec3};

fn profile(path_mode: PathMode) -> CameraProfile {
    CameraProfile {
        path_mode,
        speed: 400.0,
        points: [
            Vec3::new(-100.0, 100.0, 0.0),
            Vec3::ZERO,
            Vec3::new(100.0, 100.0, 64.0),
        ],
        sweep: Span::new(0.0, 0.75),
        radius: Span::new(128.0, 256.0),
        center: Span::new(Vec2::ZERO, Vec2::new(64.0, 64.0)),
        ..CameraProfile::default()
    }
}

fn evaluate_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    for mode in [PathMode::Linear, PathMode::Radial, PathMode::Bezier] {
        let profile = profile(mode);
        let mut state = SessionState {
            was_active: true,
            ..SessionState::default()
        };
        let _ = group.bench_function(format!("{mode:?}"), |b| {
            b.iter(|| {
                black_box(path::evaluate(
                    &profile,
                    black_box(123.0),
                    false,
                    &mut state,
                ))
            });
        });
    }
    group.finish();
}

fn session_tick_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("session_tick");

    for window in [0_usize, 8, 64, 1024] {
        let profile = CameraProfile {
            path_mode: PathMode::Bezier,
            angle_buffer_len: window,
            speed: 100_000.0,
            ..profile(PathMode::Bezier)
        };
        let mut session =
            CameraSession::new(profile, &PlaybackOptions::default());
        let mut host = HeadlessHost::default();
        let mut level_time = 0;

        let _ = group.bench_function(format!("window_{window}"), |b| {
            b.iter(|| {
                level_time += 1;
                black_box(session.tick(
                    TicInput {
                        level_time,
                        level_start: false,
                    },
                    &mut host,
                ))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, evaluate_benchmark, session_tick_benchmark);
criterion_main!(benches);
