//! `cman-play`: headless playback of a camera profile.
//!
//! Runs a [`CameraSession`] against a [`HeadlessHost`] from the start of a
//! level and writes one JSON record per rendered tic.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use cameraman::host::{HeadlessHost, HostCamera};
use cameraman::options::PlaybackOptions;
use cameraman::profile::CameraProfile;
use cameraman::session::{CameraSession, Phase, TicInput};
use clap::Parser;
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "cman-play", about = "Play a camera profile headlessly")]
struct Args {
    /// Camera profile (`.cman`; the extension may be omitted).
    profile: PathBuf,

    /// Playback options TOML file.
    #[arg(long, value_name = "FILE")]
    options: Option<PathBuf>,

    /// Fast-forward through the profile's delay.
    #[arg(long)]
    auto_skip: bool,

    /// Stop once the camera path completes.
    #[arg(long)]
    auto_exit: bool,

    /// Write tic records to FILE instead of stdout. Implies --auto-skip and
    /// --auto-exit.
    #[arg(long, value_name = "FILE")]
    dump: Option<PathBuf>,

    /// Upper bound on simulated tics.
    #[arg(long, value_name = "N")]
    max_tics: Option<u32>,

    /// Behave as if a recorded demo were playing (no player warps).
    #[arg(long)]
    demo_playback: bool,

    /// Save the merged playback options to FILE before playing, for reuse
    /// with --options.
    #[arg(long, value_name = "FILE")]
    save_options: Option<PathBuf>,
}

impl Args {
    fn playback_options(&self) -> anyhow::Result<PlaybackOptions> {
        let mut options = match &self.options {
            Some(path) => PlaybackOptions::load(path).with_context(|| {
                format!("loading options from {}", path.display())
            })?,
            None => PlaybackOptions::default(),
        };
        options.auto_skip |= self.auto_skip;
        options.auto_exit |= self.auto_exit;
        if let Some(dump) = &self.dump {
            options.dump = Some(dump.clone());
        }
        if let Some(max_tics) = self.max_tics {
            options.max_tics = max_tics;
        }
        if let Some(path) = &self.save_options {
            options.save(path).with_context(|| {
                format!("saving options to {}", path.display())
            })?;
            log::info!("Saved playback options to {}", path.display());
        }
        Ok(options.resolved())
    }
}

/// One line of output.
#[derive(Serialize)]
struct TicRecord {
    tic: i32,
    phase: Phase,
    #[serde(skip_serializing_if = "Option::is_none")]
    camera: Option<HostCamera>,
}

fn run(args: &Args) -> anyhow::Result<()> {
    let profile = CameraProfile::load(&args.profile)?;
    let options = args.playback_options()?;

    let out: Box<dyn Write> = match &options.dump {
        Some(path) => Box::new(File::create(path).with_context(|| {
            format!("creating dump file {}", path.display())
        })?),
        None => Box::new(io::stdout().lock()),
    };
    let mut out = BufWriter::new(out);

    let mut session = CameraSession::new(profile, &options);
    let skip_tics = session.skip_tics();
    let mut host = HeadlessHost {
        demo_playback: args.demo_playback,
        ..HeadlessHost::default()
    };

    let max_tics = i32::try_from(options.max_tics).unwrap_or(i32::MAX);
    let mut written = 0_u32;
    for level_time in 0..max_tics {
        host.skipping = skip_tics.is_some_and(|delay| level_time < delay);
        let phase = session.tick(
            TicInput {
                level_time,
                level_start: level_time == 0,
            },
            &mut host,
        );

        if !host.skipping {
            let record = TicRecord {
                tic: level_time,
                phase,
                camera: host.camera,
            };
            serde_json::to_writer(&mut out, &record)?;
            writeln!(out)?;
            written += 1;
        }

        if host.exit_requested {
            log::info!("Exit requested at tic {level_time}");
            break;
        }
    }

    out.flush()?;
    log::info!("Wrote {written} tic records");
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(e) = run(&args) {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}
