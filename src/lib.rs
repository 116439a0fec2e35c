// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Deterministic scripted camera paths for demo playback.
//!
//! A [`profile::CameraProfile`] describes a path (linear, radial orbit or
//! quadratic Bezier), a speed and a handful of mode flags. Once per
//! simulation tic a [`session::CameraSession`] evaluates that path and hands
//! the resulting pose to the host engine, so the same demo always produces
//! the same camera motion.
//!
//! # Key entry points
//!
//! - [`session::CameraSession`] - the per-tic state machine
//! - [`profile::CameraProfile`] - path description, loaded from `.cman` files
//! - [`host::CameraHost`] - the seam between the session and the engine
//! - [`options::PlaybackOptions`] - auto-skip / auto-exit / capture settings
//!
//! # Architecture
//!
//! Each tic flows one way: the session selects the evaluator in [`path`]
//! for the profile's path mode, optionally feeds a look-ahead
//! [`smoothing::AngleBuffer`] first, and reports the pose to the host in the
//! host's native units (16.16 fixed point and binary angles, see [`angle`]).
//! No wall clock and no randomness are involved, so output is bit-for-bit
//! reproducible.

pub mod angle;
pub mod error;
pub mod host;
pub mod options;
pub mod path;
pub mod profile;
pub mod session;
pub mod smoothing;
