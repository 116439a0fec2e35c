//! Angle and vector primitives shared by the path evaluators.
//!
//! Profiles express angles as turn fractions (`1.0` is a full revolution).
//! The host engine stores angles as 32-bit binary angle measures and
//! coordinates as 16.16 fixed point; everything crossing that boundary goes
//! through this module.

use std::f64::consts::TAU;

use glam::Vec2;
use serde::Serialize;

/// Number of fractional bits in the host's fixed-point and angle formats.
pub const FRAC_BITS: u32 = 16;

/// Angular resolution: distinct angle steps per full turn.
pub const ANGLE_STEPS: f32 = 65536.0;

/// Binary angle measure: a full turn spans the whole `u32` range.
///
/// Only the upper 16 bits are significant when converting from turn
/// fractions, matching the resolution of the host's angle tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Bam(pub u32);

impl Bam {
    /// Convert a turn fraction to BAM.
    ///
    /// The input is wrapped into `[0, 1)` first, so negative and
    /// multi-turn values are accepted.
    #[must_use]
    pub fn from_turns(turns: f32) -> Self {
        let frac = turns - turns.floor();
        // A fraction just below 1.0 can round to 65536 steps; the mask folds
        // it back onto 0.
        let steps = ((frac * ANGLE_STEPS).floor() as u32) & 0xFFFF;
        Self(steps << FRAC_BITS)
    }

    /// Convert back to a turn fraction in `[0, 1)`.
    #[must_use]
    pub fn to_turns(self) -> f32 {
        (self.0 >> FRAC_BITS) as f32 / ANGLE_STEPS
    }
}

/// Convert a world coordinate to the host's 16.16 fixed-point format.
///
/// Truncates toward zero; out-of-range values saturate.
#[must_use]
pub fn to_fixed(value: f32) -> i32 {
    (value * (1 << FRAC_BITS) as f32) as i32
}

/// Length of a 2D vector.
#[must_use]
pub fn vector_length(v: Vec2) -> f32 {
    v.length()
}

/// Bearing of a 2D vector from the origin, in turns within `[0, 1)`.
///
/// East is `0`, north is `0.25`. The result is quantized to the host's
/// angle resolution. The zero vector has bearing `0`.
#[must_use]
pub fn vector_bearing(v: Vec2) -> f32 {
    let radians = f64::from(v.y).atan2(f64::from(v.x));
    let turns = (radians / TAU).rem_euclid(1.0);
    Bam::from_turns(turns as f32).to_turns()
}

/// Shift `angle` by a whole turn when it crossed east (the 0/1 boundary)
/// relative to `reference`, so the two end up less than half a turn apart.
///
/// Given a reference of `0.99`, an angle of `0.01` becomes `1.01`; given a
/// reference of `0.01`, an angle of `0.99` becomes `-0.01`.
#[must_use]
pub fn unwrap_turns(angle: f32, reference: f32) -> f32 {
    let delta = angle - reference;
    if delta < -0.5 {
        angle + 1.0
    } else if delta > 0.5 {
        angle - 1.0
    } else {
        angle
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::*;

    #[test]
    fn bam_round_trip_truncates_to_resolution() {
        let mut rng = StdRng::seed_from_u64(0x00c0_ffee);
        for step in 0..=0xFFFF_u32 {
            let low: u32 = rng.random_range(0..0x1_0000);
            let bam = Bam((step << FRAC_BITS) | low);
            let back = Bam::from_turns(bam.to_turns());
            assert_eq!(back, Bam(step << FRAC_BITS));
        }
    }

    #[test]
    fn turns_wrap_into_unit_range() {
        assert_eq!(Bam::from_turns(0.25), Bam(0x4000_0000));
        assert_eq!(Bam::from_turns(1.25), Bam(0x4000_0000));
        assert_eq!(Bam::from_turns(-0.75), Bam(0x4000_0000));
        assert_eq!(Bam::from_turns(-1.0e-9), Bam(0));
        assert_eq!(Bam::from_turns(0.5).to_turns(), 0.5);
    }

    #[test]
    fn fixed_point_conversion() {
        assert_eq!(to_fixed(1.0), 0x1_0000);
        assert_eq!(to_fixed(-2.5), -0x2_8000);
        assert_eq!(to_fixed(1.0e12), i32::MAX);
    }

    #[test]
    fn bearing_of_axis_vectors() {
        assert_eq!(vector_bearing(Vec2::new(1.0, 0.0)), 0.0);
        assert_eq!(vector_bearing(Vec2::new(0.0, 1.0)), 0.25);
        assert_eq!(vector_bearing(Vec2::new(-1.0, 0.0)), 0.5);
        assert_eq!(vector_bearing(Vec2::new(0.0, -1.0)), 0.75);
        assert_eq!(vector_bearing(Vec2::ZERO), 0.0);
    }

    #[test]
    fn bearing_is_quantized() {
        let b = vector_bearing(Vec2::new(3.0, 4.0));
        assert_eq!(Bam::from_turns(b).to_turns(), b);
        assert!((b - 0.147_583_6).abs() < 1.0 / ANGLE_STEPS);
    }

    #[test]
    fn vector_length_is_euclidean() {
        assert_eq!(vector_length(Vec2::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn unwrap_across_east() {
        assert!((unwrap_turns(0.01, 0.99) - 1.01).abs() < 1e-6);
        assert!((unwrap_turns(0.99, 0.01) + 0.01).abs() < 1e-6);
        assert_eq!(unwrap_turns(0.3, 0.1), 0.3);
        assert!((unwrap_turns(1.02, 2.0) - 2.02).abs() < 1e-6);
    }
}
