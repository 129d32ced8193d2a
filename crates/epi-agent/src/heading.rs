//! The 8 fixed movement headings.
//!
//! Agents never steer continuously: a velocity is always one of the four
//! orthogonal or four diagonal unit directions scaled by the configured
//! speed.  Diagonals are normalized so all headings cover the same distance
//! per tick.

use std::f64::consts::FRAC_1_SQRT_2;

use epi_core::{SimRng, Vec2};

/// Unit vectors for the 8 headings, clockwise from "east".
pub const HEADINGS: [Vec2; 8] = [
    Vec2 { x: 1.0, y: 0.0 },
    Vec2 { x: FRAC_1_SQRT_2, y: FRAC_1_SQRT_2 },
    Vec2 { x: 0.0, y: 1.0 },
    Vec2 { x: -FRAC_1_SQRT_2, y: FRAC_1_SQRT_2 },
    Vec2 { x: -1.0, y: 0.0 },
    Vec2 { x: -FRAC_1_SQRT_2, y: -FRAC_1_SQRT_2 },
    Vec2 { x: 0.0, y: -1.0 },
    Vec2 { x: FRAC_1_SQRT_2, y: -FRAC_1_SQRT_2 },
];

/// Pick one of the 8 headings uniformly and scale it by `speed`.
pub fn random_velocity(rng: &mut SimRng, speed: f64) -> Vec2 {
    let i = rng.gen_range(0..HEADINGS.len());
    HEADINGS[i].scale(speed)
}
