//! Fast, low-precision trigonometry.
//!
//! Hues of packed colors are stored nowhere; they are recomputed from the a/b
//! offsets whenever needed. That makes hue computation part of the hot path
//! for gamut limiting and description matching, which only need about four
//! significant digits. The functions in this module trade precision for
//! speed and, more importantly, for determinism. [`atan2_turns`] in
//! particular evaluates exactly the same sequence of single-precision
//! operations that was used to bucket hues when generating the gamut tables.
//!
//! Angles are measured in *turns*, i.e., fractions of a full circle, with
//! radian variants for convenience.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

/// 1 / 2π
const TURNS_PER_RADIAN: f32 = 0.159154937;

// Odd Taylor terms for sin(2πt), i.e., (2π)ⁿ/n! with alternating signs.
#[allow(clippy::excessive_precision)]
const SIN_COEFFICIENTS: [f32; 5] = [
    6.28318548,
    -41.3417015,
    81.6052475,
    -76.7058563,
    42.0586929,
];

// Minimax polynomial for atan(a) with a in 0..=1.
#[allow(clippy::excessive_precision)]
const ATAN_C1: f32 = -0.0464964733;
#[allow(clippy::excessive_precision)]
const ATAN_C2: f32 = 0.159314215;
#[allow(clippy::excessive_precision)]
const ATAN_C3: f32 = 0.327622771;

// Abramowitz & Stegun 4.4.45 for asin/acos.
const ASIN_COEFFICIENTS: [f32; 4] = [1.5707288, -0.2121144, 0.0742610, -0.0187293];

// --------------------------------------------------------------------------------------------------------------------

/// Compute the sine of the angle in turns.
///
/// The argument is reduced to `-0.25..=0.25` by symmetry and then evaluated
/// with a ninth-order polynomial. The absolute error is below 4e-6.
pub fn sin_turns(turns: f32) -> f32 {
    let mut t = turns - turns.round();
    if 0.25 < t {
        t = 0.5 - t;
    } else if t < -0.25 {
        t = -0.5 - t;
    }

    let [c1, c3, c5, c7, c9] = SIN_COEFFICIENTS;
    let t2 = t * t;
    t * (c1 + t2 * (c3 + t2 * (c5 + t2 * (c7 + t2 * c9))))
}

/// Compute the cosine of the angle in turns.
#[inline]
pub fn cos_turns(turns: f32) -> f32 {
    sin_turns(turns + 0.25)
}

/// Compute the tangent of the angle in turns.
#[inline]
pub fn tan_turns(turns: f32) -> f32 {
    sin_turns(turns) / cos_turns(turns)
}

/// Evaluate the arctangent polynomial for a ratio `0..=1` and return turns.
#[inline]
fn atan_unit(a: f32) -> f32 {
    let s = a * a;
    ((((ATAN_C1 * s + ATAN_C2) * s - ATAN_C3) * s * a) + a) * TURNS_PER_RADIAN
}

/// Compute the arctangent in turns, with the result in `-0.25..=0.25`.
///
/// The absolute error is below 5e-5 turns.
pub fn atan_turns(value: f32) -> f32 {
    let magnitude = value.abs();
    let turns = if magnitude <= 1.0 {
        atan_unit(magnitude)
    } else {
        0.25 - atan_unit(1.0 / magnitude)
    };

    turns.copysign(value)
}

/// Compute the angle of the vector `(x, y)` in turns.
///
/// The result falls into `0..1` and its absolute error is below 5e-5 turns,
/// i.e., 3e-4 radians. For `y == 0` and non-negative `x`, including the
/// origin, the result is exactly zero. Vanishingly small negative `y`, which
/// would round up to a full turn, also yields zero. The sequence of operations
/// is fixed, since gamut tables are indexed by the hue bucket derived from this
/// function.
pub fn atan2_turns(y: f32, x: f32) -> f32 {
    if y == 0.0 && 0.0 <= x {
        return 0.0;
    }

    let ax = x.abs();
    let ay = y.abs();
    let mut turns = atan_unit(ax.min(ay) / ax.max(ay));

    if ax < ay {
        turns = 0.25 - turns;
    }
    if x < 0.0 {
        turns = 0.5 - turns;
    }
    if y < 0.0 {
        turns = 1.0 - turns;
    }
    if 1.0 <= turns {
        0.0
    } else {
        turns
    }
}

/// Compute the arcsine in turns, with the result in `-0.25..=0.25`.
///
/// The argument is clamped to `-1..=1`.
pub fn asin_turns(value: f32) -> f32 {
    asin(value) * TURNS_PER_RADIAN
}

/// Compute the arccosine in turns, with the result in `0..=0.5`.
///
/// The argument is clamped to `-1..=1`.
pub fn acos_turns(value: f32) -> f32 {
    acos(value) * TURNS_PER_RADIAN
}

// --------------------------------------------------------------------------------------------------------------------

/// Evaluate the Abramowitz & Stegun approximation of acos(|x|).
#[inline]
fn acos_unit(magnitude: f32) -> f32 {
    let [c0, c1, c2, c3] = ASIN_COEFFICIENTS;
    (1.0 - magnitude).sqrt() * (c0 + magnitude * (c1 + magnitude * (c2 + magnitude * c3)))
}

/// Compute the sine of the angle in radians.
#[inline]
pub fn sin(radians: f32) -> f32 {
    sin_turns(radians * TURNS_PER_RADIAN)
}

/// Compute the cosine of the angle in radians.
#[inline]
pub fn cos(radians: f32) -> f32 {
    cos_turns(radians * TURNS_PER_RADIAN)
}

/// Compute the tangent of the angle in radians.
#[inline]
pub fn tan(radians: f32) -> f32 {
    tan_turns(radians * TURNS_PER_RADIAN)
}

/// Compute the arctangent in radians.
#[inline]
pub fn atan(value: f32) -> f32 {
    atan_turns(value) * TAU
}

/// Compute the angle of the vector `(x, y)` in radians, with the result in
/// `-π..=π`.
pub fn atan2(y: f32, x: f32) -> f32 {
    let radians = atan2_turns(y, x) * TAU;
    if PI < radians {
        radians - TAU
    } else {
        radians
    }
}

/// Compute the arcsine in radians.
pub fn asin(value: f32) -> f32 {
    let value = value.clamp(-1.0, 1.0);
    (FRAC_PI_2 - acos_unit(value.abs())).copysign(value)
}

/// Compute the arccosine in radians.
pub fn acos(value: f32) -> f32 {
    let value = value.clamp(-1.0, 1.0);
    let radians = acos_unit(value.abs());
    if value < 0.0 {
        PI - radians
    } else {
        radians
    }
}

// --------------------------------------------------------------------------------------------------------------------
