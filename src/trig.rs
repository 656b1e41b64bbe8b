//! Table-driven sine / cosine / tangent.
//!
//! One process-wide set of tables at 0.1° resolution, built on first use
//! and never written again, so any thread may read it without locking.
//! Lookups linearly interpolate between the two neighbouring entries.

use once_cell::sync::Lazy;
use std::f64::consts::TAU;

/// Entries per revolution (0.1° steps).
pub const TRIG_TABLE_SIZE: usize = 3600;

/// `tan` falls back to the libm call when the nearest table angle has a
/// cosine smaller than this (i.e. within ~0.57° of an asymptote).
pub const TAN_ASYMPTOTE_COS: f32 = 0.01;

const STEP: f64 = TAU / TRIG_TABLE_SIZE as f64;

struct TrigTables {
    sin: Box<[f32]>,
    cos: Box<[f32]>,
    tan: Box<[f32]>,
}

static TABLES: Lazy<TrigTables> = Lazy::new(|| {
    let mut sin = Vec::with_capacity(TRIG_TABLE_SIZE);
    let mut cos = Vec::with_capacity(TRIG_TABLE_SIZE);
    let mut tan = Vec::with_capacity(TRIG_TABLE_SIZE);
    for i in 0..TRIG_TABLE_SIZE {
        let a = i as f64 * STEP;
        sin.push(a.sin() as f32);
        cos.push(a.cos() as f32);
        tan.push(a.tan() as f32);
    }
    TrigTables {
        sin: sin.into_boxed_slice(),
        cos: cos.into_boxed_slice(),
        tan: tan.into_boxed_slice(),
    }
});

/// Force the tables to be built now instead of on the first lookup.
pub fn warm_up() {
    Lazy::force(&TABLES);
}

/// Split `radians` into (lower index, upper index, fraction in [0,1)).
#[inline(always)]
fn locate(radians: f32) -> (usize, usize, f32) {
    let a = (radians as f64).rem_euclid(TAU);
    let pos = a / STEP;
    let i0 = pos.floor();
    let frac = (pos - i0) as f32;
    // rem_euclid may round up to exactly TAU
    let i0 = i0 as usize % TRIG_TABLE_SIZE;
    (i0, (i0 + 1) % TRIG_TABLE_SIZE, frac)
}

#[inline(always)]
fn lerp(table: &[f32], i0: usize, i1: usize, t: f32) -> f32 {
    table[i0] + (table[i1] - table[i0]) * t
}

#[inline]
pub fn sin(radians: f32) -> f32 {
    let (i0, i1, t) = locate(radians);
    lerp(&TABLES.sin, i0, i1, t)
}

#[inline]
pub fn cos(radians: f32) -> f32 {
    let (i0, i1, t) = locate(radians);
    lerp(&TABLES.cos, i0, i1, t)
}

/// Both at once; a single index computation.
#[inline]
pub fn sin_cos(radians: f32) -> (f32, f32) {
    let (i0, i1, t) = locate(radians);
    (lerp(&TABLES.sin, i0, i1, t), lerp(&TABLES.cos, i0, i1, t))
}

/// Tangent with an asymptote guard: near ±90° interpolating between a huge
/// positive and a huge negative entry is meaningless, so those angles are
/// computed directly.
#[inline]
pub fn tan(radians: f32) -> f32 {
    let (i0, i1, t) = locate(radians);
    let nearest = if t < 0.5 { i0 } else { i1 };
    if TABLES.cos[nearest].abs() < TAN_ASYMPTOTE_COS {
        return radians.tan();
    }
    lerp(&TABLES.tan, i0, i1, t)
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    const TOL: f32 = 1e-3;

    #[test]
    fn matches_std_over_a_sweep() {
        let mut a = -20.0_f32;
        while a < 20.0 {
            assert!((sin(a) - a.sin()).abs() < TOL, "sin({a})");
            assert!((cos(a) - a.cos()).abs() < TOL, "cos({a})");
            a += 0.0137;
        }
    }

    #[test]
    fn pythagorean_identity_holds_for_any_angle() {
        for &a in &[0.0, 0.3, -0.3, 1.0, PI, -PI, 7.5, -13.2, 100.0, -1234.5] {
            let (s, c) = sin_cos(a);
            assert!((s * s + c * c - 1.0).abs() < TOL, "angle {a}");
        }
    }

    #[test]
    fn negative_and_multi_turn_inputs_wrap() {
        let a = 0.7_f32;
        assert!((sin(a) - sin(a + 4.0 * PI)).abs() < TOL);
        assert!((cos(a) - cos(a - 6.0 * PI)).abs() < TOL);
        assert!((sin(-a) + sin(a)).abs() < TOL);
    }

    #[test]
    fn tan_matches_away_from_asymptotes() {
        for &a in &[0.0, 0.2, FRAC_PI_4, 1.2, -1.2, 2.0, 3.0] {
            assert!((tan(a) - a.tan()).abs() < 1e-2 * a.tan().abs().max(1.0), "tan({a})");
        }
    }

    #[test]
    fn tan_near_asymptote_falls_back() {
        let a = FRAC_PI_2 - 0.001;
        let expect = a.tan();
        assert!(((tan(a) - expect) / expect).abs() < 1e-3);
        let b = -FRAC_PI_2 + 0.002;
        assert!(tan(b).is_finite());
        assert!(tan(b) < -100.0);
    }
}
