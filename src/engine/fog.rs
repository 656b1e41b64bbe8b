//! Distance fog.
//!
//! `blend = 1 - exp(-density * distance)`, so the base colour survives at
//! distance 0 and converges on the fog colour far away.

use glam::Vec3;

use super::types::Rgba;
use crate::defs::{DEFAULT_ATMOSPHERE, GenreInfo};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fog {
    pub color: Vec3,
    pub density: f32,
}

impl Default for Fog {
    fn default() -> Self {
        Self::from(&DEFAULT_ATMOSPHERE)
    }
}

impl From<&GenreInfo> for Fog {
    fn from(info: &GenreInfo) -> Self {
        Self {
            color: Vec3::from_array(info.fog_color),
            density: info.fog_density,
        }
    }
}

impl Fog {
    pub fn new(color: [f32; 3], density: f32) -> Self {
        Self {
            color: Vec3::from_array(color).clamp(Vec3::ZERO, Vec3::ONE),
            density: density.max(0.0),
        }
    }

    /// Fog weight in [0, 1]; non-decreasing in `distance`.
    #[inline]
    pub fn factor(&self, distance: f32) -> f32 {
        let d = distance.max(0.0);
        (1.0 - (-self.density * d).exp()).clamp(0.0, 1.0)
    }

    /// Blend a linear RGB colour (channels 0..1) toward the fog colour.
    #[inline]
    pub fn apply(&self, base: [f32; 3], distance: f32) -> [f32; 3] {
        let base = Vec3::from_array(base);
        base.lerp(self.color, self.factor(distance))
            .clamp(Vec3::ZERO, Vec3::ONE)
            .to_array()
    }

    /// Same as [`Fog::apply`] on a packed `0x00RRGGBB` colour.
    pub fn apply_rgb(&self, base: Rgba, distance: f32) -> Rgba {
        let unpack = |shift: u32| ((base >> shift) & 0xFF) as f32 / 255.0;
        let [r, g, b] = self.apply([unpack(16), unpack(8), unpack(0)], distance);
        let pack = |c: f32| (c * 255.0).round() as u32;
        (pack(r) << 16) | (pack(g) << 8) | pack(b)
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::DIST_INFINITE;

    fn close(a: [f32; 3], b: [f32; 3]) -> bool {
        a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-3)
    }

    #[test]
    fn zero_distance_keeps_base() {
        let fog = Fog::new([0.2, 0.3, 0.4], 0.1);
        assert!(close(fog.apply([0.9, 0.1, 0.5], 0.0), [0.9, 0.1, 0.5]));
    }

    #[test]
    fn far_distance_reaches_fog_color() {
        let fog = Fog::new([0.2, 0.3, 0.4], 0.1);
        assert!(close(fog.apply([0.9, 0.1, 0.5], 1e4), [0.2, 0.3, 0.4]));
        assert!(close(fog.apply([0.9, 0.1, 0.5], DIST_INFINITE), [0.2, 0.3, 0.4]));
    }

    #[test]
    fn effect_is_monotonic() {
        let fog = Fog::default();
        let base = [1.0, 1.0, 1.0];
        let mut prev = 0.0;
        for i in 0..200 {
            let d = i as f32 * 0.5;
            let out = fog.apply(base, d);
            let moved = (out[0] - base[0]).abs();
            assert!(moved + 1e-6 >= prev, "distance {d}");
            prev = moved;
        }
    }

    #[test]
    fn output_stays_in_range() {
        let fog = Fog::new([2.0, -1.0, 0.5], 0.3);
        for d in [0.0, 1.0, 10.0, -5.0] {
            let out = fog.apply([1.5, -0.5, 0.5], d);
            assert!(out.iter().all(|c| (0.0..=1.0).contains(c)));
        }
    }

    #[test]
    fn packed_colors_round_trip_at_zero() {
        let fog = Fog::new([0.0, 0.0, 0.0], 0.2);
        assert_eq!(fog.apply_rgb(0x00_12_34_56, 0.0), 0x00_12_34_56);
        assert_eq!(fog.apply_rgb(0x00_FF_FF_FF, 1e6), 0);
    }
}
