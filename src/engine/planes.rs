//! Floor / ceiling projection, one screen row at a time.
//!
//! The eye sits half a wall above the floor, so a row `p` pixels from the
//! horizon sees the plane at depth `(h / 2) / |p|` (walls are `h / depth`
//! pixels tall, which makes floor and wall bases meet).

use glam::Vec2;

use super::{
    Engine,
    types::{DIST_INFINITE, FloorCeilingPixel},
};
use crate::{trig, world::CameraPose};

/// Pitch is clamped to ±this many radians before projection.
pub const MAX_PITCH: f32 = 1.2;

impl Engine {
    /// Screen row of the horizon for `pitch`; + pitch moves it down.
    ///
    /// Always a whole row, so exactly one row per frame is the horizon.
    /// A NaN pitch counts as level.
    #[inline]
    pub fn horizon(&self, pitch: f32) -> f32 {
        let pitch = if pitch.is_nan() {
            0.0
        } else {
            pitch.clamp(-MAX_PITCH, MAX_PITCH)
        };
        let h = self.screen.h;
        (h / 2) as f32 + (trig::tan(pitch) * h as f32).round()
    }

    /// Project screen row `row` onto the floor (below the horizon) or the
    /// ceiling (above it). One pixel per column, left to right.
    pub fn cast_floor_ceiling(&self, row: usize, cam: &CameraPose) -> Vec<FloorCeilingPixel> {
        let mut out = Vec::with_capacity(self.screen.w);
        self.cast_floor_ceiling_into(row, cam, &mut out);
        out
    }

    /// Like [`Engine::cast_floor_ceiling`], reusing `out`'s allocation.
    pub fn cast_floor_ceiling_into(
        &self,
        row: usize,
        cam: &CameraPose,
        out: &mut Vec<FloorCeilingPixel>,
    ) {
        out.clear();
        let w = self.screen.w;

        // signed pixel offset from the horizon: >0 floor, <0 ceiling
        let p = row as f32 - self.horizon(cam.pitch);
        let is_floor = p > 0.0;

        if p == 0.0 {
            out.extend((0..w).map(|_| FloorCeilingPixel {
                world_x: cam.pos.x,
                world_y: cam.pos.y,
                distance: DIST_INFINITE,
                is_floor,
            }));
            return;
        }

        let distance = self.screen.half_h / p.abs();

        // edge rays, interpolated through column centres
        let fwd = cam.forward();
        let plane = cam.right() * self.screen.plane;
        let ray_l = fwd - plane;
        let ray_r = fwd + plane;
        let step: Vec2 = (ray_r - ray_l) * (distance / w as f32);
        let mut world = cam.pos + ray_l * distance + step * 0.5;

        out.extend((0..w).map(|_| {
            let px = FloorCeilingPixel {
                world_x: world.x,
                world_y: world.y,
                distance,
                is_floor,
            };
            world += step;
            px
        }));
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
