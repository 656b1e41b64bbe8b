//! Per-column wall casting by grid traversal (DDA).

use glam::Vec2;

use super::{
    Engine,
    types::{DIST_INFINITE, RayHit},
};
use crate::world::{CameraPose, Grid, OPEN};

/// Cell boundaries a single ray may cross before it is reported as a
/// boundary hit. Only matters on maps larger than this in both axes.
pub const MAX_DDA_STEPS: u32 = 4096;

/// Sentinel result: "far away, generic wall".
#[inline]
fn boundary(pos: Vec2, map_x: i32, map_y: i32, side: u8) -> RayHit {
    RayHit {
        distance: DIST_INFINITE,
        wall_type: 1,
        side,
        hit_x: pos.x,
        hit_y: pos.y,
        map_x,
        map_y,
        texture_x: 0.0,
    }
}

/// Distance along the ray to cross one whole cell on an axis.
/// A zero component never crosses, so it gets the sentinel instead of inf
/// (keeps `0 * delta` finite in the first-boundary product).
#[inline(always)]
fn delta_dist(d: f32) -> f32 {
    if d == 0.0 { DIST_INFINITE } else { (1.0 / d).abs() }
}

/// March one ray through `grid`.
///
/// The returned distance is in multiples of `ray_dir`; when `ray_dir` is
/// `forward + right * k` with a unit `forward` it is the perpendicular
/// distance to the camera plane.
pub(super) fn march(grid: Option<&Grid>, pos: Vec2, ray_dir: Vec2) -> RayHit {
    let mut map_x = pos.x.floor() as i32;
    let mut map_y = pos.y.floor() as i32;

    let grid = match grid {
        Some(g) if !g.is_empty() => g,
        _ => return boundary(pos, map_x, map_y, 0),
    };
    if ray_dir == Vec2::ZERO {
        return RayHit {
            wall_type: OPEN,
            ..boundary(pos, map_x, map_y, 0)
        };
    }

    // ──────────────────────────────────────────────────────────────────────
    // 1. per-axis cell crossing cost, step direction, first boundary
    // ──────────────────────────────────────────────────────────────────────
    let delta_x = delta_dist(ray_dir.x);
    let delta_y = delta_dist(ray_dir.y);

    let (step_x, mut side_dist_x) = if ray_dir.x < 0.0 {
        (-1, (pos.x - map_x as f32) * delta_x)
    } else {
        (1, (map_x as f32 + 1.0 - pos.x) * delta_x)
    };
    let (step_y, mut side_dist_y) = if ray_dir.y < 0.0 {
        (-1, (pos.y - map_y as f32) * delta_y)
    } else {
        (1, (map_y as f32 + 1.0 - pos.y) * delta_y)
    };

    // ──────────────────────────────────────────────────────────────────────
    // 2. walk cell boundaries until a wall, the edge, or the step budget
    // ──────────────────────────────────────────────────────────────────────
    let mut side = 0u8;
    let mut wall_type = None;
    for _ in 0..MAX_DDA_STEPS {
        if side_dist_x < side_dist_y {
            side_dist_x += delta_x;
            map_x += step_x;
            side = 0;
        } else {
            side_dist_y += delta_y;
            map_y += step_y;
            side = 1;
        }
        match grid.get(map_x, map_y) {
            None => return boundary(pos, map_x, map_y, side),
            Some(OPEN) => {}
            Some(tile) => {
                wall_type = Some(tile);
                break;
            }
        }
    }
    let Some(wall_type) = wall_type else {
        return boundary(pos, map_x, map_y, side);
    };

    // ──────────────────────────────────────────────────────────────────────
    // 3. perpendicular distance: back off the step that entered the wall
    // ──────────────────────────────────────────────────────────────────────
    let distance = if side == 0 {
        side_dist_x - delta_x
    } else {
        side_dist_y - delta_y
    };
    let hit = pos + ray_dir * distance;

    // ──────────────────────────────────────────────────────────────────────
    // 4. texture U along the face, mirrored so it grows left → right
    // ──────────────────────────────────────────────────────────────────────
    let along = if side == 0 { hit.y } else { hit.x };
    let mut u = along - along.floor();
    if (side == 0 && ray_dir.x < 0.0) || (side == 1 && ray_dir.y > 0.0) {
        u = 1.0 - u;
    }

    RayHit {
        distance,
        wall_type,
        side,
        hit_x: hit.x,
        hit_y: hit.y,
        map_x,
        map_y,
        texture_x: u.clamp(0.0, 1.0),
    }
}

impl Engine {
    /// Cast a single ray from `pos` along `ray_dir`. See [`RayHit`] for
    /// the sentinel contract.
    pub fn cast_ray(&self, pos: Vec2, ray_dir: Vec2) -> RayHit {
        march(self.grid.as_ref(), pos, ray_dir)
    }

    /// Ray direction through the centre of screen column `x`.
    #[inline]
    pub fn column_ray_dir(&self, cam: &CameraPose, x: usize) -> Vec2 {
        let camera_x = 2.0 * (x as f32 + 0.5) / self.screen.w as f32 - 1.0;
        cam.forward() + cam.right() * (self.screen.plane * camera_x)
    }

    /// One [`RayHit`] per screen column, left to right.
    pub fn cast_rays(&self, cam: &CameraPose) -> Vec<RayHit> {
        let mut out = Vec::with_capacity(self.screen.w);
        self.cast_rays_into(cam, &mut out);
        out
    }

    /// Like [`Engine::cast_rays`], reusing `out`'s allocation.
    pub fn cast_rays_into(&self, cam: &CameraPose, out: &mut Vec<RayHit>) {
        out.clear();
        let grid = self.grid.as_ref();
        out.extend((0..self.screen.w).map(|x| march(grid, cam.pos, self.column_ray_dir(cam, x))));
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
