//! Billboard projection with per-column wall occlusion.

use super::{
    Engine,
    types::{RayHit, SpriteHit},
};
use crate::world::{CameraPose, Sprite};

/// Sprites nearer than this to the camera plane are culled; below it the
/// projected size is no longer a finite pixel count.
pub const SPRITE_NEAR: f32 = 1e-3;

impl Engine {
    /// Project `sprites` for this frame's pose and drop the ones that are
    /// behind the camera, off-screen, or hidden behind a nearer wall in
    /// every column they cover.
    ///
    /// `wall_hits` is [`Engine::cast_rays`] for the same pose and is only
    /// read as a per-column depth mask. Survivors come back farthest
    /// first, ready for painter's-algorithm compositing.
    pub fn cast_sprites(
        &self,
        sprites: &[Sprite],
        cam: &CameraPose,
        wall_hits: &[RayHit],
    ) -> Vec<SpriteHit> {
        let w = self.screen.w as i32;
        let h = self.screen.h as i32;
        let focal = self.screen.focal;
        let scale_v = self.screen.h as f32;
        let mut out = Vec::new();

        for (index, spr) in sprites.iter().enumerate() {
            // camera space -------------------------------------------------
            let rel = cam.to_cam(spr.pos);
            let depth = rel.y;
            if !(depth > SPRITE_NEAR) {
                continue; // behind, on the near plane, or NaN
            }
            let inv_depth = 1.0 / depth;

            // projected size and centre -----------------------------------
            let width = spr.width * focal * inv_depth;
            let height = spr.height * scale_v * inv_depth;
            let screen_x = self.screen.half_w + rel.x * focal * inv_depth;

            let x0 = (screen_x - width * 0.5).floor() as i32;
            let x1 = ((screen_x + width * 0.5).ceil() as i32).saturating_sub(1).max(x0);
            if x1 < 0 || x0 >= w {
                continue; // completely off-screen
            }

            // standing on the floor line at this depth
            let y_bottom = self.screen.half_h + 0.5 * scale_v * inv_depth;
            let y0 = (y_bottom - height).floor() as i32;
            let y1 = (y_bottom.ceil() as i32).saturating_sub(1).max(y0);
            if y1 < 0 || y0 >= h {
                continue;
            }

            let (sx, ex) = (x0.max(0), x1.min(w - 1));
            let (sy, ey) = (y0.max(0), y1.min(h - 1));

            // occlusion: visible if any covered column sees past its wall
            let visible = (sx..=ex).any(|col| {
                wall_hits
                    .get(col as usize)
                    .is_none_or(|hit| depth < hit.distance)
            });
            if !visible {
                continue;
            }

            out.push(SpriteHit {
                index,
                type_id: spr.type_id,
                distance: depth,
                screen_x,
                width,
                height,
                draw_start_x: sx,
                draw_end_x: ex,
                draw_start_y: sy,
                draw_end_y: ey,
            });
        }

        // far-to-near painter's algorithm so we overdraw correctly
        out.sort_by(|a, b| b.distance.total_cmp(&a.distance));
        out
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::walls::tests::{engine_with, room};
    use glam::vec2;

    fn spr(x: f32, y: f32, type_id: u16) -> Sprite {
        Sprite::new(vec2(x, y), type_id, 0.5, 1.0)
    }

    /// 11×11 room, camera near the south wall looking north.
    fn setup(rows: &[Vec<i32>]) -> (Engine, CameraPose, Vec<RayHit>) {
        let engine = engine_with(rows);
        let cam = CameraPose::looking(5.5, 9.5, 0.0, -1.0);
        let hits = engine.cast_rays(&cam);
        (engine, cam, hits)
    }

    #[test]
    fn empty_input_empty_output() {
        let (engine, cam, hits) = setup(&room(11));
        assert!(engine.cast_sprites(&[], &cam, &hits).is_empty());
    }

    #[test]
    fn behind_camera_is_culled() {
        let (engine, cam, hits) = setup(&room(11));
        let out = engine.cast_sprites(&[spr(5.5, 9.9, 1), spr(5.5, 6.0, 2)], &cam, &hits);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].type_id, 2);
        assert_eq!(out[0].index, 1);
    }

    #[test]
    fn sprite_on_the_camera_does_not_panic() {
        let (engine, cam, hits) = setup(&room(11));
        assert!(engine.cast_sprites(&[spr(5.5, 9.5, 1)], &cam, &hits).is_empty());
    }

    #[test]
    fn grazing_the_camera_plane_is_culled() {
        let (engine, cam, hits) = setup(&room(11));
        // straight ahead at subnormal and near-zero depths
        for dy in [1e-40_f32, 1e-30, 1e-4] {
            let out = engine.cast_sprites(&[spr(5.5, 9.5 - dy, 1)], &cam, &hits);
            assert!(out.is_empty(), "depth {dy}");
        }
        let out = engine.cast_sprites(&[spr(5.5, 9.49, 1)], &cam, &hits);
        assert_eq!(out.len(), 1);
        assert!(out[0].screen_x.is_finite() && out[0].width.is_finite());
    }

    #[test]
    fn hidden_behind_pillar_is_dropped() {
        let mut rows = room(11);
        rows[5][5] = 2; // pillar face at y = 6, depth 3.5
        let (engine, cam, hits) = setup(&rows);
        let out = engine.cast_sprites(&[spr(5.5, 3.5, 1), spr(5.5, 7.5, 2)], &cam, &hits);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].type_id, 2);
    }

    #[test]
    fn partly_hidden_sprite_survives() {
        let mut rows = room(11);
        rows[5][5] = 2;
        let (engine, cam, hits) = setup(&rows);
        // wide enough to poke out on both sides of the pillar
        let wide = Sprite::new(vec2(5.5, 3.5), 9, 4.0, 1.0);
        assert_eq!(engine.cast_sprites(&[wide], &cam, &hits).len(), 1);
    }

    #[test]
    fn off_screen_is_dropped() {
        let (engine, cam, hits) = setup(&room(11));
        // far to the right of a ~69° FOV
        assert!(engine.cast_sprites(&[spr(9.5, 9.0, 1)], &cam, &hits).is_empty());
    }

    #[test]
    fn ordered_farthest_first() {
        let (engine, cam, hits) = setup(&room(11));
        let sprites = [spr(5.5, 5.5, 2), spr(5.5, 7.5, 1), spr(5.5, 3.5, 3)];
        let out = engine.cast_sprites(&sprites, &cam, &hits);
        let ids: Vec<u16> = out.iter().map(|s| s.type_id).collect();
        assert_eq!(ids, [3, 2, 1]);
        assert!(out.windows(2).all(|w| w[0].distance > w[1].distance));
    }

    #[test]
    fn rect_is_clipped_to_screen() {
        let (engine, cam, hits) = setup(&room(11));
        let sprites = [
            Sprite::new(vec2(5.5, 9.3), 1, 1.0, 1.0), // depth 0.2, huge
            Sprite::new(vec2(4.0, 8.0), 2, 1.0, 2.0), // off-centre, partly off-screen
            spr(6.0, 4.0, 3),
        ];
        let out = engine.cast_sprites(&sprites, &cam, &hits);
        assert_eq!(out.len(), 3);
        for s in &out {
            assert!(0 <= s.draw_start_x && s.draw_start_x <= s.draw_end_x && s.draw_end_x < 64);
            assert!(0 <= s.draw_start_y && s.draw_start_y <= s.draw_end_y && s.draw_end_y < 48);
        }
    }

    #[test]
    fn unit_sprite_matches_wall_height() {
        let (engine, cam, hits) = setup(&room(11));
        // same depth as the north wall (8.5)
        let out = engine.cast_sprites(&[Sprite::new(vec2(5.5, 1.01), 1, 0.5, 1.0)], &cam, &hits);
        assert_eq!(out.len(), 1);
        let wall_px = 48.0 / hits[32].distance;
        assert!((out[0].height - wall_px).abs() < 0.1);
    }

    #[test]
    fn many_sprites_all_considered() {
        let (engine, cam, hits) = setup(&room(11));
        let sprites: Vec<Sprite> = (0..2000)
            .map(|i| spr(5.0 + (i % 10) as f32 * 0.1, 2.0 + (i / 10) as f32 * 0.03, i as u16))
            .collect();
        let out = engine.cast_sprites(&sprites, &cam, &hits);
        assert_eq!(out.len(), sprites.len());
        assert!(out.windows(2).all(|w| w[0].distance >= w[1].distance));
    }
}
