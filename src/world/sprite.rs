use glam::Vec2;

/// World-space billboard fed to the sprite caster.
///
/// `width`/`height` are in map units; a `height` of 1.0 stands exactly as
/// tall as a wall.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sprite {
    pub pos: Vec2,
    pub type_id: u16,
    pub width: f32,
    pub height: f32,
}

impl Sprite {
    pub fn new(pos: Vec2, type_id: u16, width: f32, height: f32) -> Self {
        Self {
            pos,
            type_id,
            width,
            height,
        }
    }
}
