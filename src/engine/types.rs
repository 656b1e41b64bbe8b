//! Per-frame results handed to the rasterizer.

/// Stand-in for "infinitely far": no wall hit, or the horizon row.
///
/// Rasterizers test `distance >= DIST_INFINITE` (or the `is_sentinel`
/// helpers) rather than comparing against a literal.
pub const DIST_INFINITE: f32 = 1e30;

/// Pixel format of a packed colour (0x00RRGGBB).
pub type Rgba = u32;

/// Nearest wall along one screen column's ray.
///
/// Exactly one per column, always present. When the ray leaves the grid,
/// runs out of steps, or there is no grid, `distance == DIST_INFINITE`
/// and `wall_type == 1` (the boundary reads as a generic solid wall).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    /// Perpendicular (fish-eye corrected) distance to the camera plane.
    pub distance: f32,
    /// Tile code of the wall cell; 0 only for a zero-length ray.
    pub wall_type: i32,
    /// 0 = crossed a vertical grid line (east/west face),
    /// 1 = crossed a horizontal one (north/south face).
    pub side: u8,
    pub hit_x: f32,
    pub hit_y: f32,
    /// Cell that stopped the ray.
    pub map_x: i32,
    pub map_y: i32,
    /// Horizontal texture coordinate across the wall face, in [0, 1].
    pub texture_x: f32,
}

impl RayHit {
    #[inline(always)]
    pub fn is_sentinel(&self) -> bool {
        self.distance >= DIST_INFINITE
    }
}

/// World position of the floor or ceiling seen through one pixel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloorCeilingPixel {
    pub world_x: f32,
    pub world_y: f32,
    /// `DIST_INFINITE` on the horizon row.
    pub distance: f32,
    pub is_floor: bool,
}

impl FloorCeilingPixel {
    #[inline(always)]
    pub fn is_sentinel(&self) -> bool {
        self.distance >= DIST_INFINITE
    }
}

/// A sprite that survived culling and occlusion, in screen space.
///
/// The draw rectangle is inclusive on both ends and lies inside
/// `[0, width) × [0, height)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpriteHit {
    /// Position of the sprite in the caller's input slice.
    pub index: usize,
    pub type_id: u16,
    /// Depth along the camera's forward axis.
    pub distance: f32,
    /// Unclipped centre column.
    pub screen_x: f32,
    /// Unclipped projected size in pixels.
    pub width: f32,
    pub height: f32,
    pub draw_start_x: i32,
    pub draw_end_x: i32,
    pub draw_start_y: i32,
    pub draw_end_y: i32,
}

/// Constants that depend on the frame-buffer and FOV, not on the map.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Screen {
    pub w: usize,
    pub h: usize,
    pub half_w: f32, // pre-derived for speed
    pub half_h: f32, // pre-derived for speed
    /// Half-length of the camera plane at unit depth: `tan(fov / 2)`.
    pub plane: f32,
    /// Pixels per map unit at unit depth, horizontally.
    pub focal: f32,
}
