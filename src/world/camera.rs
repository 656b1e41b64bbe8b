use glam::{Vec2, vec2};

/// Viewer pose for one frame, supplied fresh on every cast.
///
/// * Map space is the grid: +X east, +Y south (rows grow downwards).
/// * `dir` need not be unit length; casters use [`CameraPose::forward`].
/// * `pitch` (radians, + looks down) only moves the floor/ceiling horizon.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub pos: Vec2,
    pub dir: Vec2,
    pub pitch: f32,
}

impl CameraPose {
    pub fn new(pos: Vec2, dir: Vec2, pitch: f32) -> Self {
        Self { pos, dir, pitch }
    }

    /// Level pose (`pitch = 0`) at `(x, y)` looking along `(dx, dy)`.
    pub fn looking(x: f32, y: f32, dx: f32, dy: f32) -> Self {
        Self::new(vec2(x, y), vec2(dx, dy), 0.0)
    }

    /*──────────────────────── derived vectors ───────────────────────*/

    /// Unit view direction. A zero-length `dir` faces east.
    #[inline(always)]
    pub fn forward(&self) -> Vec2 {
        self.dir.try_normalize().unwrap_or(Vec2::X)
    }

    /// Unit vector pointing to the screen's right.
    ///
    /// With +Y pointing south this is `forward` turned 90° clockwise on
    /// the map: north → east, east → south.
    #[inline(always)]
    pub fn right(&self) -> Vec2 {
        let f = self.forward();
        vec2(-f.y, f.x)
    }

    /// Transform a map point `p` into camera-local coords:
    ///  .x = lateral offset (+ right)
    ///  .y = depth along forward axis
    #[inline]
    pub fn to_cam(&self, p: Vec2) -> Vec2 {
        let rel = p - self.pos;
        vec2(rel.dot(self.right()), rel.dot(self.forward()))
    }

    /*──────────────────────── movement helpers ──────────────────────*/

    /// Move by `forward` units and `side` (strafe, + right).
    pub fn step(&mut self, forward: f32, side: f32) {
        self.pos += self.forward() * forward + self.right() * side;
    }

    /// Rotate the view direction (positive = turn right on screen).
    pub fn turn(&mut self, delta: f32) {
        let (s, c) = crate::trig::sin_cos(delta);
        self.dir = vec2(self.dir.x * c - self.dir.y * s, self.dir.x * s + self.dir.y * c);
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn forward_and_right_are_orthonormal() {
        let cam = CameraPose::looking(0.0, 0.0, 3.0, -1.5);
        let f = cam.forward();
        let r = cam.right();
        assert!((f.length() - 1.0).abs() < 1e-5);
        assert!((r.length() - 1.0).abs() < 1e-5);
        assert!(f.dot(r).abs() < 1e-5);
    }

    #[test]
    fn north_has_east_on_the_right() {
        let cam = CameraPose::looking(2.5, 2.5, 0.0, -1.0);
        assert!((cam.right() - Vec2::X).length() < 1e-6);
    }

    #[test]
    fn zero_direction_faces_east() {
        let cam = CameraPose::looking(1.0, 1.0, 0.0, 0.0);
        assert_eq!(cam.forward(), Vec2::X);
    }

    #[test]
    fn to_cam_axes_align() {
        let cam = CameraPose::looking(0.0, 0.0, 1.0, 0.0);
        // Point straight ahead at (10, 0) → (lateral=0, depth=10)
        assert!((cam.to_cam(vec2(10.0, 0.0)) - vec2(0.0, 10.0)).length() < 1e-5);
        // South is on the right when facing east
        assert!((cam.to_cam(vec2(0.0, 5.0)) - vec2(5.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn turn_quarter_right_from_north_faces_east() {
        let mut cam = CameraPose::looking(0.0, 0.0, 0.0, -1.0);
        cam.turn(FRAC_PI_2);
        assert!((cam.forward() - Vec2::X).length() < 1e-3);
    }

    #[test]
    fn step_moves_along_forward_and_right() {
        let mut cam = CameraPose::looking(1.0, 1.0, 0.0, -1.0);
        cam.step(1.0, 0.5);
        assert!((cam.pos - vec2(1.5, 0.0)).length() < 1e-5);
    }
}
