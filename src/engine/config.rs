use std::f32::consts::PI;

use super::types::Screen;
use crate::trig;

/// Render-target configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewConfig {
    /// Screen columns.
    pub width: usize,
    /// Screen rows.
    pub height: usize,
    /// Horizontal field of view in radians.
    pub fov: f32,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("screen size {0}x{1} must be non-zero")]
    ZeroSize(usize, usize),

    #[error("field of view {0} rad outside (0, pi)")]
    BadFov(f32),
}

impl Default for ViewConfig {
    /// 320×200 with the classic 0.66 camera plane (≈66.8°).
    fn default() -> Self {
        Self {
            width: 320,
            height: 200,
            fov: 2.0 * 0.66_f32.atan(),
        }
    }
}

impl ViewConfig {
    pub fn new(width: usize, height: usize, fov: f32) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::ZeroSize(width, height));
        }
        if !(fov > 0.0 && fov < PI) {
            return Err(ConfigError::BadFov(fov));
        }
        Ok(Self { width, height, fov })
    }

    /// Pre-derive the per-frame constants.
    ///
    /// ```text
    /// plane = tan(fov/2)
    /// focal = w / (2 * tan(fov/2))
    /// ```
    pub fn screen(&self) -> Screen {
        let half_w = self.width as f32 * 0.5;
        let plane = trig::tan(self.fov * 0.5);
        Screen {
            w: self.width,
            h: self.height,
            half_w,
            half_h: self.height as f32 * 0.5,
            plane,
            focal: half_w / plane,
        }
    }
}
