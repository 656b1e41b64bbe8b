mod camera;
mod grid;
mod sprite;

pub use camera::CameraPose;
pub use grid::{Grid, GridError, OPEN};
pub use sprite::Sprite;
