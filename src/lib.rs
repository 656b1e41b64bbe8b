//! Visibility core of a grid-based first-person renderer.
//!
//! The crate never touches pixels. It turns a tile [`Grid`] plus a
//! [`CameraPose`] into per-column wall hits, per-row floor/ceiling world
//! coordinates and depth-sorted sprite rectangles; a rasterizer outside
//! this crate turns those into a frame.

pub mod defs;
pub mod engine;
pub mod trig;
pub mod world;

pub use engine::{
    ConfigError, DIST_INFINITE, Engine, FloorCeilingPixel, Fog, MAX_DDA_STEPS, MAX_PITCH, RayHit,
    Rgba, SpriteHit, ViewConfig,
};
pub use world::{CameraPose, Grid, GridError, Sprite};
