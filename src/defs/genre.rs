//! Atmosphere presets keyed by genre name.
//!
//! The genre string is shared with other subsystems (audio, post-fx); this
//! crate only reads the fog colour and density out of it.

use once_cell::sync::Lazy;
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GenreInfo {
    pub id: &'static str,
    /// Linear RGB, each channel 0..1.
    pub fog_color: [f32; 3],
    /// Exponential falloff per map unit.
    pub fog_density: f32,
}

/// Used for unknown genres and before any genre is set.
pub const DEFAULT_ATMOSPHERE: GenreInfo = GenreInfo {
    id: "default",
    fog_color: [0.5, 0.5, 0.5],
    fog_density: 0.05,
};

pub const GENRES: &[GenreInfo] = &[
    GenreInfo {
        id: "fantasy",
        fog_color: [0.55, 0.50, 0.40],
        fog_density: 0.06,
    },
    GenreInfo {
        id: "scifi",
        fog_color: [0.15, 0.20, 0.30],
        fog_density: 0.04,
    },
    GenreInfo {
        id: "horror",
        fog_color: [0.05, 0.05, 0.05],
        fog_density: 0.15,
    },
    GenreInfo {
        id: "cyberpunk",
        fog_color: [0.25, 0.05, 0.30],
        fog_density: 0.08,
    },
    GenreInfo {
        id: "postapoc",
        fog_color: [0.45, 0.40, 0.30],
        fog_density: 0.10,
    },
];

static BY_NAME: Lazy<HashMap<&'static str, &'static GenreInfo>> =
    Lazy::new(|| GENRES.iter().map(|info| (info.id, info)).collect());

/// Case-insensitive lookup; `None` for names not in [`GENRES`].
pub fn by_name(name: &str) -> Option<&'static GenreInfo> {
    BY_NAME.get(name.trim().to_ascii_lowercase().as_str()).copied()
}
