mod config;
mod fog;
mod planes;
mod sprites;
mod types;
mod walls;

pub use config::{ConfigError, ViewConfig};
pub use fog::Fog;
pub use planes::MAX_PITCH;
pub use sprites::SPRITE_NEAR;
pub use types::{DIST_INFINITE, FloorCeilingPixel, Rgba, RayHit, Screen, SpriteHit};
pub use walls::MAX_DDA_STEPS;

use tracing::{debug, info, warn};

use crate::{defs, trig, world::Grid};

/// Casting state that outlives a frame: the level grid, the screen
/// configuration and the active atmosphere.
///
/// Every cast is a pure function of its arguments plus this state. Map and
/// genre changes must not overlap a cast; the engine does no locking and
/// expects a single render thread.
pub struct Engine {
    grid: Option<Grid>,
    view: ViewConfig,
    screen: Screen,
    fog: Fog,
    genre: &'static str,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(ViewConfig::default())
    }
}

impl Engine {
    pub fn new(view: ViewConfig) -> Self {
        trig::warm_up();
        Self {
            grid: None,
            view,
            screen: view.screen(),
            fog: Fog::default(),
            genre: defs::DEFAULT_ATMOSPHERE.id,
        }
    }

    /*──────────────────────────── config ────────────────────────────*/

    pub fn view(&self) -> &ViewConfig {
        &self.view
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn set_view(&mut self, view: ViewConfig) {
        self.view = view;
        self.screen = view.screen();
    }

    /*───────────────────────────── map ──────────────────────────────*/

    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    /// Replace the level grid wholesale; `None` unloads it.
    pub fn set_map(&mut self, grid: Option<Grid>) {
        match &grid {
            Some(g) => info!(width = g.width(), height = g.height(), "map loaded"),
            None => info!("map cleared"),
        }
        self.grid = grid;
    }

    /// Load nested rows (`rows[y][x]`). A malformed layout unloads the
    /// map instead of failing, so every ray reports the boundary sentinel.
    pub fn set_map_rows<R: AsRef<[i32]>>(&mut self, rows: &[R]) {
        match Grid::from_rows(rows) {
            Ok(grid) => self.set_map(Some(grid)),
            Err(err) => {
                warn!(%err, "rejected map; casting against an empty grid");
                self.grid = None;
            }
        }
    }

    /*────────────────────────── atmosphere ──────────────────────────*/

    pub fn genre(&self) -> &'static str {
        self.genre
    }

    pub fn fog(&self) -> &Fog {
        &self.fog
    }

    /// Swap fog colour/density for the named genre; unknown names fall
    /// back to the neutral default.
    pub fn set_genre(&mut self, name: &str) {
        let info = defs::by_name(name).unwrap_or_else(|| {
            warn!(genre = name, "unknown genre, using default atmosphere");
            &defs::DEFAULT_ATMOSPHERE
        });
        debug!(genre = info.id, "atmosphere switched");
        self.genre = info.id;
        self.fog = Fog::from(info);
    }

    /// Install a custom fog, keeping the current genre name.
    pub fn set_fog(&mut self, fog: Fog) {
        self.fog = fog;
    }

    /// Blend `base` (linear RGB, 0..1) toward the active fog colour.
    #[inline]
    pub fn apply_fog(&self, base: [f32; 3], distance: f32) -> [f32; 3] {
        self.fog.apply(base, distance)
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
