//! Flat-shaded software view of a grid map.
//!
//! ```bash
//! cargo run --release -- --genre horror [--map level.txt]
//! ```
//!
//! Arrows move/turn, PageUp/PageDown pitch, Escape quits. The map file is
//! ASCII: `.` open, digits wall types, anything else wall type 1.

use std::{
    fs,
    path::PathBuf,
    time::{Duration, Instant},
};

use clap::Parser;
use glam::vec2;
use minifb::{Key, Window, WindowOptions};
use tracing::info;
use tracing_subscriber::EnvFilter;

use yacast_rs::{
    CameraPose, Engine, FloorCeilingPixel, Grid, RayHit, Rgba, Sprite, SpriteHit, ViewConfig,
};

const DEMO_MAP: &str = "
1111111111111111
1..............1
1..2...........1
1..2....33.....1
1..2....33.....1
1..............1
1.......4......1
1..............1
1....5555......1
1..............1
1111111111111111
";

const MOVE_SPEED: f32 = 0.06;
const TURN_SPEED: f32 = 0.04;
const PITCH_SPEED: f32 = 0.01;

/// CLI options handled via `clap` derive.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Opts {
    /// ASCII map file (built-in demo map when omitted)
    #[arg(long, value_name = "FILE")]
    map: Option<PathBuf>,

    #[arg(long, default_value_t = 640)]
    width: usize,

    #[arg(long, default_value_t = 400)]
    height: usize,

    /// Horizontal field of view in degrees
    #[arg(long, default_value_t = 66.0)]
    fov: f32,

    /// Atmosphere preset (fantasy, scifi, horror, cyberpunk, postapoc)
    #[arg(long, default_value = "fantasy")]
    genre: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let opts = Opts::parse();

    let view = ViewConfig::new(opts.width, opts.height, opts.fov.to_radians())?;
    let (w, h) = (view.width, view.height);

    let grid = match &opts.map {
        Some(path) => Grid::from_ascii(&fs::read_to_string(path)?),
        None => Grid::from_ascii(DEMO_MAP),
    };

    let mut engine = Engine::new(view);
    engine.set_map(Some(grid));
    engine.set_genre(&opts.genre);

    let sprites = [
        Sprite::new(vec2(6.5, 2.5), 1, 0.4, 0.6),
        Sprite::new(vec2(12.5, 5.5), 2, 0.6, 1.0),
        Sprite::new(vec2(11.5, 8.5), 3, 0.3, 0.3),
        Sprite::new(vec2(4.5, 6.5), 2, 0.6, 1.0),
    ];

    let mut cam = CameraPose::looking(2.5, 8.5, 0.0, -1.0);

    let mut win = Window::new("yacast - software view", w, h, WindowOptions::default())?;
    win.set_target_fps(60);

    let mut fb: Vec<Rgba> = vec![0; w * h];
    let mut walls: Vec<RayHit> = Vec::with_capacity(w);
    let mut row_px: Vec<FloorCeilingPixel> = Vec::with_capacity(w);

    // ────────────────── benchmarking state ──────────────────────────────
    let mut acc_time = Duration::ZERO;
    let mut acc_frames = 0usize;
    let mut last_print = Instant::now();

    while win.is_open() && !win.is_key_down(Key::Escape) {
        /* movement --------------------------------------------------------- */
        let mut fwd = 0.0;
        if win.is_key_down(Key::Up) || win.is_key_down(Key::W) {
            fwd += MOVE_SPEED;
        }
        if win.is_key_down(Key::Down) || win.is_key_down(Key::S) {
            fwd -= MOVE_SPEED;
        }
        if win.is_key_down(Key::Left) {
            cam.turn(-TURN_SPEED);
        }
        if win.is_key_down(Key::Right) {
            cam.turn(TURN_SPEED);
        }
        if win.is_key_down(Key::PageUp) {
            cam.pitch -= PITCH_SPEED;
        }
        if win.is_key_down(Key::PageDown) {
            cam.pitch += PITCH_SPEED;
        }
        try_move(&engine, &mut cam, fwd);

        /* draw */
        let t0 = Instant::now();
        engine.cast_rays_into(&cam, &mut walls);
        draw_planes(&engine, &cam, &mut row_px, &mut fb);
        draw_walls(&engine, &cam, &walls, &mut fb);
        let visible = engine.cast_sprites(&sprites, &cam, &walls);
        draw_sprites(&engine, &cam, &visible, &walls, &mut fb);
        acc_time += t0.elapsed();
        acc_frames += 1;

        win.update_with_buffer(&fb, w, h)?;

        if last_print.elapsed() >= Duration::from_secs(3) {
            let avg_ms = acc_time.as_secs_f64() * 1000.0 / acc_frames as f64;
            info!("avg render: {avg_ms:.2} ms ({:.1} FPS)", 1000.0 / avg_ms);
            acc_time = Duration::ZERO;
            acc_frames = 0;
            last_print = Instant::now();
        }
    }
    Ok(())
}

/// Step forward unless that lands inside a wall.
fn try_move(engine: &Engine, cam: &mut CameraPose, fwd: f32) {
    if fwd == 0.0 {
        return;
    }
    let mut next = *cam;
    next.step(fwd, 0.0);
    let blocked = engine
        .grid()
        .is_none_or(|g| g.is_solid(next.pos.x.floor() as i32, next.pos.y.floor() as i32));
    if !blocked {
        *cam = next;
    }
}

fn wall_color(wall_type: i32, side: u8) -> Rgba {
    let base = match wall_type {
        2 => 0x00_B0_40_30,
        3 => 0x00_30_90_40,
        4 => 0x00_30_50_B0,
        5 => 0x00_B0_A0_30,
        _ => 0x00_A0_A0_A0,
    };
    // y-sides a bit darker
    if side == 1 { (base >> 1) & 0x00_7F_7F_7F } else { base }
}

fn sprite_color(type_id: u16) -> Rgba {
    match type_id {
        1 => 0x00_F0_D0_20,
        2 => 0x00_E0_30_E0,
        _ => 0x00_20_E0_E0,
    }
}

fn draw_planes(
    engine: &Engine,
    cam: &CameraPose,
    px: &mut Vec<FloorCeilingPixel>,
    fb: &mut [Rgba],
) {
    let (w, h) = (engine.screen().w, engine.screen().h);
    let fog = engine.fog();
    for y in 0..h {
        engine.cast_floor_ceiling_into(y, cam, px);
        let line = &mut fb[y * w..(y + 1) * w];
        for (dst, p) in line.iter_mut().zip(px.iter()) {
            let checker = (p.world_x.floor() as i64 + p.world_y.floor() as i64) & 1 == 0;
            let base = match (p.is_floor, checker) {
                (true, true) => 0x00_50_40_30,
                (true, false) => 0x00_40_32_26,
                (false, _) => 0x00_30_30_38,
            };
            *dst = fog.apply_rgb(base, p.distance);
        }
    }
}

fn draw_walls(engine: &Engine, cam: &CameraPose, walls: &[RayHit], fb: &mut [Rgba]) {
    let (w, h) = (engine.screen().w, engine.screen().h);
    let horizon = engine.horizon(cam.pitch);
    let fog = engine.fog();
    for (x, hit) in walls.iter().enumerate() {
        if hit.is_sentinel() {
            continue;
        }
        let line_h = h as f32 / hit.distance;
        let top = (horizon - line_h * 0.5).max(0.0) as usize;
        let bottom = ((horizon + line_h * 0.5) as usize).min(h);
        let color = fog.apply_rgb(wall_color(hit.wall_type, hit.side), hit.distance);
        for y in top..bottom {
            fb[y * w + x] = color;
        }
    }
}

fn draw_sprites(
    engine: &Engine,
    cam: &CameraPose,
    visible: &[SpriteHit],
    walls: &[RayHit],
    fb: &mut [Rgba],
) {
    let w = engine.screen().w;
    // sprite rectangles are relative to the unpitched horizon
    let shift = (engine.horizon(cam.pitch) - engine.screen().half_h) as i32;
    let max_y = engine.screen().h as i32 - 1;
    for s in visible {
        let color = engine.fog().apply_rgb(sprite_color(s.type_id), s.distance);
        let y0 = (s.draw_start_y + shift).clamp(0, max_y) as usize;
        let y1 = (s.draw_end_y + shift).clamp(0, max_y) as usize;
        for x in s.draw_start_x..=s.draw_end_x {
            let x = x as usize;
            if s.distance >= walls[x].distance {
                continue;
            }
            for y in y0..=y1 {
                fb[y * w + x] = color;
            }
        }
    }
}
