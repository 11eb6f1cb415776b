//! tilerig - headless platformer simulation demo
//!
//! Builds a small level from configuration and runs the movement core
//! for a bounded number of frames with scripted input, logging player
//! state as it goes. A real host would swap the trace surface for a
//! renderer and the script for live input.

use std::time::Duration;

use tilerig::config::AppConfig;
use tilerig::scene::{LevelBuilder, Playfield};
use tilerig::systems::FrameClock;

use tilerig_core::{Entity, TraceSurface};
use tilerig_input::InputFrame;
use tilerig_physics::Ticks;

const DEMO_FRAMES: u32 = 600;

/// Scripted input: settle, walk right, jump while walking, idle out
fn scripted_input(frame: u32) -> InputFrame {
    match frame {
        0..=59 => InputFrame::default(),
        60..=239 => InputFrame {
            right: 1.0,
            ..InputFrame::default()
        },
        240..=299 => InputFrame {
            right: 1.0,
            jump: 1.0,
            ..InputFrame::default()
        },
        _ => InputFrame::default(),
    }
}

fn main() {
    let config_result = AppConfig::load();
    let config = match &config_result {
        Ok(config) => config.clone(),
        Err(_) => AppConfig::default(),
    };

    let mut builder = env_logger::Builder::new();
    builder.parse_filters(&config.debug.log_level);
    // RUST_LOG still wins over the configured level
    builder.parse_default_env();
    builder.init();

    if let Err(e) = config_result {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }

    log::info!("Starting tilerig at {} Hz", config.timing.base_hz);

    let level = &config.level;
    let (grid, spawn) = LevelBuilder::new(level.width, level.height, level.cell_size)
        .floor(level.height - 2)
        .block(level.width - 8, level.height - 5, 3, 3)
        .stairs(4, level.height - 3, 3)
        .with_spawn(level.spawn[0], level.spawn[1])
        .build();

    let ticks = Ticks::from_rate(config.timing.base_hz);
    let mut playfield = Playfield::new(grid, spawn, config.player.to_player_config(), ticks);
    playfield.init();

    let mut clock = FrameClock::new(config.timing.base_hz);
    let mut surface = TraceSurface;

    for frame in 0..DEMO_FRAMES {
        playfield.set_input(scripted_input(frame));
        if frame % 90 == 89 {
            playfield.fire();
        }

        let (dt, dt0) = clock.tick();
        playfield.update(dt, dt0);
        playfield.draw(&mut surface);

        if frame % 60 == 0 {
            let player = playfield.player();
            log::info!(
                "frame {:3}: pos ({:6.1}, {:6.1}) pose {:?} bullets {}",
                frame,
                player.body.x,
                player.body.y,
                player.pose(),
                playfield.bullet_count()
            );
        }

        std::thread::sleep(Duration::from_millis(clock.fixed_ms() as u64));
    }

    log::info!("Demo complete after {} frames", DEMO_FRAMES);
}
