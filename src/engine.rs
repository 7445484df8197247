use sdl2::event::Event;
use sdl2::keyboard::{Keycode, Scancode};
use sdl2::EventPump;

use std::time::Instant;

use crossy_road::assets::{locate, AssetError, FONT_FILE};
use crossy_road::config::GameConfig;
use crossy_road::game_logic::{update_world, GamePhase, RunState};
use crossy_road::input::{HeldKeys, TickInput};
use crossy_road::world::World;

use crate::render::{Renderer, Sprites};
use crate::text::load_font;

/// Drains pending events and samples which arrow keys are held.
fn poll_input(event_pump: &mut EventPump) -> TickInput {
    let mut quit = false;
    for event in event_pump.poll_iter() {
        match event {
            Event::Quit { .. }
            | Event::KeyDown {
                keycode: Some(Keycode::Escape),
                ..
            } => quit = true,
            _ => {}
        }
    }

    let keys = event_pump.keyboard_state();
    TickInput {
        quit,
        held: HeldKeys {
            up: keys.is_scancode_pressed(Scancode::Up),
            down: keys.is_scancode_pressed(Scancode::Down),
            left: keys.is_scancode_pressed(Scancode::Left),
            right: keys.is_scancode_pressed(Scancode::Right),
        },
    }
}

/// Runs one game to completion. Returns the final score.
pub fn run(config: &GameConfig, mut world: World) -> Result<u32, AssetError> {
    let mut phase = GamePhase::Initializing;
    log::debug!("{:?}: loading assets from {}", phase, config.asset_dir.display());

    let sdl_context = sdl2::init().map_err(AssetError::Video)?;
    let video_subsystem = sdl_context.video().map_err(AssetError::Video)?;
    let _image_context =
        sdl2::image::init(sdl2::image::InitFlag::PNG).map_err(AssetError::Video)?;
    let ttf_context = sdl2::ttf::init().map_err(|e| AssetError::Font {
        reason: e.to_string(),
    })?;

    let mut renderer = Renderer::new(&video_subsystem, &config.window_title)?;
    let texture_creator = renderer.texture_creator();
    let sprites = Sprites::load(&texture_creator, &config.asset_dir)?;
    let font = load_font(
        &ttf_context,
        &locate(&config.asset_dir, FONT_FILE)?,
        config.font_size,
    )?;
    let mut event_pump = sdl_context.event_pump().map_err(AssetError::Video)?;

    let tick = config.tick_duration();
    phase = GamePhase::Playing;
    log::info!("Run started with {} obstacles", world.obstacles().len());

    while phase == GamePhase::Playing {
        let tick_start = Instant::now();

        let input = poll_input(&mut event_pump);
        if input.quit {
            log::info!("Quit requested");
        }
        if update_world(&mut world, &input) == RunState::Over {
            phase = GamePhase::Over;
        }

        renderer
            .render(&world, &sprites, &font)
            .map_err(AssetError::Video)?;
        renderer.present();

        // Cap tick rate, accounting for the time the tick itself took
        let elapsed = tick_start.elapsed();
        match tick.checked_sub(elapsed) {
            Some(remaining) => ::std::thread::sleep(remaining),
            None => log::warn!("Tick overran by {:?}", elapsed - tick),
        }
    }

    log::info!("Game over, score {}", world.score);
    renderer
        .render_game_over(world.score, &font)
        .map_err(AssetError::Video)?;
    renderer.present();
    ::std::thread::sleep(config.game_over_display);

    Ok(world.score)
}
