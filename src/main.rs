//! # Crossy Road v1

extern crate sdl2;

mod engine;
mod render;
mod text;

use crossy_road::config::GameConfig;
use crossy_road::road::build_road;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = GameConfig::default();
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let world = build_road(&mut rng);

    match engine::run(&config, world) {
        Ok(score) => log::info!("Final score: {}", score),
        Err(e) => {
            // Can't play without a window and sprites
            log::error!("{}", e);
            std::process::exit(1);
        }
    }
}
