use std::path::PathBuf;
use std::time::Duration;

/// Startup configuration, built once in `main` and handed to the engine.
#[derive(Clone, Debug)]
pub struct GameConfig {
    pub window_title: String,
    /// Target simulation (and render) rate
    pub ticks_per_second: u32,
    /// How long the game-over screen stays up before exit
    pub game_over_display: Duration,
    /// Seed for obstacle setup. None => seeded from entropy.
    pub seed: Option<u64>,
    /// Asset directory, relative to the executable or working directory
    pub asset_dir: PathBuf,
    pub font_size: u16,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_title: "Crossy Road Game".to_string(),
            ticks_per_second: 30,
            game_over_display: Duration::from_millis(2000),
            seed: None,
            asset_dir: PathBuf::from("assets"),
            font_size: 40,
        }
    }
}

impl GameConfig {
    pub fn tick_duration(&self) -> Duration {
        Duration::from_secs(1) / self.ticks_per_second.max(1)
    }
}
