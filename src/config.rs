use std::path::PathBuf;
use std::time::Duration;

use lazy_static::lazy_static;

pub const ASSETS_DIR_ENV: &str = "FRIDGE_GYM_ASSETS";
pub const RENDER_FPS_ENV: &str = "FRIDGE_GYM_FPS";

pub const DEFAULT_RENDER_FPS: u32 = 30;

#[rustfmt::skip]
lazy_static! {
    pub static ref DEFAULT_ASSETS_DIR: PathBuf = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets");
}

#[derive(Clone, Debug, PartialEq)]
pub struct FridgeConfig {
    /// Directory holding the sprite images
    pub assets_dir: PathBuf,
    /// Frames per second of the game window (also limits the elephant speed while a key is held)
    pub render_fps: u32,
    pub window_title: String,
}

impl Default for FridgeConfig {
    fn default() -> Self {
        Self {
            assets_dir: DEFAULT_ASSETS_DIR.clone(),
            render_fps: DEFAULT_RENDER_FPS,
            window_title: "Put the elephant into the fridge".to_string(),
        }
    }
}

impl FridgeConfig {
    /// Default config, overridden by `FRIDGE_GYM_ASSETS` and `FRIDGE_GYM_FPS`
    pub fn from_env() -> Self { Self::from_lookup(|key| std::env::var(key).ok()) }

    /// Time between two rendered frames; a zero fps counts as 1
    pub fn frame_interval(&self) -> Duration { Duration::from_secs(1) / self.render_fps.max(1) }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(dir) = lookup(ASSETS_DIR_ENV) {
            config.assets_dir = PathBuf::from(dir);
        }
        if let Some(fps) = lookup(RENDER_FPS_ENV) {
            match fps.parse::<u32>() {
                Ok(fps) if fps > 0 => config.render_fps = fps,
                _ => log::warn!("ignoring invalid {RENDER_FPS_ENV}='{fps}'"),
            }
        }
        config
    }
}
