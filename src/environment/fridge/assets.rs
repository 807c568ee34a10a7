use std::path::Path;

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use super::mechanics::{ELEPHANT_LEN_X, ELEPHANT_LEN_Y, FRIDGE_LEN_X, FRIDGE_LEN_Y, MODEL_LEN_X, MODEL_LEN_Y};
use crate::gym::prelude::GymError;

pub const ELEPHANT_FILE: &str = "elephant.png";
pub const FRIDGE_CLOSED_FILE: &str = "fridge_closed.png";
pub const FRIDGE_OPEN_FILE: &str = "fridge_open.png";
pub const BACKGROUND_FILE: &str = "background.png";
pub const START_BACKGROUND_FILE: &str = "start.png";

const ELEPHANT_PLACEHOLDER: Rgba<u8> = Rgba([255, 0, 0, 150]);
const FRIDGE_CLOSED_PLACEHOLDER: Rgba<u8> = Rgba([0, 0, 255, 150]);
const FRIDGE_OPEN_PLACEHOLDER: Rgba<u8> = Rgba([0, 255, 0, 150]);
const BACKGROUND_PLACEHOLDER: Rgba<u8> = Rgba([255, 255, 255, 255]);
const START_BACKGROUND_PLACEHOLDER: Rgba<u8> = Rgba([200, 200, 200, 255]);

/// All images the game is drawn with
#[derive(Clone, Debug)]
pub struct Sprites {
    pub elephant: RgbaImage,
    pub fridge_closed: RgbaImage,
    pub fridge_open: RgbaImage,
    /// kept in original size; scaled when drawn
    pub background: RgbaImage,
    /// kept in original size; scaled when drawn
    pub start_background: RgbaImage,
}

impl Sprites {
    /// Loads all sprites from `assets_dir`.
    /// Missing or unreadable files are replaced by a plain colored placeholder of the same size.
    pub fn load(assets_dir: &Path) -> Self {
        let elephant_size = Some((ELEPHANT_LEN_X as u32, ELEPHANT_LEN_Y as u32));
        let fridge_size = Some((FRIDGE_LEN_X as u32, FRIDGE_LEN_Y as u32));
        Self {
            elephant: load_or_placeholder(assets_dir, ELEPHANT_FILE, elephant_size, ELEPHANT_PLACEHOLDER),
            fridge_closed: load_or_placeholder(assets_dir, FRIDGE_CLOSED_FILE, fridge_size, FRIDGE_CLOSED_PLACEHOLDER),
            fridge_open: load_or_placeholder(assets_dir, FRIDGE_OPEN_FILE, fridge_size, FRIDGE_OPEN_PLACEHOLDER),
            background: load_or_placeholder(assets_dir, BACKGROUND_FILE, None, BACKGROUND_PLACEHOLDER),
            start_background: load_or_placeholder(assets_dir, START_BACKGROUND_FILE, None, START_BACKGROUND_PLACEHOLDER),
        }
    }

    /// Sprites without touching the filesystem
    pub fn placeholders() -> Self {
        let screen_size = (MODEL_LEN_X as u32, MODEL_LEN_Y as u32);
        let fridge_size = (FRIDGE_LEN_X as u32, FRIDGE_LEN_Y as u32);
        Self {
            elephant: placeholder((ELEPHANT_LEN_X as u32, ELEPHANT_LEN_Y as u32), ELEPHANT_PLACEHOLDER),
            fridge_closed: placeholder(fridge_size, FRIDGE_CLOSED_PLACEHOLDER),
            fridge_open: placeholder(fridge_size, FRIDGE_OPEN_PLACEHOLDER),
            background: placeholder(screen_size, BACKGROUND_PLACEHOLDER),
            start_background: placeholder(screen_size, START_BACKGROUND_PLACEHOLDER),
        }
    }

    pub fn fridge(
        &self,
        is_open: bool,
    ) -> &RgbaImage {
        if is_open { &self.fridge_open } else { &self.fridge_closed }
    }
}

/// Loads an image, resized to `size` if given
pub fn load_sprite(
    path: &Path,
    size: Option<(u32, u32)>,
) -> Result<RgbaImage, GymError> {
    let image = image::open(path)
        .map_err(|source| GymError::AssetMissing {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgba8();
    Ok(match size {
        Some((x, y)) if image.dimensions() != (x, y) => imageops::resize(&image, x, y, FilterType::Triangle),
        _ => image,
    })
}

pub fn placeholder(
    size: (u32, u32),
    color: Rgba<u8>,
) -> RgbaImage {
    RgbaImage::from_pixel(size.0, size.1, color)
}

fn load_or_placeholder(
    assets_dir: &Path,
    file_name: &str,
    size: Option<(u32, u32)>,
    color: Rgba<u8>,
) -> RgbaImage {
    match load_sprite(&assets_dir.join(file_name), size) {
        Ok(image) => image,
        Err(e) => {
            log::warn!("{e} - using a placeholder");
            placeholder(size.unwrap_or((MODEL_LEN_X as u32, MODEL_LEN_Y as u32)), color)
        }
    }
}
