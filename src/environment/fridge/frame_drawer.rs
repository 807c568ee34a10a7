use emath::{Pos2, Rect, Vec2};
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use super::algebra_2d::AaBB;
use super::assets::Sprites;
use super::mechanics::{FridgeMechanics, MODEL_LEN_X, MODEL_LEN_Y};

pub const SHADOW_OFFSET: Vec2 = Vec2 { x: 3.0, y: 3.0 };
pub const SHADOW_COLOR: [u8; 4] = [100, 100, 100, 120];

/// Renders the game state into a frame, independent of any window
pub trait FridgeDrawer {
    fn draw(
        &self,
        mechanics: &FridgeMechanics,
    ) -> RgbaImage;
}

/// Aspect ratio preserving scale of an image, so that it covers the whole canvas; centered on the canvas.
/// Parts of the image may stick out of the canvas.
pub fn cover_rect(
    image_size: Vec2,
    canvas_size: Vec2,
) -> Rect {
    let scale = (canvas_size.x / image_size.x).max(canvas_size.y / image_size.y);
    Rect::from_center_size((canvas_size / 2.0).to_pos2(), image_size * scale)
}

/// Position scaling from model space to a canvas of `canvas_size`
pub fn model_to_canvas(
    pos: Pos2,
    canvas_size: Vec2,
) -> Pos2 {
    Pos2::new(pos.x * canvas_size.x / MODEL_LEN_X, pos.y * canvas_size.y / MODEL_LEN_Y)
}

/// The sprite, color-multiplied with the shadow color
pub fn shadow_of(sprite: &RgbaImage) -> RgbaImage {
    let mut shadow = sprite.clone();
    for pixel in shadow.pixels_mut() {
        for (channel, factor) in pixel.0.iter_mut().zip(SHADOW_COLOR) {
            *channel = ((*channel as u16 * factor as u16) / 255) as u8;
        }
    }
    shadow
}

/// Headless drawer producing RGBA frames (`rgb_array` render mode)
pub struct PixelFrameDrawer {
    sprites: Sprites,
    frame_size_x: u32,
    frame_size_y: u32,
}

impl PixelFrameDrawer {
    pub fn new(
        sprites: Sprites,
        frame_size_x: u32,
        frame_size_y: u32,
    ) -> Self {
        Self {
            sprites,
            frame_size_x,
            frame_size_y,
        }
    }

    fn canvas_size(&self) -> Vec2 { Vec2::new(self.frame_size_x as f32, self.frame_size_y as f32) }

    fn draw_background(
        &self,
        frame: &mut RgbaImage,
    ) {
        let background = &self.sprites.background;
        let (width, height) = background.dimensions();
        let rect = cover_rect(Vec2::new(width as f32, height as f32), self.canvas_size());
        let scaled = imageops::resize(
            background,
            rect.width().round() as u32,
            rect.height().round() as u32,
            FilterType::Triangle,
        );
        imageops::overlay(frame, &scaled, rect.min.x.round() as i64, rect.min.y.round() as i64);
    }

    /// Draws the sprite with its shadow, scaled into the model-space `shape`
    fn draw_with_shadow(
        &self,
        frame: &mut RgbaImage,
        sprite: &RgbaImage,
        shape: AaBB,
    ) {
        let min = model_to_canvas(shape.min, self.canvas_size());
        let max = model_to_canvas(shape.max, self.canvas_size());
        let width = (max.x - min.x).round().max(1.0) as u32;
        let height = (max.y - min.y).round().max(1.0) as u32;
        let sprite = if sprite.dimensions() == (width, height) {
            sprite.clone()
        } else {
            imageops::resize(sprite, width, height, FilterType::Triangle)
        };
        let shadow_pos = min + SHADOW_OFFSET;
        imageops::overlay(frame, &shadow_of(&sprite), shadow_pos.x.round() as i64, shadow_pos.y.round() as i64);
        imageops::overlay(frame, &sprite, min.x.round() as i64, min.y.round() as i64);
    }
}

impl FridgeDrawer for PixelFrameDrawer {
    fn draw(
        &self,
        mechanics: &FridgeMechanics,
    ) -> RgbaImage {
        let mut frame = RgbaImage::from_pixel(self.frame_size_x, self.frame_size_y, Rgba([255, 255, 255, 255]));
        self.draw_background(&mut frame);
        self.draw_with_shadow(&mut frame, self.sprites.fridge(mechanics.fridge().is_open), mechanics.fridge().shape());
        // once locked in, the elephant is hidden behind the fridge door
        if !mechanics.task_complete() {
            self.draw_with_shadow(&mut frame, &self.sprites.elephant, mechanics.elephant().shape());
        }
        frame
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::environment::fridge::assets::placeholder;
    use crate::environment::fridge::mechanics::GameInput;

    #[rstest]
    #[case(Vec2::new(600.0, 400.0), Vec2::new(600.0, 400.0), Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(600.0, 400.0)))]
    #[case(Vec2::new(300.0, 200.0), Vec2::new(600.0, 400.0), Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(600.0, 400.0)))]
    #[case(Vec2::new(400.0, 400.0), Vec2::new(600.0, 400.0), Rect::from_min_max(Pos2::new(0.0, -100.0), Pos2::new(600.0, 500.0)))]
    #[case(Vec2::new(800.0, 200.0), Vec2::new(600.0, 400.0), Rect::from_min_max(Pos2::new(-500.0, 0.0), Pos2::new(1100.0, 400.0)))]
    fn test_cover_rect(
        #[case] image_size: Vec2,
        #[case] canvas_size: Vec2,
        #[case] expected: Rect,
    ) {
        assert_eq!(cover_rect(image_size, canvas_size), expected);
    }

    #[test]
    fn test_model_to_canvas() {
        assert_eq!(model_to_canvas(Pos2::new(300.0, 200.0), Vec2::new(1200.0, 400.0)), Pos2::new(600.0, 200.0));
    }

    #[test]
    fn test_shadow_of() {
        let sprite = placeholder((2, 2), Rgba([255, 255, 255, 255]));
        let shadow = shadow_of(&sprite);
        assert_eq!(*shadow.get_pixel(1, 1), Rgba(SHADOW_COLOR));
    }

    #[test]
    fn test_draw_frame() {
        let drawer = PixelFrameDrawer::new(Sprites::placeholders(), 600, 400);
        let mut mechanics = FridgeMechanics::new();
        let frame = drawer.draw(&mechanics);
        assert_eq!(frame.dimensions(), (600, 400));
        // fridge center: closed placeholder blue over white background
        let fridge_pixel = *frame.get_pixel(300, 300);
        assert!(fridge_pixel.0[2] > fridge_pixel.0[0]);
        // elephant center: red
        let elephant_pixel = *frame.get_pixel(150, 300);
        assert!(elephant_pixel.0[0] > elephant_pixel.0[2]);
        // far corner stays background
        assert_eq!(*frame.get_pixel(5, 5), Rgba([255, 255, 255, 255]));

        mechanics.apply(GameInput::OpenFridge);
        let frame = drawer.draw(&mechanics);
        let fridge_pixel = *frame.get_pixel(300, 300);
        assert!(fridge_pixel.0[1] > fridge_pixel.0[0]);
    }
}
