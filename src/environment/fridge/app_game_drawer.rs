use egui::epaint::RectShape;
use egui::{Color32, ColorImage, Context, Pos2, Rect, Rounding, Shape, TextureHandle, TextureOptions};
use image::RgbaImage;

use super::algebra_2d::AaBB;
use super::assets::Sprites;
use super::frame_drawer::{cover_rect, model_to_canvas, SHADOW_COLOR, SHADOW_OFFSET};
use super::mechanics::{FridgeMechanics, MODEL_LEN_X, MODEL_LEN_Y};

const START_BUTTON_LEN_X: f32 = 240.0;
const START_BUTTON_LEN_Y: f32 = 70.0;
const START_BUTTON_BOTTOM_DISTANCE: f32 = 80.0;

pub const BUTTON_COLOR: Color32 = Color32::from_rgba_premultiplied(153, 153, 150, 160);
pub const BUTTON_HOVER_COLOR: Color32 = Color32::from_rgba_premultiplied(185, 185, 177, 190);
pub const BUTTON_TEXT_COLOR: Color32 = Color32::from_rgb(80, 60, 40);

/// Sprites uploaded to the GPU
pub struct SpriteTextures {
    pub elephant: TextureHandle,
    pub fridge_closed: TextureHandle,
    pub fridge_open: TextureHandle,
    pub background: TextureHandle,
    pub start_background: TextureHandle,
}

impl SpriteTextures {
    pub fn upload(
        ctx: &Context,
        sprites: &Sprites,
    ) -> Self {
        let load = |name: &str, image: &RgbaImage| ctx.load_texture(name, to_color_image(image), TextureOptions::LINEAR);
        Self {
            elephant: load("elephant", &sprites.elephant),
            fridge_closed: load("fridge_closed", &sprites.fridge_closed),
            fridge_open: load("fridge_open", &sprites.fridge_open),
            background: load("background", &sprites.background),
            start_background: load("start_background", &sprites.start_background),
        }
    }

    fn fridge(
        &self,
        is_open: bool,
    ) -> &TextureHandle {
        if is_open { &self.fridge_open } else { &self.fridge_closed }
    }
}

fn to_color_image(image: &RgbaImage) -> ColorImage {
    let (width, height) = image.dimensions();
    ColorImage::from_rgba_unmultiplied([width as usize, height as usize], image.as_raw())
}

/// Start button position on a canvas (model layout: centered, near the bottom)
pub fn start_button_rect(canvas: Rect) -> Rect {
    let min = model_to_canvas(
        Pos2::new(
            MODEL_LEN_X / 2.0 - START_BUTTON_LEN_X / 2.0,
            MODEL_LEN_Y - START_BUTTON_BOTTOM_DISTANCE,
        ),
        canvas.size(),
    );
    let size = model_to_canvas(Pos2::new(START_BUTTON_LEN_X, START_BUTTON_LEN_Y), canvas.size()).to_vec2();
    Rect::from_min_size(min, size).translate(canvas.min.to_vec2())
}

/// Produces the egui shapes of one game frame on a canvas of any size
pub struct AppGameDrawer<'a> {
    canvas: Rect,
    textures: &'a SpriteTextures,
}

impl<'a> AppGameDrawer<'a> {
    pub fn new(
        canvas: Rect,
        textures: &'a SpriteTextures,
    ) -> Self {
        Self { canvas, textures }
    }

    /// pos / MODEL_LEN = result / canvas_size
    fn scale(
        &self,
        pos: Pos2,
    ) -> Pos2 {
        model_to_canvas(pos, self.canvas.size()) + self.canvas.min.to_vec2()
    }

    fn background(
        &self,
        texture: &TextureHandle,
    ) -> Shape {
        let rect = cover_rect(texture.size_vec2(), self.canvas.size()).translate(self.canvas.min.to_vec2());
        image_shape(texture, rect, Color32::WHITE)
    }

    fn with_shadow(
        &self,
        texture: &TextureHandle,
        shape: AaBB,
    ) -> [Shape; 2] {
        let rect = Rect::from_min_max(self.scale(shape.min), self.scale(shape.max));
        let [r, g, b, a] = SHADOW_COLOR;
        [
            image_shape(texture, rect.translate(SHADOW_OFFSET), Color32::from_rgba_unmultiplied(r, g, b, a)),
            image_shape(texture, rect, Color32::WHITE),
        ]
    }

    pub fn game_shapes(
        &self,
        mechanics: &FridgeMechanics,
    ) -> Vec<Shape> {
        let mut result = Vec::with_capacity(5);
        result.push(self.background(&self.textures.background));
        result.extend(self.with_shadow(self.textures.fridge(mechanics.fridge().is_open), mechanics.fridge().shape()));
        if !mechanics.task_complete() {
            result.extend(self.with_shadow(&self.textures.elephant, mechanics.elephant().shape()));
        }
        result
    }

    /// Title screen: background and the start button (without label)
    pub fn title_shapes(
        &self,
        button_hovered: bool,
    ) -> Vec<Shape> {
        let button = start_button_rect(self.canvas);
        let button_color = if button_hovered { BUTTON_HOVER_COLOR } else { BUTTON_COLOR };
        vec![
            self.background(&self.textures.start_background),
            RectShape::filled(
                button.translate(SHADOW_OFFSET),
                Rounding::same(15.0),
                Color32::from_black_alpha(50),
            )
            .into(),
            RectShape::filled(button, Rounding::same(15.0), button_color).into(),
        ]
    }
}

fn image_shape(
    texture: &TextureHandle,
    rect: Rect,
    tint: Color32,
) -> Shape {
    Shape::image(
        texture.id(),
        rect,
        Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
        tint,
    )
}

#[cfg(test)]
mod tests {
    use egui::Vec2;

    use super::*;

    #[test]
    fn test_start_button_rect_scales_with_canvas() {
        let canvas = Rect::from_min_size(Pos2::ZERO, Vec2::new(600.0, 400.0));
        assert_eq!(
            start_button_rect(canvas),
            Rect::from_min_max(Pos2::new(180.0, 320.0), Pos2::new(420.0, 390.0))
        );

        let canvas = Rect::from_min_size(Pos2::new(10.0, 0.0), Vec2::new(1200.0, 200.0));
        assert_eq!(
            start_button_rect(canvas),
            Rect::from_min_max(Pos2::new(370.0, 160.0), Pos2::new(850.0, 195.0))
        );
    }

    #[test]
    fn test_to_color_image() {
        let image = RgbaImage::from_pixel(3, 2, image::Rgba([10, 20, 30, 255]));
        let color_image = to_color_image(&image);
        assert_eq!(color_image.size, [3, 2]);
        assert_eq!(color_image.pixels[0], Color32::from_rgb(10, 20, 30));
    }
}
