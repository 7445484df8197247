use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::WindowCanvas;
use sdl2::ttf;
use std::path::Path;

use crossy_road::assets::AssetError;

// From load_font bindings
pub type Font<'ttf_context> = ttf::Font<'ttf_context, 'static>;

pub fn load_font<'ttf_context>(
    ttf_context: &'ttf_context ttf::Sdl2TtfContext,
    path: &Path,
    size: u16,
) -> Result<Font<'ttf_context>, AssetError> {
    ttf_context
        .load_font(path, size)
        .map_err(|reason| AssetError::Font { reason })
}

/// Draws a single line of text with its top-left at `pos`
pub fn draw_text(
    canvas: &mut WindowCanvas,
    font: &Font,
    line: &str,
    color: Color,
    pos: (i32, i32),
) -> Result<(), String> {
    let surface = font.render(line).blended(color).map_err(|e| e.to_string())?;
    let texture_creator = canvas.texture_creator();
    let texture = texture_creator
        .create_texture_from_surface(&surface)
        .map_err(|e| e.to_string())?;
    let query = texture.query();
    let (x, y) = pos;
    canvas.copy(&texture, None, Some(Rect::new(x, y, query.width, query.height)))
}
