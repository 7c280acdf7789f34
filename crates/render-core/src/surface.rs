use crate::error::RenderError;
use vitae_style::FontSpec;
use vitae_types::{Color, Rect, Size};

/// How a closed shape is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintMode {
    Stroke,
    Fill,
    FillStroke,
}

/// A trait for drawing surfaces, abstracting the PDF-writing primitives.
///
/// All coordinates are top-down: `y` grows from the top edge of the page
/// toward the bottom. Backends whose native origin is bottom-left (PDF)
/// perform the flip internally, so layout code never reasons about it.
///
/// The surface carries implicit graphics state (current font, fill and
/// stroke colors, line width). Callers that change state for a decoration
/// are expected to restore it before returning to a shared code path;
/// `save_state`/`restore_state` bracket clipping regions.
pub trait Surface {
    fn page_size(&self) -> Size;

    fn set_font(&mut self, font: &FontSpec);

    fn set_fill_color(&mut self, color: Color);

    fn set_stroke_color(&mut self, color: Color);

    fn set_line_width(&mut self, width: f32);

    /// Draw a single line of text with its baseline at `y`.
    fn draw_text(&mut self, x: f32, y: f32, text: &str);

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32);

    /// `rect.y` is the top edge of the rectangle.
    fn draw_rect(&mut self, rect: Rect, mode: PaintMode);

    fn draw_circle(&mut self, cx: f32, cy: f32, radius: f32, mode: PaintMode);

    /// Draw decoded image bytes into `rect`. Fails if the bytes cannot be
    /// decoded; callers decide whether that is fatal.
    fn draw_image(&mut self, rect: Rect, data: &[u8]) -> Result<(), RenderError>;

    fn save_state(&mut self);

    fn restore_state(&mut self);

    /// Intersect the clipping region with a circle. Only meaningful between
    /// `save_state` and `restore_state`.
    fn clip_circle(&mut self, cx: f32, cy: f32, radius: f32);

    /// Close the current page and start a new one. Graphics state does not
    /// carry across pages; callers re-set font and colors afterwards.
    fn new_page(&mut self);
}
