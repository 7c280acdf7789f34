//! A recording surface for layout tests: captures every drawing call so
//! tests can assert on ordering, positions and page assignment without a
//! PDF backend.

use vitae_render_core::{PaintMode, RenderError, Surface};
use vitae_style::FontSpec;
use vitae_types::{Color, Rect, Size};

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Font { family: String, size: f32 },
    Fill(Color),
    Stroke(Color),
    LineWidth(f32),
    Text { x: f32, y: f32, text: String },
    Line { x1: f32, y1: f32, x2: f32, y2: f32 },
    Rect { rect: Rect, mode: PaintMode },
    Circle { cx: f32, cy: f32, r: f32, mode: PaintMode },
    Image(Rect),
    Save,
    Restore,
    ClipCircle { cx: f32, cy: f32, r: f32 },
    NewPage,
}

pub struct RecordingSurface {
    size: Size,
    pub ops: Vec<Op>,
    fail_images: bool,
}

impl RecordingSurface {
    pub fn a4() -> Self {
        Self {
            size: Size::new(595.28, 841.89),
            ops: Vec::new(),
            fail_images: false,
        }
    }

    /// A surface whose image drawing always fails, as undecodable photo
    /// bytes would.
    pub fn with_failing_images() -> Self {
        Self {
            fail_images: true,
            ..Self::a4()
        }
    }

    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn has_text(&self, needle: &str) -> bool {
        self.texts().iter().any(|t| t.contains(needle))
    }

    pub fn page_count(&self) -> usize {
        1 + self
            .ops
            .iter()
            .filter(|op| matches!(op, Op::NewPage))
            .count()
    }

    /// Zero-based page index of the first text containing `needle`.
    pub fn page_of_text(&self, needle: &str) -> Option<usize> {
        let mut page = 0;
        for op in &self.ops {
            match op {
                Op::NewPage => page += 1,
                Op::Text { text, .. } if text.contains(needle) => return Some(page),
                _ => {}
            }
        }
        None
    }

    /// Ops grouped by page.
    pub fn pages(&self) -> Vec<Vec<&Op>> {
        let mut pages = vec![Vec::new()];
        for op in &self.ops {
            if matches!(op, Op::NewPage) {
                pages.push(Vec::new());
            } else {
                pages.last_mut().unwrap().push(op);
            }
        }
        pages
    }
}

impl Surface for RecordingSurface {
    fn page_size(&self) -> Size {
        self.size
    }

    fn set_font(&mut self, font: &FontSpec) {
        self.ops.push(Op::Font {
            family: font.family.clone(),
            size: font.size,
        });
    }

    fn set_fill_color(&mut self, color: Color) {
        self.ops.push(Op::Fill(color));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.ops.push(Op::Stroke(color));
    }

    fn set_line_width(&mut self, width: f32) {
        self.ops.push(Op::LineWidth(width));
    }

    fn draw_text(&mut self, x: f32, y: f32, text: &str) {
        self.ops.push(Op::Text {
            x,
            y,
            text: text.to_string(),
        });
    }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.ops.push(Op::Line { x1, y1, x2, y2 });
    }

    fn draw_rect(&mut self, rect: Rect, mode: PaintMode) {
        self.ops.push(Op::Rect { rect, mode });
    }

    fn draw_circle(&mut self, cx: f32, cy: f32, radius: f32, mode: PaintMode) {
        self.ops.push(Op::Circle {
            cx,
            cy,
            r: radius,
            mode,
        });
    }

    fn draw_image(&mut self, rect: Rect, _data: &[u8]) -> Result<(), RenderError> {
        if self.fail_images {
            return Err(RenderError::Image("unreadable photo bytes".to_string()));
        }
        self.ops.push(Op::Image(rect));
        Ok(())
    }

    fn save_state(&mut self) {
        self.ops.push(Op::Save);
    }

    fn restore_state(&mut self) {
        self.ops.push(Op::Restore);
    }

    fn clip_circle(&mut self, cx: f32, cy: f32, radius: f32) {
        self.ops.push(Op::ClipCircle { cx, cy, r: radius });
    }

    fn new_page(&mut self) {
        self.ops.push(Op::NewPage);
    }
}
