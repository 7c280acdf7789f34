use crate::font::FontSpec;
use serde::{Deserialize, Serialize};
use vitae_types::Color;

/// Page margins in points.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    pub fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

/// Photo box geometry. Offsets are measured from the page's top-left corner
/// (x) and from the top margin (y).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PhotoStyle {
    pub width: f32,
    pub height: f32,
    pub offset_x: f32,
    pub offset_y: f32,
    pub circular: bool,
}

/// Decorative elements a theme may enable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Decorations {
    pub header_rule: bool,
    pub rule_color: Color,
    pub rule_width: f32,
    pub section_borders: bool,
    pub border_color: Color,
    pub background_accent: bool,
    pub accent_color: Color,
}

/// A complete visual style. Every field is defined for every theme; there is
/// no partial theme and no inheritance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub name: String,
    pub title_font: FontSpec,
    pub section_font: FontSpec,
    pub body_font: FontSpec,
    pub title_color: Color,
    pub text_color: Color,
    pub margins: Margins,
    /// Vertical line pitch in points.
    pub line_spacing: f32,
    pub two_columns: bool,
    pub photo: PhotoStyle,
    pub decorations: Decorations,
}

impl Theme {
    /// Horizontal space between the left and right margins.
    pub fn content_width(&self, page_width: f32) -> f32 {
        page_width - self.margins.left - self.margins.right
    }
}
