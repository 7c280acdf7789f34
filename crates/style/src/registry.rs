//! The fixed set of built-in themes.
//!
//! The registry is process-wide immutable state, built once on first use.
//! Lookup never fails: unknown or empty names resolve to the default theme.

use crate::font::FontSpec;
use crate::theme::{Decorations, Margins, PhotoStyle, Theme};
use once_cell::sync::Lazy;
use vitae_types::Color;

/// Name of the theme unknown names fall back to.
pub const DEFAULT_THEME: &str = "modern";

static BUILTIN: Lazy<ThemeRegistry> = Lazy::new(|| {
    ThemeRegistry::new(vec![
        modern(),
        classic(),
        creative(),
        professional(),
        elegant(),
    ])
});

/// Ordered collection of named themes.
pub struct ThemeRegistry {
    themes: Vec<Theme>,
}

impl ThemeRegistry {
    pub fn new(themes: Vec<Theme>) -> Self {
        debug_assert!(themes.iter().any(|t| t.name == DEFAULT_THEME));
        Self { themes }
    }

    /// The built-in registry shared by the whole process.
    pub fn builtin() -> &'static ThemeRegistry {
        &BUILTIN
    }

    /// Case-insensitive lookup; unknown names resolve to the default theme.
    pub fn lookup(&self, name: &str) -> &Theme {
        self.themes
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
            .unwrap_or_else(|| self.default_theme())
    }

    pub fn default_theme(&self) -> &Theme {
        self.themes
            .iter()
            .find(|t| t.name == DEFAULT_THEME)
            .or_else(|| self.themes.first())
            .expect("a registry holds at least one theme")
    }

    /// Theme names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.themes.iter().map(|t| t.name.as_str()).collect()
    }
}

fn modern() -> Theme {
    Theme {
        name: "modern".to_string(),
        title_font: FontSpec::bold("Arial", 18.0),
        section_font: FontSpec::bold("Arial", 14.0),
        body_font: FontSpec::new("Arial", 12.0),
        title_color: Color::DARK_BLUE,
        text_color: Color::BLACK,
        margins: Margins::all(40.0),
        line_spacing: 18.0,
        two_columns: false,
        photo: PhotoStyle {
            width: 100.0,
            height: 100.0,
            offset_x: 40.0,
            offset_y: 40.0,
            circular: true,
        },
        decorations: Decorations {
            header_rule: true,
            rule_color: Color::DARK_BLUE,
            rule_width: 2.0,
            section_borders: false,
            border_color: Color::BLACK,
            background_accent: true,
            accent_color: Color::LIGHT_GRAY,
        },
    }
}

fn classic() -> Theme {
    Theme {
        name: "classic".to_string(),
        title_font: FontSpec::bold("TimesNewRoman", 16.0),
        section_font: FontSpec::bold("TimesNewRoman", 14.0),
        body_font: FontSpec::new("TimesNewRoman", 12.0),
        title_color: Color::BLACK,
        text_color: Color::BLACK,
        margins: Margins::all(50.0),
        line_spacing: 20.0,
        two_columns: false,
        photo: PhotoStyle {
            width: 80.0,
            height: 80.0,
            offset_x: 50.0,
            offset_y: 50.0,
            circular: false,
        },
        decorations: Decorations {
            header_rule: true,
            rule_color: Color::BLACK,
            rule_width: 1.0,
            section_borders: true,
            border_color: Color::BLACK,
            background_accent: false,
            accent_color: Color::WHITE,
        },
    }
}

fn creative() -> Theme {
    Theme {
        name: "creative".to_string(),
        title_font: FontSpec::bold_italic("Arial", 20.0),
        section_font: FontSpec::bold("Arial", 14.0),
        body_font: FontSpec::new("Arial", 11.0),
        title_color: Color::DARK_RED,
        text_color: Color::DARK_GRAY,
        margins: Margins::all(30.0),
        line_spacing: 16.0,
        two_columns: true,
        photo: PhotoStyle {
            width: 120.0,
            height: 120.0,
            offset_x: 30.0,
            offset_y: 30.0,
            circular: true,
        },
        decorations: Decorations {
            header_rule: false,
            rule_color: Color::DARK_RED,
            rule_width: 0.0,
            section_borders: true,
            border_color: Color::DARK_RED,
            background_accent: true,
            accent_color: Color::LIGHT_PINK,
        },
    }
}

fn professional() -> Theme {
    Theme {
        name: "professional".to_string(),
        title_font: FontSpec::bold("Arial", 18.0),
        section_font: FontSpec::bold("Arial", 13.0),
        body_font: FontSpec::new("Arial", 11.0),
        title_color: Color::NAVY,
        text_color: Color::BLACK,
        margins: Margins::all(45.0),
        line_spacing: 18.0,
        two_columns: true,
        photo: PhotoStyle {
            width: 90.0,
            height: 90.0,
            offset_x: 45.0,
            offset_y: 45.0,
            circular: false,
        },
        decorations: Decorations {
            header_rule: true,
            rule_color: Color::NAVY,
            rule_width: 1.5,
            section_borders: false,
            border_color: Color::NAVY,
            background_accent: true,
            accent_color: Color::LIGHT_BLUE,
        },
    }
}

fn elegant() -> Theme {
    Theme {
        name: "elegant".to_string(),
        title_font: FontSpec::bold("Georgia", 19.0),
        section_font: FontSpec::bold_italic("Georgia", 14.0),
        body_font: FontSpec::new("Georgia", 12.0),
        title_color: Color::DARK_GREEN,
        text_color: Color::DARK_SLATE_GRAY,
        margins: Margins::all(35.0),
        line_spacing: 19.0,
        two_columns: false,
        photo: PhotoStyle {
            width: 110.0,
            height: 110.0,
            offset_x: 35.0,
            offset_y: 35.0,
            circular: true,
        },
        decorations: Decorations {
            header_rule: true,
            rule_color: Color::DARK_GREEN,
            rule_width: 2.0,
            section_borders: true,
            border_color: Color::DARK_GREEN,
            background_accent: true,
            accent_color: Color::PALE_GREEN,
        },
    }
}
