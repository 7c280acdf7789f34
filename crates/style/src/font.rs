use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "camelCase")]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "camelCase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

/// A concrete font selection: family name, size in points, weight and slant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FontSpec {
    pub family: String,
    pub size: f32,
    #[serde(default)]
    pub weight: FontWeight,
    #[serde(default)]
    pub style: FontStyle,
}

impl FontSpec {
    pub fn new(family: &str, size: f32) -> Self {
        Self {
            family: family.to_string(),
            size,
            weight: FontWeight::Regular,
            style: FontStyle::Normal,
        }
    }

    pub fn bold(family: &str, size: f32) -> Self {
        Self {
            weight: FontWeight::Bold,
            ..Self::new(family, size)
        }
    }

    pub fn bold_italic(family: &str, size: f32) -> Self {
        Self {
            weight: FontWeight::Bold,
            style: FontStyle::Italic,
            ..Self::new(family, size)
        }
    }

    pub fn is_bold(&self) -> bool {
        self.weight == FontWeight::Bold
    }

    pub fn is_italic(&self) -> bool {
        self.style == FontStyle::Italic
    }
}
