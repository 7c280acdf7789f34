use vitae_style::FontSpec;

/// Resolve a font spec to a standard-14 PostScript font name.
///
/// Arial maps onto the Helvetica family; TimesNewRoman and Georgia onto the
/// Times family; unknown families fall back to Helvetica.
pub fn base14_font_name(font: &FontSpec) -> &'static str {
    let family: String = font
        .family
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_lowercase();

    match family.as_str() {
        "timesnewroman" | "times" | "georgia" => match (font.is_bold(), font.is_italic()) {
            (true, true) => "Times-BoldItalic",
            (true, false) => "Times-Bold",
            (false, true) => "Times-Italic",
            (false, false) => "Times-Roman",
        },
        "courier" | "couriernew" => match (font.is_bold(), font.is_italic()) {
            (true, true) => "Courier-BoldOblique",
            (true, false) => "Courier-Bold",
            (false, true) => "Courier-Oblique",
            (false, false) => "Courier",
        },
        // "arial", "helvetica" and anything unrecognized
        _ => match (font.is_bold(), font.is_italic()) {
            (true, true) => "Helvetica-BoldOblique",
            (true, false) => "Helvetica-Bold",
            (false, true) => "Helvetica-Oblique",
            (false, false) => "Helvetica",
        },
    }
}

/// Convert a top-down Y coordinate to a PDF (bottom-left origin) Y coordinate.
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}
