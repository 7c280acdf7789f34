use lopdf::content::Content;
use lopdf::{Document as LopdfDocument, Object};

/// Collect the strings shown by every text operator in a content stream.
fn stream_text(doc: &LopdfDocument, page_id: lopdf::ObjectId) -> String {
    let mut text = String::new();
    if let Ok(content) = doc.get_page_content(page_id) {
        if let Ok(decoded) = Content::decode(&content) {
            for op in decoded.operations {
                if op.operator == "Tj" {
                    if let Some(Object::String(bytes, _)) = op.operands.first() {
                        text.push_str(&String::from_utf8_lossy(bytes));
                        text.push('\n');
                    }
                }
            }
        }
    }
    text
}

/// Extract all shown text from a PDF document, page order preserved.
pub fn extract_text(doc: &LopdfDocument) -> String {
    let mut text = String::new();
    for (_page_num, page_id) in doc.get_pages() {
        text.push_str(&stream_text(doc, page_id));
    }
    text
}

/// Shown text of a single page (1-based).
pub fn page_text(doc: &LopdfDocument, page_num: u32) -> String {
    doc.get_pages()
        .get(&page_num)
        .map(|page_id| stream_text(doc, *page_id))
        .unwrap_or_default()
}

/// 1-based page number of the first page whose text contains `needle`.
pub fn page_of_text(doc: &LopdfDocument, needle: &str) -> Option<u32> {
    let pages = doc.get_pages();
    for (page_num, page_id) in pages {
        if stream_text(doc, page_id).contains(needle) {
            return Some(page_num);
        }
    }
    None
}

/// Extract BaseFont names referenced by page resources.
pub fn extract_font_names(doc: &LopdfDocument) -> Vec<String> {
    let mut fonts = std::collections::BTreeSet::new();
    for object in doc.objects.values() {
        if let Ok(dict) = object.as_dict() {
            let is_font = dict
                .get(b"Type")
                .and_then(|v| v.as_name())
                .map(|n| n == b"Font")
                .unwrap_or(false);
            if is_font {
                if let Ok(base_font) = dict.get(b"BaseFont").and_then(|v| v.as_name()) {
                    fonts.insert(String::from_utf8_lossy(base_font).to_string());
                }
            }
        }
        // Inline font dictionaries inside the shared resources object.
        if let Ok(dict) = object.as_dict() {
            if let Ok(font_dict) = dict.get(b"Font").and_then(|v| v.as_dict()) {
                for (_name, value) in font_dict.iter() {
                    if let Ok(single) = value.as_dict() {
                        if let Ok(base_font) = single.get(b"BaseFont").and_then(|v| v.as_name()) {
                            fonts.insert(String::from_utf8_lossy(base_font).to_string());
                        }
                    }
                }
            }
        }
    }
    fonts.into_iter().collect()
}

/// Whether the document embeds at least one image XObject.
pub fn has_image_xobject(doc: &LopdfDocument) -> bool {
    doc.objects.values().any(|obj| {
        obj.as_stream()
            .map(|s| {
                s.dict
                    .get(b"Subtype")
                    .and_then(|v| v.as_name())
                    .map(|n| n == b"Image")
                    .unwrap_or(false)
            })
            .unwrap_or(false)
    })
}

/// Get page dimensions (width, height) in points
pub fn get_page_dimensions(doc: &LopdfDocument, page_num: u32) -> Option<(f32, f32)> {
    let pages = doc.get_pages();
    let page_id = pages.get(&page_num)?;
    let page_dict = doc.get_object(*page_id).ok()?.as_dict().ok()?;
    let media_box = page_dict.get(b"MediaBox").ok()?.as_array().ok()?;
    if media_box.len() < 4 {
        return None;
    }
    let width = media_box[2].as_float().ok()? - media_box[0].as_float().ok()?;
    let height = media_box[3].as_float().ok()? - media_box[1].as_float().ok()?;
    Some((width, height))
}

// ============================================================================
// Fluent Assertion Macros
// ============================================================================

/// Assert that PDF contains specific text
#[macro_export]
macro_rules! assert_pdf_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            extracted.contains($text),
            "PDF should contain '{}', but extracted text was:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert that PDF does NOT contain specific text
#[macro_export]
macro_rules! assert_pdf_not_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            !extracted.contains($text),
            "PDF should NOT contain '{}', but it was found in:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert the number of pages in a PDF
#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $count:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $count,
            "Expected {} pages, got {}",
            $count,
            $pdf.page_count()
        );
    };
}

/// Assert minimum number of pages
#[macro_export]
macro_rules! assert_pdf_min_pages {
    ($pdf:expr, $min:expr) => {
        assert!(
            $pdf.page_count() >= $min,
            "Expected at least {} pages, got {}",
            $min,
            $pdf.page_count()
        );
    };
}

/// Assert that PDF references a font matching a pattern
#[macro_export]
macro_rules! assert_pdf_has_font {
    ($pdf:expr, $pattern:expr) => {
        let fonts = $crate::common::pdf_assertions::extract_font_names(&$pdf.doc);
        assert!(
            fonts.iter().any(|f| f.contains($pattern)),
            "PDF should contain font matching '{}', fonts found: {:?}",
            $pattern,
            fonts
        );
    };
}

/// Assert page dimensions within tolerance
#[macro_export]
macro_rules! assert_pdf_page_size {
    ($pdf:expr, $page:expr, $width:expr, $height:expr) => {
        let dims = $crate::common::pdf_assertions::get_page_dimensions(&$pdf.doc, $page);
        assert!(dims.is_some(), "Could not get dimensions for page {}", $page);
        let (w, h) = dims.unwrap();
        assert!(
            (w - $width).abs() < 1.0,
            "Page {} width expected ~{}, got {}",
            $page,
            $width,
            w
        );
        assert!(
            (h - $height).abs() < 1.0,
            "Page {} height expected ~{}, got {}",
            $page,
            $height,
            h
        );
    };
}
