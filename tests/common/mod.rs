pub mod fixtures;
pub mod pdf_assertions;

use lopdf::Document as LopdfDocument;
use std::sync::Arc;
use vitae::{PhotoStore, Resume, ResumeRenderer};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Save PDF to a file for manual debugging
    #[allow(dead_code)]
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

/// Render a résumé without photo resolution.
pub fn render_resume(resume: &Resume, theme: &str) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let bytes = ResumeRenderer::new().render(resume, theme)?;
    GeneratedPdf::from_bytes(bytes)
}

/// Render a résumé with a photo store attached.
#[allow(dead_code)]
pub fn render_resume_with_photos(
    resume: &Resume,
    theme: &str,
    store: Arc<dyn PhotoStore>,
) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let bytes = ResumeRenderer::new()
        .with_photo_store(store)
        .render(resume, theme)?;
    GeneratedPdf::from_bytes(bytes)
}
