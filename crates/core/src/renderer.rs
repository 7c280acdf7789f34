use crate::error::Error;
use std::sync::Arc;
use vitae_layout::LayoutEngine;
use vitae_model::Resume;
use vitae_render_lopdf::PdfSurface;
use vitae_style::ThemeRegistry;
use vitae_traits::{PhotoStore, SharedPhotoData};

/// Renders résumé records to PDF bytes.
///
/// The renderer is cheap to clone-by-reference and safe to share across
/// threads: the registry is immutable and each render allocates its own
/// surface and cursors.
pub struct ResumeRenderer {
    registry: &'static ThemeRegistry,
    photos: Option<Arc<dyn PhotoStore>>,
}

impl Default for ResumeRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeRenderer {
    /// A renderer over the built-in themes, without photo resolution.
    pub fn new() -> Self {
        Self {
            registry: ThemeRegistry::builtin(),
            photos: None,
        }
    }

    /// Attach a photo store used to resolve résumé photo keys.
    pub fn with_photo_store(mut self, store: Arc<dyn PhotoStore>) -> Self {
        self.photos = Some(store);
        self
    }

    /// Names of the available themes, in registration order.
    pub fn available_themes(&self) -> Vec<&str> {
        self.registry.names()
    }

    /// Render `resume` with the named theme.
    ///
    /// Unknown theme names silently fall back to the default theme; a
    /// missing or unreadable photo is logged and skipped. The returned
    /// buffer is always a complete document — there is no partial output.
    pub fn render(&self, resume: &Resume, theme_name: &str) -> Result<Vec<u8>, Error> {
        let theme = self.registry.lookup(theme_name);
        log::debug!(
            "rendering résumé for '{}' with theme '{}'",
            resume.full_name(),
            theme.name
        );

        let photo = self.resolve_photo(resume);
        let mut surface = PdfSurface::a4();
        LayoutEngine::new(theme).render(
            resume,
            photo.as_ref().map(|data| data.as_slice()),
            &mut surface,
        );
        Ok(surface.finish()?)
    }

    fn resolve_photo(&self, resume: &Resume) -> Option<SharedPhotoData> {
        let key = resume.photo.as_deref()?;
        let store = self.photos.as_deref()?;
        match store.load(key) {
            Ok(data) => Some(data),
            Err(e) => {
                log::warn!("photo '{key}' unavailable via {}: {e}", store.name());
                None
            }
        }
    }
}
