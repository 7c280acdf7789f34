//! # vitae
//!
//! Themed résumé PDF rendering.
//!
//! A résumé record plus a theme name goes in; a complete, deterministic PDF
//! byte buffer comes out. Five built-in themes control typography, colors,
//! margins, decorations, photo placement and one- or two-column layout; the
//! single layout algorithm branches on theme fields rather than dispatching
//! to per-theme renderers.
//!
//! ```no_run
//! use vitae::{Resume, ResumeRenderer};
//!
//! let resume = Resume {
//!     first_name: "Анна".to_string(),
//!     last_name: "Иванова".to_string(),
//!     position: "Инженер".to_string(),
//!     city: "Москва".to_string(),
//!     ..Default::default()
//! };
//! let pdf = ResumeRenderer::new().render(&resume, "modern")?;
//! std::fs::write("resume.pdf", pdf)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Re-export foundation crates
pub use vitae_model as model;
pub use vitae_style as style;
pub use vitae_traits as traits;
pub use vitae_types as types;

// Re-export algorithm and render crates
pub use vitae_layout as layout;
pub use vitae_render_core as render_core;
pub use vitae_render_lopdf as render_lopdf;

// Re-export commonly used types at the crate root
pub use vitae_core::{
    Education, Error, FilesystemPhotoStore, InMemoryPhotoStore, PhotoError, PhotoStore, Resume,
    ResumeRenderer, SharedPhotoData, Theme, ThemeRegistry, WorkExperience, DEFAULT_THEME,
};
