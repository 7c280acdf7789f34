//! # vitae-core
//!
//! Résumé PDF rendering facade.
//!
//! Wires the theme registry, the layout engine and the lopdf drawing
//! surface into a single synchronous entry point: one résumé record and a
//! theme name in, one complete PDF byte buffer out. Rendering touches no
//! shared mutable state, so renders may run fully in parallel.

mod error;
mod renderer;

pub use error::Error;
pub use renderer::ResumeRenderer;

// Re-export the types callers need to drive a render.
pub use vitae_model::{Education, Resume, WorkExperience};
pub use vitae_style::{Theme, ThemeRegistry, DEFAULT_THEME};
pub use vitae_traits::{
    FilesystemPhotoStore, InMemoryPhotoStore, PhotoError, PhotoStore, SharedPhotoData,
};
