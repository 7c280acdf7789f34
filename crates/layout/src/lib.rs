//! Page layout for résumé documents.
//!
//! The engine walks a résumé record section by section, driving a
//! [`Surface`](vitae_render_core::Surface) through text, shape and image
//! primitives. It reasons entirely in top-down coordinates; the surface
//! owns the conversion to PDF space.

mod cursor;
mod engine;
pub(crate) mod labels;

#[cfg(test)]
mod test_surface;

pub use cursor::Cursor;
pub use engine::LayoutEngine;
