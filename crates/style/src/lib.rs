//! Theme data model for résumé rendering.
//!
//! A [`Theme`] is a flat, immutable bundle of typography, color, geometry
//! and decoration parameters. A single layout algorithm branches on its
//! fields; there is no per-theme type hierarchy.

pub mod font;
pub mod registry;
pub mod theme;

pub use font::{FontSpec, FontStyle, FontWeight};
pub use registry::{ThemeRegistry, DEFAULT_THEME};
pub use theme::{Decorations, Margins, PhotoStyle, Theme};
