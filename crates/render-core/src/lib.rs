//! Core drawing abstractions for PDF generation.
//!
//! This crate provides the surface trait and types rendering backends
//! implement:
//! - `Surface` trait abstracting text/shape/image primitives and page breaks
//! - Error types for rendering operations
//! - Shared utility functions for font resolution and coordinate conversion

mod error;
mod surface;
pub mod utils;

pub use error::RenderError;
pub use surface::{PaintMode, Surface};
