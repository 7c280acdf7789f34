//! PDF drawing surface backed by lopdf.
//!
//! This crate implements the `Surface` trait by buffering content-stream
//! operations per page and assembling a complete PDF document on `finish()`.
//! It owns the conversion from the layout engine's top-down coordinates to
//! PDF's bottom-left origin.

mod images;
mod surface;

pub use surface::PdfSurface;
