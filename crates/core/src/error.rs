use thiserror::Error;
use vitae_render_core::RenderError;

/// The error type for render operations.
///
/// Missing photos and unknown theme names are normalized inputs, not
/// errors; only drawing-backend failures surface here.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),
}
