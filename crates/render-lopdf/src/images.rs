use vitae_render_core::RenderError;

/// A decoded image staged for embedding as a DeviceRGB XObject.
#[derive(Debug)]
pub(crate) struct StagedImage {
    /// Resource name the content stream references (`Im1`, `Im2`, ...).
    pub name: String,
    pub width: u32,
    pub height: u32,
    /// Raw RGB8 samples, row-major.
    pub data: Vec<u8>,
}

/// Decode arbitrary image bytes (PNG/JPEG/GIF) into raw RGB8 samples.
pub(crate) fn decode_rgb(bytes: &[u8]) -> Result<(u32, u32, Vec<u8>), RenderError> {
    let decoded = image::load_from_memory(bytes)
        .map_err(|e| RenderError::Image(e.to_string()))?;
    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();
    Ok((width, height, rgb.into_raw()))
}
