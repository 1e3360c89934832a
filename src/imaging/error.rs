use thiserror::Error;

/// The only two failure kinds the image pipeline produces. Both are terminal
/// for the request that triggered them; the session keeps its prior state.
#[derive(Debug, Error)]
pub enum ImagingError {
    /// The raw input could not be read at all.
    #[error("failed to read image file: {0}")]
    FileRead(#[from] std::io::Error),

    /// The bytes are not a decodable raster image.
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
}
