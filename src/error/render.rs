use std::path::PathBuf;

use thiserror::Error;

/// Failures that leave the map unavailable for a request.
///
/// Both variants are fatal for the render call; no partial image is ever returned.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The base map could not be opened or decoded.
    #[error("Failed to load base map image '{}': {source}", path.display())]
    Unavailable {
        /// Configured location of the base image
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The painted map could not be encoded as PNG.
    #[error("Failed to encode map as PNG: {0}")]
    Encode(#[source] image::ImageError),
}
