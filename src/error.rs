//! Error types for the export flow

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while exporting a rendered document
///
/// Rendering itself cannot fail; these cover the filesystem write and the
/// host's viewer launch. Nothing is retried or recovered internally.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Writing the rendered document to disk failed
    #[error("failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The host's browser launcher failed to open the written document
    #[error("failed to open viewer for '{url}': {source}")]
    Viewer {
        url: String,
        #[source]
        source: io::Error,
    },
}
