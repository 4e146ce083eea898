use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal failures of a controller generation batch.
///
/// Any of these aborts the remaining files of the batch. Controllers written
/// before the failure are left on disk.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("failed to read service file {}", .path.display())]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write controller {}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unsupported service file name: {0} (expected a `.ts` source file)")]
    UnsupportedFileName(String),

    #[error("failed to render controller {controller}")]
    Render {
        controller: String,
        #[source]
        source: askama::Error,
    },
}
