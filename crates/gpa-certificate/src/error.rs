//! Certificate error types.

use std::path::PathBuf;

use gpa_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CertificateError {
    /// A precondition checked by the core failed (student info, not ready).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Writing the rendered certificate failed.
    #[error("Failed to write certificate to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The PDF document could not be serialized.
    #[error("Failed to build PDF for {path}: {reason}")]
    Pdf { path: PathBuf, reason: String },

    /// None of the candidate paths produced a readable image.
    ///
    /// Never returned from rendering: it is logged and the certificate is
    /// drawn without the image.
    #[error("Asset unavailable, tried: {candidates}")]
    AssetUnavailable { candidates: String },
}
