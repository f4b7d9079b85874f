use std::sync::Arc;

use thiserror::Error;

/// Why a translation table could not be produced.
///
/// The engine never surfaces these to the page: they are logged and the
/// document keeps whatever it was showing.
#[derive(Debug, Clone, Error)]
pub enum LocalizationError {
    /// No table registered under the cache key and nothing to fetch it with.
    #[error("translations not found for \"{cache_key}\"")]
    TableNotFound { cache_key: String },

    /// The request itself failed.
    #[error("failed to fetch {url}: {message}")]
    Fetch { url: String, message: String },

    /// The server answered with a non-success status.
    #[error("failed to fetch {url}: HTTP {status}")]
    Status { url: String, status: u16 },

    /// The document was fetched but is not a translation table.
    #[error("invalid translation document {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: Arc<serde_json::Error>,
    },
}
