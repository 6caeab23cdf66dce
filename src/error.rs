use thiserror::Error;

// ─── Unified error type ──────────────────────────────────────────

/// Everything that can abort a measurement before the body is read.
///
/// Mid-stream failures are not errors here: they end the read loop and
/// surface as [`crate::body::StreamEnd::Error`] in the summary.
#[derive(Debug, Error)]
pub enum SampleError {
    /// The initial GET never produced response headers.
    #[error("{target}: {source}")]
    Request {
        target: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("cannot build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}
