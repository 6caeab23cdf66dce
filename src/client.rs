use std::time::Duration;

use reqwest::Client;

use crate::error::SampleError;

/// Upper bound on TCP/TLS connection setup. The body itself has no
/// deadline and streams until the server ends it.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Creates the HTTP client used for the probe.
///
/// Stock redirect policy, no default headers, no overall request timeout.
/// `Client` is cheaply cloneable; one instance per process is enough.
pub fn build() -> Result<Client, SampleError> {
    Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .build()
        .map_err(SampleError::Client)
}
