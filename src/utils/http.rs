//! The http module contains the fetcher for remote registry documents.

use reqwest::StatusCode;
use thiserror::Error;
use url::Url;

/// Failures raised while fetching a document from the registry.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The requested URI is not a valid URL.
    #[error("invalid URI `{uri}`: {source}")]
    InvalidUri {
        /// The offending URI.
        uri: String,
        /// Underlying parse failure.
        source: url::ParseError,
    },
    /// The request could not be completed.
    #[error("request to {uri} failed: {source}")]
    Transport {
        /// The URI the request was sent to.
        uri: String,
        /// Underlying client failure.
        source: reqwest::Error,
    },
    /// The response carried a non-success status code.
    #[error("response from {uri} was {status}")]
    Status {
        /// The URI the request was sent to.
        uri: String,
        /// HTTP status code of the response.
        status: StatusCode,
    },
}

/// Fetch the document at `uri`, returning its body text.
///
/// A single blocking GET with no retries and no fallback; any non-success
/// response is an error carrying the offending URI and status code.
///
/// # Errors
/// Errors if the URI is invalid, the request cannot be completed, or the
/// response status is not a success.
pub fn fetch(uri: &str) -> Result<String, FetchError> {
    let url = Url::parse(uri).map_err(|source| FetchError::InvalidUri {
        uri: uri.to_owned(),
        source,
    })?;
    tracing::debug!("GET {url}");
    let response = reqwest::blocking::get(url).map_err(|source| FetchError::Transport {
        uri: uri.to_owned(),
        source,
    })?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            uri: uri.to_owned(),
            status,
        });
    }
    response.text().map_err(|source| FetchError::Transport {
        uri: uri.to_owned(),
        source,
    })
}
