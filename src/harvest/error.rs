//! Error types for the harvest module.

use thiserror::Error;

/// Failures while talking to the metadata API.
///
/// None of these abort a run. A search failure degrades to zero
/// identifiers and a batch failure drops that batch's terms; the errors
/// are kept so logs and the run report can account for what was lost.
#[derive(Debug, Error)]
pub enum HarvestError {
    /// The request never produced a usable response.
    #[error("request to {url} failed: {source}")]
    Transport {
        /// Endpoint the request was sent to.
        url: String,
        /// Underlying client error.
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    Status {
        /// Endpoint that answered.
        url: String,
        /// HTTP status code received.
        status: u16,
    },

    /// The search response body was not the expected JSON envelope.
    #[error("search response could not be decoded: {source}")]
    Decode {
        /// Underlying deserialization error.
        #[source]
        source: reqwest::Error,
    },

    /// A metadata batch returned XML that could not be parsed.
    #[error("batch {batch} returned unparseable XML: {source}")]
    Parse {
        /// Zero-based index of the failed batch.
        batch: usize,
        /// Underlying reader error.
        #[source]
        source: quick_xml::Error,
    },
}

impl HarvestError {
    /// Creates a Transport error.
    pub fn transport(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Transport {
            url: url.into(),
            source,
        }
    }

    /// Creates a Status error.
    pub fn status(url: impl Into<String>, status: u16) -> Self {
        Self::Status {
            url: url.into(),
            status,
        }
    }

    /// Creates a Decode error.
    #[must_use]
    pub fn decode(source: reqwest::Error) -> Self {
        Self::Decode { source }
    }

    /// Creates a Parse error.
    #[must_use]
    pub fn parse(batch: usize, source: quick_xml::Error) -> Self {
        Self::Parse { batch, source }
    }
}

// Note on From trait implementations:
// No From<reqwest::Error> is provided on purpose. The same client error
// means different things on the search and fetch paths, so call sites
// pick the variant (and attach the endpoint or batch index) explicitly.
