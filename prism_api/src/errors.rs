//! Error types for the API client.

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The client builder was missing a required option or received an invalid one.
    #[error("Invalid client configuration: {0}")]
    Config(String),
    /// The request URL could not be composed from the base address and path.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// The request body could not be serialized to JSON.
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),
    /// The HTTP exchange itself failed (connection, TLS, timeout).
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The API returned 401, 404 or a 5xx status. The body snippet is kept
    /// for diagnostics only and is never parsed.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The API answered with a status object whose state is `ERROR`.
    /// `message` holds the pretty-printed error structure.
    #[error("{message}")]
    Api { state: String, message: String },
    /// The response body was not valid JSON or did not match the expected type.
    #[error("Failed to decode {context}: {source}")]
    Decode {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },
    /// A list page reported a negative offset or match count.
    #[error("Invalid list metadata: offset {offset}, total_matches {total_matches}")]
    InvalidListMetadata { offset: i64, total_matches: i64 },
    /// The response body exceeded the configured maximum size.
    #[error("Response body exceeds {limit} bytes")]
    BodyTooLarge { limit: usize },
    /// A cluster lookup succeeded but carried no external address.
    #[error("Cluster {0} has no external address")]
    MissingClusterAddress(String),
    /// A cluster-scoped action was given a VM without a cluster reference.
    #[error("VM {0} has no cluster reference")]
    MissingClusterReference(String),
    /// An update, delete or action was given an entity without `metadata.uuid`.
    #[error("{0} has no metadata.uuid")]
    MissingUuid(&'static str),
    /// A lookup by name matched no entity.
    #[error("{kind} not found: {name}")]
    NotFound { kind: &'static str, name: String },
}

impl Error {
    /// Returns the HTTP status code for hard status failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True only for the logical "no entity with that name" error, never for
    /// an HTTP 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
