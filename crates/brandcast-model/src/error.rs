use thiserror::Error;

/// Errors returned by the model endpoint client and response extractor.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Network or TLS failure from the underlying HTTP client, or a non-2xx
    /// HTTP status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint returned a 2xx response without any text content.
    #[error("model returned an empty response")]
    EmptyResponse,

    /// The response envelope or the extracted payload could not be parsed.
    #[error("JSON parse error for {context}: {source}")]
    Parse {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
