//! Domain-specific error types for figma-features

use thiserror::Error;

/// Main error type for the figma-features pipeline.
///
/// Both variants are transport failures; malformed model output is not an
/// error and never surfaces here (it is normalized into a diagnostic record
/// instead).
#[derive(Error, Debug)]
pub enum FigmaFeaturesError {
    /// Transport-level failure (connect, TLS, body read or decode) before or
    /// after the status line.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status from a remote service, with the response body kept
    /// for diagnostics.
    #[error("{service} API error {status}: {body}")]
    Api {
        service: &'static str,
        status: u16,
        body: String,
    },
}

/// Result type alias for figma-features operations
pub type Result<T> = std::result::Result<T, FigmaFeaturesError>;
