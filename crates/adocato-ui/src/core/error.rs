//! Error types for page behaviors.
//!
//! # Design
//! - Constant error messages; context travels in structured fields.
//! - Every variant maps to a silent no-op for the user and a console entry for developers.

use thiserror::Error;

/// Result type for page behavior operations.
pub type UiResult<T> = Result<T, UiError>;

/// Failures surfaced by the preview, dismissal and theme behaviors.
#[derive(Debug, Error)]
pub enum UiError {
    /// An element named by the page contract is not in the document.
    #[error("required element missing")]
    MissingElement {
        /// Element id that could not be resolved.
        id: String,
    },
    /// No ancestor matched the selector the preview is attached to.
    #[error("container ancestor missing")]
    MissingAncestor {
        /// Selector that failed to match.
        selector: String,
    },
    /// A DOM call was rejected by the browser.
    #[error("dom operation failed")]
    Dom {
        /// Operation being performed.
        operation: &'static str,
        /// Browser-provided detail.
        detail: String,
    },
    /// The selected file could not be read.
    #[error("file read failed")]
    FileRead {
        /// Name of the file that failed.
        name: String,
        /// Reader-provided detail.
        detail: String,
    },
    /// The toggle request did not complete.
    #[error("request failed")]
    Request {
        /// Endpoint that was called.
        endpoint: String,
        /// Transport-provided detail.
        detail: String,
    },
    /// The toggle endpoint answered with a non-success status.
    #[error("unexpected response status")]
    Status {
        /// Endpoint that was called.
        endpoint: String,
        /// HTTP status code.
        status: u16,
    },
    /// The toggle response body did not match `{ "dark_mode": bool }`.
    #[error("malformed toggle response")]
    MalformedResponse {
        /// Underlying JSON error.
        source: serde_json::Error,
    },
}

/// Failures while loading the page contract.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The inline configuration document was not valid JSON for the contract.
    #[error("config json invalid")]
    Json {
        /// Underlying JSON error.
        source: serde_json::Error,
    },
    /// A field failed validation.
    #[error("config field invalid")]
    InvalidField {
        /// Field that failed validation.
        field: &'static str,
        /// Static reason for the failure.
        reason: &'static str,
    },
}
