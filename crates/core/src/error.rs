//! Error types for SeoLens operations.
//!
//! This module defines the main error type [`SeoLensError`] which represents
//! everything that can go wrong while fetching a page, reading local input,
//! or parsing HTML.
//!
//! The content analysis stages never fail: any string, including the empty
//! one, yields a report. Errors only come from the layers around them.
//!
//! # Example
//!
//! ```rust
//! use seolens_core::{SeoLensError, Result};
//!
//! fn require_http(url: &str) -> Result<&str> {
//!     if !url.starts_with("http://") && !url.starts_with("https://") {
//!         return Err(SeoLensError::InvalidUrl(url.to_string()));
//!     }
//!     Ok(url)
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for page analysis.
#[derive(Error, Debug)]
pub enum SeoLensError {
    /// HTTP request errors from reqwest.
    ///
    /// Wraps protocol and body decoding failures that are neither timeouts
    /// nor connection failures.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request timeout.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// The remote host could not be reached.
    #[error("Connection error: {0}")]
    Connection(String),

    /// The page answered with a status other than 200.
    #[error("Failed to load page: HTTP {status}")]
    HttpStatus { status: u16 },

    /// Invalid URL provided.
    ///
    /// Returned when a URL cannot be parsed or does not use http(s).
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTML parsing errors, usually an invalid CSS selector.
    #[error("Failed to parse HTML: {0}")]
    HtmlParseError(String),

    /// Report serialization failed.
    #[error("Failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// File read/write errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for SeoLensError.
pub type Result<T> = std::result::Result<T, SeoLensError>;
