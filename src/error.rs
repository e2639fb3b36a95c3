//! Error types for trueno-raster operations.
//!
//! Rasterization itself never fails. Errors come from the edges of the crate:
//! parsing caller input, validating circles, loading configuration and writing
//! exported point tables.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in trueno-raster operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Non-numeric or missing coordinate input.
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Circle radius below zero.
    #[error("Negative radius: {0}")]
    NegativeRadius(i32),

    /// Primitive whose emitted pixels would not fit in `i32` coordinates.
    #[error("Coordinate out of range: center ({x}, {y}) with radius {radius}")]
    CoordinateOutOfRange {
        /// Center x.
        x: i32,
        /// Center y.
        y: i32,
        /// Requested radius.
        radius: i32,
    },

    /// Configuration parsing error with line number.
    #[error("Configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },

    /// Configuration file not found.
    #[error("Configuration file not found: {0}")]
    ConfigNotFound(String),

    /// Invalid configuration value.
    #[error("Invalid configuration value for '{key}': {message}")]
    ConfigInvalid {
        /// The configuration key with invalid value.
        key: String,
        /// Error message describing why the value is invalid.
        message: String,
    },
}
