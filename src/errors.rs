/*!
 * Error types for the adscribe application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur while parsing a script PDF
#[derive(Error, Debug)]
pub enum ParseError {
    /// Error when the PDF file cannot be opened or loaded at all.
    /// This is fatal: no partial parse results are produced.
    #[error("Could not open PDF file: {0}")]
    PdfOpen(String),

    /// Error when page geometry (words, strokes) cannot be extracted
    #[error("Failed to extract page geometry: {0}")]
    Geometry(String),

    /// Error when an entry field edit receives an invalid value
    #[error("Invalid timecode '{0}': expected 4-6 digits in MMSS/HMMSS/HHMMSS form")]
    InvalidTimecode(String),

    /// Error when an edit operation addresses a position outside the entry list
    #[error("Entry position {position} out of range (0..{len})")]
    PositionOutOfRange {
        /// Requested position
        position: usize,
        /// Current number of entries
        len: usize,
    },
}

/// Errors that can occur during SRT generation
#[derive(Error, Debug)]
pub enum SubtitleError {}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from PDF script parsing
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Error from SRT generation
    #[error("Subtitle error: {0}")]
    Subtitle(#[from] SubtitleError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
