//! # Error Types
//!
//! This module defines all error types for the fretboard mapper.
//!
//! ## Error Types
//! - `InvalidRoot` - The requested root is not one of the 12 pitch classes
//! - `CatalogError` - A chord/scale catalog could not be loaded
//! - `ConfigError` - The configuration is malformed or out of range
//!
//! An unrecognized chord or scale name is *not* an error. The query falls back
//! to single-note mode and reports an [`Advisory`](crate::Advisory) instead.
//!
//! ## Usage
//! ```rust
//! use fretboard::{compute_highlights, FretboardError};
//!
//! match compute_highlights("H", None) {
//!     Ok(highlights) => println!("{} positions", highlights.positions.len()),
//!     Err(FretboardError::InvalidRoot(name)) => eprintln!("No such note: {}", name),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FretboardError {
    /// The root note is not in the 12-class set.
    ///
    /// # Example
    /// ```
    /// # use fretboard::FretboardError;
    /// let err = FretboardError::InvalidRoot("H".to_string());
    /// assert_eq!(err.to_string(), "Note 'H' not found in note sequence");
    /// ```
    #[error("Note '{0}' not found in note sequence")]
    InvalidRoot(String),

    /// Catalog data error.
    ///
    /// Occurs when catalog YAML does not parse, an entry name is repeated,
    /// or an interval set is empty or does not start at the root.
    #[error("Invalid catalog: {0}")]
    CatalogError(String),

    /// Configuration error.
    ///
    /// # Example
    /// ```
    /// # use fretboard::FretboardError;
    /// let err = FretboardError::ConfigError("frets must be at least 1".to_string());
    /// assert_eq!(err.to_string(), "Invalid configuration: frets must be at least 1");
    /// ```
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}
