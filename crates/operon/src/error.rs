//! Error types for Operon operations.
//!
//! This module provides the main error type [`OperonError`] which wraps the
//! error conditions that can occur while processing a design.

use std::io;

use thiserror::Error;

/// The main error type for Operon operations.
#[derive(Debug, Error)]
pub enum OperonError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Export error: {0}")]
    Export(crate::export::Error),
}

impl From<crate::export::Error> for OperonError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(error)
    }
}
