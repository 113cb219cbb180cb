//! Export functionality for Operon designs.
//!
//! This module provides the [`Exporter`] trait that defines the interface
//! for converting a design into an output format, and the built-in
//! plain-text backend.
//!
//! # Available Backends
//!
//! - [`text`] — human-readable tree summary via [`text::TextExporter`]
//!
//! # Error Handling
//!
//! Export operations return [`Error`], covering malformed designs and I/O
//! failures. [`Error`] converts into [`OperonError::Export`] at the crate
//! boundary. A failed export never mutates the design; the error reports
//! how far traversal progressed.
//!
//! [`OperonError::Export`]: crate::OperonError::Export

/// Plain-text export backend.
pub mod text;

use thiserror::Error;

use operon_core::semantic::{Design, InteractionKind};

/// Abstraction for design export backends.
///
/// Implementors walk a [`Design`] and emit it in a specific output format.
/// See the [`text`] module for the built-in plain-text implementation.
pub trait Exporter {
    /// Exports a design to the backend's output format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingEndpoint`] if the design contains an
    /// interaction without an end part, or [`Error::Io`] if writing the
    /// output fails.
    fn export_design(&mut self, design: &Design) -> Result<(), Error>;
}

/// Errors that can occur during design export.
#[derive(Debug, Error)]
pub enum Error {
    /// Interaction `index` (in registration order) has no end part, so its
    /// arrow line cannot be emitted. `modules_printed` reports how many
    /// module tree lines were written before the failure.
    #[error(
        "interaction {index} ({kind}) has no end part (after {modules_printed} module lines)"
    )]
    MissingEndpoint {
        index: usize,
        kind: InteractionKind,
        modules_printed: usize,
    },

    /// An I/O error encountered while writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
