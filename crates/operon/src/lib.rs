//! Operon - A hierarchical data model for genetic circuit designs.
//!
//! Operon models DNA/RNA parts, nestable modules, and the regulatory
//! interactions between parts, in the shape an SBOL-style diagram renderer
//! consumes. This crate re-exports the core model types and adds the
//! export surface: a plain-text tree summary of a design.
//!
//! Building a design is purely constructive — nothing is validated,
//! removed, or reordered. Geometry fields (frames, baseline positions,
//! arrow coordinates, hierarchy levels) exist as the contract with a
//! rendering stage and stay unset until one writes them.
//!
//! # Examples
//!
//! ```
//! use std::rc::Rc;
//!
//! use operon::{
//!     identifier::Id,
//!     semantic::{Design, Interaction, InteractionKind, Module, Part, PartKind},
//! };
//!
//! // Build a one-module design with an inhibition edge.
//! let mut design = Design::new(Id::new("D"));
//! let mut module = Module::new(design.name(), Id::new("M"));
//!
//! let a = Rc::new(Part::new(module.name(), Id::new("a"), PartKind::Promoter));
//! let b = Rc::new(Part::new(module.name(), Id::new("b"), PartKind::Cds));
//! module.add_parts(vec![Rc::clone(&a), Rc::clone(&b)]);
//! design.add_module(module);
//! design.add_interaction(Interaction::new(InteractionKind::Inhibition, a, Some(b)));
//!
//! let text = operon::design_to_string(&design).expect("export failed");
//! assert_eq!(
//!     text,
//!     "Design: D\n  Module: M\n    Parts: a,b\n\
//!      Interaction from part: a to part: b of type: inhibition\n",
//! );
//! ```

pub mod export;

mod error;

pub use operon_core::{geometry, identifier, options, semantic};

pub use error::OperonError;

use std::io;

use export::{Exporter, text::TextExporter};
use semantic::Design;

/// Render a design's plain-text tree summary into a `String`.
///
/// # Errors
///
/// Returns [`OperonError::Export`] if the design contains an interaction
/// with a missing end part. The design itself is left untouched.
pub fn design_to_string(design: &Design) -> Result<String, OperonError> {
    let mut exporter = TextExporter::new(Vec::new());
    exporter.export_design(design)?;
    Ok(String::from_utf8_lossy(&exporter.into_inner()).into_owned())
}

/// Print a design's plain-text tree summary to standard output.
///
/// # Errors
///
/// Returns [`OperonError::Export`] for an interaction with a missing end
/// part, or [`OperonError::Io`] if writing to stdout fails.
pub fn print_design(design: &Design) -> Result<(), OperonError> {
    let mut exporter = TextExporter::new(io::stdout().lock());
    exporter.export_design(design)?;
    Ok(())
}
