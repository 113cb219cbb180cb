//! Semantic model for genetic circuit designs.
//!
//! This module contains the hierarchical data model a rendering pipeline
//! consumes to draw SBOL-style circuit diagrams:
//!
//! - [`Part`] - a single biological part (promoter, CDS, terminator, ...)
//! - [`PartList`] - an ordered run of parts sharing one backbone
//! - [`Interaction`] - a typed regulatory edge between two parts
//! - [`Module`] - a nestable grouping node owning parts and sub-modules
//! - [`Design`] - the root aggregate of modules and interactions
//!
//! Ownership is strictly tree-shaped (`Design` → `Module` → parts), while
//! parts themselves are shared via `Rc` so interactions can reference parts
//! in arbitrary subtrees by identity. Back-references (`Part::module`,
//! `Module::design`) are plain [`Id`]s kept for contextual lookup only and
//! are never validated against actual containment.
//!
//! [`Id`]: crate::identifier::Id

mod design;
mod interaction;
mod module;
mod part;

pub use design::Design;
pub use interaction::{Interaction, InteractionKind};
pub use module::Module;
pub use part::{Backbone, Orientation, Part, PartKind, PartList};
