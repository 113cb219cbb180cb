//! The root design aggregate.

use crate::{
    identifier::Id,
    semantic::{Interaction, Module},
};

/// The root aggregate of a genetic circuit design.
///
/// A design holds its top-level modules (the traversal roots) and the
/// cross-cutting interactions between parts anywhere in — or outside — the
/// module tree. All additions are append-only and preserve registration
/// order; nothing deduplicates or validates cross-references, so a
/// malformed structure is representable and only surfaces when a consumer
/// walks it.
///
/// # Examples
///
/// ```
/// # use std::rc::Rc;
/// # use operon_core::identifier::Id;
/// # use operon_core::semantic::{Design, Module, Part, PartKind};
/// let mut design = Design::new(Id::new("design1"));
///
/// let mut module = Module::new(design.name(), Id::new("module1"));
/// module.add_part(Rc::new(Part::new(
///     module.name(),
///     Id::new("pTet"),
///     PartKind::Promoter,
/// )));
/// design.add_module(module);
///
/// assert_eq!(design.modules().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Design {
    name: Id,
    modules: Vec<Module>,
    interactions: Vec<Interaction>,
}

impl Design {
    /// Create an empty design with the given name.
    pub fn new(name: Id) -> Self {
        Self {
            name,
            modules: Vec::new(),
            interactions: Vec::new(),
        }
    }

    /// Get the design name.
    pub fn name(&self) -> Id {
        self.name
    }

    /// Register a top-level module.
    pub fn add_module(&mut self, module: Module) {
        self.modules.push(module);
    }

    /// Register a batch of top-level modules in order.
    pub fn add_modules(&mut self, modules: impl IntoIterator<Item = Module>) {
        self.modules.extend(modules);
    }

    /// Register an interaction.
    pub fn add_interaction(&mut self, interaction: Interaction) {
        self.interactions.push(interaction);
    }

    /// Register a batch of interactions in order.
    pub fn add_interactions(&mut self, interactions: impl IntoIterator<Item = Interaction>) {
        self.interactions.extend(interactions);
    }

    /// Borrow the top-level modules in registration order.
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    /// Borrow the interactions in registration order.
    pub fn interactions(&self) -> &[Interaction] {
        &self.interactions
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::semantic::{InteractionKind, Part, PartKind};

    #[test]
    fn test_new_design_is_empty() {
        let design = Design::new(Id::new("empty"));
        assert!(design.modules().is_empty());
        assert!(design.interactions().is_empty());
        assert_eq!(design.name(), "empty");
    }

    #[test]
    fn test_modules_keep_registration_order() {
        let mut design = Design::new(Id::new("d"));
        design.add_module(Module::new(design.name(), Id::new("m1")));
        design.add_modules(vec![
            Module::new(design.name(), Id::new("m2")),
            Module::new(design.name(), Id::new("m3")),
        ]);

        let names: Vec<String> = design
            .modules()
            .iter()
            .map(|m| m.name().to_string())
            .collect();
        assert_eq!(names, vec!["m1", "m2", "m3"]);
    }

    #[test]
    fn test_interactions_may_reference_unregistered_parts() {
        // The endpoint parts here belong to a module never added to the
        // design; registration is not validated.
        let mut design = Design::new(Id::new("d"));
        let orphan = Id::new("orphan_module");
        let a = Rc::new(Part::new(orphan, Id::new("a"), PartKind::Cds));
        let b = Rc::new(Part::new(orphan, Id::new("b"), PartKind::Promoter));

        design.add_interaction(Interaction::new(
            InteractionKind::Inhibition,
            Rc::clone(&a),
            Some(Rc::clone(&b)),
        ));

        assert_eq!(design.interactions().len(), 1);
        assert!(Rc::ptr_eq(design.interactions()[0].start(), &a));
    }
}
