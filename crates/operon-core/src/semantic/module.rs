//! Nestable module tree nodes.

use std::{cell::Cell, rc::Rc};

use crate::{
    geometry::Frame,
    identifier::Id,
    semantic::{Part, PartList},
};

/// A named, nestable grouping node.
///
/// A module owns an ordered list of child modules (the composite structure
/// giving designs arbitrary nesting depth), at most one [`PartList`] for
/// on-backbone content, and an ordered list of off-backbone "other parts"
/// (free-floating molecules such as repressors or RNAs). Children and own
/// parts are independent: a mixed-content module with both is legal, though
/// typical designs keep parts on leaf modules only.
///
/// The `design` field is a non-owning back-reference to the design's name,
/// shared with every child created through [`Module::add_module`]. The
/// hierarchy `level` and layout `frame` are assigned by a rendering stage;
/// both stay at their defaults (0 and `None`) until then.
///
/// # Examples
///
/// ```
/// # use std::rc::Rc;
/// # use operon_core::identifier::Id;
/// # use operon_core::semantic::{Module, Part, PartKind};
/// let design_name = Id::new("design1");
/// let mut module = Module::new(design_name, Id::new("module1"));
///
/// let child = module.add_module(Id::new("module1a"));
/// child.add_part(Rc::new(Part::new(
///     Id::new("module1a"),
///     Id::new("pTet"),
///     PartKind::Promoter,
/// )));
///
/// assert_eq!(module.children().len(), 1);
/// assert_eq!(module.children()[0].parts().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Module {
    design: Id,
    name: Id,
    level: Cell<u8>,
    frame: Cell<Option<Frame>>,
    children: Vec<Module>,
    part_list: Option<PartList>,
    other_parts: Vec<Rc<Part>>,
}

impl Module {
    /// Create a new module belonging to the named design.
    pub fn new(design: Id, name: Id) -> Self {
        Self {
            design,
            name,
            level: Cell::new(0),
            frame: Cell::new(None),
            children: Vec::new(),
            part_list: None,
            other_parts: Vec::new(),
        }
    }

    /// Create a child module sharing this module's design reference, append
    /// it, and return it for chaining.
    ///
    /// This is the sole mechanism for building tree depth.
    pub fn add_module(&mut self, name: Id) -> &mut Module {
        self.children.push(Module::new(self.design, name));
        self.children
            .last_mut()
            .expect("children is non-empty after push")
    }

    /// Append a part to this module's backbone, creating the part list on
    /// first use.
    pub fn add_part(&mut self, part: Rc<Part>) {
        self.part_list
            .get_or_insert_with(PartList::new)
            .add_part(part);
    }

    /// Append a batch of parts to this module's backbone in order, creating
    /// the part list on first use.
    pub fn add_parts(&mut self, parts: impl IntoIterator<Item = Rc<Part>>) {
        self.part_list
            .get_or_insert_with(PartList::new)
            .add_parts(parts);
    }

    /// Append an off-backbone part.
    pub fn add_other_part(&mut self, part: Rc<Part>) {
        self.other_parts.push(part);
    }

    /// Append a batch of off-backbone parts in order.
    pub fn add_other_parts(&mut self, parts: impl IntoIterator<Item = Rc<Part>>) {
        self.other_parts.extend(parts);
    }

    /// Get the module name.
    pub fn name(&self) -> Id {
        self.name
    }

    /// Get the name of the design this module belongs to.
    pub fn design(&self) -> Id {
        self.design
    }

    /// Borrow the child modules in insertion order.
    pub fn children(&self) -> &[Module] {
        &self.children
    }

    /// Borrow the backbone part list, if any part has been added.
    ///
    /// Absence is a valid state; a module that never received a part has no
    /// part list.
    pub fn part_list(&self) -> Option<&PartList> {
        self.part_list.as_ref()
    }

    /// Borrow the on-backbone parts, or the empty slice when no part list
    /// exists yet.
    pub fn parts(&self) -> &[Rc<Part>] {
        self.part_list.as_ref().map_or(&[], PartList::parts)
    }

    /// Borrow the off-backbone parts in insertion order.
    pub fn other_parts(&self) -> &[Rc<Part>] {
        &self.other_parts
    }

    /// Get the hierarchy level (0 until a renderer assigns levels).
    pub fn level(&self) -> u8 {
        self.level.get()
    }

    /// Assign the hierarchy level (called by a rendering stage).
    pub fn set_level(&self, level: u8) {
        self.level.set(level);
    }

    /// Get the layout frame, if a renderer has assigned one.
    pub fn frame(&self) -> Option<Frame> {
        self.frame.get()
    }

    /// Assign a layout frame (called by a rendering stage).
    pub fn set_frame(&self, frame: Frame) {
        self.frame.set(Some(frame));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::semantic::PartKind;

    fn part(module: &Module, name: &str, kind: PartKind) -> Rc<Part> {
        Rc::new(Part::new(module.design(), Id::new(name), kind))
    }

    #[test]
    fn test_new_module_is_empty() {
        let module = Module::new(Id::new("d"), Id::new("m"));
        assert!(module.children().is_empty());
        assert!(module.part_list().is_none());
        assert!(module.parts().is_empty());
        assert!(module.other_parts().is_empty());
        assert_eq!(module.level(), 0);
        assert!(module.frame().is_none());
    }

    #[test]
    fn test_add_module_shares_design_and_preserves_order() {
        let mut root = Module::new(Id::new("design1"), Id::new("root"));
        root.add_module(Id::new("a"));
        root.add_module(Id::new("b"));
        root.add_module(Id::new("c"));

        let names: Vec<String> = root
            .children()
            .iter()
            .map(|child| child.name().to_string())
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        for child in root.children() {
            assert_eq!(child.design(), "design1");
        }
    }

    #[test]
    fn test_add_module_chains_to_arbitrary_depth() {
        let mut root = Module::new(Id::new("d"), Id::new("root"));
        root.add_module(Id::new("level1"))
            .add_module(Id::new("level2"))
            .add_module(Id::new("level3"));

        let level1 = &root.children()[0];
        let level2 = &level1.children()[0];
        let level3 = &level2.children()[0];
        assert_eq!(level3.name(), "level3");
        assert_eq!(level3.design(), "d");
    }

    #[test]
    fn test_add_part_creates_part_list_lazily() {
        let mut module = Module::new(Id::new("d"), Id::new("m"));
        assert!(module.part_list().is_none());

        module.add_part(part(&module, "p1", PartKind::Promoter));
        assert!(module.part_list().is_some());
        assert_eq!(module.parts().len(), 1);
    }

    #[test]
    fn test_individual_and_batch_adds_are_equivalent() {
        let mut one_by_one = Module::new(Id::new("d"), Id::new("m1"));
        let mut batched = Module::new(Id::new("d"), Id::new("m2"));

        let names = ["x", "y", "z"];
        for name in names {
            one_by_one.add_part(part(&one_by_one, name, PartKind::Cds));
        }
        let batch: Vec<Rc<Part>> = names
            .iter()
            .map(|name| part(&batched, name, PartKind::Cds))
            .collect();
        batched.add_parts(batch);

        let collect = |module: &Module| -> Vec<String> {
            module.parts().iter().map(|p| p.name().to_string()).collect()
        };
        assert_eq!(collect(&one_by_one), collect(&batched));
        assert_eq!(collect(&one_by_one), vec!["x", "y", "z"]);
    }

    #[test]
    fn test_other_parts_are_independent_of_part_list() {
        let mut module = Module::new(Id::new("d"), Id::new("m"));
        module.add_other_parts(vec![
            part(&module, "R1", PartKind::Unspecified),
            part(&module, "R2", PartKind::Macromolecule),
        ]);
        module.add_other_part(part(&module, "R3", PartKind::Rna));

        assert_eq!(module.other_parts().len(), 3);
        assert!(module.part_list().is_none());
    }

    #[test]
    fn test_mixed_content_module() {
        let mut module = Module::new(Id::new("d"), Id::new("m"));
        module.add_part(part(&module, "p", PartKind::Promoter));
        module.add_module(Id::new("child"));

        assert_eq!(module.children().len(), 1);
        assert_eq!(module.parts().len(), 1);
    }
}
