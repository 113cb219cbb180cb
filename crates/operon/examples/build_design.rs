//! Example: Building a genetic circuit design programmatically
//!
//! This example constructs a small two-module design with nested
//! sub-modules, an off-backbone repressor, and cross-module regulatory
//! interactions, then prints its tree summary.

use std::rc::Rc;

use operon::{
    identifier::Id,
    semantic::{Design, Interaction, InteractionKind, Module, Orientation, Part, PartKind},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Building genetic circuit design...\n");

    let mut design = Design::new(Id::new("design1"));

    // Module 1 contains three sub-modules, each carrying a backbone segment.
    let mut module1 = Module::new(design.name(), Id::new("module1"));

    let module1a = module1.add_module(Id::new("module1a"));
    let part_1a = Rc::new(Part::new(
        module1a.name(),
        Id::new("1a"),
        PartKind::Promoter,
    ));
    module1a.add_part(Rc::clone(&part_1a));
    module1a.add_part(Rc::new(Part::new(
        module1a.name(),
        Id::new("1aT"),
        PartKind::Terminator,
    )));

    let module1b = module1.add_module(Id::new("module1b"));
    module1b.add_part(Rc::new(
        Part::new(module1b.name(), Id::new("1b"), PartKind::Promoter)
            .with_orientation(Orientation::Reverse),
    ));

    let module1c = module1.add_module(Id::new("module1c"));
    let part_1c = Rc::new(Part::new(module1c.name(), Id::new("1c"), PartKind::Cds));
    module1c.add_part(Rc::clone(&part_1c));

    // Module 2 is a leaf with one backbone part and a floating repressor.
    let mut module2 = Module::new(design.name(), Id::new("module2"));
    let part_2 = Rc::new(Part::new(module2.name(), Id::new("2"), PartKind::Promoter));
    module2.add_part(Rc::clone(&part_2));
    let repressor = Rc::new(Part::new(
        module2.name(),
        Id::new("R1"),
        PartKind::Unspecified,
    ));
    module2.add_other_part(Rc::clone(&repressor));

    design.add_modules(vec![module1, module2]);

    // Regulatory edges crossing module boundaries.
    design.add_interactions(vec![
        Interaction::new(
            InteractionKind::Inhibition,
            Rc::clone(&part_1c),
            Some(Rc::clone(&part_1a)),
        ),
        Interaction::new(
            InteractionKind::Process,
            Rc::clone(&part_1c),
            Some(Rc::clone(&repressor)),
        ),
        Interaction::new(InteractionKind::Stimulation, repressor, Some(part_2)),
    ]);

    println!("Created design:");
    println!("  Top-level modules: {}", design.modules().len());
    println!("  Interactions: {}", design.interactions().len());
    println!();

    operon::print_design(&design)?;

    Ok(())
}
