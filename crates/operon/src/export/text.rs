//! Plain-text export of a design tree.
//!
//! Produces the human-readable summary used for inspecting a design before
//! it is handed to a renderer:
//!
//! ```text
//! Design: design1
//!   Module: module1
//!     Module: module1a
//!       Parts: 1a,1aT
//!   Module: module2
//!     Parts: 2
//! Interaction from part: 1c to part: 1a of type: inhibition
//! ```
//!
//! Modules are visited depth-first in pre-order, indented two spaces per
//! depth level. A module with children never emits its own `Parts:` line,
//! even when it owns a part list; a leaf module emits one only when its
//! part list exists and is non-empty.

use std::io::Write;

use log::{debug, info};

use operon_core::semantic::{Design, Module};

use super::{Error, Exporter};

/// Indentation step per tree depth level.
const INDENT: &str = "  ";

/// Plain-text design exporter writing to any [`Write`] implementor.
///
/// # Examples
///
/// ```
/// # use operon::export::{Exporter, text::TextExporter};
/// # use operon::identifier::Id;
/// # use operon::semantic::Design;
/// let design = Design::new(Id::new("empty"));
///
/// let mut exporter = TextExporter::new(Vec::new());
/// exporter.export_design(&design).expect("export failed");
///
/// let output = exporter.into_inner();
/// assert_eq!(String::from_utf8_lossy(&output), "Design: empty\n");
/// ```
#[derive(Debug)]
pub struct TextExporter<W> {
    writer: W,
    modules_printed: usize,
}

impl<W: Write> TextExporter<W> {
    /// Create an exporter writing to `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            modules_printed: 0,
        }
    }

    /// Consume the exporter and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Write one module subtree, depth-first in pre-order.
    fn write_module_tree(&mut self, module: &Module, depth: usize) -> Result<(), Error> {
        let indent = INDENT.repeat(depth);
        writeln!(self.writer, "{indent}Module: {}", module.name())?;
        self.modules_printed += 1;

        if !module.children().is_empty() {
            // Branch modules list their children only; an own part list is
            // deliberately skipped here.
            for child in module.children() {
                self.write_module_tree(child, depth + 1)?;
            }
        } else if !module.parts().is_empty() {
            let names: Vec<String> = module
                .parts()
                .iter()
                .map(|part| part.name().to_string())
                .collect();
            writeln!(self.writer, "{indent}{INDENT}Parts: {}", names.join(","))?;
        }
        Ok(())
    }
}

impl<W: Write> Exporter for TextExporter<W> {
    fn export_design(&mut self, design: &Design) -> Result<(), Error> {
        info!(design:% = design.name(); "Exporting design as text");

        writeln!(self.writer, "Design: {}", design.name())?;

        for module in design.modules() {
            self.write_module_tree(module, 1)?;
        }

        for (index, interaction) in design.interactions().iter().enumerate() {
            let end = interaction.end().ok_or_else(|| Error::MissingEndpoint {
                index,
                kind: interaction.kind().clone(),
                modules_printed: self.modules_printed,
            })?;
            writeln!(
                self.writer,
                "Interaction from part: {} to part: {} of type: {}",
                interaction.start().name(),
                end.name(),
                interaction.kind(),
            )?;
        }

        debug!(
            modules_len = design.modules().len(),
            interactions_len = design.interactions().len();
            "Design exported",
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use operon_core::{
        identifier::Id,
        semantic::{Interaction, InteractionKind, Module, Part, PartKind},
    };

    use super::*;

    fn part(module: &Module, name: &str, kind: PartKind) -> Rc<Part> {
        Rc::new(Part::new(module.name(), Id::new(name), kind))
    }

    fn export_to_string(design: &Design) -> Result<String, Error> {
        let mut exporter = TextExporter::new(Vec::new());
        exporter.export_design(design)?;
        Ok(String::from_utf8_lossy(&exporter.into_inner()).into_owned())
    }

    #[test]
    fn test_empty_design_prints_one_line() {
        let design = Design::new(Id::new("bare"));
        assert_eq!(export_to_string(&design).unwrap(), "Design: bare\n");
    }

    #[test]
    fn test_single_module_scenario() {
        let mut design = Design::new(Id::new("D"));
        let mut module = Module::new(design.name(), Id::new("M"));
        let a = part(&module, "a", PartKind::Promoter);
        let b = part(&module, "b", PartKind::Cds);
        module.add_parts(vec![Rc::clone(&a), Rc::clone(&b)]);
        design.add_module(module);
        design.add_interaction(Interaction::new(InteractionKind::Inhibition, a, Some(b)));

        let expected = "Design: D\n\
                        \x20 Module: M\n\
                        \x20   Parts: a,b\n\
                        Interaction from part: a to part: b of type: inhibition\n";
        assert_eq!(export_to_string(&design).unwrap(), expected);
    }

    #[test]
    fn test_nested_modules_indent_per_depth() {
        let mut design = Design::new(Id::new("design3"));
        let mut module1 = Module::new(design.name(), Id::new("module1"));
        let module1a = module1.add_module(Id::new("module1a"));
        let module1a_1 = module1a.add_module(Id::new("module1a_1"));
        module1a_1.add_part(Rc::new(Part::new(
            module1a_1.name(),
            Id::new("1a_1_p"),
            PartKind::Promoter,
        )));
        design.add_module(module1);

        let expected = "Design: design3\n\
                        \x20 Module: module1\n\
                        \x20   Module: module1a\n\
                        \x20     Module: module1a_1\n\
                        \x20       Parts: 1a_1_p\n";
        assert_eq!(export_to_string(&design).unwrap(), expected);
    }

    #[test]
    fn test_branch_module_part_list_is_skipped() {
        let mut design = Design::new(Id::new("d"));
        let mut mixed = Module::new(design.name(), Id::new("mixed"));
        let hidden = part(&mixed, "hidden", PartKind::Promoter);
        mixed.add_part(hidden);
        mixed.add_module(Id::new("child"));
        design.add_module(mixed);

        let output = export_to_string(&design).unwrap();
        assert!(!output.contains("Parts:"), "unexpected parts line:\n{output}");
        assert!(output.contains("    Module: child\n"));
    }

    #[test]
    fn test_leaf_module_without_parts_emits_no_parts_line() {
        let mut design = Design::new(Id::new("d"));
        design.add_module(Module::new(design.name(), Id::new("bare_leaf")));

        let output = export_to_string(&design).unwrap();
        assert_eq!(output, "Design: d\n  Module: bare_leaf\n");
    }

    #[test]
    fn test_empty_part_list_emits_no_parts_line() {
        let mut design = Design::new(Id::new("d"));
        let mut module = Module::new(design.name(), Id::new("m"));
        module.add_parts(Vec::new());
        assert!(module.part_list().is_some());
        design.add_module(module);

        let output = export_to_string(&design).unwrap();
        assert!(!output.contains("Parts:"));
    }

    #[test]
    fn test_top_level_modules_in_registration_order() {
        let mut design = Design::new(Id::new("d"));
        for name in ["m3", "m1", "m2"] {
            design.add_module(Module::new(design.name(), Id::new(name)));
        }

        let output = export_to_string(&design).unwrap();
        let modules: Vec<&str> = output
            .lines()
            .filter(|line| line.trim_start().starts_with("Module:"))
            .collect();
        assert_eq!(modules, vec!["  Module: m3", "  Module: m1", "  Module: m2"]);
    }

    #[test]
    fn test_missing_endpoint_fails_with_progress() {
        let mut design = Design::new(Id::new("d"));
        let mut module = Module::new(design.name(), Id::new("m"));
        let lonely = part(&module, "lonely", PartKind::Cds);
        module.add_part(Rc::clone(&lonely));
        design.add_module(module);
        design.add_interaction(Interaction::new(InteractionKind::Degradation, lonely, None));

        let err = export_to_string(&design).unwrap_err();
        match err {
            Error::MissingEndpoint {
                index,
                kind,
                modules_printed,
            } => {
                assert_eq!(index, 0);
                assert_eq!(kind, InteractionKind::Degradation);
                assert_eq!(modules_printed, 1);
            }
            other => panic!("expected MissingEndpoint, got {other:?}"),
        }
    }

    #[test]
    fn test_cross_module_interaction_uses_part_names_only() {
        let mut design = Design::new(Id::new("d"));
        let mut m1 = Module::new(design.name(), Id::new("m1"));
        let mut m2 = Module::new(design.name(), Id::new("m2"));
        let source = part(&m1, "src", PartKind::Cds);
        let target = part(&m2, "dst", PartKind::Promoter);
        m1.add_part(Rc::clone(&source));
        m2.add_part(Rc::clone(&target));
        design.add_modules(vec![m1, m2]);
        design.add_interaction(Interaction::new(
            InteractionKind::Stimulation,
            source,
            Some(target),
        ));

        let output = export_to_string(&design).unwrap();
        assert!(output.ends_with("Interaction from part: src to part: dst of type: stimulation\n"));
    }
}
