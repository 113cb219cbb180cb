//! Regulatory interactions between parts.

use std::{
    cell::{Ref, RefCell, RefMut},
    fmt::{self, Display},
    rc::Rc,
    str::FromStr,
};

use crate::{geometry::Point, options::RenderOptions, semantic::Part};

/// Kind of regulatory or biochemical effect an interaction represents.
///
/// The named variants cover the conventional SBOL-visual set; tags outside
/// it are carried through as [`InteractionKind::Other`], so parsing is
/// total. `Display` yields the lowercase tags used in diagnostic output.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InteractionKind {
    Control,
    Degradation,
    Inhibition,
    Process,
    Stimulation,
    /// A tag outside the built-in vocabulary
    Other(String),
}

impl FromStr for InteractionKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "control" => Self::Control,
            "degradation" => Self::Degradation,
            "inhibition" => Self::Inhibition,
            "process" => Self::Process,
            "stimulation" => Self::Stimulation,
            other => Self::Other(other.to_owned()),
        })
    }
}

impl Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Control => "control",
            Self::Degradation => "degradation",
            Self::Inhibition => "inhibition",
            Self::Process => "process",
            Self::Stimulation => "stimulation",
            Self::Other(tag) => tag,
        };
        write!(f, "{s}")
    }
}

/// A typed, directed edge between two parts.
///
/// Interactions are independent of the module tree: the endpoints may live
/// in different modules, different top-level modules, or modules never
/// registered to any design. Endpoints are held by identity (`Rc`) and are
/// never resolved through the tree.
///
/// The end part is optional. A dangling interaction is constructible, but
/// any consumer that needs both endpoints (the text exporter, an arrow
/// renderer) must surface a defined error for it rather than fail the
/// whole pipeline.
///
/// The arrow coordinates are empty until a rendering stage computes them;
/// the optional `path` is an author-supplied routing hint the renderer may
/// honour.
///
/// # Examples
///
/// ```
/// # use std::rc::Rc;
/// # use operon_core::identifier::Id;
/// # use operon_core::semantic::{Interaction, InteractionKind, Part, PartKind};
/// let m = Id::new("module1");
/// let repressor = Rc::new(Part::new(m, Id::new("lacI"), PartKind::Cds));
/// let target = Rc::new(Part::new(m, Id::new("pLac"), PartKind::Promoter));
///
/// let interaction = Interaction::new(
///     InteractionKind::Inhibition,
///     Rc::clone(&repressor),
///     Some(Rc::clone(&target)),
/// );
///
/// assert!(Rc::ptr_eq(interaction.start(), &repressor));
/// assert!(interaction.coordinates().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Interaction {
    kind: InteractionKind,
    start: Rc<Part>,
    end: Option<Rc<Part>>,
    path: Option<Vec<Point>>,
    coordinates: RefCell<Vec<Point>>,
    options: RefCell<RenderOptions>,
}

impl Interaction {
    /// Create a new interaction from `start` to an optional `end` part.
    pub fn new(kind: InteractionKind, start: Rc<Part>, end: Option<Rc<Part>>) -> Self {
        Self {
            kind,
            start,
            end,
            path: None,
            coordinates: RefCell::new(Vec::new()),
            options: RefCell::new(RenderOptions::new()),
        }
    }

    /// Set an author-supplied routing hint, consuming and returning the
    /// interaction.
    pub fn with_path(mut self, path: Vec<Point>) -> Self {
        self.path = Some(path);
        self
    }

    /// Borrow the interaction kind.
    pub fn kind(&self) -> &InteractionKind {
        &self.kind
    }

    /// Borrow the start part.
    pub fn start(&self) -> &Rc<Part> {
        &self.start
    }

    /// Borrow the end part, if present.
    pub fn end(&self) -> Option<&Rc<Part>> {
        self.end.as_ref()
    }

    /// Borrow the routing hint, if the author supplied one.
    pub fn path(&self) -> Option<&[Point]> {
        self.path.as_deref()
    }

    /// Borrow the computed arrow coordinates (empty until rendered).
    pub fn coordinates(&self) -> Ref<'_, Vec<Point>> {
        self.coordinates.borrow()
    }

    /// Replace the arrow coordinates (called by a rendering stage).
    pub fn set_coordinates(&self, coordinates: Vec<Point>) {
        *self.coordinates.borrow_mut() = coordinates;
    }

    /// Borrow the renderer-hint options.
    pub fn options(&self) -> Ref<'_, RenderOptions> {
        self.options.borrow()
    }

    /// Mutably borrow the renderer-hint options.
    pub fn options_mut(&self) -> RefMut<'_, RenderOptions> {
        self.options.borrow_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{identifier::Id, semantic::PartKind};

    fn part(name: &str) -> Rc<Part> {
        Rc::new(Part::new(Id::new("m"), Id::new(name), PartKind::Cds))
    }

    #[test]
    fn test_kind_parsing_is_total() {
        let known: InteractionKind = "stimulation".parse().unwrap();
        assert_eq!(known, InteractionKind::Stimulation);
        assert_eq!(known.to_string(), "stimulation");

        let custom: InteractionKind = "sequestration".parse().unwrap();
        assert_eq!(custom, InteractionKind::Other("sequestration".to_owned()));
        assert_eq!(custom.to_string(), "sequestration");
    }

    #[test]
    fn test_endpoints_by_identity() {
        let a = part("a");
        let b = part("b");
        let edge = Interaction::new(InteractionKind::Control, Rc::clone(&a), Some(Rc::clone(&b)));

        assert!(Rc::ptr_eq(edge.start(), &a));
        assert!(edge.end().is_some_and(|end| Rc::ptr_eq(end, &b)));
    }

    #[test]
    fn test_dangling_interaction_is_constructible() {
        let edge = Interaction::new(InteractionKind::Degradation, part("orphan"), None);
        assert!(edge.end().is_none());
    }

    #[test]
    fn test_coordinates_written_after_construction() {
        let edge = Interaction::new(InteractionKind::Process, part("a"), Some(part("b")));
        assert!(edge.coordinates().is_empty());

        edge.set_coordinates(vec![Point::new(0.0, 0.0), Point::new(10.0, 5.0)]);
        assert_eq!(edge.coordinates().len(), 2);
    }

    #[test]
    fn test_path_hint() {
        let edge = Interaction::new(InteractionKind::Inhibition, part("a"), Some(part("b")))
            .with_path(vec![Point::new(1.0, 1.0)]);
        assert_eq!(edge.path().map(<[Point]>::len), Some(1));
    }
}
