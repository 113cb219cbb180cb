//! Parts and backbone part lists.

use std::{
    cell::{Cell, Ref, RefCell, RefMut},
    fmt::{self, Display},
    rc::Rc,
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::{
    geometry::{Bounds, Frame, Point},
    identifier::Id,
    options::RenderOptions,
};

/// Orientation of a part along its backbone.
///
/// Rendered as `+` (reading direction) or `-` (reverse strand).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Forward strand (default)
    #[default]
    Forward,
    /// Reverse strand
    Reverse,
}

impl FromStr for Orientation {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Self::Forward),
            "-" => Ok(Self::Reverse),
            _ => Err("Invalid orientation (expected '+' or '-')"),
        }
    }
}

impl From<Orientation> for &'static str {
    fn from(val: Orientation) -> Self {
        match val {
            Orientation::Forward => "+",
            Orientation::Reverse => "-",
        }
    }
}

impl Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// The strand a part list is rendered along.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Backbone {
    /// DNA backbone (default)
    #[default]
    Dna,
    /// RNA backbone
    Rna,
}

impl FromStr for Backbone {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DNA" => Ok(Self::Dna),
            "RNA" => Ok(Self::Rna),
            _ => Err("Unsupported backbone"),
        }
    }
}

impl From<Backbone> for &'static str {
    fn from(val: Backbone) -> Self {
        match val {
            Backbone::Dna => "DNA",
            Backbone::Rna => "RNA",
        }
    }
}

impl Display for Backbone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// Kind of biological part.
///
/// The vocabulary is open: tags a renderer does not recognise are carried
/// through as [`PartKind::Other`]. Parsing is therefore total and `Display`
/// round-trips the original tag.
///
/// # Examples
///
/// ```
/// # use operon_core::semantic::PartKind;
/// let known: PartKind = "RibosomeEntrySite".parse().unwrap();
/// assert_eq!(known, PartKind::RibosomeEntrySite);
///
/// let custom: PartKind = "Scar".parse().unwrap();
/// assert_eq!(custom, PartKind::Other("Scar".to_owned()));
/// assert_eq!(custom.to_string(), "Scar");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PartKind {
    Promoter,
    Cds,
    Terminator,
    RibosomeEntrySite,
    Insulator,
    OriginOfReplication,
    Aptamer,
    Unspecified,
    Macromolecule,
    Rna,
    /// A tag outside the built-in vocabulary
    Other(String),
}

impl FromStr for PartKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "Promoter" => Self::Promoter,
            "CDS" => Self::Cds,
            "Terminator" => Self::Terminator,
            "RibosomeEntrySite" => Self::RibosomeEntrySite,
            "Insulator" => Self::Insulator,
            "OriginOfReplication" => Self::OriginOfReplication,
            "Aptamer" => Self::Aptamer,
            "Unspecified" => Self::Unspecified,
            "Macromolecule" => Self::Macromolecule,
            "RNA" => Self::Rna,
            other => Self::Other(other.to_owned()),
        })
    }
}

impl Display for PartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Promoter => "Promoter",
            Self::Cds => "CDS",
            Self::Terminator => "Terminator",
            Self::RibosomeEntrySite => "RibosomeEntrySite",
            Self::Insulator => "Insulator",
            Self::OriginOfReplication => "OriginOfReplication",
            Self::Aptamer => "Aptamer",
            Self::Unspecified => "Unspecified",
            Self::Macromolecule => "Macromolecule",
            Self::Rna => "RNA",
            Self::Other(tag) => tag,
        };
        write!(f, "{s}")
    }
}

/// A single biological part.
///
/// A part's identity (name and kind) is fixed at construction. The `module`
/// field is a non-owning back-reference to the name of the module the part
/// was created for; nothing checks that the module actually contains the
/// part, and the same `Rc<Part>` may legitimately appear under several
/// modules or as an interaction endpoint in a different subtree. Identity
/// comparisons therefore go through [`Rc::ptr_eq`], never through the
/// back-reference.
///
/// The frame and options are written by a rendering stage and are kept in
/// cells so a shared part can receive layout results without requiring
/// mutable access to every module holding it.
///
/// # Examples
///
/// ```
/// # use std::rc::Rc;
/// # use operon_core::identifier::Id;
/// # use operon_core::semantic::{Orientation, Part, PartKind};
/// let part = Rc::new(
///     Part::new(Id::new("module1"), Id::new("pTet"), PartKind::Promoter)
///         .with_orientation(Orientation::Reverse),
/// );
///
/// assert_eq!(part.name(), "pTet");
/// assert_eq!(part.orientation(), Orientation::Reverse);
/// assert!(part.frame().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Part {
    module: Id,
    name: Id,
    kind: PartKind,
    orientation: Orientation,
    frame: Cell<Option<Frame>>,
    options: RefCell<RenderOptions>,
}

impl Part {
    /// Create a new forward-oriented part with no layout frame.
    pub fn new(module: Id, name: Id, kind: PartKind) -> Self {
        Self {
            module,
            name,
            kind,
            orientation: Orientation::default(),
            frame: Cell::new(None),
            options: RefCell::new(RenderOptions::new()),
        }
    }

    /// Set the orientation, consuming and returning the part.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set an initial layout frame, consuming and returning the part.
    pub fn with_frame(self, frame: Frame) -> Self {
        self.frame.set(Some(frame));
        self
    }

    /// Get the part name.
    pub fn name(&self) -> Id {
        self.name
    }

    /// Borrow the part kind.
    pub fn kind(&self) -> &PartKind {
        &self.kind
    }

    /// Get the part orientation.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Get the name of the module this part was created for.
    ///
    /// This is contextual information only; see the type-level docs.
    pub fn module(&self) -> Id {
        self.module
    }

    /// Get the layout frame, if a renderer has assigned one.
    pub fn frame(&self) -> Option<Frame> {
        self.frame.get()
    }

    /// Assign a layout frame (called by a rendering stage).
    pub fn set_frame(&self, frame: Frame) {
        self.frame.set(Some(frame));
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

/// An ordered run of parts rendered as a single unit with a shared backbone.
///
/// Part order is rendering order along the strand. Parts are appended and
/// never removed; no deduplication happens and no check relates an appended
/// part's back-reference to the list's owning module.
///
/// The baseline position and extent start out unset (the extent is the
/// degenerate zero box) and are overwritten by a rendering stage.
#[derive(Debug, Clone, Default)]
pub struct PartList {
    backbone: Backbone,
    parts: Vec<Rc<Part>>,
    position: Cell<Option<Point>>,
    extent: Cell<Bounds>,
    options: RefCell<RenderOptions>,
}

impl PartList {
    /// Create an empty part list on a DNA backbone.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the backbone kind, consuming and returning the list.
    pub fn with_backbone(mut self, backbone: Backbone) -> Self {
        self.backbone = backbone;
        self
    }

    /// Append a single part, preserving insertion order.
    pub fn add_part(&mut self, part: Rc<Part>) {
        self.parts.push(part);
    }

    /// Append a batch of parts, preserving their order.
    pub fn add_parts(&mut self, parts: impl IntoIterator<Item = Rc<Part>>) {
        self.parts.extend(parts);
    }

    /// Borrow the parts in rendering order.
    pub fn parts(&self) -> &[Rc<Part>] {
        &self.parts
    }

    /// Get the backbone kind.
    pub fn backbone(&self) -> Backbone {
        self.backbone
    }

    /// Get the baseline position, if a renderer has assigned one.
    pub fn position(&self) -> Option<Point> {
        self.position.get()
    }

    /// Assign the baseline position (called by a rendering stage).
    pub fn set_position(&self, position: Point) {
        self.position.set(Some(position));
    }

    /// Get the bounding-box extent (degenerate until a renderer measures it).
    pub fn extent(&self) -> Bounds {
        self.extent.get()
    }

    /// Assign the measured extent (called by a rendering stage).
    pub fn set_extent(&self, extent: Bounds) {
        self.extent.set(extent);
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
