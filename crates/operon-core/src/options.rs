//! Open-ended renderer-hint options carried by model elements.
//!
//! Parts, part lists, and interactions each carry an options mapping that a
//! rendering stage reads to tailor its output (colors, label styles, arrow
//! tweaks). The model treats the mapping as opaque: keys are free-form
//! strings, insertion order is preserved, and nothing here interprets a
//! value.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single renderer-hint value.
///
/// # Examples
///
/// ```
/// # use operon_core::options::OptionValue;
/// let flag: OptionValue = true.into();
/// let scale: OptionValue = 1.5.into();
/// let color: OptionValue = "darkgreen".into();
///
/// assert_eq!(flag, OptionValue::Bool(true));
/// assert_eq!(color.as_text(), Some("darkgreen"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// A boolean flag
    Bool(bool),
    /// A numeric value
    Number(f64),
    /// A free-form text value
    Text(String),
}

impl OptionValue {
    /// Returns the boolean value if this option is a flag
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the numeric value if this option is a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the text value if this option is text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// An insertion-ordered mapping of renderer hints.
///
/// Empty at construction; a rendering stage (out of scope for this crate)
/// reads and writes it.
///
/// # Examples
///
/// ```
/// # use operon_core::options::RenderOptions;
/// let mut options = RenderOptions::new();
/// options.set("fill_color", "orange");
/// options.set("label_size", 8.0);
///
/// assert_eq!(options.len(), 2);
/// assert_eq!(options.get("fill_color").and_then(|v| v.as_text()), Some("orange"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderOptions {
    entries: IndexMap<String, OptionValue>,
}

impl RenderOptions {
    /// Creates an empty options mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a hint, replacing any previous value for the same key
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Looks up a hint by key
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.entries.get(key)
    }

    /// Returns the number of hints set
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no hints are set
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates hints in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}
