//! Brand palette: an ordered list of named colors.

use std::fmt;

use glaze_color::Rgb;
#[cfg(feature = "tracing")]
use tracing::debug;

/// Why a palette edit was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// The name is empty or whitespace only.
    MissingName,
    IndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingName => f.write_str("Please name your colour first."),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "no palette entry at index {index} (palette has {len})")
            }
        }
    }
}

impl std::error::Error for PaletteError {}

/// A color saved under a user-chosen name.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NamedColor {
    name: String,
    value: Rgb,
}

impl NamedColor {
    /// # Errors
    /// [`PaletteError::MissingName`] when `name` is blank.
    pub fn new(name: impl Into<String>, value: Rgb) -> Result<Self, PaletteError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(PaletteError::MissingName);
        }
        Ok(Self { name, value })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn value(&self) -> Rgb {
        self.value
    }
}

impl fmt::Display for NamedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.value)
    }
}

/// Brand colors every new palette starts with.
const BRAND_COLORS: [(&str, Rgb); 6] = [
    ("US-Black", Rgb::new(0x07, 0x06, 0x00)),
    ("US-White", Rgb::new(0xff, 0xff, 0xfb)),
    ("US-Yellow", Rgb::new(0xfc, 0xe1, 0x14)),
    ("US-Purple", Rgb::new(0x6f, 0x00, 0xff)),
    ("US-Grey", Rgb::new(0x76, 0x76, 0x76)),
    ("US-Light-Grey", Rgb::new(0xdc, 0xdc, 0xdc)),
];

/// Ordered colors. Names need not be unique.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Palette {
    colors: Vec<NamedColor>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::brand()
    }
}

impl Palette {
    #[must_use]
    pub const fn empty() -> Self {
        Self { colors: Vec::new() }
    }

    /// The six brand colors.
    #[must_use]
    pub fn brand() -> Self {
        let colors = BRAND_COLORS
            .iter()
            .map(|&(name, value)| NamedColor {
                name: name.to_string(),
                value,
            })
            .collect();
        Self { colors }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&NamedColor> {
        self.colors.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NamedColor> {
        self.colors.iter()
    }

    /// First entry with exactly this name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&NamedColor> {
        self.colors.iter().find(|color| color.name == name)
    }

    /// Append at the end.
    pub fn add(&mut self, color: NamedColor) {
        #[cfg(feature = "tracing")]
        debug!(name = color.name(), value = %color.value(), "palette add");
        self.colors.push(color);
    }

    /// Overwrite the entry at `index`, returning the old one.
    ///
    /// # Errors
    /// [`PaletteError::IndexOutOfRange`] when there is no such entry.
    pub fn replace(&mut self, index: usize, color: NamedColor) -> Result<NamedColor, PaletteError> {
        let len = self.colors.len();
        let slot = self
            .colors
            .get_mut(index)
            .ok_or(PaletteError::IndexOutOfRange { index, len })?;
        #[cfg(feature = "tracing")]
        debug!(index, name = color.name(), value = %color.value(), "palette replace");
        Ok(std::mem::replace(slot, color))
    }

    /// Remove the entry at `index`; later entries shift down by one.
    ///
    /// # Errors
    /// [`PaletteError::IndexOutOfRange`] when there is no such entry.
    pub fn remove(&mut self, index: usize) -> Result<NamedColor, PaletteError> {
        if index >= self.colors.len() {
            return Err(PaletteError::IndexOutOfRange {
                index,
                len: self.colors.len(),
            });
        }
        #[cfg(feature = "tracing")]
        debug!(index, "palette remove");
        Ok(self.colors.remove(index))
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a NamedColor;
    type IntoIter = std::slice::Iter<'a, NamedColor>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}

impl FromIterator<NamedColor> for Palette {
    fn from_iter<I: IntoIterator<Item = NamedColor>>(iter: I) -> Self {
        Self {
            colors: iter.into_iter().collect(),
        }
    }
}
