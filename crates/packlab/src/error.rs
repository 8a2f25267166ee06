//! Utility module with packlab's errors.
//!
//! Color operations never fail. They clamp out-of-range inputs and fall back
//! on the transparent color for unknown names. Errors only arise when loading
//! palettes and gamut tables from external data.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// An erroneous palette definition.
///
/// Palettes are defined one color per line, as a name followed by a
/// `#rrggbbaa` or `#rrggbb` hexadecimal color. Blank lines and lines starting
/// with `#` are ignored. Line numbers are 1-based.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PaletteError {
    /// A line with a name but no color.
    #[error("line {line}: color name \"{name}\" lacks a color")]
    MissingColor { line: usize, name: String },

    /// A color that does not start with `#`.
    #[error("line {line}: color \"{color}\" does not start with '#'")]
    MissingHash { line: usize, color: String },

    /// A color that does not have six or eight hexadecimal digits.
    #[error("line {line}: color \"{color}\" does not have six or eight hexadecimal digits")]
    BadLength { line: usize, color: String },

    /// A color with a character other than a hexadecimal digit.
    #[error("line {line}: color \"{color}\" contains non-hexadecimal digits")]
    BadDigit { line: usize, color: String },

    /// A line with more than a name and a color.
    #[error("line {line}: unexpected text \"{text}\" after color")]
    TrailingText { line: usize, text: String },
}

impl PaletteError {
    /// Get the 1-based line number of the error.
    pub fn line(&self) -> usize {
        match self {
            Self::MissingColor { line, .. }
            | Self::MissingHash { line, .. }
            | Self::BadLength { line, .. }
            | Self::BadDigit { line, .. }
            | Self::TrailingText { line, .. } => *line,
        }
    }
}

#[cfg(feature = "pyffi")]
impl From<PaletteError> for PyErr {
    fn from(value: PaletteError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// An erroneous gamut table.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GamutTableError {
    /// A table with the wrong number of bytes.
    #[error("gamut table has {actual} bytes instead of {expected}")]
    WrongSize { actual: usize, expected: usize },
}

#[cfg(feature = "pyffi")]
impl From<GamutTableError> for PyErr {
    fn from(value: GamutTableError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}
