//! # Packlab
//!
//! Packlab packs perceptual colors into 32 bits, keeps them within the sRGB
//! gamut, and describes them in plain English.
#![cfg_attr(
    not(feature = "pyffi"),
    doc = " This version of the API documentation **covers native Rust interfaces
only**. Enabling the `pyffi` feature adds Python integration."
)]
#![cfg_attr(
    feature = "pyffi",
    doc = " This version of the API documentation **covers both Rust and Python
interfaces**."
)]
//!
//!
//! ## 1. Overview
//!
//! Packlab's main abstractions are:
//!
//!   * [`PackedColor`] implements **compact colors** as a single `u32`, with
//!     one byte each for lightness, two chroma axes, and alpha. Alpha is always
//!     even, so that the bits are also a valid, non-NaN `f32`. Packed colors
//!     use one of two perceptual [`ColorSpace`]s, Oklab or IPT. Their methods
//!     expose most of packlab's functionality, including conversion from and to
//!     sRGB, channel algebra, and gamut limiting.
//!   * [`GamutTable`] bounds the chroma of in-gamut colors for each lightness
//!     and hue. The builtin tables for both color spaces are embedded in the
//!     library.
//!   * [`Palette`] maps color names to packed colors, keeping them in
//!     insertion, alphabetical, lightness, and hue order.
//!   * [`Describer`] turns **color descriptions** such as `lighter dull
//!     apricot olive` into packed colors and searches for the description best
//!     matching a packed color.
//!
//!
//! ## 2. Packing, Limiting, Describing
//!
//! ```
//! # use packlab::{ColorSpace, Describer, GamutTable, PackedColor};
//! let space = ColorSpace::Oklab;
//! let table = GamutTable::builtin(space);
//!
//! // Convert from sRGB and back. Packed alpha is even.
//! let red = PackedColor::from_rgba8888(space, 0xff00_00ff);
//! assert_eq!(red.to_bytes(), [182, 156, 144, 254]);
//! assert_eq!(red.to_rgba8888(space) & 0xff, 0xfe);
//!
//! // Adjust lightness and chroma, then limit to the gamut.
//! let pale = red.lighten(0.5).limit_to_gamut(table);
//! assert!(pale.in_gamut(table));
//! assert!(pale.lightness() > red.lightness());
//!
//! // Describe colors.
//! let describer = Describer::builtin(space);
//! let description = describer.best_match(pale, 1);
//! let parsed = describer.parse_description(&description);
//! assert!(parsed.in_gamut(table));
//! ```
//!
//!
//! ## 3. Feature Flags
//!
//! Packlab supports two feature flags:
//!
//!   - `builtin` embeds the gamut tables and the palette of named colors for
//!     both color spaces. It is enabled by default.
//!   - `pyffi` integrates packlab with Python through
//!     [PyO3](https://pyo3.rs/). It implies `builtin`.
//!
//!
//! ## 4. Logging
//!
//! Packlab logs through the [`log`](https://docs.rs/log) facade. It logs
//! loading builtin assets at debug level and summarizes description searches
//! at trace level. It does not install a logger.

mod core;
pub mod describe;
pub mod error;
mod object;
pub mod palette;

pub mod trig {
    //! Fast approximations of trigonometric functions.
    //!
    //! The functions ending in `_turns` measure angles in turns, i.e.,
    //! fractions of a full circle. The others measure angles in radians.
    pub use crate::core::trig::*;
}

pub use core::{chroma_limit, mix, to_device, to_perceptual};
pub use core::{Axis, ColorSpace, GamutTable, PackedColor};
pub use describe::{Describer, MixBuffer};
pub use palette::Palette;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;
#[cfg(feature = "pyffi")]
use pyo3::types::PyDict;

/// Parse the description with the builtin palette of the color space. <i
/// class=python-only>Python only!</i>
#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pyfunction]
pub fn parse_description(space: ColorSpace, text: &str) -> PackedColor {
    Describer::builtin(space).parse_description(text)
}

/// Find the description that best matches the color with the builtin palette
/// of the color space. <i class=python-only>Python only!</i>
#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pyfunction]
#[pyo3(signature = (space, color, mix_count=1))]
pub fn best_match(space: ColorSpace, color: PackedColor, mix_count: usize) -> String {
    Describer::builtin(space).best_match(color, mix_count)
}

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn color(m: &Bound<'_, PyModule>) -> PyResult<()> {
    let modcolor_name = m.name()?;
    let modcolor_name = modcolor_name.to_str()?;
    let moddescribe_name = format!("{}.describe", modcolor_name);

    // -------------------------------------------------------------------------- color
    m.add_class::<Axis>()?;
    m.add_class::<ColorSpace>()?;
    m.add_class::<PackedColor>()?;

    // ----------------------------------------------------------------- color.describe
    let moddescribe = PyModule::new(m.py(), "describe")?;
    moddescribe.add("__package__", modcolor_name)?;
    moddescribe.add_function(wrap_pyfunction!(parse_description, &moddescribe)?)?;
    moddescribe.add_function(wrap_pyfunction!(best_match, &moddescribe)?)?;
    m.add_submodule(&moddescribe)?;

    // Only change __name__ attribute after submodule has been added.
    moddescribe.setattr("__name__", &moddescribe_name)?;

    // -------------------------------------------------------------------- sys.modules
    let py_modules: Bound<'_, PyDict> = PyModule::import(m.py(), "sys")?
        .getattr("modules")?
        .downcast_into()?;
    py_modules.set_item(&moddescribe_name, moddescribe)?;

    Ok(())
}
