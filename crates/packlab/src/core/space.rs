#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

/// The enumeration of supported perceptual color spaces.
///
/// Both color spaces share the same structure: one coordinate for lightness
/// and two opponent coordinates for "colorness," with the a axis varying
/// red/green and the b axis varying blue/yellow. Both are computed from
/// gamma-encoded RGB with the same pipeline:
///
///  1. Approximate linear RGB from gamma-encoded RGB.
///  2. Transform linear RGB to a cone response LMS with a 3×3 matrix.
///  3. Compress the cone response with a per-channel exponent.
///  4. Transform the compressed response to lightness and opponent axes with
///     another 3×3 matrix.
///
/// The color spaces differ in their constants:
///
/// | Color space | Linearization | Compression     | Lightness          |
/// | ----------- | :-----------: | :-------------: | :----------------: |
/// | Oklab       | x²            | cube root       | Barron remap       |
/// | IPT         | x^2.2         | signed x^0.43   | as is              |
///
/// [Oklab](https://bottosson.github.io/posts/oklab/) approximates sRGB's
/// linearization with a square, which is cheaper and close enough for 8-bit
/// results. Its lightness is remapped with a Barron curve so that equal steps
/// in the packed lightness channel appear more evenly spaced. IPT, as proposed
/// by Ebner and Fairchild, has better hue linearity in the blues but less
/// uniform lightness, which is left untouched.
///
/// Packed colors do not record their color space. It is the caller's
/// responsibility to use a gamut table and palette for the same color space
/// as the colors being processed.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "packlab.color")
)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    #[default]
    Oklab,
    Ipt,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl ColorSpace {
    /// Determine whether this color space remaps lightness.
    pub const fn remaps_lightness(&self) -> bool {
        matches!(*self, Self::Oklab)
    }

    /// Create a human-readable representation for this color space. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl ColorSpace {
    /// Get all color spaces.
    pub const fn all() -> [ColorSpace; 2] {
        [Self::Oklab, Self::Ipt]
    }
}

impl std::fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Oklab => "Oklab",
            Self::Ipt => "IPT",
        };

        f.write_str(s)
    }
}
