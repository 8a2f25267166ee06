#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{
    blot, darken, dullen, enrich, fade, from_hcl, from_rgba8888, hue, in_gamut, lerp, lighten,
    limit_to_gamut, lower_pole, maximize_saturation, offset_distance, raise_pole, saturation,
    to_device, to_perceptual, to_rgba8888,
};
use crate::{Axis, ColorSpace, GamutTable, PackedColor};

/// # Conversion
impl PackedColor {
    /// Convert gamma-encoded RGBA in `0..=1` to a packed color in the given
    /// color space.
    ///
    /// ```
    /// # use packlab::{ColorSpace, PackedColor};
    /// let red = PackedColor::from_rgba(ColorSpace::Oklab, &[1.0, 0.0, 0.0, 1.0]);
    /// assert_eq!(red.to_bytes(), [182, 156, 144, 254]);
    /// ```
    pub fn from_rgba(space: ColorSpace, rgba: &[f32; 4]) -> Self {
        Self::from_channels(&to_perceptual(space, rgba))
    }

    /// Convert an `0xRRGGBBAA` integer to a packed color in the given color
    /// space.
    pub fn from_rgba8888(space: ColorSpace, rgba: u32) -> Self {
        Self::from_rgba(space, &from_rgba8888(rgba))
    }

    /// Convert this packed color in the given color space to gamma-encoded
    /// RGBA in `0..=1`.
    pub fn to_rgba(&self, space: ColorSpace) -> [f32; 4] {
        to_device(space, &self.to_channels())
    }

    /// Convert this packed color in the given color space to an `0xRRGGBBAA`
    /// integer.
    ///
    /// Since packed alpha is even, opaque colors have an alpha of `0xfe`.
    pub fn to_rgba8888(&self, space: ColorSpace) -> u32 {
        to_rgba8888(&self.to_rgba(space))
    }
}

/// # Hue, Chroma, and Gamut
impl PackedColor {
    /// Create a new packed color from hue in turns, chroma, normalized
    /// lightness, and normalized alpha.
    ///
    /// Chroma is measured in the color space's own units. It is limited to the
    /// maximum chroma for the lightness and hue, so the result is in gamut.
    pub fn from_hcl(table: &GamutTable, hue: f32, chroma: f32, lightness: f32, alpha: f32) -> Self {
        from_hcl(table, hue, chroma, lightness, alpha)
    }

    /// Get the hue in turns, i.e., `0..1`.
    ///
    /// The hue of a color with neutral chroma bytes is meaningless. It is
    /// computed anyway.
    pub fn hue(&self) -> f32 {
        hue(*self)
    }

    /// Get the chroma in the color space's own units.
    pub fn chroma(&self) -> f32 {
        2.0 * offset_distance(*self)
    }

    /// Determine whether this color has (nearly) neutral chroma.
    pub fn is_gray(&self) -> bool {
        offset_distance(*self) < crate::core::GRAY_DISTANCE
    }

    /// Get the saturation, i.e., chroma relative to the maximum chroma for
    /// this color's lightness and hue.
    pub fn saturation(&self, table: &GamutTable) -> f32 {
        saturation(table, *self)
    }

    /// Determine whether this color is in gamut.
    pub fn in_gamut(&self, table: &GamutTable) -> bool {
        in_gamut(table, *self)
    }

    /// Limit this color to the gamut, preserving lightness, hue, and alpha.
    ///
    /// In-gamut colors are returned as is, and the operation is idempotent.
    ///
    /// ```
    /// # use packlab::{ColorSpace, GamutTable, PackedColor};
    /// let table = GamutTable::builtin(ColorSpace::Oklab);
    /// let garish = PackedColor::new(60, 255, 0, 254);
    /// let limited = garish.limit_to_gamut(table);
    /// assert!(limited.in_gamut(table));
    /// assert_eq!(limited.limit_to_gamut(table), limited);
    /// assert_eq!(limited.lightness_byte(), 60);
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn limit_to_gamut(&self, table: &GamutTable) -> Self {
        limit_to_gamut(table, *self)
    }

    /// Move this color onto the gamut boundary, preserving lightness, hue,
    /// and alpha.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn maximize_saturation(&self, table: &GamutTable) -> Self {
        maximize_saturation(table, *self)
    }

    /// Increase chroma by the factor `1 + amount` while staying in gamut. The
    /// amount is clamped to `0..=1`.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn enrich(&self, table: &GamutTable, amount: f32) -> Self {
        enrich(table, *self, amount)
    }

    /// Decrease chroma by the factor `1 - amount`. The amount is clamped to
    /// `0..=1`.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn dullen(&self, amount: f32) -> Self {
        dullen(*self, amount)
    }
}

/// # Channel Algebra
impl PackedColor {
    /// Lighten this color by moving lightness the fraction towards white.
    ///
    /// ```
    /// # use packlab::PackedColor;
    /// let color = PackedColor::new(100, 128, 128, 254);
    /// assert_eq!(color.lighten(0.5).lightness_byte(), 178);
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn lighten(&self, t: f32) -> Self {
        lighten(*self, t)
    }

    /// Darken this color by moving lightness the fraction towards black.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn darken(&self, t: f32) -> Self {
        darken(*self, t)
    }

    /// Move the chroma axis the fraction towards its positive pole.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn raise_pole(&self, axis: Axis, t: f32) -> Self {
        raise_pole(*self, axis, t)
    }

    /// Move the chroma axis the fraction towards its negative pole.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn lower_pole(&self, axis: Axis, t: f32) -> Self {
        lower_pole(*self, axis, t)
    }

    /// Move alpha the fraction towards opaque.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn blot(&self, t: f32) -> Self {
        blot(*self, t)
    }

    /// Move alpha the fraction towards fully transparent.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn fade(&self, t: f32) -> Self {
        fade(*self, t)
    }

    /// Interpolate between this and the other color, channel by channel.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        lerp(*self, *other, t)
    }
}

// --------------------------------------------------------------------------------------------------------------------

#[cfg(feature = "pyffi")]
#[pymethods]
impl PackedColor {
    /// Create a new packed color from channel bytes. <i
    /// class=python-only>Python only!</i>
    #[new]
    pub const fn py_new(lightness: u8, a: u8, b: u8, alpha: u8) -> Self {
        Self::new(lightness, a, b, alpha)
    }

    /// Convert an `0xRRGGBBAA` integer to a packed color. <i
    /// class=python-only>Python only!</i>
    #[staticmethod]
    #[pyo3(name = "from_rgba8888")]
    pub fn py_from_rgba8888(space: ColorSpace, rgba: u32) -> Self {
        Self::from_rgba8888(space, rgba)
    }

    /// Convert to an `0xRRGGBBAA` integer. <i class=python-only>Python
    /// only!</i>
    #[pyo3(name = "to_rgba8888")]
    pub fn py_to_rgba8888(&self, space: ColorSpace) -> u32 {
        self.to_rgba8888(space)
    }

    /// Get the bits. <i class=python-only>Python only!</i>
    #[pyo3(name = "to_bits")]
    pub const fn py_to_bits(&self) -> u32 {
        self.to_bits()
    }

    /// Get the channel bytes. <i class=python-only>Python only!</i>
    #[pyo3(name = "to_bytes")]
    pub const fn py_to_bytes(&self) -> [u8; 4] {
        self.to_bytes()
    }

    /// Lighten this color. <i class=python-only>Python only!</i>
    #[pyo3(name = "lighten")]
    pub fn py_lighten(&self, t: f32) -> Self {
        self.lighten(t)
    }

    /// Darken this color. <i class=python-only>Python only!</i>
    #[pyo3(name = "darken")]
    pub fn py_darken(&self, t: f32) -> Self {
        self.darken(t)
    }

    /// Limit this color to the builtin gamut of the color space. <i
    /// class=python-only>Python only!</i>
    #[pyo3(name = "limit_to_gamut")]
    pub fn py_limit_to_gamut(&self, space: ColorSpace) -> Self {
        self.limit_to_gamut(GamutTable::builtin(space))
    }

    /// Interpolate between this and the other color. <i
    /// class=python-only>Python only!</i>
    #[pyo3(name = "lerp")]
    pub fn py_lerp(&self, other: &Self, t: f32) -> Self {
        self.lerp(other, t)
    }

    /// Convert this color to its debug representation. <i
    /// class=python-only>Python only!</i>
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }

    /// Convert this color to its display representation. <i
    /// class=python-only>Python only!</i>
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

// --------------------------------------------------------------------------------------------------------------------
