#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

/// The byte for a neutral chroma offset.
///
/// Offsets are centered on 127.5, so that 127 and 128 are the two bytes
/// closest to neutral. This crate uses 128.
pub(crate) const NEUTRAL: u8 = 128;

/// The byte for an opaque alpha.
pub(crate) const OPAQUE: u8 = 254;

const ALPHA_LSB: u32 = 0x0100_0000;

/// Quantize a normalized value to a byte, clamping to `0..=1` first.
///
/// Not-a-number quantizes to zero.
#[inline]
pub(crate) fn quantize(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Convert a byte to a normalized value.
#[inline]
pub(crate) fn to_unit(byte: u8) -> f32 {
    byte as f32 / 255.0
}

/// Convert a chroma byte to its offset from the neutral point, in `-0.5..=0.5`.
#[inline]
pub(crate) fn to_offset(byte: u8) -> f32 {
    byte as f32 / 255.0 - 0.5
}

/// Convert an offset to the nearest chroma byte.
#[inline]
pub(crate) fn from_offset(offset: f32) -> u8 {
    quantize(offset + 0.5)
}

/// Convert an offset to a chroma byte, rounding towards neutral.
///
/// Since the byte offsets are half-integers, the result never has a larger
/// magnitude than the offset, barring clamping at the extremes and a slack of
/// a thousandth of a byte that absorbs rounding errors. That in turn ensures
/// that the quantized chroma does not exceed the requested chroma.
pub(crate) fn from_offset_toward_neutral(offset: f32) -> u8 {
    const SLACK: f32 = 0.001;

    let units = offset * 255.0;
    if units.is_nan() {
        NEUTRAL
    } else if 0.0 <= units {
        (128.0 + (units - 0.5 + SLACK).floor()).clamp(128.0, 255.0) as u8
    } else {
        (127.0 - (-units - 0.5 + SLACK).floor()).clamp(0.0, 127.0) as u8
    }
}

// ====================================================================================================================

/// A packed color.
///
/// A packed color stores four byte-sized channels in a single `u32`. From
/// least to most significant byte, they are:
///
///  1. lightness `L`;
///  2. the first chroma axis `A`, red/green for Oklab and protan for IPT;
///  3. the second chroma axis `B`, blue/yellow for Oklab and tritan for IPT;
///  4. alpha.
///
/// Lightness and alpha use the full range, with `0.0..=1.0` mapping to
/// `0..=255`. The chroma axes store the signed color space coordinate `c` as
/// `c × 0.5 + 0.5`, so that neutral sits between bytes 127 and 128.
///
/// The least significant bit of alpha always is zero. As a result, the bit
/// pattern reinterpreted as an `f32` never has an all-ones exponent and hence
/// never is not-a-number or infinite. Consequently, alpha only takes even
/// values and the opaque alpha is 254, not 255.
///
/// A packed color is tied to a color space only by convention. Methods that
/// depend on the color space take a [`ColorSpace`](crate::ColorSpace) or a
/// [`GamutTable`](crate::GamutTable) argument.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, module = "packlab.color")
)]
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackedColor(u32);

impl PackedColor {
    /// The fully transparent color, with zero lightness and neutral chroma.
    pub const TRANSPARENT: Self = Self::new(0, NEUTRAL, NEUTRAL, 0);

    /// Create a new packed color from channel bytes.
    ///
    /// The least significant bit of alpha is cleared.
    pub const fn new(lightness: u8, a: u8, b: u8, alpha: u8) -> Self {
        Self(
            ((alpha & 0xfe) as u32) << 24 | (b as u32) << 16 | (a as u32) << 8 | lightness as u32,
        )
    }

    /// Create a new packed color from channel bytes in order lightness, A, B,
    /// alpha. This is the inverse of [`PackedColor::to_bytes`].
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        let [lightness, a, b, alpha] = bytes;
        Self::new(lightness, a, b, alpha)
    }

    /// Create a new packed color from its bits.
    ///
    /// The least significant bit of alpha is cleared.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits & !ALPHA_LSB)
    }

    /// Create a new packed color from normalized channels.
    ///
    /// Lightness and alpha must be in `0..=1`. The chroma channels must be
    /// given in their stored form, which also is `0..=1`. Out-of-range values
    /// are clamped.
    pub fn from_channels(channels: &[f32; 4]) -> Self {
        let [l, a, b, alpha] = *channels;
        Self::new(quantize(l), quantize(a), quantize(b), quantize(alpha))
    }

    /// Reinterpret a floating point number as a packed color.
    pub fn from_float(value: f32) -> Self {
        Self::from_bits(value.to_bits())
    }

    /// Get the bits.
    pub const fn to_bits(&self) -> u32 {
        self.0
    }

    /// Reinterpret this packed color as a floating point number.
    ///
    /// The result never is not-a-number or infinite.
    pub fn to_float(&self) -> f32 {
        f32::from_bits(self.0)
    }

    /// Get the four channels as bytes, in order lightness, A, B, alpha.
    pub const fn to_bytes(&self) -> [u8; 4] {
        self.0.to_le_bytes()
    }

    /// Get the four channels as normalized values.
    pub fn to_channels(&self) -> [f32; 4] {
        let [l, a, b, alpha] = self.to_bytes();
        [to_unit(l), to_unit(a), to_unit(b), to_unit(alpha)]
    }

    /// Get the lightness byte.
    pub const fn lightness_byte(&self) -> u8 {
        self.0 as u8
    }

    /// Get the byte for the first chroma axis.
    pub const fn a_byte(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Get the byte for the second chroma axis.
    pub const fn b_byte(&self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Get the alpha byte.
    pub const fn alpha_byte(&self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Get the normalized lightness.
    pub fn lightness(&self) -> f32 {
        to_unit(self.lightness_byte())
    }

    /// Get the normalized alpha.
    pub fn alpha(&self) -> f32 {
        to_unit(self.alpha_byte())
    }

    /// Get the chroma offsets from neutral, each in `-0.5..=0.5`.
    pub fn offsets(&self) -> (f32, f32) {
        (to_offset(self.a_byte()), to_offset(self.b_byte()))
    }

    /// Determine whether this color is fully transparent.
    pub const fn is_transparent(&self) -> bool {
        self.alpha_byte() == 0
    }

    /// Determine whether this color is opaque.
    pub const fn is_opaque(&self) -> bool {
        self.alpha_byte() == OPAQUE
    }

    /// Replace the lightness byte.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub const fn with_lightness_byte(&self, lightness: u8) -> Self {
        Self::new(lightness, self.a_byte(), self.b_byte(), self.alpha_byte())
    }

    /// Replace the chroma bytes.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub const fn with_chroma_bytes(&self, a: u8, b: u8) -> Self {
        Self::new(self.lightness_byte(), a, b, self.alpha_byte())
    }

    /// Replace the alpha byte, clearing its least significant bit.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub const fn with_alpha_byte(&self, alpha: u8) -> Self {
        Self::new(self.lightness_byte(), self.a_byte(), self.b_byte(), alpha)
    }
}

impl From<PackedColor> for u32 {
    fn from(value: PackedColor) -> Self {
        value.0
    }
}

impl From<u32> for PackedColor {
    fn from(value: u32) -> Self {
        Self::from_bits(value)
    }
}

impl std::fmt::Debug for PackedColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [l, a, b, alpha] = self.to_bytes();
        f.write_fmt(format_args!("PackedColor(L={l}, A={a}, B={b}, alpha={alpha})"))
    }
}

impl std::fmt::Display for PackedColor {
    /// Format this color as its bits in hexadecimal, most significant byte,
    /// i.e., alpha, first.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{:#010x}", self.0))
    }
}

// --------------------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_layout() {
        let color = PackedColor::new(0x11, 0x22, 0x33, 0x45);
        assert_eq!(color.to_bits(), 0x4433_2211);
        assert_eq!(color.to_bytes(), [0x11, 0x22, 0x33, 0x44]);
        assert_eq!(color.lightness_byte(), 0x11);
        assert_eq!(color.a_byte(), 0x22);
        assert_eq!(color.b_byte(), 0x33);
        assert_eq!(color.alpha_byte(), 0x44);
        assert_eq!(PackedColor::from_bytes(color.to_bytes()), color);

        assert_eq!(PackedColor::from_bits(0xffff_ffff).to_bits(), 0xfeff_ffff);
        assert_eq!(PackedColor::TRANSPARENT.to_bits(), 0x0080_8000);
        assert!(PackedColor::TRANSPARENT.is_transparent());
        assert_eq!(PackedColor::default().alpha_byte(), 0);
        assert_eq!(format!("{}", PackedColor::new(1, 2, 3, 255)), "0xfe030201");
    }

    #[test]
    fn test_channels() {
        let color = PackedColor::from_channels(&[1.0, 0.5, 0.0, 1.0]);
        assert_eq!(color.to_bytes(), [255, 128, 0, 254]);
        assert!(color.is_opaque());

        let clamped = PackedColor::from_channels(&[2.0, -1.0, f32::NAN, 0.5]);
        assert_eq!(clamped.to_bytes(), [255, 0, 0, 128]);

        let [l, _, b, alpha] = color.to_channels();
        assert_eq!((l, b), (1.0, 0.0));
        assert!((alpha - 254.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_float_reinterpretation() {
        for alpha in (0..=255).step_by(3) {
            let color = PackedColor::new(255, 255, 255, alpha);
            let float = color.to_float();
            assert!(float.is_finite(), "alpha {alpha}");
            assert_eq!(PackedColor::from_float(float), color);
        }
    }

    #[test]
    fn test_offsets() {
        assert!((to_offset(128) - 0.5 / 255.0).abs() < 1e-7);
        assert_eq!(from_offset(0.5 / 255.0), 128);
        assert_eq!(from_offset(-0.5 / 255.0), 127);

        for byte in 0..=255 {
            let offset = to_offset(byte);
            assert_eq!(from_offset(offset), byte);
            assert_eq!(from_offset_toward_neutral(offset), byte);
        }

        // Rounding towards neutral never increases the magnitude.
        for step in -1000..=1000 {
            let offset = step as f32 / 2000.0;
            let byte = from_offset_toward_neutral(offset);
            assert!(to_offset(byte).abs() <= offset.abs() + 1e-5 || byte == 127 || byte == 128);
        }
        assert_eq!(from_offset_toward_neutral(0.0), 128);
        assert_eq!(from_offset_toward_neutral(-0.001), 127);
        assert_eq!(from_offset_toward_neutral(f32::NAN), NEUTRAL);
    }
}
