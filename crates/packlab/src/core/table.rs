use std::borrow::Cow;

use crate::error::GamutTableError;

#[cfg(feature = "builtin")]
use super::ColorSpace;

#[cfg(feature = "builtin")]
const OKLAB_BYTES: &[u8] = include_bytes!("../../data/oklab-gamut.bin");
#[cfg(feature = "builtin")]
const IPT_BYTES: &[u8] = include_bytes!("../../data/ipt-gamut.bin");

#[cfg(feature = "builtin")]
const _: () = assert!(OKLAB_BYTES.len() == GamutTable::SIZE);
#[cfg(feature = "builtin")]
const _: () = assert!(IPT_BYTES.len() == GamutTable::SIZE);

#[cfg(feature = "builtin")]
static OKLAB_TABLE: GamutTable = GamutTable {
    data: Cow::Borrowed(OKLAB_BYTES),
};
#[cfg(feature = "builtin")]
static IPT_TABLE: GamutTable = GamutTable {
    data: Cow::Borrowed(IPT_BYTES),
};

/// A gamut table.
///
/// The table bounds the chroma of in-gamut colors for each combination of
/// lightness byte and hue bucket. Hue buckets divide the hue circle into 256
/// equal parts, with bucket 0 starting at the positive A axis. An entry `g`
/// states that a color with chroma offsets `a`, `b` (see
/// [`PackedColor::offsets`](crate::PackedColor::offsets)) is in gamut if
///
/// ```text
/// a² + b² <= g² / 2¹⁸ + 2⁻¹⁶
/// ```
///
/// In other words, the maximum offset distance is `g / 512`, with a small
/// slack for rounding. The table is immutable and can be shared freely
/// between threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GamutTable {
    data: Cow<'static, [u8]>,
}

impl GamutTable {
    /// The number of bytes in a gamut table.
    pub const SIZE: usize = 256 * 256;

    /// The divisor for converting an entry to the maximum offset distance.
    pub(crate) const SCALE: f32 = 512.0;

    /// Get the builtin gamut table for the color space.
    ///
    /// Builtin tables are embedded in the binary and hence have static
    /// lifetime.
    #[cfg(feature = "builtin")]
    pub fn builtin(space: ColorSpace) -> &'static GamutTable {
        match space {
            ColorSpace::Oklab => &OKLAB_TABLE,
            ColorSpace::Ipt => &IPT_TABLE,
        }
    }

    /// Create a new gamut table from the given bytes.
    ///
    /// The bytes must be laid out with the lightness byte as the major and the
    /// hue bucket as the minor index.
    pub fn from_bytes<B: Into<Vec<u8>>>(bytes: B) -> Result<Self, GamutTableError> {
        let bytes = bytes.into();
        if bytes.len() != Self::SIZE {
            return Err(GamutTableError::WrongSize {
                actual: bytes.len(),
                expected: Self::SIZE,
            });
        }

        log::debug!(
            "loaded gamut table with maximum entry {}",
            bytes.iter().max().copied().unwrap_or(0)
        );
        Ok(Self {
            data: Cow::Owned(bytes),
        })
    }

    /// Determine the hue bucket for the hue in turns.
    ///
    /// Hues outside `0..1` wrap around. Not-a-number maps to bucket 0.
    #[inline]
    pub fn hue_bucket(hue: f32) -> u8 {
        ((256.0 * hue).floor() as i32 & 0xff) as u8
    }

    /// Look up the entry for the lightness byte and hue bucket.
    #[inline]
    pub fn lookup(&self, lightness: u8, hue_bucket: u8) -> u8 {
        self.data[(lightness as usize) << 8 | hue_bucket as usize]
    }

    /// Look up the maximum offset distance for the lightness byte and hue in
    /// turns.
    #[inline]
    pub fn max_distance(&self, lightness: u8, hue: f32) -> f32 {
        self.lookup(lightness, Self::hue_bucket(hue)) as f32 / Self::SCALE
    }

    /// Get the raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl AsRef<[u8]> for GamutTable {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

// --------------------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_hue_bucket() {
        assert_eq!(GamutTable::hue_bucket(0.0), 0);
        assert_eq!(GamutTable::hue_bucket(0.5), 128);
        assert_eq!(GamutTable::hue_bucket(0.999), 255);
        assert_eq!(GamutTable::hue_bucket(1.0), 0);
        assert_eq!(GamutTable::hue_bucket(1.25), 64);
        assert_eq!(GamutTable::hue_bucket(f32::NAN), 0);
    }

    #[test]
    fn test_from_bytes() {
        assert_eq!(
            GamutTable::from_bytes(vec![0; 10]),
            Err(GamutTableError::WrongSize {
                actual: 10,
                expected: GamutTable::SIZE
            })
        );

        let mut bytes = vec![0; GamutTable::SIZE];
        bytes[3 << 8 | 7] = 42;
        let table = GamutTable::from_bytes(bytes).expect("table has correct size");
        assert_eq!(table.lookup(3, 7), 42);
        assert_eq!(table.lookup(7, 3), 0);
        assert_eq!(table.as_bytes().len(), GamutTable::SIZE);
    }

    #[cfg(feature = "builtin")]
    #[test]
    fn test_builtin() {
        for space in ColorSpace::all() {
            let table = GamutTable::builtin(space);
            assert_eq!(table.as_ref().len(), GamutTable::SIZE);

            // Black has no chroma, but mid-tones do.
            assert!(table.lookup(0, 0) <= 4, "{space}");
            assert!(table.lookup(128, 0) > 20, "{space}");
            assert!(table.max_distance(128, 0.0) > 0.04, "{space}");
        }
    }
}
