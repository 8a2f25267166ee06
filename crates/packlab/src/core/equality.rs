use super::PackedColor;

/// Test macro for asserting that two channel arrays are close.
///
/// Given two arrays of floating point channels and a tolerance, this macro
/// checks that the absolute difference between corresponding channels does
/// not exceed the tolerance.
///
/// # Panics
///
/// This macro panics if any channel pair differs by more than the tolerance.
/// Its message places the channels below each other at the beginning of
/// subsequent lines for easy comparability.
#[cfg(test)]
macro_rules! assert_close_channels {
    ($cs1:expr , $cs2:expr , $tolerance:expr $(,)?) => {
        let (cs1, cs2, tolerance) = ($cs1, $cs2, $tolerance);
        let close = cs1
            .iter()
            .zip(cs2.iter())
            .all(|(c1, c2)| (c1 - c2).abs() <= tolerance);
        assert!(
            close,
            "channels differ by more than {}:\n{:?}\n{:?}",
            tolerance, cs1, cs2
        );
    };
}

#[cfg(test)]
pub(crate) use assert_close_channels;

// --------------------------------------------------------------------------------------------------------------------

/// Compute the squared Euclidean distance between two packed colors.
///
/// The distance is computed on the lightness and chroma bytes. Alpha is
/// ignored.
#[inline]
pub(crate) fn channel_distance(color1: PackedColor, color2: PackedColor) -> u32 {
    #[inline]
    fn squared(b1: u8, b2: u8) -> u32 {
        let d = b1.abs_diff(b2) as u32;
        d * d
    }

    squared(color1.lightness_byte(), color2.lightness_byte())
        + squared(color1.a_byte(), color2.a_byte())
        + squared(color1.b_byte(), color2.b_byte())
}

// --------------------------------------------------------------------------------------------------------------------
