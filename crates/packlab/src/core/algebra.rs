use super::packed::OPAQUE;
use super::PackedColor;

/// The chroma axes of a packed color.
///
/// The first axis runs from green to red for Oklab and from cyan to red
/// (protan) for IPT. The second axis runs from blue to yellow for both.
#[cfg_attr(
    feature = "pyffi",
    pyo3::pyclass(eq, eq_int, frozen, hash, module = "packlab.color")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    First,
    Second,
}

/// Normalize an interpolation fraction to `0..=1`, with not-a-number
/// becoming zero.
#[inline]
fn fraction(t: f32) -> f32 {
    if t.is_nan() {
        0.0
    } else {
        t.clamp(0.0, 1.0)
    }
}

/// Move the byte towards the target by the fraction of the distance,
/// rounding to the nearest byte.
#[inline]
fn toward(start: u8, target: u8, t: f32) -> u8 {
    let start = start as f32;
    (start + (target as f32 - start) * t)
        .round()
        .clamp(0.0, 255.0) as u8
}

/// Lighten the color by moving lightness the fraction towards white.
pub(crate) fn lighten(color: PackedColor, t: f32) -> PackedColor {
    let t = fraction(t);
    color.with_lightness_byte(toward(color.lightness_byte(), 255, t))
}

/// Darken the color by moving lightness the fraction towards black.
pub(crate) fn darken(color: PackedColor, t: f32) -> PackedColor {
    let t = fraction(t);
    color.with_lightness_byte(toward(color.lightness_byte(), 0, t))
}

/// Move the chroma axis the fraction towards its positive pole.
///
/// The result is not limited to the gamut.
pub(crate) fn raise_pole(color: PackedColor, axis: Axis, t: f32) -> PackedColor {
    move_pole(color, axis, 255, fraction(t))
}

/// Move the chroma axis the fraction towards its negative pole.
///
/// The result is not limited to the gamut.
pub(crate) fn lower_pole(color: PackedColor, axis: Axis, t: f32) -> PackedColor {
    move_pole(color, axis, 0, fraction(t))
}

#[inline]
fn move_pole(color: PackedColor, axis: Axis, target: u8, t: f32) -> PackedColor {
    let (a, b) = (color.a_byte(), color.b_byte());
    match axis {
        Axis::First => color.with_chroma_bytes(toward(a, target, t), b),
        Axis::Second => color.with_chroma_bytes(a, toward(b, target, t)),
    }
}

/// Make the color more opaque by moving alpha the fraction towards opaque.
pub(crate) fn blot(color: PackedColor, t: f32) -> PackedColor {
    color.with_alpha_byte(toward(color.alpha_byte(), OPAQUE, fraction(t)))
}

/// Make the color more transparent by moving alpha the fraction towards zero.
pub(crate) fn fade(color: PackedColor, t: f32) -> PackedColor {
    color.with_alpha_byte(toward(color.alpha_byte(), 0, fraction(t)))
}

/// Interpolate between two colors, channel by channel.
///
/// A fraction of zero yields the first color, a fraction of one the second.
/// The result's alpha is even.
pub(crate) fn lerp(color1: PackedColor, color2: PackedColor, t: f32) -> PackedColor {
    let t = fraction(t);
    let [l1, a1, b1, alpha1] = color1.to_bytes();
    let [l2, a2, b2, alpha2] = color2.to_bytes();

    PackedColor::new(
        toward(l1, l2, t),
        toward(a1, a2, t),
        toward(b1, b2, t),
        toward(alpha1, alpha2, t),
    )
}

/// Mix `count` colors starting at `offset` with equal weights.
///
/// The mix is computed incrementally, interpolating the running result with
/// the k-th additional color by `1 / (k + 1)`. Before rounding, that is the
/// arithmetic mean of the colors' channels. If count is zero or the range
/// exceeds the slice, this function returns the transparent color.
pub fn mix(colors: &[PackedColor], offset: usize, count: usize) -> PackedColor {
    let Some(end) = offset.checked_add(count) else {
        return PackedColor::TRANSPARENT;
    };
    let Some(range) = colors.get(offset..end) else {
        return PackedColor::TRANSPARENT;
    };
    let Some((first, rest)) = range.split_first() else {
        return PackedColor::TRANSPARENT;
    };

    rest.iter()
        .enumerate()
        .fold(*first, |result, (index, color)| {
            lerp(result, *color, 1.0 / (index + 2) as f32)
        })
}

// --------------------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn test_lighten_darken() {
        let color = PackedColor::new(100, 50, 200, 254);
        assert_eq!(lighten(color, 0.0), color);
        assert_eq!(darken(color, 0.0), color);
        assert_eq!(lighten(color, 1.0).lightness_byte(), 255);
        assert_eq!(darken(color, 1.0).lightness_byte(), 0);
        assert_eq!(lighten(color, 0.5).to_bytes(), [178, 50, 200, 254]);
        assert_eq!(darken(color, 0.25).to_bytes(), [75, 50, 200, 254]);

        // Clamped fractions
        assert_eq!(lighten(color, 7.0).lightness_byte(), 255);
        assert_eq!(darken(color, -1.0), color);
        assert_eq!(lighten(color, f32::NAN), color);
    }

    #[test]
    fn test_poles() {
        let color = PackedColor::new(100, 100, 200, 254);
        assert_eq!(raise_pole(color, Axis::First, 1.0).to_bytes(), [100, 255, 200, 254]);
        assert_eq!(lower_pole(color, Axis::Second, 0.5).to_bytes(), [100, 100, 100, 254]);
        assert_eq!(raise_pole(color, Axis::Second, 0.0), color);
    }

    #[test]
    fn test_alpha() {
        let color = PackedColor::new(100, 100, 100, 100);
        assert_eq!(blot(color, 1.0).alpha_byte(), 254);
        assert_eq!(fade(color, 1.0).alpha_byte(), 0);
        assert_eq!(fade(color, 0.25).alpha_byte(), 74);

        // 100 + 154 × 0.3 = 146.2, which rounds to 146
        assert_eq!(blot(color, 0.3).alpha_byte(), 146);
        assert_eq!(fade(color, 0.01).alpha_byte() % 2, 0);
    }

    #[test]
    fn test_lerp() {
        let c1 = PackedColor::new(0, 0, 255, 0);
        let c2 = PackedColor::new(255, 255, 0, 254);
        assert_eq!(lerp(c1, c2, 0.0), c1);
        assert_eq!(lerp(c1, c2, 1.0), c2);
        assert_eq!(lerp(c1, c2, 0.5).to_bytes(), [128, 128, 128, 126]);
        assert_eq!(lerp(c1, c2, 2.0), c2);
    }

    #[test]
    fn test_mix() {
        let red = PackedColor::new(180, 160, 140, 254);
        let blue = PackedColor::new(140, 120, 90, 254);
        let colors = [red, blue, red];

        assert_eq!(mix(&colors, 0, 0), PackedColor::TRANSPARENT);
        assert_eq!(mix(&colors, 2, 2), PackedColor::TRANSPARENT);
        assert_eq!(mix(&colors, usize::MAX, 2), PackedColor::TRANSPARENT);
        assert_eq!(mix(&colors, 1, 1), blue);
        assert_eq!(mix(&colors, 0, 2).to_bytes(), [160, 140, 115, 254]);

        // (180 + 140 + 180) / 3 = 166.7, (160 + 120 + 160) / 3 = 146.7,
        // (140 + 90 + 140) / 3 = 123.3
        let [l, a, b, alpha] = mix(&colors, 0, 3).to_bytes();
        assert!(l.abs_diff(167) <= 1 && a.abs_diff(147) <= 1 && b.abs_diff(123) <= 1);
        assert_eq!(alpha, 254);
    }

    #[test]
    fn test_mix_constant() {
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..500 {
            let color = PackedColor::from_bits(rng.random());
            let count = rng.random_range(1..10);
            let colors = vec![color; count];
            assert_eq!(mix(&colors, 0, count), color);
        }
    }
}
