use super::ColorSpace;

/// Multiply the 3 by 3 matrix and 3-element vector with each other, producing a
/// new 3-element vector.
#[inline]
fn multiply(matrix: &[[f32; 3]; 3], vector: &[f32; 3]) -> [f32; 3] {
    let [row1, row2, row3] = matrix;

    [
        row1[0].mul_add(vector[0], row1[1].mul_add(vector[1], row1[2] * vector[2])),
        row2[0].mul_add(vector[0], row2[1].mul_add(vector[1], row2[2] * vector[2])),
        row3[0].mul_add(vector[0], row3[1].mul_add(vector[1], row3[2] * vector[2])),
    ]
}

/// Apply the function to each of the three coordinates.
#[inline]
fn each<F: Fn(f32) -> f32>(value: &[f32; 3], f: F) -> [f32; 3] {
    [f(value[0]), f(value[1]), f(value[2])]
}

// --------------------------------------------------------------------------------------------------------------------

mod light {
    const SHAPE: f32 = 0.64516133;
    const INVERSE_SHAPE: f32 = 1.55;
    const TURNING_POINT: f32 = 0.95;

    /// Evaluate Barron's bias/gain curve with the given shape and turning
    /// point on `0..=1`.
    ///
    /// Below the turning point, the curve compresses or expands values like a
    /// bias function. Above it, the curve mirrors that shape towards one.
    /// Replacing the shape with its reciprocal yields the inverse curve.
    #[inline]
    fn barron(x: f32, shape: f32, turning_point: f32) -> f32 {
        let d = turning_point - x;
        if d < 0.0 {
            ((1.0 - turning_point) * (x - 1.0)) / (1.0 - (x + shape * d)) + 1.0
        } else {
            (turning_point * x) / (1e-20 + (x + shape * d))
        }
    }

    /// Remap Oklab's lightness to packed lightness. The remapped lightness
    /// spends more of its range on darker tones.
    pub(super) fn forward_light(lightness: f32) -> f32 {
        barron(lightness, SHAPE, TURNING_POINT)
    }

    /// Remap packed lightness back to Oklab's lightness.
    pub(super) fn reverse_light(lightness: f32) -> f32 {
        barron(lightness, INVERSE_SHAPE, TURNING_POINT)
    }
}

use light::{forward_light, reverse_light};

// --------------------------------------------------------------------------------------------------------------------
// https://bottosson.github.io/posts/oklab/

mod oklab {
    use super::{each, forward_light, multiply, reverse_light};

    #[rustfmt::skip]
    #[allow(clippy::excessive_precision)]
    const LINEAR_SRGB_TO_LMS: [[f32; 3]; 3] = [
        [ 0.4122214708, 0.5363325363, 0.0514459929 ],
        [ 0.2119034982, 0.6806995451, 0.1073969566 ],
        [ 0.0883024619, 0.2817188376, 0.6299787005 ],
    ];

    #[rustfmt::skip]
    #[allow(clippy::excessive_precision)]
    const LMS_TO_OKLAB: [[f32; 3]; 3] = [
        [ 0.2104542553,  0.7936177850, -0.0040720468 ],
        [ 1.9779984951, -2.4285922050,  0.4505937099 ],
        [ 0.0259040371,  0.7827717662, -0.8086757660 ],
    ];

    #[rustfmt::skip]
    #[allow(clippy::excessive_precision)]
    const OKLAB_TO_LMS: [[f32; 3]; 3] = [
        [ 1.0,  0.3963377774,  0.2158037573 ],
        [ 1.0, -0.1055613458, -0.0638541728 ],
        [ 1.0, -0.0894841775, -1.2914855480 ],
    ];

    #[rustfmt::skip]
    #[allow(clippy::excessive_precision)]
    const LMS_TO_LINEAR_SRGB: [[f32; 3]; 3] = [
        [  4.0767416613, -3.3077115904,  0.2309699287 ],
        [ -1.2684380041,  2.6097574007, -0.3413193963 ],
        [ -0.0041960865, -0.7034186145,  1.7076147009 ],
    ];

    /// Convert gamma-encoded RGB to Oklab with remapped lightness. Gamma is
    /// approximated by a square.
    pub(super) fn rgb_to_oklab(value: &[f32; 3]) -> [f32; 3] {
        let linear = each(value, |c| c * c);
        let lms = each(&multiply(&LINEAR_SRGB_TO_LMS, &linear), f32::cbrt);
        let [l, a, b] = multiply(&LMS_TO_OKLAB, &lms);
        [forward_light(l), a, b]
    }

    /// Convert Oklab with remapped lightness to gamma-encoded RGB. The result
    /// is clamped to the unit range.
    pub(super) fn oklab_to_rgb(value: &[f32; 3]) -> [f32; 3] {
        let [l, a, b] = *value;
        let lms = each(&multiply(&OKLAB_TO_LMS, &[reverse_light(l), a, b]), |c| c * c * c);
        let linear = multiply(&LMS_TO_LINEAR_SRGB, &lms);
        each(&linear, |c| c.clamp(0.0, 1.0).sqrt())
    }
}

// --------------------------------------------------------------------------------------------------------------------
// Ebner & Fairchild, "Development and Testing of a Color Space (IPT) with
// Improved Hue Uniformity", 1998

mod ipt {
    use super::{each, multiply};

    const GAMMA: f32 = 2.2;
    const EXPONENT: f32 = 0.43;

    #[rustfmt::skip]
    #[allow(clippy::excessive_precision)]
    const LINEAR_RGB_TO_LMS: [[f32; 3]; 3] = [
        [ 0.3139254489, 0.6394773456, 0.0465972055 ],
        [ 0.1517009344, 0.7482495906, 0.1000494750 ],
        [ 0.0177500401, 0.1094476209, 0.8728023391 ],
    ];

    #[rustfmt::skip]
    const LMS_TO_IPT: [[f32; 3]; 3] = [
        [ 0.4000,  0.4000,  0.2000 ],
        [ 4.4550, -4.8510,  0.3960 ],
        [ 0.8056,  0.3572, -1.1628 ],
    ];

    #[rustfmt::skip]
    #[allow(clippy::excessive_precision)]
    const IPT_TO_LMS: [[f32; 3]; 3] = [
        [ 1.0,  0.0975689305,  0.2052264332 ],
        [ 1.0, -0.1138764855,  0.1332171584 ],
        [ 1.0,  0.0326151099, -0.6768871831 ],
    ];

    #[rustfmt::skip]
    #[allow(clippy::excessive_precision)]
    const LMS_TO_LINEAR_RGB: [[f32; 3]; 3] = [
        [  5.4325435423, -4.6788477814,  0.2463042391 ],
        [ -1.1051575638,  2.3110741800, -0.2059166161 ],
        [  0.0281037291, -0.1946509850,  1.1665472559 ],
    ];

    /// Raise the magnitude to the exponent while preserving the sign.
    #[inline]
    fn signed_power(value: f32, exponent: f32) -> f32 {
        value.abs().powf(exponent).copysign(value)
    }

    /// Convert gamma-encoded RGB to IPT.
    pub(super) fn rgb_to_ipt(value: &[f32; 3]) -> [f32; 3] {
        let linear = each(value, |c| c.max(0.0).powf(GAMMA));
        let lms = each(&multiply(&LINEAR_RGB_TO_LMS, &linear), |c| {
            signed_power(c, EXPONENT)
        });
        multiply(&LMS_TO_IPT, &lms)
    }

    /// Convert IPT to gamma-encoded RGB. The result is clamped to the unit
    /// range.
    pub(super) fn ipt_to_rgb(value: &[f32; 3]) -> [f32; 3] {
        let lms = each(&multiply(&IPT_TO_LMS, value), |c| {
            signed_power(c, EXPONENT.recip())
        });
        let linear = multiply(&LMS_TO_LINEAR_RGB, &lms);
        each(&linear, |c| c.clamp(0.0, 1.0).powf(GAMMA.recip()))
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert gamma-encoded RGBA to normalized packed channels.
///
/// The device channels must be in `0..=1` and are clamped otherwise. The
/// result holds lightness, the two chroma axes in stored form `c × 0.5 + 0.5`,
/// and the unchanged alpha, all in `0..=1` for in-gamut inputs.
#[must_use = "function returns new color channels and does not mutate original value"]
pub fn to_perceptual(space: ColorSpace, rgba: &[f32; 4]) -> [f32; 4] {
    let [r, g, b, alpha] = *rgba;
    let rgb = each(&[r, g, b], |c| c.clamp(0.0, 1.0));

    let [l, c1, c2] = match space {
        ColorSpace::Oklab => oklab::rgb_to_oklab(&rgb),
        ColorSpace::Ipt => ipt::rgb_to_ipt(&rgb),
    };

    [l, c1.mul_add(0.5, 0.5), c2.mul_add(0.5, 0.5), alpha]
}

/// Convert normalized packed channels back to gamma-encoded RGBA.
///
/// This function inverts [`to_perceptual`] up to floating point error. Since
/// not every combination of packed channels is an RGB color, the device
/// channels are clamped to `0..=1`.
#[must_use = "function returns new color channels and does not mutate original value"]
pub fn to_device(space: ColorSpace, channels: &[f32; 4]) -> [f32; 4] {
    let [l, c1, c2, alpha] = *channels;
    let coordinates = [l, (c1 - 0.5) * 2.0, (c2 - 0.5) * 2.0];

    let [r, g, b] = match space {
        ColorSpace::Oklab => oklab::oklab_to_rgb(&coordinates),
        ColorSpace::Ipt => ipt::ipt_to_rgb(&coordinates),
    };

    [r, g, b, alpha]
}

/// Unpack an `0xRRGGBBAA` integer into normalized RGBA.
#[inline]
pub(crate) fn from_rgba8888(rgba: u32) -> [f32; 4] {
    let [r, g, b, a] = rgba.to_be_bytes();
    [r, g, b, a].map(|c| c as f32 / 255.0)
}

/// Pack normalized RGBA into an `0xRRGGBBAA` integer, clamping each channel.
#[inline]
pub(crate) fn to_rgba8888(rgba: &[f32; 4]) -> u32 {
    u32::from_be_bytes(rgba.map(super::packed::quantize))
}

// --------------------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::assert_close_channels;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn test_light() {
        assert_eq!(forward_light(0.0), 0.0);
        assert!((forward_light(1.0) - 1.0).abs() < 1e-6);
        assert!((reverse_light(1.0) - 1.0).abs() < 1e-6);

        let mut previous = 0.0;
        for index in 1..=1000 {
            let x = index as f32 / 1000.0;
            let y = forward_light(x);
            assert!(previous < y, "monotonic at {x}");
            assert!((reverse_light(y) - x).abs() < 1e-5, "inverse at {x}");
            previous = y;
        }
    }

    #[test]
    fn test_known_colors() {
        // Reference values computed in double precision.
        let red = to_perceptual(ColorSpace::Oklab, &[1.0, 0.0, 0.0, 1.0]);
        assert_close_channels!(red, [0.7138, 0.6124, 0.5629, 1.0], 1e-3);

        let white = to_perceptual(ColorSpace::Oklab, &[1.0, 1.0, 1.0, 1.0]);
        assert_close_channels!(white, [1.0, 0.5, 0.5, 1.0], 1e-3);

        let black = to_perceptual(ColorSpace::Ipt, &[0.0, 0.0, 0.0, 0.0]);
        assert_close_channels!(black, [0.0, 0.5, 0.5, 0.0], 1e-6);

        let red = to_perceptual(ColorSpace::Ipt, &[1.0, 0.0, 0.0, 1.0]);
        assert_close_channels!(red, [0.4562, 0.8104, 0.7214, 1.0], 1e-3);
    }

    #[test]
    fn test_round_trip() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for space in ColorSpace::all() {
            for _ in 0..2000 {
                let rgba = [
                    rng.random::<f32>(),
                    rng.random::<f32>(),
                    rng.random::<f32>(),
                    rng.random::<f32>(),
                ];
                let channels = to_perceptual(space, &rgba);
                let rgba2 = to_device(space, &channels);
                assert_close_channels!(rgba, rgba2, 1.0 / 255.0);
            }
        }
    }

    #[test]
    fn test_rgba8888() {
        assert_eq!(from_rgba8888(0xff00_00ff), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(to_rgba8888(&[1.0, 0.0, 0.0, 1.0]), 0xff00_00ff);
        assert_eq!(to_rgba8888(&[2.0, -1.0, 0.5, 1.0]), 0xff00_80ff);
        assert_eq!(to_rgba8888(&from_rgba8888(0x1234_5678)), 0x1234_5678);
    }
}
