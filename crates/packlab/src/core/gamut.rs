use super::packed::{from_offset, from_offset_toward_neutral, quantize, NEUTRAL};
use super::trig::{atan2_turns, cos_turns, sin_turns};
use super::{GamutTable, PackedColor};

/// 1 / 512², for squaring table entries into offset space.
const SQUARED_SCALE: f32 = 1.0 / 262_144.0;
/// 2⁻¹⁶, the slack of the gamut test.
const EPSILON: f32 = 1.0 / 65_536.0;

/// Offset distances below this threshold are considered gray.
pub(crate) const GRAY_DISTANCE: f32 = 0.025;

/// Determine the hue of the color in turns.
#[inline]
pub(crate) fn hue(color: PackedColor) -> f32 {
    let (a, b) = color.offsets();
    atan2_turns(b, a)
}

/// Determine the distance of the color's chroma offsets from neutral.
#[inline]
pub(crate) fn offset_distance(color: PackedColor) -> f32 {
    let (a, b) = color.offsets();
    a.hypot(b)
}

/// Determine whether the color is in gamut.
///
/// This function only considers lightness and chroma. Alpha is irrelevant.
pub(crate) fn in_gamut(table: &GamutTable, color: PackedColor) -> bool {
    let (a, b) = color.offsets();
    let hue = atan2_turns(b, a);
    let g = table.lookup(color.lightness_byte(), GamutTable::hue_bucket(hue)) as f32;
    g * g * SQUARED_SCALE + EPSILON >= a * a + b * b
}

/// Move the color radially onto the gamut boundary for its lightness and hue.
///
/// The resulting chroma bytes are rounded towards neutral and the table limit
/// is lowered until the quantized color passes [`in_gamut`]. Since neutral
/// chroma always passes, the search terminates.
fn project(table: &GamutTable, color: PackedColor) -> PackedColor {
    let lightness = color.lightness_byte();
    let hue = hue(color);
    let limit = table.lookup(lightness, GamutTable::hue_bucket(hue));
    let (cos, sin) = (cos_turns(hue), sin_turns(hue));

    for g in (0..=limit).rev() {
        let distance = g as f32 / GamutTable::SCALE;
        let candidate = color.with_chroma_bytes(
            from_offset_toward_neutral(cos * distance),
            from_offset_toward_neutral(sin * distance),
        );

        if in_gamut(table, candidate) {
            return candidate;
        }
    }

    color.with_chroma_bytes(NEUTRAL, NEUTRAL)
}

/// Limit the color to the gamut.
///
/// In-gamut colors are returned unchanged. Out-of-gamut colors are projected
/// onto the gamut boundary, preserving lightness, hue, and alpha. The result
/// is in gamut and hence the function is idempotent.
pub(crate) fn limit_to_gamut(table: &GamutTable, color: PackedColor) -> PackedColor {
    if in_gamut(table, color) {
        color
    } else {
        project(table, color)
    }
}

/// Maximize the color's saturation, moving it onto the gamut boundary for its
/// lightness and hue.
///
/// Unlike [`limit_to_gamut`], this function also moves in-gamut colors. Gray
/// colors take on the hue of their (tiny) chroma offsets. The neutral chroma
/// bytes 128/128 have offsets of +0.5/255 each and hence a hue of about 1/8
/// turn.
pub(crate) fn maximize_saturation(table: &GamutTable, color: PackedColor) -> PackedColor {
    project(table, color)
}

/// Scale the chroma offsets by the factor, rounding to the nearest bytes.
#[inline]
fn scale_chroma(color: PackedColor, factor: f32) -> PackedColor {
    let (a, b) = color.offsets();
    color.with_chroma_bytes(from_offset(a * factor), from_offset(b * factor))
}

/// Enrich the color by scaling chroma by `1 + amount` and limiting the result
/// to the gamut. The amount is clamped to `0..=1`.
pub(crate) fn enrich(table: &GamutTable, color: PackedColor, amount: f32) -> PackedColor {
    let amount = if amount.is_nan() { 0.0 } else { amount.clamp(0.0, 1.0) };
    limit_to_gamut(table, scale_chroma(color, 1.0 + amount))
}

/// Dull the color by scaling chroma by `1 - amount`. The amount is clamped to
/// `0..=1`.
///
/// The chroma bytes are rounded towards neutral, so that in-gamut colors stay
/// in gamut. No further gamut correction is applied.
pub(crate) fn dullen(color: PackedColor, amount: f32) -> PackedColor {
    let amount = if amount.is_nan() { 0.0 } else { amount.clamp(0.0, 1.0) };
    let factor = 1.0 - amount;
    let (a, b) = color.offsets();
    color.with_chroma_bytes(
        from_offset_toward_neutral(a * factor),
        from_offset_toward_neutral(b * factor),
    )
}

/// Determine the maximum chroma for the normalized lightness and hue in
/// turns.
///
/// Chroma is measured in the color space's own units, i.e., twice the offset
/// distance.
pub fn chroma_limit(table: &GamutTable, lightness: f32, hue: f32) -> f32 {
    2.0 * table.max_distance(quantize(lightness), hue)
}

/// Determine the saturation, i.e., the ratio of the color's offset distance to
/// the maximum offset distance at its lightness and hue.
///
/// In-gamut colors have saturations in `0..=1`, give or take a little
/// rounding slack. If the maximum distance is zero, the saturation is zero.
pub(crate) fn saturation(table: &GamutTable, color: PackedColor) -> f32 {
    let limit = table.max_distance(color.lightness_byte(), hue(color));
    if limit == 0.0 {
        0.0
    } else {
        offset_distance(color) / limit
    }
}

/// Create a color from hue in turns, chroma in color space units, normalized
/// lightness, and normalized alpha.
///
/// The chroma is clamped to the maximum chroma for the lightness and hue. The
/// result is in gamut.
pub(crate) fn from_hcl(
    table: &GamutTable,
    hue: f32,
    chroma: f32,
    lightness: f32,
    alpha: f32,
) -> PackedColor {
    let lightness_byte = quantize(lightness);
    let hue = if hue.is_finite() { hue } else { 0.0 };
    let chroma = if chroma.is_nan() { 0.0 } else { chroma.max(0.0) };
    let distance = (0.5 * chroma).min(table.max_distance(lightness_byte, hue));

    let color = PackedColor::new(
        lightness_byte,
        from_offset(cos_turns(hue) * distance),
        from_offset(sin_turns(hue) * distance),
        quantize(alpha),
    );
    limit_to_gamut(table, color)
}

// --------------------------------------------------------------------------------------------------------------------
