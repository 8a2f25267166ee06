/// The adjectives for lightness levels -4 to 4, with the empty word for 0.
pub(crate) const LIGHTNESS_WORDS: [&str; 9] = [
    "darkmost", "darkest", "darker", "dark", "", "light", "lighter", "lightest", "lightmost",
];

/// The lightness adjustments for levels -4 to 4. Negative amounts darken.
pub(crate) const LIGHTNESS_AMOUNTS: [f32; 9] =
    [-0.6, -0.45, -0.3, -0.15, 0.0, 0.125, 0.25, 0.375, 0.5];

/// The adjectives for saturation levels -4 to 4, with the empty word for 0.
pub(crate) const SATURATION_WORDS: [&str; 9] = [
    "dullmost", "dullest", "duller", "dull", "", "rich", "richer", "richest", "richmost",
];

/// The saturation adjustments for levels -4 to 4. Negative amounts dull.
pub(crate) const SATURATION_AMOUNTS: [f32; 9] = [-0.8, -0.6, -0.4, -0.2, 0.0, 0.2, 0.4, 0.6, 0.8];

/// An adjective and its level in `-4..=4`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Adjective {
    Lightness(i8),
    Saturation(i8),
}

impl Adjective {
    /// All level pairs in search order, lightness major.
    pub(crate) fn levels() -> impl Iterator<Item = (i8, i8)> {
        (-4..=4).flat_map(|lightness| (-4..=4).map(move |saturation| (lightness, saturation)))
    }

    /// Get the lightness amount for the level.
    pub(crate) fn lightness_amount(level: i8) -> f32 {
        LIGHTNESS_AMOUNTS[Self::slot(level)]
    }

    /// Get the saturation amount for the level.
    pub(crate) fn saturation_amount(level: i8) -> f32 {
        SATURATION_AMOUNTS[Self::slot(level)]
    }

    /// Get the lightness adjective for the level.
    pub(crate) fn lightness_word(level: i8) -> &'static str {
        LIGHTNESS_WORDS[Self::slot(level)]
    }

    /// Get the saturation adjective for the level.
    pub(crate) fn saturation_word(level: i8) -> &'static str {
        SATURATION_WORDS[Self::slot(level)]
    }

    #[inline]
    fn slot(level: i8) -> usize {
        (level.clamp(-4, 4) + 4) as usize
    }
}

/// Map a word length to a level magnitude for darker, richer, and duller
/// adjectives, which have four-letter stems.
#[inline]
fn short_stem_level(length: usize) -> Option<i8> {
    match length {
        4 => Some(1),
        6 => Some(2),
        7 => Some(3),
        8 => Some(4),
        _ => None,
    }
}

/// Map a word length to a level magnitude for lighter adjectives, which have
/// a five-letter stem.
#[inline]
fn long_stem_level(length: usize) -> Option<i8> {
    match length {
        5 => Some(1),
        7 => Some(2),
        8 => Some(3),
        9 => Some(4),
        _ => None,
    }
}

/// Classify a lowercase word as adjective.
///
/// Only the first letters and the length of the word matter, so `lxgxx` is
/// just as light as `light`. Words that look like adjectives but have the wrong
/// length are not adjectives and are looked up as color names instead.
pub(crate) fn classify(word: &str) -> Option<Adjective> {
    let bytes = word.as_bytes();
    let length = bytes.len();

    match (bytes.first(), bytes.get(1), bytes.get(2)) {
        (Some(b'l'), _, Some(b'g')) => long_stem_level(length).map(Adjective::Lightness),
        (Some(b'd'), Some(b'a'), _) => short_stem_level(length).map(|l| Adjective::Lightness(-l)),
        (Some(b'r'), Some(b'i'), _) => short_stem_level(length).map(Adjective::Saturation),
        (Some(b'd'), Some(b'u'), _) => short_stem_level(length).map(|l| Adjective::Saturation(-l)),
        _ => None,
    }
}

// --------------------------------------------------------------------------------------------------------------------
