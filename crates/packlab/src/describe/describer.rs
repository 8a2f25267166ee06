use super::lexicon::{classify, Adjective};
use crate::core::{channel_distance, darken, dullen, enrich, lighten, limit_to_gamut, mix, words};
use crate::{GamutTable, PackedColor, Palette};

#[cfg(feature = "builtin")]
use crate::ColorSpace;

/// The largest number of palette colors mixed by [`Describer::best_match`].
pub const MAX_MIX_COUNT: usize = 16;

/// A scratch buffer for mixing colors.
///
/// Describing colors requires a list of colors to mix. Passing a buffer to
/// [`Describer::parse_description_with`] and [`Describer::best_match_with`]
/// reuses its allocation across calls. Each thread needs its own buffer.
#[derive(Clone, Debug, Default)]
pub struct MixBuffer {
    colors: Vec<PackedColor>,
}

impl MixBuffer {
    /// Create a new, empty mix buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new, empty mix buffer with room for the given number of
    /// colors.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            colors: Vec::with_capacity(capacity),
        }
    }

    /// Remove all colors.
    pub fn clear(&mut self) {
        self.colors.clear();
    }

    /// Add a color.
    pub fn push(&mut self, color: PackedColor) {
        self.colors.push(color);
    }

    /// Get the number of colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Determine whether this buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Get the colors.
    pub fn as_slice(&self) -> &[PackedColor] {
        &self.colors
    }

    /// Mix all colors in this buffer with equal weights.
    pub fn mix(&self) -> PackedColor {
        mix(&self.colors, 0, self.colors.len())
    }
}

// ====================================================================================================================

/// A describer of colors.
///
/// A describer turns plain-English color descriptions, such as `lighter dull
/// olive apricot`, into packed colors and finds the description that best
/// matches a packed color. A description is a sequence of words. Palette
/// names contribute colors to be mixed with equal weights, while the
/// adjectives `light`, `lighter`, `lightest`, `lightmost`, `dark`, `darker`,
/// `darkest`, and `darkmost` adjust lightness and `rich`, `richer`, `richest`,
/// `richmost`, `dull`, `duller`, `dullest`, and `dullmost` adjust
/// saturation. Unknown words contribute the transparent color.
///
/// A describer only reads its palette and gamut table, so that it can be
/// shared between threads. Scratch state lives in [`MixBuffer`]s.
#[derive(Clone, Debug)]
pub struct Describer<'a> {
    palette: &'a Palette,
    table: &'a GamutTable,
    by_hue: Vec<(&'a str, PackedColor)>,
}

impl<'a> Describer<'a> {
    /// Create a new describer for the palette and gamut table.
    ///
    /// Both must use the same color space.
    pub fn new(palette: &'a Palette, table: &'a GamutTable) -> Self {
        let by_hue = palette
            .entries_by_hue()
            .filter(|(_, color)| !color.is_transparent())
            .collect();

        Self {
            palette,
            table,
            by_hue,
        }
    }

    /// Get the palette.
    pub fn palette(&self) -> &'a Palette {
        self.palette
    }

    /// Get the gamut table.
    pub fn table(&self) -> &'a GamutTable {
        self.table
    }

    /// Parse the description into a color.
    ///
    /// This method allocates a fresh scratch buffer.
    ///
    /// ```
    /// # use packlab::{ColorSpace, Describer, PackedColor};
    /// let describer = Describer::builtin(ColorSpace::Oklab);
    /// assert_eq!(describer.parse_description(""), PackedColor::TRANSPARENT);
    /// assert_eq!(describer.parse_description("red"), describer.palette().get("red"));
    /// ```
    pub fn parse_description(&self, text: &str) -> PackedColor {
        self.parse_description_with(text, &mut MixBuffer::with_capacity(4))
    }

    /// Parse the description into a color, using the given scratch buffer.
    pub fn parse_description_with(&self, text: &str, buffer: &mut MixBuffer) -> PackedColor {
        buffer.clear();
        let mut lightness = 0.0;
        let mut saturation = 0.0;

        for word in words(text) {
            match classify(&word) {
                Some(Adjective::Lightness(level)) => {
                    lightness += Adjective::lightness_amount(level);
                }
                Some(Adjective::Saturation(level)) => {
                    saturation += Adjective::saturation_amount(level);
                }
                None => buffer.push(self.palette.get(&word)),
            }
        }

        self.adjust(buffer.mix(), lightness, saturation)
    }

    /// Lighten or darken and then enrich, dull, or just limit the color.
    fn adjust(&self, color: PackedColor, lightness: f32, saturation: f32) -> PackedColor {
        let color = if 0.0 < lightness {
            lighten(color, lightness)
        } else if lightness < 0.0 {
            darken(color, -lightness)
        } else {
            color
        };

        if 0.0 < saturation {
            enrich(self.table, color, saturation)
        } else if saturation < 0.0 {
            dullen(color, -saturation)
        } else {
            limit_to_gamut(self.table, color)
        }
    }

    /// Find the description that best matches the color.
    ///
    /// This method allocates a fresh scratch buffer. See
    /// [`Describer::best_match_with`].
    pub fn best_match(&self, color: PackedColor, mix_count: usize) -> String {
        let capacity = mix_count.clamp(1, MAX_MIX_COUNT);
        self.best_match_with(color, mix_count, &mut MixBuffer::with_capacity(capacity))
    }

    /// Find the description that best matches the color, using the given
    /// scratch buffer.
    ///
    /// This method exhaustively searches all sequences of `mix_count` palette
    /// colors, with a minimum of one and a maximum of [`MAX_MIX_COUNT`] colors,
    /// combined with all 81 pairs of
    /// lightness and saturation adjectives. Alpha and the transparent palette
    /// color are ignored. The distance between colors is the sum of squared
    /// differences between lightness and chroma bytes. If several descriptions
    /// are equally close, the first one found wins.
    ///
    /// The search space grows exponentially with the mix count, so it should
    /// be small, ideally no more than three. The resulting description parses
    /// back into the best match found.
    pub fn best_match_with(
        &self,
        color: PackedColor,
        mix_count: usize,
        buffer: &mut MixBuffer,
    ) -> String {
        let size = self.by_hue.len();
        if size == 0 {
            return String::new();
        }

        let mix_count = mix_count.clamp(1, MAX_MIX_COUNT);
        let combinations = size.saturating_pow(u32::try_from(mix_count).unwrap_or(u32::MAX));

        let mut best_distance = u32::MAX;
        let mut best = (0, 0, 0);

        for combination in 0..combinations {
            self.fill(buffer, combination, mix_count);
            let mixed = buffer.mix();

            for (lightness, saturation) in Adjective::levels() {
                let candidate = self.adjust(
                    mixed,
                    Adjective::lightness_amount(lightness),
                    Adjective::saturation_amount(saturation),
                );

                let distance = channel_distance(candidate, color);
                if distance < best_distance {
                    best_distance = distance;
                    best = (combination, lightness, saturation);
                }
            }
        }

        log::trace!(
            "best match for {} searched {} combinations of {} colors with distance {}",
            color,
            combinations,
            mix_count,
            best_distance
        );

        let (combination, lightness, saturation) = best;
        self.fill(buffer, combination, mix_count);
        let mut description = String::new();
        for word in [
            Adjective::lightness_word(lightness),
            Adjective::saturation_word(saturation),
        ] {
            if !word.is_empty() {
                description.push_str(word);
                description.push(' ');
            }
        }
        for (index, name) in self.names(combination, mix_count).enumerate() {
            if 0 < index {
                description.push(' ');
            }
            description.push_str(name);
        }

        description
    }

    /// Fill the buffer with the colors selected by the combination, whose
    /// digits in base palette size index the hue-ordered colors, least
    /// significant digit first.
    fn fill(&self, buffer: &mut MixBuffer, combination: usize, mix_count: usize) {
        buffer.clear();
        for (_, color) in self.selection(combination, mix_count) {
            buffer.push(color);
        }
    }

    fn names(&self, combination: usize, mix_count: usize) -> impl Iterator<Item = &'a str> + '_ {
        self.selection(combination, mix_count).map(|(name, _)| name)
    }

    fn selection(
        &self,
        combination: usize,
        mix_count: usize,
    ) -> impl Iterator<Item = (&'a str, PackedColor)> + '_ {
        let size = self.by_hue.len();
        (0..mix_count).scan(combination, move |remainder, _| {
            let entry = self.by_hue[*remainder % size];
            *remainder /= size;
            Some(entry)
        })
    }
}

#[cfg(feature = "builtin")]
impl Describer<'static> {
    /// Create a new describer for the builtin palette and gamut table of the
    /// color space.
    pub fn builtin(space: ColorSpace) -> Self {
        Self::new(Palette::builtin(space), GamutTable::builtin(space))
    }
}

// --------------------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    fn is_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_send_sync() {
        is_send_sync::<Describer<'static>>();
        is_send_sync::<MixBuffer>();
    }

    #[test]
    fn test_mix_buffer() {
        let mut buffer = MixBuffer::new();
        assert!(buffer.is_empty());
        assert_eq!(buffer.mix(), PackedColor::TRANSPARENT);

        let color = PackedColor::new(100, 110, 120, 254);
        buffer.push(color);
        buffer.push(color);
        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.as_slice(), &[color, color]);
        assert_eq!(buffer.mix(), color);

        buffer.clear();
        assert!(buffer.is_empty());
    }

    #[cfg(feature = "builtin")]
    #[test]
    fn test_parse_plain() {
        for space in ColorSpace::all() {
            let describer = Describer::builtin(space);
            let red = describer.palette().get("red");

            assert_eq!(describer.parse_description(""), PackedColor::TRANSPARENT);
            assert_eq!(describer.parse_description("  !? "), PackedColor::TRANSPARENT);
            assert_eq!(describer.parse_description("zzz"), PackedColor::TRANSPARENT);
            assert_eq!(describer.parse_description("red"), red);
            assert_eq!(describer.parse_description("RED!"), red);
        }
    }

    #[cfg(feature = "builtin")]
    #[test]
    fn test_parse_adjectives() {
        for space in ColorSpace::all() {
            let describer = Describer::builtin(space);
            let table = describer.table();
            let red = describer.palette().get("red");

            assert_eq!(
                describer.parse_description("lighter red"),
                limit_to_gamut(table, lighten(red, 0.25))
            );
            assert_eq!(describer.parse_description("richest red"), enrich(table, red, 0.6));
            assert_eq!(describer.parse_description("dull red"), dullen(red, 0.2));
            assert_eq!(
                describer.parse_description("darkest red"),
                limit_to_gamut(table, darken(red, 0.45))
            );

            // Adjectives accumulate, and malformed adjectives are names.
            assert_eq!(
                describer.parse_description("light light red"),
                describer.parse_description("lighter red")
            );
            let diluted = describer.parse_description("lights red");
            assert_eq!(diluted, limit_to_gamut(table, mix(&[PackedColor::TRANSPARENT, red], 0, 2)));
        }
    }

    #[cfg(feature = "builtin")]
    #[test]
    fn test_parse_mix() {
        let describer = Describer::builtin(ColorSpace::Oklab);
        let palette = describer.palette();
        let table = describer.table();

        let colors = [palette.get("apricot"), palette.get("olive")];
        let expected = dullen(lighten(mix(&colors, 0, 2), 0.25), 0.2);
        let mut buffer = MixBuffer::new();
        assert_eq!(
            describer.parse_description_with("lighter dull apricot-olive", &mut buffer),
            expected
        );
        assert_eq!(buffer.len(), 2);

        let expected = limit_to_gamut(table, mix(&colors, 0, 2));
        assert_eq!(describer.parse_description("apricot olive"), expected);
    }

    #[cfg(feature = "builtin")]
    #[test]
    fn test_best_match() {
        for space in ColorSpace::all() {
            let describer = Describer::builtin(space);
            let palette = describer.palette();

            for name in ["red", "navy", "white", "sage"] {
                let color = palette.get(name);
                let description = describer.best_match(color, 1);
                assert_eq!(describer.parse_description(&description), color, "{space} {name}");
            }

            let transparent = describer.best_match(PackedColor::TRANSPARENT, 0);
            assert!(!transparent.contains("transparent"));
        }
    }

    #[cfg(feature = "builtin")]
    #[test]
    fn test_best_match_deterministic() {
        let describer = Describer::builtin(ColorSpace::Ipt);
        let color = PackedColor::new(140, 150, 100, 254);
        let mut buffer = MixBuffer::new();

        let description = describer.best_match_with(color, 1, &mut buffer);
        assert_eq!(describer.best_match_with(color, 1, &mut buffer), description);
        assert_eq!(describer.best_match(color, 1), description);

        // Unadjusted palette colors are candidates, too.
        let distance = channel_distance(describer.parse_description(&description), color);
        for (_, candidate) in describer.palette().entries() {
            if !candidate.is_transparent() {
                assert!(distance <= channel_distance(candidate, color));
            }
        }
    }

    #[test]
    fn test_best_match_pairs() {
        let white = PackedColor::new(250, 128, 128, 254);
        let black = PackedColor::new(10, 128, 128, 254);
        let palette = Palette::from_entries([("white", white), ("black", black)]);
        let table =
            GamutTable::from_bytes(vec![40; GamutTable::SIZE]).expect("table has correct size");
        let describer = Describer::new(&palette, &table);

        // Dulling leaves grays unchanged, so the first saturation level wins.
        assert_eq!(describer.best_match(white, 1), "dullmost white");
        assert_eq!(describer.best_match(black, 3), "dullmost black black black");

        // White mixed with black is 130. The hue order puts black before
        // white, and the first color is the least significant digit.
        let gray = PackedColor::new(130, 128, 128, 254);
        assert_eq!(describer.best_match(gray, 2), "dullmost white black");
        assert_eq!(describer.parse_description("dullmost white black"), gray);
        assert_eq!(describer.parse_description("white black"), gray);

        let empty = Palette::default();
        assert_eq!(Describer::new(&empty, &table).best_match(gray, 1), "");
    }

    #[test]
    fn test_best_match_mix_count_limit() {
        let white = PackedColor::new(250, 128, 128, 254);
        let palette = Palette::from_entries([("white", white)]);
        let table =
            GamutTable::from_bytes(vec![40; GamutTable::SIZE]).expect("table has correct size");
        let describer = Describer::new(&palette, &table);

        let expected = format!("dullmost{}", " white".repeat(MAX_MIX_COUNT));
        assert_eq!(describer.best_match(white, usize::MAX), expected);
        assert_eq!(describer.best_match(white, MAX_MIX_COUNT + 1), expected);
        assert_eq!(describer.best_match(white, 0), "dullmost white");
        assert_eq!(describer.parse_description(&expected), white);
    }
}
