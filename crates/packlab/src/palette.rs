//! Named color palettes.
//!
//! A [`Palette`] maps lowercase names to packed colors, remembering the order
//! in which they were added. It also caches orderings by hue, lightness, and
//! name, since the description engine and its callers need them repeatedly.

use std::cmp::Ordering;
use std::collections::HashMap;

#[cfg(feature = "builtin")]
use std::sync::OnceLock;

use crate::core::{hue, offset_distance, parse_palette, GRAY_DISTANCE};
use crate::error::PaletteError;
use crate::{ColorSpace, PackedColor};

#[cfg(feature = "builtin")]
const PALETTE_TEXT: &str = include_str!("../data/palette.txt");

/// A palette of named colors.
///
/// Lookups by name are exact and case-sensitive, with names stored in
/// lowercase. Looking up an unknown name with [`Palette::get`] yields the
/// transparent color instead of failing. A palette is immutable once created
/// and can be shared freely between threads.
#[derive(Clone, Debug, Default)]
pub struct Palette {
    entries: Vec<(String, PackedColor)>,
    index: HashMap<String, usize>,
    by_hue: Vec<usize>,
    by_lightness: Vec<usize>,
    by_name: Vec<usize>,
}

impl Palette {
    /// Create a new palette from the named colors.
    ///
    /// Names are converted to lowercase. If a name occurs more than once, the
    /// later color replaces the earlier one, which keeps its position.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, PackedColor)>,
        S: AsRef<str>,
    {
        let mut palette = Self::default();
        for (name, color) in entries {
            let name = name.as_ref().to_lowercase();
            if let Some(&position) = palette.index.get(&name) {
                palette.entries[position].1 = color;
            } else {
                palette.index.insert(name.clone(), palette.entries.len());
                palette.entries.push((name, color));
            }
        }

        palette.derive_orderings();
        palette
    }

    /// Parse a palette from its textual definition, converting colors into
    /// the given color space.
    ///
    /// Each non-blank line that does not start with `#` contains a name
    /// followed by a `#rrggbbaa` or `#rrggbb` hexadecimal color.
    pub fn parse(space: ColorSpace, text: &str) -> Result<Self, PaletteError> {
        let entries = parse_palette(text)?;
        Ok(Self::from_entries(entries.into_iter().map(|(name, rgba)| {
            (name, PackedColor::from_rgba8888(space, rgba))
        })))
    }

    /// Get the builtin palette for the color space.
    ///
    /// The palette is parsed on first use and cached for the lifetime of the
    /// process.
    #[cfg(feature = "builtin")]
    pub fn builtin(space: ColorSpace) -> &'static Palette {
        static OKLAB: OnceLock<Palette> = OnceLock::new();
        static IPT: OnceLock<Palette> = OnceLock::new();

        let cell = match space {
            ColorSpace::Oklab => &OKLAB,
            ColorSpace::Ipt => &IPT,
        };

        cell.get_or_init(|| {
            let palette = Self::parse(space, PALETTE_TEXT).expect("builtin palette is well-formed");
            log::debug!("loaded builtin {} palette with {} colors", space, palette.len());
            palette
        })
    }

    fn derive_orderings(&mut self) {
        let entries = &self.entries;
        let count = entries.len();

        let mut by_name: Vec<usize> = (0..count).collect();
        by_name.sort_by(|&i, &j| entries[i].0.cmp(&entries[j].0));

        let mut by_lightness: Vec<usize> = (0..count).collect();
        by_lightness.sort_by_key(|&i| entries[i].1.lightness_byte());

        let mut by_hue: Vec<usize> = (0..count).collect();
        by_hue.sort_by(|&i, &j| {
            let (c1, c2) = (entries[i].1, entries[j].1);
            let rank = hue_rank(c1);
            rank.cmp(&hue_rank(c2)).then_with(|| match rank {
                0 => Ordering::Equal,
                1 => c1.lightness_byte().cmp(&c2.lightness_byte()),
                _ => hue(c1).total_cmp(&hue(c2)),
            })
        });

        self.by_name = by_name;
        self.by_lightness = by_lightness;
        self.by_hue = by_hue;
    }

    /// Get the number of colors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Determine whether this palette is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the color with the given name.
    pub fn lookup(&self, name: &str) -> Option<PackedColor> {
        self.index.get(name).map(|&position| self.entries[position].1)
    }

    /// Get the color with the given name, or the transparent color if there
    /// is no such color.
    pub fn get(&self, name: &str) -> PackedColor {
        self.lookup(name).unwrap_or(PackedColor::TRANSPARENT)
    }

    /// Get the named colors in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, PackedColor)> + '_ {
        self.entries.iter().map(|(name, color)| (name.as_str(), *color))
    }

    /// Get the names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Get the names in alphabetical order.
    pub fn names_by_name(&self) -> impl Iterator<Item = &str> + '_ {
        self.ordered(&self.by_name).map(|(name, _)| name)
    }

    /// Get the names in order of increasing lightness.
    pub fn names_by_lightness(&self) -> impl Iterator<Item = &str> + '_ {
        self.ordered(&self.by_lightness).map(|(name, _)| name)
    }

    /// Get the names in hue order.
    ///
    /// Transparent colors come first, then grays by increasing lightness, and
    /// then all other colors by increasing hue.
    pub fn names_by_hue(&self) -> impl Iterator<Item = &str> + '_ {
        self.ordered(&self.by_hue).map(|(name, _)| name)
    }

    /// Get the named colors in hue order.
    pub fn entries_by_hue(&self) -> impl Iterator<Item = (&str, PackedColor)> + '_ {
        self.ordered(&self.by_hue)
    }

    fn ordered<'a>(
        &'a self,
        order: &'a [usize],
    ) -> impl Iterator<Item = (&'a str, PackedColor)> + 'a {
        order.iter().map(|&position| {
            let (name, color) = &self.entries[position];
            (name.as_str(), *color)
        })
    }
}

/// Rank colors for hue order: transparent, gray, chromatic.
fn hue_rank(color: PackedColor) -> u8 {
    if color.alpha_byte() == 0 {
        0
    } else if offset_distance(color) < GRAY_DISTANCE {
        1
    } else {
        2
    }
}

// --------------------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    const TEXT: &str = "\
# A small palette
transparent #00000000
red #ff0000ff
white #ffffff
black #000000ff
Blue #0000ffff
yellow #ffff00ff
";

    #[test]
    fn test_parse() -> Result<(), PaletteError> {
        let palette = Palette::parse(ColorSpace::Oklab, TEXT)?;
        assert_eq!(palette.len(), 6);
        assert!(!palette.is_empty());
        assert_eq!(
            palette.names().collect::<Vec<_>>(),
            ["transparent", "red", "white", "black", "blue", "yellow"]
        );
        assert_eq!(palette.get("transparent"), PackedColor::TRANSPARENT);
        let [l, a, b, alpha] = palette.get("white").to_bytes();
        assert_eq!((l, alpha), (255, 254));
        assert!(a.abs_diff(128) <= 1 && b.abs_diff(128) <= 1);
        assert_eq!(palette.lookup("Blue"), None);
        assert_eq!(palette.get("mauve"), PackedColor::TRANSPARENT);

        let error = Palette::parse(ColorSpace::Oklab, "red #ff00\n").unwrap_err();
        assert_eq!(error.line(), 1);
        Ok(())
    }

    #[test]
    fn test_orderings() -> Result<(), PaletteError> {
        let palette = Palette::parse(ColorSpace::Oklab, TEXT)?;
        assert_eq!(
            palette.names_by_name().collect::<Vec<_>>(),
            ["black", "blue", "red", "transparent", "white", "yellow"]
        );
        assert_eq!(palette.names_by_lightness().next(), Some("transparent"));
        let position = |name: &str| palette.names_by_lightness().position(|n| n == name);
        assert!(position("black") < position("red"));

        // Oklab hues: red ≈ 0.08, yellow ≈ 0.31, blue ≈ 0.73
        assert_eq!(
            palette.names_by_hue().collect::<Vec<_>>(),
            ["transparent", "black", "white", "red", "yellow", "blue"]
        );
        Ok(())
    }

    #[test]
    fn test_duplicates() {
        let red = PackedColor::new(180, 160, 140, 254);
        let blue = PackedColor::new(140, 120, 90, 254);
        let palette = Palette::from_entries([("red", red), ("blue", blue), ("RED", blue)]);
        assert_eq!(palette.len(), 2);
        assert_eq!(palette.get("red"), blue);
        assert_eq!(palette.names().collect::<Vec<_>>(), ["red", "blue"]);
    }

    #[cfg(feature = "builtin")]
    #[test]
    fn test_builtin() {
        for space in ColorSpace::all() {
            let palette = Palette::builtin(space);
            assert_eq!(palette.len(), 50);
            assert_eq!(palette.get("transparent"), PackedColor::TRANSPARENT);
            assert!(palette.get("red").is_opaque());
            assert_eq!(palette.names_by_hue().next(), Some("transparent"));
            assert!(std::ptr::eq(palette, Palette::builtin(space)));
        }
    }
}
