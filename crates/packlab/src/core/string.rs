use crate::error::PaletteError;

/// Parse a color in hashed hexadecimal format. If successful, this function
/// returns the color as a `0xRRGGBBAA` integer. Six-digit colors are opaque.
fn parse_hashed(s: &str, line: usize) -> Result<u32, PaletteError> {
    let digits = s.strip_prefix('#').ok_or_else(|| PaletteError::MissingHash {
        line,
        color: s.to_string(),
    })?;

    if digits.len() != 6 && digits.len() != 8 {
        return Err(PaletteError::BadLength {
            line,
            color: s.to_string(),
        });
    } else if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(PaletteError::BadDigit {
            line,
            color: s.to_string(),
        });
    }

    // Only hexadecimal digits remain, so conversion succeeds.
    let value = u32::from_str_radix(digits, 16).map_err(|_| PaletteError::BadDigit {
        line,
        color: s.to_string(),
    })?;

    Ok(if digits.len() == 6 {
        value << 8 | 0xff
    } else {
        value
    })
}

/// Parse a palette definition.
///
/// Each line holds a color name followed by a hashed hexadecimal color.
/// Leading and trailing whitespace is ignored, as are blank lines and lines
/// starting with `#`. Names are lowercased.
pub(crate) fn parse_palette(text: &str) -> Result<Vec<(String, u32)>, PaletteError> {
    let mut entries = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut parts = line.split_whitespace();
        let Some(name) = parts.next() else {
            continue;
        };
        let color = parts.next().ok_or_else(|| PaletteError::MissingColor {
            line: line_number,
            name: name.to_string(),
        })?;
        if let Some(text) = parts.next() {
            return Err(PaletteError::TrailingText {
                line: line_number,
                text: text.to_string(),
            });
        }

        entries.push((name.to_ascii_lowercase(), parse_hashed(color, line_number)?));
    }

    Ok(entries)
}

// --------------------------------------------------------------------------------------------------------------------

/// Split a description into lowercase words.
///
/// Words are maximal runs of ASCII letters. Everything else separates words.
pub(crate) fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_ascii_alphabetic())
        .filter(|word| !word.is_empty())
        .map(str::to_ascii_lowercase)
}

// --------------------------------------------------------------------------------------------------------------------
