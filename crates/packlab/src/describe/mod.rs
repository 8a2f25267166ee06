//! Plain-English color descriptions.
//!
//! The [`Describer`] parses descriptions such as `lighter dull apricot olive`
//! into packed colors and searches for the description best matching a
//! packed color. Adjectives are length-coded: `light`, `lighter`, `lightest`,
//! and `lightmost` are four increasingly strong levels of the same
//! adjustment.

mod describer;
mod lexicon;

pub use describer::{Describer, MixBuffer, MAX_MIX_COUNT};
