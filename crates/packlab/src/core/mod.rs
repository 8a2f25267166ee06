mod algebra;
mod conversion;
mod equality;
mod gamut;
mod packed;
mod space;
mod string;
mod table;
pub(crate) mod trig;

// algebra
pub use algebra::{mix, Axis};
pub(crate) use algebra::{blot, darken, fade, lerp, lighten, lower_pole, raise_pole};

// conversion
pub(crate) use conversion::{from_rgba8888, to_rgba8888};
pub use conversion::{to_device, to_perceptual};

// equality
#[cfg(test)]
pub(crate) use equality::assert_close_channels;
pub(crate) use equality::channel_distance;

// gamut
pub use gamut::chroma_limit;
pub(crate) use gamut::{
    dullen, enrich, from_hcl, hue, in_gamut, limit_to_gamut, maximize_saturation,
    offset_distance, saturation, GRAY_DISTANCE,
};

// packed
pub use packed::PackedColor;

// space
pub use space::ColorSpace;

// string
pub(crate) use string::{parse_palette, words};

// table
pub use table::GamutTable;
