//! Stroke-path layout for scribe: the glyph table, the markup engine and
//! the closed-form shape helpers the compiler draws with.

pub mod config;
pub mod geometry;
pub mod glyphs;
pub mod markup;
pub mod path;

#[cfg(test)]
mod test_utils;

pub use self::config::LayoutConfig;
pub use self::geometry::{
    MatrixDimensions, arc_path, circle_path, line_path, matrix_dimensions, matrix_paths,
    polar_to_cartesian,
};
pub use self::glyphs::{fallback_path, glyph_path, is_supported, supported_chars};
pub use self::markup::{BracedGroup, LayoutResult, MarkupLayout, extract_braced, layout};
pub use self::path::PathData;
