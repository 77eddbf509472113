//! Character to stroke-path dispatch.
//!
//! Every character maps to a path. Characters outside the table get a boxed
//! "X" so a missing glyph is obvious on screen instead of silently blank.

mod table;

use crate::path::PathData;
use once_cell::sync::Lazy;
use scribe_types::Point;
use std::collections::HashMap;

/// One drawing step of a glyph template, in em units relative to the
/// glyph origin. Relative steps (`Rel*`, `Dot`) are deltas scaled by size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Op {
    M(f64, f64),
    L(f64, f64),
    H(f64),
    V(f64),
    C(f64, f64, f64, f64, f64, f64),
    S(f64, f64, f64, f64),
    A { r: f64, large: bool, sweep: bool, x: f64, y: f64 },
    RelH(f64),
    RelV(f64),
    RelA { r: f64, large: bool, sweep: bool, dx: f64, dy: f64 },
    /// A filled dot of radius `r` at the current point.
    Dot(f64),
    Z,
}

impl Op {
    fn write(self, path: &mut PathData, origin: Point, size: f64) {
        let at = |fx: f64, fy: f64| (origin.x + fx * size, origin.y + fy * size);
        match self {
            Op::M(fx, fy) => {
                let (x, y) = at(fx, fy);
                path.move_to(x, y);
            }
            Op::L(fx, fy) => {
                let (x, y) = at(fx, fy);
                path.line_to(x, y);
            }
            Op::H(fx) => {
                path.horizontal_to(origin.x + fx * size);
            }
            Op::V(fy) => {
                path.vertical_to(origin.y + fy * size);
            }
            Op::C(x1, y1, x2, y2, x, y) => {
                path.cubic_to(at(x1, y1), at(x2, y2), at(x, y));
            }
            Op::S(x2, y2, x, y) => {
                path.smooth_to(at(x2, y2), at(x, y));
            }
            Op::A { r, large, sweep, x, y } => {
                path.arc_to(r * size, large, sweep, at(x, y));
            }
            Op::RelH(dx) => {
                path.relative_horizontal(dx * size);
            }
            Op::RelV(dy) => {
                path.relative_vertical(dy * size);
            }
            Op::RelA { r, large, sweep, dx, dy } => {
                path.relative_arc(r * size, large, sweep, (dx * size, dy * size));
            }
            Op::Dot(r) => {
                // A near-full circle back to (almost) the same point; the
                // fixed 0.01 nudge keeps the arc's endpoints distinct.
                path.relative_arc(r * size, true, false, (0.01, 0.0)).close();
            }
            Op::Z => {
                path.close();
            }
        }
    }
}

static TABLE: Lazy<HashMap<char, &'static [Op]>> =
    Lazy::new(|| table::GLYPHS.iter().copied().collect());

/// Path data for `ch` drawn with its top-left at `origin`, `size` units tall.
///
/// The space character yields an empty string.
pub fn glyph_path(ch: char, origin: Point, size: f64) -> String {
    match TABLE.get(&ch) {
        Some(ops) => {
            let mut path = PathData::new();
            for op in ops.iter() {
                op.write(&mut path, origin, size);
            }
            path.finish()
        }
        None => {
            log::debug!("No glyph for {:?} (U+{:04X}), drawing fallback box", ch, ch as u32);
            fallback_path(origin, size)
        }
    }
}

/// The boxed "X" drawn for characters outside the table.
pub fn fallback_path(origin: Point, size: f64) -> String {
    let Point { x, y } = origin;
    let mut path = PathData::new();
    path.move_to(x, y)
        .relative_horizontal(size)
        .relative_vertical(size)
        .relative_horizontal(-size)
        .close()
        .move_to(x, y)
        .line_to(x + size, y + size)
        .move_to(x + size, y)
        .line_to(x, y + size);
    path.finish()
}

pub fn is_supported(ch: char) -> bool {
    TABLE.contains_key(&ch)
}

/// Every character with a dedicated glyph, in table order.
pub fn supported_chars() -> impl Iterator<Item = char> {
    table::GLYPHS.iter().map(|(ch, _)| *ch)
}
