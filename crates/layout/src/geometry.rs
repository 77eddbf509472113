//! Closed-form paths for circles, arcs, lines and bracketed matrices.

use crate::glyphs::glyph_path;
use scribe_types::{Num, Point};

/// Horizontal advance of one matrix cell character, in cell sizes.
const MATRIX_CHAR_ADVANCE: f64 = 0.8;
const MATRIX_ROW_GAP: f64 = 0.3;
const MATRIX_BRACKET_WIDTH: f64 = 0.2;
const MATRIX_BRACKET_PADDING: f64 = 0.4;
const MATRIX_COLUMN_PADDING: f64 = 0.5;
const MATRIX_SERIF: f64 = 0.3;

pub fn line_path(x1: f64, y1: f64, x2: f64, y2: f64) -> String {
    format!("M {} {} L {} {}", Num(x1), Num(y1), Num(x2), Num(y2))
}

/// A full circle as two half-circle arcs starting and ending at `(cx - r, cy)`.
pub fn circle_path(cx: f64, cy: f64, r: f64) -> String {
    format!(
        "M {},{} a {},{} 0 1,0 {},0 a {},{} 0 1,0 {},0",
        Num(cx - r),
        Num(cy),
        Num(r),
        Num(r),
        Num(r * 2.0),
        Num(r),
        Num(r),
        Num(-(r * 2.0))
    )
}

/// Point on a circle for a clock-style angle: 0° points up, positive
/// angles turn clockwise.
pub fn polar_to_cartesian(center: Point, radius: f64, angle_degrees: f64) -> Point {
    let radians = (angle_degrees - 90.0).to_radians();
    Point::new(
        center.x + radius * radians.cos(),
        center.y + radius * radians.sin(),
    )
}

/// Arc from `start_angle` to `end_angle` (degrees, see [`polar_to_cartesian`]).
///
/// The path runs from the end angle back to the start angle with the sweep
/// flag fixed at 0; the large-arc flag is set when the span exceeds 180°.
pub fn arc_path(cx: f64, cy: f64, r: f64, start_angle: f64, end_angle: f64) -> String {
    let center = Point::new(cx, cy);
    let start = polar_to_cartesian(center, r, end_angle);
    let end = polar_to_cartesian(center, r, start_angle);
    let large_arc = if end_angle - start_angle <= 180.0 { "0" } else { "1" };

    format!(
        "M {} {} A {} {} 0 {} 0 {} {}",
        Num(start.x),
        Num(start.y),
        Num(r),
        Num(r),
        large_arc,
        Num(end.x),
        Num(end.y)
    )
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MatrixDimensions {
    pub width: f64,
    pub height: f64,
}

/// Column widths estimated from the longest cell (in characters) of each
/// column, never narrower than one character.
fn column_widths<S: AsRef<str>>(data: &[Vec<S>], cell_size: f64) -> Vec<f64> {
    let columns = data.iter().map(|row| row.len()).max().unwrap_or(0);
    (0..columns)
        .map(|column| {
            let longest = data
                .iter()
                .map(|row| row.get(column).map_or(0, |cell| cell.as_ref().chars().count()))
                .max()
                .unwrap_or(0)
                .max(1);
            longest as f64 * cell_size * MATRIX_CHAR_ADVANCE
        })
        .collect()
}

pub fn matrix_dimensions<S: AsRef<str>>(data: &[Vec<S>], cell_size: f64) -> MatrixDimensions {
    if data.is_empty() {
        return MatrixDimensions::default();
    }
    let rows = data.len();
    let widths = column_widths(data, cell_size);

    let mut height = rows as f64 * cell_size;
    if rows > 1 {
        height += (rows - 1) as f64 * (cell_size * MATRIX_ROW_GAP);
    }

    let mut content_width: f64 = widths.iter().sum();
    if widths.len() > 1 {
        content_width += (widths.len() - 1) as f64 * (cell_size * MATRIX_COLUMN_PADDING);
    }
    let bracket_padding = cell_size * MATRIX_BRACKET_PADDING;
    let width =
        bracket_padding + content_width + bracket_padding + cell_size * MATRIX_BRACKET_WIDTH;

    MatrixDimensions { width, height }
}

/// Bracket and cell strokes for a matrix whose top-left corner is `origin`.
///
/// The left and right brackets come first, then each cell's glyphs row by
/// row. Blank glyphs (spaces) are skipped.
pub fn matrix_paths<S: AsRef<str>>(data: &[Vec<S>], origin: Point, cell_size: f64) -> Vec<String> {
    if data.is_empty() {
        return Vec::new();
    }
    let MatrixDimensions { width, height } = matrix_dimensions(data, cell_size);
    let serif = cell_size * MATRIX_SERIF;
    let bottom = origin.y + height;

    let mut paths = Vec::new();
    let left = origin.x;
    paths.push(format!(
        "M {} {} L {} {} L {} {} L {} {}",
        Num(left + serif),
        Num(origin.y),
        Num(left),
        Num(origin.y),
        Num(left),
        Num(bottom),
        Num(left + serif),
        Num(bottom)
    ));
    let right = origin.x + width - serif;
    paths.push(format!(
        "M {} {} L {} {} L {} {} L {} {}",
        Num(right - serif),
        Num(origin.y),
        Num(right),
        Num(origin.y),
        Num(right),
        Num(bottom),
        Num(right - serif),
        Num(bottom)
    ));

    let widths = column_widths(data, cell_size);
    let row_start_x = left + serif + cell_size * MATRIX_BRACKET_PADDING;
    let mut row_y = origin.y + cell_size * 0.5;
    for row in data {
        let mut cell_x = row_start_x;
        for (column, cell) in row.iter().enumerate() {
            let mut glyph_x = cell_x;
            for ch in cell.as_ref().chars() {
                let d = glyph_path(ch, Point::new(glyph_x, row_y - cell_size * 0.5), cell_size);
                if !d.is_empty() {
                    paths.push(d);
                }
                glyph_x += cell_size * MATRIX_CHAR_ADVANCE;
            }
            cell_x += widths[column] + cell_size * MATRIX_COLUMN_PADDING;
        }
        row_y += cell_size * 1.3;
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_valid_path;

    fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect()
    }

    #[test]
    fn circle_is_two_closing_half_arcs() {
        let d = circle_path(0.0, 0.0, 10.0);
        assert_eq!(d, "M -10,0 a 10,10 0 1,0 20,0 a 10,10 0 1,0 -20,0");
        assert_valid_path(&d);
        // The relative deltas cancel out, so the path ends where it began.
    }

    #[test]
    fn negative_radius_still_formats_cleanly() {
        let d = circle_path(0.0, 0.0, -5.0);
        assert_eq!(d, "M 5,0 a -5,-5 0 1,0 -10,0 a -5,-5 0 1,0 10,0");
    }

    #[test]
    fn arc_large_flag_follows_span() {
        let small = arc_path(50.0, 50.0, 20.0, 0.0, 90.0);
        let large = arc_path(50.0, 50.0, 20.0, 0.0, 200.0);
        assert!(small.contains(" A 20 20 0 0 0 "), "{small}");
        assert!(large.contains(" A 20 20 0 1 0 "), "{large}");
        assert_valid_path(&small);
        assert_valid_path(&large);
    }

    #[test]
    fn arc_runs_from_end_angle_to_start_angle() {
        // 90° is three o'clock, 0° is twelve o'clock.
        let d = arc_path(0.0, 0.0, 10.0, 0.0, 90.0);
        let numbers: Vec<f64> = d
            .split_whitespace()
            .filter_map(|t| t.parse().ok())
            .collect();
        let (sx, sy) = (numbers[0], numbers[1]);
        let (ex, ey) = (numbers[numbers.len() - 2], numbers[numbers.len() - 1]);
        assert!((sx - 10.0).abs() < 1e-9 && sy.abs() < 1e-9);
        assert!(ex.abs() < 1e-9 && (ey + 10.0).abs() < 1e-9);
    }

    #[test]
    fn matrix_dimensions_use_character_count_heuristic() {
        let data = grid(&[&["1", "20"], &["300", "4"]]);
        let dims = matrix_dimensions(&data, 10.0);
        // columns: 3 chars and 2 chars => 24 + 16, one column gap of 5
        let content = 24.0 + 16.0 + 5.0;
        assert!((dims.width - (4.0 + content + 4.0 + 2.0)).abs() < 1e-9);
        assert!((dims.height - (20.0 + 3.0)).abs() < 1e-9);
    }

    #[test]
    fn empty_matrix_has_no_size_and_no_paths() {
        let data: Vec<Vec<String>> = Vec::new();
        assert_eq!(matrix_dimensions(&data, 10.0), MatrixDimensions::default());
        assert!(matrix_paths(&data, Point::default(), 10.0).is_empty());
    }

    #[test]
    fn matrix_of_empty_cells_is_one_character_wide() {
        let data = grid(&[&[""]]);
        let dims = matrix_dimensions(&data, 10.0);
        assert!((dims.width - (4.0 + 8.0 + 4.0 + 2.0)).abs() < 1e-9);
        assert_eq!(matrix_paths(&data, Point::default(), 10.0).len(), 2);
    }

    #[test]
    fn matrix_paths_emit_brackets_then_cells() {
        let data = grid(&[&["a", "b"], &["c", "d"]]);
        let paths = matrix_paths(&data, Point::new(0.0, 0.0), 10.0);
        assert_eq!(paths.len(), 2 + 4);
        assert!(paths[0].starts_with("M 3 0 L 0 0 L 0 23"));
        for d in &paths {
            assert_valid_path(d);
        }
        // first cell sits after the serif and bracket padding
        assert_eq!(paths[2], glyph_path('a', Point::new(7.0, 0.0), 10.0));
        // second row is 1.3 cells lower
        assert_eq!(paths[4], glyph_path('c', Point::new(7.0, 13.0), 10.0));
    }
}
