//! Layout of the equation markup: plain glyphs, `\frac`, `\sqrt`,
//! `^` / `_` scripts and `bmatrix` blocks.
//!
//! The engine walks the input with a cursor slice and recurses into
//! braced groups. Malformed constructs never fail: the macro token is
//! dropped and scanning carries on with whatever follows it.

use crate::config::LayoutConfig;
use crate::geometry::{matrix_dimensions, matrix_paths};
use crate::glyphs::glyph_path;
use scribe_types::{Bounds, Num, PathInstruction, Point};
use std::borrow::Cow;

const MATRIX_BEGIN: &str = "\\begin{bmatrix}";
const MATRIX_END: &str = "\\end{bmatrix}";
const FRAC: &str = "\\frac";
const SQRT: &str = "\\sqrt";

/// Macro tokens replaced by a single glyph before anything else runs.
const SUBSTITUTIONS: [(&str, &str); 2] = [("\\pm", "±"), ("\\int", "∫")];

const SPACE_ADVANCE: f64 = 0.4;
const GLYPH_ADVANCE: f64 = 0.8;
const FRACTION_SCALE: f64 = 0.8;
const SCRIPT_SCALE: f64 = 0.6;
const RADICAL_WIDTH: f64 = 0.6;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutResult {
    pub paths: Vec<PathInstruction>,
    /// Always a single line tall: `min_y` is the start y and `max_y` is one
    /// glyph size below it, whatever the scripts or fractions did.
    pub bounds: Bounds,
}

/// A `{...}` group split off the front of a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BracedGroup<'a> {
    pub content: &'a str,
    pub remainder: &'a str,
}

/// Splits a leading balanced `{...}` group off `text`.
///
/// Returns `None` when `text` does not start with `{` or the group is
/// never closed.
pub fn extract_braced(text: &str) -> Option<BracedGroup<'_>> {
    if !text.starts_with('{') {
        return None;
    }
    let mut depth = 0usize;
    for (i, ch) in text.char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(BracedGroup {
                        content: &text[1..i],
                        remainder: &text[i + 1..],
                    });
                }
            }
            _ => {}
        }
    }
    None
}

/// Lays out markup with the default [`LayoutConfig`].
pub fn layout(text: &str, x: f64, y: f64, size: f64) -> LayoutResult {
    MarkupLayout::default().layout(text, x, y, size)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MarkupLayout {
    config: LayoutConfig,
}

impl MarkupLayout {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// Lays out `text` with its first glyph's top-left corner at `(x, y)`.
    pub fn layout(&self, text: &str, x: f64, y: f64, size: f64) -> LayoutResult {
        self.layout_at(text, Point::new(x, y), size, 0)
    }

    fn layout_at(&self, text: &str, start: Point, size: f64, depth: usize) -> LayoutResult {
        if depth > self.config.max_depth {
            log::warn!(
                "Markup nested deeper than {} levels, dropping {:?}",
                self.config.max_depth,
                text
            );
            return LayoutResult {
                paths: Vec::new(),
                bounds: Bounds::new(start.x, start.y, start.x, start.y + size),
            };
        }

        let source = substitute_macros(text);
        let mut rest: &str = source.trim();
        let mut paths = Vec::new();
        let mut x = start.x;
        let y = start.y;

        while !rest.is_empty() {
            if let Some(after_begin) = rest.strip_prefix(MATRIX_BEGIN) {
                let Some(end) = after_begin.find(MATRIX_END) else {
                    rest = after_begin;
                    continue;
                };
                let data = parse_matrix(&after_begin[..end]);
                let dims = matrix_dimensions(&data, size);
                let top = y - dims.height / 2.0;
                paths.extend(
                    matrix_paths(&data, Point::new(x, top), size)
                        .into_iter()
                        .map(PathInstruction::stroke),
                );
                x += dims.width + size * 0.5;
                rest = after_begin[end + MATRIX_END.len()..].trim();
                continue;
            }

            if let Some(after) = rest.strip_prefix(FRAC) {
                let Some(numerator) = extract_braced(after) else {
                    rest = after;
                    continue;
                };
                let Some(denominator) = extract_braced(numerator.remainder) else {
                    rest = numerator.remainder;
                    continue;
                };

                let item_size = size * FRACTION_SCALE;
                let origin = Point::default();
                let num_width = self
                    .layout_at(numerator.content, origin, item_size, depth + 1)
                    .bounds
                    .max_x;
                let den_width = self
                    .layout_at(denominator.content, origin, item_size, depth + 1)
                    .bounds
                    .max_x;
                let max_width = num_width.max(den_width);

                let num = self.layout_at(
                    numerator.content,
                    Point::new(x + (max_width - num_width) / 2.0, y - size * 0.7),
                    item_size,
                    depth + 1,
                );
                let den = self.layout_at(
                    denominator.content,
                    Point::new(x + (max_width - den_width) / 2.0, y + size * 0.3),
                    item_size,
                    depth + 1,
                );

                paths.push(PathInstruction::stroke(format!(
                    "M {} {} H {}",
                    Num(x),
                    Num(y + size * 0.1),
                    Num(x + max_width)
                )));
                paths.extend(num.paths);
                paths.extend(den.paths);

                x += max_width + size * 0.2;
                rest = denominator.remainder.trim();
                continue;
            }

            if let Some(after) = rest.strip_prefix(SQRT) {
                let Some(radicand) = extract_braced(after) else {
                    rest = after;
                    continue;
                };

                let radical = glyph_path('√', Point::new(x, y), size);
                if !radical.is_empty() {
                    paths.push(PathInstruction::stroke(radical));
                }
                let content_x = x + size * RADICAL_WIDTH;
                let content =
                    self.layout_at(radicand.content, Point::new(content_x, y), size, depth + 1);
                paths.extend(content.paths);
                paths.push(PathInstruction::stroke(format!(
                    "M {} {} H {}",
                    Num(content_x - size * 0.1),
                    Num(y - size * 0.05),
                    Num(content.bounds.max_x)
                )));

                x = content.bounds.max_x + size * 0.1;
                rest = radicand.remainder.trim();
                continue;
            }

            let mut chars = rest.chars();
            let Some(ch) = chars.next() else { break };
            let after = chars.as_str();

            let script_offset = match ch {
                '_' => Some(0.3),
                '^' => Some(-0.5),
                _ => None,
            };
            if let Some(offset) = script_offset {
                if let Some((content, remainder)) = script_operand(after) {
                    let script = self.layout_at(
                        content,
                        Point::new(x, y + size * offset),
                        size * SCRIPT_SCALE,
                        depth + 1,
                    );
                    paths.extend(script.paths);
                    x = script.bounds.max_x;
                    rest = remainder.trim();
                    continue;
                }
            }

            if !ch.is_whitespace() {
                let d = glyph_path(ch, Point::new(x, y), size);
                if !d.is_empty() {
                    paths.push(PathInstruction::stroke(d));
                }
            }
            x += size * if ch == ' ' { SPACE_ADVANCE } else { GLYPH_ADVANCE };
            rest = after;
        }

        LayoutResult {
            paths,
            bounds: Bounds::new(start.x, start.y, x, start.y + size),
        }
    }
}

fn substitute_macros(text: &str) -> Cow<'_, str> {
    let mut out = Cow::Borrowed(text);
    for (token, glyph) in SUBSTITUTIONS {
        if out.contains(token) {
            out = Cow::Owned(out.replace(token, glyph));
        }
    }
    out
}

/// The operand of `^` / `_`: a braced group, or else the single next
/// character. `None` when there is nothing usable to raise or lower.
fn script_operand(after: &str) -> Option<(&str, &str)> {
    let (content, remainder) = if after.starts_with('{') {
        let group = extract_braced(after)?;
        (group.content, group.remainder)
    } else {
        let width = after.chars().next()?.len_utf8();
        after.split_at(width)
    };
    (!content.is_empty()).then_some((content, remainder))
}

fn parse_matrix(body: &str) -> Vec<Vec<&str>> {
    body.trim()
        .split("\\\\")
        .map(|row| row.split('&').map(str::trim).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_valid_path;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn plain_text_advances_per_character() {
        let result = layout("a b+c", 5.0, 7.0, 10.0);
        assert_eq!(result.paths.len(), 4);
        assert_close(result.bounds.max_x, 5.0 + 8.0 * 4.0 + 4.0);
        assert_eq!(result.bounds.min_x, 5.0);
        assert_eq!(result.bounds.min_y, 7.0);
        assert_eq!(result.bounds.max_y, 17.0);
        assert_eq!(result.paths[0].d, glyph_path('a', Point::new(5.0, 7.0), 10.0));
        assert_eq!(result.paths[1].d, glyph_path('b', Point::new(17.0, 7.0), 10.0));
        for path in &result.paths {
            assert_valid_path(&path.d);
        }
    }

    #[test]
    fn leading_and_trailing_whitespace_is_trimmed() {
        let result = layout("  x  ", 0.0, 0.0, 10.0);
        assert_eq!(result.paths.len(), 1);
        assert_close(result.bounds.max_x, 8.0);
    }

    #[test]
    fn empty_markup_yields_nothing() {
        let result = layout("", 3.0, 4.0, 10.0);
        assert!(result.paths.is_empty());
        assert_eq!(result.bounds, Bounds::new(3.0, 4.0, 3.0, 14.0));
    }

    #[test]
    fn fraction_draws_bar_then_numerator_then_denominator() {
        let result = layout("\\frac{a}{b}", 0.0, 0.0, 10.0);
        assert_eq!(result.paths.len(), 3);
        // operands are 0.8 * 10 tall and each one glyph wide (6.4)
        assert_eq!(result.paths[0].d, "M 0 1 H 6.4");
        assert_eq!(result.paths[1].d, glyph_path('a', Point::new(0.0, -7.0), 8.0));
        assert_eq!(result.paths[2].d, glyph_path('b', Point::new(0.0, 3.0), 8.0));
        assert_close(result.bounds.max_x, 6.4 + 2.0);
    }

    #[test]
    fn fraction_centers_the_narrower_operand() {
        let result = layout("\\frac{ab}{c}", 0.0, 0.0, 10.0);
        // numerator 12.8 wide, denominator 6.4 wide
        assert_eq!(result.paths[0].d, "M 0 1 H 12.8");
        let den = result.paths.last().map(|p| p.d.clone());
        assert_eq!(den, Some(glyph_path('c', Point::new(3.2, 3.0), 8.0)));
    }

    #[test]
    fn unmatched_fraction_brace_is_not_an_error() {
        let result = layout("\\frac{a}{", 0.0, 0.0, 10.0);
        // "\frac" and "{a}" are dropped, the dangling "{" is drawn as text
        assert!(!result.paths.iter().any(|p| p.d.contains(" H ")));
        assert_eq!(result.paths.len(), 1);
        assert_eq!(result.paths[0].d, glyph_path('{', Point::default(), 10.0));
    }

    #[test]
    fn fraction_without_any_group_resumes_after_the_macro() {
        let result = layout("\\frac x", 0.0, 0.0, 10.0);
        assert_eq!(result.paths.len(), 1);
        // the untrimmed space after the macro still advances the cursor
        assert_eq!(result.paths[0].d, glyph_path('x', Point::new(4.0, 0.0), 10.0));
    }

    #[test]
    fn square_root_draws_radical_content_and_roof() {
        let result = layout("\\sqrt{x}", 0.0, 0.0, 10.0);
        assert_eq!(result.paths.len(), 3);
        assert_eq!(result.paths[0].d, glyph_path('√', Point::default(), 10.0));
        assert_eq!(result.paths[1].d, glyph_path('x', Point::new(6.0, 0.0), 10.0));
        assert_eq!(result.paths[2].d, "M 5 -0.5 H 14");
        assert_close(result.bounds.max_x, 15.0);
    }

    #[test]
    fn scripts_shrink_and_shift() {
        let sup = layout("x^2", 0.0, 0.0, 10.0);
        assert_eq!(sup.paths.len(), 2);
        assert_eq!(sup.paths[1].d, glyph_path('2', Point::new(8.0, -5.0), 6.0));
        assert_close(sup.bounds.max_x, 8.0 + 4.8);

        let sub = layout("a_{12}", 0.0, 0.0, 10.0);
        assert_eq!(sub.paths.len(), 3);
        assert_eq!(sub.paths[1].d, glyph_path('1', Point::new(8.0, 3.0), 6.0));
        assert_close(sub.bounds.max_x, 8.0 + 9.6);
    }

    #[test]
    fn dangling_script_marker_is_drawn_literally() {
        let result = layout("x^", 0.0, 0.0, 10.0);
        assert_eq!(result.paths.len(), 2);
        assert_eq!(result.paths[1].d, glyph_path('^', Point::new(8.0, 0.0), 10.0));
    }

    #[test]
    fn macro_substitutions_become_single_glyphs() {
        let result = layout("a\\pm b", 0.0, 0.0, 10.0);
        assert_eq!(result.paths[1].d, glyph_path('±', Point::new(8.0, 0.0), 10.0));
        assert_eq!(result.paths.len(), 3);
    }

    #[test]
    fn matrix_block_is_centered_on_the_line() {
        let result = layout("\\begin{bmatrix} 1 & 0 \\\\ 0 & 1 \\end{bmatrix}", 0.0, 0.0, 10.0);
        // two brackets plus four one-character cells
        assert_eq!(result.paths.len(), 6);
        let dims = matrix_dimensions(&[vec!["1", "0"], vec!["0", "1"]], 10.0);
        assert!(result.paths[0].d.starts_with(&format!("M 3 {}", Num(-dims.height / 2.0))));
        assert_close(result.bounds.max_x, dims.width + 5.0);
    }

    #[test]
    fn unterminated_matrix_drops_only_the_opening_token() {
        let result = layout("\\begin{bmatrix}1", 0.0, 0.0, 10.0);
        assert_eq!(result.paths.len(), 1);
        assert_eq!(result.paths[0].d, glyph_path('1', Point::default(), 10.0));
    }

    #[test]
    fn braced_extraction_handles_nesting() {
        let group = extract_braced("{a{b}c}rest");
        assert_eq!(
            group,
            Some(BracedGroup {
                content: "a{b}c",
                remainder: "rest"
            })
        );
        assert_eq!(extract_braced("x{a}"), None);
        assert_eq!(extract_braced("{a{b}"), None);
    }

    #[test]
    fn depth_guard_drops_deep_groups() {
        let engine = MarkupLayout::new(LayoutConfig::default().with_max_depth(1));
        let result = engine.layout("\\sqrt{\\sqrt{\\sqrt{x}}}", 0.0, 0.0, 10.0);
        // the outer two radicals and roofs survive, the innermost group does not
        assert_eq!(result.paths.len(), 4);
        assert!(result.paths.iter().all(|p| !p.d.is_empty()));
    }

    #[test]
    fn nested_markup_always_produces_valid_paths() {
        let result = layout("\\frac{x^2 + 1}{\\sqrt{y_{n}}} = \\int f", 10.0, 40.0, 20.0);
        assert!(!result.paths.is_empty());
        for path in &result.paths {
            assert_valid_path(&path.d);
        }
    }
}
