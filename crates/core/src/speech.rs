//! Markup to narration text.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static FRACTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\frac\{([^}]+)\}\{([^}]+)\}").expect("BUG: invalid FRACTION_RE regex literal")
});

static SQRT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\sqrt\{([^}]+)\}").expect("BUG: invalid SQRT_RE regex literal")
});

/// Rewrites equation markup into something a speech engine can read out.
///
/// Only the simple, unnested forms are spelled out; any other macro just
/// loses its backslash.
pub fn speakable_text(text: &str) -> String {
    let text = FRACTION_RE.replace_all(text, "$1 divided by $2");
    let text = text.replace('^', " to the power of ").replace('_', " sub ");
    let text: Cow<'_, str> = SQRT_RE.replace_all(&text, "the square root of $1");
    text.replace('\\', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractions_and_roots_are_spelled_out() {
        assert_eq!(speakable_text("\\frac{a}{b}"), "a divided by b");
        assert_eq!(speakable_text("\\sqrt{x}"), "the square root of x");
    }

    #[test]
    fn scripts_become_words() {
        assert_eq!(speakable_text("x^2"), "x to the power of 2");
        assert_eq!(speakable_text("a_n"), "a sub n");
    }

    #[test]
    fn leftover_backslashes_are_dropped() {
        assert_eq!(speakable_text("\\alpha + \\beta"), "alpha + beta");
        assert_eq!(speakable_text("plain words"), "plain words");
    }

    #[test]
    fn substitutions_apply_in_order() {
        // the fraction pass runs before the script passes
        assert_eq!(
            speakable_text("\\frac{x^2}{2}"),
            "x to the power of 2 divided by 2"
        );
        // braces that are not part of a recognised macro survive
        assert_eq!(
            speakable_text("e^{i\\pi}"),
            "e to the power of {ipi}"
        );
    }
}
