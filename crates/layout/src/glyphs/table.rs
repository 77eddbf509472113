//! Glyph templates on a unit em square.
//!
//! Coordinates are fractions of the glyph size, measured from the glyph
//! origin (top-left of the cap height). Baseline sits at `1.0`, x-height
//! at `0.45`; descenders reach `1.2`.

use super::Op;
use super::Op::*;

#[rustfmt::skip]
pub(super) static GLYPHS: &[(char, &[Op])] = &[
    // Digits
    ('0', &[M(0.5, 0.0), C(0.95, 0.0, 0.95, 1.0, 0.5, 1.0), C(0.05, 1.0, 0.05, 0.0, 0.5, 0.0), Z]),
    ('1', &[M(0.3, 0.2), L(0.5, 0.0), V(1.0), M(0.2, 1.0), H(0.8)]),
    ('2', &[M(0.1, 0.3), C(0.1, 0.0, 0.9, 0.0, 0.9, 0.4), L(0.1, 1.0), H(0.9)]),
    ('3', &[M(0.2, 0.1), C(0.9, 0.0, 0.9, 0.5, 0.5, 0.5), C(0.9, 0.5, 0.9, 1.0, 0.2, 0.9)]),
    ('4', &[M(0.2, 0.0), V(0.6), H(0.8), M(0.6, 0.0), V(1.0)]),
    ('5', &[M(0.9, 0.0), H(0.2), V(0.45), C(0.2, 0.45, 1.0, 0.3, 0.8, 0.9)]),
    ('6', &[M(0.8, 0.0), C(0.1, 0.0, 0.1, 1.0, 0.5, 1.0), C(0.9, 1.0, 0.9, 0.45, 0.5, 0.45), Z]),
    ('7', &[M(0.1, 0.0), H(0.9), L(0.3, 1.0)]),
    ('8', &[M(0.5, 0.5), C(0.9, 0.5, 0.9, 0.0, 0.5, 0.0), C(0.1, 0.0, 0.1, 0.5, 0.5, 0.5), C(0.1, 0.5, 0.1, 1.0, 0.5, 1.0), C(0.9, 1.0, 0.9, 0.5, 0.5, 0.5), Z]),
    ('9', &[M(0.2, 1.0), C(0.9, 1.0, 0.9, 0.0, 0.5, 0.0), C(0.1, 0.0, 0.1, 0.55, 0.5, 0.55), Z]),

    // Latin lowercase (x-height 0.45)
    ('a', &[M(0.8, 0.45), V(1.0), M(0.5, 0.45), C(0.9, 0.45, 0.9, 1.0, 0.5, 1.0), C(0.1, 1.0, 0.1, 0.45, 0.5, 0.45), Z]),
    ('b', &[M(0.2, 0.0), V(1.0), M(0.2, 0.45), C(0.9, 0.45, 0.9, 1.0, 0.2, 1.0)]),
    ('c', &[M(0.8, 0.55), C(0.8, 0.45, 0.1, 0.45, 0.2, 0.75), C(0.1, 1.0, 0.8, 1.0, 0.8, 0.9)]),
    ('d', &[M(0.8, 0.0), V(1.0), M(0.8, 0.45), C(0.1, 0.45, 0.1, 1.0, 0.8, 1.0)]),
    ('e', &[M(0.1, 0.7), H(0.9), C(0.9, 0.45, 0.1, 0.45, 0.2, 0.55)]),
    ('f', &[M(0.7, 0.0), C(0.7, 0.0, 0.3, 0.0, 0.3, 0.3), V(1.0), M(0.1, 0.5), H(0.6)]),
    ('g', &[M(0.5, 0.45), C(0.9, 0.45, 0.9, 1.0, 0.5, 1.0), C(0.1, 1.0, 0.1, 0.45, 0.5, 0.45), Z, M(0.8, 0.45), V(1.2), C(0.8, 1.2, 0.0, 1.2, 0.3, 0.9)]),
    ('h', &[M(0.2, 0.0), V(1.0), M(0.2, 0.45), C(0.9, 0.45, 0.9, 1.0, 0.8, 1.0)]),
    ('i', &[M(0.5, 0.45), V(1.0), M(0.5, 0.25), Dot(0.06)]),
    ('j', &[M(0.6, 0.45), V(1.2), C(0.6, 1.2, 0.0, 1.2, 0.2, 0.9), M(0.6, 0.25), Dot(0.06)]),
    ('k', &[M(0.2, 0.0), V(1.0), M(0.8, 0.45), L(0.4, 0.65), L(0.8, 1.0)]),
    ('l', &[M(0.5, 0.0), V(1.0)]),
    ('m', &[M(0.1, 0.45), V(1.0), M(0.1, 0.45), C(0.5, 0.45, 0.5, 1.0, 0.5, 1.0), V(0.45), C(0.9, 0.45, 0.9, 1.0, 0.9, 1.0)]),
    ('n', &[M(0.2, 0.45), V(1.0), M(0.2, 0.45), C(0.9, 0.45, 0.9, 1.0, 0.8, 1.0)]),
    ('o', &[M(0.5, 0.45), C(0.9, 0.45, 0.9, 1.0, 0.5, 1.0), C(0.1, 1.0, 0.1, 0.45, 0.5, 0.45), Z]),
    ('p', &[M(0.2, 0.45), V(1.2), M(0.2, 0.45), C(0.9, 0.45, 0.9, 1.0, 0.2, 1.0)]),
    ('q', &[M(0.8, 0.45), V(1.2), M(0.8, 0.45), C(0.1, 0.45, 0.1, 1.0, 0.8, 1.0)]),
    ('r', &[M(0.2, 0.45), V(1.0), M(0.2, 0.45), C(0.9, 0.45, 0.8, 0.45, 0.7, 0.6)]),
    ('s', &[M(0.9, 0.55), C(0.9, 0.45, 0.1, 0.45, 0.2, 0.7), C(0.9, 0.7, 0.1, 1.0, 0.1, 0.9)]),
    ('t', &[M(0.5, 0.1), V(1.0), C(0.5, 1.0, 1.0, 1.0, 0.8, 1.0), M(0.1, 0.4), H(0.9)]),
    ('u', &[M(0.15, 0.45), V(0.8), C(0.15, 1.0, 0.85, 1.0, 0.85, 0.8), V(0.45)]),
    ('v', &[M(0.1, 0.45), L(0.5, 1.0), L(0.9, 0.45)]),
    ('w', &[M(0.0, 0.45), L(0.3, 1.0), L(0.5, 0.6), L(0.7, 1.0), L(1.0, 0.45)]),
    ('x', &[M(0.1, 0.45), L(0.9, 1.0), M(0.9, 0.45), L(0.1, 1.0)]),
    ('y', &[M(0.1, 0.45), L(0.5, 1.0), L(0.9, 0.45), M(0.5, 1.0), V(1.2), C(0.5, 1.2, 0.0, 1.2, 0.2, 0.9)]),
    ('z', &[M(0.1, 0.45), H(0.9), L(0.1, 1.0), H(0.9)]),

    // Latin uppercase
    ('A', &[M(0.1, 1.0), L(0.5, 0.0), L(0.9, 1.0), M(0.25, 0.6), H(0.75)]),
    ('B', &[M(0.2, 0.0), V(1.0), H(0.5), C(1.0, 1.0, 1.0, 0.5, 0.5, 0.5), C(0.9, 0.5, 0.9, 0.0, 0.2, 0.0), Z]),
    ('C', &[M(0.9, 0.2), C(0.9, 0.0, 0.1, 0.0, 0.2, 0.5), C(0.1, 1.0, 0.9, 1.0, 0.9, 0.8)]),
    ('D', &[M(0.2, 0.0), V(1.0), H(0.5), C(1.0, 1.0, 1.0, 0.0, 0.2, 0.0), Z]),
    ('E', &[M(0.9, 0.0), H(0.2), V(1.0), H(0.9), M(0.2, 0.5), H(0.8)]),
    ('F', &[M(0.9, 0.0), H(0.2), V(1.0), M(0.2, 0.5), H(0.8)]),
    ('G', &[M(0.9, 0.2), C(0.9, 0.0, 0.1, 0.0, 0.2, 0.5), C(0.1, 1.0, 0.9, 1.0, 0.9, 0.8), V(0.6), H(0.5)]),
    ('H', &[M(0.2, 0.0), V(1.0), M(0.8, 0.0), V(1.0), M(0.2, 0.5), H(0.8)]),
    ('I', &[M(0.5, 0.0), V(1.0), M(0.2, 0.0), H(0.8), M(0.2, 1.0), H(0.8)]),
    ('J', &[M(0.9, 0.0), V(0.8), C(0.9, 1.0, 0.1, 1.0, 0.1, 0.7)]),
    ('K', &[M(0.2, 0.0), V(1.0), M(0.9, 0.0), L(0.4, 0.5), L(0.9, 1.0)]),
    ('L', &[M(0.2, 0.0), V(1.0), H(0.9)]),
    ('M', &[M(0.1, 1.0), V(0.0), L(0.5, 0.6), L(0.9, 0.0), V(1.0)]),
    ('N', &[M(0.1, 1.0), V(0.0), L(0.9, 1.0), V(0.0)]),
    ('O', &[M(0.5, 0.0), C(0.95, 0.0, 0.95, 1.0, 0.5, 1.0), C(0.05, 1.0, 0.05, 0.0, 0.5, 0.0), Z]),
    ('P', &[M(0.2, 0.0), V(1.0), M(0.2, 0.0), C(0.9, 0.0, 0.9, 0.5, 0.2, 0.5)]),
    ('Q', &[M(0.5, 0.0), C(0.95, 0.0, 0.95, 1.0, 0.5, 1.0), C(0.05, 1.0, 0.05, 0.0, 0.5, 0.0), Z, M(0.6, 0.7), L(1.0, 1.0)]),
    ('R', &[M(0.2, 0.0), V(1.0), M(0.2, 0.0), C(0.9, 0.0, 0.9, 0.5, 0.2, 0.5), L(0.9, 1.0)]),
    ('S', &[M(0.9, 0.2), C(0.9, 0.0, 0.1, 0.0, 0.2, 0.4), C(0.0, 0.6, 1.0, 0.6, 0.8, 0.9), C(1.0, 1.0, 0.1, 1.0, 0.1, 0.8)]),
    ('T', &[M(0.5, 0.0), V(1.0), M(0.1, 0.0), H(0.9)]),
    ('U', &[M(0.1, 0.0), V(0.7), C(0.1, 1.0, 0.9, 1.0, 0.9, 0.7), V(0.0)]),
    ('V', &[M(0.0, 0.0), L(0.5, 1.0), L(1.0, 0.0)]),
    ('W', &[M(0.0, 0.0), L(0.3, 1.0), L(0.5, 0.3), L(0.7, 1.0), L(1.0, 0.0)]),
    ('X', &[M(0.0, 0.0), L(1.0, 1.0), M(1.0, 0.0), L(0.0, 1.0)]),
    ('Y', &[M(0.0, 0.0), L(0.5, 0.5), L(1.0, 0.0), M(0.5, 0.5), V(1.0)]),
    ('Z', &[M(0.0, 0.0), H(1.0), L(0.0, 1.0), H(1.0)]),

    // Punctuation
    (' ', &[]),
    ('.', &[M(0.5, 0.9), Dot(0.06)]),
    (',', &[M(0.5, 0.9), RelV(0.15), RelA { r: 0.1, large: false, sweep: false, dx: -0.1, dy: 0.0 }]),
    ('!', &[M(0.5, 0.0), V(0.75), M(0.5, 0.9), Dot(0.06)]),
    ('?', &[M(0.1, 0.2), C(0.1, 0.0, 0.9, 0.0, 0.5, 0.5), V(0.7), M(0.5, 0.9), Dot(0.06)]),
    (':', &[M(0.5, 0.4), Dot(0.06), M(0.5, 0.9), Dot(0.06)]),
    (';', &[M(0.5, 0.4), Dot(0.06), M(0.5, 0.9), RelV(0.15), RelA { r: 0.1, large: false, sweep: false, dx: -0.1, dy: 0.0 }]),
    ('-', &[M(0.15, 0.5), H(0.85)]),
    ('–', &[M(0.1, 0.5), H(0.9)]),
    ('—', &[M(0.0, 0.5), H(1.0)]),
    ('_', &[M(0.0, 1.0), H(1.0)]),
    ('(', &[M(0.7, 0.0), C(0.1, 0.0, 0.1, 1.0, 0.7, 1.0)]),
    (')', &[M(0.3, 0.0), C(0.9, 0.0, 0.9, 1.0, 0.3, 1.0)]),
    ('[', &[M(0.6, 0.0), H(0.3), V(1.0), H(0.6)]),
    (']', &[M(0.4, 0.0), H(0.7), V(1.0), H(0.4)]),
    ('{', &[M(0.8, 0.0), C(0.5, 0.0, 0.2, 0.3, 0.2, 0.5), C(0.2, 0.7, 0.5, 1.0, 0.8, 1.0)]),
    ('}', &[M(0.2, 0.0), C(0.5, 0.0, 0.8, 0.3, 0.8, 0.5), C(0.8, 0.7, 0.5, 1.0, 0.2, 1.0)]),
    ('|', &[M(0.5, 0.0), V(1.0)]),
    ('\'', &[M(0.5, 0.0), RelV(0.3)]),
    ('"', &[M(0.35, 0.0), RelV(0.3), M(0.65, 0.0), RelV(0.3)]),
    ('‘', &[M(0.4, 0.3), C(0.4, 0.0, 0.2, 0.0, 0.2, 0.1)]),
    ('’', &[M(0.2, 0.0), C(0.2, 0.3, 0.4, 0.3, 0.4, 0.2)]),
    ('“', &[M(0.4, 0.3), C(0.4, 0.0, 0.2, 0.0, 0.2, 0.1), M(0.6, 0.3), C(0.6, 0.0, 0.4, 0.0, 0.4, 0.1)]),
    ('”', &[M(0.2, 0.0), C(0.2, 0.3, 0.4, 0.3, 0.4, 0.2), M(0.4, 0.0), C(0.4, 0.3, 0.6, 0.3, 0.6, 0.2)]),
    ('/', &[M(0.1, 1.0), L(0.9, 0.0)]),
    ('\\', &[M(0.1, 0.0), L(0.9, 1.0)]),
    ('…', &[M(0.1, 0.9), Dot(0.05), M(0.5, 0.9), Dot(0.05), M(0.9, 0.9), Dot(0.05)]),
    ('•', &[M(0.5, 0.5), Dot(0.1)]),

    // Operators and relations
    ('+', &[M(0.5, 0.2), V(0.8), M(0.2, 0.5), H(0.8)]),
    ('=', &[M(0.1, 0.4), H(0.9), M(0.1, 0.6), H(0.9)]),
    ('±', &[M(0.5, 0.1), V(0.5), M(0.3, 0.3), H(0.7), M(0.2, 0.8), H(0.8)]),
    ('*', &[M(0.5, 0.3), V(0.7), M(0.3, 0.5), H(0.7), M(0.35, 0.35), L(0.65, 0.65), M(0.65, 0.35), L(0.35, 0.65)]),
    ('×', &[M(0.2, 0.3), L(0.8, 0.7), M(0.8, 0.3), L(0.2, 0.7)]),
    ('÷', &[M(0.1, 0.5), H(0.9), M(0.5, 0.3), Dot(0.06), M(0.5, 0.7), Dot(0.06)]),
    ('√', &[M(0.1, 0.6), L(0.3, 1.0), L(0.5, 0.0)]),
    ('%', &[M(0.2, 0.2), Dot(0.15), M(0.8, 0.8), Dot(0.15), M(0.1, 1.0), L(0.9, 0.0)]),
    ('@', &[M(0.8, 0.5), A { r: 0.3, large: true, sweep: false, x: 0.5, y: 0.8 }, C(0.6, 0.8, 0.6, 0.3, 0.2, 0.3), M(0.5, 0.0), A { r: 0.5, large: true, sweep: false, x: 0.85, y: 0.85 }]),
    ('&', &[M(0.9, 1.0), C(0.0, 1.0, 0.0, 0.0, 0.6, 0.0), S(0.3, 0.8, 0.0, 0.7), L(1.0, 0.0)]),
    ('#', &[M(0.3, 0.0), V(1.0), M(0.7, 0.0), V(1.0), M(0.0, 0.35), H(1.0), M(0.0, 0.65), H(1.0)]),
    ('$', &[M(0.5, 0.0), V(1.0), M(0.9, 0.2), C(0.0, 0.0, 0.0, 0.5, 0.5, 0.5), C(0.0, 0.5, 1.0, 0.5, 0.1, 0.8)]),
    ('^', &[M(0.2, 0.3), L(0.5, 0.0), L(0.8, 0.3)]),
    ('<', &[M(0.8, 0.1), L(0.2, 0.5), L(0.8, 0.9)]),
    ('>', &[M(0.2, 0.1), L(0.8, 0.5), L(0.2, 0.9)]),
    ('≤', &[M(0.8, 0.1), L(0.2, 0.5), L(0.8, 0.9), M(0.1, 1.0), H(0.9)]),
    ('≥', &[M(0.2, 0.1), L(0.8, 0.5), L(0.2, 0.9), M(0.1, 1.0), H(0.9)]),
    ('≠', &[M(0.1, 0.4), H(0.9), M(0.1, 0.6), H(0.9), M(0.1, 1.0), L(0.9, 0.0)]),
    ('≈', &[M(0.1, 0.3), C(0.5, 0.1, 0.5, 0.5, 0.9, 0.3), M(0.1, 0.7), C(0.5, 0.5, 0.5, 0.9, 0.9, 0.7)]),

    // Superscript digits
    ('²', &[M(0.1, 0.15), C(0.1, 0.0, 0.5, 0.0, 0.5, 0.2), L(0.1, 0.5), H(0.5)]),
    ('³', &[M(0.1, 0.05), C(0.5, 0.0, 0.5, 0.25, 0.3, 0.25), C(0.5, 0.25, 0.5, 0.5, 0.1, 0.45)]),

    // Greek and calculus
    ('π', &[M(0.0, 0.2), RelH(1.0), M(0.2, 0.2), RelV(0.8), M(0.8, 0.2), RelV(0.8)]),
    ('Σ', &[M(0.0, 0.0), H(1.0), L(0.5, 0.5), L(1.0, 1.0), H(0.0)]),
    ('Δ', &[M(0.0, 1.0), L(0.5, 0.0), L(1.0, 1.0), Z]),
    ('θ', &[M(0.5, 0.45), C(0.9, 0.45, 0.9, 1.0, 0.5, 1.0), C(0.1, 1.0, 0.1, 0.45, 0.5, 0.45), Z, M(0.2, 0.7), H(0.8)]),
    ('α', &[M(0.9, 1.0), C(0.9, 0.45, 0.1, 0.45, 0.3, 0.5), C(0.0, 0.0, 0.8, 0.0, 0.7, 1.0)]),
    ('β', &[M(0.2, 0.0), V(1.2), M(0.2, 0.45), C(0.9, 0.45, 0.9, 1.0, 0.2, 1.0)]),
    ('∫', &[M(0.8, 0.0), C(0.2, 0.0, 0.8, 1.0, 0.2, 1.0)]),
    ('∞', &[M(0.25, 0.5), C(0.0, 0.1, 0.5, 0.9, 0.75, 0.5), C(1.0, 0.9, 0.5, 0.1, 0.25, 0.5), Z]),
    ('∂', &[M(0.6, 0.0), C(0.0, 0.0, 1.0, 1.0, 0.4, 1.0), S(0.8, 0.3, 0.5, 0.3)]),

    // Sets and quantifiers
    ('∀', &[M(0.1, 0.0), L(0.5, 1.0), L(0.9, 0.0), M(0.25, 0.6), H(0.75)]),
    ('∃', &[M(0.9, 0.0), H(0.1), C(0.0, 0.0, 0.0, 1.0, 0.9, 1.0), M(0.1, 0.5), H(0.8)]),
    ('∈', &[M(0.9, 0.2), C(0.9, 0.0, 0.1, 0.0, 0.2, 0.5), C(0.1, 1.0, 0.9, 1.0, 0.9, 0.8), M(0.2, 0.5), H(0.8)]),
    ('∉', &[M(0.9, 0.2), C(0.9, 0.0, 0.1, 0.0, 0.2, 0.5), C(0.1, 1.0, 0.9, 1.0, 0.9, 0.8), M(0.2, 0.5), H(0.8), M(0.1, 1.0), L(0.9, 0.0)]),
    ('⊂', &[M(0.9, 0.1), C(0.2, 0.1, 0.2, 0.9, 0.9, 0.9)]),
    ('⊃', &[M(0.1, 0.1), C(0.8, 0.1, 0.8, 0.9, 0.1, 0.9)]),
    ('⊆', &[M(0.9, 0.1), C(0.2, 0.1, 0.2, 0.8, 0.9, 0.8), M(0.2, 1.0), H(0.9)]),
    ('⊇', &[M(0.1, 0.1), C(0.8, 0.1, 0.8, 0.8, 0.1, 0.8), M(0.1, 1.0), H(0.8)]),
    ('∩', &[M(0.1, 0.0), V(0.7), C(0.1, 0.0, 0.9, 0.0, 0.9, 0.7), V(0.0)]),
    ('∪', &[M(0.1, 1.0), V(0.3), C(0.1, 1.0, 0.9, 1.0, 0.9, 0.3), V(1.0)]),

    // Arrows
    ('→', &[M(0.0, 0.5), H(1.0), M(0.7, 0.2), L(1.0, 0.5), L(0.7, 0.8)]),
    ('←', &[M(0.0, 0.5), H(1.0), M(0.3, 0.2), L(0.0, 0.5), L(0.3, 0.8)]),
    ('↑', &[M(0.5, 0.0), V(1.0), M(0.2, 0.3), L(0.5, 0.0), L(0.8, 0.3)]),
    ('↓', &[M(0.5, 0.0), V(1.0), M(0.2, 0.7), L(0.5, 1.0), L(0.8, 0.7)]),

    // Geometry
    ('°', &[M(0.5, 0.15), Dot(0.15)]),
    ('∠', &[M(0.1, 0.0), L(0.1, 1.0), H(1.0)]),
    ('⊥', &[M(0.5, 0.0), V(1.0), M(0.0, 1.0), H(1.0)]),
    ('∥', &[M(0.3, 0.0), V(1.0), M(0.7, 0.0), V(1.0)]),
    ('△', &[M(0.5, 0.0), L(0.0, 1.0), H(1.0), Z]),
    ('⊙', &[M(0.5, 0.5), Dot(0.5), M(0.5, 0.5), Dot(0.1)]),

    // Analysis
    ('∇', &[M(0.0, 0.0), L(1.0, 0.0), L(0.5, 1.0), Z]),
    ('∬', &[M(0.7, 0.0), C(0.1, 0.0, 0.7, 1.0, 0.1, 1.0), M(0.9, 0.0), C(0.3, 0.0, 0.9, 1.0, 0.3, 1.0)]),
    ('∭', &[M(0.6, 0.0), C(0.0, 0.0, 0.6, 1.0, 0.0, 1.0), M(0.8, 0.0), C(0.2, 0.0, 0.8, 1.0, 0.2, 1.0), M(1.0, 0.0), C(0.4, 0.0, 1.0, 1.0, 0.4, 1.0)]),
    ('∮', &[M(0.5, 0.5), Dot(0.3), M(0.9, 0.2), C(0.1, 0.0, 0.9, 1.0, 0.1, 1.0)]),
    ('′', &[M(0.4, 0.0), L(0.6, 0.3)]),
    ('″', &[M(0.3, 0.0), L(0.5, 0.3), M(0.6, 0.0), L(0.8, 0.3)]),

    // Products
    ('⋅', &[M(0.5, 0.5), Dot(0.08)]),
    ('⊗', &[M(0.5, 0.5), Dot(0.4), M(0.2, 0.2), L(0.8, 0.8), M(0.8, 0.2), L(0.2, 0.8)]),
    ('⊕', &[M(0.5, 0.5), Dot(0.4), M(0.5, 0.1), V(0.9), M(0.1, 0.5), H(0.9)]),

    // Logic
    ('∧', &[M(0.1, 1.0), L(0.5, 0.0), L(0.9, 1.0)]),
    ('∨', &[M(0.1, 0.0), L(0.5, 1.0), L(0.9, 0.0)]),
    ('¬', &[M(0.2, 0.4), H(0.8), V(1.0)]),
    ('⇔', &[M(0.0, 0.5), H(1.0), M(0.3, 0.2), L(0.0, 0.5), L(0.3, 0.8), M(0.7, 0.2), L(1.0, 0.5), L(0.7, 0.8)]),
    ('⇒', &[M(0.0, 0.5), H(1.0), M(0.7, 0.2), L(1.0, 0.5), L(0.7, 0.8), M(0.0, 0.5), H(0.4)]),
    ('∅', &[M(0.5, 0.0), C(1.0, 0.0, 1.0, 1.0, 0.5, 1.0), C(0.0, 1.0, 0.0, 0.0, 0.5, 0.0), Z, M(0.1, 0.1), L(0.9, 0.9)]),
    ('∁', &[M(0.9, 0.2), C(0.9, 0.0, 0.1, 0.0, 0.2, 0.5), C(0.1, 1.0, 0.9, 1.0, 0.9, 0.8)]),
    ('⊄', &[M(0.9, 0.1), C(0.2, 0.1, 0.2, 0.9, 0.9, 0.9), M(0.1, 1.0), L(0.9, 0.0)]),

    // Misc relations
    ('∝', &[M(0.25, 0.5), C(0.0, 0.1, 0.5, 0.9, 0.75, 0.5), C(1.0, 0.9, 0.5, 0.1, 0.25, 0.5)]),
    ('≡', &[M(0.1, 0.3), H(0.9), M(0.1, 0.5), H(0.9), M(0.1, 0.7), H(0.9)]),
    ('∴', &[M(0.5, 0.2), Dot(0.08), M(0.2, 0.8), Dot(0.08), M(0.8, 0.8), Dot(0.08)]),
    ('∵', &[M(0.5, 0.8), Dot(0.08), M(0.2, 0.2), Dot(0.08), M(0.8, 0.2), Dot(0.08)]),
    ('ℵ', &[M(0.1, 1.0), L(0.9, 0.0), M(0.9, 1.0), L(0.1, 0.0), M(0.3, 0.5), C(0.5, 0.3, 0.5, 0.7, 0.7, 0.5)]),

    // Greek lowercase
    ('γ', &[M(0.1, 0.6), C(0.1, 0.4, 0.9, 0.4, 0.9, 0.6), L(0.5, 1.2), C(0.5, 1.2, 0.0, 1.2, 0.2, 0.9)]),
    ('δ', &[M(0.5, 0.45), C(0.9, 0.45, 0.9, 1.0, 0.5, 1.0), C(0.1, 1.0, 0.1, 0.45, 0.5, 0.45), Z, M(0.7, 0.0), C(0.7, 0.0, 0.9, 0.0, 0.5, 0.45)]),
    ('ε', &[M(0.8, 0.55), C(0.8, 0.45, 0.1, 0.45, 0.2, 0.75), C(0.1, 1.0, 0.8, 1.0, 0.8, 0.9), M(0.2, 0.75), H(0.8)]),
    ('ζ', &[M(0.2, 0.45), H(0.8), C(0.0, 0.45, 1.0, 0.9, 0.3, 1.2), C(0.3, 1.2, 0.0, 1.2, 0.2, 0.9)]),
    ('η', &[M(0.2, 0.0), V(1.0), M(0.2, 0.45), C(0.9, 0.45, 0.9, 1.0, 0.8, 1.0)]),
    ('ι', &[M(0.5, 0.45), V(1.0)]),
    ('κ', &[M(0.2, 0.0), V(1.0), M(0.8, 0.45), L(0.4, 0.65), L(0.8, 1.0)]),
    ('λ', &[M(0.2, 1.0), L(0.6, 0.0), L(0.8, 0.3), M(0.4, 0.7), L(0.9, 1.0)]),
    ('μ', &[M(0.1, 0.45), V(1.2), M(0.1, 0.45), C(0.5, 0.45, 0.5, 1.0, 0.5, 1.0), V(0.45), C(0.9, 0.45, 0.9, 1.0, 0.9, 1.0)]),
    ('ν', &[M(0.1, 0.45), L(0.5, 1.0), L(0.9, 0.45)]),
    ('ξ', &[M(0.1, 0.0), C(0.9, 0.0, 0.1, 0.5, 0.9, 0.5), C(0.1, 0.5, 0.9, 1.0, 0.1, 1.0)]),
    ('ο', &[M(0.5, 0.45), C(0.9, 0.45, 0.9, 1.0, 0.5, 1.0), C(0.1, 1.0, 0.1, 0.45, 0.5, 0.45), Z]),
    ('ρ', &[M(0.2, 0.0), V(1.0), M(0.2, 0.45), C(0.9, 0.45, 0.9, 0.0, 0.2, 0.0)]),
    ('σ', &[M(0.5, 0.45), C(0.9, 0.45, 0.9, 1.0, 0.5, 1.0), C(0.1, 1.0, 0.1, 0.7, 0.5, 0.7), H(0.9)]),
    ('τ', &[M(0.5, 0.1), V(1.0), C(0.5, 1.0, 1.0, 1.0, 0.8, 1.0), M(0.1, 0.4), H(0.9)]),
    ('υ', &[M(0.15, 0.45), V(0.8), C(0.15, 1.0, 0.85, 1.0, 0.85, 0.8), V(0.45)]),
    ('φ', &[M(0.5, 0.45), C(0.9, 0.45, 0.9, 1.0, 0.5, 1.0), C(0.1, 1.0, 0.1, 0.45, 0.5, 0.45), Z, M(0.5, 0.0), V(1.0)]),
    ('χ', &[M(0.1, 0.45), C(0.5, 1.0, 0.5, 1.0, 0.9, 1.0), M(0.9, 0.45), C(0.5, 1.0, 0.5, 1.0, 0.1, 1.0)]),
    ('ψ', &[M(0.15, 0.45), V(0.8), C(0.15, 1.0, 0.85, 1.0, 0.85, 0.8), V(0.45), M(0.5, 0.0), V(1.0)]),
    ('ω', &[M(0.1, 1.0), C(0.1, 0.6, 0.9, 0.6, 0.9, 1.0), M(0.3, 0.8), C(0.4, 0.7, 0.6, 0.7, 0.7, 0.8)]),

    // Greek uppercase
    ('Γ', &[M(0.1, 0.0), H(0.9), M(0.1, 0.0), V(1.0)]),
    ('Ε', &[M(0.9, 0.0), H(0.2), V(1.0), H(0.9), M(0.2, 0.5), H(0.8)]),
    ('Ζ', &[M(0.0, 0.0), H(1.0), L(0.0, 1.0), H(1.0)]),
    ('Η', &[M(0.2, 0.0), V(1.0), M(0.8, 0.0), V(1.0), M(0.2, 0.5), H(0.8)]),
    ('Κ', &[M(0.2, 0.0), V(1.0), M(0.9, 0.0), L(0.4, 0.5), L(0.9, 1.0)]),
    ('Λ', &[M(0.1, 1.0), L(0.5, 0.0), L(0.9, 1.0)]),
    ('Μ', &[M(0.1, 1.0), V(0.0), L(0.5, 0.6), L(0.9, 0.0), V(1.0)]),
    ('Ν', &[M(0.1, 1.0), V(0.0), L(0.9, 1.0), V(0.0)]),
    ('Ξ', &[M(0.1, 0.0), H(0.9), M(0.1, 0.5), H(0.9), M(0.1, 1.0), H(0.9)]),
    ('Π', &[M(0.0, 0.2), RelH(1.0), M(0.2, 0.2), RelV(0.8), M(0.8, 0.2), RelV(0.8)]),
    ('Ρ', &[M(0.2, 0.0), V(1.0), M(0.2, 0.0), C(0.9, 0.0, 0.9, 0.5, 0.2, 0.5)]),
    ('Τ', &[M(0.5, 0.0), V(1.0), M(0.1, 0.0), H(0.9)]),
    ('Υ', &[M(0.0, 0.0), L(0.5, 0.5), L(1.0, 0.0), M(0.5, 0.5), V(1.0)]),
    ('Φ', &[M(0.5, 0.0), C(0.95, 0.0, 0.95, 1.0, 0.5, 1.0), C(0.05, 1.0, 0.05, 0.0, 0.5, 0.0), Z, M(0.5, 0.0), V(1.0)]),
    ('Ψ', &[M(0.1, 0.0), V(0.5), C(0.1, 0.0, 0.9, 0.0, 0.9, 0.5), V(0.0), M(0.5, 0.5), V(1.0)]),
    ('Ω', &[M(0.0, 0.3), C(0.0, 0.0, 1.0, 0.0, 1.0, 0.3), V(1.0), H(0.7), M(0.0, 1.0), H(0.3)]),
];
