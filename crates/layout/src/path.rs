//! Incremental writer for SVG path data.

use scribe_types::Num;
use std::fmt::Write;

/// Builds a path-data string one segment at a time.
///
/// Segments are separated by single spaces and cubic control points by
/// `", "`, e.g. `M 0 0 C 1 0, 1 1, 0 1 z`.
#[derive(Debug, Default, Clone)]
pub struct PathData {
    buf: String,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    fn segment(&mut self) -> &mut String {
        if !self.buf.is_empty() {
            self.buf.push(' ');
        }
        &mut self.buf
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        let _ = write!(self.segment(), "M {} {}", Num(x), Num(y));
        self
    }

    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        let _ = write!(self.segment(), "L {} {}", Num(x), Num(y));
        self
    }

    pub fn horizontal_to(&mut self, x: f64) -> &mut Self {
        let _ = write!(self.segment(), "H {}", Num(x));
        self
    }

    pub fn vertical_to(&mut self, y: f64) -> &mut Self {
        let _ = write!(self.segment(), "V {}", Num(y));
        self
    }

    pub fn cubic_to(&mut self, c1: (f64, f64), c2: (f64, f64), to: (f64, f64)) -> &mut Self {
        let _ = write!(
            self.segment(),
            "C {} {}, {} {}, {} {}",
            Num(c1.0),
            Num(c1.1),
            Num(c2.0),
            Num(c2.1),
            Num(to.0),
            Num(to.1)
        );
        self
    }

    pub fn smooth_to(&mut self, c2: (f64, f64), to: (f64, f64)) -> &mut Self {
        let _ = write!(
            self.segment(),
            "S {} {}, {} {}",
            Num(c2.0),
            Num(c2.1),
            Num(to.0),
            Num(to.1)
        );
        self
    }

    pub fn arc_to(&mut self, radius: f64, large: bool, sweep: bool, to: (f64, f64)) -> &mut Self {
        let _ = write!(
            self.segment(),
            "A {} {} 0 {} {} {} {}",
            Num(radius),
            Num(radius),
            flag(large),
            flag(sweep),
            Num(to.0),
            Num(to.1)
        );
        self
    }

    pub fn relative_horizontal(&mut self, dx: f64) -> &mut Self {
        let _ = write!(self.segment(), "h {}", Num(dx));
        self
    }

    pub fn relative_vertical(&mut self, dy: f64) -> &mut Self {
        let _ = write!(self.segment(), "v {}", Num(dy));
        self
    }

    pub fn relative_arc(
        &mut self,
        radius: f64,
        large: bool,
        sweep: bool,
        delta: (f64, f64),
    ) -> &mut Self {
        let _ = write!(
            self.segment(),
            "a {} {} 0 {} {} {} {}",
            Num(radius),
            Num(radius),
            flag(large),
            flag(sweep),
            Num(delta.0),
            Num(delta.1)
        );
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.segment().push('z');
        self
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

fn flag(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_segments_with_single_spaces() {
        let mut path = PathData::new();
        path.move_to(0.0, 0.0)
            .cubic_to((1.0, 0.0), (1.0, 1.0), (0.5, 1.0))
            .relative_arc(0.6, true, false, (0.01, 0.0))
            .close();
        assert_eq!(path.finish(), "M 0 0 C 1 0, 1 1, 0.5 1 a 0.6 0.6 0 1 0 0.01 0 z");
    }

    #[test]
    fn empty_builder_is_empty_string() {
        let path = PathData::new();
        assert!(path.is_empty());
        assert_eq!(path.finish(), "");
    }
}
