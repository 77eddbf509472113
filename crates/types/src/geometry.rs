use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned box in drawing units, y growing downwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// The padded window enclosing everything a script draws.
///
/// Displays as the four space separated numbers `minX minY width height`,
/// which is also its serialized form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(into = "String")]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            Num(self.min_x),
            Num(self.min_y),
            Num(self.width),
            Num(self.height)
        )
    }
}

impl From<ViewBox> for String {
    fn from(view_box: ViewBox) -> Self {
        view_box.to_string()
    }
}

/// Formats a coordinate for path data: shortest round-trip digits, with
/// negative zero and non-finite values printed as `0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Num(pub f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0.0 || !self.0.is_finite() {
            f.write_str("0")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn num_drops_negative_zero_and_trailing_fraction() {
        assert_eq!(Num(-0.0).to_string(), "0");
        assert_eq!(Num(10.0).to_string(), "10");
        assert_eq!(Num(-2.5).to_string(), "-2.5");
        assert_eq!(Num(0.1 + 0.2).to_string(), "0.30000000000000004");
    }

    #[test]
    fn num_never_prints_inf_or_nan() {
        for value in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            assert_eq!(Num(value).to_string(), "0");
        }
    }

    #[test]
    fn view_box_serializes_as_window_string() {
        let view_box = ViewBox {
            min_x: -30.0,
            min_y: -30.0,
            width: 70.0,
            height: 70.0,
        };
        assert_eq!(view_box.to_string(), "-30 -30 70 70");
        assert_eq!(
            serde_json::to_string(&view_box).unwrap(),
            "\"-30 -30 70 70\""
        );
    }
}
