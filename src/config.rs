//! Settings for playback and SVG export.

use std::time::Duration;

pub use scribe_core::CompilerConfig;
pub use scribe_layout::LayoutConfig;

/// Strokes are animated for `max(min_stroke_duration, length * ms_per_unit)`
/// at normal speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerConfig {
    /// Shortest time any stroke takes. Defaults to 150 ms.
    pub min_stroke_duration: Duration,
    /// Milliseconds of animation per unit of path length. Defaults to `3`.
    pub ms_per_unit: f64,
    /// Playback speed multiplier applied to strokes and pauses alike.
    /// Values that are not positive and finite play at normal speed.
    pub speed: f64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            min_stroke_duration: Duration::from_millis(150),
            ms_per_unit: 3.0,
            speed: 1.0,
        }
    }
}

impl PlayerConfig {
    pub fn with_min_stroke_duration(mut self, duration: Duration) -> Self {
        self.min_stroke_duration = duration;
        self
    }

    pub fn with_ms_per_unit(mut self, ms_per_unit: f64) -> Self {
        self.ms_per_unit = ms_per_unit;
        self
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    /// `duration` adjusted for [`speed`](Self::speed).
    pub fn scaled(&self, duration: Duration) -> Duration {
        if !(self.speed.is_finite() && self.speed > 0.0) {
            return duration;
        }
        Duration::try_from_secs_f64(duration.as_secs_f64() / self.speed).unwrap_or(duration)
    }

    /// Animation time for a stroke of path length `length`, speed included.
    /// Unmeasurable lengths get the minimum.
    pub fn stroke_duration(&self, length: f64) -> Duration {
        let millis = length * self.ms_per_unit;
        let proportional = if millis.is_nan() || millis <= 0.0 {
            Duration::ZERO
        } else {
            Duration::try_from_secs_f64(millis / 1000.0).unwrap_or(Duration::MAX)
        };
        self.scaled(self.min_stroke_duration.max(proportional))
    }
}

/// Presentation defaults for paths that carry no style of their own.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgStyle {
    pub stroke: String,
    pub fill: String,
    pub stroke_width: f64,
    /// Optional board colour painted behind everything.
    pub background: Option<String>,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            stroke: "#FFFFFF".to_string(),
            fill: "none".to_string(),
            stroke_width: 4.0,
            background: None,
        }
    }
}

impl SvgStyle {
    pub fn with_stroke(mut self, stroke: impl Into<String>) -> Self {
        self.stroke = stroke.into();
        self
    }

    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.background = Some(background.into());
        self
    }
}
