//! The drawing script vocabulary produced by the tutor model.
//!
//! Commands arrive as JSON objects of the form
//! `{"command": "drawLine", "payload": {"x1": 0, ...}}`. Required payload
//! fields are required here too: a script missing one fails to deserialize
//! instead of being patched up with guesses.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", content = "payload", rename_all = "camelCase")]
pub enum DrawCommand {
    DrawEquation(EquationPayload),
    DrawText(TextPayload),
    Pause(PausePayload),
    DrawMatrix(MatrixPayload),
    DrawLine(LinePayload),
    DrawCircle(CirclePayload),
    DrawArc(ArcPayload),
    DrawShape(ShapePayload),
}

impl DrawCommand {
    /// The wire tag of this command, e.g. `"drawEquation"`.
    pub fn name(&self) -> &'static str {
        match self {
            DrawCommand::DrawEquation(_) => "drawEquation",
            DrawCommand::DrawText(_) => "drawText",
            DrawCommand::Pause(_) => "pause",
            DrawCommand::DrawMatrix(_) => "drawMatrix",
            DrawCommand::DrawLine(_) => "drawLine",
            DrawCommand::DrawCircle(_) => "drawCircle",
            DrawCommand::DrawArc(_) => "drawArc",
            DrawCommand::DrawShape(_) => "drawShape",
        }
    }
}

/// Picks the first usable size. Zero counts as "not given", matching how
/// the model tends to emit `0` for fields it does not care about.
fn first_size(candidates: [Option<f64>; 2], default: f64) -> f64 {
    candidates
        .into_iter()
        .flatten()
        .find(|size| *size != 0.0)
        .unwrap_or(default)
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquationPayload {
    #[serde(default)]
    pub equation: String,
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub char_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
}

impl EquationPayload {
    pub fn glyph_size(&self, default: f64) -> f64 {
        first_size([self.char_size, self.font_size], default)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextPayload {
    #[serde(default)]
    pub text: String,
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub char_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
}

impl TextPayload {
    pub fn glyph_size(&self, default: f64) -> f64 {
        first_size([self.char_size, self.font_size], default)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PausePayload {
    /// Milliseconds.
    pub duration: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixPayload {
    pub data: Vec<Vec<String>>,
    pub x: f64,
    pub y: f64,
    pub cell_size: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinePayload {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CirclePayload {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
}

/// Angles are in degrees, 0 pointing up and growing clockwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArcPayload {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapePayload {
    pub d: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
}
