use crate::geometry::ViewBox;
use serde::{Deserialize, Serialize};

/// One drawable stroke or filled shape.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathInstruction {
    pub d: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
}

impl PathInstruction {
    /// An unstyled stroke.
    pub fn stroke(d: impl Into<String>) -> Self {
        Self {
            d: d.into(),
            ..Default::default()
        }
    }
}

/// The unit of playback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OrchestratorInstruction {
    Path(PathInstruction),
    /// Milliseconds.
    Pause { duration: f64 },
    Speak { text: String },
}

impl OrchestratorInstruction {
    pub fn as_path(&self) -> Option<&PathInstruction> {
        match self {
            OrchestratorInstruction::Path(path) => Some(path),
            _ => None,
        }
    }
}

impl From<PathInstruction> for OrchestratorInstruction {
    fn from(path: PathInstruction) -> Self {
        OrchestratorInstruction::Path(path)
    }
}

/// A compiled drawing script: what to play, and the window to show it in.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedScript {
    pub instructions: Vec<OrchestratorInstruction>,
    pub view_box: Option<ViewBox>,
}

impl ParsedScript {
    pub fn paths(&self) -> impl Iterator<Item = &PathInstruction> {
        self.instructions.iter().filter_map(OrchestratorInstruction::as_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn instructions_serialize_with_type_tag() {
        let script = ParsedScript {
            instructions: vec![
                OrchestratorInstruction::Speak { text: "x".into() },
                PathInstruction::stroke("M 0 0 L 1 1").into(),
                OrchestratorInstruction::Pause { duration: 500.0 },
            ],
            view_box: None,
        };

        assert_eq!(
            serde_json::to_value(&script).unwrap(),
            json!({
                "instructions": [
                    {"type": "speak", "text": "x"},
                    {"type": "path", "d": "M 0 0 L 1 1"},
                    {"type": "pause", "duration": 500.0}
                ],
                "viewBox": null
            })
        );
        assert_eq!(script.paths().count(), 1);
    }
}
