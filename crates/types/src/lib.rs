pub mod command;
pub mod geometry;
pub mod instruction;

pub use command::{
    ArcPayload, CirclePayload, DrawCommand, EquationPayload, LinePayload, MatrixPayload,
    PausePayload, ShapePayload, TextPayload,
};
pub use geometry::{Bounds, Num, Point, ViewBox};
pub use instruction::{OrchestratorInstruction, ParsedScript, PathInstruction};
