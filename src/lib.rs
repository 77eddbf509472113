//! # scribe
//!
//! Turns a tutor model's drawing script into hand-drawn stroke paths and
//! plays them back with narration.
//!
//! - [`pipeline`]: read and compile scripts, export SVG
//! - [`player`]: real-time playback on tokio
//! - [`svg`]: static SVG rendering of scripts and frames
//! - [`config`]: compiler, player and SVG settings
//!
//! The engine itself lives in the workspace crates re-exported below.

pub use scribe_core as engine;
pub use scribe_layout as layout;
pub use scribe_source as source;
pub use scribe_traits as traits;
pub use scribe_types as types;

pub mod config;
pub mod error;
pub mod pipeline;
pub mod player;
pub mod svg;

pub use config::{CompilerConfig, LayoutConfig, PlayerConfig, SvgStyle};
pub use error::{PlayerError, ScribeError};
pub use pipeline::ScriptPipeline;
pub use player::{PlaybackReport, Player, PlayerEvent, PlayerHandle};
pub use scribe_core::{Frame, PlaybackState, ScriptCompiler, Sequencer, compile, speakable_text};
pub use scribe_source::{build_prompt, parse_commands};
pub use scribe_types::{
    DrawCommand, OrchestratorInstruction, ParsedScript, PathInstruction, ViewBox,
};
pub use svg::{render_frame_svg, render_svg};
