//! # scribe-core
//!
//! The two halves of scribe's engine:
//! - **compiler**: drawing commands to a flat list of paths, pauses and
//!   narration, framed by a view box
//! - **sequencer**: a playback state machine driven by injected render,
//!   narration and timer capabilities
//!
//! Neither half does I/O or owns a runtime. The real-time tokio player
//! lives in the `scribe` crate.

pub use scribe_layout as layout;
pub use scribe_traits as traits;
pub use scribe_types as types;

pub mod compiler;
pub mod sequencer;
pub mod speech;

pub use compiler::{CompilerConfig, ScriptCompiler, compile};
pub use sequencer::{Frame, PlaybackState, Sequencer};
pub use speech::speakable_text;
