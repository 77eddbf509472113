//! Capabilities consumed by the playback sequencer.
//!
//! The sequencer never draws, speaks or sleeps on its own. It asks an
//! injected [`Renderer`], [`Narrator`] and [`Timer`] to do so, and is told
//! later (through its `on_*` methods) that a stroke finished or a timer
//! fired. Every such callback carries the [`Generation`] it was issued
//! under, so callbacks that outlive a restart can be recognised and dropped.
//!
//! Implementations decide how asynchronous they are: the real-time player
//! spawns tokio tasks, while tests record the requests and replay them by
//! hand against a simulated clock.

use scribe_types::PathInstruction;
use std::fmt;
use std::time::Duration;

/// Identifies one playback run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(pub u64);

impl Generation {
    pub fn next(self) -> Self {
        Generation(self.0.wrapping_add(1))
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gen#{}", self.0)
    }
}

/// Opaque handle for a pending timer, issued by a [`Timer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub u64);

/// Draws one path, animating it, and reports completion asynchronously by
/// calling back into the sequencer with the same `generation`.
pub trait Renderer {
    fn render(&mut self, index: usize, path: &PathInstruction, generation: Generation);
}

/// Fire-and-forget narration.
pub trait Narrator {
    fn speak(&mut self, text: &str);

    /// Silences any narration still in progress. Called when a run restarts.
    fn stop(&mut self) {}
}

/// One-shot timers. A fired timer is reported back to the sequencer with
/// the generation it was set under.
pub trait Timer {
    fn set_timer(&mut self, duration: Duration, generation: Generation) -> TimerHandle;

    fn cancel_timer(&mut self, handle: TimerHandle);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_advances_and_wraps() {
        assert_eq!(Generation(1).next(), Generation(2));
        assert_eq!(Generation(u64::MAX).next(), Generation(0));
        assert_eq!(Generation(7).to_string(), "gen#7");
    }
}
