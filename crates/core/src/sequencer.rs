//! Playback state machine for compiled instruction lists.
//!
//! The sequencer owns the current run identity and position, and nothing
//! else. Drawing, narration and waiting are delegated to the injected
//! capabilities; their asynchronous results come back through
//! [`Sequencer::on_render_complete`] and [`Sequencer::on_timer_fired`],
//! which ignore anything tagged with a superseded [`Generation`].

use scribe_traits::{Generation, Narrator, Renderer, Timer, TimerHandle};
use scribe_types::OrchestratorInstruction;
use std::time::Duration;

/// Where playback stands, as seen by a viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// Nothing loaded yet, or a run has just been reset.
    Idle,
    /// The path at this index is (or was most recently) animating.
    /// Pauses keep the index of the path before them.
    Active(usize),
    Done,
}

/// The one thing a run may be waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Suspension {
    None,
    Animating(usize),
    Waiting { handle: TimerHandle, resume_at: usize },
}

/// What should be on screen right now.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    /// Indices of fully drawn paths, ascending.
    pub drawn: Vec<usize>,
    /// The path currently being animated, if any.
    pub animating: Option<usize>,
}

pub struct Sequencer<R, N, T> {
    instructions: Vec<OrchestratorInstruction>,
    renderer: R,
    narrator: N,
    timer: T,
    trigger: Option<u64>,
    generation: Generation,
    state: PlaybackState,
    suspension: Suspension,
}

impl<R, N, T> Sequencer<R, N, T>
where
    R: Renderer,
    N: Narrator,
    T: Timer,
{
    pub fn new(renderer: R, narrator: N, timer: T) -> Self {
        Self {
            instructions: Vec::new(),
            renderer,
            narrator,
            timer,
            trigger: None,
            generation: Generation::default(),
            state: PlaybackState::Idle,
            suspension: Suspension::None,
        }
    }

    /// Continues numbering runs after `generation`, so callbacks issued by
    /// an earlier sequencer sharing the same event source stay stale.
    pub fn with_generation(mut self, generation: Generation) -> Self {
        self.generation = generation;
        self
    }

    /// Replaces the instruction list and starts playing it from the top.
    ///
    /// Always starts a new run, even when `trigger` equals the current one.
    pub fn load(&mut self, instructions: Vec<OrchestratorInstruction>, trigger: u64) {
        self.instructions = instructions;
        self.trigger = Some(trigger);
        self.restart();
    }

    /// Restarts the current instructions if `trigger` differs from the one
    /// the running sequence was started with. Returns whether it restarted.
    pub fn retrigger(&mut self, trigger: u64) -> bool {
        if self.trigger == Some(trigger) {
            return false;
        }
        self.trigger = Some(trigger);
        self.restart();
        true
    }

    /// Reports that the renderer finished animating the path it was given
    /// under `generation`. Returns `false` if the report was stale.
    pub fn on_render_complete(&mut self, generation: Generation) -> bool {
        if generation != self.generation {
            log::debug!("Ignoring render completion from {generation}, now at {}", self.generation);
            return false;
        }
        match self.suspension {
            Suspension::Animating(index) => {
                self.advance(index + 1);
                true
            }
            other => {
                log::debug!("Unexpected render completion while {other:?}");
                false
            }
        }
    }

    /// Reports that the pause timer set under `generation` fired. Returns
    /// `false` if the report was stale.
    pub fn on_timer_fired(&mut self, generation: Generation) -> bool {
        if generation != self.generation {
            log::debug!("Ignoring timer from {generation}, now at {}", self.generation);
            return false;
        }
        match self.suspension {
            Suspension::Waiting { resume_at, .. } => {
                self.advance(resume_at);
                true
            }
            other => {
                log::debug!("Unexpected timer while {other:?}");
                false
            }
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn trigger(&self) -> Option<u64> {
        self.trigger
    }

    pub fn is_done(&self) -> bool {
        self.state == PlaybackState::Done
    }

    pub fn instructions(&self) -> &[OrchestratorInstruction] {
        &self.instructions
    }

    /// Paths before the active index are drawn; the active one animates
    /// until its completion arrives.
    pub fn frame(&self) -> Frame {
        let (drawn_until, animating) = match (self.state, self.suspension) {
            (PlaybackState::Idle, _) => (0, None),
            (PlaybackState::Done, _) => (self.instructions.len(), None),
            (PlaybackState::Active(index), Suspension::Animating(_)) => (index, Some(index)),
            (PlaybackState::Active(index), _) => (index + 1, None),
        };
        let drawn = self.instructions[..drawn_until.min(self.instructions.len())]
            .iter()
            .enumerate()
            .filter(|(_, instruction)| instruction.as_path().is_some())
            .map(|(index, _)| index)
            .collect();
        Frame { drawn, animating }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn narrator(&self) -> &N {
        &self.narrator
    }

    pub fn narrator_mut(&mut self) -> &mut N {
        &mut self.narrator
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }

    fn restart(&mut self) {
        if let Suspension::Waiting { handle, .. } = self.suspension {
            self.timer.cancel_timer(handle);
        }
        self.narrator.stop();
        self.generation = self.generation.next();
        self.state = PlaybackState::Idle;
        self.suspension = Suspension::None;
        log::info!(
            "Starting run {} with {} instructions",
            self.generation,
            self.instructions.len()
        );
        if !self.instructions.is_empty() {
            self.advance(0);
        }
    }

    fn advance(&mut self, mut index: usize) {
        loop {
            let Some(instruction) = self.instructions.get(index) else {
                log::info!("Run {} finished", self.generation);
                self.state = PlaybackState::Done;
                self.suspension = Suspension::None;
                return;
            };
            match instruction {
                OrchestratorInstruction::Speak { text } => {
                    log::debug!("[{index}] speak {text:?}");
                    self.narrator.speak(text);
                    index += 1;
                }
                OrchestratorInstruction::Pause { duration } => {
                    let wait = pause_duration(*duration);
                    log::debug!("[{index}] pause {wait:?}");
                    let handle = self.timer.set_timer(wait, self.generation);
                    self.suspension = Suspension::Waiting {
                        handle,
                        resume_at: index + 1,
                    };
                    return;
                }
                OrchestratorInstruction::Path(path) => {
                    log::debug!("[{index}] draw {}", path.d);
                    self.state = PlaybackState::Active(index);
                    self.suspension = Suspension::Animating(index);
                    self.renderer.render(index, path, self.generation);
                    return;
                }
            }
        }
    }
}

/// Pause lengths are milliseconds. Negative and NaN lengths do not wait;
/// lengths too large for a `Duration` wait as long as possible.
fn pause_duration(millis: f64) -> Duration {
    if millis.is_nan() || millis <= 0.0 {
        return Duration::ZERO;
    }
    Duration::try_from_secs_f64(millis / 1000.0).unwrap_or(Duration::MAX)
}
