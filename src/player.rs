//! Real-time playback on tokio.
//!
//! The sequencer is single-threaded and synchronous; this module supplies
//! its capabilities. Stroke animation is simulated with a sleep as long as
//! the path, pauses are sleeping tasks that get aborted on cancel, and
//! narration goes to the log. Every asynchronous result comes back as a [`PlayerEvent`] on one
//! channel and is applied to the sequencer in arrival order.
//!
//! ```text
//! sequencer --render/set_timer--> spawned sleeps --events--> run loop --> sequencer
//! ```

use crate::config::PlayerConfig;
use crate::error::PlayerError;
use kurbo::{BezPath, Shape};
use log::{debug, info};
use scribe_core::{Sequencer, speakable_text};
use scribe_traits::{Generation, Narrator, Renderer, Timer, TimerHandle};
use scribe_types::{ParsedScript, PathInstruction};
use serde::Serialize;
use std::cell::Cell;
use std::collections::HashMap;
use std::time::Duration;
use tokio::runtime::Builder;
use tokio::task::{self, JoinHandle};
use tokio::time::{Instant, sleep};

/// Something the run loop has to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerEvent {
    RenderComplete(Generation),
    TimerFired(Generation),
    /// Restart playback under a new trigger value.
    Replay(u64),
    Stop,
}

pub(crate) type EventSender = async_channel::Sender<PlayerEvent>;
pub(crate) type EventReceiver = async_channel::Receiver<PlayerEvent>;

/// Remote control for a running [`Player`].
#[derive(Debug, Clone)]
pub struct PlayerHandle {
    events: EventSender,
}

impl PlayerHandle {
    /// Restarts the script from the top if `trigger` differs from the one
    /// currently playing. Has no effect between runs. Returns `false` once
    /// the player has gone away.
    pub fn replay(&self, trigger: u64) -> bool {
        self.events.try_send(PlayerEvent::Replay(trigger)).is_ok()
    }

    /// Ends the current run early. Has no effect between runs.
    pub fn stop(&self) -> bool {
        self.events.try_send(PlayerEvent::Stop).is_ok()
    }
}

/// What happened during one [`Player::run`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackReport {
    /// Narration, after markup cleanup, in the order it was spoken.
    pub spoken: Vec<String>,
    /// Instruction index of every stroke the renderer was asked to draw.
    pub strokes: Vec<usize>,
    #[serde(rename = "elapsedMs", serialize_with = "as_millis")]
    pub elapsed: Duration,
    /// `false` when playback was stopped before the end.
    pub completed: bool,
}

fn as_millis<S: serde::Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u128(duration.as_millis())
}

/// Flattening tolerance for arcs and the arc-length estimate.
const LENGTH_ACCURACY: f64 = 0.01;

/// Total length of the path data, or `None` when it does not parse.
pub fn path_length(d: &str) -> Option<f64> {
    match BezPath::from_svg(d) {
        Ok(path) => Some(path.perimeter(LENGTH_ACCURACY)),
        Err(err) => {
            debug!("Cannot measure path {:?}: {}", d, err);
            None
        }
    }
}

/// Pretends to animate each stroke for a time proportional to its length.
struct SimulatedRenderer {
    events: EventSender,
    config: PlayerConfig,
    strokes: Vec<usize>,
}

impl Renderer for SimulatedRenderer {
    fn render(&mut self, index: usize, path: &PathInstruction, generation: Generation) {
        let length = path_length(&path.d).unwrap_or_default();
        let stroke_time = self.config.stroke_duration(length);
        debug!("Animating stroke {} (length {:.1}) for {:?}", index, length, stroke_time);
        self.strokes.push(index);
        let events = self.events.clone();
        task::spawn(async move {
            sleep(stroke_time).await;
            let _ = events.send(PlayerEvent::RenderComplete(generation)).await;
        });
    }
}

/// Narrates into the log.
#[derive(Default)]
struct LogNarrator {
    spoken: Vec<String>,
}

impl Narrator for LogNarrator {
    fn speak(&mut self, text: &str) {
        let speakable = speakable_text(text);
        info!("Narrating: {}", speakable);
        self.spoken.push(speakable);
    }

    fn stop(&mut self) {
        debug!("Narration stopped");
    }
}

struct TokioTimer {
    events: EventSender,
    config: PlayerConfig,
    next_handle: u64,
    pending: HashMap<u64, JoinHandle<()>>,
}

impl Timer for TokioTimer {
    fn set_timer(&mut self, duration: Duration, generation: Generation) -> TimerHandle {
        self.pending.retain(|_, task| !task.is_finished());
        self.next_handle += 1;
        let events = self.events.clone();
        let wait = self.config.scaled(duration);
        let task = task::spawn(async move {
            sleep(wait).await;
            let _ = events.send(PlayerEvent::TimerFired(generation)).await;
        });
        self.pending.insert(self.next_handle, task);
        TimerHandle(self.next_handle)
    }

    fn cancel_timer(&mut self, handle: TimerHandle) {
        if let Some(task) = self.pending.remove(&handle.0) {
            debug!("Cancelling timer {}", handle.0);
            task.abort();
        }
    }
}

pub struct Player {
    config: PlayerConfig,
    events: EventSender,
    inbox: EventReceiver,
    /// Last generation used, so a later run never reuses one that stray
    /// events from an earlier run may still carry.
    generation: Cell<Generation>,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(PlayerConfig::default())
    }
}

impl Player {
    pub fn new(config: PlayerConfig) -> Self {
        let (events, inbox) = async_channel::unbounded();
        Self {
            config,
            events,
            inbox,
            generation: Cell::new(Generation::default()),
        }
    }

    pub fn handle(&self) -> PlayerHandle {
        PlayerHandle {
            events: self.events.clone(),
        }
    }

    /// Drops whatever arrived since the last run ended: replays and stops
    /// meant for a run that is over, and completions it no longer awaits.
    fn discard_stale_events(&self) {
        while let Ok(event) = self.inbox.try_recv() {
            debug!("Discarding {:?} left over from an earlier run", event);
        }
    }

    /// Plays `script` to the end (or until stopped) and reports what was
    /// drawn and said. Must be called inside a tokio runtime.
    pub async fn run(
        &self,
        script: &ParsedScript,
        trigger: u64,
    ) -> Result<PlaybackReport, PlayerError> {
        self.discard_stale_events();
        let started = Instant::now();
        let renderer = SimulatedRenderer {
            events: self.events.clone(),
            config: self.config,
            strokes: Vec::new(),
        };
        let timer = TokioTimer {
            events: self.events.clone(),
            config: self.config,
            next_handle: 0,
            pending: HashMap::new(),
        };
        let mut sequencer = Sequencer::new(renderer, LogNarrator::default(), timer)
            .with_generation(self.generation.get());
        sequencer.load(script.instructions.clone(), trigger);

        let mut completed = true;
        while !sequencer.is_done() && !script.instructions.is_empty() {
            let event = self.inbox.recv().await.map_err(|_| PlayerError::ChannelClosed)?;
            match event {
                PlayerEvent::RenderComplete(generation) => {
                    sequencer.on_render_complete(generation);
                }
                PlayerEvent::TimerFired(generation) => {
                    sequencer.on_timer_fired(generation);
                }
                PlayerEvent::Replay(trigger) => {
                    if sequencer.retrigger(trigger) {
                        info!("Replaying under trigger {}", trigger);
                    }
                }
                PlayerEvent::Stop => {
                    info!("Playback stopped at {:?}", sequencer.state());
                    completed = false;
                    break;
                }
            }
        }

        self.generation.set(sequencer.generation());
        for (_, task) in sequencer.timer_mut().pending.drain() {
            task.abort();
        }
        let report = PlaybackReport {
            spoken: sequencer.narrator().spoken.clone(),
            strokes: sequencer.renderer().strokes.clone(),
            elapsed: started.elapsed(),
            completed,
        };
        info!(
            "Played {} strokes and {} narrations in {:?}",
            report.strokes.len(),
            report.spoken.len(),
            report.elapsed
        );
        Ok(report)
    }

    /// [`run`](Self::run) on a fresh current-thread runtime.
    pub fn run_blocking(
        &self,
        script: &ParsedScript,
        trigger: u64,
    ) -> Result<PlaybackReport, PlayerError> {
        let rt = Builder::new_current_thread()
            .enable_time()
            .build()
            .map_err(PlayerError::Runtime)?;
        rt.block_on(self.run(script, trigger))
    }
}
