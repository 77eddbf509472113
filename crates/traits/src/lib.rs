pub mod playback;

pub use playback::{Generation, Narrator, Renderer, Timer, TimerHandle};
