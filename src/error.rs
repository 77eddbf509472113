use scribe_source::SourceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlayerError {
    #[error("Failed to start the playback runtime: {0}")]
    Runtime(#[source] std::io::Error),
    #[error("Playback event channel closed before the script finished")]
    ChannelClosed,
}

/// The error type for everything the `scribe` crate does.
#[derive(Error, Debug)]
pub enum ScribeError {
    #[error("Could not read drawing script: {0}")]
    Source(#[from] SourceError),
    #[error("Playback failed: {0}")]
    Player(#[from] PlayerError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
