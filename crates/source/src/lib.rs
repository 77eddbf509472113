//! Getting drawing scripts out of model responses.
//!
//! The tutor model is asked to answer with a fenced ```` ```json ```` block
//! holding an array of [`DrawCommand`]s. This crate pulls that array out,
//! deserializes it, and builds the one-line fallback script shown when that
//! fails. The request side lives in [`prompt`].
//!
//! ```ignore
//! use scribe_source::parse_or_error_script;
//!
//! let commands = parse_or_error_script(&response_text);
//! ```

pub mod prompt;

pub use prompt::build_prompt;

use regex::Regex;
use scribe_types::{DrawCommand, TextPayload};
use serde_json::Value;
use std::sync::LazyLock;
use thiserror::Error;

/// Longest error message shown in a fallback script, in characters.
pub const MAX_ERROR_CHARS: usize = 300;

static JSON_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```json\n(.*?)\n```").expect("BUG: invalid JSON_BLOCK_RE regex literal")
});

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Response did not contain a ```json block. Response: {0}")]
    MissingJsonBlock(String),
    #[error("Invalid JSON in drawing script: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid response: expected an array of commands, got {0}")]
    NotAnArray(&'static str),
    #[error("Command {index} is not a valid drawing command: {source}")]
    InvalidCommand {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// The body of the first ```` ```json ```` fenced block in `text`.
pub fn extract_json_block(text: &str) -> Option<&str> {
    JSON_BLOCK_RE
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|body| body.as_str())
}

/// Parses a drawing script from either a bare JSON array or a model
/// response wrapping one in a fenced block.
pub fn parse_commands(text: &str) -> Result<Vec<DrawCommand>, SourceError> {
    let trimmed = text.trim();
    let json = if trimmed.starts_with('[') {
        trimmed
    } else {
        extract_json_block(text).ok_or_else(|| SourceError::MissingJsonBlock(text.to_string()))?
    };

    let items = match serde_json::from_str::<Value>(json)? {
        Value::Array(items) => items,
        other => return Err(SourceError::NotAnArray(json_kind(&other))),
    };

    let commands = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item)
                .map_err(|source| SourceError::InvalidCommand { index, source })
        })
        .collect::<Result<Vec<DrawCommand>, _>>()?;
    log::debug!("Parsed {} drawing commands", commands.len());
    Ok(commands)
}

/// A script that just writes `Error: <message>` on the board.
pub fn error_script(message: &str) -> Vec<DrawCommand> {
    let shown: String = message.chars().take(MAX_ERROR_CHARS).collect();
    vec![DrawCommand::DrawText(TextPayload {
        text: format!("Error: {shown}"),
        x: 10.0,
        y: 100.0,
        char_size: None,
        font_size: Some(14.0),
    })]
}

/// [`parse_commands`], falling back to [`error_script`] so the caller
/// always has something to play.
pub fn parse_or_error_script(text: &str) -> Vec<DrawCommand> {
    parse_commands(text).unwrap_or_else(|e| {
        log::error!("Could not read drawing script: {}", e);
        error_script(&e.to_string())
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
