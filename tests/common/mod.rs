pub mod fixtures;

use scribe::{ParsedScript, ScriptPipeline};
use serde_json::Value;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Compiles a script given as a JSON command array.
pub fn compile_json(commands: &Value) -> Result<ParsedScript, Box<dyn std::error::Error>> {
    let text = serde_json::to_string(commands)?;
    Ok(ScriptPipeline::new().compile_str(&text)?)
}

/// Wraps a command array the way the tutor model answers.
pub fn as_model_response(commands: &Value) -> Result<String, serde_json::Error> {
    Ok(format!(
        "Here is the explanation.\n```json\n{}\n```\n",
        serde_json::to_string_pretty(commands)?
    ))
}
