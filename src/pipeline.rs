//! From script text on disk to compiled scripts and SVG files.

use crate::config::{CompilerConfig, SvgStyle};
use crate::error::ScribeError;
use crate::svg::render_svg;
use scribe_core::ScriptCompiler;
use scribe_source::{parse_commands, parse_or_error_script};
use scribe_types::{DrawCommand, ParsedScript};
use std::fs;
use std::io;
use std::path::Path;

/// Reads drawing scripts and compiles them.
#[derive(Debug, Clone, Default)]
pub struct ScriptPipeline {
    compiler: ScriptCompiler,
    error_fallback: bool,
}

impl ScriptPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_compiler_config(mut self, config: CompilerConfig) -> Self {
        self.compiler = ScriptCompiler::with_config(config);
        self
    }

    /// When enabled, unreadable scripts compile to a single "Error: ..."
    /// line instead of failing, the way the tutor app shows them.
    pub fn with_error_fallback(mut self, enabled: bool) -> Self {
        self.error_fallback = enabled;
        self
    }

    pub fn parse(&self, text: &str) -> Result<Vec<DrawCommand>, ScribeError> {
        if self.error_fallback {
            Ok(parse_or_error_script(text))
        } else {
            Ok(parse_commands(text)?)
        }
    }

    pub fn compile_str(&self, text: &str) -> Result<ParsedScript, ScribeError> {
        let commands = self.parse(text)?;
        Ok(self.compiler.compile(&commands))
    }

    pub fn compile_file<P: AsRef<Path>>(&self, path: P) -> Result<ParsedScript, ScribeError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            io::Error::new(
                e.kind(),
                format!("Failed to read drawing script from '{}': {}", path.display(), e),
            )
        })?;
        log::info!("Loaded drawing script from {}", path.display());
        self.compile_str(&text)
    }

    /// Compiles `input` and writes its final frame to `output`, creating
    /// parent directories as needed.
    pub fn render_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input: P,
        output: Q,
        style: &SvgStyle,
    ) -> Result<ParsedScript, ScribeError> {
        let script = self.compile_file(input)?;
        let output = output.as_ref();
        if let Some(parent) = output.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(output, render_svg(&script, style))?;
        log::info!("Wrote {}", output.display());
        Ok(script)
    }
}
