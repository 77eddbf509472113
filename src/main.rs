use clap::{Parser, Subcommand};
use scribe::{Player, PlayerConfig, ScribeError, ScriptPipeline, SvgStyle, build_prompt};
use std::path::PathBuf;
use std::time::Duration;

/// Compile and play hand-drawn math explanations.
#[derive(Parser, Debug)]
#[command(name = "scribe", version, about)]
struct Cli {
    /// Show unreadable scripts as an on-board "Error: ..." line instead of failing.
    #[arg(long, global = true)]
    fallback: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compile a drawing script and print the instruction list as JSON.
    Compile {
        input: PathBuf,
        #[arg(long)]
        pretty: bool,
    },
    /// Write the finished drawing as an SVG file.
    Render {
        input: PathBuf,
        #[arg(short, long)]
        output: PathBuf,
        /// Board colour painted behind the strokes, e.g. "#1E1E1E".
        #[arg(long)]
        background: Option<String>,
    },
    /// Play a script in real time, narrating into the log.
    Play {
        input: PathBuf,
        /// Shortest time in milliseconds any stroke takes to draw.
        #[arg(long, default_value_t = 150)]
        min_stroke_ms: u64,
        /// Drawing time in milliseconds per unit of path length.
        #[arg(long, default_value_t = 3.0)]
        ms_per_unit: f64,
        #[arg(long, default_value_t = 1.0)]
        speed: f64,
        /// Print the playback report as JSON when done.
        #[arg(long)]
        report: bool,
    },
    /// Print the tutor prompt for a problem.
    Prompt { problem: Vec<String> },
}

fn main() -> Result<(), ScribeError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    let pipeline = ScriptPipeline::new().with_error_fallback(cli.fallback);

    match cli.command {
        Command::Compile { input, pretty } => {
            let script = pipeline.compile_file(&input)?;
            let json = if pretty {
                serde_json::to_string_pretty(&script)?
            } else {
                serde_json::to_string(&script)?
            };
            println!("{}", json);
        }
        Command::Render {
            input,
            output,
            background,
        } => {
            let mut style = SvgStyle::default();
            if let Some(background) = background {
                style = style.with_background(background);
            }
            let script = pipeline.render_file(&input, &output, &style)?;
            println!(
                "Wrote {} paths to {}",
                script.paths().count(),
                output.display()
            );
        }
        Command::Play {
            input,
            min_stroke_ms,
            ms_per_unit,
            speed,
            report,
        } => {
            let script = pipeline.compile_file(&input)?;
            let config = PlayerConfig::default()
                .with_min_stroke_duration(Duration::from_millis(min_stroke_ms))
                .with_ms_per_unit(ms_per_unit)
                .with_speed(speed);
            let result = Player::new(config).run_blocking(&script, 0)?;
            if report {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!(
                    "Drew {} strokes and spoke {} lines in {:.1}s",
                    result.strokes.len(),
                    result.spoken.len(),
                    result.elapsed.as_secs_f64()
                );
            }
        }
        Command::Prompt { problem } => {
            println!("{}", build_prompt(&problem.join(" ")));
        }
    }
    Ok(())
}
