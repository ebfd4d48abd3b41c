//! Command line interface for headless LabelKit sessions
//!
//! Examples:
//!   labelkit replay session.json                      # Replay, print JSON annotations
//!   labelkit replay session.json --format svg -o a.svg
//!   labelkit replay session.json --image-width 1280 --image-height 720
//!   labelkit default-config -o ~/.config/labelkit/config.toml

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use labelkit_designer::session::{load_session, replay};
use labelkit_designer::{render_svg, DesignerState, ImageSize};
use labelkit_settings::EditorConfig;

/// LabelKit CLI arguments
#[derive(Parser, Debug)]
#[clap(
    name = "labelkit",
    version,
    about = "Replay polygon annotation sessions and export the result"
)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Feed a recorded input session through the editor and export the result
    Replay(ReplayArgs),
    /// Write the default editor configuration
    DefaultConfig {
        /// Destination file (.toml or .json); prints TOML to stdout if omitted
        #[clap(long, short = 'o')]
        output: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Clone)]
pub struct ReplayArgs {
    /// JSON array of input events
    pub script: PathBuf,

    /// Editor configuration file (.toml or .json)
    #[clap(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Destination file; prints to stdout if omitted
    #[clap(long, short = 'o')]
    pub output: Option<PathBuf>,

    #[clap(long, value_enum, default_value_t = ExportFormat::Json)]
    pub format: ExportFormat,

    /// Canvas width in pixels
    #[clap(long, default_value_t = 800)]
    pub width: u32,

    /// Canvas height in pixels
    #[clap(long, default_value_t = 600)]
    pub height: u32,

    /// Size of the annotated image; the view is fitted to it before replay
    #[clap(long, requires = "image_height")]
    pub image_width: Option<f64>,

    #[clap(long, requires = "image_width")]
    pub image_height: Option<f64>,

    /// Palette label to draw with (defaults to the configured default label)
    #[clap(long)]
    pub label: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Svg,
}

/// Runs a parsed command line.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Replay(args) => {
            let output = replay_session(&args)?;
            write_output(args.output.as_deref(), &output)
        }
        Command::DefaultConfig { output } => write_default_config(output.as_deref()),
    }
}

/// Replays the session script and returns the rendered export.
pub fn replay_session(args: &ReplayArgs) -> anyhow::Result<String> {
    let config = match &args.config {
        Some(path) => EditorConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => EditorConfig::default(),
    };
    let events = load_session(&args.script)
        .with_context(|| format!("Failed to read session {}", args.script.display()))?;

    let mut state = DesignerState::with_config(config);
    state.design_name = args
        .script
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "session".to_string());

    if let Some(label) = &args.label {
        match state.canvas().config().labels.preset(label).cloned() {
            Some(preset) => state.set_active_label(preset),
            None => tracing::warn!("Label '{}' not in palette; using default", label),
        }
    }
    if let (Some(width), Some(height)) = (args.image_width, args.image_height) {
        state.set_image(
            ImageSize { width, height },
            f64::from(args.width),
            f64::from(args.height),
        );
    }

    replay(&mut state, &events);
    if state.canvas().is_drawing() {
        tracing::warn!("Session ended mid-drawing; the open polygon is not exported");
    }
    tracing::info!(
        "Session finished with {} polygons at {}% zoom",
        state.canvas().shape_count(),
        state.canvas().zoom_percent()
    );

    match args.format {
        ExportFormat::Json => state.to_annotation_file().to_json(),
        ExportFormat::Svg => Ok(render_svg(
            state.canvas(),
            args.width,
            args.height,
            &state.canvas().config().render,
        )),
    }
}

fn write_output(path: Option<&Path>, content: &str) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {}", path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}

fn write_default_config(path: Option<&Path>) -> anyhow::Result<()> {
    let config = EditorConfig::default();
    match path {
        Some(path) => {
            config
                .save_to_file(path)
                .with_context(|| format!("Failed to write config {}", path.display()))?;
            tracing::info!("Default config written to {}", path.display());
            Ok(())
        }
        None => {
            let text = toml::to_string_pretty(&config).context("Failed to serialize config")?;
            println!("{}", text);
            Ok(())
        }
    }
}
