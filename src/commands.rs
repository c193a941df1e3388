//! CLI command handlers.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use edgeviz_core::VisualizerConfig;
use edgeviz_graph::render::write_svg;
use edgeviz_graph::{RunReport, RunRequest, Session};
use tracing::info;

use crate::cli::{Commands, RunArgs};

/// What a headless run did.
#[derive(Debug)]
pub struct RunOutcome {
    pub report: RunReport,
    /// Title of the frame that was drawn, if the run asked for a redraw.
    pub title: Option<String>,
    /// SVG file written, if any.
    pub written: Option<PathBuf>,
}

impl RunOutcome {
    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        if self.report.has_fatal() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    }
}

/// Execute a CLI command.
///
/// # Errors
///
/// Returns an error when input, config or output files cannot be used, or
/// the window cannot be opened.
pub fn execute_command(command: Commands) -> Result<ExitCode> {
    match command {
        Commands::Run(args) => cmd_run(&args).map(|outcome| outcome.exit_code()),
        Commands::Gui { config } => cmd_gui(config.as_deref()).map(|()| ExitCode::SUCCESS),
    }
}

/// Load the config file if one was given, defaults otherwise.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is invalid.
pub fn load_config(path: Option<&Path>) -> Result<VisualizerConfig> {
    path.map_or_else(
        || Ok(VisualizerConfig::default()),
        |path| {
            VisualizerConfig::load(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))
        },
    )
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read edge list from stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read edge list from {}", path.display()))
}

/// Run one coordinator cycle and write the SVG when a redraw was requested.
///
/// Notices are logged by the session; they do not make this fail.
///
/// # Errors
///
/// Returns an error when the input, config or output file cannot be used.
pub fn cmd_run(args: &RunArgs) -> Result<RunOutcome> {
    let config = load_config(args.config.as_deref())?;
    let text = read_input(&args.input)?;

    let mut session = Session::new();
    let request = RunRequest::new(text, args.algorithm.clone())
        .source(args.source.clone())
        .target(args.target.clone());
    let report = session.run(&request);

    let mut title = None;
    let mut written = None;
    if let Some(redraw) = &report.redraw {
        let frame = session.render(redraw, &config);
        info!(title = frame.title(), "frame ready");
        if let Some(output) = &args.output {
            write_svg(&frame, &config.canvas, output)
                .with_context(|| format!("Failed to write plot to {}", output.display()))?;
            written = Some(output.clone());
        }
        title = Some(frame.title().to_string());
    }

    Ok(RunOutcome {
        report,
        title,
        written,
    })
}

fn cmd_gui(config: Option<&Path>) -> Result<()> {
    let config = load_config(config)?;
    edgeviz_ui::run_app(config).map_err(|e| anyhow::anyhow!("Desktop window failed: {e}"))
}
