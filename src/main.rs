//! `sketchboard`: replay a scripted input session against the drawing engine.

mod config;
mod error;
mod loader;
mod script;
mod svg;

use std::path::PathBuf;
use std::process::ExitCode;

use canvas::camera::Point;
use canvas::engine::{Action, EngineCore};
use canvas::input::Tool;
use clap::Parser;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::script::Step;

#[derive(Parser, Debug)]
#[command(name = "sketchboard", about = "Replay sketchboard input scripts headlessly")]
struct Cli {
    /// JSON array of frames and tool switches.
    #[arg(long, env = "SKETCHBOARD_SCRIPT")]
    script: PathBuf,

    /// Image files dropped onto the canvas before the script runs.
    #[arg(long = "drop")]
    drops: Vec<PathBuf>,

    /// Screen point the files are dropped at, as `X,Y`.
    #[arg(long, value_parser = parse_point, default_value = "0,0")]
    drop_at: Point,

    /// Viewport size as `WIDTHxHEIGHT`.
    #[arg(long, value_parser = parse_size, default_value = "800x600")]
    viewport: ViewportSize,

    /// Write the final scene as SVG.
    #[arg(long, env = "SKETCHBOARD_SVG")]
    svg: Option<PathBuf>,

    /// Tool active before the first step.
    #[arg(long, value_parser = parse_tool, default_value = "select")]
    tool: Tool,
}

fn parse_pair(raw: &str, sep: char) -> Result<(f64, f64), String> {
    let (a, b) = raw.split_once(sep).ok_or_else(|| format!("expected A{sep}B, got '{raw}'"))?;
    let parse = |s: &str| s.trim().parse::<f64>().map_err(|e| format!("invalid number '{s}': {e}"));
    Ok((parse(a)?, parse(b)?))
}

fn parse_point(raw: &str) -> Result<Point, String> {
    parse_pair(raw, ',').map(|(x, y)| Point::new(x, y))
}

#[derive(Debug, Clone, Copy)]
struct ViewportSize {
    width: f64,
    height: f64,
}

fn parse_size(raw: &str) -> Result<ViewportSize, String> {
    let (width, height) = parse_pair(raw, 'x')?;
    if width <= 0.0 || height <= 0.0 {
        return Err(format!("viewport must be positive, got '{raw}'"));
    }
    Ok(ViewportSize { width, height })
}

fn parse_tool(raw: &str) -> Result<Tool, String> {
    serde_json::from_value(serde_json::Value::String(raw.to_owned()))
        .map_err(|_| format!("unknown tool '{raw}', expected select, curve or line"))
}

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let dotenv = dotenvy::dotenv();
    init_logging();
    if let Err(err) = dotenv {
        if !err.not_found() {
            tracing::warn!(error = %err, "failed to load .env");
        }
    }

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "sketchboard failed");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let cfg = AppConfig::from_env()?;
    let steps = script::load_script(&cli.script)?;

    let mut engine = EngineCore::with_config(cfg.interaction());
    let ViewportSize { width, height } = cli.viewport;
    engine.set_viewport(width, height);
    engine.set_stroke(cfg.stroke());
    engine.set_reserved_regions(cfg.toolbar().into_iter().collect());
    engine.set_tool(cli.tool);

    if !cli.drops.is_empty() {
        engine.add_pictures(loader::decode_all(&cli.drops), cli.drop_at);
    }

    let mut frames = 0usize;
    for step in steps {
        match step {
            Step::Tool(switch) => engine.set_tool(switch.tool),
            Step::Frame(input) => {
                let actions = engine.frame(&input);
                log_actions(frames, &actions);
                frames += 1;
            }
        }
    }
    let selected = engine.selection();
    tracing::info!(frames, objects = engine.scene.len(), selected = selected.len(), "replay finished");
    for id in &selected {
        tracing::debug!(%id, "selected at end of replay");
    }

    print_json(&engine.scene.summary())?;

    if let Some(path) = &cli.svg {
        let document = svg::render_scene(&engine.scene, engine.camera, engine.config().handle_radius, width, height);
        svg::write(path, &document)?;
    }
    Ok(())
}

fn log_actions(frame: usize, actions: &[Action]) {
    for action in actions {
        match action {
            Action::ObjectCreated(id) => tracing::debug!(frame, %id, "object created"),
            Action::ObjectsDeleted(count) => tracing::debug!(frame, count, "objects deleted"),
            Action::SetCursor(cursor) => tracing::debug!(frame, ?cursor, "cursor changed"),
            Action::RenderNeeded => tracing::trace!(frame, "render needed"),
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), AppError> {
    let pretty = serde_json::to_string_pretty(value)?;
    println!("{pretty}");
    Ok(())
}
