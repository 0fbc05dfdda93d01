//! Replays a JSON gesture script against a headless brush and prints every
//! notification as a JSON line, followed by the final domain extents.
//!
//! ```text
//! multibrush-replay script.json
//! RUST_LOG=multibrush=debug multibrush-replay script.json
//! ```

use anyhow::{Context, Result, bail};
use multibrush::{
    Axis, AxisPair, BrushSettings, DomainExtent, EventType, HeadlessRenderer, LinearScale, MultiBrush, PointerEvent,
    Span,
};
use serde::Deserialize;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Deserialize)]
struct AxisConfig {
    domain: [f64; 2],
    range: [f64; 2],
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum Step {
    Down(PointerEvent),
    Move(PointerEvent),
    Up(PointerEvent),
    KeyDown(u32),
    KeyUp(u32),
    Clear,
    Broadcast,
}

#[derive(Debug, Deserialize)]
struct Script {
    #[serde(default)]
    settings: BrushSettings,
    #[serde(default)]
    x: Option<AxisConfig>,
    #[serde(default)]
    y: Option<AxisConfig>,
    #[serde(default)]
    extents: Vec<DomainExtent>,
    #[serde(default)]
    steps: Vec<Step>,
}

fn surface(script: &Script) -> AxisPair<Span> {
    let span = |axis: &Option<AxisConfig>| match axis {
        Some(cfg) => Span::from(cfg.range),
        None => Span::new(-multibrush::constants::UNBOUNDED_SURFACE, multibrush::constants::UNBOUNDED_SURFACE),
    };
    AxisPair::new(span(&script.x), span(&script.y))
}

fn run(script: Script) -> Result<Vec<DomainExtent>> {
    if script.x.is_none() && script.y.is_none() {
        bail!("script binds no axis");
    }

    let renderer = HeadlessRenderer::with_settings(surface(&script), &script.settings);
    let mut brush = MultiBrush::with_settings(renderer, script.settings.clone());
    for (axis, cfg) in [(Axis::X, &script.x), (Axis::Y, &script.y)] {
        if let Some(cfg) = cfg {
            brush.bind_axis(axis, LinearScale::new(cfg.domain, cfg.range));
        }
    }
    brush
        .set_extent_domain(&script.extents)
        .context("Failed to apply initial extents")?;

    for event_type in [EventType::Start, EventType::Change, EventType::End] {
        brush.on(event_type, |event| {
            println!("{}", serde_json::to_string(event)?);
            Ok(())
        });
    }

    for (i, step) in script.steps.into_iter().enumerate() {
        match step {
            Step::Down(event) => brush
                .pointer_down(event)
                .with_context(|| format!("Step {} (down) failed", i))?,
            Step::Move(event) => brush.pointer_move(event),
            Step::Up(event) => brush.pointer_up(event),
            Step::KeyDown(code) => brush.key_down(code),
            Step::KeyUp(code) => brush.key_up(code),
            Step::Clear => brush.clear(),
            Step::Broadcast => brush.broadcast_current(),
        }
    }

    info!(regions = brush.len(), "Replay finished");
    Ok(brush.get_extent_domain()?)
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let path: PathBuf = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .context("usage: multibrush-replay <script.json>")?;
    let json = std::fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))?;
    let script: Script =
        serde_json::from_str(&json).with_context(|| format!("Invalid gesture script {}", path.display()))?;

    let extents = run(script)?;
    println!("{}", serde_json::to_string(&extents)?);
    Ok(())
}
