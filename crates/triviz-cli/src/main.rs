use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;
use triviz_core::geom::Viewport;
use triviz_core::params::Params;
use triviz_core::scene;

#[derive(Debug, Parser)]
#[command(name = "triviz")]
#[command(about = "Right-triangle + circle geometry, computed headlessly to JSON.")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute one frame and print its calculated values as JSON.
    Frame {
        #[arg(long, default_value_t = 100.0)]
        width: f64,
        #[arg(long, default_value_t = 100.0)]
        height: f64,
        #[arg(long, default_value_t = 400.0)]
        pos_x: f64,
        #[arg(long, default_value_t = 300.0)]
        pos_y: f64,
        #[arg(long, default_value_t = 800.0)]
        viewport_width: f64,
        #[arg(long, default_value_t = 600.0)]
        viewport_height: f64,
        /// Write the calculated values here instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
        /// Also dump the frame's draw-command list as JSON.
        #[arg(long)]
        dump_scene: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame {
            width,
            height,
            pos_x,
            pos_y,
            viewport_width,
            viewport_height,
            out,
            dump_scene,
        } => frame(
            width,
            height,
            pos_x,
            pos_y,
            Viewport::new(viewport_width, viewport_height),
            out.as_deref(),
            dump_scene.as_deref(),
        ),
    }
}

fn frame(
    width: f64,
    height: f64,
    pos_x: f64,
    pos_y: f64,
    viewport: Viewport,
    out: Option<&Path>,
    dump_scene: Option<&Path>,
) -> Result<()> {
    let params = Params {
        width,
        height,
        pos_x,
        pos_y,
        ..Params::default()
    };
    // The CLI stands in for the panel widget, so it enforces the panel's
    // ranges; the engine itself would accept anything.
    params.validate(viewport)?;

    let frame = scene::compose_frame(&params, viewport);
    info!("composed frame with {} draw commands", frame.commands.len());

    let json = serde_json::to_string_pretty(&frame.values).context("serialize values")?;
    match out {
        Some(path) => write_artifact(path, &json)?,
        None => println!("{json}"),
    }

    if let Some(path) = dump_scene {
        let json = serde_json::to_string_pretty(&frame.commands).context("serialize scene")?;
        write_artifact(path, &json)?;
    }

    Ok(())
}

fn write_artifact(path: &Path, json: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).ok();
    }
    std::fs::write(path, json).with_context(|| format!("write {path:?}"))?;
    Ok(())
}
