//! CLI command implementations

use anyhow::{bail, Context};
use clap::ValueEnum;
use gomap_core::{render_graph, render_graph_json, render_line_count};
use gomap_indexer::{build_project_graph, LineCounter, LocConfig, LocOutcome};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn dag(root: &Path, format: OutputFormat) -> anyhow::Result<()> {
    if !root.is_dir() {
        bail!("project root {} is not a directory", root.display());
    }
    tracing::info!("Building package graph for {}", root.display());

    let graph = build_project_graph(root)
        .with_context(|| format!("failed to load module at {}", root.display()))?;

    let out = match format {
        OutputFormat::Text => render_graph(&graph),
        OutputFormat::Json => render_graph_json(&graph)? + "\n",
    };
    emit(&out)
}

pub fn loc(paths: &[PathBuf], config: &LocConfig, format: OutputFormat) -> anyhow::Result<()> {
    let Some(path) = paths.first() else {
        println!("0 arguments given");
        return Ok(());
    };
    if paths.len() > 1 {
        tracing::warn!("Ignoring {} extra path argument(s)", paths.len() - 1);
    }

    let mut counter = LineCounter::new()?;
    let outcome = counter
        .count_path(path, config)
        .with_context(|| format!("failed to count lines in {}", path.display()))?;

    let out = match (format, &outcome) {
        (OutputFormat::Text, LocOutcome::Directory(report)) => report.render_table(),
        (OutputFormat::Text, LocOutcome::File { lines, .. }) => render_line_count(*lines),
        (OutputFormat::Json, LocOutcome::Directory(report)) => {
            serde_json::to_string_pretty(report)? + "\n"
        }
        (OutputFormat::Json, LocOutcome::File { path, lines }) => {
            let value = serde_json::json!({ "path": path, "lines": lines });
            serde_json::to_string_pretty(&value)? + "\n"
        }
    };
    emit(&out)
}

fn emit(out: &str) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(out.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
