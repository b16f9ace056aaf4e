//! Replay command handler.
//!
//! Feeds intent lines through a fresh controller and prints the view after
//! each one, so sessions can be scripted and checked without a terminal.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tally_core::{Intent, NavigationController, ViewSnapshot};
use tracing::debug;

pub fn run(file: Option<&Path>, json: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match file {
        Some(path) => {
            let reader = File::open(path)
                .map(BufReader::new)
                .with_context(|| format!("open {}", path.display()))?;
            replay(reader, &mut out, json)
        }
        None => replay(io::stdin().lock(), &mut out, json),
    }
}

/// Dispatches every intent in `input` and writes one snapshot line each.
fn replay<R: BufRead, W: Write>(input: R, out: &mut W, json: bool) -> Result<()> {
    let mut controller = NavigationController::new();

    for (idx, line) in input.lines().enumerate() {
        let lineno = idx + 1;
        let line = line.with_context(|| format!("read line {lineno}"))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let intent: Intent = trimmed.parse().with_context(|| format!("line {lineno}"))?;
        debug!(line = lineno, ?intent, "replaying intent");

        let snapshot = controller.dispatch(intent);
        if json {
            serde_json::to_writer(&mut *out, &snapshot).context("encode snapshot")?;
            writeln!(out)?;
        } else {
            writeln!(out, "{}", format_text(&snapshot))?;
        }
    }

    out.flush()?;
    Ok(())
}

fn format_text(snapshot: &ViewSnapshot) -> String {
    let username = snapshot.username.as_deref().unwrap_or("-");
    let count = snapshot
        .count
        .map_or_else(|| "-".to_string(), |n| n.to_string());
    format!("{} user={username} count={count}", snapshot.view)
}
