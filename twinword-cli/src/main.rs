#![forbid(unsafe_code)]
//! `twinword`: replay saved inputs through the fuzz probe and print the verdicts.

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use twinword_core::{evaluate, telemetry, test_one_input, ProbeConfig, Verdict};

#[derive(Debug, Parser)]
#[command(name = "twinword", version, about = "Replay inputs through the twinword fuzz probe")]
struct Cli {
	/// TOML config file (log_level, json_output). Environment overrides apply on top.
	#[arg(long)]
	config: Option<PathBuf>,
	/// Print one JSON object per input
	#[arg(long)]
	json: bool,
	/// Input files to replay
	#[arg(required = true)]
	files: Vec<PathBuf>,
}

#[derive(Debug, Serialize)]
struct Replay<'a> {
	path: &'a str,
	len: usize,
	verdict: Verdict,
	code: u64,
	status: i32,
}

fn load_config(path: Option<&Path>) -> anyhow::Result<ProbeConfig> {
	let mut cfg = match path {
		Some(p) => ProbeConfig::load_from_file(p).with_context(|| format!("loading config {}", p.display()))?,
		None => ProbeConfig::default(),
	};
	cfg.apply_env();
	cfg.validate()?;
	Ok(cfg)
}

fn replay(path: &Path) -> anyhow::Result<(usize, Verdict, i32)> {
	let data = std::fs::read(path).with_context(|| format!("reading input {}", path.display()))?;
	let verdict = evaluate(&data);
	let status = test_one_input(&data);
	debug!(path = %path.display(), len = data.len(), verdict = %verdict, "replayed");
	Ok((data.len(), verdict, status))
}

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	let cfg = load_config(cli.config.as_deref())?;
	telemetry::init(&cfg)?;
	let json = cli.json || cfg.json_output;
	info!(inputs = cli.files.len(), json, "replaying inputs");

	let stdout = std::io::stdout();
	let mut out = stdout.lock();
	for path in &cli.files {
		let (len, verdict, status) = replay(path)?;
		let shown = path.display().to_string();
		if json {
			let line = serde_json::to_string(&Replay { path: &shown, len, verdict, code: verdict.code(), status })?;
			writeln!(out, "{line}")?;
		} else {
			writeln!(out, "{shown}: {verdict} (code {}, status {status})", verdict.code())?;
		}
	}
	Ok(())
}
