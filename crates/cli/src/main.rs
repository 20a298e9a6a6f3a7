//! Emote plugin binary.
//!
//! Speaks line-delimited JSON envelopes on stdin/stdout (see [`bridge`]) and
//! logs to stderr, or to a per-process file under `EMOTE_LOG_DIR`.

mod bridge;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use emote_config::Config;
use tracing::info;

/// Emote command line arguments.
#[derive(Parser, Debug)]
#[command(name = "emote")]
#[command(about = "Annotates chat messages with registered emoji images")]
struct Args {
	/// Configuration file (TOML)
	#[arg(short, long, value_name = "PATH")]
	config: Option<PathBuf>,

	/// Events buffered between the reader and the plugin
	#[arg(long, value_name = "N", default_value_t = 256)]
	queue: usize,

	/// Verbose logging
	#[arg(short, long)]
	verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
	let args = Args::parse();

	setup_tracing(args.verbose);

	let config = Config::load_or_default(args.config.as_deref()).context("failed to load configuration")?;
	info!(host = %config.server.host, assets = %config.assets.dir_name, "starting emote");

	bridge::serve(config, args.queue.max(1), tokio::io::stdin(), tokio::io::stdout()).await?;

	info!("stdin closed, shutting down");
	Ok(())
}

fn setup_tracing(verbose: bool) {
	use std::fs::OpenOptions;

	use tracing_subscriber::EnvFilter;
	use tracing_subscriber::prelude::*;

	let filter = || {
		EnvFilter::try_from_env("EMOTE_LOG")
			.or_else(|_| EnvFilter::try_from_default_env())
			.unwrap_or_else(|_| {
				if verbose {
					EnvFilter::new("emote=trace,debug")
				} else {
					EnvFilter::new("emote=debug,info")
				}
			})
	};

	if let Some(log_dir) = std::env::var("EMOTE_LOG_DIR").ok().map(PathBuf::from)
		&& std::fs::create_dir_all(&log_dir).is_ok()
	{
		let log_path = log_dir.join(format!("emote.{}.log", std::process::id()));

		if let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_path) {
			let file_layer = tracing_subscriber::fmt::layer()
				.with_writer(file)
				.with_ansi(false)
				.with_target(true);

			tracing_subscriber::registry().with(filter()).with(file_layer).init();

			tracing::info!(path = ?log_path, "tracing initialized");
			return;
		}
	}

	// stdout carries the protocol, so logs always go to stderr
	tracing_subscriber::fmt()
		.with_env_filter(filter())
		.with_writer(std::io::stderr)
		.init();
}
