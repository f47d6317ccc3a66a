// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

mod args;
mod commands;
mod load;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use args::{Args, Command};

fn main() -> anyhow::Result<()> {
	// Logs go to stderr so `export` output stays machine-readable.
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
		)
		.with_writer(std::io::stderr)
		.init();

	let args = Args::parse();
	debug!(root = %args.root.display(), command = ?args.command, "starting");

	let registry = load::load_registry(&args.root, args.config.as_deref())?;

	let output = match args.command {
		Command::Networks => commands::render_networks(&registry),
		Command::Check => commands::render_check(&registry),
		Command::Export { pretty } => commands::render_export(&registry, pretty)?,
	};
	print!("{output}");
	if !output.ends_with('\n') {
		println!();
	}
	Ok(())
}
