// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// solforge - compiler and network configuration for contract deployments
#[derive(Parser, Debug)]
#[command(name = "solforge", version)]
pub struct Args {
	/// Project root holding the secret files and solforge.toml
	#[arg(long, default_value = ".")]
	pub root: PathBuf,

	/// Settings file to use instead of <root>/solforge.toml
	#[arg(long)]
	pub config: Option<PathBuf>,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
	/// List configured networks
	Networks,
	/// Validate the configuration and report warnings
	Check,
	/// Print the configuration object as JSON, credentials redacted
	Export {
		#[arg(long)]
		pretty: bool,
	},
}
