// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: built-in defaults and the project TOML file.

use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::layer::ProjectConfigLayer;

/// File name looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "solforge.toml";

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	ConfigFile = 20,
}

/// Trait for configuration sources.
pub trait ConfigSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<ProjectConfigLayer, ConfigError>;
}

/// Built-in defaults source.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<ProjectConfigLayer, ConfigError> {
		debug!("loading defaults");
		Ok(ProjectConfigLayer::default())
	}
}

/// TOML file configuration source.
pub struct TomlSource {
	path: PathBuf,
	required: bool,
}

impl TomlSource {
	/// A settings file that may or may not exist.
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self {
			path: path.into(),
			required: false,
		}
	}

	/// A settings file the user asked for explicitly; its absence is an error.
	pub fn required(path: impl Into<PathBuf>) -> Self {
		Self {
			path: path.into(),
			required: true,
		}
	}

	/// `solforge.toml` in the project root.
	pub fn project(root: &Path) -> Self {
		Self::new(root.join(PROJECT_CONFIG_FILE))
	}

	pub fn path(&self) -> &Path {
		&self.path
	}
}

impl ConfigSource for TomlSource {
	fn name(&self) -> &'static str {
		"toml-config"
	}

	fn precedence(&self) -> Precedence {
		Precedence::ConfigFile
	}

	fn load(&self) -> Result<ProjectConfigLayer, ConfigError> {
		if !self.required {
			let exists = self.path.try_exists().map_err(|e| ConfigError::FileRead {
				path: self.path.clone(),
				source: e,
			})?;
			if !exists {
				debug!(path = %self.path.display(), "config file not found, skipping");
				return Ok(ProjectConfigLayer::default());
			}
		}

		debug!(path = %self.path.display(), "loading config file");
		let content = std::fs::read_to_string(&self.path).map_err(|e| ConfigError::FileRead {
			path: self.path.clone(),
			source: e,
		})?;

		let layer: ProjectConfigLayer =
			toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
				path: self.path.clone(),
				source: e,
			})?;

		trace!("parsed config layer from TOML");
		Ok(layer)
	}
}

/// Merge sources in precedence order.
pub fn merge_sources(
	mut sources: Vec<Box<dyn ConfigSource>>,
) -> Result<ProjectConfigLayer, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = ProjectConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		let layer = source.load()?;
		merged.merge(layer);
	}
	Ok(merged)
}
