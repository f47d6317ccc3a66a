// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Compiler and network configuration for solforge projects.
//!
//! This crate provides:
//! - Secret loading for the signing key and gateway API key files
//! - The network registry: built-in targets, optional extras from
//!   `solforge.toml`, validated once at startup
//! - Layered project settings (defaults, TOML file)
//! - The export object consumed by the external build/deploy tool
//!
//! # Usage
//!
//! ```ignore
//! use solforge_config::{load_project, Exposure};
//!
//! let registry = load_project(".")?;
//! let target = registry.network("infura_matic").unwrap();
//! println!("{}", registry.export(Exposure::Redacted).to_json_pretty()?);
//! ```

pub mod error;
pub mod export;
pub mod layer;
pub mod registry;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use export::{ExportedConfig, ExportedNetwork, Exposure};
pub use layer::ProjectConfigLayer;
pub use registry::{build, build_with, Registry, RegistryWarning, Secrets};
pub use sections::*;
pub use solforge_common_config::{
	load_secret_file, DefaultReason, LoadedSecret, SecretSource, PLACEHOLDER_SECRET,
};
pub use sources::{
	merge_sources, ConfigSource, DefaultsSource, Precedence, TomlSource, PROJECT_CONFIG_FILE,
};

use std::path::Path;

use tracing::debug;

/// Fully resolved project settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
	pub default_network: String,
	pub compiler: CompilerConfig,
	pub secrets: SecretsConfig,
	/// Remote networks declared in addition to the built-ins.
	pub networks: Vec<NetworkConfig>,
}

impl Default for ProjectConfig {
	fn default() -> Self {
		Self {
			default_network: LOCAL_NETWORK.to_string(),
			compiler: CompilerConfig::default(),
			secrets: SecretsConfig::default(),
			networks: Vec::new(),
		}
	}
}

/// Resolve project settings from `solforge.toml` in `root`, if present.
pub fn resolve_project_config(root: impl AsRef<Path>) -> Result<ProjectConfig, ConfigError> {
	let sources: Vec<Box<dyn ConfigSource>> = vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::project(root.as_ref())),
	];
	merge_sources(sources)?.finalize()
}

/// Load the registry for the project at `root`.
///
/// Reads `solforge.toml` when it exists, then the secret files, then builds
/// and validates the registry.
pub fn load_project(root: impl AsRef<Path>) -> Result<Registry, ConfigError> {
	let root = root.as_ref();
	let project = resolve_project_config(root)?;
	load_with_config(root, &project)
}

/// Load the registry using an explicit settings file, which must exist.
pub fn load_project_with_file(
	root: impl AsRef<Path>,
	config_path: impl Into<std::path::PathBuf>,
) -> Result<Registry, ConfigError> {
	let root = root.as_ref();
	let sources: Vec<Box<dyn ConfigSource>> = vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::required(config_path)),
	];
	let project = merge_sources(sources)?.finalize()?;
	load_with_config(root, &project)
}

fn load_with_config(root: &Path, project: &ProjectConfig) -> Result<Registry, ConfigError> {
	debug!(root = %root.display(), "loading project secrets");
	let secrets = Secrets::load(root, &project.secrets);
	build_with(&secrets, project)
}
