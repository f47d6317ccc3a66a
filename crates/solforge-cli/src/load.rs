// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::path::Path;

use anyhow::Context;
use solforge_config::{load_project, load_project_with_file, Registry};

/// Build the registry for `root`, from `config` when given.
pub fn load_registry(root: &Path, config: Option<&Path>) -> anyhow::Result<Registry> {
	match config {
		Some(path) => load_project_with_file(root, path)
			.with_context(|| format!("invalid configuration in {}", path.display())),
		None => load_project(root)
			.with_context(|| format!("invalid configuration for project {}", root.display())),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;
	use tempfile::TempDir;

	#[test]
	fn test_unknown_default_network_fails_with_context() {
		let dir = TempDir::new().unwrap();
		fs::write(
			dir.path().join("solforge.toml"),
			"default_network = \"ropsten\"\n",
		)
		.unwrap();

		let err = load_registry(dir.path(), None).unwrap_err();
		let chain = format!("{err:#}");
		assert!(chain.contains("invalid configuration for project"), "{chain}");
		assert!(chain.contains("ropsten"), "{chain}");
	}

	#[test]
	fn test_missing_explicit_config_fails() {
		let dir = TempDir::new().unwrap();
		let missing = dir.path().join("staging.toml");

		let err = load_registry(dir.path(), Some(&missing)).unwrap_err();
		let chain = format!("{err:#}");
		assert!(chain.contains("invalid configuration in"), "{chain}");
		assert!(chain.contains("staging.toml"), "{chain}");
	}

	#[test]
	fn test_fresh_project_loads() {
		let dir = TempDir::new().unwrap();
		fs::write(dir.path().join(".secret"), "deadbeef\n").unwrap();
		let registry = load_registry(dir.path(), None).unwrap();
		assert_eq!(registry.default_network_name(), "hardhat");
	}

	#[test]
	fn test_explicit_config_is_used() {
		let dir = TempDir::new().unwrap();
		let config = dir.path().join("staging.toml");
		fs::write(&config, "default_network = \"matic\"\n").unwrap();
		let registry = load_registry(dir.path(), Some(&config)).unwrap();
		assert_eq!(registry.default_network_name(), "matic");
	}
}
