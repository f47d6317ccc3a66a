// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Secret file locations.

use std::path::{Path, PathBuf};

use serde::Deserialize;

pub const DEFAULT_SIGNING_KEY_FILE: &str = ".secret";
pub const DEFAULT_API_KEY_FILE: &str = ".infuraid";

/// Where the two secret files live (runtime, fully resolved).
///
/// Relative paths are resolved against the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretsConfig {
	pub signing_key_file: PathBuf,
	pub api_key_file: PathBuf,
}

impl Default for SecretsConfig {
	fn default() -> Self {
		Self {
			signing_key_file: PathBuf::from(DEFAULT_SIGNING_KEY_FILE),
			api_key_file: PathBuf::from(DEFAULT_API_KEY_FILE),
		}
	}
}

impl SecretsConfig {
	pub fn signing_key_path(&self, root: &Path) -> PathBuf {
		root.join(&self.signing_key_file)
	}

	pub fn api_key_path(&self, root: &Path) -> PathBuf {
		root.join(&self.api_key_file)
	}
}

/// Secret file layer (partial, for merging).
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct SecretsConfigLayer {
	#[serde(default)]
	pub signing_key_file: Option<String>,
	#[serde(default)]
	pub api_key_file: Option<String>,
}

impl SecretsConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.signing_key_file.is_some() {
			self.signing_key_file = other.signing_key_file;
		}
		if other.api_key_file.is_some() {
			self.api_key_file = other.api_key_file;
		}
	}

	pub fn finalize(self) -> SecretsConfig {
		SecretsConfig {
			signing_key_file: PathBuf::from(
				self
					.signing_key_file
					.unwrap_or_else(|| DEFAULT_SIGNING_KEY_FILE.to_string()),
			),
			api_key_file: PathBuf::from(
				self
					.api_key_file
					.unwrap_or_else(|| DEFAULT_API_KEY_FILE.to_string()),
			),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_paths() {
		let config = SecretsConfigLayer::default().finalize();
		assert_eq!(config.signing_key_file, PathBuf::from(".secret"));
		assert_eq!(config.api_key_file, PathBuf::from(".infuraid"));
	}

	#[test]
	fn test_relative_paths_resolve_against_root() {
		let config = SecretsConfig::default();
		let root = Path::new("/work/project");
		assert_eq!(
			config.signing_key_path(root),
			PathBuf::from("/work/project/.secret")
		);
		assert_eq!(
			config.api_key_path(root),
			PathBuf::from("/work/project/.infuraid")
		);
	}

	#[test]
	fn test_absolute_paths_ignore_root() {
		let config = SecretsConfig {
			signing_key_file: PathBuf::from("/run/secrets/deployer"),
			api_key_file: PathBuf::from(".infuraid"),
		};
		assert_eq!(
			config.signing_key_path(Path::new("/work/project")),
			PathBuf::from("/run/secrets/deployer")
		);
	}

	#[test]
	fn test_merge_preserves_base_when_none() {
		let mut base = SecretsConfigLayer {
			signing_key_file: Some("keys/deployer".to_string()),
			api_key_file: None,
		};
		base.merge(SecretsConfigLayer {
			signing_key_file: None,
			api_key_file: Some("keys/infura".to_string()),
		});
		assert_eq!(base.signing_key_file.as_deref(), Some("keys/deployer"));
		assert_eq!(base.api_key_file.as_deref(), Some("keys/infura"));
	}
}
