// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Solidity compiler configuration section.

use semver::{Version, VersionReq};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_COMPILER_VERSION: &str = "0.8.4";
pub const DEFAULT_OPTIMIZER_RUNS: u32 = 200;

/// Compiler releases the downstream toolchain can fetch.
pub const SUPPORTED_COMPILER_VERSIONS: &str = ">=0.4.11, <0.9.0";

/// Compiler configuration (runtime, fully resolved).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerConfig {
	pub version: String,
	pub optimizer: OptimizerConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OptimizerConfig {
	pub enabled: bool,
	pub runs: u32,
}

impl Default for CompilerConfig {
	fn default() -> Self {
		Self {
			version: DEFAULT_COMPILER_VERSION.to_string(),
			optimizer: OptimizerConfig {
				enabled: true,
				runs: DEFAULT_OPTIMIZER_RUNS,
			},
		}
	}
}

impl CompilerConfig {
	/// Check the version against the supported range and the optimizer
	/// settings against each other. Returns the parsed version.
	pub fn validate(&self) -> Result<Version, ConfigError> {
		let version = Version::parse(&self.version).map_err(|e| {
			ConfigError::invalid_compiler("version", format!("'{}': {e}", self.version))
		})?;

		if !version.pre.is_empty() {
			return Err(ConfigError::invalid_compiler(
				"version",
				format!("'{}': pre-release compilers are not supported", self.version),
			));
		}

		let supported = VersionReq::parse(SUPPORTED_COMPILER_VERSIONS)
			.map_err(|e| ConfigError::invalid_compiler("version", e.to_string()))?;
		if !supported.matches(&version) {
			return Err(ConfigError::invalid_compiler(
				"version",
				format!(
					"'{}' is outside the supported range {SUPPORTED_COMPILER_VERSIONS}",
					self.version
				),
			));
		}

		if self.optimizer.enabled && self.optimizer.runs == 0 {
			return Err(ConfigError::invalid_compiler(
				"optimizer.runs",
				"must be greater than zero when the optimizer is enabled",
			));
		}

		Ok(version)
	}
}

/// Compiler configuration layer (partial, for merging).
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct CompilerConfigLayer {
	#[serde(default)]
	pub version: Option<String>,
	#[serde(default)]
	pub optimizer_enabled: Option<bool>,
	#[serde(default)]
	pub optimizer_runs: Option<u32>,
}

impl CompilerConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.version.is_some() {
			self.version = other.version;
		}
		if other.optimizer_enabled.is_some() {
			self.optimizer_enabled = other.optimizer_enabled;
		}
		if other.optimizer_runs.is_some() {
			self.optimizer_runs = other.optimizer_runs;
		}
	}

	pub fn finalize(self) -> CompilerConfig {
		CompilerConfig {
			version: self
				.version
				.unwrap_or_else(|| DEFAULT_COMPILER_VERSION.to_string()),
			optimizer: OptimizerConfig {
				enabled: self.optimizer_enabled.unwrap_or(true),
				runs: self.optimizer_runs.unwrap_or(DEFAULT_OPTIMIZER_RUNS),
			},
		}
	}
}
