// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Partial project settings, merged source by source.

use serde::Deserialize;

use crate::error::ConfigError;
use crate::sections::{
	CompilerConfigLayer, NetworkConfig, NetworkConfigLayer, SecretsConfigLayer, LOCAL_NETWORK,
};
use crate::ProjectConfig;

/// Project settings as read from one source. Every field is optional so a
/// later source only overrides what it sets.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ProjectConfigLayer {
	#[serde(default)]
	pub default_network: Option<String>,
	#[serde(default)]
	pub compiler: Option<CompilerConfigLayer>,
	#[serde(default)]
	pub secrets: Option<SecretsConfigLayer>,
	/// Extra remote networks; later sources append to earlier ones.
	#[serde(default)]
	pub networks: Option<Vec<NetworkConfigLayer>>,
}

impl ProjectConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.default_network.is_some() {
			self.default_network = other.default_network;
		}
		if let Some(other_compiler) = other.compiler {
			let compiler = self.compiler.get_or_insert_with(Default::default);
			compiler.merge(other_compiler);
		}
		if let Some(other_secrets) = other.secrets {
			let secrets = self.secrets.get_or_insert_with(Default::default);
			secrets.merge(other_secrets);
		}
		if let Some(other_networks) = other.networks {
			self
				.networks
				.get_or_insert_with(Vec::new)
				.extend(other_networks);
		}
	}

	pub fn finalize(self) -> Result<ProjectConfig, ConfigError> {
		let networks = self
			.networks
			.unwrap_or_default()
			.into_iter()
			.enumerate()
			.map(|(index, layer)| layer.finalize(index))
			.collect::<Result<Vec<NetworkConfig>, _>>()?;

		Ok(ProjectConfig {
			default_network: self
				.default_network
				.map(|n| n.trim().to_string())
				.filter(|n| !n.is_empty())
				.unwrap_or_else(|| LOCAL_NETWORK.to_string()),
			compiler: self.compiler.unwrap_or_default().finalize(),
			secrets: self.secrets.unwrap_or_default().finalize(),
			networks,
		})
	}
}
