// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The configuration object handed to the external build/deploy tool.
//!
//! Shape:
//!
//! ```json
//! {
//!   "defaultNetwork": "hardhat",
//!   "networks": {
//!     "hardhat": { "chainId": 1337 },
//!     "mumbai": { "url": "https://rpc-mumbai.matic.today", "accounts": ["..."] }
//!   },
//!   "solidity": {
//!     "version": "0.8.4",
//!     "settings": { "optimizer": { "enabled": true, "runs": 200 } }
//!   }
//! }
//! ```

use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use solforge_common_config::REDACTED;

use crate::registry::Registry;
use crate::sections::OptimizerConfig;

/// Whether exported credentials carry their real values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exposure {
	/// Real credentials, for the consuming tool.
	Revealed,
	/// Credentials and gateway keys replaced by a marker, for display.
	Redacted,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedConfig {
	pub default_network: String,
	pub networks: ExportedNetworks,
	pub solidity: ExportedSolidity,
}

/// Networks keyed by name, serialized in registry order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExportedNetworks(Vec<(String, ExportedNetwork)>);

impl ExportedNetworks {
	pub fn get(&self, name: &str) -> Option<&ExportedNetwork> {
		self.0.iter().find(|(n, _)| n == name).map(|(_, network)| network)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &ExportedNetwork)> {
		self.0.iter().map(|(name, network)| (name.as_str(), network))
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl Serialize for ExportedNetworks {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.0.len()))?;
		for (name, network) in &self.0 {
			map.serialize_entry(name, network)?;
		}
		map.end()
	}
}

#[derive(Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedNetwork {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub url: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub chain_id: Option<u64>,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub accounts: Vec<String>,
}

// May hold revealed credentials.
impl fmt::Debug for ExportedNetwork {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ExportedNetwork")
			.field("url", &self.url.as_ref().map(|_| REDACTED))
			.field("chain_id", &self.chain_id)
			.field("accounts", &self.accounts.len())
			.finish()
	}
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportedSolidity {
	pub version: String,
	pub settings: ExportedSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportedSettings {
	pub optimizer: OptimizerConfig,
}

impl ExportedConfig {
	pub fn from_registry(registry: &Registry, exposure: Exposure) -> Self {
		let networks = registry
			.networks()
			.iter()
			.map(|network| {
				let url = network.endpoint().map(|endpoint| match exposure {
					Exposure::Revealed => endpoint.url().to_string(),
					Exposure::Redacted => endpoint.redacted(),
				});
				let accounts = network
					.credentials()
					.iter()
					.map(|credential| match exposure {
						Exposure::Revealed => credential.expose().to_string(),
						Exposure::Redacted => REDACTED.to_string(),
					})
					.collect();
				(
					network.name().to_string(),
					ExportedNetwork {
						url,
						chain_id: network.chain_id(),
						accounts,
					},
				)
			})
			.collect();

		let compiler = registry.compiler();
		Self {
			default_network: registry.default_network_name().to_string(),
			networks: ExportedNetworks(networks),
			solidity: ExportedSolidity {
				version: compiler.version.clone(),
				settings: ExportedSettings {
					optimizer: compiler.optimizer,
				},
			},
		}
	}

	pub fn to_json(&self) -> serde_json::Result<String> {
		serde_json::to_string(self)
	}

	pub fn to_json_pretty(&self) -> serde_json::Result<String> {
		serde_json::to_string_pretty(self)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::registry::{build, Secrets};
	use serde_json::{json, Value};
	use solforge_common_config::LoadedSecret;

	fn registry() -> Registry {
		build(&Secrets {
			signing_key: LoadedSecret::from_file("deadbeef"),
			api_key: LoadedSecret::from_file("myproject"),
		})
		.unwrap()
	}

	#[test]
	fn test_revealed_shape() {
		let exported = registry().export(Exposure::Revealed);
		let value: Value = serde_json::from_str(&exported.to_json().unwrap()).unwrap();

		assert_eq!(value["defaultNetwork"], "hardhat");
		assert_eq!(value["networks"]["hardhat"], json!({ "chainId": 1337 }));
		assert_eq!(
			value["networks"]["mumbai"],
			json!({ "url": "https://rpc-mumbai.matic.today", "accounts": ["deadbeef"] })
		);
		assert_eq!(
			value["networks"]["infura_matic"]["url"],
			"https://polygon-mainnet.infura.io/v3/myproject"
		);
		assert_eq!(
			value["solidity"],
			json!({
				"version": "0.8.4",
				"settings": { "optimizer": { "enabled": true, "runs": 200 } }
			})
		);
	}

	#[test]
	fn test_network_order_preserved() {
		let json = registry().export(Exposure::Revealed).to_json().unwrap();
		let hardhat = json.find("\"hardhat\"").unwrap();
		let mumbai = json.find("\"mumbai\"").unwrap();
		let rinkedby = json.find("\"rinkedby\"").unwrap();
		assert!(hardhat < mumbai);
		assert!(mumbai < rinkedby);
	}

	#[test]
	fn test_redacted_hides_every_secret() {
		let exported = registry().export(Exposure::Redacted);
		let json = exported.to_json_pretty().unwrap();
		assert!(!json.contains("deadbeef"));
		assert!(!json.contains("myproject"));
		assert!(json.contains(REDACTED));

		let matic = exported.networks.get("infura_matic").unwrap();
		assert_eq!(
			matic.url.as_deref(),
			Some("https://polygon-mainnet.infura.io/v3/[REDACTED]")
		);
		assert_eq!(matic.accounts, vec![REDACTED.to_string()]);
	}

	#[test]
	fn test_local_network_has_no_accounts() {
		let exported = registry().export(Exposure::Revealed);
		let local = exported.networks.get("hardhat").unwrap();
		assert!(local.url.is_none());
		assert!(local.accounts.is_empty());
		assert_eq!(exported.networks.len(), 7);
	}

	#[test]
	fn test_debug_does_not_leak_revealed_values() {
		let exported = registry().export(Exposure::Revealed);
		let rendered = format!("{exported:?}");
		assert!(!rendered.contains("deadbeef"));
		assert!(!rendered.contains("myproject"));
	}
}
