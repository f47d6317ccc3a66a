// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Network table: built-in targets, user-declared targets, and the resolved
//! descriptors handed to deployment tooling.

use serde::Deserialize;
use solforge_common_config::{LoadedSecret, SecretString, REDACTED};
use url::Url;

use crate::error::ConfigError;
use crate::registry::Secrets;

/// Placeholder substituted with the gateway API key in endpoint templates.
pub const API_KEY_PLACEHOLDER: &str = "{api_key}";

pub const LOCAL_NETWORK: &str = "hardhat";
pub const LOCAL_CHAIN_ID: u64 = 1337;

/// A network every project gets without declaring it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinNetwork {
	pub name: &'static str,
	/// `None` for the in-process network.
	pub url: Option<&'static str>,
	pub chain_id: Option<u64>,
}

pub const BUILTIN_NETWORKS: &[BuiltinNetwork] = &[
	BuiltinNetwork {
		name: LOCAL_NETWORK,
		url: None,
		chain_id: Some(LOCAL_CHAIN_ID),
	},
	// Polygon, direct RPC providers
	BuiltinNetwork {
		name: "mumbai",
		url: Some("https://rpc-mumbai.matic.today"),
		chain_id: None,
	},
	BuiltinNetwork {
		name: "matic",
		url: Some("https://rpc-mainnet.maticvigil.com"),
		chain_id: None,
	},
	// Infura gateway
	BuiltinNetwork {
		name: "infura_mumbai",
		url: Some("https://polygon-mumbai.infura.io/v3/{api_key}"),
		chain_id: None,
	},
	BuiltinNetwork {
		name: "infura_matic",
		url: Some("https://polygon-mainnet.infura.io/v3/{api_key}"),
		chain_id: None,
	},
	BuiltinNetwork {
		name: "infura_rinkedby",
		url: Some("https://rinkeby.infura.io/v3/{api_key}"),
		chain_id: None,
	},
	// Arbitrum
	BuiltinNetwork {
		name: "rinkedby",
		url: Some("https://rinkeby.arbitrum.io/rpc"),
		chain_id: None,
	},
];

impl BuiltinNetwork {
	pub fn to_config(&self) -> NetworkConfig {
		NetworkConfig {
			name: self.name.to_string(),
			url: self.url.map(str::to_string),
			chain_id: self.chain_id,
		}
	}
}

/// One network entry before secrets are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkConfig {
	pub name: String,
	/// Endpoint template; `None` means the in-process network.
	pub url: Option<String>,
	pub chain_id: Option<u64>,
}

impl NetworkConfig {
	/// Apply secrets: resolve the endpoint template and attach the signing
	/// credential to remote networks.
	pub fn describe(&self, secrets: &Secrets) -> Result<NetworkDescriptor, ConfigError> {
		match &self.url {
			None => Ok(NetworkDescriptor {
				name: self.name.clone(),
				chain_id: self.chain_id,
				endpoint: None,
				credentials: Vec::new(),
			}),
			Some(template) => {
				let endpoint = Endpoint::resolve(&self.name, template, &secrets.api_key)?;
				Ok(NetworkDescriptor {
					name: self.name.clone(),
					chain_id: self.chain_id,
					endpoint: Some(endpoint),
					credentials: vec![secrets.signing_key.clone()],
				})
			}
		}
	}
}

/// A `[[networks]]` entry from the settings file.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct NetworkConfigLayer {
	#[serde(default)]
	pub name: Option<String>,
	#[serde(default)]
	pub url: Option<String>,
	#[serde(default)]
	pub chain_id: Option<u64>,
}

impl NetworkConfigLayer {
	/// User-declared networks are always remote, so both name and url are
	/// required.
	pub fn finalize(self, index: usize) -> Result<NetworkConfig, ConfigError> {
		let name = self
			.name
			.map(|n| n.trim().to_string())
			.filter(|n| !n.is_empty())
			.ok_or_else(|| {
				ConfigError::invalid_value(format!("networks[{index}].name"), "must be set")
			})?;

		let url = self
			.url
			.map(|u| u.trim().to_string())
			.filter(|u| !u.is_empty())
			.ok_or_else(|| {
				ConfigError::invalid_value(
					format!("networks.{name}.url"),
					"remote networks need an endpoint url",
				)
			})?;

		Ok(NetworkConfig {
			name,
			url: Some(url),
			chain_id: self.chain_id,
		})
	}
}

/// A remote endpoint after template substitution.
///
/// The resolved URL may embed the gateway API key, so it is held as a
/// secret; [`Endpoint::redacted`] is the form to show people.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
	template: String,
	resolved: SecretString,
}

impl Endpoint {
	pub fn resolve(
		network: &str,
		template: &str,
		api_key: &LoadedSecret,
	) -> Result<Self, ConfigError> {
		let templated = template.contains(API_KEY_PLACEHOLDER);
		let resolved = if templated {
			if !is_path_segment(api_key.expose()) {
				return Err(ConfigError::InvalidApiKey {
					network: network.to_string(),
				});
			}
			template.replace(API_KEY_PLACEHOLDER, api_key.expose())
		} else {
			template.to_string()
		};

		if resolved.contains('{') || resolved.contains('}') || resolved.contains("${") {
			return Err(ConfigError::invalid_url(network, "unresolved template placeholder"));
		}

		let parsed =
			Url::parse(&resolved).map_err(|e| ConfigError::invalid_url(network, e.to_string()))?;
		match parsed.scheme() {
			"http" | "https" | "ws" | "wss" => {}
			other => {
				return Err(ConfigError::invalid_url(
					network,
					format!("unsupported scheme '{other}'"),
				))
			}
		}
		if parsed.host_str().is_none() {
			return Err(ConfigError::invalid_url(network, "missing host"));
		}

		if templated {
			let in_path = parsed
				.path_segments()
				.is_some_and(|mut segments| segments.any(|s| s == api_key.expose()));
			if !in_path {
				return Err(ConfigError::invalid_url(
					network,
					format!("{API_KEY_PLACEHOLDER} must be a whole path segment"),
				));
			}
		}

		Ok(Self {
			template: template.to_string(),
			resolved: SecretString::new(resolved),
		})
	}

	/// The URL to hand to an RPC client.
	pub fn url(&self) -> &str {
		self.resolved.expose()
	}

	/// The URL with any API key replaced by a redaction marker.
	pub fn redacted(&self) -> String {
		self.template.replace(API_KEY_PLACEHOLDER, REDACTED)
	}

	pub fn template(&self) -> &str {
		&self.template
	}

	/// Whether the endpoint goes through the multi-tenant gateway.
	pub fn is_templated(&self) -> bool {
		self.template.contains(API_KEY_PLACEHOLDER)
	}
}

/// RFC 3986 `pchar` without percent-encoding, so the URL parser keeps the
/// key verbatim. Dot segments are normalized away and are rejected too.
fn is_path_segment(value: &str) -> bool {
	!value.is_empty()
		&& value != "."
		&& value != ".."
		&& value.chars().all(|c| {
			c.is_ascii_alphanumeric()
				|| matches!(
					c,
					'-' | '.' | '_' | '~' | '!' | '$' | '&' | '\'' | '(' | ')' | '*' | '+' | ','
						| ';' | '=' | ':' | '@'
				)
		})
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkKind {
	/// Simulated in the tool's own process; no endpoint, no credentials.
	InProcess,
	Remote,
}

/// One deployable target, fully resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkDescriptor {
	name: String,
	chain_id: Option<u64>,
	endpoint: Option<Endpoint>,
	credentials: Vec<LoadedSecret>,
}

impl NetworkDescriptor {
	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn chain_id(&self) -> Option<u64> {
		self.chain_id
	}

	pub fn endpoint(&self) -> Option<&Endpoint> {
		self.endpoint.as_ref()
	}

	pub fn url(&self) -> Option<&str> {
		self.endpoint.as_ref().map(Endpoint::url)
	}

	pub fn credentials(&self) -> &[LoadedSecret] {
		&self.credentials
	}

	pub fn kind(&self) -> NetworkKind {
		if self.endpoint.is_some() {
			NetworkKind::Remote
		} else {
			NetworkKind::InProcess
		}
	}

	pub fn is_remote(&self) -> bool {
		self.kind() == NetworkKind::Remote
	}

	pub fn uses_gateway(&self) -> bool {
		self.endpoint.as_ref().is_some_and(Endpoint::is_templated)
	}

	pub fn uses_placeholder_credential(&self) -> bool {
		self.credentials.iter().any(LoadedSecret::is_placeholder)
	}
}
