// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The network registry: every deployable target plus the compiler block,
//! built once from the loaded secrets and never mutated afterwards.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use solforge_common_config::{load_secret_file, LoadedSecret, PLACEHOLDER_SECRET};
use tracing::{info, warn};

use crate::error::ConfigError;
use crate::export::{ExportedConfig, Exposure};
use crate::sections::{CompilerConfig, NetworkDescriptor, SecretsConfig, BUILTIN_NETWORKS};
use crate::ProjectConfig;

/// The two credentials a registry is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Secrets {
	/// Used by every remote network.
	pub signing_key: LoadedSecret,
	/// Gateway project id, embedded in gateway endpoint URLs.
	pub api_key: LoadedSecret,
}

impl Secrets {
	/// Read both secret files. Never fails; missing files fall back to
	/// [`PLACEHOLDER_SECRET`].
	pub fn load(root: &Path, config: &SecretsConfig) -> Self {
		Self {
			signing_key: load_secret_file(config.signing_key_path(root), PLACEHOLDER_SECRET),
			api_key: load_secret_file(config.api_key_path(root), PLACEHOLDER_SECRET),
		}
	}
}

/// Non-fatal findings from a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryWarning {
	/// Remote networks that would sign with the placeholder key.
	PlaceholderCredential { networks: Vec<String> },
	/// Gateway networks whose URL carries the placeholder project id.
	PlaceholderApiKey { networks: Vec<String> },
}

impl fmt::Display for RegistryWarning {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::PlaceholderCredential { networks } => write!(
				f,
				"placeholder signing key in use for {}; deployments will fail or sign with a throwaway key",
				networks.join(", ")
			),
			Self::PlaceholderApiKey { networks } => write!(
				f,
				"placeholder gateway API key in use for {}",
				networks.join(", ")
			),
		}
	}
}

/// Resolved, validated configuration handed to deployment tooling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
	default_network: String,
	default_index: usize,
	networks: Vec<NetworkDescriptor>,
	compiler: CompilerConfig,
	warnings: Vec<RegistryWarning>,
}

impl Registry {
	pub fn default_network_name(&self) -> &str {
		&self.default_network
	}

	pub fn default_network(&self) -> &NetworkDescriptor {
		&self.networks[self.default_index]
	}

	pub fn network(&self, name: &str) -> Option<&NetworkDescriptor> {
		self.networks.iter().find(|n| n.name() == name)
	}

	/// Networks in declaration order: built-ins first, then extras.
	pub fn networks(&self) -> &[NetworkDescriptor] {
		&self.networks
	}

	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.networks.iter().map(NetworkDescriptor::name)
	}

	pub fn compiler(&self) -> &CompilerConfig {
		&self.compiler
	}

	pub fn warnings(&self) -> &[RegistryWarning] {
		&self.warnings
	}

	pub fn export(&self, exposure: Exposure) -> ExportedConfig {
		ExportedConfig::from_registry(self, exposure)
	}
}

/// Build the registry with default project settings.
pub fn build(secrets: &Secrets) -> Result<Registry, ConfigError> {
	build_with(secrets, &ProjectConfig::default())
}

/// Build the registry from secrets and resolved project settings.
///
/// Fails on duplicate names, a dangling default network, unusable compiler
/// settings or a malformed endpoint. Placeholder credentials only produce
/// warnings.
pub fn build_with(secrets: &Secrets, project: &ProjectConfig) -> Result<Registry, ConfigError> {
	project.compiler.validate()?;

	let mut networks = Vec::with_capacity(BUILTIN_NETWORKS.len() + project.networks.len());
	for builtin in BUILTIN_NETWORKS {
		networks.push(builtin.to_config().describe(secrets)?);
	}
	for extra in &project.networks {
		networks.push(extra.describe(secrets)?);
	}

	let mut seen = HashSet::with_capacity(networks.len());
	for network in &networks {
		if !seen.insert(network.name()) {
			return Err(ConfigError::DuplicateNetwork(network.name().to_string()));
		}
	}

	let default_index = networks
		.iter()
		.position(|n| n.name() == project.default_network)
		.ok_or_else(|| ConfigError::UnknownDefaultNetwork(project.default_network.clone()))?;

	let warnings = collect_warnings(&networks, secrets);
	for warning in &warnings {
		warn!(%warning, "registry built with placeholder secret");
	}

	info!(
		default_network = %project.default_network,
		networks = networks.len(),
		compiler = %project.compiler.version,
		optimizer_enabled = project.compiler.optimizer.enabled,
		optimizer_runs = project.compiler.optimizer.runs,
		signing_key_source = ?secrets.signing_key.source,
		api_key_source = ?secrets.api_key.source,
		"Network registry built"
	);

	Ok(Registry {
		default_network: project.default_network.clone(),
		default_index,
		networks,
		compiler: project.compiler.clone(),
		warnings,
	})
}

fn collect_warnings(networks: &[NetworkDescriptor], secrets: &Secrets) -> Vec<RegistryWarning> {
	let mut warnings = Vec::new();

	let placeholder_signers: Vec<String> = networks
		.iter()
		.filter(|n| n.is_remote() && n.uses_placeholder_credential())
		.map(|n| n.name().to_string())
		.collect();
	if !placeholder_signers.is_empty() {
		warnings.push(RegistryWarning::PlaceholderCredential {
			networks: placeholder_signers,
		});
	}

	if secrets.api_key.is_placeholder() {
		let placeholder_gateways: Vec<String> = networks
			.iter()
			.filter(|n| n.uses_gateway())
			.map(|n| n.name().to_string())
			.collect();
		if !placeholder_gateways.is_empty() {
			warnings.push(RegistryWarning::PlaceholderApiKey {
				networks: placeholder_gateways,
			});
		}
	}

	warnings
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::sections::{NetworkConfig, NetworkKind, LOCAL_CHAIN_ID, LOCAL_NETWORK};
	use solforge_common_config::DefaultReason;

	fn file_secrets(signing: &str, api: &str) -> Secrets {
		Secrets {
			signing_key: LoadedSecret::from_file(signing),
			api_key: LoadedSecret::from_file(api),
		}
	}

	fn placeholder_secrets() -> Secrets {
		Secrets {
			signing_key: LoadedSecret::defaulted(PLACEHOLDER_SECRET, DefaultReason::Absent),
			api_key: LoadedSecret::defaulted(PLACEHOLDER_SECRET, DefaultReason::Absent),
		}
	}

	fn extra(name: &str, url: &str) -> NetworkConfig {
		NetworkConfig {
			name: name.to_string(),
			url: Some(url.to_string()),
			chain_id: None,
		}
	}

	#[test]
	fn test_build_contains_builtins_in_order() {
		let registry = build(&file_secrets("deadbeef", "myproject")).unwrap();
		let names: Vec<_> = registry.names().collect();
		assert_eq!(
			names,
			vec![
				"hardhat",
				"mumbai",
				"matic",
				"infura_mumbai",
				"infura_matic",
				"infura_rinkedby",
				"rinkedby"
			]
		);
	}

	#[test]
	fn test_default_network_is_local() {
		let registry = build(&file_secrets("deadbeef", "myproject")).unwrap();
		assert_eq!(registry.default_network_name(), LOCAL_NETWORK);
		let local = registry.default_network();
		assert_eq!(local.kind(), NetworkKind::InProcess);
		assert_eq!(local.chain_id(), Some(LOCAL_CHAIN_ID));
	}

	#[test]
	fn test_build_is_idempotent() {
		let secrets = file_secrets("deadbeef", "myproject");
		assert_eq!(build(&secrets).unwrap(), build(&secrets).unwrap());

		let secrets = placeholder_secrets();
		assert_eq!(build(&secrets).unwrap(), build(&secrets).unwrap());
	}

	#[test]
	fn test_every_remote_network_shares_signing_key() {
		let registry = build(&file_secrets("deadbeef", "myproject")).unwrap();
		for network in registry.networks().iter().filter(|n| n.is_remote()) {
			let accounts: Vec<_> = network.credentials().iter().map(|c| c.expose()).collect();
			assert_eq!(accounts, vec!["deadbeef"], "{}", network.name());
		}
	}

	#[test]
	fn test_gateway_urls_embed_api_key() {
		let registry = build(&file_secrets("deadbeef", "XYZ")).unwrap();
		let gateways: Vec<_> = registry.networks().iter().filter(|n| n.uses_gateway()).collect();
		assert_eq!(gateways.len(), 3);
		for network in gateways {
			let url = network.url().unwrap();
			assert!(url.ends_with("/v3/XYZ"), "{url}");
			assert!(!url.contains("${"));
			assert!(!url.contains("{api_key}"));
		}
	}

	#[test]
	fn test_file_secrets_produce_no_warnings() {
		let registry = build(&file_secrets("deadbeef", "myproject")).unwrap();
		assert!(registry.warnings().is_empty());
	}

	#[test]
	fn test_placeholder_secrets_warn_once_each() {
		let registry = build(&placeholder_secrets()).unwrap();
		assert_eq!(registry.warnings().len(), 2);

		let RegistryWarning::PlaceholderCredential { networks } = &registry.warnings()[0] else {
			panic!("expected placeholder credential warning");
		};
		assert_eq!(networks.len(), 6);
		assert!(!networks.contains(&"hardhat".to_string()));

		let RegistryWarning::PlaceholderApiKey { networks } = &registry.warnings()[1] else {
			panic!("expected placeholder api key warning");
		};
		assert_eq!(
			networks,
			&vec![
				"infura_mumbai".to_string(),
				"infura_matic".to_string(),
				"infura_rinkedby".to_string()
			]
		);
	}

	#[test]
	fn test_placeholder_written_into_file_still_warns() {
		let registry = build(&file_secrets(PLACEHOLDER_SECRET, "myproject")).unwrap();
		assert!(matches!(
			registry.warnings(),
			[RegistryWarning::PlaceholderCredential { .. }]
		));
	}

	#[test]
	fn test_duplicate_with_builtin_rejected() {
		let project = ProjectConfig {
			networks: vec![extra("matic", "https://polygon-rpc.com")],
			..Default::default()
		};
		let err = build_with(&file_secrets("deadbeef", "myproject"), &project).unwrap_err();
		assert!(matches!(err, ConfigError::DuplicateNetwork(ref name) if name == "matic"));
		assert!(err.is_invalid_registry());
	}

	#[test]
	fn test_duplicate_extras_rejected() {
		let project = ProjectConfig {
			networks: vec![
				extra("fork", "http://127.0.0.1:8545"),
				extra("fork", "http://127.0.0.1:8546"),
			],
			..Default::default()
		};
		let err = build_with(&file_secrets("deadbeef", "myproject"), &project).unwrap_err();
		assert!(matches!(err, ConfigError::DuplicateNetwork(ref name) if name == "fork"));
	}

	#[test]
	fn test_dangling_default_rejected() {
		let project = ProjectConfig {
			default_network: "goerli".to_string(),
			..Default::default()
		};
		let err = build_with(&file_secrets("deadbeef", "myproject"), &project).unwrap_err();
		assert!(matches!(err, ConfigError::UnknownDefaultNetwork(ref name) if name == "goerli"));
	}

	#[test]
	fn test_default_may_point_at_extra_network() {
		let project = ProjectConfig {
			default_network: "fork".to_string(),
			networks: vec![extra("fork", "http://127.0.0.1:8545")],
			..Default::default()
		};
		let registry = build_with(&file_secrets("deadbeef", "myproject"), &project).unwrap();
		assert_eq!(registry.default_network().name(), "fork");
		assert_eq!(registry.default_network().url(), Some("http://127.0.0.1:8545"));
	}

	#[test]
	fn test_bad_compiler_rejected() {
		let mut project = ProjectConfig::default();
		project.compiler.version = "0.9.1".to_string();
		let err = build_with(&file_secrets("deadbeef", "myproject"), &project).unwrap_err();
		assert!(matches!(err, ConfigError::InvalidCompiler { .. }));
	}

	#[test]
	fn test_bad_api_key_rejected() {
		let err = build(&file_secrets("deadbeef", "my project")).unwrap_err();
		assert!(matches!(err, ConfigError::InvalidApiKey { .. }));
	}

	#[test]
	fn test_registry_debug_does_not_leak() {
		let registry = build(&file_secrets("deadbeef", "myproject")).unwrap();
		let rendered = format!("{registry:?}");
		assert!(!rendered.contains("deadbeef"));
		assert!(!rendered.contains("myproject"));
	}

	#[test]
	fn test_secrets_load_from_root() {
		let dir = tempfile::TempDir::new().unwrap();
		std::fs::write(dir.path().join(".secret"), "deadbeef\n").unwrap();
		let secrets = Secrets::load(dir.path(), &SecretsConfig::default());
		assert_eq!(secrets.signing_key.expose(), "deadbeef");
		assert_eq!(
			secrets.api_key.source,
			solforge_common_config::SecretSource::Default(DefaultReason::Absent)
		);
	}
}
