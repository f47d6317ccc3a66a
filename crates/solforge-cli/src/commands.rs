// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Rendering for each subcommand. Nothing here prints a credential.

use anyhow::Context;
use solforge_config::{Exposure, Registry};

/// One line per network: default marker, name, chain id, redacted endpoint.
pub fn render_networks(registry: &Registry) -> String {
	let width = registry.names().map(str::len).max().unwrap_or(0);
	registry
		.networks()
		.iter()
		.map(|network| {
			let marker = if network.name() == registry.default_network_name() {
				"*"
			} else {
				" "
			};
			let chain = network
				.chain_id()
				.map(|id| id.to_string())
				.unwrap_or_else(|| "-".to_string());
			let endpoint = network
				.endpoint()
				.map(|e| e.redacted())
				.unwrap_or_else(|| "(in-process)".to_string());
			format!(
				"{marker} {name:<width$}  {chain:>6}  {endpoint}\n",
				name = network.name(),
			)
		})
		.collect()
}

/// Summary of a successful build plus any warnings.
pub fn render_check(registry: &Registry) -> String {
	let compiler = registry.compiler();
	let summary = format!(
		"ok: {} networks, default '{}', solc {} (optimizer {}, {} runs)\n",
		registry.networks().len(),
		registry.default_network_name(),
		compiler.version,
		if compiler.optimizer.enabled {
			"on"
		} else {
			"off"
		},
		compiler.optimizer.runs,
	);
	let warnings = registry
		.warnings()
		.iter()
		.map(|warning| format!("warning: {warning}\n"));
	std::iter::once(summary).chain(warnings).collect()
}

pub fn render_export(registry: &Registry, pretty: bool) -> anyhow::Result<String> {
	let exported = registry.export(Exposure::Redacted);
	let json = if pretty {
		exported.to_json_pretty()
	} else {
		exported.to_json()
	};
	json.context("failed to serialize configuration")
}
