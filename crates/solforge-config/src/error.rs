// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration error types.

use std::path::PathBuf;

/// Errors that can occur while resolving project settings or building the
/// network registry.
///
/// Missing or empty secret files are not errors; the loader substitutes the
/// placeholder and carries on.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	/// Config file exists but could not be read
	#[error("failed to read config file {path}: {source}")]
	FileRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// TOML parsing error
	#[error("TOML parse error in {path}: {source}")]
	TomlParse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	/// Two networks share a name
	#[error("duplicate network name '{0}'")]
	DuplicateNetwork(String),

	/// The default network is not in the registry
	#[error("default network '{0}' is not a configured network")]
	UnknownDefaultNetwork(String),

	/// Compiler version or optimizer settings are unusable
	#[error("invalid compiler {field}: {message}")]
	InvalidCompiler { field: String, message: String },

	/// Endpoint URL did not resolve to a usable URL
	#[error("invalid url for network '{network}': {message}")]
	InvalidUrl { network: String, message: String },

	/// The API key cannot be placed into a URL path. The key itself is never
	/// part of the message.
	#[error("API key for network '{network}' is not a valid URL path segment")]
	InvalidApiKey { network: String },

	/// Invalid value in the settings file
	#[error("invalid value for {key}: {message}")]
	InvalidValue { key: String, message: String },
}

impl ConfigError {
	pub fn invalid_compiler(field: impl Into<String>, message: impl Into<String>) -> Self {
		Self::InvalidCompiler {
			field: field.into(),
			message: message.into(),
		}
	}

	pub fn invalid_url(network: impl Into<String>, message: impl Into<String>) -> Self {
		Self::InvalidUrl {
			network: network.into(),
			message: message.into(),
		}
	}

	pub fn invalid_value(key: impl Into<String>, message: impl Into<String>) -> Self {
		Self::InvalidValue {
			key: key.into(),
			message: message.into(),
		}
	}

	/// Whether this error means the registry itself is inconsistent, as
	/// opposed to the settings file being unreadable.
	pub fn is_invalid_registry(&self) -> bool {
		matches!(
			self,
			Self::DuplicateNetwork(_)
				| Self::UnknownDefaultNetwork(_)
				| Self::InvalidCompiler { .. }
				| Self::InvalidUrl { .. }
				| Self::InvalidApiKey { .. }
		)
	}
}
