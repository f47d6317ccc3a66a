// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Loading secrets from local, untracked files.
//!
//! A missing secret file is a normal state (a fresh checkout before anyone
//! has provisioned credentials), so loading never fails: every problem
//! degrades to the caller's default and is only visible in the logs.

use std::io::ErrorKind;
use std::path::Path;

use solforge_common_secret::SecretString;
use tracing::{debug, warn};

/// Well-known fallback used when no credential has been provisioned.
pub const PLACEHOLDER_SECRET: &str = "01234567890123456789";

/// Why a secret fell back to its default value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DefaultReason {
	/// The file does not exist.
	Absent,
	/// The file exists but holds nothing besides whitespace.
	Empty,
	/// The file exists but could not be read as text.
	Unreadable,
}

/// Where a loaded secret came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SecretSource {
	File,
	Default(DefaultReason),
}

impl SecretSource {
	pub fn is_default(&self) -> bool {
		matches!(self, SecretSource::Default(_))
	}
}

/// A secret value together with its provenance. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedSecret {
	pub value: SecretString,
	pub source: SecretSource,
}

impl LoadedSecret {
	pub fn from_file(value: impl Into<String>) -> Self {
		Self {
			value: SecretString::new(value.into()),
			source: SecretSource::File,
		}
	}

	pub fn defaulted(value: impl Into<String>, reason: DefaultReason) -> Self {
		Self {
			value: SecretString::new(value.into()),
			source: SecretSource::Default(reason),
		}
	}

	/// Borrow the raw credential.
	pub fn expose(&self) -> &str {
		self.value.expose()
	}

	/// True when the value is the well-known placeholder, whether it came
	/// from the default or was written into the file verbatim.
	pub fn is_placeholder(&self) -> bool {
		self.value.expose() == PLACEHOLDER_SECRET
	}
}

/// Load a secret from `path`, falling back to `default`.
///
/// Only leading and trailing whitespace is removed; interior whitespace is
/// preserved because some credential formats depend on it.
pub fn load_secret_file(path: impl AsRef<Path>, default: &str) -> LoadedSecret {
	let path = path.as_ref();

	let content = match std::fs::read_to_string(path) {
		Ok(content) => content,
		Err(e) if e.kind() == ErrorKind::NotFound => {
			debug!(path = %path.display(), "secret file absent, using default");
			return LoadedSecret::defaulted(default, DefaultReason::Absent);
		}
		Err(e) => {
			warn!(path = %path.display(), error = %e, "secret file unreadable, using default");
			return LoadedSecret::defaulted(default, DefaultReason::Unreadable);
		}
	};

	let trimmed = content.trim();
	if trimmed.is_empty() {
		debug!(path = %path.display(), "secret file empty, using default");
		return LoadedSecret::defaulted(default, DefaultReason::Empty);
	}

	debug!(path = %path.display(), "loaded secret from file");
	LoadedSecret::from_file(trimmed)
}
