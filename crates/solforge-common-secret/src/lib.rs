// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Secret wrapper type.
//!
//! [`Secret<T>`] holds a credential (signing key, gateway project id) and
//! refuses to show it through `Debug`, `Display` or `Serialize`. The only
//! way to reach the value is an explicit call to [`Secret::expose`], which
//! keeps every read of a credential greppable.
//!
//! The wrapped value is zeroized when the secret is dropped.

use std::fmt;

use zeroize::Zeroize;

/// Text emitted in place of a secret value.
pub const REDACTED: &str = "[REDACTED]";

/// A value that must never be logged or printed.
#[derive(Clone, Default)]
pub struct Secret<T: Zeroize> {
	inner: T,
}

/// The common case: a textual credential.
pub type SecretString = Secret<String>;

impl<T: Zeroize> Secret<T> {
	pub fn new(inner: T) -> Self {
		Self { inner }
	}

	/// Borrow the raw value.
	pub fn expose(&self) -> &T {
		&self.inner
	}
}

impl Secret<String> {
	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}
}

impl From<String> for SecretString {
	fn from(value: String) -> Self {
		Self::new(value)
	}
}

impl From<&str> for SecretString {
	fn from(value: &str) -> Self {
		Self::new(value.to_string())
	}
}

impl<T: Zeroize> Drop for Secret<T> {
	fn drop(&mut self) {
		self.inner.zeroize();
	}
}

impl<T: Zeroize + PartialEq> PartialEq for Secret<T> {
	fn eq(&self, other: &Self) -> bool {
		self.inner == other.inner
	}
}

impl<T: Zeroize + Eq> Eq for Secret<T> {}

impl<T: Zeroize> fmt::Debug for Secret<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(REDACTED)
	}
}

impl<T: Zeroize> fmt::Display for Secret<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(REDACTED)
	}
}

#[cfg(feature = "serde")]
impl<T: Zeroize> serde::Serialize for Secret<T> {
	fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(REDACTED)
	}
}

#[cfg(feature = "serde")]
impl<'de, T: Zeroize + serde::Deserialize<'de>> serde::Deserialize<'de> for Secret<T> {
	fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		T::deserialize(deserializer).map(Self::new)
	}
}
