// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Common configuration primitives for solforge.
//!
//! This crate provides shared types and helpers for configuration across
//! all solforge crates, including:
//!
//! - [`Secret<T>`]: A wrapper type that prevents accidental logging of
//!   sensitive values (re-exported from [`solforge_common_secret`])
//! - [`load_secret_file`]: Loads a credential from a local, untracked file,
//!   falling back to a placeholder when the file is absent or empty

pub mod file;

pub use solforge_common_secret::{Secret, SecretString, REDACTED};

pub use file::{load_secret_file, DefaultReason, LoadedSecret, SecretSource, PLACEHOLDER_SECRET};
