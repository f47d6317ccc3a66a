// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sections.

pub mod compiler;
pub mod network;
pub mod secrets;

pub use compiler::*;
pub use network::*;
pub use secrets::*;
