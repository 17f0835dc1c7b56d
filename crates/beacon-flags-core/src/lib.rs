// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core types and protocol for the Beacon feature flags client SDK.
//!
//! This crate defines the client-facing surface an adapter binds to:
//!
//! - [`FlagValue`]: the client's value model (no timestamp variant)
//! - [`FlagsEvaluationContext`]: targeting key plus attributes, bound
//!   client-wide rather than per lookup
//! - [`FlagDetails`]: per-lookup value plus evaluation metadata
//! - [`FlagsClient`]: typed lookup accessors and the callback-based
//!   context-setting operation
//!
//! Flag-rule evaluation (targeting, bucketing, rollout) and transport live
//! behind [`FlagsClient`] implementations, not here. [`StaticFlagsClient`]
//! is a fixed-flag reference implementation for tests and offline use.

pub mod client;
pub mod context;
pub mod details;
pub mod error;
pub mod value;

pub use client::{FlagsClient, SetContextCallback, StaticFlagsClient};
pub use context::FlagsEvaluationContext;
pub use details::{reason, FlagDetails};
pub use error::{FlagsError, Result};
pub use value::FlagValue;
