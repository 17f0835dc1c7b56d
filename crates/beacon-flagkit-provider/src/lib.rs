// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Flagkit provider backed by the Beacon feature flags client.
//!
//! This crate bridges two independently-defined flag-evaluation
//! interfaces: the Beacon client SDK's typed lookup API
//! ([`beacon_flags_core`]) and the generic flagkit provider contract
//! ([`flagkit`]). The bridge has four parts:
//!
//! - [`convert`]: bidirectional, recursive mapping between the two value
//!   models, with strict and lenient policies for the timestamp gap
//! - [`context`]: adaptation of flagkit evaluation contexts to the
//!   client's shape, under a construction-time [`ContextPolicy`]
//! - [`metadata`]: synthesis of the per-evaluation metadata map
//! - [`provider`]: the [`BeaconProvider`] façade implementing
//!   [`flagkit::FeatureProvider`]
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! use beacon_flagkit_provider::BeaconProvider;
//! use flagkit::{EvaluationContext, FeatureProvider, Value};
//!
//! #[tokio::main]
//! async fn main() -> flagkit::Result<()> {
//! 	let client = beacon_flags::client_from_environment()?;
//! 	let provider = BeaconProvider::new(Arc::new(client));
//!
//! 	let context = EvaluationContext::new("user-42")
//! 		.with_attribute("plan", Value::from("pro"));
//! 	provider.initialize(Some(&context)).await?;
//!
//! 	let enabled = provider
//! 		.get_boolean_evaluation("checkout.new_flow", false, None)?
//! 		.value;
//! 	println!("new flow enabled: {enabled}");
//! 	Ok(())
//! }
//! ```

pub mod context;
pub mod convert;
pub mod metadata;
pub mod provider;

pub use context::ContextPolicy;
pub use metadata::{build_flag_metadata, PROVIDER_NAME};
pub use provider::BeaconProvider;
