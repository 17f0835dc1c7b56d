// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Provider contract implemented by flag-evaluation backends.
//!
//! A provider plugs a concrete flag backend into the generic flag API. It
//! exposes five typed evaluation operations, two async lifecycle hooks
//! through which evaluation context is (re)established, and an event
//! stream for lifecycle notifications.

use async_trait::async_trait;
use futures::stream::BoxStream;
use serde::{Deserialize, Serialize};

use crate::context::EvaluationContext;
use crate::error::Result;
use crate::evaluation::EvaluationResult;
use crate::value::Value;

/// Identity of a provider implementation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderMetadata {
	pub name: String,
}

impl ProviderMetadata {
	pub fn new(name: impl Into<String>) -> Self {
		Self { name: name.into() }
	}
}

/// Lifecycle events a provider may emit via [`FeatureProvider::observe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProviderEvent {
	/// The provider is ready to serve evaluations.
	Ready,
	/// The provider entered an error state.
	Error,
	/// Cached flag data may be out of date.
	Stale,
	/// Flag configuration changed upstream.
	ConfigurationChanged,
}

/// Contract a flag-evaluation backend implements to plug into the flag API.
///
/// Lifecycle: a provider is constructed, handed evaluation responsibility
/// via [`initialize`](Self::initialize) (optionally with an initial
/// context), and thereafter receives context transitions through
/// [`on_context_set`](Self::on_context_set). The typed evaluation
/// operations are synchronous, non-blocking transformations over data the
/// backend already holds.
#[async_trait]
pub trait FeatureProvider: Send + Sync {
	/// Identity of this provider.
	fn metadata(&self) -> &ProviderMetadata;

	/// Hands evaluation responsibility to the provider.
	///
	/// If `initial_context` is supplied it is pushed to the backend before
	/// this call completes. Calling twice is undefined behavior inherited
	/// from the backend.
	async fn initialize(&self, initial_context: Option<&EvaluationContext>) -> Result<()>;

	/// Applies a context transition.
	///
	/// `old_context` is accepted for interface compatibility but need not
	/// be consulted; implementations push `new_context` unconditionally
	/// and perform no deduplication.
	async fn on_context_set(
		&self,
		old_context: Option<&EvaluationContext>,
		new_context: &EvaluationContext,
	) -> Result<()>;

	/// Evaluates a boolean flag.
	fn get_boolean_evaluation(
		&self,
		key: &str,
		default_value: bool,
		context: Option<&EvaluationContext>,
	) -> Result<EvaluationResult<bool>>;

	/// Evaluates a string flag.
	fn get_string_evaluation(
		&self,
		key: &str,
		default_value: &str,
		context: Option<&EvaluationContext>,
	) -> Result<EvaluationResult<String>>;

	/// Evaluates an integer flag.
	fn get_integer_evaluation(
		&self,
		key: &str,
		default_value: i64,
		context: Option<&EvaluationContext>,
	) -> Result<EvaluationResult<i64>>;

	/// Evaluates a float flag.
	fn get_double_evaluation(
		&self,
		key: &str,
		default_value: f64,
		context: Option<&EvaluationContext>,
	) -> Result<EvaluationResult<f64>>;

	/// Evaluates a structured flag.
	fn get_object_evaluation(
		&self,
		key: &str,
		default_value: &Value,
		context: Option<&EvaluationContext>,
	) -> Result<EvaluationResult<Value>>;

	/// Subscribes to provider lifecycle events.
	///
	/// Backends without native event support return a stream that
	/// completes without emitting.
	fn observe(&self) -> BoxStream<'static, ProviderEvent>;
}
