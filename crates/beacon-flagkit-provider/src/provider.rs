// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The provider façade wiring the Beacon client into the flagkit contract.

use std::sync::Arc;

use async_trait::async_trait;
use futures::stream::{self, BoxStream, StreamExt};
use tokio::sync::oneshot;
use tracing::{debug, warn};

use beacon_flags_core::{FlagDetails, FlagsClient};
use flagkit::{
	EvaluationContext, EvaluationResult, FeatureProvider, ProviderError, ProviderEvent,
	ProviderMetadata, Result, Value,
};

use crate::context::{to_client_context, ContextPolicy};
use crate::convert;
use crate::metadata::build_flag_metadata;

/// Flagkit provider backed by a Beacon flags client.
///
/// The provider holds no mutable state of its own; the current evaluation
/// context lives in the wrapped client and is (re)established through the
/// lifecycle hooks. Typed evaluations are synchronous transformations over
/// data the client already holds.
///
/// Per-call evaluation contexts are a capability gap: the wrapped client
/// binds context only at `set_evaluation_context` time, so a context passed
/// to an individual evaluation feeds the result's metadata map but does not
/// influence evaluation routing.
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
///
/// use beacon_flagkit_provider::{BeaconProvider, ContextPolicy};
/// use flagkit::{EvaluationContext, FeatureProvider, Value};
///
/// # async fn run(client: Arc<dyn beacon_flags_core::FlagsClient>) -> flagkit::Result<()> {
/// let provider = BeaconProvider::new(client).with_context_policy(ContextPolicy::PreserveTypes);
///
/// let context = EvaluationContext::new("user-42").with_attribute("plan", Value::from("pro"));
/// provider.initialize(Some(&context)).await?;
///
/// let result = provider.get_boolean_evaluation("checkout.new_flow", false, None)?;
/// # Ok(())
/// # }
/// ```
pub struct BeaconProvider {
	client: Arc<dyn FlagsClient>,
	policy: ContextPolicy,
	metadata: ProviderMetadata,
}

impl BeaconProvider {
	/// Creates a provider over the given client with the default context
	/// policy ([`ContextPolicy::PreserveTypes`]).
	pub fn new(client: Arc<dyn FlagsClient>) -> Self {
		Self {
			client,
			policy: ContextPolicy::default(),
			metadata: ProviderMetadata::new("Beacon Flagkit Provider"),
		}
	}

	/// Sets the context conversion policy. Fixed for the provider's
	/// lifetime once it is registered.
	pub fn with_context_policy(mut self, policy: ContextPolicy) -> Self {
		self.policy = policy;
		self
	}

	/// The context conversion policy in effect.
	pub fn context_policy(&self) -> ContextPolicy {
		self.policy
	}

	/// Converts and pushes a context to the wrapped client, adapting its
	/// one-shot completion callback into an awaitable result.
	async fn push_context(&self, context: &EvaluationContext) -> Result<()> {
		let client_context = to_client_context(context, self.policy);

		let (tx, rx) = oneshot::channel();
		self.client.set_evaluation_context(
			client_context,
			Box::new(move |result| {
				let _ = tx.send(result);
			}),
		);

		match rx.await {
			Ok(Ok(())) => Ok(()),
			Ok(Err(error)) => {
				warn!(%error, "flags client rejected the evaluation context");
				Err(ProviderError::underlying(error))
			}
			Err(error) => {
				warn!("flags client dropped the context completion callback");
				Err(ProviderError::underlying(error))
			}
		}
	}
}

fn finish<T>(
	details: FlagDetails<T>,
	context: Option<&EvaluationContext>,
) -> EvaluationResult<T> {
	let flag_metadata = build_flag_metadata(&details.key, context);
	EvaluationResult {
		value: details.value,
		variant: details.variant,
		reason: details.reason,
		flag_metadata,
	}
}

#[async_trait]
impl FeatureProvider for BeaconProvider {
	fn metadata(&self) -> &ProviderMetadata {
		&self.metadata
	}

	async fn initialize(&self, initial_context: Option<&EvaluationContext>) -> Result<()> {
		if let Some(context) = initial_context {
			debug!(targeting_key = %context.targeting_key(), "applying initial evaluation context");
			self.push_context(context).await?;
		}
		Ok(())
	}

	async fn on_context_set(
		&self,
		_old_context: Option<&EvaluationContext>,
		new_context: &EvaluationContext,
	) -> Result<()> {
		debug!(targeting_key = %new_context.targeting_key(), "applying evaluation context");
		self.push_context(new_context).await
	}

	fn get_boolean_evaluation(
		&self,
		key: &str,
		default_value: bool,
		context: Option<&EvaluationContext>,
	) -> Result<EvaluationResult<bool>> {
		let details = self.client.get_boolean_details(key, default_value);
		Ok(finish(details, context))
	}

	fn get_string_evaluation(
		&self,
		key: &str,
		default_value: &str,
		context: Option<&EvaluationContext>,
	) -> Result<EvaluationResult<String>> {
		let details = self.client.get_string_details(key, default_value);
		Ok(finish(details, context))
	}

	fn get_integer_evaluation(
		&self,
		key: &str,
		default_value: i64,
		context: Option<&EvaluationContext>,
	) -> Result<EvaluationResult<i64>> {
		let details = self.client.get_integer_details(key, default_value);
		Ok(finish(details, context))
	}

	fn get_double_evaluation(
		&self,
		key: &str,
		default_value: f64,
		context: Option<&EvaluationContext>,
	) -> Result<EvaluationResult<f64>> {
		let details = self.client.get_double_details(key, default_value);
		Ok(finish(details, context))
	}

	fn get_object_evaluation(
		&self,
		key: &str,
		default_value: &Value,
		context: Option<&EvaluationContext>,
	) -> Result<EvaluationResult<Value>> {
		let client_default = convert::flag_value_strict(default_value)?;
		let details = self.client.get_object_details(key, client_default);
		let flag_metadata = build_flag_metadata(&details.key, context);

		Ok(EvaluationResult {
			value: convert::value_from_flag(details.value),
			variant: details.variant,
			reason: details.reason,
			flag_metadata,
		})
	}

	/// The wrapped client has no native event support yet, so this is a
	/// stream that completes without emitting.
	fn observe(&self) -> BoxStream<'static, ProviderEvent> {
		stream::empty().boxed()
	}
}
