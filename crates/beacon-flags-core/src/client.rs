// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Client protocol for typed flag lookups and context binding.
//!
//! Evaluation context is bound client-wide through
//! [`FlagsClient::set_evaluation_context`]; the typed lookup accessors do
//! not take a per-call context. The context-setting operation completes
//! through a one-shot callback so transports with asynchronous backends
//! can report success or failure after the fact.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::context::FlagsEvaluationContext;
use crate::details::FlagDetails;
use crate::error::Result;
use crate::value::FlagValue;

/// Completion callback for [`FlagsClient::set_evaluation_context`].
///
/// Fired exactly once with the outcome. A client that fires it more than
/// once violates the protocol; `FnOnce` makes that unrepresentable for
/// well-typed callers.
pub type SetContextCallback = Box<dyn FnOnce(Result<()>) + Send>;

/// Protocol the Beacon flags client exposes to adapters.
///
/// Each typed accessor returns the flag's value when it exists with the
/// requested shape, and otherwise falls back to the supplied default with
/// the [`reason::DEFAULT`](crate::details::reason::DEFAULT) reason code.
pub trait FlagsClient: Send + Sync {
	/// Looks up a boolean flag.
	fn get_boolean_details(&self, key: &str, default_value: bool) -> FlagDetails<bool>;

	/// Looks up a string flag.
	fn get_string_details(&self, key: &str, default_value: &str) -> FlagDetails<String>;

	/// Looks up an integer flag.
	fn get_integer_details(&self, key: &str, default_value: i64) -> FlagDetails<i64>;

	/// Looks up a float flag.
	fn get_double_details(&self, key: &str, default_value: f64) -> FlagDetails<f64>;

	/// Looks up a structured flag.
	fn get_object_details(&self, key: &str, default_value: FlagValue) -> FlagDetails<FlagValue>;

	/// Binds the evaluation context for all subsequent lookups.
	///
	/// `completion` fires exactly once with the outcome.
	fn set_evaluation_context(&self, context: FlagsEvaluationContext, completion: SetContextCallback);
}

#[derive(Debug, Clone)]
struct StoredFlag {
	value: FlagValue,
	variant: Option<String>,
	reason: Option<String>,
}

/// A client over a fixed in-memory flag set.
///
/// Lookups are exact key matches with no targeting rules; a stored value
/// whose shape does not match the requested accessor falls back to the
/// default, the same way a missing flag does. Applied contexts are
/// recorded and the most recent one is readable, which makes this client
/// the reference double for adapter tests and offline use.
#[derive(Debug, Default)]
pub struct StaticFlagsClient {
	flags: HashMap<String, StoredFlag>,
	applied_contexts: Mutex<Vec<FlagsEvaluationContext>>,
}

impl StaticFlagsClient {
	/// Creates a client with no flags.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a flag with just a value.
	pub fn with_flag(self, key: impl Into<String>, value: FlagValue) -> Self {
		self.with_flag_details(key, value, None, None)
	}

	/// Adds a flag with a value, variant label, and reason code.
	pub fn with_flag_details(
		mut self,
		key: impl Into<String>,
		value: FlagValue,
		variant: Option<&str>,
		reason: Option<&str>,
	) -> Self {
		self.flags.insert(
			key.into(),
			StoredFlag {
				value,
				variant: variant.map(str::to_string),
				reason: reason.map(str::to_string),
			},
		);
		self
	}

	/// The most recently applied evaluation context, if any.
	pub fn last_applied_context(&self) -> Option<FlagsEvaluationContext> {
		self.applied_contexts.lock().unwrap().last().cloned()
	}

	/// How many times a context has been applied.
	pub fn applied_context_count(&self) -> usize {
		self.applied_contexts.lock().unwrap().len()
	}

	fn details_for<T>(
		&self,
		key: &str,
		default_value: T,
		extract: impl FnOnce(&StoredFlag) -> Option<T>,
	) -> FlagDetails<T> {
		match self.flags.get(key).and_then(|flag| {
			extract(flag).map(|value| (value, flag.variant.clone(), flag.reason.clone()))
		}) {
			Some((value, variant, reason)) => FlagDetails {
				key: key.to_string(),
				value,
				variant,
				reason,
				error: None,
			},
			None => FlagDetails::fallback(key, default_value),
		}
	}
}

impl FlagsClient for StaticFlagsClient {
	fn get_boolean_details(&self, key: &str, default_value: bool) -> FlagDetails<bool> {
		self.details_for(key, default_value, |flag| flag.value.as_bool())
	}

	fn get_string_details(&self, key: &str, default_value: &str) -> FlagDetails<String> {
		self.details_for(key, default_value.to_string(), |flag| {
			flag.value.as_str().map(str::to_string)
		})
	}

	fn get_integer_details(&self, key: &str, default_value: i64) -> FlagDetails<i64> {
		self.details_for(key, default_value, |flag| flag.value.as_int())
	}

	fn get_double_details(&self, key: &str, default_value: f64) -> FlagDetails<f64> {
		self.details_for(key, default_value, |flag| flag.value.as_double())
	}

	fn get_object_details(&self, key: &str, default_value: FlagValue) -> FlagDetails<FlagValue> {
		self.details_for(key, default_value, |flag| Some(flag.value.clone()))
	}

	fn set_evaluation_context(&self, context: FlagsEvaluationContext, completion: SetContextCallback) {
		self.applied_contexts.lock().unwrap().push(context);
		completion(Ok(()));
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::details::reason;

	#[test]
	fn typed_lookup_returns_stored_value() {
		let client = StaticFlagsClient::new()
			.with_flag_details(
				"checkout.new_flow",
				FlagValue::Bool(true),
				Some("on"),
				Some(reason::TARGETING_MATCH),
			)
			.with_flag("ui.theme", FlagValue::String("dark".to_string()));

		let details = client.get_boolean_details("checkout.new_flow", false);
		assert!(details.value);
		assert_eq!(details.variant.as_deref(), Some("on"));
		assert_eq!(details.reason.as_deref(), Some(reason::TARGETING_MATCH));

		let details = client.get_string_details("ui.theme", "light");
		assert_eq!(details.value, "dark");
	}

	#[test]
	fn missing_flag_falls_back_to_default() {
		let client = StaticFlagsClient::new();
		let details = client.get_string_details("missing", "fallback");
		assert_eq!(details.value, "fallback");
		assert_eq!(details.reason.as_deref(), Some(reason::DEFAULT));
		assert_eq!(details.error, None);
	}

	#[test]
	fn shape_mismatch_falls_back_to_default() {
		let client =
			StaticFlagsClient::new().with_flag("ui.theme", FlagValue::String("dark".to_string()));

		let details = client.get_integer_details("ui.theme", 7);
		assert_eq!(details.value, 7);
		assert_eq!(details.reason.as_deref(), Some(reason::DEFAULT));
	}

	#[test]
	fn object_lookup_returns_any_stored_shape() {
		let client = StaticFlagsClient::new().with_flag("limits", FlagValue::Int(5));
		let details = client.get_object_details("limits", FlagValue::Null);
		assert_eq!(details.value, FlagValue::Int(5));
	}

	#[test]
	fn set_evaluation_context_records_and_completes() {
		let client = StaticFlagsClient::new();
		let context = FlagsEvaluationContext::new("user-42", HashMap::new());

		let (tx, rx) = std::sync::mpsc::channel();
		client.set_evaluation_context(
			context.clone(),
			Box::new(move |result| {
				tx.send(result).unwrap();
			}),
		);

		assert_eq!(rx.try_recv().unwrap(), Ok(()));
		assert_eq!(client.applied_context_count(), 1);
		assert_eq!(client.last_applied_context(), Some(context));
	}
}
