// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Adaptation of abstraction-side contexts to the client's shape.

use beacon_flags_core::{FlagValue, FlagsEvaluationContext};
use flagkit::EvaluationContext;

use crate::convert;

/// How attribute values cross into the client context.
///
/// The policy is fixed when the provider is constructed; one deployment
/// uses exactly one policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContextPolicy {
	/// Attribute values keep their native shape. Timestamps degrade to
	/// their ISO-8601 rendering, so the conversion cannot fail.
	#[default]
	PreserveTypes,
	/// Every attribute value is rendered as a string, for clients that
	/// only accept string-typed attributes. Cannot fail; loses type
	/// information at the client boundary.
	CoerceToString,
}

/// Builds the client context from an abstraction-side context.
///
/// The targeting key passes through unchanged; an empty key stays empty.
pub fn to_client_context(
	context: &EvaluationContext,
	policy: ContextPolicy,
) -> FlagsEvaluationContext {
	let attributes = context
		.attributes()
		.iter()
		.map(|(key, value)| {
			let converted = match policy {
				ContextPolicy::PreserveTypes => convert::flag_value_lossy(value),
				ContextPolicy::CoerceToString => {
					FlagValue::String(convert::value_to_string(value))
				}
			};
			(key.clone(), converted)
		})
		.collect();

	FlagsEvaluationContext::new(context.targeting_key(), attributes)
}
