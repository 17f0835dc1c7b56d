// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Evaluation context as the Beacon client consumes it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::value::FlagValue;

/// Targeting data applied to the client via
/// [`FlagsClient::set_evaluation_context`](crate::client::FlagsClient::set_evaluation_context).
///
/// The context is bound client-wide; individual flag lookups do not take
/// one. An empty targeting key is valid.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FlagsEvaluationContext {
	pub targeting_key: String,
	pub attributes: HashMap<String, FlagValue>,
}

impl FlagsEvaluationContext {
	/// Creates a context from a targeting key and attribute map.
	pub fn new(targeting_key: impl Into<String>, attributes: HashMap<String, FlagValue>) -> Self {
		Self {
			targeting_key: targeting_key.into(),
			attributes,
		}
	}

	/// Looks up a single attribute by name.
	pub fn attribute(&self, key: &str) -> Option<&FlagValue> {
		self.attributes.get(key)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn attribute_lookup() {
		let context = FlagsEvaluationContext::new(
			"user-42",
			HashMap::from([("plan".to_string(), FlagValue::String("pro".to_string()))]),
		);

		assert_eq!(context.targeting_key, "user-42");
		assert_eq!(
			context.attribute("plan"),
			Some(&FlagValue::String("pro".to_string()))
		);
		assert_eq!(context.attribute("age"), None);
	}

	#[test]
	fn empty_targeting_key_is_allowed() {
		let context = FlagsEvaluationContext::new("", HashMap::new());
		assert_eq!(context.targeting_key, "");
	}
}
