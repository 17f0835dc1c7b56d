// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Per-lookup flag details returned by the client.

use serde::{Deserialize, Serialize};

/// Reason codes the client attaches to lookup results.
pub mod reason {
	/// The requested flag was not found; the supplied default was returned.
	pub const DEFAULT: &str = "DEFAULT";
	/// The flag has a single fixed value.
	pub const STATIC: &str = "STATIC";
	/// A targeting rule matched the evaluation context.
	pub const TARGETING_MATCH: &str = "TARGETING_MATCH";
	/// Evaluation failed; the supplied default was returned.
	pub const ERROR: &str = "ERROR";
}

/// The outcome of one typed flag lookup.
///
/// Owned by the client; adapters read it and never mutate it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlagDetails<T> {
	/// The flag key that was looked up.
	pub key: String,
	/// The evaluated (or default) value.
	pub value: T,
	/// Label of the configured variation, if one matched.
	pub variant: Option<String>,
	/// Why this value was returned (see [`reason`]).
	pub reason: Option<String>,
	/// Client-side evaluation error, if any.
	pub error: Option<String>,
}

impl<T> FlagDetails<T> {
	/// Creates details for a successfully evaluated flag.
	pub fn new(key: impl Into<String>, value: T) -> Self {
		Self {
			key: key.into(),
			value,
			variant: None,
			reason: None,
			error: None,
		}
	}

	/// Creates details for a flag that fell back to its default value.
	pub fn fallback(key: impl Into<String>, default_value: T) -> Self {
		Self {
			key: key.into(),
			value: default_value,
			variant: None,
			reason: Some(reason::DEFAULT.to_string()),
			error: None,
		}
	}

	/// Sets the variant label.
	pub fn with_variant(mut self, variant: impl Into<String>) -> Self {
		self.variant = Some(variant.into());
		self
	}

	/// Sets the reason code.
	pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
		self.reason = Some(reason.into());
		self
	}

	/// Sets the evaluation error message.
	pub fn with_error(mut self, error: impl Into<String>) -> Self {
		self.error = Some(error.into());
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn fallback_carries_default_reason() {
		let details = FlagDetails::fallback("checkout.new_flow", false);
		assert_eq!(details.key, "checkout.new_flow");
		assert!(!details.value);
		assert_eq!(details.variant, None);
		assert_eq!(details.reason.as_deref(), Some(reason::DEFAULT));
		assert_eq!(details.error, None);
	}

	#[test]
	fn builder_chain() {
		let details = FlagDetails::new("ui.theme", "dark".to_string())
			.with_variant("dark")
			.with_reason(reason::TARGETING_MATCH);

		assert_eq!(details.value, "dark");
		assert_eq!(details.variant.as_deref(), Some("dark"));
		assert_eq!(details.reason.as_deref(), Some(reason::TARGETING_MATCH));
	}
}
