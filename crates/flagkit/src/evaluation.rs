// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Per-call evaluation results returned by providers.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single metadata entry attached to an evaluation result.
///
/// Metadata values are restricted to scalar shapes; composite or null
/// values must be rendered down (or dropped) by the producer before
/// insertion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
	Bool(bool),
	Int(i64),
	Double(f64),
	String(String),
}

impl MetadataValue {
	/// Returns the string payload, if this is a `String`.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			MetadataValue::String(value) => Some(value),
			_ => None,
		}
	}

	/// Returns the integer payload, if this is an `Int`.
	pub fn as_int(&self) -> Option<i64> {
		match self {
			MetadataValue::Int(value) => Some(*value),
			_ => None,
		}
	}
}

/// The outcome of one flag evaluation.
///
/// Created fresh per call and never cached; the `reason` code is the only
/// way to distinguish a missing flag from a present-but-default one.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationResult<T> {
	/// The evaluated (or default) value.
	pub value: T,
	/// Label of the configured variation that was returned, if known.
	pub variant: Option<String>,
	/// Code explaining why this value was returned (e.g. `"DEFAULT"`).
	pub reason: Option<String>,
	/// Provider-synthesized metadata for this evaluation.
	pub flag_metadata: HashMap<String, MetadataValue>,
}

impl<T> EvaluationResult<T> {
	/// Creates a result carrying only a value.
	pub fn new(value: T) -> Self {
		Self {
			value,
			variant: None,
			reason: None,
			flag_metadata: HashMap::new(),
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

	/// Attaches the metadata map.
	pub fn with_flag_metadata(mut self, flag_metadata: HashMap<String, MetadataValue>) -> Self {
		self.flag_metadata = flag_metadata;
		self
	}
}
