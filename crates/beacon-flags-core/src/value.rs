// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Client-side value model for flag payloads and context attributes.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// A flag value as the Beacon client represents it.
///
/// Integers are 64-bit signed. There is no timestamp variant; callers with
/// date-shaped data must render it down to a string before it reaches the
/// client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlagValue {
	Bool(bool),
	Int(i64),
	Double(f64),
	String(String),
	List(Vec<FlagValue>),
	Object(HashMap<String, FlagValue>),
	Null,
}

impl FlagValue {
	/// Converts loosely-typed JSON data into a `FlagValue`.
	///
	/// Recognizes booleans, strings, integers in the signed 64-bit range,
	/// floats, arrays, objects, and null. Anything else (an unsigned
	/// integer beyond `i64::MAX` is the only such shape JSON admits)
	/// degrades to its textual rendering rather than failing; callers must
	/// not assume type fidelity through that path.
	pub fn from_json(value: serde_json::Value) -> Self {
		match value {
			serde_json::Value::Bool(value) => FlagValue::Bool(value),
			serde_json::Value::String(value) => FlagValue::String(value),
			serde_json::Value::Number(number) => {
				if let Some(value) = number.as_i64() {
					FlagValue::Int(value)
				} else if number.is_u64() {
					debug!(%number, "integer outside the signed 64-bit range, degrading to string");
					FlagValue::String(number.to_string())
				} else if let Some(value) = number.as_f64() {
					FlagValue::Double(value)
				} else {
					debug!(%number, "unrepresentable number, degrading to string");
					FlagValue::String(number.to_string())
				}
			}
			serde_json::Value::Array(items) => {
				FlagValue::List(items.into_iter().map(FlagValue::from_json).collect())
			}
			serde_json::Value::Object(fields) => FlagValue::Object(
				fields
					.into_iter()
					.map(|(key, value)| (key, FlagValue::from_json(value)))
					.collect(),
			),
			serde_json::Value::Null => FlagValue::Null,
		}
	}

	/// Renders this value as JSON.
	pub fn to_json(&self) -> serde_json::Value {
		match self {
			FlagValue::Bool(value) => serde_json::Value::Bool(*value),
			FlagValue::Int(value) => serde_json::Value::from(*value),
			FlagValue::Double(value) => serde_json::Value::from(*value),
			FlagValue::String(value) => serde_json::Value::String(value.clone()),
			FlagValue::List(items) => {
				serde_json::Value::Array(items.iter().map(FlagValue::to_json).collect())
			}
			FlagValue::Object(fields) => serde_json::Value::Object(
				fields
					.iter()
					.map(|(key, value)| (key.clone(), value.to_json()))
					.collect(),
			),
			FlagValue::Null => serde_json::Value::Null,
		}
	}

	/// Returns the boolean payload, if this is a `Bool`.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			FlagValue::Bool(value) => Some(*value),
			_ => None,
		}
	}

	/// Returns the string payload, if this is a `String`.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			FlagValue::String(value) => Some(value),
			_ => None,
		}
	}

	/// Returns the integer payload, if this is an `Int`.
	pub fn as_int(&self) -> Option<i64> {
		match self {
			FlagValue::Int(value) => Some(*value),
			_ => None,
		}
	}

	/// Returns the float payload, if this is a `Double`.
	pub fn as_double(&self) -> Option<f64> {
		match self {
			FlagValue::Double(value) => Some(*value),
			_ => None,
		}
	}

	/// Returns the fields, if this is an `Object`.
	pub fn as_object(&self) -> Option<&HashMap<String, FlagValue>> {
		match self {
			FlagValue::Object(fields) => Some(fields),
			_ => None,
		}
	}

	/// Returns true for the `Null` variant.
	pub fn is_null(&self) -> bool {
		matches!(self, FlagValue::Null)
	}
}
