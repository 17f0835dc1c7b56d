// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Value model for flag payloads and context attributes.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A flag value or context attribute.
///
/// This is a closed, recursive sum type: the variant tag fully determines
/// which payload is valid. Providers translate between this model and
/// whatever representation their backend uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
	Bool(bool),
	Int(i64),
	Double(f64),
	String(String),
	Timestamp(DateTime<Utc>),
	List(Vec<Value>),
	Struct(HashMap<String, Value>),
	Null,
}

impl Value {
	/// Returns the boolean payload, if this is a `Bool`.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Value::Bool(value) => Some(*value),
			_ => None,
		}
	}

	/// Returns the string payload, if this is a `String`.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Value::String(value) => Some(value),
			_ => None,
		}
	}

	/// Returns the integer payload, if this is an `Int`.
	pub fn as_int(&self) -> Option<i64> {
		match self {
			Value::Int(value) => Some(*value),
			_ => None,
		}
	}

	/// Returns the float payload, if this is a `Double`.
	pub fn as_double(&self) -> Option<f64> {
		match self {
			Value::Double(value) => Some(*value),
			_ => None,
		}
	}

	/// Returns the timestamp payload, if this is a `Timestamp`.
	pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
		match self {
			Value::Timestamp(value) => Some(*value),
			_ => None,
		}
	}

	/// Returns the elements, if this is a `List`.
	pub fn as_list(&self) -> Option<&[Value]> {
		match self {
			Value::List(items) => Some(items),
			_ => None,
		}
	}

	/// Returns the fields, if this is a `Struct`.
	pub fn as_struct(&self) -> Option<&HashMap<String, Value>> {
		match self {
			Value::Struct(fields) => Some(fields),
			_ => None,
		}
	}

	/// Returns true for the `Null` variant.
	pub fn is_null(&self) -> bool {
		matches!(self, Value::Null)
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Value::Bool(value)
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Value::Int(value)
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Value::Double(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Value::String(value.to_string())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Value::String(value)
	}
}

impl From<DateTime<Utc>> for Value {
	fn from(value: DateTime<Utc>) -> Self {
		Value::Timestamp(value)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn accessors_match_variant() {
		assert_eq!(Value::Bool(true).as_bool(), Some(true));
		assert_eq!(Value::Int(42).as_int(), Some(42));
		assert_eq!(Value::Double(3.5).as_double(), Some(3.5));
		assert_eq!(Value::String("x".to_string()).as_str(), Some("x"));
		assert!(Value::Null.is_null());
	}

	#[test]
	fn accessors_reject_other_variants() {
		assert_eq!(Value::Int(1).as_bool(), None);
		assert_eq!(Value::Bool(false).as_int(), None);
		assert_eq!(Value::Null.as_str(), None);
		assert!(!Value::Bool(false).is_null());
	}

	#[test]
	fn nested_structures() {
		let value = Value::Struct(HashMap::from([(
			"items".to_string(),
			Value::List(vec![Value::Int(1), Value::Int(2)]),
		)]));

		let fields = value.as_struct().unwrap();
		let items = fields["items"].as_list().unwrap();
		assert_eq!(items.len(), 2);
		assert_eq!(items[0].as_int(), Some(1));
	}

	#[test]
	fn from_impls() {
		assert_eq!(Value::from(true), Value::Bool(true));
		assert_eq!(Value::from(7i64), Value::Int(7));
		assert_eq!(Value::from("pro"), Value::String("pro".to_string()));
	}
}
