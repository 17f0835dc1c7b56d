// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Bidirectional conversion between the client and abstraction value models.
//!
//! The two models are structurally isomorphic except for one gap: the
//! abstraction side has a `Timestamp` variant the client side lacks. The
//! client → abstraction direction is therefore total, while the
//! abstraction → client direction comes in two policies:
//!
//! - [`flag_value_strict`] fails on timestamps with
//!   [`ProviderError::ValueNotConvertible`]. Used on evaluation paths,
//!   where the caller can tolerate failure.
//! - [`flag_value_lossy`] degrades timestamps to a fixed ISO-8601 string.
//!   Used on lifecycle/context paths, which must not fail.
//!
//! Each call site commits to exactly one policy; mixing them within one
//! path is not supported.

use chrono::{DateTime, SecondsFormat, Utc};

use beacon_flags_core::FlagValue;
use flagkit::{ProviderError, Result, Value};

/// Fixed textual encoding for timestamps crossing the model gap.
///
/// Seconds precision with a `Z` suffix; repeated conversion of the same
/// instant yields identical text.
pub(crate) fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
	timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Converts a client value into the abstraction's value model.
///
/// Total: every client variant has a direct counterpart. Lists keep their
/// order; map keys are unchanged.
pub fn value_from_flag(value: FlagValue) -> Value {
	match value {
		FlagValue::Bool(value) => Value::Bool(value),
		FlagValue::Int(value) => Value::Int(value),
		FlagValue::Double(value) => Value::Double(value),
		FlagValue::String(value) => Value::String(value),
		FlagValue::List(items) => Value::List(items.into_iter().map(value_from_flag).collect()),
		FlagValue::Object(fields) => Value::Struct(
			fields
				.into_iter()
				.map(|(key, value)| (key, value_from_flag(value)))
				.collect(),
		),
		FlagValue::Null => Value::Null,
	}
}

/// Converts an abstraction value into the client's model, failing on
/// timestamps.
pub fn flag_value_strict(value: &Value) -> Result<FlagValue> {
	match value {
		Value::Bool(value) => Ok(FlagValue::Bool(*value)),
		Value::Int(value) => Ok(FlagValue::Int(*value)),
		Value::Double(value) => Ok(FlagValue::Double(*value)),
		Value::String(value) => Ok(FlagValue::String(value.clone())),
		Value::Timestamp(_) => Err(ProviderError::ValueNotConvertible {
			reason: "timestamp values have no client-side representation".to_string(),
		}),
		Value::List(items) => Ok(FlagValue::List(
			items.iter().map(flag_value_strict).collect::<Result<_>>()?,
		)),
		Value::Struct(fields) => Ok(FlagValue::Object(
			fields
				.iter()
				.map(|(key, value)| Ok((key.clone(), flag_value_strict(value)?)))
				.collect::<Result<_>>()?,
		)),
		Value::Null => Ok(FlagValue::Null),
	}
}

/// Converts an abstraction value into the client's model, degrading
/// timestamps to their ISO-8601 rendering.
pub fn flag_value_lossy(value: &Value) -> FlagValue {
	match value {
		Value::Bool(value) => FlagValue::Bool(*value),
		Value::Int(value) => FlagValue::Int(*value),
		Value::Double(value) => FlagValue::Double(*value),
		Value::String(value) => FlagValue::String(value.clone()),
		Value::Timestamp(timestamp) => FlagValue::String(format_timestamp(timestamp)),
		Value::List(items) => FlagValue::List(items.iter().map(flag_value_lossy).collect()),
		Value::Struct(fields) => FlagValue::Object(
			fields
				.iter()
				.map(|(key, value)| (key.clone(), flag_value_lossy(value)))
				.collect(),
		),
		Value::Null => FlagValue::Null,
	}
}

/// Renders an abstraction value as a single string.
///
/// Scalars use their display form (`"true"`/`"false"` for booleans),
/// timestamps the ISO-8601 encoding, lists and structs compact JSON, and
/// null the empty string. Cannot fail.
pub fn value_to_string(value: &Value) -> String {
	match value {
		Value::Bool(value) => value.to_string(),
		Value::Int(value) => value.to_string(),
		Value::Double(value) => value.to_string(),
		Value::String(value) => value.clone(),
		Value::Timestamp(timestamp) => format_timestamp(timestamp),
		Value::List(_) | Value::Struct(_) => {
			serde_json::to_string(&value_to_json(value)).unwrap_or_default()
		}
		Value::Null => String::new(),
	}
}

fn value_to_json(value: &Value) -> serde_json::Value {
	match value {
		Value::Bool(value) => serde_json::Value::Bool(*value),
		Value::Int(value) => serde_json::Value::from(*value),
		Value::Double(value) => serde_json::Value::from(*value),
		Value::String(value) => serde_json::Value::String(value.clone()),
		Value::Timestamp(timestamp) => serde_json::Value::String(format_timestamp(timestamp)),
		Value::List(items) => serde_json::Value::Array(items.iter().map(value_to_json).collect()),
		Value::Struct(fields) => serde_json::Value::Object(
			fields
				.iter()
				.map(|(key, value)| (key.clone(), value_to_json(value)))
				.collect(),
		),
		Value::Null => serde_json::Value::Null,
	}
}


#[cfg(test)]
mod proptests {
	use super::*;
	use proptest::prelude::*;

	/// Timestamp-free value trees, with finite doubles so equality is
	/// well-defined.
	fn timestamp_free_value() -> impl Strategy<Value = Value> {
		let leaf = prop_oneof![
			Just(Value::Null),
			any::<bool>().prop_map(Value::Bool),
			any::<i64>().prop_map(Value::Int),
			(-1.0e9f64..1.0e9).prop_map(Value::Double),
			"[a-zA-Z0-9 ]{0,12}".prop_map(Value::from),
		];
		leaf.prop_recursive(3, 24, 4, |inner| {
			prop_oneof![
				prop::collection::vec(inner.clone(), 0..4).prop_map(Value::List),
				prop::collection::hash_map("[a-z]{1,6}", inner, 0..4).prop_map(Value::Struct),
			]
		})
	}

	proptest! {
		/// Round-trip law: for any value without a timestamp, converting
		/// to the client model and back is the identity.
		#[test]
		fn roundtrip_is_identity(value in timestamp_free_value()) {
			let converted = flag_value_strict(&value).unwrap();
			prop_assert_eq!(value_from_flag(converted), value);
		}

		/// The strict and lossy policies agree whenever no timestamp is
		/// involved.
		#[test]
		fn policies_agree_without_timestamps(value in timestamp_free_value()) {
			let strict = flag_value_strict(&value).unwrap();
			let lossy = flag_value_lossy(&value);
			prop_assert_eq!(strict, lossy);
		}
	}
}
