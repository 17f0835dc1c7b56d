// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Synthesis of the per-evaluation metadata map.

use std::collections::HashMap;

use chrono::Utc;

use flagkit::{EvaluationContext, MetadataValue, Value};

use crate::convert;

/// Provider identity recorded in every metadata map.
pub const PROVIDER_NAME: &str = "BeaconFlags";

const FLAG_KEY: &str = "flagKey";
const PROVIDER: &str = "provider";
const EVALUATION_TIME: &str = "evaluationTime";
const TARGETING_KEY: &str = "targetingKey";

/// Builds the metadata map attached to one evaluation result.
///
/// Always contains `flagKey`, `provider`, and `evaluationTime` (wall-clock
/// time read at call time, ISO-8601). When a context is supplied, adds
/// `targetingKey` plus one entry per context attribute, except an
/// attribute literally named `targetingKey`, which would duplicate the
/// entry already written. Null-valued attributes are dropped; timestamps
/// and composite values are rendered down to strings. This builder has no
/// failure path.
pub fn build_flag_metadata(
	flag_key: &str,
	context: Option<&EvaluationContext>,
) -> HashMap<String, MetadataValue> {
	let mut metadata = HashMap::new();

	metadata.insert(
		FLAG_KEY.to_string(),
		MetadataValue::String(flag_key.to_string()),
	);
	metadata.insert(
		PROVIDER.to_string(),
		MetadataValue::String(PROVIDER_NAME.to_string()),
	);
	metadata.insert(
		EVALUATION_TIME.to_string(),
		MetadataValue::String(convert::format_timestamp(&Utc::now())),
	);

	if let Some(context) = context {
		metadata.insert(
			TARGETING_KEY.to_string(),
			MetadataValue::String(context.targeting_key().to_string()),
		);

		for (key, value) in context.attributes() {
			if key == TARGETING_KEY {
				continue;
			}
			if let Some(converted) = metadata_value(value) {
				metadata.insert(key.clone(), converted);
			}
		}
	}

	metadata
}

fn metadata_value(value: &Value) -> Option<MetadataValue> {
	match value {
		Value::Bool(value) => Some(MetadataValue::Bool(*value)),
		Value::Int(value) => Some(MetadataValue::Int(*value)),
		Value::Double(value) => Some(MetadataValue::Double(*value)),
		Value::String(value) => Some(MetadataValue::String(value.clone())),
		Value::Timestamp(timestamp) => {
			Some(MetadataValue::String(convert::format_timestamp(timestamp)))
		}
		Value::List(_) | Value::Struct(_) => {
			Some(MetadataValue::String(convert::value_to_string(value)))
		}
		Value::Null => None,
	}
}

#[cfg(test)]
mod tests {
	use chrono::{DateTime, TimeZone};

	use super::*;

	#[test]
	fn without_context_only_fixed_entries_present() {
		let metadata = build_flag_metadata("checkout.new_flow", None);

		assert_eq!(metadata.len(), 3);
		assert_eq!(
			metadata[FLAG_KEY].as_str(),
			Some("checkout.new_flow")
		);
		assert_eq!(metadata[PROVIDER].as_str(), Some(PROVIDER_NAME));
		assert!(metadata.contains_key(EVALUATION_TIME));
	}

	#[test]
	fn evaluation_time_is_iso8601() {
		let metadata = build_flag_metadata("k", None);
		let rendered = metadata[EVALUATION_TIME].as_str().unwrap();
		assert!(DateTime::parse_from_rfc3339(rendered).is_ok());
	}

	#[test]
	fn context_attributes_pass_through_with_native_types() {
		let context = EvaluationContext::new("user-42")
			.with_attribute("plan", Value::from("pro"))
			.with_attribute("age", Value::Int(31))
			.with_attribute("beta", Value::Bool(true))
			.with_attribute("score", Value::Double(0.5));

		let metadata = build_flag_metadata("k", Some(&context));

		assert_eq!(metadata[TARGETING_KEY].as_str(), Some("user-42"));
		assert_eq!(metadata["plan"].as_str(), Some("pro"));
		assert_eq!(metadata["age"].as_int(), Some(31));
		assert_eq!(metadata["beta"], MetadataValue::Bool(true));
		assert_eq!(metadata["score"], MetadataValue::Double(0.5));
		// 3 fixed entries + targetingKey + 4 attributes
		assert_eq!(metadata.len(), 8);
	}

	#[test]
	fn null_attributes_are_dropped() {
		let context = EvaluationContext::new("u").with_attribute("unused", Value::Null);
		let metadata = build_flag_metadata("k", Some(&context));
		assert!(!metadata.contains_key("unused"));
	}

	#[test]
	fn targeting_key_attribute_is_not_duplicated() {
		let context =
			EvaluationContext::new("real-key").with_attribute("targetingKey", Value::from("shadow"));

		let metadata = build_flag_metadata("k", Some(&context));
		assert_eq!(metadata[TARGETING_KEY].as_str(), Some("real-key"));
	}

	#[test]
	fn empty_targeting_key_is_recorded_as_empty() {
		let metadata = build_flag_metadata("k", Some(&EvaluationContext::new("")));
		assert_eq!(metadata[TARGETING_KEY].as_str(), Some(""));
	}

	#[test]
	fn composite_attributes_render_as_json_text() {
		let context = EvaluationContext::new("u").with_attribute(
			"limits",
			Value::Struct(std::collections::HashMap::from([(
				"seats".to_string(),
				Value::Int(5),
			)])),
		);

		let metadata = build_flag_metadata("k", Some(&context));
		assert_eq!(metadata["limits"].as_str(), Some(r#"{"seats":5}"#));
	}

	#[test]
	fn timestamp_attributes_render_as_iso8601_text() {
		let context = EvaluationContext::new("u").with_attribute(
			"signed_up",
			Value::Timestamp(chrono::Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap()),
		);

		let metadata = build_flag_metadata("k", Some(&context));
		assert_eq!(metadata["signed_up"].as_str(), Some("2025-01-02T03:04:05Z"));
	}
}
