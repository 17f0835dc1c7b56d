// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for provider implementations.

use thiserror::Error;

/// Errors a provider may surface to callers.
#[derive(Debug, Error)]
pub enum ProviderError {
	/// A value's shape has no representation on the target side.
	#[error("value not convertible: {reason}")]
	ValueNotConvertible { reason: String },

	/// A context-setting operation received a structurally invalid context.
	#[error("invalid evaluation context: {reason}")]
	InvalidContext { reason: String },

	/// Opaque pass-through of the wrapped backend's error. Not interpreted
	/// or retried at this layer.
	#[error("underlying client error: {0}")]
	Underlying(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ProviderError {
	/// Wraps a backend error without interpreting it.
	pub fn underlying(error: impl std::error::Error + Send + Sync + 'static) -> Self {
		ProviderError::Underlying(Box::new(error))
	}
}

/// Result type alias for provider operations.
pub type Result<T> = std::result::Result<T, ProviderError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn display_includes_reason() {
		let err = ProviderError::ValueNotConvertible {
			reason: "timestamp has no target variant".to_string(),
		};
		assert_eq!(
			err.to_string(),
			"value not convertible: timestamp has no target variant"
		);
	}

	#[test]
	fn underlying_preserves_source() {
		use std::error::Error as _;

		let io = std::io::Error::new(std::io::ErrorKind::Other, "backend down");
		let err = ProviderError::underlying(io);
		assert!(err.source().is_some());
		assert!(err.to_string().contains("backend down"));
	}
}
