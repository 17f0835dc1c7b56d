// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the Beacon flags client.

use thiserror::Error;

/// Errors the client reports from context-setting operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlagsError {
	/// The supplied context is structurally invalid.
	#[error("invalid evaluation context: {0}")]
	InvalidContext(String),

	/// The flags backend rejected the context.
	#[error("evaluation context rejected: {0}")]
	ContextRejected(String),

	/// The client has not been initialized.
	#[error("client is not initialized")]
	NotInitialized,
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, FlagsError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn display_messages() {
		assert_eq!(
			FlagsError::InvalidContext("missing targeting key".to_string()).to_string(),
			"invalid evaluation context: missing targeting key"
		);
		assert_eq!(
			FlagsError::NotInitialized.to_string(),
			"client is not initialized"
		);
	}
}
