// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for namespace token decoding.

use thiserror::Error;

/// Errors that can occur when decoding an encoded namespace token.
///
/// Lookup absence is not an error; registry lookups signal it with
/// `None`.
#[derive(Debug, Error)]
pub enum DecodeError {
	/// Percent-escapes decoded to bytes that are not valid UTF-8
	#[error("invalid UTF-8 in percent-encoded data: {0}")]
	InvalidUtf8(#[from] std::string::FromUtf8Error),
}
