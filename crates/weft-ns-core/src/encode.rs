// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Token encoding: base name plus percent-encoded query string.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::descriptor::QueryParams;

/// Separator between a base name and its encoded query string.
pub const NAME_QUERY_SEPARATOR: char = '$';

/// Delimiter joining the tokens of a multi-name descriptor in lookup results.
pub const TOKEN_JOIN_DELIMITER: &str = "|";

/// An encoded namespace token: `base` or `base$k1=v1&k2=v2`.
///
/// Tokens are the opaque strings handed to the translation framework as
/// its namespace list and decoded again on the loading side.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn into_string(self) -> String {
		self.0
	}
}

impl fmt::Display for Token {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl From<String> for Token {
	fn from(raw: String) -> Self {
		Token(raw)
	}
}

impl From<&str> for Token {
	fn from(raw: &str) -> Self {
		Token(raw.to_string())
	}
}

impl From<Token> for String {
	fn from(token: Token) -> Self {
		token.0
	}
}

/// Serialize query parameters into a percent-encoded query string.
///
/// Pairs are `&`-joined `key=value` in insertion order; keys and values
/// are percent-encoded independently. Empty parameters serialize to the
/// empty string.
pub fn encode_query(params: &QueryParams) -> String {
	params
		.iter()
		.map(|(key, value)| {
			format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
		})
		.collect::<Vec<_>>()
		.join("&")
}

/// Encode one base name with its query parameters into a token.
///
/// Empty parameters encode to the bare base name with no separator. Base
/// names must not contain the separator themselves; that is a caller
/// contract, logged but never rejected, and violating it corrupts
/// round-tripping.
pub fn encode_name(base: &str, params: &QueryParams) -> Token {
	if base.contains(NAME_QUERY_SEPARATOR) {
		tracing::warn!(base, "base namespace contains the reserved '$' separator");
	}

	let query = encode_query(params);
	if query.is_empty() {
		Token(base.to_string())
	} else {
		Token(format!("{base}{NAME_QUERY_SEPARATOR}{query}"))
	}
}
