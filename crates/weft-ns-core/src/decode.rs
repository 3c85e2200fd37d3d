// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Token decoding: the inverse of [`crate::encode::encode_name`].

use crate::descriptor::QueryParams;
use crate::encode::NAME_QUERY_SEPARATOR;
use crate::error::DecodeError;

/// A token split back into its base name and query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedNamespace {
	pub base: String,
	pub params: QueryParams,
}

/// Decode an encoded token into its base name and query parameters.
///
/// Splits on the first separator only; a `$` inside a parameter value
/// survives because values are percent-encoded on the wire. A token
/// without a separator decodes to its base name and empty parameters.
pub fn decode(token: &str) -> Result<DecodedNamespace, DecodeError> {
	match token.split_once(NAME_QUERY_SEPARATOR) {
		Some((base, query)) => Ok(DecodedNamespace {
			base: base.to_string(),
			params: parse_query(query)?,
		}),
		None => Ok(DecodedNamespace {
			base: token.to_string(),
			params: QueryParams::new(),
		}),
	}
}

/// Parse a percent-encoded query string into ordered parameters.
///
/// A pair without `=` parses as a key with an empty value, matching
/// standard query-string parsers.
pub fn parse_query(query: &str) -> Result<QueryParams, DecodeError> {
	let mut params = QueryParams::new();
	if query.is_empty() {
		return Ok(params);
	}

	for pair in query.split('&') {
		let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
		let key = urlencoding::decode(raw_key)?;
		let value = urlencoding::decode(raw_value)?;
		params.insert(key.into_owned(), value.into_owned());
	}

	Ok(params)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::encode::encode_name;

	#[test]
	fn bare_token_decodes_to_empty_params() {
		let decoded = decode("common").unwrap();
		assert_eq!(decoded.base, "common");
		assert!(decoded.params.is_empty());
	}

	#[test]
	fn token_with_query_decodes_base_and_params() {
		let decoded = decode("comments$postId=5&sort=asc").unwrap();
		assert_eq!(decoded.base, "comments");
		assert_eq!(decoded.params.get("postId"), Some("5"));
		assert_eq!(decoded.params.get("sort"), Some("asc"));
	}

	#[test]
	fn split_happens_on_first_separator_only() {
		let decoded = decode("products$price=%245").unwrap();
		assert_eq!(decoded.base, "products");
		assert_eq!(decoded.params.get("price"), Some("$5"));
	}

	#[test]
	fn pair_without_equals_parses_as_empty_value() {
		let params = parse_query("flag&k=v").unwrap();
		assert_eq!(params.get("flag"), Some(""));
		assert_eq!(params.get("k"), Some("v"));
	}

	#[test]
	fn trailing_separator_decodes_to_empty_params() {
		let decoded = decode("common$").unwrap();
		assert_eq!(decoded.base, "common");
		assert!(decoded.params.is_empty());
	}

	#[test]
	fn round_trips_reserved_and_unicode_characters() {
		let params: QueryParams = [("q", "a&b=c"), ("city", "Zürich"), ("s", "x y")]
			.into_iter()
			.collect();
		let token = encode_name("search", &params);

		let decoded = decode(token.as_str()).unwrap();
		assert_eq!(decoded.base, "search");
		assert!(decoded.params.equivalent(&params));
	}

	#[test]
	fn invalid_utf8_percent_escape_is_an_error() {
		assert!(decode("ns$k=%FF%FE").is_err());
	}
}
