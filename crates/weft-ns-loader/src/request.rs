// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Fetch URL construction from encoded namespace tokens.

use weft_ns_core::{decode, encode_query};

use crate::error::LoaderError;
use crate::options::LoaderOptions;

/// Build the fetch URL for an encoded namespace token and language.
///
/// The token is decoded into its base name and parameters, the load path
/// is resolved with the base name and language, and the configured
/// default parameters are merged in without overwriting token-specified
/// ones. Defaults append after token parameters, each side keeping its
/// own insertion order.
pub fn build_url(
	options: &LoaderOptions,
	token: &str,
	language: &str,
) -> Result<String, LoaderError> {
	let decoded = decode(token)?;
	let path = options.load_path.resolve(&decoded.base, language);

	let mut params = decoded.params;
	for (key, value) in options.default_params.iter() {
		if params.get(key).is_none() {
			params.insert(key, value);
		}
	}

	let query = encode_query(&params);
	let url = if query.is_empty() {
		path
	} else if path.contains('?') {
		format!("{path}&{query}")
	} else {
		format!("{path}?{query}")
	};

	tracing::debug!(token, language, url = url.as_str(), "built namespace fetch url");
	Ok(url)
}
