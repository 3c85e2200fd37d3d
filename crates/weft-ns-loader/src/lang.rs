// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Language resolution for namespace loading.

use crate::options::LoaderOptions;

/// Resolve the effective language for a load request.
///
/// Resolution order (highest to lowest priority):
/// 1. The requested language, when the loader supports it
/// 2. The configured fallback language
///
/// An empty supported set accepts any non-empty requested language.
pub fn resolve_language<'a>(requested: Option<&'a str>, options: &'a LoaderOptions) -> &'a str {
	if let Some(language) = requested {
		if !language.is_empty() && is_supported(language, options) {
			return language;
		}
	}

	&options.fallback_language
}

fn is_supported(language: &str, options: &LoaderOptions) -> bool {
	options.supported_languages.is_empty()
		|| options
			.supported_languages
			.iter()
			.any(|supported| supported.as_str() == language)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::template::LoadPath;

	fn options_with(languages: &[&str]) -> LoaderOptions {
		LoaderOptions::new(LoadPath::template("/{{lng}}/{{ns}}.json"))
			.with_supported_languages(languages.iter().copied())
	}

	#[test]
	fn supported_request_takes_priority() {
		let options = options_with(&["en", "de"]);
		assert_eq!(resolve_language(Some("de"), &options), "de");
	}

	#[test]
	fn unsupported_request_falls_back() {
		let options = options_with(&["en", "de"]);
		assert_eq!(resolve_language(Some("fr"), &options), "en");
	}

	#[test]
	fn absent_request_falls_back() {
		let options = options_with(&["en", "de"]);
		assert_eq!(resolve_language(None, &options), "en");
	}

	#[test]
	fn empty_request_falls_back() {
		let options = options_with(&["en", "de"]);
		assert_eq!(resolve_language(Some(""), &options), "en");
	}

	#[test]
	fn empty_supported_set_accepts_any_request() {
		let options = options_with(&[]);
		assert_eq!(resolve_language(Some("zh-CN"), &options), "zh-CN");
	}

	#[test]
	fn configured_fallback_is_used() {
		let options = options_with(&["de"]).with_fallback_language("de");
		assert_eq!(resolve_language(Some("fr"), &options), "de");
	}
}
