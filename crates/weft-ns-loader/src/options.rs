// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Loader configuration.

use weft_ns_core::QueryParams;

use crate::template::LoadPath;

/// Language used when no supported language can be resolved.
pub const DEFAULT_FALLBACK_LANGUAGE: &str = "en";

/// Configuration for namespace resource loading.
#[derive(Debug, Clone)]
pub struct LoaderOptions {
	/// Where translation resources live.
	pub load_path: LoadPath,
	/// Query parameters merged into every request. Token-specified
	/// parameters always win over these defaults.
	pub default_params: QueryParams,
	/// Languages the loader serves. Empty means any requested language
	/// is accepted.
	pub supported_languages: Vec<String>,
	/// Language used when the requested one is unsupported or absent.
	pub fallback_language: String,
}

impl LoaderOptions {
	pub fn new(load_path: LoadPath) -> Self {
		Self {
			load_path,
			default_params: QueryParams::new(),
			supported_languages: Vec::new(),
			fallback_language: DEFAULT_FALLBACK_LANGUAGE.to_string(),
		}
	}

	pub fn with_default_param(
		mut self,
		key: impl Into<String>,
		value: impl Into<String>,
	) -> Self {
		self.default_params.insert(key, value);
		self
	}

	pub fn with_supported_languages<I, S>(mut self, languages: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.supported_languages = languages.into_iter().map(Into::into).collect();
		self
	}

	pub fn with_fallback_language(mut self, language: impl Into<String>) -> Self {
		self.fallback_language = language.into();
		self
	}
}
