// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Load-path configuration and placeholder resolution.

use std::fmt;
use std::sync::Arc;

/// Placeholder for the namespace base name in a load-path template.
pub const NS_PLACEHOLDER: &str = "{{ns}}";

/// Placeholder for the language code in a load-path template.
pub const LNG_PLACEHOLDER: &str = "{{lng}}";

/// Where translation resources are fetched from.
///
/// Either a template string with `{{ns}}`/`{{lng}}` placeholders or a
/// caller-supplied resolver invoked with the namespace and language.
#[derive(Clone)]
pub enum LoadPath {
	/// Template such as `https://example.com/locales/{{lng}}/{{ns}}.json`.
	Template(String),
	/// Resolver callback producing the path for a namespace and language.
	Resolver(Arc<dyn Fn(&str, &str) -> String + Send + Sync>),
}

impl LoadPath {
	pub fn template(template: impl Into<String>) -> Self {
		LoadPath::Template(template.into())
	}

	pub fn resolver<F>(resolver: F) -> Self
	where
		F: Fn(&str, &str) -> String + Send + Sync + 'static,
	{
		LoadPath::Resolver(Arc::new(resolver))
	}

	/// Resolve the path for one namespace and language.
	///
	/// Every occurrence of each placeholder is substituted.
	pub fn resolve(&self, namespace: &str, language: &str) -> String {
		match self {
			LoadPath::Template(template) => template
				.replace(NS_PLACEHOLDER, namespace)
				.replace(LNG_PLACEHOLDER, language),
			LoadPath::Resolver(resolver) => resolver(namespace, language),
		}
	}
}

impl fmt::Debug for LoadPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			LoadPath::Template(template) => f.debug_tuple("Template").field(template).finish(),
			LoadPath::Resolver(_) => f.debug_tuple("Resolver").field(&"<fn>").finish(),
		}
	}
}
