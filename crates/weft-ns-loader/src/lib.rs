// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Load-side integration for encoded namespace tokens.
//!
//! Turns tokens produced by [`weft_ns_core`] back into fetchable URLs and
//! retrieves the JSON translation resources behind them. The load path is
//! either a `{{lng}}`/`{{ns}}` template or a caller-supplied resolver
//! callback, and query parameters carried by the token are appended to the
//! resolved path alongside configured defaults.
//!
//! # Example
//!
//! ```
//! use weft_ns_loader::{build_url, LoadPath, LoaderOptions};
//!
//! let options = LoaderOptions::new(LoadPath::template(
//! 	"https://example.com/locales/{{lng}}/{{ns}}.json",
//! ))
//! .with_default_param("v", "3");
//!
//! let url = build_url(&options, "comments$postId=5", "en").unwrap();
//! assert_eq!(
//! 	url,
//! 	"https://example.com/locales/en/comments.json?postId=5&v=3"
//! );
//! ```

pub mod error;
pub mod lang;
pub mod loader;
pub mod options;
pub mod request;
pub mod template;

pub use error::LoaderError;
pub use lang::resolve_language;
pub use loader::NamespaceLoader;
pub use options::{LoaderOptions, DEFAULT_FALLBACK_LANGUAGE};
pub use request::build_url;
pub use template::{LoadPath, LNG_PLACEHOLDER, NS_PLACEHOLDER};
