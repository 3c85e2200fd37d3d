// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Async namespace resource fetching.

use reqwest::Client;

use crate::error::LoaderError;
use crate::options::LoaderOptions;
use crate::request::build_url;

/// User-Agent sent with every namespace fetch.
const USER_AGENT: &str = concat!("weft/", env!("CARGO_PKG_VERSION"));

/// Fetches translation resources for encoded namespace tokens.
///
/// A thin wrapper over a shared HTTP client. One GET per load, no
/// retries, no caching.
#[derive(Debug, Clone)]
pub struct NamespaceLoader {
	client: Client,
	options: LoaderOptions,
}

impl NamespaceLoader {
	/// Create a loader with a default HTTP client and the crate
	/// User-Agent.
	pub fn new(options: LoaderOptions) -> Self {
		let client = Client::builder()
			.user_agent(USER_AGENT)
			.build()
			.expect("failed to build HTTP client");
		Self { client, options }
	}

	/// Create a loader using a caller-configured HTTP client (timeouts,
	/// proxies).
	pub fn with_client(client: Client, options: LoaderOptions) -> Self {
		Self { client, options }
	}

	pub fn options(&self) -> &LoaderOptions {
		&self.options
	}

	/// Fetch the JSON resource for one encoded token and language.
	pub async fn load(
		&self,
		token: &str,
		language: &str,
	) -> Result<serde_json::Value, LoaderError> {
		let url = build_url(&self.options, token, language)?;
		tracing::debug!(token, language, url = url.as_str(), "loading namespace resource");

		let response = self.client.get(&url).send().await?;
		let status = response.status();
		if !status.is_success() {
			tracing::warn!(
				url = url.as_str(),
				status = status.as_u16(),
				"namespace fetch failed"
			);
			return Err(LoaderError::Status { status, url });
		}

		Ok(response.json().await?)
	}
}
