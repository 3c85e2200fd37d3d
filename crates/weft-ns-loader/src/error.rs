// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for namespace resource loading.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while resolving or fetching a namespace resource.
#[derive(Debug, Error)]
pub enum LoaderError {
	/// The encoded token could not be decoded
	#[error(transparent)]
	Decode(#[from] weft_ns_core::DecodeError),

	/// Transport-level HTTP failure
	#[error("http request failed: {0}")]
	Http(#[from] reqwest::Error),

	/// The server answered with a non-success status
	#[error("unexpected status {status} fetching {url}")]
	Status { status: StatusCode, url: String },
}
