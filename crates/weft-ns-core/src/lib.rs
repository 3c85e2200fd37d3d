// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Namespace query encoding for translation loaders.
//!
//! Weft lets a caller request a filtered translation namespace as a
//! single opaque token. A descriptor with base name `comments` and
//! parameter `postId=5` encodes to `comments$postId=5`; the loading side
//! splits on the first `$` and percent-decodes the remainder to rebuild
//! the fetch URL. The caller never assembles URLs by hand.
//!
//! The registry is pure and synchronous: built once per call, immutable
//! afterwards, with both lookup views precomputed at build time.
//!
//! # Example
//!
//! ```
//! use weft_ns_core::{NamespaceDescriptor, Registry};
//!
//! let registry = Registry::build([
//! 	NamespaceDescriptor::new("comments")
//! 		.with_id("filtered")
//! 		.with_param("postId", "5"),
//! 	NamespaceDescriptor::new("common"),
//! ]);
//!
//! // The namespace list handed to the translation framework.
//! assert_eq!(registry.token_strings(), ["comments$postId=5", "common"]);
//!
//! // Retrieval by explicit id, or by position when no id was given.
//! assert_eq!(
//! 	registry.lookup_by_id("filtered").as_deref(),
//! 	Some("comments$postId=5")
//! );
//! assert_eq!(registry.lookup_by_id("1").as_deref(), Some("common"));
//! ```

pub mod decode;
pub mod descriptor;
pub mod encode;
pub mod error;
pub mod registry;

pub use decode::{decode, parse_query, DecodedNamespace};
pub use descriptor::{NameSpec, NamespaceDescriptor, QueryParams};
pub use encode::{
	encode_name, encode_query, Token, NAME_QUERY_SEPARATOR, TOKEN_JOIN_DELIMITER,
};
pub use error::DecodeError;
pub use registry::Registry;

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	// Base names must not contain '$' (caller contract).
	fn base_name() -> impl Strategy<Value = String> {
		"[a-z][a-zA-Z0-9_./-]{0,15}"
	}

	fn param_pairs() -> impl Strategy<Value = Vec<(String, String)>> {
		prop::collection::vec((".{0,12}", ".{0,12}"), 0..5)
	}

	proptest! {
		#[test]
		fn encode_decode_round_trips(base in base_name(), pairs in param_pairs()) {
			let params: QueryParams = pairs.into_iter().collect();
			let token = encode_name(&base, &params);

			let decoded = decode(token.as_str()).unwrap();
			prop_assert_eq!(decoded.base, base);
			prop_assert!(decoded.params.equivalent(&params));
		}

		#[test]
		fn empty_params_encode_to_the_base_name(base in base_name()) {
			let token = encode_name(&base, &QueryParams::new());
			prop_assert_eq!(token.as_str(), base.as_str());
			prop_assert!(!token.as_str().contains(NAME_QUERY_SEPARATOR));
		}

		#[test]
		fn build_is_deterministic(
			bases in prop::collection::vec(base_name(), 1..5),
			pairs in param_pairs(),
		) {
			let descriptors: Vec<NamespaceDescriptor> = bases
				.iter()
				.map(|base| {
					NamespaceDescriptor::new(base.as_str())
						.with_params(pairs.iter().cloned().collect())
				})
				.collect();

			let first = Registry::build(descriptors.clone());
			let second = Registry::build(descriptors);

			prop_assert_eq!(first.token_strings(), second.token_strings());
		}

		#[test]
		fn flattened_count_matches_descriptor_expansion(
			batches in prop::collection::vec(
				prop::collection::vec(base_name(), 1..4),
				0..4,
			),
		) {
			let expected: usize = batches.iter().map(Vec::len).sum();
			let descriptors: Vec<NamespaceDescriptor> = batches
				.into_iter()
				.map(|names| NamespaceDescriptor::new(names))
				.collect();

			let registry = Registry::build(descriptors);
			prop_assert_eq!(registry.tokens().len(), expected);
		}
	}
}
