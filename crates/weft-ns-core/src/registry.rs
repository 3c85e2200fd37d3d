// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Build-time encoded registry with id and match lookups.

use std::collections::HashMap;

use crate::descriptor::{NameSpec, NamespaceDescriptor, QueryParams};
use crate::encode::{encode_name, Token, TOKEN_JOIN_DELIMITER};

/// Immutable registry of encoded namespace tokens.
///
/// Built once from an ordered sequence of descriptors. Exposes the
/// flattened token sequence for the translation framework plus two
/// lookups over the original descriptors. Everything is precomputed at
/// build time; lookups are read-only views.
#[derive(Debug, Clone)]
pub struct Registry {
	descriptors: Vec<NamespaceDescriptor>,
	/// Token list per descriptor, in descriptor order.
	per_descriptor: Vec<Vec<Token>>,
	/// Explicit id, or decimal position for descriptors without one,
	/// mapped to the descriptor's position. Duplicate keys resolve
	/// last-write-wins.
	by_key: HashMap<String, usize>,
	flattened: Vec<Token>,
}

impl Registry {
	/// Build a registry from an ordered sequence of descriptors.
	///
	/// A single descriptor is a one-element build:
	///
	/// ```
	/// use weft_ns_core::{NamespaceDescriptor, Registry};
	///
	/// let registry = Registry::build([
	/// 	NamespaceDescriptor::new("comments").with_param("postId", "5"),
	/// ]);
	/// assert_eq!(registry.tokens().len(), 1);
	/// ```
	pub fn build<I>(descriptors: I) -> Self
	where
		I: IntoIterator<Item = NamespaceDescriptor>,
	{
		let descriptors: Vec<NamespaceDescriptor> = descriptors.into_iter().collect();
		let mut per_descriptor = Vec::with_capacity(descriptors.len());
		let mut by_key = HashMap::with_capacity(descriptors.len());
		let mut flattened = Vec::new();

		for (position, descriptor) in descriptors.iter().enumerate() {
			let tokens: Vec<Token> = descriptor
				.name
				.names()
				.iter()
				.map(|base| encode_name(base, &descriptor.params))
				.collect();

			let key = match &descriptor.id {
				Some(id) => id.clone(),
				None => position.to_string(),
			};
			by_key.insert(key, position);

			flattened.extend(tokens.iter().cloned());
			per_descriptor.push(tokens);
		}

		tracing::debug!(
			descriptors = descriptors.len(),
			tokens = flattened.len(),
			"built namespace registry"
		);

		Self {
			descriptors,
			per_descriptor,
			by_key,
			flattened,
		}
	}

	/// The flattened encoded token sequence: descriptor order, then
	/// within-descriptor order for batch names.
	pub fn tokens(&self) -> &[Token] {
		&self.flattened
	}

	/// The flattened tokens as plain strings, for frameworks that take
	/// their namespace list by value.
	pub fn token_strings(&self) -> Vec<String> {
		self.flattened
			.iter()
			.map(|token| token.as_str().to_string())
			.collect()
	}

	/// The descriptors the registry was built from, in input order.
	pub fn descriptors(&self) -> &[NamespaceDescriptor] {
		&self.descriptors
	}

	/// Joined encoded token(s) registered under `key`.
	///
	/// `key` is a descriptor's explicit id, or the decimal zero-based
	/// position for descriptors registered without one. Batch
	/// descriptors join their tokens with `|`.
	pub fn lookup_by_id(&self, key: &str) -> Option<String> {
		self.by_key
			.get(key)
			.map(|&position| join_tokens(&self.per_descriptor[position]))
	}

	/// Joined token(s) of the first descriptor whose name equals `name`
	/// and whose parameters are equivalent to `params`.
	///
	/// Name equality is structural; parameter equivalence is
	/// order-independent.
	pub fn lookup_by_match(
		&self,
		name: impl Into<NameSpec>,
		params: &QueryParams,
	) -> Option<String> {
		let name = name.into();
		self.descriptors
			.iter()
			.position(|descriptor| {
				descriptor.name == name && descriptor.params.equivalent(params)
			})
			.map(|position| join_tokens(&self.per_descriptor[position]))
	}
}

fn join_tokens(tokens: &[Token]) -> String {
	tokens
		.iter()
		.map(Token::as_str)
		.collect::<Vec<_>>()
		.join(TOKEN_JOIN_DELIMITER)
}
