// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Caller-facing descriptor model: names, query parameters, descriptors.

use serde::{Deserialize, Serialize};

/// One or many base namespace names.
///
/// A descriptor usually targets a single namespace, but a batch of
/// namespaces can share one set of query parameters. Untagged on the
/// wire: a bare string or a list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NameSpec {
	/// A single base namespace.
	Single(String),
	/// An ordered batch of base namespaces sharing one query.
	Batch(Vec<String>),
}

impl NameSpec {
	/// The base names in order, regardless of variant.
	pub fn names(&self) -> &[String] {
		match self {
			NameSpec::Single(name) => std::slice::from_ref(name),
			NameSpec::Batch(names) => names,
		}
	}
}

impl From<&str> for NameSpec {
	fn from(name: &str) -> Self {
		NameSpec::Single(name.to_string())
	}
}

impl From<String> for NameSpec {
	fn from(name: String) -> Self {
		NameSpec::Single(name)
	}
}

impl From<Vec<String>> for NameSpec {
	fn from(names: Vec<String>) -> Self {
		NameSpec::Batch(names)
	}
}

impl From<&[&str]> for NameSpec {
	fn from(names: &[&str]) -> Self {
		NameSpec::Batch(names.iter().map(|n| n.to_string()).collect())
	}
}

/// Insertion-ordered string-to-string query parameters with unique keys.
///
/// Order is preserved for encoding and irrelevant for
/// [`QueryParams::equivalent`]. Re-inserting an existing key replaces its
/// value in place, keeping the original position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
	pub fn new() -> Self {
		Self(Vec::new())
	}

	/// Insert a key/value pair, last write wins for duplicate keys.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
		let key = key.into();
		let value = value.into();
		if let Some(position) = self.0.iter().position(|(k, _)| *k == key) {
			self.0[position].1 = value;
		} else {
			self.0.push((key, value));
		}
	}

	pub fn get(&self, key: &str) -> Option<&str> {
		self.0
			.iter()
			.find(|(k, _)| k.as_str() == key)
			.map(|(_, v)| v.as_str())
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Pairs in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// Order-independent equivalence: identical key counts and every key
	/// present on both sides with an identical value.
	///
	/// The length check runs first; without it a subset with extra keys
	/// on one side would incorrectly pass the per-key scan.
	pub fn equivalent(&self, other: &QueryParams) -> bool {
		if self.len() != other.len() {
			return false;
		}
		self.iter().all(|(key, value)| other.get(key) == Some(value))
	}
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut params = QueryParams::new();
		for (key, value) in iter {
			params.insert(key, value);
		}
		params
	}
}

/// A caller-supplied namespace request before encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceDescriptor {
	/// Caller-chosen identifier for later retrieval. Not required unique;
	/// duplicate ids resolve last-write-wins in the registry.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub id: Option<String>,
	/// Base namespace name(s).
	pub name: NameSpec,
	/// Query parameters shared by every name in the descriptor.
	#[serde(default, skip_serializing_if = "QueryParams::is_empty")]
	pub params: QueryParams,
}

impl NamespaceDescriptor {
	pub fn new(name: impl Into<NameSpec>) -> Self {
		Self {
			id: None,
			name: name.into(),
			params: QueryParams::new(),
		}
	}

	pub fn with_id(mut self, id: impl Into<String>) -> Self {
		self.id = Some(id.into());
		self
	}

	pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.params.insert(key, value);
		self
	}

	pub fn with_params(mut self, params: QueryParams) -> Self {
		self.params = params;
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn insert_replaces_existing_key_in_place() {
		let mut params = QueryParams::new();
		params.insert("a", "1");
		params.insert("b", "2");
		params.insert("a", "3");

		assert_eq!(params.len(), 2);
		assert_eq!(params.get("a"), Some("3"));
		let order: Vec<&str> = params.iter().map(|(k, _)| k).collect();
		assert_eq!(order, ["a", "b"]);
	}

	#[test]
	fn equivalence_ignores_order() {
		let left: QueryParams = [("a", "1"), ("b", "2")].into_iter().collect();
		let right: QueryParams = [("b", "2"), ("a", "1")].into_iter().collect();

		assert!(left.equivalent(&right));
		assert!(right.equivalent(&left));
	}

	#[test]
	fn equivalence_rejects_subset_with_extra_keys() {
		let small: QueryParams = [("a", "1")].into_iter().collect();
		let large: QueryParams = [("a", "1"), ("b", "2")].into_iter().collect();

		assert!(!small.equivalent(&large));
		assert!(!large.equivalent(&small));
	}

	#[test]
	fn equivalence_rejects_differing_values() {
		let left: QueryParams = [("a", "1")].into_iter().collect();
		let right: QueryParams = [("a", "2")].into_iter().collect();

		assert!(!left.equivalent(&right));
	}

	#[test]
	fn empty_params_are_equivalent() {
		assert!(QueryParams::new().equivalent(&QueryParams::new()));
	}

	#[test]
	fn name_spec_deserializes_untagged() {
		let single: NameSpec = serde_json::from_str(r#""comments""#).unwrap();
		assert_eq!(single, NameSpec::Single("comments".to_string()));

		let batch: NameSpec = serde_json::from_str(r#"["a", "b"]"#).unwrap();
		assert_eq!(
			batch,
			NameSpec::Batch(vec!["a".to_string(), "b".to_string()])
		);
	}

	#[test]
	fn name_spec_names_covers_both_variants() {
		assert_eq!(NameSpec::from("a").names(), ["a"]);
		assert_eq!(NameSpec::from(&["a", "b"][..]).names(), ["a", "b"]);
	}

	#[test]
	fn descriptor_builder_accumulates_params() {
		let descriptor = NamespaceDescriptor::new("comments")
			.with_id("c")
			.with_param("postId", "5")
			.with_param("sort", "asc");

		assert_eq!(descriptor.id.as_deref(), Some("c"));
		assert_eq!(descriptor.params.get("postId"), Some("5"));
		assert_eq!(descriptor.params.get("sort"), Some("asc"));
	}
}
