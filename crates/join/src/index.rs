// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use indexmap::IndexMap;
use smallvec::SmallVec;
use tracing::{instrument, trace};
use xxhash_rust::xxh3::Xxh3Builder;

use crate::{
	MissingKeys,
	key::{CompositeKey, KeyColumns, has_missing},
};

type Bucket = SmallVec<[usize; 4]>;

/// Multimap from composite key to the rows that produced it. Rows inside a
/// bucket keep their table order.
pub struct MatchIndex<'a> {
	buckets: IndexMap<CompositeKey<'a>, Bucket, Xxh3Builder>,
	missing_keys: MissingKeys,
}

impl<'a> MatchIndex<'a> {
	#[instrument(name = "join::index::build", level = "trace", skip_all, fields(rows = keys.row_count()))]
	pub fn build(keys: &KeyColumns<'a>, missing_keys: MissingKeys) -> Self {
		let mut buckets: IndexMap<CompositeKey<'a>, Bucket, Xxh3Builder> =
			IndexMap::with_capacity_and_hasher(keys.row_count(), Xxh3Builder::new());

		for row in 0..keys.row_count() {
			let key = keys.encode(row);
			if missing_keys == MissingKeys::NeverMatch && has_missing(&key) {
				continue;
			}
			buckets.entry(key).or_default().push(row);
		}

		trace!(buckets = buckets.len(), "match index built");

		Self {
			buckets,
			missing_keys,
		}
	}

	/// Rows stored under `key`, in row order. Empty when nothing matches.
	pub fn probe(&self, key: &CompositeKey<'a>) -> &[usize] {
		if self.missing_keys == MissingKeys::NeverMatch && has_missing(key) {
			return &[];
		}
		self.buckets.get(key).map(|bucket| bucket.as_slice()).unwrap_or(&[])
	}

	/// Number of distinct keys.
	pub fn len(&self) -> usize {
		self.buckets.len()
	}

	pub fn is_empty(&self) -> bool {
		self.buckets.is_empty()
	}
}
