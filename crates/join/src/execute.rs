// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tracing::{debug, instrument};

use crate::{JoinType, MatchIndex, MissingKeys, key::KeyColumns};

/// One output row of a join step: the contributing row of each side, or
/// `None` when that side is absent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RowPair {
	pub left: Option<usize>,
	pub right: Option<usize>,
}

impl RowPair {
	pub fn matched(left: usize, right: usize) -> Self {
		Self {
			left: Some(left),
			right: Some(right),
		}
	}

	pub fn left_only(left: usize) -> Self {
		Self {
			left: Some(left),
			right: None,
		}
	}

	pub fn right_only(right: usize) -> Self {
		Self {
			left: None,
			right: Some(right),
		}
	}
}

/// Enumerates the row pairs of one join step in output order.
///
/// INNER, LEFT OUTER and FULL OUTER index the right table and walk the left
/// rows in order; unmatched right rows of a FULL OUTER join follow at the end
/// in right order. RIGHT OUTER indexes the left table and walks the right
/// rows in order. Duplicate keys fan out as a cross product.
#[instrument(name = "join::enumerate_pairs", level = "trace", skip_all, fields(join_type = %join_type))]
pub fn enumerate_pairs<'a>(
	join_type: JoinType,
	left: &KeyColumns<'a>,
	right: &KeyColumns<'a>,
	missing_keys: MissingKeys,
) -> Vec<RowPair> {
	let pairs = match join_type {
		JoinType::Inner | JoinType::LeftOuter | JoinType::FullOuter => probe_left(join_type, left, right, missing_keys),
		JoinType::RightOuter => probe_right(left, right, missing_keys),
	};

	debug!(pairs = pairs.len(), "row pairs enumerated");
	pairs
}

fn probe_left<'a>(
	join_type: JoinType,
	left: &KeyColumns<'a>,
	right: &KeyColumns<'a>,
	missing_keys: MissingKeys,
) -> Vec<RowPair> {
	let index = MatchIndex::build(right, missing_keys);
	let mut pairs = Vec::with_capacity(left.row_count());
	let mut right_matched = vec![false; right.row_count()];

	for l in 0..left.row_count() {
		let matches = index.probe(&left.encode(l));
		if matches.is_empty() {
			if join_type.keeps_unmatched_left() {
				pairs.push(RowPair::left_only(l));
			}
			continue;
		}

		for &r in matches {
			pairs.push(RowPair::matched(l, r));
			right_matched[r] = true;
		}
	}

	if join_type.keeps_unmatched_right() {
		pairs.extend(right_matched.iter().enumerate().filter(|(_, matched)| !**matched).map(|(r, _)| RowPair::right_only(r)));
	}

	pairs
}

fn probe_right<'a>(left: &KeyColumns<'a>, right: &KeyColumns<'a>, missing_keys: MissingKeys) -> Vec<RowPair> {
	let index = MatchIndex::build(left, missing_keys);
	let mut pairs = Vec::with_capacity(right.row_count());

	for r in 0..right.row_count() {
		let matches = index.probe(&right.encode(r));
		if matches.is_empty() {
			pairs.push(RowPair::right_only(r));
			continue;
		}

		pairs.extend(matches.iter().map(|&l| RowPair::matched(l, r)));
	}

	pairs
}
