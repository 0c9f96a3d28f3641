// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};
use tabula_column::Table;
use tracing::{debug, instrument, trace};

use crate::{
	JoinConfig, JoinSide, Projection, enumerate_pairs,
	key::{KeyColumns, check_key_types},
	materialize::materialize,
};

/// Position of a right table within a chained join, used to prefix colliding
/// column names. The first right table is `2`, the left table being `1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TableIndex(usize);

impl TableIndex {
	pub fn first() -> Self {
		Self(2)
	}

	pub fn get(&self) -> usize {
		self.0
	}

	pub fn next(self) -> Self {
		Self(self.0 + 1)
	}

	pub fn prefix(&self, name: &str) -> String {
		format!("T{}.{}", self.0, name)
	}
}

impl Display for TableIndex {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "T{}", self.0)
	}
}

/// Joins `left` with every table of `rights` in turn. The result of each step
/// becomes the left table of the next one. Without right tables the result is
/// a copy of `left`.
///
/// Every key column is resolved and type checked before the first step runs,
/// so a bad configuration never produces partial work.
#[instrument(name = "join", level = "debug", skip_all, fields(rights = rights.len(), join_type = %config.join_type()))]
pub fn join(left: &Table, rights: &[&Table], config: &JoinConfig) -> crate::Result<Table> {
	validate(left, rights, config)?;

	let (result, _) = rights.iter().try_fold((None::<Table>, TableIndex::first()), |(acc, table_index), right| {
		let current = acc.as_ref().unwrap_or(left);
		let next = step(current, right, config, table_index)?;
		Ok::<_, crate::Error>((Some(next), table_index.next()))
	})?;

	let result = result.unwrap_or_else(|| left.clone());
	debug!(rows = result.row_count(), columns = result.column_count(), "join complete");
	Ok(result)
}

fn validate(left: &Table, rights: &[&Table], config: &JoinConfig) -> crate::Result<()> {
	let left_keys = KeyColumns::resolve(left, config.left_columns(), JoinSide::Left)?;
	for right in rights {
		let right_keys = KeyColumns::resolve(right, config.right_columns(), JoinSide::Right)?;
		check_key_types(&left_keys, &right_keys)?;
	}
	Ok(())
}

#[instrument(
	name = "join::step",
	level = "debug",
	skip_all,
	fields(table_index = %table_index, left_rows = left.row_count(), right_rows = right.row_count())
)]
fn step(left: &Table, right: &Table, config: &JoinConfig, table_index: TableIndex) -> crate::Result<Table> {
	let left_keys = KeyColumns::resolve(left, config.left_columns(), JoinSide::Left)?;
	let right_keys = KeyColumns::resolve(right, config.right_columns(), JoinSide::Right)?;
	check_key_types(&left_keys, &right_keys)?;

	let projection = Projection::compute(&left_keys, &right_keys, config, table_index)?;

	let join_type = config.join_type();
	let pairs = if left.row_count() == 0 && !join_type.keeps_unmatched_right() {
		trace!("left table is empty");
		Vec::new()
	} else {
		enumerate_pairs(join_type, &left_keys, &right_keys, config.missing_keys())
	};

	materialize(left, right, &projection, &pairs)
}

#[cfg(test)]
mod tests {
	use tabula_testing::fixture;
	use tabula_type::Value;

	use super::*;
	use crate::JoinType;

	mod table_index {
		use super::*;

		#[test]
		fn test_first_is_two() {
			assert_eq!(TableIndex::first().get(), 2);
			assert_eq!(TableIndex::first().next().get(), 3);
		}

		#[test]
		fn test_prefix() {
			assert_eq!(TableIndex::first().prefix("Price"), "T2.Price");
			assert_eq!(TableIndex::first().to_string(), "T2");
		}
	}

	mod fold {
		use super::*;

		#[test]
		fn test_without_right_tables_copies_left() {
			let left = fixture::table("K:int4,V:utf8\n1,a");
			let config = JoinConfig::builder(["K"]).build().unwrap();

			let result = join(&left, &[], &config).unwrap();
			assert_eq!(result, left);
		}

		#[test]
		fn test_chained_join_numbers_right_tables() {
			let left = fixture::table("ID:int4,Name:utf8,Price:float8\n1,Apple,1.0\n2,Pear,2.0");
			let second = fixture::table("ID:int4,Price:float8\n1,1.5\n2,2.5");
			let third = fixture::table("ID:int4,Price:float8\n1,1.7\n2,2.7");
			let config = JoinConfig::builder(["ID"]).keep_all_join_key_columns(true).build().unwrap();

			let result = join(&left, &[&second, &third], &config).unwrap();
			assert_eq!(result.column_names(), vec!["ID", "Name", "Price", "T2.ID", "T2.Price", "T3.ID", "T3.Price"]);
			assert_eq!(result.row_count(), 2);
		}

		#[test]
		fn test_later_type_mismatch_fails_before_any_step() {
			let left = fixture::table("K:int4\n1");
			let good = fixture::table("K:int8\n1");
			let bad = fixture::table("K:utf8\nx");
			let config = JoinConfig::builder(["K"]).build().unwrap();

			let err = join(&left, &[&good, &bad], &config).unwrap_err();
			assert_eq!(err.code(), "JOIN_001");
		}

		#[test]
		fn test_unknown_right_column() {
			let left = fixture::table("K:int4\n1");
			let right = fixture::table("Other:int4\n1");
			let config = JoinConfig::builder(["K"]).build().unwrap();

			let err = join(&left, &[&right], &config).unwrap_err();
			assert_eq!(err.code(), "JOIN_003");
		}

		#[test]
		fn test_empty_left_inner_is_empty() {
			let left = fixture::table("K:int4,A:utf8");
			let right = fixture::table("K:int4,B:utf8\n1,x");
			let config = JoinConfig::builder(["K"]).build().unwrap();

			let result = join(&left, &[&right], &config).unwrap();
			assert_eq!(result.row_count(), 0);
			assert_eq!(result.column_names(), vec!["K", "A", "B"]);
		}

		#[test]
		fn test_empty_left_full_outer_keeps_right_rows() {
			let left = fixture::table("K:int4,A:utf8");
			let right = fixture::table("K:int4,B:utf8\n1,x\n2,y");
			let config = JoinConfig::builder(["K"]).join_type(JoinType::FullOuter).build().unwrap();

			let result = join(&left, &[&right], &config).unwrap();
			assert_eq!(result.row_count(), 2);
			assert_eq!(result.row(1), vec![Value::Int4(2), Value::Undefined, Value::utf8("y")]);
		}
	}
}
