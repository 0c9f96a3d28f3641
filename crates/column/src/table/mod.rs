// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	collections::HashSet,
	ops::{Deref, Index},
};

use serde::{Deserialize, Serialize};
use tabula_type::{Type, Value, return_error};

use crate::{Column, ColumnData, ColumnError};

mod display;
mod select;

pub use select::RowRef;

/// An ordered list of columns sharing one row count.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
	columns: Vec<Column>,
}

impl Deref for Table {
	type Target = [Column];

	fn deref(&self) -> &Self::Target {
		&self.columns
	}
}

impl Index<usize> for Table {
	type Output = Column;

	fn index(&self, index: usize) -> &Self::Output {
		&self.columns[index]
	}
}

impl Table {
	/// Builds a table, rejecting columns of unequal length and names that
	/// collide case-insensitively.
	pub fn new(columns: Vec<Column>) -> crate::Result<Self> {
		let mut seen = HashSet::with_capacity(columns.len());
		for column in &columns {
			if !seen.insert(column.name.to_lowercase()) {
				return_error!(ColumnError::DuplicateColumnName {
					name: column.name.clone()
				});
			}
		}

		let expected = columns.first().map_or(0, |c| c.len());
		if let Some(column) = columns.iter().find(|c| c.len() != expected) {
			return_error!(ColumnError::RowCountMismatch {
				name: column.name.clone(),
				expected,
				actual: column.len(),
			});
		}

		Ok(Self {
			columns,
		})
	}

	/// Builds a table that may contain duplicate column names. Lookups by
	/// name return the first match.
	pub fn new_unchecked(columns: Vec<Column>) -> Self {
		let n = columns.first().map_or(0, |c| c.len());
		assert!(columns.iter().all(|c| c.len() == n), "all columns must have the same length");

		Self {
			columns,
		}
	}

	pub fn empty() -> Self {
		Self::default()
	}

	/// Builds a table from row-major values; `Value::Undefined` marks a
	/// missing cell. `names` and `types` must have the same length.
	pub fn from_rows(names: &[&str], types: &[Type], rows: Vec<Vec<Value>>) -> crate::Result<Self> {
		if names.len() != types.len() {
			return_error!(ColumnError::RowWidthMismatch {
				row: 0,
				expected: names.len(),
				actual: types.len(),
			});
		}

		let mut columns: Vec<Column> = names
			.iter()
			.zip(types)
			.map(|(name, ty)| Column::new(*name, ColumnData::with_capacity(*ty, rows.len())))
			.collect();

		for (index, row) in rows.into_iter().enumerate() {
			if row.len() != columns.len() {
				return_error!(ColumnError::RowWidthMismatch {
					row: index,
					expected: columns.len(),
					actual: row.len(),
				});
			}
			for (column, value) in columns.iter_mut().zip(row) {
				column.push_value(value)?;
			}
		}

		Self::new(columns)
	}

	pub fn row_count(&self) -> usize {
		self.columns.first().map_or(0, |c| c.len())
	}

	pub fn column_count(&self) -> usize {
		self.columns.len()
	}

	pub fn columns(&self) -> &[Column] {
		&self.columns
	}

	pub fn column_names(&self) -> Vec<&str> {
		self.columns.iter().map(|c| c.name()).collect()
	}

	/// First column whose name matches `name`, ignoring case.
	pub fn column(&self, name: &str) -> Option<&Column> {
		self.column_index(name).map(|index| &self.columns[index])
	}

	/// Position of the first column whose name matches `name`, ignoring case.
	pub fn column_index(&self, name: &str) -> Option<usize> {
		let name = name.to_lowercase();
		self.columns.iter().position(|c| c.name.to_lowercase() == name)
	}

	pub fn try_column(&self, name: &str) -> crate::Result<&Column> {
		match self.column(name) {
			Some(column) => Ok(column),
			None => return_error!(ColumnError::UnknownColumn {
				name: name.to_string(),
				available: self.column_names().into_iter().map(String::from).collect(),
			}),
		}
	}

	pub fn row(&self, index: usize) -> Vec<Value> {
		self.columns.iter().map(|c| c.get_value(index)).collect()
	}

	pub fn rows(&self) -> impl Iterator<Item = Vec<Value>> + '_ {
		(0..self.row_count()).map(|index| self.row(index))
	}
}

#[cfg(test)]
mod tests {
	use tabula_type::{Type, Value};

	use crate::{Column, ColumnData, Table};

	fn animals() -> Table {
		Table::new(vec![
			Column::new("Animal", ColumnData::utf8(["Pig", "Horse"])),
			Column::new("Legs", ColumnData::int4([4, 4])),
		])
		.unwrap()
	}

	mod new {
		use super::*;

		#[test]
		fn test_row_and_column_count() {
			let table = animals();
			assert_eq!(table.row_count(), 2);
			assert_eq!(table.column_count(), 2);
			assert_eq!(table.column_names(), vec!["Animal", "Legs"]);
		}

		#[test]
		fn test_duplicate_name_is_case_insensitive() {
			let err = Table::new(vec![
				Column::new("name", ColumnData::utf8(["a"])),
				Column::new("Name", ColumnData::utf8(["b"])),
			])
			.unwrap_err();
			assert_eq!(err.code(), "COLUMN_001");
		}

		#[test]
		fn test_row_count_mismatch() {
			let err = Table::new(vec![
				Column::new("a", ColumnData::int4([1, 2])),
				Column::new("b", ColumnData::int4([1])),
			])
			.unwrap_err();
			assert_eq!(err.code(), "COLUMN_003");
		}

		#[test]
		fn test_unchecked_allows_duplicates() {
			let table = Table::new_unchecked(vec![
				Column::new("ID", ColumnData::int4([1])),
				Column::new("ID", ColumnData::int4([2])),
			]);
			assert_eq!(table.column_count(), 2);
			assert_eq!(table.column("ID").unwrap().get_value(0), Value::Int4(1));
		}

		#[test]
		fn test_empty() {
			let table = Table::empty();
			assert_eq!(table.row_count(), 0);
			assert_eq!(table.column_count(), 0);
		}
	}

	mod lookup {
		use super::*;

		#[test]
		fn test_try_column_unknown() {
			let err = animals().try_column("Feed").unwrap_err();
			let diagnostic = err.diagnostic();
			assert_eq!(diagnostic.code, "COLUMN_002");
			assert_eq!(diagnostic.notes, vec!["available columns: Animal, Legs".to_string()]);
		}

		#[test]
		fn test_column_lookup_ignores_case() {
			let table = animals();
			assert_eq!(table.column("animal").map(|c| c.name()), Some("Animal"));
			assert_eq!(table.column_index("LEGS"), Some(1));
			assert!(table.column("Feed").is_none());
		}

		#[test]
		fn test_lookup_returns_first_match() {
			let table = Table::new_unchecked(vec![
				Column::new("ID", ColumnData::int4([1])),
				Column::new("id", ColumnData::int4([2])),
			]);
			assert_eq!(table.column_index("Id"), Some(0));
		}

		#[test]
		fn test_row() {
			assert_eq!(animals().row(1), vec![Value::utf8("Horse"), Value::Int4(4)]);
		}
	}

	#[test]
	fn test_from_rows() {
		let table = Table::from_rows(
			&["ID", "Name"],
			&[Type::Float8, Type::Utf8],
			vec![vec![Value::float8(1.1), Value::utf8("Bob")], vec![Value::float8(2.1), Value::Undefined]],
		)
		.unwrap();

		assert_eq!(table.row_count(), 2);
		assert_eq!(table.column("Name").unwrap().count_missing(), 1);
	}

	mod from_rows {
		use super::*;

		#[test]
		fn test_short_row() {
			let err = Table::from_rows(
				&["ID", "Name"],
				&[Type::Int4, Type::Utf8],
				vec![vec![Value::Int4(1), Value::utf8("a")], vec![Value::Int4(2)]],
			)
			.unwrap_err();
			assert_eq!(err.code(), "COLUMN_005");
			assert_eq!(err.diagnostic().message, "row 1 has 1 values, expected 2");
		}

		#[test]
		fn test_missing_type() {
			let err = Table::from_rows(&["ID", "Name"], &[Type::Int4], vec![]).unwrap_err();
			assert_eq!(err.code(), "COLUMN_005");
		}
	}
}
