// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tabula_type::Value;
use tracing::instrument;

use crate::Table;

/// A view of one row used by [`Table::filter`].
#[derive(Clone, Copy, Debug)]
pub struct RowRef<'a> {
	table: &'a Table,
	index: usize,
}

impl<'a> RowRef<'a> {
	pub fn index(&self) -> usize {
		self.index
	}

	/// The value in the first column called `name`, `None` if there is no
	/// such column.
	pub fn get(&self, name: &str) -> Option<Value> {
		self.table.column(name).map(|c| c.get_value(self.index))
	}

	pub fn value(&self, column: usize) -> Value {
		self.table[column].get_value(self.index)
	}
}

impl Table {
	/// A new table holding the rows at `indices`, in that order.
	pub fn select_rows(&self, indices: &[usize]) -> Table {
		Table::new_unchecked(self.iter().map(|c| c.with_new_data(c.select(indices))).collect())
	}

	/// A new table holding the rows for which `predicate` returns true.
	#[instrument(name = "Table::filter", level = "trace", skip_all, fields(rows = self.row_count()))]
	pub fn filter(&self, predicate: impl Fn(RowRef<'_>) -> bool) -> Table {
		let indices: Vec<usize> = (0..self.row_count())
			.filter(|&index| {
				predicate(RowRef {
					table: self,
					index,
				})
			})
			.collect();
		self.select_rows(&indices)
	}

	pub fn head(&self, num: usize) -> Table {
		Table::new_unchecked(self.iter().map(|c| c.with_new_data(c.take(num))).collect())
	}
}
