// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::HashSet;

use tabula_type::{GetType, Type, return_error};
use tracing::{instrument, trace};

use crate::{JoinConfig, JoinError, TableIndex, key::KeyColumns};

/// Where the values of an output column come from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
	/// Column at this position of the left table.
	Left(usize),
	/// Column at this position of the right table.
	Right(usize),
	/// A canonical key column: the left value, or the right key value when
	/// the left row is absent.
	Key {
		left: usize,
		right: usize,
	},
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputColumn {
	pub name: String,
	pub source: Source,
	pub ty: Type,
}

/// The output schema of one join step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Projection {
	columns: Vec<OutputColumn>,
}

impl Projection {
	/// Left columns come first under their own names, followed by the right
	/// columns. Right key columns are dropped unless
	/// `keep_all_join_key_columns` is set. A right column whose name is taken
	/// (ignoring case) is renamed to `T{table_index}.{name}`; if that name is
	/// taken as well the step fails unless `allow_duplicate_column_names` is
	/// set.
	#[instrument(name = "join::project", level = "trace", skip_all, fields(table_index = %table_index))]
	pub fn compute(
		left: &KeyColumns<'_>,
		right: &KeyColumns<'_>,
		config: &JoinConfig,
		table_index: TableIndex,
	) -> crate::Result<Self> {
		let left_table = left.table();
		let right_table = right.table();
		let keep_keys = config.keep_all_join_key_columns();
		let coalesce_keys = !keep_keys && config.join_type().keeps_unmatched_right();

		let mut columns = Vec::with_capacity(left_table.column_count() + right_table.column_count());
		let mut taken: HashSet<String> = HashSet::with_capacity(columns.capacity());

		for (position, column) in left_table.iter().enumerate() {
			let key_pair = left.positions().iter().position(|&p| p == position).map(|k| right.positions()[k]);

			let (source, ty) = match key_pair {
				Some(right_position) if coalesce_keys => {
					let right_type = right_table[right_position].get_type();
					let ty = Type::promote(column.get_type(), right_type).unwrap_or(column.get_type());
					(
						Source::Key {
							left: position,
							right: right_position,
						},
						ty,
					)
				}
				_ => (Source::Left(position), column.get_type()),
			};

			taken.insert(column.name().to_lowercase());
			columns.push(OutputColumn {
				name: column.name().to_string(),
				source,
				ty,
			});
		}

		for (position, column) in right_table.iter().enumerate() {
			if !keep_keys && right.positions().contains(&position) {
				continue;
			}

			let mut name = column.name().to_string();
			if taken.contains(&name.to_lowercase()) {
				name = table_index.prefix(&name);
				if taken.contains(&name.to_lowercase()) && !config.allow_duplicate_column_names() {
					return_error!(JoinError::NamingConflict {
						name,
						table_index: table_index.get(),
					});
				}
				trace!(from = column.name(), to = %name, "renamed right column");
			}

			taken.insert(name.to_lowercase());
			columns.push(OutputColumn {
				name,
				source: Source::Right(position),
				ty: column.get_type(),
			});
		}

		Ok(Self {
			columns,
		})
	}

	pub fn columns(&self) -> &[OutputColumn] {
		&self.columns
	}

	pub fn names(&self) -> Vec<&str> {
		self.columns.iter().map(|c| c.name.as_str()).collect()
	}

	pub fn len(&self) -> usize {
		self.columns.len()
	}

	pub fn is_empty(&self) -> bool {
		self.columns.is_empty()
	}
}
