// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use smallvec::SmallVec;
use tabula_column::{Column, ColumnData, Table};
use tabula_type::{Date, DateTime, GetType, OrderedF64, Time, types_compatible, return_error};
use tracing::instrument;

use crate::{JoinError, JoinSide};

/// One normalized component of a [`CompositeKey`]. Integers of every width
/// share one representation, as do floats, so `Int2(3)` and `Int8(3)` are the
/// same key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum KeyPart<'a> {
	Missing,
	Boolean(bool),
	Integer(i64),
	Float(OrderedF64),
	Text(&'a str),
	Date(Date),
	DateTime(DateTime),
	Time(Time),
}

pub type CompositeKey<'a> = SmallVec<[KeyPart<'a>; 4]>;

/// The key columns of one join participant.
#[derive(Debug)]
pub struct KeyColumns<'a> {
	table: &'a Table,
	positions: Vec<usize>,
}

impl<'a> KeyColumns<'a> {
	/// Looks up every key column by name, ignoring case. The first matching
	/// column wins.
	pub fn resolve(table: &'a Table, names: &[String], side: JoinSide) -> crate::Result<Self> {
		let mut positions = Vec::with_capacity(names.len());
		for name in names {
			match table.column_index(name) {
				Some(position) => positions.push(position),
				None => return_error!(JoinError::UnknownColumn {
					name: name.clone(),
					side,
					available: table.column_names().into_iter().map(String::from).collect(),
				}),
			}
		}

		Ok(Self {
			table,
			positions,
		})
	}

	pub fn table(&self) -> &'a Table {
		self.table
	}

	/// Column positions of the keys within their table, in key order.
	pub fn positions(&self) -> &[usize] {
		&self.positions
	}

	pub fn len(&self) -> usize {
		self.positions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.positions.is_empty()
	}

	pub fn row_count(&self) -> usize {
		self.table.row_count()
	}

	pub fn columns(&self) -> impl Iterator<Item = &'a Column> + '_ {
		let table = self.table;
		self.positions.iter().map(move |&position| &table[position])
	}

	pub fn encode(&self, row: usize) -> CompositeKey<'a> {
		self.columns().map(|column| key_part(column.data(), row)).collect()
	}
}

pub fn has_missing(key: &CompositeKey<'_>) -> bool {
	key.iter().any(|part| matches!(part, KeyPart::Missing))
}

fn key_part(data: &ColumnData, row: usize) -> KeyPart<'_> {
	let part = match data {
		ColumnData::Bool(container) => container.get(row).map(|v| KeyPart::Boolean(*v)),
		ColumnData::Float4(container) => container.get(row).map(|v| KeyPart::Float((*v).into())),
		ColumnData::Float8(container) => container.get(row).map(|v| KeyPart::Float(*v)),
		ColumnData::Int2(container) => container.get(row).map(|v| KeyPart::Integer(*v as i64)),
		ColumnData::Int4(container) => container.get(row).map(|v| KeyPart::Integer(*v as i64)),
		ColumnData::Int8(container) => container.get(row).map(|v| KeyPart::Integer(*v)),
		ColumnData::Utf8(container) => container.get(row).map(|v| KeyPart::Text(v.as_str())),
		ColumnData::Date(container) => container.get(row).map(|v| KeyPart::Date(*v)),
		ColumnData::DateTime(container) => container.get(row).map(|v| KeyPart::DateTime(*v)),
		ColumnData::Time(container) => container.get(row).map(|v| KeyPart::Time(*v)),
		ColumnData::Undefined(_) => None,
	};
	part.unwrap_or(KeyPart::Missing)
}

/// Verifies that both sides have the same number of key columns and that every
/// pair belongs to one type family. Runs once per join step, before any row is
/// touched.
#[instrument(name = "join::check_key_types", level = "trace", skip_all)]
pub fn check_key_types(left: &KeyColumns<'_>, right: &KeyColumns<'_>) -> crate::Result<()> {
	if left.len() != right.len() {
		return_error!(JoinError::KeyCountMismatch {
			left: left.len(),
			right: right.len(),
		});
	}

	for (l, r) in left.columns().zip(right.columns()) {
		if !types_compatible(l.get_type(), r.get_type()) {
			return_error!(JoinError::TypeMismatch {
				left_column: l.name().to_string(),
				left_type: l.get_type(),
				right_column: r.name().to_string(),
				right_type: r.get_type(),
			});
		}
	}

	Ok(())
}
