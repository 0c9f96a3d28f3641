// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rayon::prelude::*;
use tabula_column::{Column, ColumnData, Table};
use tabula_type::{Type, Value};
use tracing::instrument;

use crate::{Projection, RowPair, Source};

/// Copies the values of every output column for the given row pairs into a
/// new table. Columns are filled in parallel; the row order is the order of
/// `pairs`.
#[instrument(name = "join::materialize", level = "trace", skip_all, fields(columns = projection.len(), rows = pairs.len()))]
pub(crate) fn materialize(
	left: &Table,
	right: &Table,
	projection: &Projection,
	pairs: &[RowPair],
) -> crate::Result<Table> {
	let left_rows: Vec<Option<usize>> = pairs.iter().map(|p| p.left).collect();
	let right_rows: Vec<Option<usize>> = pairs.iter().map(|p| p.right).collect();

	let columns = projection
		.columns()
		.par_iter()
		.map(|output| {
			let data = match output.source {
				Source::Left(position) => left[position].gather(&left_rows),
				Source::Right(position) => right[position].gather(&right_rows),
				Source::Key {
					left: l,
					right: r,
				} => coalesce(&left[l], &right[r], output.ty, pairs)?,
			};
			Ok(Column::new(output.name.clone(), data))
		})
		.collect::<crate::Result<Vec<_>>>()?;

	Ok(Table::new_unchecked(columns))
}

fn coalesce(left: &Column, right: &Column, ty: Type, pairs: &[RowPair]) -> crate::Result<ColumnData> {
	let mut result = ColumnData::with_capacity(ty, pairs.len());
	for pair in pairs {
		let value = match (pair.left, pair.right) {
			(Some(l), _) => left.get_value(l),
			(None, Some(r)) => right.get_value(r),
			(None, None) => Value::Undefined,
		};
		result.push_value(value)?;
	}
	Ok(result)
}
