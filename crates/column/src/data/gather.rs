// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::{ColumnData, container::UndefinedContainer};

impl ColumnData {
	/// Copies the slots at `indices` into a new column of the same type. A
	/// `None` index produces an undefined slot.
	pub fn gather(&self, indices: &[Option<usize>]) -> ColumnData {
		match self {
			ColumnData::Bool(container) => ColumnData::Bool(container.gather(indices)),
			ColumnData::Float4(container) => ColumnData::Float4(container.gather(indices)),
			ColumnData::Float8(container) => ColumnData::Float8(container.gather(indices)),
			ColumnData::Int2(container) => ColumnData::Int2(container.gather(indices)),
			ColumnData::Int4(container) => ColumnData::Int4(container.gather(indices)),
			ColumnData::Int8(container) => ColumnData::Int8(container.gather(indices)),
			ColumnData::Utf8(container) => ColumnData::Utf8(container.gather(indices)),
			ColumnData::Date(container) => ColumnData::Date(container.gather(indices)),
			ColumnData::DateTime(container) => ColumnData::DateTime(container.gather(indices)),
			ColumnData::Time(container) => ColumnData::Time(container.gather(indices)),
			ColumnData::Undefined(_) => ColumnData::Undefined(UndefinedContainer::new(indices.len())),
		}
	}

	pub fn select(&self, indices: &[usize]) -> ColumnData {
		match self {
			ColumnData::Bool(container) => ColumnData::Bool(container.select(indices)),
			ColumnData::Float4(container) => ColumnData::Float4(container.select(indices)),
			ColumnData::Float8(container) => ColumnData::Float8(container.select(indices)),
			ColumnData::Int2(container) => ColumnData::Int2(container.select(indices)),
			ColumnData::Int4(container) => ColumnData::Int4(container.select(indices)),
			ColumnData::Int8(container) => ColumnData::Int8(container.select(indices)),
			ColumnData::Utf8(container) => ColumnData::Utf8(container.select(indices)),
			ColumnData::Date(container) => ColumnData::Date(container.select(indices)),
			ColumnData::DateTime(container) => ColumnData::DateTime(container.select(indices)),
			ColumnData::Time(container) => ColumnData::Time(container.select(indices)),
			ColumnData::Undefined(_) => ColumnData::Undefined(UndefinedContainer::new(indices.len())),
		}
	}

	pub fn take(&self, num: usize) -> ColumnData {
		match self {
			ColumnData::Bool(container) => ColumnData::Bool(container.take(num)),
			ColumnData::Float4(container) => ColumnData::Float4(container.take(num)),
			ColumnData::Float8(container) => ColumnData::Float8(container.take(num)),
			ColumnData::Int2(container) => ColumnData::Int2(container.take(num)),
			ColumnData::Int4(container) => ColumnData::Int4(container.take(num)),
			ColumnData::Int8(container) => ColumnData::Int8(container.take(num)),
			ColumnData::Utf8(container) => ColumnData::Utf8(container.take(num)),
			ColumnData::Date(container) => ColumnData::Date(container.take(num)),
			ColumnData::DateTime(container) => ColumnData::DateTime(container.take(num)),
			ColumnData::Time(container) => ColumnData::Time(container.take(num)),
			ColumnData::Undefined(container) => ColumnData::Undefined(container.take(num)),
		}
	}
}
