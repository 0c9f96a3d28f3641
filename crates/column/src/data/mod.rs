// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};
use tabula_type::{Date, DateTime, GetType, OrderedF32, OrderedF64, Time, Type, Value};

use crate::{
	container::{BoolContainer, Container, NumberContainer, TemporalContainer, UndefinedContainer, Utf8Container},
};

mod gather;
mod push;

/// Column storage, one variant per [`Type`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ColumnData {
	Bool(BoolContainer),
	Float4(NumberContainer<OrderedF32>),
	Float8(NumberContainer<OrderedF64>),
	Int2(NumberContainer<i16>),
	Int4(NumberContainer<i32>),
	Int8(NumberContainer<i64>),
	Utf8(Utf8Container),
	Date(TemporalContainer<Date>),
	DateTime(TemporalContainer<DateTime>),
	Time(TemporalContainer<Time>),
	// a column whose values are all undefined
	Undefined(UndefinedContainer),
}

impl ColumnData {
	pub fn with_capacity(ty: Type, capacity: usize) -> Self {
		match ty {
			Type::Boolean => ColumnData::Bool(Container::with_capacity(capacity)),
			Type::Float4 => ColumnData::Float4(Container::with_capacity(capacity)),
			Type::Float8 => ColumnData::Float8(Container::with_capacity(capacity)),
			Type::Int2 => ColumnData::Int2(Container::with_capacity(capacity)),
			Type::Int4 => ColumnData::Int4(Container::with_capacity(capacity)),
			Type::Int8 => ColumnData::Int8(Container::with_capacity(capacity)),
			Type::Utf8 => ColumnData::Utf8(Container::with_capacity(capacity)),
			Type::Date => ColumnData::Date(Container::with_capacity(capacity)),
			Type::DateTime => ColumnData::DateTime(Container::with_capacity(capacity)),
			Type::Time => ColumnData::Time(Container::with_capacity(capacity)),
			Type::Undefined => ColumnData::Undefined(UndefinedContainer::default()),
		}
	}

	/// A column of `len` undefined slots that still reports `ty`.
	pub fn undefined_of(ty: Type, len: usize) -> Self {
		match ty {
			Type::Boolean => ColumnData::Bool(Container::undefined(len)),
			Type::Float4 => ColumnData::Float4(Container::undefined(len)),
			Type::Float8 => ColumnData::Float8(Container::undefined(len)),
			Type::Int2 => ColumnData::Int2(Container::undefined(len)),
			Type::Int4 => ColumnData::Int4(Container::undefined(len)),
			Type::Int8 => ColumnData::Int8(Container::undefined(len)),
			Type::Utf8 => ColumnData::Utf8(Container::undefined(len)),
			Type::Date => ColumnData::Date(Container::undefined(len)),
			Type::DateTime => ColumnData::DateTime(Container::undefined(len)),
			Type::Time => ColumnData::Time(Container::undefined(len)),
			Type::Undefined => ColumnData::Undefined(UndefinedContainer::new(len)),
		}
	}

	pub fn undefined(len: usize) -> Self {
		ColumnData::Undefined(UndefinedContainer::new(len))
	}

	pub fn bool(data: impl IntoIterator<Item = bool>) -> Self {
		ColumnData::Bool(Container::new(data.into_iter().collect()))
	}

	/// NaN values become undefined slots.
	pub fn float4(data: impl IntoIterator<Item = f32>) -> Self {
		ColumnData::Float4(data.into_iter().map(|v| OrderedF32::try_from(v).ok()).collect())
	}

	/// NaN values become undefined slots.
	pub fn float8(data: impl IntoIterator<Item = f64>) -> Self {
		ColumnData::Float8(data.into_iter().map(|v| OrderedF64::try_from(v).ok()).collect())
	}

	pub fn int2(data: impl IntoIterator<Item = i16>) -> Self {
		ColumnData::Int2(Container::new(data.into_iter().collect()))
	}

	pub fn int4(data: impl IntoIterator<Item = i32>) -> Self {
		ColumnData::Int4(Container::new(data.into_iter().collect()))
	}

	pub fn int8(data: impl IntoIterator<Item = i64>) -> Self {
		ColumnData::Int8(Container::new(data.into_iter().collect()))
	}

	pub fn utf8(data: impl IntoIterator<Item = impl Into<String>>) -> Self {
		ColumnData::Utf8(Container::new(data.into_iter().map(Into::into).collect()))
	}

	pub fn date(data: impl IntoIterator<Item = Date>) -> Self {
		ColumnData::Date(Container::new(data.into_iter().collect()))
	}

	pub fn datetime(data: impl IntoIterator<Item = DateTime>) -> Self {
		ColumnData::DateTime(Container::new(data.into_iter().collect()))
	}

	pub fn time(data: impl IntoIterator<Item = Time>) -> Self {
		ColumnData::Time(Container::new(data.into_iter().collect()))
	}
}

impl ColumnData {
	pub fn len(&self) -> usize {
		match self {
			ColumnData::Bool(container) => container.len(),
			ColumnData::Float4(container) => container.len(),
			ColumnData::Float8(container) => container.len(),
			ColumnData::Int2(container) => container.len(),
			ColumnData::Int4(container) => container.len(),
			ColumnData::Int8(container) => container.len(),
			ColumnData::Utf8(container) => container.len(),
			ColumnData::Date(container) => container.len(),
			ColumnData::DateTime(container) => container.len(),
			ColumnData::Time(container) => container.len(),
			ColumnData::Undefined(container) => container.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn is_defined(&self, index: usize) -> bool {
		match self {
			ColumnData::Bool(container) => container.is_defined(index),
			ColumnData::Float4(container) => container.is_defined(index),
			ColumnData::Float8(container) => container.is_defined(index),
			ColumnData::Int2(container) => container.is_defined(index),
			ColumnData::Int4(container) => container.is_defined(index),
			ColumnData::Int8(container) => container.is_defined(index),
			ColumnData::Utf8(container) => container.is_defined(index),
			ColumnData::Date(container) => container.is_defined(index),
			ColumnData::DateTime(container) => container.is_defined(index),
			ColumnData::Time(container) => container.is_defined(index),
			ColumnData::Undefined(_) => false,
		}
	}

	pub fn get_value(&self, index: usize) -> Value {
		match self {
			ColumnData::Bool(container) => container.get_value(index),
			ColumnData::Float4(container) => container.get_value(index),
			ColumnData::Float8(container) => container.get_value(index),
			ColumnData::Int2(container) => container.get_value(index),
			ColumnData::Int4(container) => container.get_value(index),
			ColumnData::Int8(container) => container.get_value(index),
			ColumnData::Utf8(container) => container.get_value(index),
			ColumnData::Date(container) => container.get_value(index),
			ColumnData::DateTime(container) => container.get_value(index),
			ColumnData::Time(container) => container.get_value(index),
			ColumnData::Undefined(_) => Value::Undefined,
		}
	}

	pub fn count_undefined(&self) -> usize {
		match self {
			ColumnData::Bool(container) => container.count_undefined(),
			ColumnData::Float4(container) => container.count_undefined(),
			ColumnData::Float8(container) => container.count_undefined(),
			ColumnData::Int2(container) => container.count_undefined(),
			ColumnData::Int4(container) => container.count_undefined(),
			ColumnData::Int8(container) => container.count_undefined(),
			ColumnData::Utf8(container) => container.count_undefined(),
			ColumnData::Date(container) => container.count_undefined(),
			ColumnData::DateTime(container) => container.count_undefined(),
			ColumnData::Time(container) => container.count_undefined(),
			ColumnData::Undefined(container) => container.len(),
		}
	}

	pub fn as_string(&self, index: usize) -> String {
		self.get_value(index).to_string()
	}

	pub fn iter(&self) -> impl Iterator<Item = Value> + '_ {
		(0..self.len()).map(|index| self.get_value(index))
	}
}

impl GetType for ColumnData {
	fn get_type(&self) -> Type {
		match self {
			ColumnData::Bool(_) => Type::Boolean,
			ColumnData::Float4(_) => Type::Float4,
			ColumnData::Float8(_) => Type::Float8,
			ColumnData::Int2(_) => Type::Int2,
			ColumnData::Int4(_) => Type::Int4,
			ColumnData::Int8(_) => Type::Int8,
			ColumnData::Utf8(_) => Type::Utf8,
			ColumnData::Date(_) => Type::Date,
			ColumnData::DateTime(_) => Type::DateTime,
			ColumnData::Time(_) => Type::Time,
			ColumnData::Undefined(_) => Type::Undefined,
		}
	}
}
