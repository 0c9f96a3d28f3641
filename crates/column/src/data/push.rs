// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tabula_type::{GetType, Value, return_error};

use crate::{ColumnData, ColumnError};

impl ColumnData {
	pub fn push_undefined(&mut self) {
		match self {
			ColumnData::Bool(container) => container.push_undefined(),
			ColumnData::Float4(container) => container.push_undefined(),
			ColumnData::Float8(container) => container.push_undefined(),
			ColumnData::Int2(container) => container.push_undefined(),
			ColumnData::Int4(container) => container.push_undefined(),
			ColumnData::Int8(container) => container.push_undefined(),
			ColumnData::Utf8(container) => container.push_undefined(),
			ColumnData::Date(container) => container.push_undefined(),
			ColumnData::DateTime(container) => container.push_undefined(),
			ColumnData::Time(container) => container.push_undefined(),
			ColumnData::Undefined(container) => container.push_undefined(),
		}
	}

	/// Appends `value`. Narrower values of the same family are widened to the
	/// column type; an all-undefined column adopts the type of the first
	/// defined value pushed into it.
	pub fn push_value(&mut self, value: Value) -> crate::Result<()> {
		if value.is_undefined() {
			self.push_undefined();
			return Ok(());
		}

		if let ColumnData::Undefined(container) = self {
			let len = container.len();
			*self = ColumnData::undefined_of(value.get_type(), len);
		}

		let expected = self.get_type();
		let actual = value.get_type();
		let Some(value) = value.promote_to(expected) else {
			return_error!(ColumnError::ValueTypeMismatch {
				expected,
				actual
			});
		};

		match (self, value) {
			(ColumnData::Bool(container), Value::Boolean(v)) => container.push(v),
			(ColumnData::Float4(container), Value::Float4(v)) => container.push(v),
			(ColumnData::Float8(container), Value::Float8(v)) => container.push(v),
			(ColumnData::Int2(container), Value::Int2(v)) => container.push(v),
			(ColumnData::Int4(container), Value::Int4(v)) => container.push(v),
			(ColumnData::Int8(container), Value::Int8(v)) => container.push(v),
			(ColumnData::Utf8(container), Value::Utf8(v)) => container.push(v),
			(ColumnData::Date(container), Value::Date(v)) => container.push(v),
			(ColumnData::DateTime(container), Value::DateTime(v)) => container.push(v),
			(ColumnData::Time(container), Value::Time(v)) => container.push(v),
			(_, _) => return_error!(ColumnError::ValueTypeMismatch {
				expected,
				actual
			}),
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use tabula_type::{GetType, Type, Value};

	use crate::ColumnData;

	#[test]
	fn test_push_same_type() {
		let mut data = ColumnData::int4([1]);
		data.push_value(Value::Int4(2)).unwrap();
		data.push_value(Value::Undefined).unwrap();

		assert_eq!(data.len(), 3);
		assert_eq!(data.get_value(1), Value::Int4(2));
		assert_eq!(data.get_value(2), Value::Undefined);
	}

	#[test]
	fn test_push_widens_within_family() {
		let mut data = ColumnData::int8([]);
		data.push_value(Value::Int2(7)).unwrap();
		assert_eq!(data.get_value(0), Value::Int8(7));
	}

	#[test]
	fn test_push_into_undefined_adopts_type() {
		let mut data = ColumnData::undefined(2);
		data.push_value(Value::utf8("x")).unwrap();

		assert_eq!(data.get_type(), Type::Utf8);
		assert_eq!(data.len(), 3);
		assert_eq!(data.get_value(0), Value::Undefined);
		assert_eq!(data.get_value(2), Value::utf8("x"));
	}

	#[test]
	fn test_push_wrong_type() {
		let mut data = ColumnData::int4([1]);
		let err = data.push_value(Value::utf8("one")).unwrap_err();

		assert_eq!(err.code(), "COLUMN_004");
		assert_eq!(data.len(), 1);
	}

	#[test]
	fn test_push_narrowing_is_rejected() {
		let mut data = ColumnData::int2([1]);
		assert!(data.push_value(Value::Int8(1)).is_err());
	}
}
