// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::ops::Deref;

use serde::{Deserialize, Serialize};
use tabula_type::{GetType, Type, Value};

use crate::{ColumnData, error::with_column};

/// A named column.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Column {
	pub name: String,
	pub data: ColumnData,
}

impl Deref for Column {
	type Target = ColumnData;

	fn deref(&self) -> &Self::Target {
		&self.data
	}
}

impl Column {
	pub fn new(name: impl Into<String>, data: ColumnData) -> Self {
		Self {
			name: name.into(),
			data,
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn data(&self) -> &ColumnData {
		&self.data
	}

	pub fn renamed(&self, name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			data: self.data.clone(),
		}
	}

	pub fn with_new_data(&self, data: ColumnData) -> Self {
		Self {
			name: self.name.clone(),
			data,
		}
	}

	pub fn count_missing(&self) -> usize {
		self.data.count_undefined()
	}

	pub fn push_value(&mut self, value: Value) -> crate::Result<()> {
		let ty = self.data.get_type();
		self.data.push_value(value).map_err(|err| with_column(err, &self.name, ty))
	}
}

impl GetType for Column {
	fn get_type(&self) -> Type {
		self.data.get_type()
	}
}

#[cfg(test)]
mod tests {
	use tabula_type::{GetType, Type, Value};

	use crate::{Column, ColumnData};

	#[test]
	fn test_renamed_copies_data() {
		let column = Column::new("Name", ColumnData::utf8(["Bob"]));
		let renamed = column.renamed("T2.Name");

		assert_eq!(renamed.name(), "T2.Name");
		assert_eq!(renamed.get_value(0), Value::utf8("Bob"));
		assert_eq!(column.name(), "Name");
	}

	#[test]
	fn test_push_value_error_names_column() {
		let mut column = Column::new("Age", ColumnData::int4([1]));
		let err = column.push_value(Value::Boolean(true)).unwrap_err();

		let diagnostic = err.diagnostic();
		assert_eq!(diagnostic.code, "COLUMN_004");
		let offending = diagnostic.column.unwrap();
		assert_eq!(offending.name, "Age");
		assert_eq!(offending.ty, Type::Int4);
	}

	#[test]
	fn test_count_missing() {
		let mut column = Column::new("Feed", ColumnData::utf8(["Mush"]));
		column.push_value(Value::Undefined).unwrap();
		assert_eq!(column.count_missing(), 1);
		assert_eq!(column.get_type(), Type::Utf8);
	}
}
