// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Tables written as text.
//!
//! The first line holds the header as `name:type` pairs, every further line
//! one row. Cells are separated by commas, an empty cell is an undefined
//! value. Leading and trailing whitespace of each line is ignored, as are
//! blank lines.
//!
//! ```ignore
//! let animals = fixture::table(
//! 	"Animal:utf8,Age:int4
//! 	Pig,1
//! 	Goat,",
//! );
//! ```

use std::{fmt::Display, str::FromStr};

use tabula_column::Table;
use tabula_type::{Date, DateTime, Time, Type, Value};

/// Parses a fixture table. Panics on malformed input.
pub fn table(text: &str) -> Table {
	let mut lines = text.lines().map(str::trim).filter(|line| !line.is_empty());

	let header = lines.next().unwrap_or_else(|| panic!("fixture without header"));
	let (names, types): (Vec<&str>, Vec<Type>) = header
		.split(',')
		.map(|cell| {
			let (name, ty) = cell.rsplit_once(':').unwrap_or_else(|| panic!("header cell '{}' lacks a type", cell));
			let ty = Type::from_str(ty.trim()).unwrap_or_else(|e| panic!("{}", e));
			(name.trim(), ty)
		})
		.unzip();

	let rows = lines
		.enumerate()
		.map(|(line, text)| {
			let cells: Vec<&str> = text.split(',').collect();
			assert_eq!(cells.len(), types.len(), "row {} has {} cells, expected {}", line, cells.len(), types.len());
			cells.iter().zip(&types).map(|(cell, ty)| value(cell.trim(), *ty)).collect()
		})
		.collect();

	Table::from_rows(&names, &types, rows).unwrap_or_else(|e| panic!("{}", e))
}

/// Parses one cell as a value of `ty`. An empty cell is undefined.
pub fn value(cell: &str, ty: Type) -> Value {
	if cell.is_empty() {
		return Value::Undefined;
	}

	match ty {
		Type::Boolean => Value::Boolean(parse(cell, ty)),
		Type::Float4 => Value::float4(parse::<f32>(cell, ty)),
		Type::Float8 => Value::float8(parse::<f64>(cell, ty)),
		Type::Int2 => Value::Int2(parse(cell, ty)),
		Type::Int4 => Value::Int4(parse(cell, ty)),
		Type::Int8 => Value::Int8(parse(cell, ty)),
		Type::Utf8 => Value::utf8(cell),
		Type::Date => Value::Date(parse::<Date>(cell, ty)),
		Type::DateTime => Value::DateTime(parse::<DateTime>(cell, ty)),
		Type::Time => Value::Time(parse::<Time>(cell, ty)),
		Type::Undefined => Value::Undefined,
	}
}

fn parse<T: FromStr>(cell: &str, ty: impl Display) -> T {
	cell.parse().unwrap_or_else(|_| panic!("'{}' is not a valid {}", cell, ty))
}

#[cfg(test)]
mod tests {
	use tabula_type::GetType;

	use super::*;

	#[test]
	fn test_parses_header_and_rows() {
		let table = table(
			"Animal:utf8,Age:int4,Born:date
			Pig,1,2024-03-01
			Goat,,",
		);

		assert_eq!(table.column_names(), vec!["Animal", "Age", "Born"]);
		assert_eq!(table[1].get_type(), Type::Int4);
		assert_eq!(table.row(0), vec![Value::utf8("Pig"), Value::Int4(1), Value::Date(Date::new(2024, 3, 1).unwrap())]);
		assert_eq!(table.row(1), vec![Value::utf8("Goat"), Value::Undefined, Value::Undefined]);
	}

	#[test]
	fn test_header_only() {
		let table = table("K:int8");
		assert_eq!(table.row_count(), 0);
		assert_eq!(table[0].get_type(), Type::Int8);
	}

	#[test]
	#[should_panic(expected = "not a valid")]
	fn test_rejects_bad_cell() {
		table("K:int4\nx");
	}
}
