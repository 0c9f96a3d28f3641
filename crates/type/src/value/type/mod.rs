// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{self, Display, Formatter},
	str::FromStr,
};

use serde::{Deserialize, Serialize};

mod get;

pub use get::GetType;

/// The element type of a column.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Type {
	/// A boolean: true or false.
	Boolean,
	/// A 4-byte floating point
	Float4,
	/// An 8-byte floating point
	Float8,
	/// A 2-byte signed integer
	Int2,
	/// A 4-byte signed integer
	Int4,
	/// An 8-byte signed integer
	Int8,
	/// A UTF-8 encoded text.
	Utf8,
	/// A date value (year, month, day)
	Date,
	/// A date and time value with nanosecond precision in UTC
	DateTime,
	/// A time value (hour, minute, second, nanosecond)
	Time,
	/// Value is not defined (think null in common programming languages)
	Undefined,
}

/// Types whose values can be compared with each other, e.g. all integer widths.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeFamily {
	Boolean,
	Integer,
	Floating,
	Text,
	Date,
	DateTime,
	Time,
	Undefined,
}

impl Type {
	pub fn family(&self) -> TypeFamily {
		match self {
			Type::Boolean => TypeFamily::Boolean,
			Type::Float4 | Type::Float8 => TypeFamily::Floating,
			Type::Int2 | Type::Int4 | Type::Int8 => TypeFamily::Integer,
			Type::Utf8 => TypeFamily::Text,
			Type::Date => TypeFamily::Date,
			Type::DateTime => TypeFamily::DateTime,
			Type::Time => TypeFamily::Time,
			Type::Undefined => TypeFamily::Undefined,
		}
	}

	/// The wider of two types from the same family. `Undefined` yields the
	/// other side; types from different families yield `None`.
	pub fn promote(left: Type, right: Type) -> Option<Type> {
		match (left, right) {
			(Type::Undefined, other) | (other, Type::Undefined) => Some(other),
			(l, r) if l.family() != r.family() => None,
			(l, r) => Some(l.max(r)),
		}
	}
}

/// Whether key columns of these two types can be matched against each other.
pub fn types_compatible(left: Type, right: Type) -> bool {
	Type::promote(left, right).is_some()
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Type::Boolean => f.write_str("Boolean"),
			Type::Float4 => f.write_str("Float4"),
			Type::Float8 => f.write_str("Float8"),
			Type::Int2 => f.write_str("Int2"),
			Type::Int4 => f.write_str("Int4"),
			Type::Int8 => f.write_str("Int8"),
			Type::Utf8 => f.write_str("Utf8"),
			Type::Date => f.write_str("Date"),
			Type::DateTime => f.write_str("DateTime"),
			Type::Time => f.write_str("Time"),
			Type::Undefined => f.write_str("Undefined"),
		}
	}
}

impl Display for TypeFamily {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			TypeFamily::Boolean => f.write_str("boolean"),
			TypeFamily::Integer => f.write_str("integer"),
			TypeFamily::Floating => f.write_str("floating point"),
			TypeFamily::Text => f.write_str("text"),
			TypeFamily::Date => f.write_str("date"),
			TypeFamily::DateTime => f.write_str("datetime"),
			TypeFamily::Time => f.write_str("time"),
			TypeFamily::Undefined => f.write_str("undefined"),
		}
	}
}

impl FromStr for Type {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"bool" | "boolean" => Ok(Type::Boolean),
			"float4" => Ok(Type::Float4),
			"float8" => Ok(Type::Float8),
			"int2" => Ok(Type::Int2),
			"int4" => Ok(Type::Int4),
			"int8" => Ok(Type::Int8),
			"utf8" | "text" => Ok(Type::Utf8),
			"date" => Ok(Type::Date),
			"datetime" => Ok(Type::DateTime),
			"time" => Ok(Type::Time),
			"undefined" => Ok(Type::Undefined),
			_ => Err(format!("unknown type: {}", s)),
		}
	}
}
