// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	cmp::Ordering,
	fmt::{self, Display, Formatter},
};

use serde::{Deserialize, Serialize};

mod date;
mod datetime;
mod ordered_float;
mod time;
mod r#type;

pub use date::Date;
pub use datetime::DateTime;
pub use ordered_float::{OrderedF32, OrderedF64, OrderedFloatError};
pub use time::Time;
pub use r#type::{GetType, Type, TypeFamily, types_compatible};

/// A single cell value.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
	/// Value is not defined (think null in common programming languages)
	Undefined,
	/// A boolean: true or false.
	Boolean(bool),
	/// A 4-byte floating point
	Float4(OrderedF32),
	/// An 8-byte floating point
	Float8(OrderedF64),
	/// A 2-byte signed integer
	Int2(i16),
	/// A 4-byte signed integer
	Int4(i32),
	/// An 8-byte signed integer
	Int8(i64),
	/// A UTF-8 encoded text.
	Utf8(String),
	/// A date value (year, month, day)
	Date(Date),
	/// A date and time value in UTC
	DateTime(DateTime),
	/// A time value (hour, minute, second, nanosecond)
	Time(Time),
}

impl Value {
	pub fn undefined() -> Self {
		Value::Undefined
	}

	pub fn bool(v: impl Into<bool>) -> Self {
		Value::Boolean(v.into())
	}

	/// NaN has no place in a total order and becomes `Undefined`.
	pub fn float4(v: impl Into<f32>) -> Self {
		OrderedF32::try_from(v.into()).map(Value::Float4).unwrap_or(Value::Undefined)
	}

	pub fn float8(v: impl Into<f64>) -> Self {
		OrderedF64::try_from(v.into()).map(Value::Float8).unwrap_or(Value::Undefined)
	}

	pub fn utf8(v: impl Into<String>) -> Self {
		Value::Utf8(v.into())
	}

	pub fn is_undefined(&self) -> bool {
		matches!(self, Value::Undefined)
	}

	/// Widens the value to `target` within its type family. Returns `None`
	/// when the value cannot be represented as `target` without loss.
	pub fn promote_to(self, target: Type) -> Option<Value> {
		match (self, target) {
			(Value::Undefined, _) => Some(Value::Undefined),
			(v, t) if v.get_type() == t => Some(v),
			(Value::Int2(v), Type::Int4) => Some(Value::Int4(v as i32)),
			(Value::Int2(v), Type::Int8) => Some(Value::Int8(v as i64)),
			(Value::Int4(v), Type::Int8) => Some(Value::Int8(v as i64)),
			(Value::Float4(v), Type::Float8) => Some(Value::Float8(v.into())),
			_ => None,
		}
	}
}

impl PartialOrd for Value {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		match (self, other) {
			(Value::Boolean(l), Value::Boolean(r)) => l.partial_cmp(r),
			(Value::Float4(l), Value::Float4(r)) => l.partial_cmp(r),
			(Value::Float8(l), Value::Float8(r)) => l.partial_cmp(r),
			(Value::Int2(l), Value::Int2(r)) => l.partial_cmp(r),
			(Value::Int4(l), Value::Int4(r)) => l.partial_cmp(r),
			(Value::Int8(l), Value::Int8(r)) => l.partial_cmp(r),
			(Value::Utf8(l), Value::Utf8(r)) => l.partial_cmp(r),
			(Value::Date(l), Value::Date(r)) => l.partial_cmp(r),
			(Value::DateTime(l), Value::DateTime(r)) => l.partial_cmp(r),
			(Value::Time(l), Value::Time(r)) => l.partial_cmp(r),
			(Value::Undefined, Value::Undefined) => Some(Ordering::Equal),
			// undefined sorts after every defined value
			(Value::Undefined, _) => Some(Ordering::Greater),
			(_, Value::Undefined) => Some(Ordering::Less),
			_ => None,
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Value::Undefined => f.write_str("Undefined"),
			Value::Boolean(true) => f.write_str("true"),
			Value::Boolean(false) => f.write_str("false"),
			Value::Float4(v) => Display::fmt(v, f),
			Value::Float8(v) => Display::fmt(v, f),
			Value::Int2(v) => Display::fmt(v, f),
			Value::Int4(v) => Display::fmt(v, f),
			Value::Int8(v) => Display::fmt(v, f),
			Value::Utf8(v) => Display::fmt(v, f),
			Value::Date(v) => Display::fmt(v, f),
			Value::DateTime(v) => Display::fmt(v, f),
			Value::Time(v) => Display::fmt(v, f),
		}
	}
}

macro_rules! impl_from {
	($($t:ty => $variant:ident),* $(,)?) => {
		$(
			impl From<$t> for Value {
				fn from(v: $t) -> Self {
					Value::$variant(v)
				}
			}
		)*
	};
}

impl_from!(
	bool => Boolean,
	OrderedF32 => Float4,
	OrderedF64 => Float8,
	i16 => Int2,
	i32 => Int4,
	i64 => Int8,
	String => Utf8,
	Date => Date,
	DateTime => DateTime,
	Time => Time,
);

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Value::Utf8(v.to_string())
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(v: Option<T>) -> Self {
		v.map(Into::into).unwrap_or(Value::Undefined)
	}
}
