// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::value::{Date, DateTime, OrderedF32, OrderedF64, Time, Type, Value};

pub trait GetType {
	fn get_type(&self) -> Type;
}

impl GetType for Value {
	fn get_type(&self) -> Type {
		match self {
			Value::Undefined => Type::Undefined,
			Value::Boolean(_) => Type::Boolean,
			Value::Float4(_) => Type::Float4,
			Value::Float8(_) => Type::Float8,
			Value::Int2(_) => Type::Int2,
			Value::Int4(_) => Type::Int4,
			Value::Int8(_) => Type::Int8,
			Value::Utf8(_) => Type::Utf8,
			Value::Date(_) => Type::Date,
			Value::DateTime(_) => Type::DateTime,
			Value::Time(_) => Type::Time,
		}
	}
}

macro_rules! impl_get_type {
	($($t:ty => $variant:ident),* $(,)?) => {
		$(
			impl GetType for $t {
				fn get_type(&self) -> Type {
					Type::$variant
				}
			}
		)*
	};
}

impl_get_type!(
	bool => Boolean,
	f32 => Float4,
	OrderedF32 => Float4,
	f64 => Float8,
	OrderedF64 => Float8,
	i16 => Int2,
	i32 => Int4,
	i64 => Int8,
	String => Utf8,
	Date => Date,
	DateTime => DateTime,
	Time => Time,
);
