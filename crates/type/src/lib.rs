// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

pub mod error;
pub mod value;

pub use error::{Diagnostic, DiagnosticColumn, Error, IntoDiagnostic};
pub use value::{
	Date, DateTime, GetType, OrderedF32, OrderedF64, OrderedFloatError, Time, Type, TypeFamily, Value,
	types_compatible,
};

pub type Result<T> = std::result::Result<T, Error>;
