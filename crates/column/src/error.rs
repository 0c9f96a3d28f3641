// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tabula_type::{Diagnostic, DiagnosticColumn, Error, IntoDiagnostic, Type};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ColumnError {
	#[error("duplicate column name '{name}'")]
	DuplicateColumnName {
		name: String,
	},

	#[error("column '{name}' not found")]
	UnknownColumn {
		name: String,
		available: Vec<String>,
	},

	#[error("column '{name}' has {actual} rows, expected {expected}")]
	RowCountMismatch {
		name: String,
		expected: usize,
		actual: usize,
	},

	#[error("row {row} has {actual} values, expected {expected}")]
	RowWidthMismatch {
		row: usize,
		expected: usize,
		actual: usize,
	},

	#[error("cannot push a {actual} value into a {expected} column")]
	ValueTypeMismatch {
		expected: Type,
		actual: Type,
	},
}

impl IntoDiagnostic for ColumnError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			ColumnError::DuplicateColumnName {
				name,
			} => Diagnostic {
				code: "COLUMN_001".to_string(),
				message,
				column: None,
				label: Some(format!("'{}' appears more than once", name)),
				help: Some("rename one of the columns before building the table".to_string()),
				notes: vec!["column names are compared case-insensitively".to_string()],
			},

			ColumnError::UnknownColumn {
				name: _,
				available,
			} => Diagnostic {
				code: "COLUMN_002".to_string(),
				message,
				column: None,
				label: None,
				help: Some("check the spelling of the column name".to_string()),
				notes: vec![format!("available columns: {}", available.join(", "))],
			},

			ColumnError::RowCountMismatch {
				..
			} => Diagnostic {
				code: "COLUMN_003".to_string(),
				message,
				column: None,
				label: None,
				help: Some("every column of a table must have the same number of rows".to_string()),
				notes: vec![],
			},

			ColumnError::RowWidthMismatch {
				..
			} => Diagnostic {
				code: "COLUMN_005".to_string(),
				message,
				column: None,
				label: None,
				help: Some("every row needs one value per column".to_string()),
				notes: vec![],
			},

			ColumnError::ValueTypeMismatch {
				expected,
				actual,
			} => Diagnostic {
				code: "COLUMN_004".to_string(),
				message,
				column: None,
				label: Some(format!("expected {}, got {}", expected, actual)),
				help: None,
				notes: vec![],
			},
		}
	}
}

impl From<ColumnError> for Error {
	fn from(err: ColumnError) -> Self {
		Error(err.into_diagnostic())
	}
}

/// Attaches the offending column to an error raised while handling it.
pub(crate) fn with_column(mut error: Error, name: &str, ty: Type) -> Error {
	error.0.column = Some(DiagnosticColumn {
		name: name.to_string(),
		ty,
	});
	error
}
