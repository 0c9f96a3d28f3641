// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use tabula_type::{Diagnostic, DiagnosticColumn, Error, IntoDiagnostic, Type};

/// Which participant of a join step a column belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinSide {
	Left,
	Right,
}

impl Display for JoinSide {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			JoinSide::Left => f.write_str("left"),
			JoinSide::Right => f.write_str("right"),
		}
	}
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum JoinError {
	#[error("cannot join {left_column} ({left_type}) with {right_column} ({right_type})")]
	TypeMismatch {
		left_column: String,
		left_type: Type,
		right_column: String,
		right_type: Type,
	},

	#[error("column name '{name}' is already taken in the join result")]
	NamingConflict {
		name: String,
		table_index: usize,
	},

	#[error("join column '{name}' not found in the {side} table")]
	UnknownColumn {
		name: String,
		side: JoinSide,
		available: Vec<String>,
	},

	#[error("{left} left join columns but {right} right join columns")]
	KeyCountMismatch {
		left: usize,
		right: usize,
	},

	#[error("invalid join configuration: {reason}")]
	InvalidConfig {
		reason: String,
	},
}

impl IntoDiagnostic for JoinError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			JoinError::TypeMismatch {
				left_column,
				left_type,
				right_column,
				right_type,
			} => Diagnostic {
				code: "JOIN_001".to_string(),
				message,
				column: Some(DiagnosticColumn {
					name: right_column,
					ty: right_type,
				}),
				label: Some(format!(
					"{} values cannot be compared with {} values",
					left_type.family(),
					right_type.family()
				)),
				help: Some(format!("convert '{}' to a {} column before joining", left_column, left_type.family())),
				notes: vec![
					"join columns must belong to the same type family".to_string(),
					"integers of different widths match each other, as do floats of different widths"
						.to_string(),
				],
			},

			JoinError::NamingConflict {
				name,
				table_index,
			} => Diagnostic {
				code: "JOIN_002".to_string(),
				message,
				column: None,
				label: Some(format!("conflict while adding the columns of table {}", table_index)),
				help: Some("set allow_duplicate_column_names(true) or rename the column first".to_string()),
				notes: vec![format!("'{}' still collides after prefixing", name)],
			},

			JoinError::UnknownColumn {
				side,
				available,
				..
			} => Diagnostic {
				code: "JOIN_003".to_string(),
				message,
				column: None,
				label: Some(format!("not a column of the {} table", side)),
				help: Some("check the join column names, or pass right_join_columns when the names differ".to_string()),
				notes: vec![format!("available columns: {}", available.join(", "))],
			},

			JoinError::KeyCountMismatch {
				..
			} => Diagnostic {
				code: "JOIN_004".to_string(),
				message,
				column: None,
				label: None,
				help: Some("pass one right join column per left join column".to_string()),
				notes: vec![],
			},

			JoinError::InvalidConfig {
				..
			} => Diagnostic {
				code: "JOIN_005".to_string(),
				message,
				column: None,
				label: None,
				help: None,
				notes: vec![],
			},
		}
	}
}

impl From<JoinError> for Error {
	fn from(err: JoinError) -> Self {
		Error(err.into_diagnostic())
	}
}
