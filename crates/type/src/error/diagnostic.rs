// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Formatter};

use serde::{Deserialize, Serialize};

use crate::value::Type;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
	pub code: String,
	pub message: String,
	pub column: Option<DiagnosticColumn>,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticColumn {
	pub name: String,
	pub ty: Type,
}

pub trait IntoDiagnostic {
	fn into_diagnostic(self) -> Diagnostic;
}

impl Diagnostic {
	pub(crate) fn render(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "[{}] {}", self.code, self.message)?;

		if let Some(column) = &self.column {
			write!(f, "\n  column: {} ({})", column.name, column.ty)?;
		}

		if let Some(label) = &self.label {
			write!(f, "\n  {}", label)?;
		}

		if let Some(help) = &self.help {
			write!(f, "\n  help: {}", help)?;
		}

		for note in &self.notes {
			write!(f, "\n  note: {}", note)?;
		}

		Ok(())
	}
}
