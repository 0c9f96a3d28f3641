// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

mod diagnostic;
mod macros;

pub use diagnostic::{Diagnostic, DiagnosticColumn, IntoDiagnostic};

use std::fmt::{self, Display, Formatter};

/// The error every fallible tabula operation returns.
///
/// Domain errors (`ColumnError`, `JoinError`) convert into it through their
/// [`IntoDiagnostic`] impl, so callers only ever match on the diagnostic code.
#[derive(Debug, Clone, PartialEq)]
pub struct Error(pub Diagnostic);

impl Error {
	pub fn diagnostic(self) -> Diagnostic {
		self.0
	}

	pub fn code(&self) -> &str {
		&self.0.code
	}
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		self.0.render(f)
	}
}

impl std::error::Error for Error {}
