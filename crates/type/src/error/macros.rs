// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

/// Builds an [`Error`](crate::Error) from anything implementing
/// [`IntoDiagnostic`](crate::IntoDiagnostic).
#[macro_export]
macro_rules! err {
	($diagnostic:expr) => {
		Err($crate::Error($crate::IntoDiagnostic::into_diagnostic($diagnostic)))
	};
}

#[macro_export]
macro_rules! return_error {
	($diagnostic:expr) => {
		return $crate::err!($diagnostic)
	};
}
