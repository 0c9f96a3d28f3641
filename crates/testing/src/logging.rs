// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Tracing subscribers for tests.
//!
//! Both functions read `RUST_LOG` and fall back to `warn`. Installing a
//! subscriber twice is a no-op, so every test may call them.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

fn filter() -> EnvFilter {
	EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Human readable output captured by the test harness.
pub fn init() {
	let _ = tracing_subscriber::fmt().with_env_filter(filter()).with_test_writer().try_init();
}

/// One JSON object per event, including the fields of the enclosing spans.
pub fn init_json() {
	let _ = tracing_subscriber::fmt()
		.json()
		.with_current_span(true)
		.with_span_list(true)
		.with_env_filter(filter())
		.with_test_writer()
		.try_init();
}
