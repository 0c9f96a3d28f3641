// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use crate::Table;

fn escape_control_chars(s: &str) -> String {
	s.replace('\n', "\\n").replace('\t', "\\t")
}

fn width(s: &str) -> usize {
	s.chars().count()
}

fn centered(value: &str, width_with_padding: usize) -> String {
	let pad = width_with_padding - width(value);
	let l = pad / 2;
	let r = pad - l;
	format!(" {:l$}{}{:r$} ", "", value, "")
}

impl Display for Table {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let col_widths: Vec<usize> = self
			.iter()
			.map(|col| {
				let header_width = width(&escape_control_chars(col.name()));
				let max_val_width = (0..col.len())
					.map(|i| width(&escape_control_chars(&col.as_string(i))))
					.max()
					.unwrap_or(0);
				header_width.max(max_val_width) + 2
			})
			.collect();

		let sep: String = if col_widths.is_empty() {
			"++".to_string()
		} else {
			col_widths.iter().map(|w| format!("+{}", "-".repeat(*w + 2))).collect::<String>() + "+"
		};

		writeln!(f, "{}", sep)?;

		let header: Vec<String> = self
			.iter()
			.zip(&col_widths)
			.map(|(col, w)| centered(&escape_control_chars(col.name()), *w))
			.collect();
		writeln!(f, "|{}|", header.join("|"))?;
		writeln!(f, "{}", sep)?;

		for row_idx in 0..self.row_count() {
			let row: Vec<String> = self
				.iter()
				.zip(&col_widths)
				.map(|(col, w)| centered(&escape_control_chars(&col.as_string(row_idx)), *w))
				.collect();
			writeln!(f, "|{}|", row.join("|"))?;
		}

		writeln!(f, "{}", sep)
	}
}
