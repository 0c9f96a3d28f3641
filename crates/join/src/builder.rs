// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tabula_column::Table;

use crate::{JoinConfig, JoinConfigBuilder, JoinType, MissingKeys, join};

/// Fluent entry point for joining a table with one or more others.
///
/// ```ignore
/// let result = people.join_on(["ID"]).with(&dogs).left_outer().join()?;
/// ```
pub trait JoinTable {
	fn join_on<S: Into<String>>(&self, columns: impl IntoIterator<Item = S>) -> JoinOn<'_>;
}

impl JoinTable for Table {
	fn join_on<S: Into<String>>(&self, columns: impl IntoIterator<Item = S>) -> JoinOn<'_> {
		JoinOn::new(self, columns)
	}
}

#[derive(Debug)]
pub struct JoinOn<'a> {
	left: &'a Table,
	rights: Vec<&'a Table>,
	config: JoinConfigBuilder,
}

impl<'a> JoinOn<'a> {
	pub fn new<S: Into<String>>(left: &'a Table, columns: impl IntoIterator<Item = S>) -> Self {
		Self {
			left,
			rights: Vec::new(),
			config: JoinConfig::builder(columns),
		}
	}

	pub fn with(mut self, table: &'a Table) -> Self {
		self.rights.push(table);
		self
	}

	pub fn with_all(mut self, tables: impl IntoIterator<Item = &'a Table>) -> Self {
		self.rights.extend(tables);
		self
	}

	/// Key columns of the right tables, when they differ from the left ones.
	pub fn right_join_columns<S: Into<String>>(mut self, columns: impl IntoIterator<Item = S>) -> Self {
		self.config = self.config.right_columns(columns);
		self
	}

	pub fn join_type(mut self, join_type: JoinType) -> Self {
		self.config = self.config.join_type(join_type);
		self
	}

	pub fn inner(self) -> Self {
		self.join_type(JoinType::Inner)
	}

	pub fn left_outer(self) -> Self {
		self.join_type(JoinType::LeftOuter)
	}

	pub fn right_outer(self) -> Self {
		self.join_type(JoinType::RightOuter)
	}

	pub fn full_outer(self) -> Self {
		self.join_type(JoinType::FullOuter)
	}

	pub fn allow_duplicate_column_names(mut self, allow: bool) -> Self {
		self.config = self.config.allow_duplicate_column_names(allow);
		self
	}

	pub fn keep_all_join_key_columns(mut self, keep: bool) -> Self {
		self.config = self.config.keep_all_join_key_columns(keep);
		self
	}

	pub fn missing_keys(mut self, missing_keys: MissingKeys) -> Self {
		self.config = self.config.missing_keys(missing_keys);
		self
	}

	pub fn config(&self) -> crate::Result<JoinConfig> {
		self.config.clone().build()
	}

	pub fn join(self) -> crate::Result<Table> {
		let config = self.config.build()?;
		join(self.left, &self.rights, &config)
	}
}
