// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};
use tabula_type::return_error;

use crate::JoinError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JoinType {
	#[default]
	Inner,
	LeftOuter,
	RightOuter,
	FullOuter,
}

impl JoinType {
	/// Whether left rows without a match are kept.
	pub fn keeps_unmatched_left(&self) -> bool {
		matches!(self, JoinType::LeftOuter | JoinType::FullOuter)
	}

	/// Whether right rows without a match are kept.
	pub fn keeps_unmatched_right(&self) -> bool {
		matches!(self, JoinType::RightOuter | JoinType::FullOuter)
	}
}

impl Display for JoinType {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			JoinType::Inner => f.write_str("INNER"),
			JoinType::LeftOuter => f.write_str("LEFT OUTER"),
			JoinType::RightOuter => f.write_str("RIGHT OUTER"),
			JoinType::FullOuter => f.write_str("FULL OUTER"),
		}
	}
}

/// How undefined key values take part in matching.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MissingKeys {
	/// Two undefined values are equal keys.
	#[default]
	Match,
	/// A key with any undefined part matches nothing. Outer joins still keep
	/// the row with the other side absent.
	NeverMatch,
}

/// Immutable description of a join, produced by [`JoinConfigBuilder::build`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinConfig {
	join_type: JoinType,
	left_columns: Vec<String>,
	right_columns: Vec<String>,
	allow_duplicate_column_names: bool,
	keep_all_join_key_columns: bool,
	missing_keys: MissingKeys,
}

impl JoinConfig {
	pub fn builder<S: Into<String>>(left_columns: impl IntoIterator<Item = S>) -> JoinConfigBuilder {
		JoinConfigBuilder::new(left_columns)
	}

	pub fn join_type(&self) -> JoinType {
		self.join_type
	}

	pub fn left_columns(&self) -> &[String] {
		&self.left_columns
	}

	/// The key columns looked up on every right table. Same as the left key
	/// names unless set explicitly.
	pub fn right_columns(&self) -> &[String] {
		&self.right_columns
	}

	pub fn allow_duplicate_column_names(&self) -> bool {
		self.allow_duplicate_column_names
	}

	pub fn keep_all_join_key_columns(&self) -> bool {
		self.keep_all_join_key_columns
	}

	pub fn missing_keys(&self) -> MissingKeys {
		self.missing_keys
	}
}

#[derive(Clone, Debug)]
pub struct JoinConfigBuilder {
	join_type: JoinType,
	left_columns: Vec<String>,
	right_columns: Option<Vec<String>>,
	allow_duplicate_column_names: bool,
	keep_all_join_key_columns: bool,
	missing_keys: MissingKeys,
}

impl JoinConfigBuilder {
	pub fn new<S: Into<String>>(left_columns: impl IntoIterator<Item = S>) -> Self {
		Self {
			join_type: JoinType::default(),
			left_columns: left_columns.into_iter().map(Into::into).collect(),
			right_columns: None,
			allow_duplicate_column_names: false,
			keep_all_join_key_columns: false,
			missing_keys: MissingKeys::default(),
		}
	}

	pub fn join_type(mut self, join_type: JoinType) -> Self {
		self.join_type = join_type;
		self
	}

	pub fn right_columns<S: Into<String>>(mut self, columns: impl IntoIterator<Item = S>) -> Self {
		self.right_columns = Some(columns.into_iter().map(Into::into).collect());
		self
	}

	pub fn allow_duplicate_column_names(mut self, allow: bool) -> Self {
		self.allow_duplicate_column_names = allow;
		self
	}

	pub fn keep_all_join_key_columns(mut self, keep: bool) -> Self {
		self.keep_all_join_key_columns = keep;
		self
	}

	pub fn missing_keys(mut self, missing_keys: MissingKeys) -> Self {
		self.missing_keys = missing_keys;
		self
	}

	pub fn build(self) -> crate::Result<JoinConfig> {
		if self.left_columns.is_empty() {
			return_error!(JoinError::InvalidConfig {
				reason: "at least one join column is required".to_string()
			});
		}

		let right_columns = self.right_columns.unwrap_or_else(|| self.left_columns.clone());

		if let Some(name) = self.left_columns.iter().chain(&right_columns).find(|name| name.trim().is_empty()) {
			return_error!(JoinError::InvalidConfig {
				reason: format!("join column name '{}' is empty", name)
			});
		}

		if right_columns.len() != self.left_columns.len() {
			return_error!(JoinError::KeyCountMismatch {
				left: self.left_columns.len(),
				right: right_columns.len(),
			});
		}

		Ok(JoinConfig {
			join_type: self.join_type,
			left_columns: self.left_columns,
			right_columns,
			allow_duplicate_column_names: self.allow_duplicate_column_names,
			keep_all_join_key_columns: self.keep_all_join_key_columns,
			missing_keys: self.missing_keys,
		})
	}
}
