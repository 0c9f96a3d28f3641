// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

/// A column whose every slot is undefined; only its length is stored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UndefinedContainer {
	len: usize,
}

impl UndefinedContainer {
	pub fn new(len: usize) -> Self {
		Self {
			len,
		}
	}

	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	pub fn push_undefined(&mut self) {
		self.len += 1;
	}

	pub fn take(&self, num: usize) -> Self {
		Self::new(num.min(self.len))
	}
}
