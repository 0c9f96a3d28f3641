// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::Debug;

use serde::{Deserialize, Serialize};
use tabula_type::{Date, DateTime, GetType, OrderedF32, OrderedF64, Time, Value};

mod undefined;

pub use undefined::UndefinedContainer;

/// A type that can be stored in a [`Container`].
pub trait Element: Clone + Debug + Default + PartialEq + GetType + Into<Value> + Send + Sync + 'static {}

impl Element for bool {}
impl Element for OrderedF32 {}
impl Element for OrderedF64 {}
impl Element for i16 {}
impl Element for i32 {}
impl Element for i64 {}
impl Element for String {}
impl Element for Date {}
impl Element for DateTime {}
impl Element for Time {}

pub type BoolContainer = Container<bool>;
pub type NumberContainer<T> = Container<T>;
pub type Utf8Container = Container<String>;
pub type TemporalContainer<T> = Container<T>;

/// Values of one type plus a validity flag per slot. An invalid slot holds
/// `T::default()` and reads as undefined.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Container<T: Element> {
	data: Vec<T>,
	validity: Vec<bool>,
}

impl<T: Element> Default for Container<T> {
	fn default() -> Self {
		Self::with_capacity(0)
	}
}

impl<T: Element> Container<T> {
	pub fn new(data: Vec<T>) -> Self {
		let validity = vec![true; data.len()];
		Self {
			data,
			validity,
		}
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			data: Vec::with_capacity(capacity),
			validity: Vec::with_capacity(capacity),
		}
	}

	pub fn undefined(len: usize) -> Self {
		Self {
			data: vec![T::default(); len],
			validity: vec![false; len],
		}
	}

	pub fn len(&self) -> usize {
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	pub fn push(&mut self, value: T) {
		self.data.push(value);
		self.validity.push(true);
	}

	pub fn push_undefined(&mut self) {
		self.data.push(T::default());
		self.validity.push(false);
	}

	pub fn get(&self, index: usize) -> Option<&T> {
		if self.is_defined(index) {
			self.data.get(index)
		} else {
			None
		}
	}

	pub fn is_defined(&self, index: usize) -> bool {
		self.validity.get(index).copied().unwrap_or(false)
	}

	pub fn count_undefined(&self) -> usize {
		self.validity.iter().filter(|v| !**v).count()
	}

	pub fn get_value(&self, index: usize) -> Value {
		self.get(index).cloned().map(Into::into).unwrap_or(Value::Undefined)
	}

	pub fn as_string(&self, index: usize) -> String {
		self.get_value(index).to_string()
	}

	pub fn iter(&self) -> impl Iterator<Item = Option<&T>> + '_ {
		self.data.iter().zip(&self.validity).map(|(v, defined)| defined.then_some(v))
	}

	pub fn take(&self, num: usize) -> Self {
		let num = num.min(self.len());
		Self {
			data: self.data[..num].to_vec(),
			validity: self.validity[..num].to_vec(),
		}
	}

	/// Copies the slots at `indices` in the given order; `None` produces an
	/// undefined slot.
	pub fn gather(&self, indices: &[Option<usize>]) -> Self {
		let mut result = Self::with_capacity(indices.len());
		for index in indices {
			match index.and_then(|i| self.get(i)) {
				Some(value) => result.push(value.clone()),
				None => result.push_undefined(),
			}
		}
		result
	}

	pub fn select(&self, indices: &[usize]) -> Self {
		let mut result = Self::with_capacity(indices.len());
		for &index in indices {
			match self.get(index) {
				Some(value) => result.push(value.clone()),
				None => result.push_undefined(),
			}
		}
		result
	}
}

impl<T: Element> FromIterator<Option<T>> for Container<T> {
	fn from_iter<I: IntoIterator<Item = Option<T>>>(iter: I) -> Self {
		let mut result = Self::with_capacity(0);
		for value in iter {
			match value {
				Some(value) => result.push(value),
				None => result.push_undefined(),
			}
		}
		result
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_push_and_get() {
		let mut container = NumberContainer::<i32>::with_capacity(3);
		container.push(1);
		container.push_undefined();
		container.push(3);

		assert_eq!(container.len(), 3);
		assert_eq!(container.get(0), Some(&1));
		assert_eq!(container.get(1), None);
		assert_eq!(container.get_value(1), Value::Undefined);
		assert_eq!(container.get_value(2), Value::Int4(3));
		assert_eq!(container.count_undefined(), 1);
	}

	#[test]
	fn test_out_of_bounds_is_undefined() {
		let container = Utf8Container::new(vec!["a".to_string()]);
		assert!(!container.is_defined(5));
		assert_eq!(container.get_value(5), Value::Undefined);
	}

	#[test]
	fn test_gather_keeps_order_and_fills_undefined() {
		let container = Utf8Container::new(vec!["a".to_string(), "b".to_string(), "c".to_string()]);
		let gathered = container.gather(&[Some(2), None, Some(0), Some(2)]);

		let values: Vec<Option<&String>> = gathered.iter().collect();
		assert_eq!(
			values,
			vec![Some(&"c".to_string()), None, Some(&"a".to_string()), Some(&"c".to_string())]
		);
	}

	#[test]
	fn test_select_preserves_undefined_slots() {
		let container: BoolContainer = vec![Some(true), None, Some(false)].into_iter().collect();
		let selected = container.select(&[1, 2]);
		assert_eq!(selected.get_value(0), Value::Undefined);
		assert_eq!(selected.get_value(1), Value::Boolean(false));
	}

	#[test]
	fn test_take() {
		let mut container = NumberContainer::<i64>::new(vec![1, 2, 3]);
		container.push_undefined();

		let taken = container.take(2);
		assert_eq!(taken.len(), 2);
		assert_eq!(taken.get_value(1), Value::Int8(2));
		assert_eq!(container.take(100).len(), 4);
		assert_eq!(container.take(100).count_undefined(), 1);
	}
}
