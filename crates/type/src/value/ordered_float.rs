// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	cmp::Ordering,
	fmt::{self, Display, Formatter},
	hash::{Hash, Hasher},
	ops::Deref,
};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("floating point value is NaN")]
pub struct OrderedFloatError;

macro_rules! ordered_float {
	($name:ident, $float:ty) => {
		/// A float with total order, equality and hashing. NaN is rejected and
		/// `-0.0` is stored as `0.0`.
		#[repr(transparent)]
		#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize)]
		pub struct $name($float);

		impl $name {
			pub fn value(&self) -> $float {
				self.0
			}
		}

		impl Deref for $name {
			type Target = $float;

			fn deref(&self) -> &Self::Target {
				&self.0
			}
		}

		impl Display for $name {
			fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
				Display::fmt(&self.0, f)
			}
		}

		impl PartialEq for $name {
			fn eq(&self, other: &Self) -> bool {
				self.0.to_bits() == other.0.to_bits()
			}
		}

		impl Eq for $name {}

		impl PartialOrd for $name {
			fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
				Some(self.cmp(other))
			}
		}

		impl Ord for $name {
			fn cmp(&self, other: &Self) -> Ordering {
				self.0.total_cmp(&other.0)
			}
		}

		impl Hash for $name {
			fn hash<H: Hasher>(&self, state: &mut H) {
				self.0.to_bits().hash(state);
			}
		}

		impl From<$name> for $float {
			fn from(v: $name) -> Self {
				v.0
			}
		}

		impl TryFrom<$float> for $name {
			type Error = OrderedFloatError;

			fn try_from(f: $float) -> Result<Self, Self::Error> {
				if f.is_nan() {
					return Err(OrderedFloatError);
				}
				Ok(Self(if f == 0.0 { 0.0 } else { f }))
			}
		}
	};
}

ordered_float!(OrderedF32, f32);
ordered_float!(OrderedF64, f64);

impl From<OrderedF32> for OrderedF64 {
	fn from(v: OrderedF32) -> Self {
		OrderedF64(v.0 as f64)
	}
}
