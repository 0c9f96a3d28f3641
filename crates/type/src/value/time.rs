// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{self, Display, Formatter},
	str::FromStr,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

const NANOS_PER_SECOND: u64 = 1_000_000_000;
const NANOS_PER_DAY: u64 = 86_400 * NANOS_PER_SECOND;

/// A time of day with nanosecond precision, stored as nanoseconds since midnight.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Time {
	nanos_since_midnight: u64,
}

impl Time {
	pub fn new(hour: u32, minute: u32, second: u32, nano: u32) -> Option<Self> {
		if hour > 23 || minute > 59 || second > 59 || nano as u64 >= NANOS_PER_SECOND {
			return None;
		}
		let seconds = hour as u64 * 3600 + minute as u64 * 60 + second as u64;
		Some(Self {
			nanos_since_midnight: seconds * NANOS_PER_SECOND + nano as u64,
		})
	}

	pub fn from_hms(hour: u32, minute: u32, second: u32) -> Option<Self> {
		Self::new(hour, minute, second, 0)
	}

	pub fn midnight() -> Self {
		Self::default()
	}

	pub fn from_nanos_since_midnight(nanos: u64) -> Option<Self> {
		(nanos < NANOS_PER_DAY).then_some(Self {
			nanos_since_midnight: nanos,
		})
	}

	pub fn to_nanos_since_midnight(&self) -> u64 {
		self.nanos_since_midnight
	}

	pub fn hour(&self) -> u32 {
		(self.seconds_since_midnight() / 3600) as u32
	}

	pub fn minute(&self) -> u32 {
		(self.seconds_since_midnight() / 60 % 60) as u32
	}

	pub fn second(&self) -> u32 {
		(self.seconds_since_midnight() % 60) as u32
	}

	pub fn nanosecond(&self) -> u32 {
		(self.nanos_since_midnight % NANOS_PER_SECOND) as u32
	}

	fn seconds_since_midnight(&self) -> u64 {
		self.nanos_since_midnight / NANOS_PER_SECOND
	}
}

impl Display for Time {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{:02}:{:02}:{:02}", self.hour(), self.minute(), self.second())?;
		if self.nanosecond() != 0 {
			write!(f, ".{:09}", self.nanosecond())?;
		}
		Ok(())
	}
}

impl FromStr for Time {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let (hms, fraction) = match s.split_once('.') {
			Some((hms, fraction)) => (hms, Some(fraction)),
			None => (s, None),
		};

		let mut parts = hms.splitn(3, ':');
		let (Some(hour), Some(minute), Some(second)) = (parts.next(), parts.next(), parts.next()) else {
			return Err(format!("invalid time: {}", s));
		};

		let parse = |part: &str| part.parse::<u32>().map_err(|_| format!("invalid time: {}", s));

		let nano = match fraction {
			Some(fraction) if fraction.is_empty() || fraction.len() > 9 => {
				return Err(format!("invalid time: {}", s));
			}
			// right-pad to nanoseconds: ".5" is 500_000_000
			Some(fraction) => parse(fraction)? * 10u32.pow(9 - fraction.len() as u32),
			None => 0,
		};

		Time::new(parse(hour)?, parse(minute)?, parse(second)?, nano).ok_or_else(|| format!("invalid time: {}", s))
	}
}

impl Serialize for Time {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

impl<'de> Deserialize<'de> for Time {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let s = String::deserialize(deserializer)?;
		s.parse().map_err(de::Error::custom)
	}
}
