// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{self, Display, Formatter},
	str::FromStr,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::value::{Date, Time};

/// A date and time of day in UTC.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateTime {
	date: Date,
	time: Time,
}

impl DateTime {
	pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32, nano: u32) -> Option<Self> {
		Some(Self {
			date: Date::new(year, month, day)?,
			time: Time::new(hour, minute, second, nano)?,
		})
	}

	pub fn from_parts(date: Date, time: Time) -> Self {
		Self {
			date,
			time,
		}
	}

	pub fn date(&self) -> Date {
		self.date
	}

	pub fn time(&self) -> Time {
		self.time
	}

	pub fn timestamp(&self) -> i64 {
		self.date.to_days_since_epoch() as i64 * 86_400 + (self.time.to_nanos_since_midnight() / 1_000_000_000) as i64
	}
}

impl Display for DateTime {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{}T{}", self.date, self.time)
	}
}

impl FromStr for DateTime {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let s = s.strip_suffix('Z').unwrap_or(s);
		let Some((date, time)) = s.split_once(['T', ' ']) else {
			return Err(format!("invalid datetime: {}", s));
		};
		Ok(Self::from_parts(date.parse()?, time.parse()?))
	}
}

impl Serialize for DateTime {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

impl<'de> Deserialize<'de> for DateTime {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let s = String::deserialize(deserializer)?;
		s.parse().map_err(de::Error::custom)
	}
}
