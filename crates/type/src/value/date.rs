// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{self, Display, Formatter},
	str::FromStr,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// A calendar date without time of day, stored as days since 1970-01-01.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Date {
	days_since_epoch: i32,
}

const MAX_EPOCH_DAYS: i32 = 365_250_000;

fn is_leap_year(year: i32) -> bool {
	(year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
	match month {
		1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
		4 | 6 | 9 | 11 => 30,
		2 if is_leap_year(year) => 29,
		2 => 28,
		_ => 0,
	}
}

// Howard Hinnant's civil calendar algorithms, with March as the first month of the year.
fn days_from_civil(year: i32, month: u32, day: u32) -> i32 {
	let (y, m) = if month <= 2 {
		(year - 1, month as i32 + 9)
	} else {
		(year, month as i32 - 3)
	};

	let era = if y >= 0 { y } else { y - 399 } / 400;
	let yoe = y - era * 400;
	let doy = (153 * m + 2) / 5 + day as i32 - 1;
	let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
	era * 146097 + doe - 719468
}

fn civil_from_days(days: i32) -> (i32, u32, u32) {
	let z = days + 719468;
	let era = if z >= 0 { z } else { z - 146096 } / 146097;
	let doe = z - era * 146097;
	let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
	let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
	let mp = (5 * doy + 2) / 153;
	let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
	let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
	let year = yoe + era * 400 + if month <= 2 { 1 } else { 0 };
	(year, month, day)
}

impl Date {
	pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
		if !(1..=12).contains(&month) || day < 1 || day > days_in_month(year, month) {
			return None;
		}
		Self::from_days_since_epoch(days_from_civil(year, month, day))
	}

	pub fn from_days_since_epoch(days: i32) -> Option<Self> {
		if !(-MAX_EPOCH_DAYS..=MAX_EPOCH_DAYS).contains(&days) {
			return None;
		}
		Some(Self {
			days_since_epoch: days,
		})
	}

	pub fn to_days_since_epoch(&self) -> i32 {
		self.days_since_epoch
	}

	pub fn year(&self) -> i32 {
		civil_from_days(self.days_since_epoch).0
	}

	pub fn month(&self) -> u32 {
		civil_from_days(self.days_since_epoch).1
	}

	pub fn day(&self) -> u32 {
		civil_from_days(self.days_since_epoch).2
	}
}

impl Display for Date {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let (year, month, day) = civil_from_days(self.days_since_epoch);
		if year < 0 {
			write!(f, "-{:04}-{:02}-{:02}", -year, month, day)
		} else {
			write!(f, "{:04}-{:02}-{:02}", year, month, day)
		}
	}
}

impl FromStr for Date {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let (negative, rest) = match s.strip_prefix('-') {
			Some(rest) => (true, rest),
			None => (false, s),
		};

		let mut parts = rest.splitn(3, '-');
		let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next()) else {
			return Err(format!("invalid date: {}", s));
		};

		let year = year.parse::<i32>().map_err(|_| format!("invalid year: {}", year))?;
		let month = month.parse::<u32>().map_err(|_| format!("invalid month: {}", month))?;
		let day = day.parse::<u32>().map_err(|_| format!("invalid day: {}", day))?;
		let year = if negative { -year } else { year };

		Date::new(year, month, day).ok_or_else(|| format!("invalid date: {}", s))
	}
}

impl Serialize for Date {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

impl<'de> Deserialize<'de> for Date {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let s = String::deserialize(deserializer)?;
		s.parse().map_err(de::Error::custom)
	}
}
