// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Basalt

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{
	timezone::TimeZoneKey,
	value::date::{Date, MILLIS_PER_DAY, days_to_ymd},
};

/// A date as handed to the SQL surface: an instant in milliseconds plus the
/// session zone it is meant to be displayed in.
///
/// The instant is midnight of the calendar date in the zone, i.e. the stored
/// midnight-UTC instant with the zone offset already removed. Formatting the
/// instant in the zone therefore reproduces midnight of the stored date.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SqlDate {
	millis: i64,
	timezone: TimeZoneKey,
}

impl SqlDate {
	pub fn new(millis: i64, timezone: TimeZoneKey) -> Self {
		Self {
			millis,
			timezone,
		}
	}

	/// The instant, in milliseconds since the Unix epoch.
	pub fn millis_utc(&self) -> i64 {
		self.millis
	}

	pub fn timezone(&self) -> &TimeZoneKey {
		&self.timezone
	}

	/// Recover the calendar date in this value's zone.
	pub fn date(&self) -> Option<Date> {
		Date::from_days(self.local_days())
	}

	fn local_days(&self) -> i64 {
		let local = self.millis.saturating_add(self.timezone.offset_millis(self.millis));
		local.div_euclid(MILLIS_PER_DAY)
	}
}

impl Display for SqlDate {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let (year, month, day) = days_to_ymd(self.local_days());
		if year < 0 {
			write!(f, "-{:04}-{:02}-{:02}", -year, month, day)
		} else {
			write!(f, "{:04}-{:02}-{:02}", year, month, day)
		}
	}
}
