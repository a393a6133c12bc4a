// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Basalt

use serde::{Deserialize, Serialize};

use crate::timezone::TimeZoneKey;

/// Per-query context consulted when encoded values are materialized for the
/// SQL surface. Storage and comparison never touch it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
	timezone: TimeZoneKey,
}

impl Session {
	pub fn new(timezone: TimeZoneKey) -> Self {
		Self {
			timezone,
		}
	}

	pub fn timezone(&self) -> &TimeZoneKey {
		&self.timezone
	}
}

impl Default for Session {
	fn default() -> Self {
		Self::new(TimeZoneKey::utc())
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;

	#[test]
	fn test_default_is_utc() {
		assert_eq!(Session::default().timezone().id(), "UTC");
	}

	#[test]
	fn test_carries_zone() {
		let session = Session::new(TimeZoneKey::parse("+01:00").unwrap());
		assert_eq!(session.timezone().offset_millis(0), 3_600_000);
	}
}
