// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Basalt

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

const MILLIS_PER_MINUTE: i64 = 60_000;

/// Key identifying a session time zone, resolved to a UTC offset.
///
/// Only fixed-offset zones are representable: `UTC` and `+HH:MM` / `-HH:MM`.
/// The key is owned by the session; type singletons look it up per
/// conversion and never cache it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeZoneKey {
	id: String,
	offset_millis: i64,
}

impl TimeZoneKey {
	pub fn utc() -> Self {
		Self {
			id: "UTC".to_string(),
			offset_millis: 0,
		}
	}

	/// Parse a zone id. Offsets are limited to +/-14:00, the widest offset
	/// in civil use.
	pub fn parse(id: &str) -> Option<Self> {
		if id == "UTC" {
			return Some(Self::utc());
		}

		let (sign, rest) = if let Some(rest) = id.strip_prefix('+') {
			(1, rest)
		} else if let Some(rest) = id.strip_prefix('-') {
			(-1, rest)
		} else {
			return None;
		};

		let (hours_str, minutes_str) = rest.split_once(':')?;
		if hours_str.len() != 2 || minutes_str.len() != 2 {
			return None;
		}

		let hours: i64 = hours_str.parse().ok()?;
		let minutes: i64 = minutes_str.parse().ok()?;
		if hours > 14 || minutes > 59 || (hours == 14 && minutes != 0) {
			return None;
		}

		Some(Self {
			id: id.to_string(),
			offset_millis: sign * (hours * 60 + minutes) * MILLIS_PER_MINUTE,
		})
	}

	pub fn id(&self) -> &str {
		&self.id
	}

	/// UTC offset of this zone at the given instant. Fixed zones ignore the
	/// instant; the parameter keeps the lookup shaped like one for zones
	/// with transition rules.
	pub fn offset_millis(&self, _instant_millis: i64) -> i64 {
		self.offset_millis
	}
}

impl Display for TimeZoneKey {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.id)
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;

	#[test]
	fn test_utc() {
		let zone = TimeZoneKey::utc();
		assert_eq!(zone.id(), "UTC");
		assert_eq!(zone.offset_millis(0), 0);
		assert_eq!(TimeZoneKey::parse("UTC"), Some(zone));
	}

	#[test]
	fn test_parse_positive_offset() {
		let zone = TimeZoneKey::parse("+01:00").unwrap();
		assert_eq!(zone.id(), "+01:00");
		assert_eq!(zone.offset_millis(0), 3_600_000);
	}

	#[test]
	fn test_parse_negative_offset() {
		let zone = TimeZoneKey::parse("-05:30").unwrap();
		assert_eq!(zone.offset_millis(0), -(5 * 3_600_000 + 30 * 60_000));
	}

	#[test]
	fn test_offset_ignores_instant() {
		let zone = TimeZoneKey::parse("+02:00").unwrap();
		assert_eq!(zone.offset_millis(0), zone.offset_millis(i64::MAX));
	}

	#[test]
	fn test_parse_rejects_garbage() {
		assert!(TimeZoneKey::parse("").is_none());
		assert!(TimeZoneKey::parse("utc").is_none());
		assert!(TimeZoneKey::parse("+1:00").is_none());
		assert!(TimeZoneKey::parse("+01-00").is_none());
		assert!(TimeZoneKey::parse("+15:00").is_none());
		assert!(TimeZoneKey::parse("+14:30").is_none());
		assert!(TimeZoneKey::parse("+01:60").is_none());
		assert!(TimeZoneKey::parse("Europe/Berlin").is_none());
	}

	#[test]
	fn test_serde_roundtrip() {
		let zone = TimeZoneKey::parse("-08:00").unwrap();
		let json = serde_json::to_string(&zone).unwrap();
		let recovered: TimeZoneKey = serde_json::from_str(&json).unwrap();
		assert_eq!(zone, recovered);
	}
}
