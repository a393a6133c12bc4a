// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Basalt

use std::cmp::Ordering;

use basalt_type::{DisplayValue, MILLIS_PER_DAY, Session, SqlDate};

use super::{FixedWidthType, StorageKind};
use crate::{block::BlockBuilder, error::Result};

/// The fixed-width date type: an 8-byte signed count of whole days since
/// 1970-01-01T00:00:00Z, little-endian.
///
/// The encoding is timezone-agnostic. Comparison, equality, and hashing
/// operate on the raw integer, so earlier dates sort before later dates with
/// no zone adjustment; only [`FixedWidthType::display_value`] consults the
/// session.
#[derive(Copy, Clone, Debug, Default)]
pub struct DateType;

/// Process-wide singleton shared by all blocks and threads.
pub static DATE: DateType = DateType;

impl DateType {
	#[inline]
	fn read(data: &[u8], offset: usize) -> i64 {
		let bytes: [u8; 8] = data[offset..offset + 8].try_into().unwrap();
		i64::from_le_bytes(bytes)
	}
}

impl FixedWidthType for DateType {
	fn name(&self) -> &'static str {
		"date"
	}

	fn storage(&self) -> StorageKind {
		StorageKind::Int8
	}

	fn fixed_size(&self) -> usize {
		size_of::<i64>()
	}

	fn get_i64(&self, data: &[u8], offset: usize) -> Result<i64> {
		Ok(Self::read(data, offset))
	}

	fn write_i64(&self, sink: &mut Vec<u8>, value: i64) -> Result<()> {
		sink.extend_from_slice(&value.to_le_bytes());
		Ok(())
	}

	fn equal_to(&self, left: &[u8], left_offset: usize, right: &[u8], right_offset: usize) -> bool {
		Self::read(left, left_offset) == Self::read(right, right_offset)
	}

	fn hash_code(&self, data: &[u8], offset: usize) -> i32 {
		let value = Self::read(data, offset) as u64;
		(value ^ (value >> 32)) as i32
	}

	fn compare_values(&self, left: &[u8], left_offset: usize, right: &[u8], right_offset: usize) -> Ordering {
		Self::read(left, left_offset).cmp(&Self::read(right, right_offset))
	}

	fn append_to(&self, data: &[u8], offset: usize, builder: &mut BlockBuilder) -> Result<()> {
		builder.push_i64(Self::read(data, offset))
	}

	fn display_value(&self, session: &Session, data: &[u8], offset: usize) -> Result<DisplayValue> {
		// The stored value is midnight UTC of the calendar date. Removing
		// the zone offset (not adding it) keeps the instant at midnight
		// when formatted in the session zone; surrounding display code
		// depends on this exact sign.
		let days = Self::read(data, offset);
		let instant = days.saturating_mul(MILLIS_PER_DAY);
		let offset_millis = session.timezone().offset_millis(instant);
		Ok(DisplayValue::Date(SqlDate::new(instant.saturating_sub(offset_millis), session.timezone().clone())))
	}
}
