// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Basalt

use std::{
	cmp::Ordering,
	fmt::{Display, Formatter},
};

use basalt_type::{DisplayValue, Session};
use serde::{Deserialize, Serialize};

use crate::{
	block::BlockBuilder,
	error::{ColumnError, Result},
};

pub mod date;

/// Physical storage carried by a fixed-width type. The suffix is the byte
/// width: `Int8` is the 8-byte signed integer, `Float8` the 8-byte float.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StorageKind {
	Bool,
	Int8,
	Float8,
	Bytes,
}

impl Display for StorageKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(match self {
			StorageKind::Bool => "bool",
			StorageKind::Int8 => "int8",
			StorageKind::Float8 => "float8",
			StorageKind::Bytes => "bytes",
		})
	}
}

/// The capability set every fixed-size scalar type supplies, so the rest of
/// the engine can treat all such types uniformly.
///
/// Implementations are stateless singletons shared across all threads and
/// all blocks; every operation is a pure function of its inputs. An encoded
/// value has no identity of its own; its meaning is `(type, data, offset)`,
/// and every operation reads or writes exactly `fixed_size` bytes at the
/// given offset, little-endian for integer and float kinds.
///
/// A type overrides only the primitive accessor pair matching its storage
/// kind. The remaining accessors keep their defaults and fail with
/// [`ColumnError::UnsupportedOperation`]: asking a date for a boolean is a
/// bug in engine code, never silently coerced and never caught.
pub trait FixedWidthType: Send + Sync {
	/// Stable registry key; a compatibility contract, not an internal
	/// detail.
	fn name(&self) -> &'static str;

	fn storage(&self) -> StorageKind;

	/// Constant byte width of one encoded value.
	fn fixed_size(&self) -> usize;

	fn get_bool(&self, _data: &[u8], _offset: usize) -> Result<bool> {
		Err(unsupported(self.name(), "get_bool", self.storage()))
	}

	fn write_bool(&self, _sink: &mut Vec<u8>, _value: bool) -> Result<()> {
		Err(unsupported(self.name(), "write_bool", self.storage()))
	}

	fn get_i64(&self, _data: &[u8], _offset: usize) -> Result<i64> {
		Err(unsupported(self.name(), "get_i64", self.storage()))
	}

	fn write_i64(&self, _sink: &mut Vec<u8>, _value: i64) -> Result<()> {
		Err(unsupported(self.name(), "write_i64", self.storage()))
	}

	fn get_f64(&self, _data: &[u8], _offset: usize) -> Result<f64> {
		Err(unsupported(self.name(), "get_f64", self.storage()))
	}

	fn write_f64(&self, _sink: &mut Vec<u8>, _value: f64) -> Result<()> {
		Err(unsupported(self.name(), "write_f64", self.storage()))
	}

	/// The raw encoded span. Supported by every type regardless of storage
	/// kind.
	fn encoded<'a>(&self, data: &'a [u8], offset: usize) -> &'a [u8] {
		&data[offset..offset + self.fixed_size()]
	}

	/// Copy one raw encoded span to an output sink.
	fn write_encoded(&self, sink: &mut Vec<u8>, data: &[u8], offset: usize) {
		sink.extend_from_slice(self.encoded(data, offset));
	}

	/// Byte-level equality of two encoded values. Agrees with
	/// `compare_values(..) == Ordering::Equal`, and equal values hash equal.
	fn equal_to(&self, left: &[u8], left_offset: usize, right: &[u8], right_offset: usize) -> bool;

	/// Deterministic hash of the decoded value.
	fn hash_code(&self, data: &[u8], offset: usize) -> i32;

	/// Strict total order matching the primitive's natural numeric order.
	fn compare_values(&self, left: &[u8], left_offset: usize, right: &[u8], right_offset: usize) -> Ordering;

	/// Copy one encoded value from a read-only buffer into a live builder,
	/// re-materializing filtered or projected columns.
	fn append_to(&self, data: &[u8], offset: usize, builder: &mut BlockBuilder) -> Result<()>;

	/// Decode to a session-aware value for the SQL surface. The only
	/// operation that consults the session.
	fn display_value(&self, session: &Session, data: &[u8], offset: usize) -> Result<DisplayValue>;
}

fn unsupported(ty: &'static str, op: &'static str, kind: StorageKind) -> ColumnError {
	ColumnError::UnsupportedOperation {
		ty,
		op,
		kind,
	}
}
