// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Basalt

use std::{
	fmt::{self, Debug},
	sync::Arc,
};

use basalt_type::{DisplayValue, Session};

use crate::{bitvec::BitVec, error::Result, types::FixedWidthType};

mod builder;
mod cursor;

pub use builder::BlockBuilder;
pub use cursor::BlockCursor;

/// An immutable, append-frozen run of same-typed fixed-width values plus a
/// parallel validity mask.
///
/// Cheap to clone (the bytes are shared, not copied) and safe to read from
/// any number of threads at once; no operation mutates a frozen block.
/// Undefined positions occupy the full fixed width so every position sits at
/// `position * fixed_size`; their byte content carries no meaning.
#[derive(Clone)]
pub struct Block {
	ty: &'static dyn FixedWidthType,
	data: Arc<[u8]>,
	defined: Arc<BitVec>,
	positions: usize,
}

impl Block {
	pub(crate) fn new(ty: &'static dyn FixedWidthType, data: Vec<u8>, defined: BitVec, positions: usize) -> Self {
		debug_assert_eq!(data.len(), positions * ty.fixed_size());
		debug_assert_eq!(defined.len(), positions);
		Self {
			ty,
			data: data.into(),
			defined: Arc::new(defined),
			positions,
		}
	}

	pub fn value_type(&self) -> &'static dyn FixedWidthType {
		self.ty
	}

	pub fn position_count(&self) -> usize {
		self.positions
	}

	pub fn is_empty(&self) -> bool {
		self.positions == 0
	}

	pub fn is_defined(&self, position: usize) -> bool {
		self.defined.get(position)
	}

	/// The raw encoded bytes, for operators that address values directly by
	/// `(data, offset)`.
	pub fn data(&self) -> &[u8] {
		&self.data
	}

	/// Byte offset of a position within [`Self::data`].
	pub fn offset_of(&self, position: usize) -> usize {
		position * self.ty.fixed_size()
	}

	pub fn get_i64(&self, position: usize) -> Result<i64> {
		self.ty.get_i64(&self.data, self.offset_of(position))
	}

	pub fn get_bool(&self, position: usize) -> Result<bool> {
		self.ty.get_bool(&self.data, self.offset_of(position))
	}

	pub fn get_f64(&self, position: usize) -> Result<f64> {
		self.ty.get_f64(&self.data, self.offset_of(position))
	}

	pub fn display_value(&self, session: &Session, position: usize) -> Result<DisplayValue> {
		self.ty.display_value(session, &self.data, self.offset_of(position))
	}

	/// Copy one position into a live builder, re-materializing filtered or
	/// projected columns.
	pub fn append_position_to(&self, position: usize, builder: &mut BlockBuilder) -> Result<()> {
		if self.is_defined(position) {
			self.ty.append_to(&self.data, self.offset_of(position), builder)
		} else {
			builder.push_undefined()
		}
	}

	pub fn cursor(&self) -> BlockCursor<'_> {
		BlockCursor::new(self)
	}

	/// Bytes held by this block, for memory accounting.
	pub fn size_bytes(&self) -> usize {
		self.data.len() + self.defined.size_bytes()
	}
}

impl Debug for Block {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Block")
			.field("type", &self.ty.name())
			.field("positions", &self.positions)
			.finish()
	}
}
