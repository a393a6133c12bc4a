// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Basalt

use std::fmt::{self, Debug};

use tracing::debug;

use crate::{
	bitvec::BitVec,
	block::Block,
	error::{ColumnError, Result},
	types::FixedWidthType,
};

/// Append-only, single-writer precursor to a [`Block`].
///
/// State machine: Open -> Frozen. Frozen is terminal; every mutation after
/// [`Self::freeze`], including a second freeze, fails with
/// [`ColumnError::IllegalState`]. Single-writer is enforced by `&mut self`;
/// the builder carries no internal synchronization.
pub struct BlockBuilder {
	ty: &'static dyn FixedWidthType,
	width: usize,
	data: Vec<u8>,
	defined: BitVec,
	positions: usize,
	frozen: bool,
}

impl BlockBuilder {
	pub fn new(ty: &'static dyn FixedWidthType) -> Self {
		Self::with_capacity(ty, 0)
	}

	/// `positions_hint` sizes the initial allocation. It is an estimate,
	/// not a cap; the builder grows past it.
	pub fn with_capacity(ty: &'static dyn FixedWidthType, positions_hint: usize) -> Self {
		let width = ty.fixed_size();
		Self {
			ty,
			width,
			data: Vec::with_capacity(positions_hint.saturating_mul(width)),
			defined: BitVec::with_capacity(positions_hint),
			positions: 0,
			frozen: false,
		}
	}

	fn ensure_open(&self, op: &'static str) -> Result<()> {
		if self.frozen {
			return Err(ColumnError::IllegalState {
				ty: self.ty.name(),
				op,
			});
		}
		Ok(())
	}

	pub fn push_i64(&mut self, value: i64) -> Result<()> {
		self.ensure_open("push_i64")?;
		self.ty.write_i64(&mut self.data, value)?;
		self.commit_position(true);
		Ok(())
	}

	pub fn push_bool(&mut self, value: bool) -> Result<()> {
		self.ensure_open("push_bool")?;
		self.ty.write_bool(&mut self.data, value)?;
		self.commit_position(true);
		Ok(())
	}

	pub fn push_f64(&mut self, value: f64) -> Result<()> {
		self.ensure_open("push_f64")?;
		self.ty.write_f64(&mut self.data, value)?;
		self.commit_position(true);
		Ok(())
	}

	/// Append an undefined (null) position. It consumes the full fixed
	/// width so later positions keep their offsets; the bytes are zero and
	/// carry no meaning.
	pub fn push_undefined(&mut self) -> Result<()> {
		self.ensure_open("push_undefined")?;
		self.data.resize(self.data.len() + self.width, 0);
		self.commit_position(false);
		Ok(())
	}

	fn commit_position(&mut self, defined: bool) {
		self.defined.push(defined);
		self.positions += 1;
	}

	pub fn position_count(&self) -> usize {
		self.positions
	}

	pub fn is_empty(&self) -> bool {
		self.positions == 0
	}

	/// Advisory estimated size for the engine's memory accounting; nothing
	/// is enforced here.
	pub fn size_bytes(&self) -> usize {
		self.data.len() + self.defined.size_bytes()
	}

	/// Freeze into an immutable [`Block`]. The builder is consumed-once:
	/// it stays behind in the terminal Frozen state.
	pub fn freeze(&mut self) -> Result<Block> {
		self.ensure_open("freeze")?;
		self.frozen = true;

		let data = std::mem::take(&mut self.data);
		let defined = std::mem::take(&mut self.defined);
		debug!("froze `{}` block with {} positions ({} bytes)", self.ty.name(), self.positions, data.len());
		Ok(Block::new(self.ty, data, defined, self.positions))
	}
}

impl Debug for BlockBuilder {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("BlockBuilder")
			.field("type", &self.ty.name())
			.field("positions", &self.positions)
			.field("frozen", &self.frozen)
			.finish()
	}
}
