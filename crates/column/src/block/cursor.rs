// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Basalt

use basalt_type::{DisplayValue, Session};

use crate::{block::Block, error::Result};

/// Forward read position over a [`Block`], for operators that scan
/// sequentially rather than by random offset.
///
/// A fresh cursor sits before the first position; [`Self::advance`] moves to
/// the next position and reports whether one exists. Getters expose the same
/// primitive accessors as the type contract and panic if the cursor is not
/// positioned at a value.
pub struct BlockCursor<'a> {
	block: &'a Block,
	position: Option<usize>,
}

impl<'a> BlockCursor<'a> {
	pub(crate) fn new(block: &'a Block) -> Self {
		Self {
			block,
			position: None,
		}
	}

	pub fn advance(&mut self) -> bool {
		let next = self.position.map_or(0, |position| position + 1);
		if next < self.block.position_count() {
			self.position = Some(next);
			true
		} else {
			self.position = Some(self.block.position_count());
			false
		}
	}

	/// Current position, if the cursor is on a value.
	pub fn position(&self) -> Option<usize> {
		self.position.filter(|position| *position < self.block.position_count())
	}

	fn current(&self) -> usize {
		self.position().expect("cursor is not positioned at a value")
	}

	pub fn is_defined(&self) -> bool {
		self.block.is_defined(self.current())
	}

	pub fn get_i64(&self) -> Result<i64> {
		self.block.get_i64(self.current())
	}

	pub fn get_bool(&self) -> Result<bool> {
		self.block.get_bool(self.current())
	}

	pub fn get_f64(&self) -> Result<f64> {
		self.block.get_f64(self.current())
	}

	pub fn display_value(&self, session: &Session) -> Result<DisplayValue> {
		self.block.display_value(session, self.current())
	}
}
