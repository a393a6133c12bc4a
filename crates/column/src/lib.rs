// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Basalt

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod bitvec;
pub mod block;
pub mod error;
pub mod types;

pub use bitvec::BitVec;
pub use block::{Block, BlockBuilder, BlockCursor};
pub use error::{ColumnError, Result};
pub use types::{
	FixedWidthType, StorageKind,
	date::{DATE, DateType},
};
