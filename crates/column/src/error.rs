// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Basalt

use thiserror::Error;

use crate::types::StorageKind;

/// Programming-error signals of the columnar kernel.
///
/// Neither variant is recoverable: both indicate a bug in engine code, not
/// bad data. Callers propagate them; catching and retrying is wrong. There
/// is no data-dependent error at this layer, since every fixed-width byte
/// pattern decodes to a valid value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColumnError {
	/// A primitive accessor was invoked against a type whose storage kind
	/// does not carry that primitive.
	#[error("`{op}` is not supported by type `{ty}` (storage kind `{kind}`)")]
	UnsupportedOperation {
		ty: &'static str,
		op: &'static str,
		kind: StorageKind,
	},

	/// A mutation was attempted on a block builder that has already been
	/// frozen.
	#[error("block builder for `{ty}` is frozen; `{op}` is not allowed")]
	IllegalState {
		ty: &'static str,
		op: &'static str,
	},
}

pub type Result<T> = std::result::Result<T, ColumnError>;

#[cfg(test)]
pub mod tests {
	use super::*;

	#[test]
	fn test_unsupported_operation_message() {
		let err = ColumnError::UnsupportedOperation {
			ty: "date",
			op: "get_bool",
			kind: StorageKind::Int8,
		};
		assert_eq!(err.to_string(), "`get_bool` is not supported by type `date` (storage kind `int8`)");
	}

	#[test]
	fn test_illegal_state_message() {
		let err = ColumnError::IllegalState {
			ty: "date",
			op: "push_i64",
		};
		assert_eq!(err.to_string(), "block builder for `date` is frozen; `push_i64` is not allowed");
	}
}
