// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
	#[error("expected {expected}, found '{found}' at line {line}, column {column}")]
	UnexpectedToken {
		expected: String,
		found: String,
		line: u32,
		column: u32,
	},

	#[error("expected {expected}, found end of input")]
	UnexpectedEof {
		expected: String,
	},

	#[error("unsupported statement: {statement}")]
	Unsupported {
		statement: String,
	},
}
