// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use thiserror::Error;

use crate::{parse::ParseError, token::LexError};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
	#[error("lexer error: {0}")]
	Lex(#[from] LexError),

	#[error("parser error: {0}")]
	Parse(#[from] ParseError),
}

impl Error {
	/// True when the input is well-formed but not a CREATE TABLE or
	/// ALTER TABLE statement.
	pub fn is_unsupported(&self) -> bool {
		matches!(self, Error::Parse(ParseError::Unsupported { .. }))
	}
}
