// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use reifydb_sql::Error as SqlError;
use thiserror::Error;

/// Failure to turn a statement into a [`crate::StatementInfo`]. No partial
/// result accompanies either variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
	#[error("syntax error: {message}")]
	SyntaxError {
		message: String,
	},

	#[error("unsupported statement: {statement}")]
	UnsupportedStatement {
		statement: String,
	},
}

impl ParseError {
	/// Callers treat an unsupported statement exactly like malformed input,
	/// so this holds for both variants.
	pub fn is_syntax_error(&self) -> bool {
		matches!(self, ParseError::SyntaxError { .. } | ParseError::UnsupportedStatement { .. })
	}

	pub fn is_unsupported(&self) -> bool {
		matches!(self, ParseError::UnsupportedStatement { .. })
	}
}

impl From<SqlError> for ParseError {
	fn from(err: SqlError) -> Self {
		match err {
			SqlError::Parse(reifydb_sql::ParseError::Unsupported {
				statement,
			}) => ParseError::UnsupportedStatement {
				statement,
			},
			SqlError::Parse(err) => ParseError::SyntaxError {
				message: err.to_string(),
			},
			SqlError::Lex(err) => ParseError::SyntaxError {
				message: err.to_string(),
			},
		}
	}
}
