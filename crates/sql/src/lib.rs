// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Tokenizer and parser for the SQLite table DDL subset: `CREATE TABLE`
//! and the four `ALTER TABLE` forms.

pub mod ast;
pub mod error;
pub mod parse;
pub mod token;

pub use ast::Statement;
pub use error::Error;
pub use parse::{ParseError, Parser};
pub use token::{LexError, tokenize};
use tracing::{instrument, trace};

/// Parses a single statement. The returned tree borrows from `sql`.
#[instrument(name = "sql::parse", level = "trace", skip(sql))]
pub fn parse(sql: &str) -> Result<Statement<'_>, Error> {
	let tokens = tokenize(sql)?;
	trace!(tokens = tokens.tokens.len(), comments = tokens.comments.len(), "tokenized");
	Ok(Parser::new(sql, tokens).parse()?)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_lex_error_is_not_unsupported() {
		let err = parse("CREATE TABLE t (a TEXT DEFAULT 'x)").unwrap_err();
		assert!(matches!(err, Error::Lex(LexError::UnterminatedString { .. })));
		assert!(!err.is_unsupported());
	}

	#[test]
	fn test_unsupported_statements() {
		for sql in ["SELECT 1", "DROP TABLE t", "CREATE VIEW v AS SELECT 1", "CREATE VIRTUAL TABLE v USING fts5(a)"] {
			assert!(parse(sql).unwrap_err().is_unsupported(), "{sql}");
		}
	}

	#[test]
	fn test_garbage_is_syntax_error() {
		let err = parse("HELLO WORLD").unwrap_err();
		assert!(!err.is_unsupported());
	}

	#[test]
	fn test_empty_input() {
		assert!(matches!(parse("").unwrap_err(), Error::Parse(ParseError::UnexpectedEof { .. })));
		assert!(matches!(parse("  -- nothing\n").unwrap_err(), Error::Parse(ParseError::UnexpectedEof { .. })));
	}
}
