// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::{
	ast::{CreateTable, Statement},
	parse::{ParseError, Parser},
	token::{Keyword, TokenKind},
};

impl<'a> Parser<'a> {
	pub(crate) fn parse_create(&mut self) -> Result<Statement<'a>, ParseError> {
		self.consume_keyword(Keyword::Create)?;
		let temporary = self.consume_keyword_if(Keyword::Temp) || self.consume_keyword_if(Keyword::Temporary);

		match self.peek_keyword() {
			Some(Keyword::Table) => {
				self.advance();
				Ok(Statement::CreateTable(self.parse_create_table(temporary)?))
			}
			Some(
				Keyword::Index | Keyword::Unique | Keyword::View | Keyword::Trigger | Keyword::Virtual,
			) => {
				let mut err = self.unsupported(1);
				if let ParseError::Unsupported {
					statement,
				} = &mut err
				{
					statement.insert_str(0, "CREATE ");
				}
				Err(err)
			}
			_ => Err(self.unexpected("TABLE")),
		}
	}

	fn parse_create_table(&mut self, temporary: bool) -> Result<CreateTable<'a>, ParseError> {
		let if_not_exists = self.parse_if_not_exists()?;
		let name = self.parse_qualified_name()?;

		if self.peek_keyword() == Some(Keyword::As) {
			return Err(ParseError::Unsupported {
				statement: "CREATE TABLE AS SELECT".to_string(),
			});
		}

		let open = self.consume(TokenKind::OpenParen, "'(' or AS")?;
		let body_start = self.next_start();

		let mut columns = Vec::new();
		let mut constraints = Vec::new();
		loop {
			if self.is_table_constraint_start() {
				constraints.push(self.parse_table_constraint()?);
				// SQLite tolerates table constraints without separating commas
				if self.consume_if(TokenKind::Comma).is_none() && !self.is_table_constraint_start() {
					break;
				}
				continue;
			}
			if !constraints.is_empty() {
				return Err(self.unexpected("table constraint"));
			}

			let mut column = self.parse_column_def()?;
			let end = self.last_end();
			let more = self.consume_if(TokenKind::Comma).is_some();
			column.comment = self.comments_between(end, self.next_start());
			columns.push(column);
			if !more {
				break;
			}
		}

		let close = self.consume(TokenKind::CloseParen, "',' or ')'")?;
		let comment = self
			.comments_between(open.span.end, body_start)
			.or_else(|| self.comments_between(close.span.end, usize::MAX));

		let (without_rowid, strict) = self.parse_table_options()?;

		Ok(CreateTable {
			name,
			temporary,
			if_not_exists,
			without_rowid,
			strict,
			comment,
			columns,
			constraints,
		})
	}

	pub(crate) fn parse_if_not_exists(&mut self) -> Result<bool, ParseError> {
		if !self.consume_keyword_if(Keyword::If) {
			return Ok(false);
		}
		self.consume_keyword(Keyword::Not)?;
		self.consume_keyword(Keyword::Exists)?;
		Ok(true)
	}

	/// `[WITHOUT ROWID | STRICT] [, ...]`
	fn parse_table_options(&mut self) -> Result<(bool, bool), ParseError> {
		let mut without_rowid = false;
		let mut strict = false;

		if !matches!(self.peek_keyword(), Some(Keyword::Without | Keyword::Strict)) {
			return Ok((without_rowid, strict));
		}

		loop {
			if self.consume_keyword_if(Keyword::Without) {
				match self.peek().map(|t| &t.kind) {
					Some(TokenKind::Ident(word)) if word.eq_ignore_ascii_case("rowid") => {
						self.advance();
						without_rowid = true;
					}
					_ => return Err(self.unexpected("ROWID")),
				}
			} else if self.consume_keyword_if(Keyword::Strict) {
				strict = true;
			} else {
				return Err(self.unexpected("WITHOUT ROWID or STRICT"));
			}

			if self.consume_if(TokenKind::Comma).is_none() {
				break;
			}
		}

		Ok((without_rowid, strict))
	}

	fn is_table_constraint_start(&self) -> bool {
		matches!(
			self.peek_keyword(),
			Some(Keyword::Constraint | Keyword::Primary | Keyword::Unique | Keyword::Check | Keyword::Foreign)
		)
	}
}
