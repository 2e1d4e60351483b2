// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::borrow::Cow;

use crate::{
	ast::{ColumnConstraint, ColumnConstraintKind, ColumnDef, GeneratedStorage, TypeName},
	parse::{ParseError, Parser},
	token::{Keyword, TokenKind},
};

impl<'a> Parser<'a> {
	/// `name [type-name] [column-constraint]*`
	pub(crate) fn parse_column_def(&mut self) -> Result<ColumnDef<'a>, ParseError> {
		let name = self.parse_name("column name")?;
		let type_name = self.parse_type_name()?;

		let mut constraints = Vec::new();
		while let Some(constraint) = self.parse_column_constraint()? {
			constraints.push(constraint);
		}

		Ok(ColumnDef {
			name,
			type_name,
			constraints,
			comment: None,
		})
	}

	fn parse_type_name(&mut self) -> Result<Option<TypeName<'a>>, ParseError> {
		let mut words: Vec<Cow<'a, str>> = Vec::new();
		while let Some(token) = self.peek() {
			let word = match &token.kind {
				TokenKind::Ident(word) => Cow::Borrowed(*word),
				TokenKind::QuotedIdent(word) | TokenKind::String(word) => word.clone(),
				TokenKind::Keyword(keyword) if !keyword.is_reserved() && *keyword != Keyword::Generated => {
					Cow::Borrowed(self.text(token.span))
				}
				_ => break,
			};
			words.push(word);
			self.advance();
		}

		if words.is_empty() {
			return Ok(None);
		}

		let name = if words.len() == 1 {
			words.remove(0)
		} else {
			Cow::Owned(words.join(" "))
		};

		let length = if self.check(&TokenKind::OpenParen) {
			Some(self.parse_type_length()?)
		} else {
			None
		};

		Ok(Some(TypeName {
			name,
			length,
		}))
	}

	/// `( signed-number [, signed-number] )`, rendered without whitespace.
	fn parse_type_length(&mut self) -> Result<String, ParseError> {
		self.consume(TokenKind::OpenParen, "'('")?;
		let mut length = self.parse_signed_number()?.to_string();
		if self.consume_if(TokenKind::Comma).is_some() {
			length.push(',');
			length.push_str(&self.parse_signed_number()?);
		}
		self.consume(TokenKind::CloseParen, "')'")?;
		Ok(length)
	}

	fn parse_signed_number(&mut self) -> Result<Cow<'a, str>, ParseError> {
		let sign = if self.consume_if(TokenKind::Minus).is_some() {
			"-"
		} else {
			self.consume_if(TokenKind::Plus);
			""
		};
		match self.peek().map(|t| &t.kind) {
			Some(TokenKind::Number(number)) => {
				let number = *number;
				self.advance();
				if sign.is_empty() {
					Ok(Cow::Borrowed(number))
				} else {
					Ok(Cow::Owned(format!("{sign}{number}")))
				}
			}
			_ => Err(self.unexpected("number")),
		}
	}

	/// Returns `None` once the next token cannot start a column constraint.
	fn parse_column_constraint(&mut self) -> Result<Option<ColumnConstraint<'a>>, ParseError> {
		let name = if self.consume_keyword_if(Keyword::Constraint) {
			Some(self.parse_name("constraint name")?)
		} else {
			None
		};

		let kind = match self.peek_keyword() {
			Some(Keyword::Primary) => {
				self.advance();
				self.consume_keyword(Keyword::Key)?;
				let order = self.parse_sort_order();
				let conflict = self.parse_conflict_clause()?;
				let autoincrement = self.consume_keyword_if(Keyword::Autoincrement);
				ColumnConstraintKind::PrimaryKey {
					order,
					conflict,
					autoincrement,
				}
			}
			Some(Keyword::Not) => {
				self.advance();
				self.consume_keyword(Keyword::Null)?;
				ColumnConstraintKind::NotNull {
					conflict: self.parse_conflict_clause()?,
				}
			}
			Some(Keyword::Null) => {
				self.advance();
				ColumnConstraintKind::Null {
					conflict: self.parse_conflict_clause()?,
				}
			}
			Some(Keyword::Unique) => {
				self.advance();
				ColumnConstraintKind::Unique {
					conflict: self.parse_conflict_clause()?,
				}
			}
			Some(Keyword::Check) => {
				self.advance();
				ColumnConstraintKind::Check(self.parse_parenthesized("expression")?)
			}
			Some(Keyword::Default) => {
				self.advance();
				ColumnConstraintKind::Default(self.parse_default_value()?)
			}
			Some(Keyword::Collate) => {
				self.advance();
				ColumnConstraintKind::Collate(self.parse_name("collation name")?)
			}
			Some(Keyword::References) => {
				self.advance();
				ColumnConstraintKind::References(self.parse_foreign_key_clause()?)
			}
			Some(Keyword::Generated) => {
				self.advance();
				self.consume_keyword(Keyword::Always)?;
				self.consume_keyword(Keyword::As)?;
				self.parse_generated()?
			}
			Some(Keyword::As) => {
				self.advance();
				self.parse_generated()?
			}
			_ => {
				if name.is_some() {
					return Err(self.unexpected("column constraint"));
				}
				return Ok(None);
			}
		};

		Ok(Some(ColumnConstraint {
			name,
			kind,
		}))
	}

	/// The value is kept as written: parentheses, quotes and sign included.
	fn parse_default_value(&mut self) -> Result<&'a str, ParseError> {
		let start = self.next_start();
		match self.peek().map(|t| &t.kind) {
			Some(TokenKind::OpenParen) => {
				self.parse_parenthesized("expression")?;
			}
			Some(TokenKind::Plus | TokenKind::Minus) => {
				self.advance();
				match self.peek().map(|t| &t.kind) {
					Some(TokenKind::Number(_)) => {
						self.advance();
					}
					_ => return Err(self.unexpected("number")),
				}
			}
			Some(
				TokenKind::Number(_)
				| TokenKind::String(_)
				| TokenKind::Blob(_)
				| TokenKind::Ident(_)
				| TokenKind::QuotedIdent(_)
				| TokenKind::Keyword(
					Keyword::Null
					| Keyword::True
					| Keyword::False
					| Keyword::CurrentDate
					| Keyword::CurrentTime
					| Keyword::CurrentTimestamp,
				),
			) => {
				self.advance();
			}
			Some(TokenKind::Keyword(keyword)) if !keyword.is_reserved() => {
				self.advance();
			}
			_ => return Err(self.unexpected("default value")),
		}
		Ok(self.slice(start, self.last_end()))
	}

	/// `( expr ) [STORED | VIRTUAL]`
	fn parse_generated(&mut self) -> Result<ColumnConstraintKind<'a>, ParseError> {
		let expr = self.parse_parenthesized("expression")?;
		let storage = if self.consume_keyword_if(Keyword::Stored) {
			Some(GeneratedStorage::Stored)
		} else if self.consume_keyword_if(Keyword::Virtual) {
			Some(GeneratedStorage::Virtual)
		} else {
			None
		};
		Ok(ColumnConstraintKind::Generated {
			expr,
			storage,
		})
	}
}
