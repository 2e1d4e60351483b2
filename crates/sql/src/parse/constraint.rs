// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::{
	ast::{
		ConflictAction, Deferrable, ForeignKeyAction, ForeignKeyClause, IndexedColumn, Initially, SortOrder,
		TableConstraint, TableConstraintKind,
	},
	parse::{ParseError, Parser},
	token::{Keyword, TokenKind},
};

impl<'a> Parser<'a> {
	pub(crate) fn parse_table_constraint(&mut self) -> Result<TableConstraint<'a>, ParseError> {
		let name = if self.consume_keyword_if(Keyword::Constraint) {
			Some(self.parse_name("constraint name")?)
		} else {
			None
		};

		let kind = match self.peek_keyword() {
			Some(Keyword::Primary) => {
				self.advance();
				self.consume_keyword(Keyword::Key)?;
				let columns = self.parse_indexed_columns()?;
				TableConstraintKind::PrimaryKey {
					columns,
					conflict: self.parse_conflict_clause()?,
				}
			}
			Some(Keyword::Unique) => {
				self.advance();
				let columns = self.parse_indexed_columns()?;
				TableConstraintKind::Unique {
					columns,
					conflict: self.parse_conflict_clause()?,
				}
			}
			Some(Keyword::Check) => {
				self.advance();
				let expr = self.parse_parenthesized("expression")?;
				TableConstraintKind::Check {
					expr,
					conflict: self.parse_conflict_clause()?,
				}
			}
			Some(Keyword::Foreign) => {
				self.advance();
				self.consume_keyword(Keyword::Key)?;
				let columns = self.parse_name_list("column name")?;
				self.consume_keyword(Keyword::References)?;
				TableConstraintKind::ForeignKey {
					columns,
					clause: self.parse_foreign_key_clause()?,
				}
			}
			_ => return Err(self.unexpected("PRIMARY KEY, UNIQUE, CHECK or FOREIGN KEY")),
		};

		Ok(TableConstraint {
			name,
			kind,
		})
	}

	/// `( indexed-column [, indexed-column]* [AUTOINCREMENT] )`
	fn parse_indexed_columns(&mut self) -> Result<Vec<IndexedColumn<'a>>, ParseError> {
		self.consume(TokenKind::OpenParen, "'('")?;
		let mut columns = vec![self.parse_indexed_column()?];
		while self.consume_if(TokenKind::Comma).is_some() {
			columns.push(self.parse_indexed_column()?);
		}
		self.consume_keyword_if(Keyword::Autoincrement);
		self.consume(TokenKind::CloseParen, "')'")?;
		Ok(columns)
	}

	fn parse_indexed_column(&mut self) -> Result<IndexedColumn<'a>, ParseError> {
		let name = self.parse_name("column name")?;
		let collate = if self.consume_keyword_if(Keyword::Collate) {
			Some(self.parse_name("collation name")?)
		} else {
			None
		};
		let order = self.parse_sort_order();
		Ok(IndexedColumn {
			name,
			collate,
			order,
		})
	}

	pub(crate) fn parse_sort_order(&mut self) -> Option<SortOrder> {
		if self.consume_keyword_if(Keyword::Asc) {
			Some(SortOrder::Asc)
		} else if self.consume_keyword_if(Keyword::Desc) {
			Some(SortOrder::Desc)
		} else {
			None
		}
	}

	/// `ON CONFLICT (ROLLBACK | ABORT | FAIL | IGNORE | REPLACE)`
	pub(crate) fn parse_conflict_clause(&mut self) -> Result<Option<ConflictAction>, ParseError> {
		if self.peek_keyword() != Some(Keyword::On) || self.peek_nth_keyword(1) != Some(Keyword::Conflict) {
			return Ok(None);
		}
		self.advance();
		self.advance();

		let action = match self.peek_keyword() {
			Some(Keyword::Rollback) => ConflictAction::Rollback,
			Some(Keyword::Abort) => ConflictAction::Abort,
			Some(Keyword::Fail) => ConflictAction::Fail,
			Some(Keyword::Ignore) => ConflictAction::Ignore,
			Some(Keyword::Replace) => ConflictAction::Replace,
			_ => return Err(self.unexpected("ROLLBACK, ABORT, FAIL, IGNORE or REPLACE")),
		};
		self.advance();
		Ok(Some(action))
	}

	/// Everything after `REFERENCES`. Clause parts may appear in any order;
	/// a repeated part overwrites the earlier one.
	pub(crate) fn parse_foreign_key_clause(&mut self) -> Result<ForeignKeyClause<'a>, ParseError> {
		let table = self.parse_name("referenced table")?;
		let columns = if self.check(&TokenKind::OpenParen) {
			self.parse_name_list("column name")?
		} else {
			Vec::new()
		};

		let mut clause = ForeignKeyClause {
			table,
			columns,
			on_delete: None,
			on_update: None,
			match_name: None,
			deferrable: None,
		};

		loop {
			match (self.peek_keyword(), self.peek_nth_keyword(1)) {
				(Some(Keyword::On), Some(Keyword::Delete)) => {
					self.advance();
					self.advance();
					clause.on_delete = Some(self.parse_foreign_key_action()?);
				}
				(Some(Keyword::On), Some(Keyword::Update)) => {
					self.advance();
					self.advance();
					clause.on_update = Some(self.parse_foreign_key_action()?);
				}
				(Some(Keyword::Match), _) => {
					self.advance();
					clause.match_name = Some(self.parse_name("match name")?);
				}
				(Some(Keyword::Deferrable), _) | (Some(Keyword::Not), Some(Keyword::Deferrable)) => {
					clause.deferrable = Some(self.parse_deferrable()?);
				}
				_ => break,
			}
		}

		Ok(clause)
	}

	fn parse_foreign_key_action(&mut self) -> Result<ForeignKeyAction, ParseError> {
		let action = match self.peek_keyword() {
			Some(Keyword::Set) => {
				self.advance();
				match self.peek_keyword() {
					Some(Keyword::Null) => ForeignKeyAction::SetNull,
					Some(Keyword::Default) => ForeignKeyAction::SetDefault,
					_ => return Err(self.unexpected("NULL or DEFAULT")),
				}
			}
			Some(Keyword::Cascade) => ForeignKeyAction::Cascade,
			Some(Keyword::Restrict) => ForeignKeyAction::Restrict,
			Some(Keyword::No) => {
				self.advance();
				match self.peek_keyword() {
					Some(Keyword::Action) => ForeignKeyAction::NoAction,
					_ => return Err(self.unexpected("ACTION")),
				}
			}
			_ => return Err(self.unexpected("SET NULL, SET DEFAULT, CASCADE, RESTRICT or NO ACTION")),
		};
		self.advance();
		Ok(action)
	}

	/// `[NOT] DEFERRABLE [INITIALLY (DEFERRED | IMMEDIATE)]`
	fn parse_deferrable(&mut self) -> Result<Deferrable, ParseError> {
		let not = self.consume_keyword_if(Keyword::Not);
		self.consume_keyword(Keyword::Deferrable)?;
		let initially = if self.consume_keyword_if(Keyword::Initially) {
			match self.peek_keyword() {
				Some(Keyword::Deferred) => Some(Initially::Deferred),
				Some(Keyword::Immediate) => Some(Initially::Immediate),
				_ => return Err(self.unexpected("DEFERRED or IMMEDIATE")),
			}
		} else {
			None
		};
		if initially.is_some() {
			self.advance();
		}
		Ok(Deferrable {
			not,
			initially,
		})
	}
}
