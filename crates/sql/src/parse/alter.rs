// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::{
	ast::{AlterAction, AlterTable, Statement},
	parse::{ParseError, Parser},
	token::Keyword,
};

impl<'a> Parser<'a> {
	pub(crate) fn parse_alter(&mut self) -> Result<Statement<'a>, ParseError> {
		self.consume_keyword(Keyword::Alter)?;
		self.consume_keyword(Keyword::Table)?;
		let table = self.parse_qualified_name()?;

		let action = match self.peek_keyword() {
			Some(Keyword::Rename) => {
				self.advance();
				if self.consume_keyword_if(Keyword::To) {
					AlterAction::RenameTable {
						to: self.parse_name("table name")?,
					}
				} else {
					self.consume_keyword_if(Keyword::Column);
					let from = self.parse_name("column name")?;
					self.consume_keyword(Keyword::To)?;
					let to = self.parse_name("column name")?;
					AlterAction::RenameColumn {
						from,
						to,
					}
				}
			}
			Some(Keyword::Add) => {
				self.advance();
				self.consume_keyword_if(Keyword::Column);
				let mut column = self.parse_column_def()?;
				column.comment = self.comments_between(self.last_end(), usize::MAX);
				AlterAction::AddColumn(column)
			}
			Some(Keyword::Drop) => {
				self.advance();
				self.consume_keyword_if(Keyword::Column);
				AlterAction::DropColumn(self.parse_name("column name")?)
			}
			_ => return Err(self.unexpected("RENAME, ADD or DROP")),
		};

		Ok(Statement::AlterTable(AlterTable {
			table,
			action,
		}))
	}
}
