// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod alter;
mod column;
mod constraint;
mod create;
pub mod error;

use std::borrow::Cow;

pub use error::ParseError;

use crate::{
	ast::{QualifiedName, Statement},
	token::{Comment, Keyword, Span, Token, TokenKind, Tokens},
};

pub struct Parser<'a> {
	source: &'a str,
	tokens: Vec<Token<'a>>,
	comments: Vec<Comment<'a>>,
	position: usize,
}

impl<'a> Parser<'a> {
	pub fn new(source: &'a str, tokens: Tokens<'a>) -> Self {
		Self {
			source,
			tokens: tokens.tokens,
			comments: tokens.comments,
			position: 0,
		}
	}

	/// Parses exactly one statement, optionally terminated by `;`.
	pub fn parse(mut self) -> Result<Statement<'a>, ParseError> {
		let statement = self.parse_statement()?;
		self.consume_if(TokenKind::Semicolon);
		if !self.is_eof() {
			return Err(self.unexpected("end of statement"));
		}
		Ok(statement)
	}

	fn parse_statement(&mut self) -> Result<Statement<'a>, ParseError> {
		match self.peek_keyword() {
			Some(Keyword::Create) => self.parse_create(),
			Some(Keyword::Alter) => self.parse_alter(),
			Some(
				Keyword::Select
				| Keyword::Insert
				| Keyword::Update
				| Keyword::Delete
				| Keyword::Drop
				| Keyword::Replace
				| Keyword::With,
			) => Err(self.unsupported(1)),
			_ => Err(self.unexpected("CREATE TABLE or ALTER TABLE")),
		}
	}

	pub(crate) fn parse_qualified_name(&mut self) -> Result<QualifiedName<'a>, ParseError> {
		let first = self.parse_name("table name")?;
		if self.consume_if(TokenKind::Dot).is_some() {
			let name = self.parse_name("table name")?;
			return Ok(QualifiedName {
				schema: Some(first),
				name,
			});
		}
		Ok(QualifiedName {
			schema: None,
			name: first,
		})
	}

	/// Accepts bare and quoted identifiers, string literals and any
	/// keyword that is not reserved.
	pub(crate) fn parse_name(&mut self, expected: &str) -> Result<Cow<'a, str>, ParseError> {
		let Some(token) = self.peek() else {
			return Err(self.unexpected(expected));
		};
		let name = match &token.kind {
			TokenKind::Ident(name) => Cow::Borrowed(*name),
			TokenKind::QuotedIdent(name) | TokenKind::String(name) => name.clone(),
			TokenKind::Keyword(keyword) if !keyword.is_reserved() => Cow::Borrowed(self.text(token.span)),
			_ => return Err(self.unexpected(expected)),
		};
		self.advance();
		Ok(name)
	}

	/// `( name [, name]* )`
	pub(crate) fn parse_name_list(&mut self, expected: &str) -> Result<Vec<Cow<'a, str>>, ParseError> {
		self.consume(TokenKind::OpenParen, "'('")?;
		let mut names = vec![self.parse_name(expected)?];
		while self.consume_if(TokenKind::Comma).is_some() {
			names.push(self.parse_name(expected)?);
		}
		self.consume(TokenKind::CloseParen, "')'")?;
		Ok(names)
	}

	/// Consumes a balanced `( ... )` group and returns the trimmed source
	/// text strictly inside the outer parentheses.
	pub(crate) fn parse_parenthesized(&mut self, expected: &str) -> Result<&'a str, ParseError> {
		let open = self.consume(TokenKind::OpenParen, "'('")?;
		let mut depth = 1usize;
		loop {
			let Some(token) = self.advance() else {
				return Err(ParseError::UnexpectedEof {
					expected: "')'".to_string(),
				});
			};
			match token.kind {
				TokenKind::OpenParen => depth += 1,
				TokenKind::CloseParen => {
					depth -= 1;
					if depth == 0 {
						let inner = self.slice(open.span.end, token.span.start).trim();
						if inner.is_empty() {
							return Err(ParseError::UnexpectedToken {
								expected: expected.to_string(),
								found: ")".to_string(),
								line: token.span.line,
								column: token.span.column,
							});
						}
						return Ok(inner);
					}
				}
				_ => {}
			}
		}
	}

	pub(crate) fn peek(&self) -> Option<&Token<'a>> {
		self.tokens.get(self.position)
	}

	pub(crate) fn peek_keyword(&self) -> Option<Keyword> {
		self.peek_nth_keyword(0)
	}

	pub(crate) fn peek_nth_keyword(&self, n: usize) -> Option<Keyword> {
		match self.tokens.get(self.position + n).map(|t| &t.kind) {
			Some(TokenKind::Keyword(keyword)) => Some(*keyword),
			_ => None,
		}
	}

	pub(crate) fn check(&self, kind: &TokenKind<'a>) -> bool {
		self.peek().is_some_and(|t| &t.kind == kind)
	}

	pub(crate) fn is_eof(&self) -> bool {
		self.position >= self.tokens.len()
	}

	pub(crate) fn advance(&mut self) -> Option<Token<'a>> {
		let token = self.tokens.get(self.position).cloned()?;
		self.position += 1;
		Some(token)
	}

	pub(crate) fn consume(&mut self, kind: TokenKind<'a>, expected: &str) -> Result<Token<'a>, ParseError> {
		self.consume_if(kind).ok_or_else(|| self.unexpected(expected))
	}

	pub(crate) fn consume_if(&mut self, kind: TokenKind<'a>) -> Option<Token<'a>> {
		if self.check(&kind) {
			return self.advance();
		}
		None
	}

	pub(crate) fn consume_keyword(&mut self, keyword: Keyword) -> Result<Token<'a>, ParseError> {
		if self.peek_keyword() == Some(keyword) {
			if let Some(token) = self.advance() {
				return Ok(token);
			}
		}
		Err(self.unexpected(keyword.as_str()))
	}

	pub(crate) fn consume_keyword_if(&mut self, keyword: Keyword) -> bool {
		if self.peek_keyword() == Some(keyword) {
			self.position += 1;
			return true;
		}
		false
	}

	/// Byte offset where the previous token ended.
	pub(crate) fn last_end(&self) -> usize {
		self.position.checked_sub(1).and_then(|i| self.tokens.get(i)).map_or(0, |t| t.span.end)
	}

	/// Byte offset where the next token starts, or the end of input.
	pub(crate) fn next_start(&self) -> usize {
		self.peek().map_or(self.source.len(), |t| t.span.start)
	}

	pub(crate) fn text(&self, span: Span) -> &'a str {
		self.slice(span.start, span.end)
	}

	pub(crate) fn slice(&self, start: usize, end: usize) -> &'a str {
		&self.source[start..end]
	}

	/// Comments starting within `[start, end)`, joined by newlines.
	pub(crate) fn comments_between(&self, start: usize, end: usize) -> Option<Cow<'a, str>> {
		let mut found = self.comments.iter().filter(|c| c.span.start >= start && c.span.start < end);
		let first = found.next()?;
		let rest: Vec<&str> = found.map(|c| c.text).collect();
		if rest.is_empty() {
			return Some(Cow::Borrowed(first.text));
		}
		let mut joined = first.text.to_string();
		for text in rest {
			joined.push('\n');
			joined.push_str(text);
		}
		Some(Cow::Owned(joined))
	}

	pub(crate) fn unexpected(&self, expected: &str) -> ParseError {
		match self.peek() {
			Some(token) => ParseError::UnexpectedToken {
				expected: expected.to_string(),
				found: self.text(token.span).to_string(),
				line: token.span.line,
				column: token.span.column,
			},
			None => ParseError::UnexpectedEof {
				expected: expected.to_string(),
			},
		}
	}

	/// Names the unsupported statement by its first `words` tokens.
	pub(crate) fn unsupported(&self, words: usize) -> ParseError {
		let statement = self.tokens[self.position..]
			.iter()
			.take(words)
			.map(|t| self.text(t.span).to_ascii_uppercase())
			.collect::<Vec<_>>()
			.join(" ");
		ParseError::Unsupported {
			statement,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::token::tokenize;

	fn parser(sql: &str) -> Parser<'_> {
		Parser::new(sql, tokenize(sql).unwrap())
	}

	#[test]
	fn test_parse_name_accepts_fallback_keywords() {
		let mut p = parser("key");
		assert_eq!(p.parse_name("name").unwrap(), "key");
	}

	#[test]
	fn test_parse_name_rejects_reserved_keywords() {
		let mut p = parser("table");
		assert!(matches!(p.parse_name("name"), Err(ParseError::UnexpectedToken { .. })));
	}

	#[test]
	fn test_parse_parenthesized_keeps_inner_text() {
		let mut p = parser("( a > (b + 1) )");
		assert_eq!(p.parse_parenthesized("expression").unwrap(), "a > (b + 1)");
		assert!(p.is_eof());
	}

	#[test]
	fn test_parse_parenthesized_unbalanced() {
		let mut p = parser("(a > (b + 1)");
		assert!(matches!(p.parse_parenthesized("expression"), Err(ParseError::UnexpectedEof { .. })));
	}

	#[test]
	fn test_parse_parenthesized_empty() {
		let mut p = parser("()");
		assert!(matches!(p.parse_parenthesized("expression"), Err(ParseError::UnexpectedToken { .. })));
	}

	#[test]
	fn test_consume_keyword_reports_spelling() {
		let mut p = parser("x");
		match p.consume_keyword(Keyword::CurrentTimestamp) {
			Err(ParseError::UnexpectedToken {
				expected,
				..
			}) => assert_eq!(expected, "CURRENT_TIMESTAMP"),
			other => panic!("unexpected {other:?}"),
		}
	}

	#[test]
	fn test_comments_between_joins() {
		let p = parser("a -- one\n-- two\nb");
		assert_eq!(p.comments_between(0, 20).as_deref(), Some("one\ntwo"));
		assert_eq!(p.comments_between(0, 1), None);
	}
}
