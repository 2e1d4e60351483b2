// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{borrow::Cow, collections::HashMap, sync::LazyLock};

use thiserror::Error;

/// Lexer error types.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexError {
	#[error("unexpected character '{ch}' at line {line}, column {column}")]
	UnexpectedChar {
		ch: char,
		line: u32,
		column: u32,
	},

	#[error("unterminated string at line {line}, column {column}")]
	UnterminatedString {
		line: u32,
		column: u32,
	},

	#[error("unterminated quoted identifier at line {line}, column {column}")]
	UnterminatedIdentifier {
		line: u32,
		column: u32,
	},

	#[error("unterminated comment at line {line}, column {column}")]
	UnterminatedComment {
		line: u32,
		column: u32,
	},

	#[error("malformed number '{text}' at line {line}, column {column}")]
	InvalidNumber {
		text: String,
		line: u32,
		column: u32,
	},
}

/// Byte range of a token in the source plus its 1-based line and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
	pub start: usize,
	pub end: usize,
	pub line: u32,
	pub column: u32,
}

impl Span {
	pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
		Self {
			start,
			end,
			line,
			column,
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
	pub kind: TokenKind<'a>,
	pub span: Span,
}

impl<'a> Token<'a> {
	pub fn new(kind: TokenKind<'a>, span: Span) -> Self {
		Self {
			kind,
			span,
		}
	}

	pub fn is_keyword(&self, keyword: Keyword) -> bool {
		self.kind == TokenKind::Keyword(keyword)
	}
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind<'a> {
	Keyword(Keyword),
	// bare identifier
	Ident(&'a str),
	// "ident", `ident` or [ident], quotes removed
	QuotedIdent(Cow<'a, str>),
	// 'text', quotes removed
	String(Cow<'a, str>),
	// X'..', hex digits only
	Blob(&'a str),
	Number(&'a str),
	Comma,
	Dot,
	Semicolon,
	OpenParen,
	CloseParen,
	Plus,
	Minus,
	// any other operator, kept verbatim
	Operator(&'a str),
}

/// A `--` or `/* */` comment, text trimmed and without delimiters.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment<'a> {
	pub text: &'a str,
	pub span: Span,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tokens<'a> {
	pub tokens: Vec<Token<'a>>,
	pub comments: Vec<Comment<'a>>,
}

macro_rules! keyword {
	( $( $variant:ident => $string:literal ),* $(,)? ) => {
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
		pub enum Keyword {
			$( $variant ),*
		}

		impl Keyword {
			/// Canonical uppercase spelling.
			pub const fn as_str(&self) -> &'static str {
				match self {
					$( Keyword::$variant => $string ),*
				}
			}
		}

		/// Uppercase keyword spellings.
		pub static KEYWORD_MAP: LazyLock<HashMap<&'static str, Keyword>> = LazyLock::new(|| {
			let mut map = HashMap::new();
			$( map.insert($string, Keyword::$variant); )*
			map
		});
	};
}

keyword! {
	Abort            => "ABORT",
	Action           => "ACTION",
	Add              => "ADD",
	Alter            => "ALTER",
	Always           => "ALWAYS",
	As               => "AS",
	Asc              => "ASC",
	Autoincrement    => "AUTOINCREMENT",
	Cascade          => "CASCADE",
	Check            => "CHECK",
	Collate          => "COLLATE",
	Column           => "COLUMN",
	Conflict         => "CONFLICT",
	Constraint       => "CONSTRAINT",
	Create           => "CREATE",
	CurrentDate      => "CURRENT_DATE",
	CurrentTime      => "CURRENT_TIME",
	CurrentTimestamp => "CURRENT_TIMESTAMP",
	Default          => "DEFAULT",
	Deferrable       => "DEFERRABLE",
	Deferred         => "DEFERRED",
	Delete           => "DELETE",
	Desc             => "DESC",
	Drop             => "DROP",
	Exists           => "EXISTS",
	Fail             => "FAIL",
	False            => "FALSE",
	Foreign          => "FOREIGN",
	Generated        => "GENERATED",
	If               => "IF",
	Ignore           => "IGNORE",
	Immediate        => "IMMEDIATE",
	Index            => "INDEX",
	Initially        => "INITIALLY",
	Insert           => "INSERT",
	Key              => "KEY",
	Match            => "MATCH",
	No               => "NO",
	Not              => "NOT",
	Null             => "NULL",
	On               => "ON",
	Primary          => "PRIMARY",
	References       => "REFERENCES",
	Rename           => "RENAME",
	Replace          => "REPLACE",
	Restrict         => "RESTRICT",
	Rollback         => "ROLLBACK",
	Select           => "SELECT",
	Set              => "SET",
	Stored           => "STORED",
	Strict           => "STRICT",
	Table            => "TABLE",
	Temp             => "TEMP",
	Temporary        => "TEMPORARY",
	To               => "TO",
	Trigger          => "TRIGGER",
	True             => "TRUE",
	Unique           => "UNIQUE",
	Update           => "UPDATE",
	View             => "VIEW",
	Virtual          => "VIRTUAL",
	With             => "WITH",
	Without          => "WITHOUT",
}

/// Longest keyword spelling, `CURRENT_TIMESTAMP`.
const MAX_KEYWORD_LEN: usize = 17;

impl Keyword {
	/// Case-insensitive lookup without allocating.
	pub fn lookup(word: &str) -> Option<Keyword> {
		if word.len() > MAX_KEYWORD_LEN || !word.is_ascii() {
			return None;
		}
		let mut buf = [0u8; MAX_KEYWORD_LEN];
		let upper = &mut buf[..word.len()];
		upper.copy_from_slice(word.as_bytes());
		upper.make_ascii_uppercase();
		let upper = std::str::from_utf8(upper).ok()?;
		KEYWORD_MAP.get(upper).copied()
	}

	/// Reserved keywords cannot be used as bare names. Everything else
	/// falls back to an identifier the way SQLite does.
	pub fn is_reserved(&self) -> bool {
		matches!(
			self,
			Keyword::Add
				| Keyword::Alter
				| Keyword::As
				| Keyword::Autoincrement
				| Keyword::Check
				| Keyword::Collate
				| Keyword::Constraint
				| Keyword::Create
				| Keyword::Default
				| Keyword::Deferrable
				| Keyword::Delete
				| Keyword::Drop
				| Keyword::Exists
				| Keyword::Foreign
				| Keyword::Index
				| Keyword::Insert
				| Keyword::Not
				| Keyword::Null
				| Keyword::On
				| Keyword::Primary
				| Keyword::References
				| Keyword::Select
				| Keyword::Set
				| Keyword::Table
				| Keyword::To
				| Keyword::Unique
				| Keyword::Update
		)
	}
}

pub fn tokenize(source: &str) -> Result<Tokens<'_>, LexError> {
	Lexer::new(source).tokenize()
}

/// Lexer for SQLite DDL.
pub struct Lexer<'a> {
	source: &'a str,
	position: usize,
	line: u32,
	column: u32,
}

impl<'a> Lexer<'a> {
	pub fn new(source: &'a str) -> Self {
		Self {
			source,
			position: 0,
			line: 1,
			column: 1,
		}
	}

	pub fn tokenize(mut self) -> Result<Tokens<'a>, LexError> {
		let mut result = Tokens::default();

		while let Some(c) = self.peek() {
			if c.is_whitespace() {
				self.advance();
				continue;
			}

			if c == '-' && self.peek_second() == Some('-') {
				result.comments.push(self.scan_line_comment());
				continue;
			}

			if c == '/' && self.peek_second() == Some('*') {
				result.comments.push(self.scan_block_comment()?);
				continue;
			}

			result.tokens.push(self.next_token(c)?);
		}

		Ok(result)
	}

	fn next_token(&mut self, c: char) -> Result<Token<'a>, LexError> {
		let start = self.position;
		let line = self.line;
		let column = self.column;

		match c {
			'(' => self.single(TokenKind::OpenParen),
			')' => self.single(TokenKind::CloseParen),
			',' => self.single(TokenKind::Comma),
			';' => self.single(TokenKind::Semicolon),
			'+' => self.single(TokenKind::Plus),
			'-' => self.single(TokenKind::Minus),
			'.' if !self.peek_second().is_some_and(|n| n.is_ascii_digit()) => self.single(TokenKind::Dot),
			'*' | '/' | '%' | '~' | '&' => {
				self.advance();
				Ok(self.operator(start, line, column))
			}
			'|' => {
				self.advance();
				self.match_char('|');
				Ok(self.operator(start, line, column))
			}
			'<' => {
				self.advance();
				if !self.match_char('=') && !self.match_char('>') {
					self.match_char('<');
				}
				Ok(self.operator(start, line, column))
			}
			'>' => {
				self.advance();
				if !self.match_char('=') {
					self.match_char('>');
				}
				Ok(self.operator(start, line, column))
			}
			'=' => {
				self.advance();
				self.match_char('=');
				Ok(self.operator(start, line, column))
			}
			'!' => {
				self.advance();
				if self.match_char('=') {
					Ok(self.operator(start, line, column))
				} else {
					Err(LexError::UnexpectedChar {
						ch: '!',
						line,
						column,
					})
				}
			}
			'\'' => {
				let value = self.scan_quoted('\'', '\'').ok_or(LexError::UnterminatedString {
					line,
					column,
				})?;
				Ok(self.token(TokenKind::String(value), start, line, column))
			}
			'"' | '`' => {
				let value = self.scan_quoted(c, c).ok_or(LexError::UnterminatedIdentifier {
					line,
					column,
				})?;
				Ok(self.token(TokenKind::QuotedIdent(value), start, line, column))
			}
			'[' => {
				self.advance();
				let inner_start = self.position;
				while let Some(ch) = self.peek() {
					if ch == ']' {
						break;
					}
					self.advance();
				}
				if self.peek().is_none() {
					return Err(LexError::UnterminatedIdentifier {
						line,
						column,
					});
				}
				let value = &self.source[inner_start..self.position];
				self.advance();
				Ok(self.token(TokenKind::QuotedIdent(Cow::Borrowed(value)), start, line, column))
			}
			'x' | 'X' if self.peek_second() == Some('\'') => self.scan_blob(),
			'0'..='9' | '.' => self.scan_number(),
			c if c.is_alphabetic() || c == '_' => Ok(self.scan_word()),
			ch => Err(LexError::UnexpectedChar {
				ch,
				line,
				column,
			}),
		}
	}

	fn scan_line_comment(&mut self) -> Comment<'a> {
		let start = self.position;
		let line = self.line;
		let column = self.column;
		self.advance();
		self.advance();
		let inner_start = self.position;
		while let Some(c) = self.peek() {
			if c == '\n' {
				break;
			}
			self.advance();
		}
		Comment {
			text: self.source[inner_start..self.position].trim(),
			span: Span::new(start, self.position, line, column),
		}
	}

	fn scan_block_comment(&mut self) -> Result<Comment<'a>, LexError> {
		let start = self.position;
		let line = self.line;
		let column = self.column;
		self.advance();
		self.advance();
		let inner_start = self.position;
		loop {
			match self.peek() {
				None => {
					return Err(LexError::UnterminatedComment {
						line,
						column,
					});
				}
				Some('*') if self.peek_second() == Some('/') => {
					let inner_end = self.position;
					self.advance();
					self.advance();
					return Ok(Comment {
						text: self.source[inner_start..inner_end].trim(),
						span: Span::new(start, self.position, line, column),
					});
				}
				Some(_) => {
					self.advance();
				}
			}
		}
	}

	/// Scans a quoted run where a doubled closing quote escapes itself.
	/// Returns `None` when the input ends before the closing quote.
	fn scan_quoted(&mut self, open: char, close: char) -> Option<Cow<'a, str>> {
		debug_assert_eq!(self.peek(), Some(open));
		self.advance();
		let inner_start = self.position;
		let mut escaped = false;
		loop {
			let c = self.peek()?;
			if c == close {
				if self.peek_second() == Some(close) {
					escaped = true;
					self.advance();
					self.advance();
					continue;
				}
				let inner = &self.source[inner_start..self.position];
				self.advance();
				let doubled = format!("{close}{close}");
				return Some(if escaped {
					Cow::Owned(inner.replace(&doubled, &close.to_string()))
				} else {
					Cow::Borrowed(inner)
				});
			}
			self.advance();
		}
	}

	fn scan_blob(&mut self) -> Result<Token<'a>, LexError> {
		let start = self.position;
		let line = self.line;
		let column = self.column;
		self.advance();
		self.advance();
		let inner_start = self.position;
		while let Some(c) = self.peek() {
			if c == '\'' {
				break;
			}
			self.advance();
		}
		if self.peek().is_none() {
			return Err(LexError::UnterminatedString {
				line,
				column,
			});
		}
		let hex = &self.source[inner_start..self.position];
		self.advance();
		if hex.len() % 2 != 0 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
			return Err(LexError::InvalidNumber {
				text: self.source[start..self.position].to_string(),
				line,
				column,
			});
		}
		Ok(self.token(TokenKind::Blob(hex), start, line, column))
	}

	fn scan_number(&mut self) -> Result<Token<'a>, LexError> {
		let start = self.position;
		let line = self.line;
		let column = self.column;

		if self.peek() == Some('0') && matches!(self.peek_second(), Some('x') | Some('X')) {
			self.advance();
			self.advance();
			let digits_start = self.position;
			while self.peek().is_some_and(|c| c.is_ascii_hexdigit()) {
				self.advance();
			}
			if self.position == digits_start {
				return Err(self.invalid_number(start, line, column));
			}
		} else {
			self.skip_digits();
			if self.peek() == Some('.') {
				self.advance();
				self.skip_digits();
			}
			if matches!(self.peek(), Some('e') | Some('E')) {
				self.advance();
				if matches!(self.peek(), Some('+') | Some('-')) {
					self.advance();
				}
				let exponent_start = self.position;
				self.skip_digits();
				if self.position == exponent_start {
					return Err(self.invalid_number(start, line, column));
				}
			}
		}

		// 12abc is not a number followed by a word
		if self.peek().is_some_and(|c| c.is_alphanumeric() || c == '_') {
			while self.peek().is_some_and(|c| c.is_alphanumeric() || c == '_') {
				self.advance();
			}
			return Err(self.invalid_number(start, line, column));
		}

		let text = &self.source[start..self.position];
		Ok(self.token(TokenKind::Number(text), start, line, column))
	}

	fn scan_word(&mut self) -> Token<'a> {
		let start = self.position;
		let line = self.line;
		let column = self.column;
		while self.peek().is_some_and(|c| c.is_alphanumeric() || c == '_' || c == '$') {
			self.advance();
		}
		let word = &self.source[start..self.position];
		let kind = match Keyword::lookup(word) {
			Some(keyword) => TokenKind::Keyword(keyword),
			None => TokenKind::Ident(word),
		};
		self.token(kind, start, line, column)
	}

	fn skip_digits(&mut self) {
		while self.peek().is_some_and(|c| c.is_ascii_digit()) {
			self.advance();
		}
	}

	fn invalid_number(&self, start: usize, line: u32, column: u32) -> LexError {
		LexError::InvalidNumber {
			text: self.source[start..self.position].to_string(),
			line,
			column,
		}
	}

	fn single(&mut self, kind: TokenKind<'a>) -> Result<Token<'a>, LexError> {
		let start = self.position;
		let line = self.line;
		let column = self.column;
		self.advance();
		Ok(self.token(kind, start, line, column))
	}

	fn operator(&self, start: usize, line: u32, column: u32) -> Token<'a> {
		self.token(TokenKind::Operator(&self.source[start..self.position]), start, line, column)
	}

	fn token(&self, kind: TokenKind<'a>, start: usize, line: u32, column: u32) -> Token<'a> {
		Token::new(kind, Span::new(start, self.position, line, column))
	}

	fn peek(&self) -> Option<char> {
		self.source[self.position..].chars().next()
	}

	fn peek_second(&self) -> Option<char> {
		let mut chars = self.source[self.position..].chars();
		chars.next();
		chars.next()
	}

	fn advance(&mut self) -> Option<char> {
		let c = self.peek()?;
		self.position += c.len_utf8();
		if c == '\n' {
			self.line += 1;
			self.column = 1;
		} else {
			self.column += 1;
		}
		Some(c)
	}

	fn match_char(&mut self, expected: char) -> bool {
		if self.peek() == Some(expected) {
			self.advance();
			return true;
		}
		false
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn kinds(sql: &str) -> Vec<TokenKind<'_>> {
		tokenize(sql).unwrap().tokens.into_iter().map(|t| t.kind).collect()
	}

	#[test]
	fn test_create_table() {
		assert_eq!(
			kinds("CREATE TABLE users (id integer)"),
			vec![
				TokenKind::Keyword(Keyword::Create),
				TokenKind::Keyword(Keyword::Table),
				TokenKind::Ident("users"),
				TokenKind::OpenParen,
				TokenKind::Ident("id"),
				TokenKind::Ident("integer"),
				TokenKind::CloseParen,
			]
		);
	}

	#[test]
	fn test_keywords_are_case_insensitive() {
		assert_eq!(
			kinds("primary Key autoINCREMENT"),
			vec![
				TokenKind::Keyword(Keyword::Primary),
				TokenKind::Keyword(Keyword::Key),
				TokenKind::Keyword(Keyword::Autoincrement),
			]
		);
	}

	#[test]
	fn test_keyword_lookup() {
		assert_eq!(Keyword::lookup("current_Timestamp"), Some(Keyword::CurrentTimestamp));
		assert_eq!(Keyword::CurrentTimestamp.as_str(), "CURRENT_TIMESTAMP");
		assert_eq!(Keyword::lookup("current_timestamps"), None);
		assert_eq!(Keyword::lookup("名前"), None);
		assert_eq!(Keyword::lookup(""), None);
		for (spelling, keyword) in KEYWORD_MAP.iter() {
			assert_eq!(keyword.as_str(), *spelling);
			assert!(spelling.len() <= MAX_KEYWORD_LEN);
		}
	}

	#[test]
	fn test_quoted_identifiers() {
		assert_eq!(
			kinds(r#""first name" `last` [middle name] "say ""hi""""#),
			vec![
				TokenKind::QuotedIdent(Cow::Borrowed("first name")),
				TokenKind::QuotedIdent(Cow::Borrowed("last")),
				TokenKind::QuotedIdent(Cow::Borrowed("middle name")),
				TokenKind::QuotedIdent(Cow::Owned(r#"say "hi""#.to_string())),
			]
		);
	}

	#[test]
	fn test_string_literal() {
		assert_eq!(kinds("'it''s'"), vec![TokenKind::String(Cow::Owned("it's".to_string()))]);
		assert_eq!(kinds("''"), vec![TokenKind::String(Cow::Borrowed(""))]);
	}

	#[test]
	fn test_numbers() {
		assert_eq!(
			kinds("42 3.14 .5 1e10 2.5E-3 0x1F"),
			vec![
				TokenKind::Number("42"),
				TokenKind::Number("3.14"),
				TokenKind::Number(".5"),
				TokenKind::Number("1e10"),
				TokenKind::Number("2.5E-3"),
				TokenKind::Number("0x1F"),
			]
		);
	}

	#[test]
	fn test_blob() {
		assert_eq!(kinds("x'0aFF'"), vec![TokenKind::Blob("0aFF")]);
		assert!(matches!(tokenize("x'abc'"), Err(LexError::InvalidNumber { .. })));
	}

	#[test]
	fn test_operators() {
		assert_eq!(
			kinds("a >= 1 || b <> 2"),
			vec![
				TokenKind::Ident("a"),
				TokenKind::Operator(">="),
				TokenKind::Number("1"),
				TokenKind::Operator("||"),
				TokenKind::Ident("b"),
				TokenKind::Operator("<>"),
				TokenKind::Number("2"),
			]
		);
	}

	#[test]
	fn test_comments_are_collected() {
		let result = tokenize("a -- first\n/* second */ b").unwrap();
		assert_eq!(result.tokens.len(), 2);
		let texts: Vec<&str> = result.comments.iter().map(|c| c.text).collect();
		assert_eq!(texts, vec!["first", "second"]);
		assert_eq!(result.comments[1].span.line, 2);
	}

	#[test]
	fn test_span_tracks_lines() {
		let result = tokenize("CREATE\n  TABLE").unwrap();
		assert_eq!(result.tokens[1].span, Span::new(9, 14, 2, 3));
	}

	#[test]
	fn test_error_unterminated_string() {
		assert!(matches!(
			tokenize("'open"),
			Err(LexError::UnterminatedString {
				line: 1,
				column: 1
			})
		));
	}

	#[test]
	fn test_error_unterminated_comment() {
		assert!(matches!(tokenize("a /* open"), Err(LexError::UnterminatedComment { .. })));
	}

	#[test]
	fn test_error_unexpected_char() {
		assert!(matches!(
			tokenize("a ? b"),
			Err(LexError::UnexpectedChar {
				ch: '?',
				..
			})
		));
	}
}
