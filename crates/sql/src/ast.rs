// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Syntax tree for the supported SQLite DDL statements.
//!
//! Names borrow from the parsed text wherever no unescaping was needed.
//! Expressions (`CHECK`, `DEFAULT`, generated columns) are not parsed into
//! trees; they are kept as the exact source slice.

use std::borrow::Cow;

#[derive(Debug, Clone, PartialEq)]
pub enum Statement<'a> {
	CreateTable(CreateTable<'a>),
	AlterTable(AlterTable<'a>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct QualifiedName<'a> {
	pub schema: Option<Cow<'a, str>>,
	pub name: Cow<'a, str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateTable<'a> {
	pub name: QualifiedName<'a>,
	pub temporary: bool,
	pub if_not_exists: bool,
	pub without_rowid: bool,
	pub strict: bool,
	pub comment: Option<Cow<'a, str>>,
	pub columns: Vec<ColumnDef<'a>>,
	pub constraints: Vec<TableConstraint<'a>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlterTable<'a> {
	pub table: QualifiedName<'a>,
	pub action: AlterAction<'a>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AlterAction<'a> {
	RenameTable {
		to: Cow<'a, str>,
	},
	RenameColumn {
		from: Cow<'a, str>,
		to: Cow<'a, str>,
	},
	AddColumn(ColumnDef<'a>),
	DropColumn(Cow<'a, str>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef<'a> {
	pub name: Cow<'a, str>,
	pub type_name: Option<TypeName<'a>>,
	pub constraints: Vec<ColumnConstraint<'a>>,
	pub comment: Option<Cow<'a, str>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeName<'a> {
	/// Type words joined by a single space, e.g. `UNSIGNED BIG INT`.
	pub name: Cow<'a, str>,
	/// Size arguments without whitespace, e.g. `10,2`.
	pub length: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnConstraint<'a> {
	pub name: Option<Cow<'a, str>>,
	pub kind: ColumnConstraintKind<'a>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ColumnConstraintKind<'a> {
	PrimaryKey {
		order: Option<SortOrder>,
		conflict: Option<ConflictAction>,
		autoincrement: bool,
	},
	NotNull {
		conflict: Option<ConflictAction>,
	},
	Null {
		conflict: Option<ConflictAction>,
	},
	Unique {
		conflict: Option<ConflictAction>,
	},
	Check(&'a str),
	Default(&'a str),
	Collate(Cow<'a, str>),
	References(ForeignKeyClause<'a>),
	Generated {
		expr: &'a str,
		storage: Option<GeneratedStorage>,
	},
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableConstraint<'a> {
	pub name: Option<Cow<'a, str>>,
	pub kind: TableConstraintKind<'a>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableConstraintKind<'a> {
	PrimaryKey {
		columns: Vec<IndexedColumn<'a>>,
		conflict: Option<ConflictAction>,
	},
	Unique {
		columns: Vec<IndexedColumn<'a>>,
		conflict: Option<ConflictAction>,
	},
	Check {
		expr: &'a str,
		conflict: Option<ConflictAction>,
	},
	ForeignKey {
		columns: Vec<Cow<'a, str>>,
		clause: ForeignKeyClause<'a>,
	},
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndexedColumn<'a> {
	pub name: Cow<'a, str>,
	pub collate: Option<Cow<'a, str>>,
	pub order: Option<SortOrder>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForeignKeyClause<'a> {
	pub table: Cow<'a, str>,
	pub columns: Vec<Cow<'a, str>>,
	pub on_delete: Option<ForeignKeyAction>,
	pub on_update: Option<ForeignKeyAction>,
	pub match_name: Option<Cow<'a, str>>,
	pub deferrable: Option<Deferrable>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
	Asc,
	Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictAction {
	Rollback,
	Abort,
	Fail,
	Ignore,
	Replace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForeignKeyAction {
	SetNull,
	SetDefault,
	Cascade,
	Restrict,
	NoAction,
}

/// `[NOT] DEFERRABLE [INITIALLY DEFERRED | INITIALLY IMMEDIATE]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deferrable {
	pub not: bool,
	pub initially: Option<Initially>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Initially {
	Deferred,
	Immediate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratedStorage {
	Virtual,
	Stored,
}
