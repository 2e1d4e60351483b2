// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::Serialize;

use crate::catalog::{ConflictPolicy, ConstraintKind, DeferrableMode, FkAction, GeneratedStorage, Order, StatementKind};

/// Owned description of one DDL statement.
///
/// `current_name` and `new_name` depend on `statement_kind`:
///
/// | kind          | current_name      | new_name          |
/// |---------------|-------------------|-------------------|
/// | table         | absent            | absent            |
/// | rename table  | old table name    | new table name    |
/// | rename column | old column name   | new column name   |
/// | add column    | added column      | absent            |
/// | drop column   | dropped column    | absent            |
///
/// `columns` and `constraints` are empty, never absent, when the statement
/// declares none or has no such concept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatementInfo {
	pub name: Option<String>,
	pub schema: Option<String>,
	pub comment: Option<String>,
	pub is_temporary: bool,
	pub if_not_exists: bool,
	pub without_rowid: bool,
	pub is_strict: bool,
	pub columns: Vec<ColumnInfo>,
	pub constraints: Vec<ConstraintInfo>,
	pub statement_kind: StatementKind,
	pub current_name: Option<String>,
	pub new_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ColumnInfo {
	pub name: Option<String>,
	pub declared_type: Option<String>,
	/// Raw length or precision, e.g. `10,2`.
	pub length_spec: Option<String>,
	pub constraint_name: Option<String>,
	pub comment: Option<String>,
	pub is_primary_key: bool,
	pub is_autoincrement: bool,
	pub is_not_null: bool,
	pub is_unique: bool,
	pub pk_order: Order,
	pub pk_conflict_clause: ConflictPolicy,
	pub not_null_conflict_clause: ConflictPolicy,
	pub unique_conflict_clause: ConflictPolicy,
	pub check_expr: Option<String>,
	pub default_expr: Option<String>,
	pub collate_name: Option<String>,
	/// Column-level `REFERENCES` clause.
	pub foreign_key: Option<ForeignKeyClause>,
	pub generated: Option<GeneratedColumn>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedColumn {
	pub expr: String,
	pub storage: GeneratedStorage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConstraintInfo {
	pub name: Option<String>,
	pub kind: ConstraintKind,
	pub indexed_columns: Vec<IndexedColumnInfo>,
	pub conflict_clause: ConflictPolicy,
	pub check_expr: Option<String>,
	/// Local columns of a foreign key.
	pub foreign_key_column_names: Vec<String>,
	/// `None` when the constraint is not a foreign key.
	pub foreign_key: Option<ForeignKeyClause>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IndexedColumnInfo {
	pub name: Option<String>,
	pub collate: Option<String>,
	pub order: Order,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ForeignKeyClause {
	pub referenced_table: Option<String>,
	pub referenced_columns: Vec<String>,
	pub on_delete: FkAction,
	pub on_update: FkAction,
	pub match_clause: Option<String>,
	pub deferrable: DeferrableMode,
}
