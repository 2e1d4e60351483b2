// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Read-only access to a parsed statement.
//!
//! The projectors in [`crate::project`] see a syntax tree only through these
//! traits. An `Option` return means the field is unset in the tree; the
//! projectors decide what unset maps to.

mod sql;

use crate::catalog::{ConflictPolicy, ConstraintKind, DeferrableMode, FkAction, GeneratedStorage, Order, StatementKind};

pub trait TableSource {
	type Column: ColumnSource;
	type Constraint: ConstraintSource;

	fn statement_kind(&self) -> StatementKind;

	fn name(&self) -> Option<&str>;

	fn schema(&self) -> Option<&str>;

	fn comment(&self) -> Option<&str>;

	fn is_temporary(&self) -> bool;

	fn is_if_not_exists(&self) -> bool;

	fn is_without_rowid(&self) -> bool;

	fn is_strict(&self) -> bool;

	/// Renamed table, renamed column, or the column being added or dropped.
	fn current_name(&self) -> Option<&str>;

	/// Target name of a rename.
	fn new_name(&self) -> Option<&str>;

	fn columns(&self) -> &[Self::Column];

	/// Table-level constraints in declaration order.
	fn constraints(&self) -> &[Self::Constraint];
}

pub trait ColumnSource {
	type ForeignKey: ForeignKeySource;

	fn name(&self) -> Option<&str>;

	fn declared_type(&self) -> Option<&str>;

	fn length(&self) -> Option<&str>;

	fn constraint_name(&self) -> Option<&str>;

	fn comment(&self) -> Option<&str>;

	fn is_primary_key(&self) -> bool;

	fn is_autoincrement(&self) -> bool;

	fn is_not_null(&self) -> bool;

	fn is_unique(&self) -> bool;

	fn pk_order(&self) -> Option<Order>;

	fn pk_conflict(&self) -> Option<ConflictPolicy>;

	fn not_null_conflict(&self) -> Option<ConflictPolicy>;

	fn unique_conflict(&self) -> Option<ConflictPolicy>;

	fn check_expr(&self) -> Option<&str>;

	fn default_expr(&self) -> Option<&str>;

	fn collate_name(&self) -> Option<&str>;

	fn foreign_key(&self) -> Option<&Self::ForeignKey>;

	fn generated(&self) -> Option<(&str, GeneratedStorage)>;
}

pub trait ConstraintSource {
	type IndexedColumn: IndexedColumnSource;
	type ForeignKey: ForeignKeySource;

	fn name(&self) -> Option<&str>;

	fn kind(&self) -> ConstraintKind;

	/// Empty for constraints without a column list.
	fn indexed_columns(&self) -> &[Self::IndexedColumn];

	fn conflict_clause(&self) -> Option<ConflictPolicy>;

	fn check_expr(&self) -> Option<&str>;

	/// Local columns of a foreign key, empty otherwise.
	fn foreign_key_columns(&self) -> impl Iterator<Item = &str>;

	fn foreign_key(&self) -> Option<&Self::ForeignKey>;
}

pub trait IndexedColumnSource {
	fn name(&self) -> Option<&str>;

	fn collate(&self) -> Option<&str>;

	fn order(&self) -> Option<Order>;
}

pub trait ForeignKeySource {
	fn table(&self) -> Option<&str>;

	fn columns(&self) -> impl Iterator<Item = &str>;

	fn on_delete(&self) -> Option<FkAction>;

	fn on_update(&self) -> Option<FkAction>;

	fn match_name(&self) -> Option<&str>;

	fn deferrable(&self) -> Option<DeferrableMode>;
}
