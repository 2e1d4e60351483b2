// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{borrow::Cow, slice};

use reifydb_sql::ast::{
	self, AlterAction, ColumnConstraintKind, ColumnDef, ConflictAction, Deferrable, ForeignKeyAction,
	IndexedColumn, Initially, SortOrder, Statement, TableConstraint, TableConstraintKind,
};

use crate::{
	catalog::{ConflictPolicy, ConstraintKind, DeferrableMode, FkAction, GeneratedStorage, Order, StatementKind},
	source::{ColumnSource, ConstraintSource, ForeignKeySource, IndexedColumnSource, TableSource},
};

impl From<SortOrder> for Order {
	fn from(order: SortOrder) -> Self {
		match order {
			SortOrder::Asc => Order::Ascending,
			SortOrder::Desc => Order::Descending,
		}
	}
}

impl From<ConflictAction> for ConflictPolicy {
	fn from(action: ConflictAction) -> Self {
		match action {
			ConflictAction::Rollback => ConflictPolicy::Rollback,
			ConflictAction::Abort => ConflictPolicy::Abort,
			ConflictAction::Fail => ConflictPolicy::Fail,
			ConflictAction::Ignore => ConflictPolicy::Ignore,
			ConflictAction::Replace => ConflictPolicy::Replace,
		}
	}
}

impl From<ForeignKeyAction> for FkAction {
	fn from(action: ForeignKeyAction) -> Self {
		match action {
			ForeignKeyAction::SetNull => FkAction::SetNull,
			ForeignKeyAction::SetDefault => FkAction::SetDefault,
			ForeignKeyAction::Cascade => FkAction::Cascade,
			ForeignKeyAction::Restrict => FkAction::Restrict,
			ForeignKeyAction::NoAction => FkAction::NoAction,
		}
	}
}

impl From<Deferrable> for DeferrableMode {
	fn from(deferrable: Deferrable) -> Self {
		match (deferrable.not, deferrable.initially) {
			(false, None) => DeferrableMode::Deferrable,
			(false, Some(Initially::Deferred)) => DeferrableMode::DeferrableInitiallyDeferred,
			(false, Some(Initially::Immediate)) => DeferrableMode::DeferrableInitiallyImmediate,
			(true, None) => DeferrableMode::NotDeferrable,
			(true, Some(Initially::Deferred)) => DeferrableMode::NotDeferrableInitiallyDeferred,
			(true, Some(Initially::Immediate)) => DeferrableMode::NotDeferrableInitiallyImmediate,
		}
	}
}

impl From<ast::GeneratedStorage> for GeneratedStorage {
	fn from(storage: ast::GeneratedStorage) -> Self {
		match storage {
			ast::GeneratedStorage::Virtual => GeneratedStorage::Virtual,
			ast::GeneratedStorage::Stored => GeneratedStorage::Stored,
		}
	}
}

impl<'a> TableSource for Statement<'a> {
	type Column = ColumnDef<'a>;
	type Constraint = TableConstraint<'a>;

	fn statement_kind(&self) -> StatementKind {
		match self {
			Statement::CreateTable(_) => StatementKind::Table,
			Statement::AlterTable(alter) => match alter.action {
				AlterAction::RenameTable {
					..
				} => StatementKind::RenameTable,
				AlterAction::RenameColumn {
					..
				} => StatementKind::RenameColumn,
				AlterAction::AddColumn(_) => StatementKind::AddColumn,
				AlterAction::DropColumn(_) => StatementKind::DropColumn,
			},
		}
	}

	fn name(&self) -> Option<&str> {
		match self {
			Statement::CreateTable(create) => Some(&create.name.name),
			Statement::AlterTable(alter) => Some(&alter.table.name),
		}
	}

	fn schema(&self) -> Option<&str> {
		match self {
			Statement::CreateTable(create) => create.name.schema.as_deref(),
			Statement::AlterTable(alter) => alter.table.schema.as_deref(),
		}
	}

	fn comment(&self) -> Option<&str> {
		match self {
			Statement::CreateTable(create) => create.comment.as_deref(),
			Statement::AlterTable(_) => None,
		}
	}

	fn is_temporary(&self) -> bool {
		matches!(self, Statement::CreateTable(create) if create.temporary)
	}

	fn is_if_not_exists(&self) -> bool {
		matches!(self, Statement::CreateTable(create) if create.if_not_exists)
	}

	fn is_without_rowid(&self) -> bool {
		matches!(self, Statement::CreateTable(create) if create.without_rowid)
	}

	fn is_strict(&self) -> bool {
		matches!(self, Statement::CreateTable(create) if create.strict)
	}

	fn current_name(&self) -> Option<&str> {
		let Statement::AlterTable(alter) = self else {
			return None;
		};
		let name = match &alter.action {
			AlterAction::RenameTable {
				..
			} => &alter.table.name,
			AlterAction::RenameColumn {
				from,
				..
			} => from,
			AlterAction::AddColumn(column) => &column.name,
			AlterAction::DropColumn(name) => name,
		};
		Some(name.as_ref())
	}

	fn new_name(&self) -> Option<&str> {
		let Statement::AlterTable(alter) = self else {
			return None;
		};
		match &alter.action {
			AlterAction::RenameTable {
				to,
			}
			| AlterAction::RenameColumn {
				to,
				..
			} => Some(to.as_ref()),
			AlterAction::AddColumn(_) | AlterAction::DropColumn(_) => None,
		}
	}

	fn columns(&self) -> &[ColumnDef<'a>] {
		match self {
			Statement::CreateTable(create) => &create.columns,
			Statement::AlterTable(alter) => match &alter.action {
				AlterAction::AddColumn(column) => slice::from_ref(column),
				_ => &[],
			},
		}
	}

	fn constraints(&self) -> &[TableConstraint<'a>] {
		match self {
			Statement::CreateTable(create) => &create.constraints,
			Statement::AlterTable(_) => &[],
		}
	}
}

/// First constraint on the column for which `f` yields a value.
fn first<'s, 'a: 's, T>(
	column: &'s ColumnDef<'a>,
	f: impl Fn(&'s ColumnConstraintKind<'a>) -> Option<T>,
) -> Option<T> {
	column.constraints.iter().find_map(|constraint| f(&constraint.kind))
}

impl<'a> ColumnSource for ColumnDef<'a> {
	type ForeignKey = ast::ForeignKeyClause<'a>;

	fn name(&self) -> Option<&str> {
		Some(&self.name)
	}

	fn declared_type(&self) -> Option<&str> {
		self.type_name.as_ref().map(|t| t.name.as_ref())
	}

	fn length(&self) -> Option<&str> {
		self.type_name.as_ref().and_then(|t| t.length.as_deref())
	}

	fn constraint_name(&self) -> Option<&str> {
		self.constraints.iter().find_map(|c| c.name.as_deref())
	}

	fn comment(&self) -> Option<&str> {
		self.comment.as_deref()
	}

	fn is_primary_key(&self) -> bool {
		self.constraints.iter().any(|c| matches!(c.kind, ColumnConstraintKind::PrimaryKey { .. }))
	}

	fn is_autoincrement(&self) -> bool {
		first(self, |kind| match kind {
			ColumnConstraintKind::PrimaryKey {
				autoincrement,
				..
			} => Some(*autoincrement),
			_ => None,
		})
		.unwrap_or(false)
	}

	fn is_not_null(&self) -> bool {
		self.constraints.iter().any(|c| matches!(c.kind, ColumnConstraintKind::NotNull { .. }))
	}

	fn is_unique(&self) -> bool {
		self.constraints.iter().any(|c| matches!(c.kind, ColumnConstraintKind::Unique { .. }))
	}

	fn pk_order(&self) -> Option<Order> {
		first(self, |kind| match kind {
			ColumnConstraintKind::PrimaryKey {
				order,
				..
			} => Some(*order),
			_ => None,
		})
		.flatten()
		.map(Order::from)
	}

	fn pk_conflict(&self) -> Option<ConflictPolicy> {
		first(self, |kind| match kind {
			ColumnConstraintKind::PrimaryKey {
				conflict,
				..
			} => Some(*conflict),
			_ => None,
		})
		.flatten()
		.map(ConflictPolicy::from)
	}

	fn not_null_conflict(&self) -> Option<ConflictPolicy> {
		first(self, |kind| match kind {
			ColumnConstraintKind::NotNull {
				conflict,
			} => Some(*conflict),
			_ => None,
		})
		.flatten()
		.map(ConflictPolicy::from)
	}

	fn unique_conflict(&self) -> Option<ConflictPolicy> {
		first(self, |kind| match kind {
			ColumnConstraintKind::Unique {
				conflict,
			} => Some(*conflict),
			_ => None,
		})
		.flatten()
		.map(ConflictPolicy::from)
	}

	fn check_expr(&self) -> Option<&str> {
		first(self, |kind| match kind {
			ColumnConstraintKind::Check(expr) => Some(*expr),
			_ => None,
		})
	}

	fn default_expr(&self) -> Option<&str> {
		first(self, |kind| match kind {
			ColumnConstraintKind::Default(expr) => Some(*expr),
			_ => None,
		})
	}

	fn collate_name(&self) -> Option<&str> {
		first(self, |kind| match kind {
			ColumnConstraintKind::Collate(name) => Some(name.as_ref()),
			_ => None,
		})
	}

	fn foreign_key(&self) -> Option<&ast::ForeignKeyClause<'a>> {
		first(self, |kind| match kind {
			ColumnConstraintKind::References(clause) => Some(clause),
			_ => None,
		})
	}

	fn generated(&self) -> Option<(&str, GeneratedStorage)> {
		first(self, |kind| match kind {
			ColumnConstraintKind::Generated {
				expr,
				storage,
			} => Some((*expr, storage.map(GeneratedStorage::from).unwrap_or_default())),
			_ => None,
		})
	}
}

impl<'a> ConstraintSource for TableConstraint<'a> {
	type IndexedColumn = IndexedColumn<'a>;
	type ForeignKey = ast::ForeignKeyClause<'a>;

	fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	fn kind(&self) -> ConstraintKind {
		match self.kind {
			TableConstraintKind::PrimaryKey {
				..
			} => ConstraintKind::PrimaryKey,
			TableConstraintKind::Unique {
				..
			} => ConstraintKind::Unique,
			TableConstraintKind::Check {
				..
			} => ConstraintKind::Check,
			TableConstraintKind::ForeignKey {
				..
			} => ConstraintKind::ForeignKey,
		}
	}

	fn indexed_columns(&self) -> &[IndexedColumn<'a>] {
		match &self.kind {
			TableConstraintKind::PrimaryKey {
				columns,
				..
			}
			| TableConstraintKind::Unique {
				columns,
				..
			} => columns,
			TableConstraintKind::Check {
				..
			}
			| TableConstraintKind::ForeignKey {
				..
			} => &[],
		}
	}

	fn conflict_clause(&self) -> Option<ConflictPolicy> {
		match &self.kind {
			TableConstraintKind::PrimaryKey {
				conflict,
				..
			}
			| TableConstraintKind::Unique {
				conflict,
				..
			}
			| TableConstraintKind::Check {
				conflict,
				..
			} => conflict.map(ConflictPolicy::from),
			TableConstraintKind::ForeignKey {
				..
			} => None,
		}
	}

	fn check_expr(&self) -> Option<&str> {
		match &self.kind {
			TableConstraintKind::Check {
				expr,
				..
			} => Some(expr),
			_ => None,
		}
	}

	fn foreign_key_columns(&self) -> impl Iterator<Item = &str> {
		let columns: &[Cow<'a, str>] = match &self.kind {
			TableConstraintKind::ForeignKey {
				columns,
				..
			} => columns,
			_ => &[],
		};
		columns.iter().map(|c| c.as_ref())
	}

	fn foreign_key(&self) -> Option<&ast::ForeignKeyClause<'a>> {
		match &self.kind {
			TableConstraintKind::ForeignKey {
				clause,
				..
			} => Some(clause),
			_ => None,
		}
	}
}

impl IndexedColumnSource for IndexedColumn<'_> {
	fn name(&self) -> Option<&str> {
		Some(&self.name)
	}

	fn collate(&self) -> Option<&str> {
		self.collate.as_deref()
	}

	fn order(&self) -> Option<Order> {
		self.order.map(Order::from)
	}
}

impl ForeignKeySource for ast::ForeignKeyClause<'_> {
	fn table(&self) -> Option<&str> {
		Some(&self.table)
	}

	fn columns(&self) -> impl Iterator<Item = &str> {
		self.columns.iter().map(|c| c.as_ref())
	}

	fn on_delete(&self) -> Option<FkAction> {
		self.on_delete.map(FkAction::from)
	}

	fn on_update(&self) -> Option<FkAction> {
		self.on_update.map(FkAction::from)
	}

	fn match_name(&self) -> Option<&str> {
		self.match_name.as_deref()
	}

	fn deferrable(&self) -> Option<DeferrableMode> {
		self.deferrable.map(DeferrableMode::from)
	}
}

#[cfg(test)]
mod tests {
	use reifydb_sql::parse;

	use crate::{
		catalog::{ConflictPolicy, ConstraintKind, DeferrableMode, GeneratedStorage, Order, StatementKind},
		source::{ColumnSource, ConstraintSource, ForeignKeySource, TableSource},
	};

	#[test]
	fn test_alter_names() {
		let statement = parse("ALTER TABLE s.t RENAME COLUMN a TO b").unwrap();
		assert_eq!(statement.statement_kind(), StatementKind::RenameColumn);
		assert_eq!(statement.name(), Some("t"));
		assert_eq!(statement.schema(), Some("s"));
		assert_eq!(statement.current_name(), Some("a"));
		assert_eq!(statement.new_name(), Some("b"));
		assert!(statement.columns().is_empty());
	}

	#[test]
	fn test_add_column_exposes_one_column() {
		let statement = parse("ALTER TABLE t ADD COLUMN c INT").unwrap();
		assert_eq!(statement.current_name(), Some("c"));
		assert_eq!(statement.new_name(), None);
		assert_eq!(statement.columns().len(), 1);
		assert!(statement.constraints().is_empty());
	}

	#[test]
	fn test_first_clause_wins() {
		let statement =
			parse("CREATE TABLE t (a INT CONSTRAINT x CHECK (a > 0) CONSTRAINT y CHECK (a < 9) DEFAULT 1 DEFAULT 2)")
				.unwrap();
		let column = &statement.columns()[0];
		assert_eq!(column.constraint_name(), Some("x"));
		assert_eq!(column.check_expr(), Some("a > 0"));
		assert_eq!(column.default_expr(), Some("1"));
	}

	#[test]
	fn test_unset_column_fields() {
		let statement = parse("CREATE TABLE t (a)").unwrap();
		let column = &statement.columns()[0];
		assert_eq!(column.declared_type(), None);
		assert_eq!(column.pk_order(), None);
		assert_eq!(column.pk_conflict(), None);
		assert!(column.foreign_key().is_none());
		assert!(column.generated().is_none());
		assert!(!column.is_primary_key());
	}

	#[test]
	fn test_column_clauses() {
		let statement = parse(
			"CREATE TABLE t (a INTEGER PRIMARY KEY ASC ON CONFLICT FAIL UNIQUE ON CONFLICT IGNORE, \
			 b AS (a * 2))",
		)
		.unwrap();
		let a = &statement.columns()[0];
		assert_eq!(a.pk_order(), Some(Order::Ascending));
		assert_eq!(a.pk_conflict(), Some(ConflictPolicy::Fail));
		assert_eq!(a.unique_conflict(), Some(ConflictPolicy::Ignore));
		assert_eq!(a.not_null_conflict(), None);
		let b = &statement.columns()[1];
		assert_eq!(b.generated(), Some(("a * 2", GeneratedStorage::Virtual)));
	}

	#[test]
	fn test_constraint_accessors() {
		let statement = parse(
			"CREATE TABLE t (a, b, CHECK (a <> b) ON CONFLICT ROLLBACK, \
			 FOREIGN KEY (a, b) REFERENCES p (x, y) DEFERRABLE INITIALLY DEFERRED)",
		)
		.unwrap();
		let check = &statement.constraints()[0];
		assert_eq!(check.kind(), ConstraintKind::Check);
		assert_eq!(check.check_expr(), Some("a <> b"));
		assert_eq!(check.conflict_clause(), Some(ConflictPolicy::Rollback));
		assert!(check.indexed_columns().is_empty());
		assert_eq!(check.foreign_key_columns().count(), 0);

		let fk = &statement.constraints()[1];
		assert_eq!(fk.kind(), ConstraintKind::ForeignKey);
		assert_eq!(fk.foreign_key_columns().collect::<Vec<_>>(), vec!["a", "b"]);
		let clause = fk.foreign_key().unwrap();
		assert_eq!(clause.table(), Some("p"));
		assert_eq!(clause.columns().collect::<Vec<_>>(), vec!["x", "y"]);
		assert_eq!(clause.deferrable(), Some(DeferrableMode::DeferrableInitiallyDeferred));
		assert_eq!(clause.on_delete(), None);
	}
}
