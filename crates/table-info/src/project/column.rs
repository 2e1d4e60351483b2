// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::{
	model::{ColumnInfo, GeneratedColumn},
	project::project_foreign_key_clause,
	source::{ColumnSource, TableSource},
};

/// Columns in declaration order. Unset text stays `None`, unset flags are
/// `false` and unset enumerations take their `None` variant.
pub fn project_columns<T: TableSource>(table: &T) -> Vec<ColumnInfo> {
	table.columns().iter().map(project_column).collect()
}

fn project_column<C: ColumnSource>(column: &C) -> ColumnInfo {
	ColumnInfo {
		name: column.name().map(str::to_string),
		declared_type: column.declared_type().map(str::to_string),
		length_spec: column.length().map(str::to_string),
		constraint_name: column.constraint_name().map(str::to_string),
		comment: column.comment().map(str::to_string),
		is_primary_key: column.is_primary_key(),
		is_autoincrement: column.is_autoincrement(),
		is_not_null: column.is_not_null(),
		is_unique: column.is_unique(),
		pk_order: column.pk_order().unwrap_or_default(),
		pk_conflict_clause: column.pk_conflict().unwrap_or_default(),
		not_null_conflict_clause: column.not_null_conflict().unwrap_or_default(),
		unique_conflict_clause: column.unique_conflict().unwrap_or_default(),
		check_expr: column.check_expr().map(str::to_string),
		default_expr: column.default_expr().map(str::to_string),
		collate_name: column.collate_name().map(str::to_string),
		foreign_key: column.foreign_key().map(project_foreign_key_clause),
		generated: column.generated().map(|(expr, storage)| GeneratedColumn {
			expr: expr.to_string(),
			storage,
		}),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::catalog::{ConflictPolicy, FkAction, GeneratedStorage, Order};

	#[test]
	fn test_bare_column() {
		let statement = reifydb_sql::parse("CREATE TABLE t (a)").unwrap();
		assert_eq!(
			project_columns(&statement),
			vec![ColumnInfo {
				name: Some("a".to_string()),
				..ColumnInfo::default()
			}]
		);
	}

	#[test]
	fn test_full_column() {
		let statement = reifydb_sql::parse(
			"CREATE TABLE t (\n\
			 \tid INTEGER CONSTRAINT pk PRIMARY KEY DESC ON CONFLICT ROLLBACK AUTOINCREMENT \
			 NOT NULL ON CONFLICT ABORT UNIQUE ON CONFLICT IGNORE CHECK (id > 0) DEFAULT 1 COLLATE rtrim -- key\n\
			 )",
		)
		.unwrap();
		let column = project_columns(&statement).remove(0);
		assert_eq!(
			column,
			ColumnInfo {
				name: Some("id".to_string()),
				declared_type: Some("INTEGER".to_string()),
				length_spec: None,
				constraint_name: Some("pk".to_string()),
				comment: Some("key".to_string()),
				is_primary_key: true,
				is_autoincrement: true,
				is_not_null: true,
				is_unique: true,
				pk_order: Order::Descending,
				pk_conflict_clause: ConflictPolicy::Rollback,
				not_null_conflict_clause: ConflictPolicy::Abort,
				unique_conflict_clause: ConflictPolicy::Ignore,
				check_expr: Some("id > 0".to_string()),
				default_expr: Some("1".to_string()),
				collate_name: Some("rtrim".to_string()),
				foreign_key: None,
				generated: None,
			}
		);
	}

	#[test]
	fn test_empty_string_default_is_not_absent() {
		let statement = reifydb_sql::parse("CREATE TABLE t (a TEXT DEFAULT '', b TEXT)").unwrap();
		let columns = project_columns(&statement);
		assert_eq!(columns[0].default_expr.as_deref(), Some("''"));
		assert_eq!(columns[1].default_expr, None);
	}

	#[test]
	fn test_column_foreign_key_and_generated() {
		let statement = reifydb_sql::parse(
			"CREATE TABLE t (owner INT REFERENCES users (id) ON UPDATE CASCADE, \
			 total REAL GENERATED ALWAYS AS (owner * 2) STORED)",
		)
		.unwrap();
		let columns = project_columns(&statement);
		let fk = columns[0].foreign_key.as_ref().unwrap();
		assert_eq!(fk.referenced_table.as_deref(), Some("users"));
		assert_eq!(fk.on_update, FkAction::Cascade);
		assert_eq!(fk.on_delete, FkAction::None);
		assert_eq!(
			columns[1].generated,
			Some(GeneratedColumn {
				expr: "owner * 2".to_string(),
				storage: GeneratedStorage::Stored,
			})
		);
	}

	#[test]
	fn test_length_spec() {
		let statement = reifydb_sql::parse("CREATE TABLE t (price DECIMAL(10, 2), code CHAR (3))").unwrap();
		let columns = project_columns(&statement);
		assert_eq!(columns[0].length_spec.as_deref(), Some("10,2"));
		assert_eq!(columns[1].length_spec.as_deref(), Some("3"));
	}
}
