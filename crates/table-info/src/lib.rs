// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Structured, owned description of a SQLite `CREATE TABLE` or
//! `ALTER TABLE` statement.
//!
//! ```
//! use reifydb_table_info::{StatementKind, parse};
//!
//! let info = parse("CREATE TABLE t (a INTEGER PRIMARY KEY, b TEXT)").unwrap();
//! assert_eq!(info.statement_kind, StatementKind::Table);
//! assert_eq!(info.columns.len(), 2);
//! assert!(info.columns[0].is_primary_key);
//! ```

pub mod catalog;
pub mod error;
pub mod frame;
pub mod model;
pub mod project;
pub mod source;

pub use catalog::{
	ConflictPolicy, ConstraintKind, DeferrableMode, Enumeration, FkAction, GeneratedStorage, Order, StatementKind,
};
pub use error::ParseError;
pub use frame::{Frame, FrameColumn, FrameColumnData};
pub use model::{ColumnInfo, ConstraintInfo, ForeignKeyClause, GeneratedColumn, IndexedColumnInfo, StatementInfo};
pub use project::project_statement;
use tracing::{debug, instrument};

/// Parses one statement and projects it. The syntax tree lives only for the
/// duration of the call; the result owns all of its strings.
#[instrument(name = "table_info::parse", level = "trace", skip(sql))]
pub fn parse(sql: &str) -> Result<StatementInfo, ParseError> {
	let statement = reifydb_sql::parse(sql).map_err(|err| {
		debug!(error = %err, "statement rejected");
		ParseError::from(err)
	})?;
	Ok(project_statement(&statement))
}

/// Same as [`parse`].
pub fn project(sql: &str) -> Result<StatementInfo, ParseError> {
	parse(sql)
}
