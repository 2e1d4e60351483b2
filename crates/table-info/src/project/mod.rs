// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Projection of a parsed statement into the owned [`StatementInfo`] model.
//!
//! Every string is copied out, so nothing returned here borrows from the
//! source tree.

mod column;
mod constraint;
mod foreign_key;
mod indexed;

pub use column::project_columns;
pub use constraint::project_constraints;
pub use foreign_key::{project_fk_local_columns, project_foreign_key, project_foreign_key_clause};
pub use indexed::project_indexed_columns;
use tracing::{instrument, trace};

use crate::{model::StatementInfo, source::TableSource};

#[instrument(name = "table_info::project_statement", level = "trace", skip(table), fields(kind = %table.statement_kind()))]
pub fn project_statement<T: TableSource>(table: &T) -> StatementInfo {
	let columns = project_columns(table);
	let constraints = project_constraints(table);
	trace!(columns = columns.len(), constraints = constraints.len(), "projected");

	StatementInfo {
		name: table.name().map(str::to_string),
		schema: table.schema().map(str::to_string),
		comment: table.comment().map(str::to_string),
		is_temporary: table.is_temporary(),
		if_not_exists: table.is_if_not_exists(),
		without_rowid: table.is_without_rowid(),
		is_strict: table.is_strict(),
		columns,
		constraints,
		statement_kind: table.statement_kind(),
		current_name: table.current_name().map(str::to_string),
		new_name: table.new_name().map(str::to_string),
	}
}
