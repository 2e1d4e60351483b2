// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::{
	model::ConstraintInfo,
	project::{project_fk_local_columns, project_foreign_key, project_indexed_columns},
	source::{ConstraintSource, TableSource},
};

/// Table-level constraints in declaration order.
pub fn project_constraints<T: TableSource>(table: &T) -> Vec<ConstraintInfo> {
	table.constraints().iter().map(project_constraint).collect()
}

fn project_constraint<C: ConstraintSource>(constraint: &C) -> ConstraintInfo {
	ConstraintInfo {
		name: constraint.name().map(str::to_string),
		kind: constraint.kind(),
		indexed_columns: project_indexed_columns(constraint),
		conflict_clause: constraint.conflict_clause().unwrap_or_default(),
		check_expr: constraint.check_expr().map(str::to_string),
		foreign_key_column_names: project_fk_local_columns(constraint),
		foreign_key: project_foreign_key(constraint),
	}
}
