// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::{
	model::ForeignKeyClause,
	source::{ConstraintSource, ForeignKeySource},
};

/// Local columns of a foreign key constraint; empty for any other kind.
pub fn project_fk_local_columns<C: ConstraintSource>(constraint: &C) -> Vec<String> {
	constraint.foreign_key_columns().map(str::to_string).collect()
}

/// `None` when the constraint carries no foreign key clause.
pub fn project_foreign_key<C: ConstraintSource>(constraint: &C) -> Option<ForeignKeyClause> {
	constraint.foreign_key().map(project_foreign_key_clause)
}

pub fn project_foreign_key_clause<F: ForeignKeySource>(clause: &F) -> ForeignKeyClause {
	ForeignKeyClause {
		referenced_table: clause.table().map(str::to_string),
		referenced_columns: clause.columns().map(str::to_string).collect(),
		on_delete: clause.on_delete().unwrap_or_default(),
		on_update: clause.on_update().unwrap_or_default(),
		match_clause: clause.match_name().map(str::to_string),
		deferrable: clause.deferrable().unwrap_or_default(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		catalog::{DeferrableMode, FkAction},
		source::TableSource,
	};

	#[test]
	fn test_unset_actions_map_to_none() {
		let statement = reifydb_sql::parse("CREATE TABLE t (a, FOREIGN KEY (a) REFERENCES p)").unwrap();
		let constraint = &statement.constraints()[0];
		assert_eq!(project_fk_local_columns(constraint), vec!["a"]);
		assert_eq!(
			project_foreign_key(constraint),
			Some(ForeignKeyClause {
				referenced_table: Some("p".to_string()),
				referenced_columns: vec![],
				on_delete: FkAction::None,
				on_update: FkAction::None,
				match_clause: None,
				deferrable: DeferrableMode::None,
			})
		);
	}

	#[test]
	fn test_not_applicable_for_other_kinds() {
		let statement = reifydb_sql::parse("CREATE TABLE t (a, UNIQUE (a))").unwrap();
		let constraint = &statement.constraints()[0];
		assert!(project_fk_local_columns(constraint).is_empty());
		assert_eq!(project_foreign_key(constraint), None);
	}

	#[test]
	fn test_full_clause() {
		let statement = reifydb_sql::parse(
			"CREATE TABLE t (a, b, FOREIGN KEY (b, a) REFERENCES p (y, x) ON DELETE SET DEFAULT \
			 ON UPDATE RESTRICT MATCH FULL NOT DEFERRABLE)",
		)
		.unwrap();
		let clause = project_foreign_key(&statement.constraints()[0]).unwrap();
		assert_eq!(clause.referenced_columns, vec!["y", "x"]);
		assert_eq!(clause.on_delete, FkAction::SetDefault);
		assert_eq!(clause.on_update, FkAction::Restrict);
		assert_eq!(clause.match_clause.as_deref(), Some("FULL"));
		assert_eq!(clause.deferrable, DeferrableMode::NotDeferrable);
	}
}
