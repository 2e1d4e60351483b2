// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::{
	model::IndexedColumnInfo,
	source::{ConstraintSource, IndexedColumnSource},
};

/// Empty for constraints without a column list; no branching on kind.
pub fn project_indexed_columns<C: ConstraintSource>(constraint: &C) -> Vec<IndexedColumnInfo> {
	constraint
		.indexed_columns()
		.iter()
		.map(|column| IndexedColumnInfo {
			name: column.name().map(str::to_string),
			collate: column.collate().map(str::to_string),
			order: column.order().unwrap_or_default(),
		})
		.collect()
}
