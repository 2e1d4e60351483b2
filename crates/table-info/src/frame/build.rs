// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::{
	catalog::{ConflictPolicy, ConstraintKind, DeferrableMode, Enumeration, FkAction, Order},
	frame::{Frame, FrameColumn, FrameColumnData},
	model::{ColumnInfo, ConstraintInfo, ForeignKeyClause, IndexedColumnInfo},
};

fn text<'r>(name: &str, values: impl Iterator<Item = Option<&'r str>>) -> FrameColumn {
	let (values, validity) = values.map(|v| (v.unwrap_or_default().to_string(), v.is_some())).unzip();
	FrameColumn {
		name: name.to_string(),
		data: FrameColumnData::Text(values, validity),
	}
}

fn boolean(name: &str, values: impl Iterator<Item = bool>) -> FrameColumn {
	let values: Vec<bool> = values.collect();
	let validity = vec![true; values.len()];
	FrameColumn {
		name: name.to_string(),
		data: FrameColumnData::Bool(values, validity),
	}
}

fn int4(name: &str, values: impl Iterator<Item = Option<usize>>) -> FrameColumn {
	let (values, validity) =
		values.map(|v| (v.and_then(|n| i32::try_from(n).ok()).unwrap_or_default(), v.is_some())).unzip();
	FrameColumn {
		name: name.to_string(),
		data: FrameColumnData::Int4(values, validity),
	}
}

fn factor<E: Enumeration>(name: &str, values: impl Iterator<Item = Option<E>>) -> FrameColumn {
	let (codes, validity) = values.map(|v| (v.map_or(0, E::factor), v.is_some())).unzip();
	FrameColumn {
		name: name.to_string(),
		data: FrameColumnData::Factor {
			codes,
			validity,
			levels: E::LEVELS,
		},
	}
}

/// Raw 0-based catalog code, for the fields that carry no level labels.
fn code<E: Enumeration>(name: &str, values: impl Iterator<Item = E>) -> FrameColumn {
	let values: Vec<i32> = values.map(|v| i32::try_from(v.code()).unwrap_or_default()).collect();
	let validity = vec![true; values.len()];
	FrameColumn {
		name: name.to_string(),
		data: FrameColumnData::Int4(values, validity),
	}
}

fn text_list<'r>(name: &str, values: impl Iterator<Item = Option<&'r [String]>>) -> FrameColumn {
	let (values, validity) = values.map(|v| (v.map(<[String]>::to_vec).unwrap_or_default(), v.is_some())).unzip();
	FrameColumn {
		name: name.to_string(),
		data: FrameColumnData::TextList(values, validity),
	}
}

fn fk(constraint: &ConstraintInfo) -> Option<&ForeignKeyClause> {
	constraint.foreign_key.as_ref()
}

fn non_empty<T>(values: &[T]) -> Option<&[T]> {
	if values.is_empty() { None } else { Some(values) }
}

/// One row per column, 16 fields.
pub fn columns_frame(columns: &[ColumnInfo]) -> Frame {
	Frame::new(vec![
		text("name", columns.iter().map(|c| c.name.as_deref())),
		text("type", columns.iter().map(|c| c.declared_type.as_deref())),
		text("length", columns.iter().map(|c| c.length_spec.as_deref())),
		text("constraint_name", columns.iter().map(|c| c.constraint_name.as_deref())),
		text("comment", columns.iter().map(|c| c.comment.as_deref())),
		boolean("primary_key", columns.iter().map(|c| c.is_primary_key)),
		boolean("auto_increment", columns.iter().map(|c| c.is_autoincrement)),
		boolean("not_null", columns.iter().map(|c| c.is_not_null)),
		boolean("unique", columns.iter().map(|c| c.is_unique)),
		factor::<Order>("order_pk", columns.iter().map(|c| Some(c.pk_order))),
		factor::<ConflictPolicy>("conflict_pk", columns.iter().map(|c| Some(c.pk_conflict_clause))),
		factor::<ConflictPolicy>("conflict_no_null", columns.iter().map(|c| Some(c.not_null_conflict_clause))),
		factor::<ConflictPolicy>("conflict_unique", columns.iter().map(|c| Some(c.unique_conflict_clause))),
		text("check_expr", columns.iter().map(|c| c.check_expr.as_deref())),
		text("default_expr", columns.iter().map(|c| c.default_expr.as_deref())),
		text("collate_name", columns.iter().map(|c| c.collate_name.as_deref())),
	])
}

/// One row per table-level constraint, 14 fields. Every `fk_*` cell is
/// invalid on rows without a foreign key clause. `conflict_clause` carries the
/// raw 0-based code, unlike the factor-coded kind and actions.
pub fn constraints_frame(constraints: &[ConstraintInfo]) -> Frame {
	let idx_cols = {
		let (values, validity) = constraints
			.iter()
			.map(|c| (indexed_columns_frame(&c.indexed_columns), !c.indexed_columns.is_empty()))
			.unzip();
		FrameColumn {
			name: "idx_cols".to_string(),
			data: FrameColumnData::Frame(values, validity),
		}
	};

	Frame::new(vec![
		text("name", constraints.iter().map(|c| c.name.as_deref())),
		factor::<ConstraintKind>("type", constraints.iter().map(|c| Some(c.kind))),
		idx_cols,
		code("conflict_clause", constraints.iter().map(|c| c.conflict_clause)),
		text("check_expr", constraints.iter().map(|c| c.check_expr.as_deref())),
		int4("num_fk_cols", constraints.iter().map(|c| Some(c.foreign_key_column_names.len()))),
		text_list("fk_local_cols", constraints.iter().map(|c| non_empty(&c.foreign_key_column_names))),
		text("fk_table", constraints.iter().map(|c| fk(c).and_then(|f| f.referenced_table.as_deref()))),
		int4("fk_num_cols", constraints.iter().map(|c| fk(c).map(|f| f.referenced_columns.len()))),
		text_list("fk_cols", constraints.iter().map(|c| fk(c).map(|f| f.referenced_columns.as_slice()))),
		factor::<FkAction>("fk_on_delete", constraints.iter().map(|c| fk(c).map(|f| f.on_delete))),
		factor::<FkAction>("fk_on_update", constraints.iter().map(|c| fk(c).map(|f| f.on_update))),
		text("fk_match", constraints.iter().map(|c| fk(c).and_then(|f| f.match_clause.as_deref()))),
		factor::<DeferrableMode>("fk_deferrable", constraints.iter().map(|c| fk(c).map(|f| f.deferrable))),
	])
}

/// `order` carries the raw 0-based code.
pub fn indexed_columns_frame(columns: &[IndexedColumnInfo]) -> Frame {
	Frame::new(vec![
		text("name", columns.iter().map(|c| c.name.as_deref())),
		text("collate", columns.iter().map(|c| c.collate.as_deref())),
		code("order", columns.iter().map(|c| c.order)),
	])
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::parse;

	#[test]
	fn test_columns_frame_shape() {
		let info = parse("CREATE TABLE t (a INTEGER PRIMARY KEY DESC, b VARCHAR(20) NOT NULL)").unwrap();
		let frame = columns_frame(&info.columns);
		assert_eq!(frame.len(), 16);
		assert_eq!(frame.row_count(), 2);

		let names: Vec<_> = frame.iter().map(|c| c.name.as_str()).collect();
		assert_eq!(
			names,
			vec![
				"name",
				"type",
				"length",
				"constraint_name",
				"comment",
				"primary_key",
				"auto_increment",
				"not_null",
				"unique",
				"order_pk",
				"conflict_pk",
				"conflict_no_null",
				"conflict_unique",
				"check_expr",
				"default_expr",
				"collate_name",
			]
		);

		let length = frame.column("length").unwrap();
		assert_eq!(length.validity(), &[false, true]);
		assert_eq!(length.as_string(1), "20");

		assert_eq!(
			frame.column("order_pk").unwrap().data,
			FrameColumnData::Factor {
				codes: vec![3, 1],
				validity: vec![true, true],
				levels: Order::LEVELS,
			}
		);
	}

	#[test]
	fn test_constraints_frame_gates_foreign_key_cells() {
		let info = parse(
			"CREATE TABLE t (a, b, UNIQUE (a, b) ON CONFLICT REPLACE, \
			 FOREIGN KEY (b) REFERENCES other (id) ON DELETE CASCADE)",
		)
		.unwrap();
		let frame = constraints_frame(&info.constraints);
		assert_eq!(frame.len(), 14);
		assert_eq!(frame.row_count(), 2);

		for name in
			["fk_table", "fk_num_cols", "fk_cols", "fk_on_delete", "fk_on_update", "fk_match", "fk_deferrable"]
		{
			let column = frame.column(name).unwrap();
			assert!(!column.is_valid(0), "{name} should be unavailable for UNIQUE");
		}

		assert!(!frame.column("fk_local_cols").unwrap().is_valid(0));
		assert_eq!(frame.column("fk_local_cols").unwrap().as_string(1), "b");
		assert_eq!(frame.column("fk_table").unwrap().as_string(1), "other");
		assert_eq!(frame.column("fk_on_delete").unwrap().as_string(1), "cascade");
		assert_eq!(frame.column("fk_on_update").unwrap().as_string(1), "none");
		assert!(!frame.column("fk_match").unwrap().is_valid(1));
		assert_eq!(frame.column("num_fk_cols").unwrap().as_string(0), "0");

		let idx_cols = frame.column("idx_cols").unwrap();
		assert!(idx_cols.is_valid(0));
		assert!(!idx_cols.is_valid(1));
		assert_eq!(idx_cols.as_string(0), "a 0, b 0");
	}

	#[test]
	fn test_constraint_conflict_clause_is_raw_code() {
		let info = parse("CREATE TABLE t (a, UNIQUE (a) ON CONFLICT REPLACE)").unwrap();
		let frame = constraints_frame(&info.constraints);
		assert_eq!(frame.column("conflict_clause").unwrap().data, FrameColumnData::Int4(vec![5], vec![true]));
		assert_eq!(
			frame.column("type").unwrap().data,
			FrameColumnData::Factor {
				codes: vec![2],
				validity: vec![true],
				levels: ConstraintKind::LEVELS,
			}
		);
	}

	#[test]
	fn test_indexed_column_order_is_raw_code() {
		let info = parse("CREATE TABLE t (a, b, PRIMARY KEY (a DESC, b))").unwrap();
		let frame = indexed_columns_frame(&info.constraints[0].indexed_columns);
		assert_eq!(frame.column("order").unwrap().data, FrameColumnData::Int4(vec![2, 0], vec![true, true]));
	}

	#[test]
	fn test_frames_serialize() {
		let info = parse("CREATE TABLE t (a)").unwrap();
		let (columns, constraints) = info.frames();
		let json = serde_json::to_value(&columns).unwrap();
		assert_eq!(json["columns"][0]["name"], "name");
		assert_eq!(json["columns"][0]["data"]["Text"][0][0], "a");
		assert_eq!(constraints.row_count(), 0);
	}
}
