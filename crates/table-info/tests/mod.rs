// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use reifydb_table_info::{ConstraintKind, Enumeration, ParseError, StatementInfo, parse};
use test_each_file::test_each_file;
use unicode_width::UnicodeWidthStr;

test_each_file! { in "crates/table-info/tests/scripts/valid" as valid => run_valid }
test_each_file! { in "crates/table-info/tests/scripts/invalid" as invalid => run_invalid }

/// Every script starts with `-- expect: <words>`.
fn expectation(script: &str) -> Vec<&str> {
	let header = script.lines().next().expect("empty script");
	let words = header.strip_prefix("-- expect:").expect("script without expect header");
	words.split_whitespace().collect()
}

fn run_valid(script: &str) {
	let expect = expectation(script);
	let [kind, columns, constraints] = expect.as_slice() else {
		panic!("expected `kind columns constraints`, got {expect:?}");
	};

	let info = parse(script).unwrap_or_else(|err| panic!("{err}"));
	assert_eq!(info.statement_kind.label(), kind.replace('_', " "));
	assert_eq!(info.columns.len(), columns.parse::<usize>().unwrap(), "column count");
	assert_eq!(info.constraints.len(), constraints.parse::<usize>().unwrap(), "constraint count");

	assert_eq!(parse(script).unwrap(), info, "projection is not deterministic");

	check_foreign_key_gating(&info);
	check_frames(&info);
	serde_json::to_string(&info).unwrap();
}

fn run_invalid(script: &str) {
	let expect = expectation(script);
	let err = parse(script).expect_err("statement should be rejected");
	assert!(err.is_syntax_error());
	match expect.as_slice() {
		["syntax"] => assert!(matches!(err, ParseError::SyntaxError { .. }), "{err:?}"),
		["unsupported"] => assert!(matches!(err, ParseError::UnsupportedStatement { .. }), "{err:?}"),
		other => panic!("unknown expectation {other:?}"),
	}
}

fn check_foreign_key_gating(info: &StatementInfo) {
	for constraint in &info.constraints {
		if constraint.kind == ConstraintKind::ForeignKey {
			let clause = constraint.foreign_key.as_ref().expect("foreign key without clause");
			assert!(clause.referenced_table.is_some());
			assert!(!constraint.foreign_key_column_names.is_empty());
		} else {
			assert_eq!(constraint.foreign_key, None);
			assert!(constraint.foreign_key_column_names.is_empty());
		}
		if constraint.kind == ConstraintKind::Check {
			assert!(constraint.indexed_columns.is_empty());
		}
	}
}

fn check_frames(info: &StatementInfo) {
	let (columns, constraints) = info.frames();
	assert_eq!(columns.len(), 16);
	assert_eq!(constraints.len(), 14);
	for column in columns.iter() {
		assert_eq!(column.data.len(), info.columns.len(), "{}", column.name);
	}
	for column in constraints.iter() {
		assert_eq!(column.data.len(), info.constraints.len(), "{}", column.name);
	}

	let fk_table = constraints.column("fk_table").unwrap();
	for (row, constraint) in info.constraints.iter().enumerate() {
		assert_eq!(fk_table.is_valid(row), constraint.foreign_key.is_some());
	}

	check_aligned(&columns.to_string());
	check_aligned(&constraints.to_string());
}

/// Every rendered line has the border's display width.
fn check_aligned(rendered: &str) {
	let border = rendered.lines().next().expect("empty rendering").width();
	for line in rendered.lines() {
		assert_eq!(line.width(), border, "misaligned line {line:?}\n{rendered}");
	}
}
