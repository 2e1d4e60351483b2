// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use reifydb_sql::parse;
use test_each_file::test_each_file;

test_each_file! { in "crates/sql/tests/scripts/accept" as accept => run_accept }
test_each_file! { in "crates/sql/tests/scripts/reject" as reject => run_reject }

fn run_accept(sql: &str) {
	if let Err(err) = parse(sql) {
		panic!("{err}\n{sql}");
	}
}

fn run_reject(sql: &str) {
	let err = parse(sql).expect_err("statement should be rejected");
	assert!(!err.is_unsupported(), "{err}");
}
