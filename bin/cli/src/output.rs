// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use reifydb_table_info::StatementInfo;
use serde_json::json;

use crate::{config::OutputFormat, error::CliError};

pub fn render(info: &StatementInfo, format: OutputFormat) -> Result<String, CliError> {
	match format {
		OutputFormat::Table => Ok(Report(info).to_string()),
		OutputFormat::Json => Ok(serde_json::to_string_pretty(info)? + "\n"),
		OutputFormat::FrameJson => {
			let (columns, constraints) = info.frames();
			let value = json!({
				"columns": columns,
				"constraints": constraints,
			});
			Ok(serde_json::to_string_pretty(&value)? + "\n")
		}
	}
}

struct Report<'a>(&'a StatementInfo);

fn field(value: &Option<String>) -> &str {
	value.as_deref().unwrap_or("Undefined")
}

impl Display for Report<'_> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let info = self.0;
		writeln!(f, "statement_kind: {}", info.statement_kind)?;
		writeln!(f, "schema: {}", field(&info.schema))?;
		writeln!(f, "name: {}", field(&info.name))?;
		writeln!(f, "current_name: {}", field(&info.current_name))?;
		writeln!(f, "new_name: {}", field(&info.new_name))?;
		writeln!(f, "comment: {}", field(&info.comment))?;
		writeln!(f, "temporary: {}", info.is_temporary)?;
		writeln!(f, "if_not_exists: {}", info.if_not_exists)?;
		writeln!(f, "without_rowid: {}", info.without_rowid)?;
		writeln!(f, "strict: {}", info.is_strict)?;

		let (columns, constraints) = info.frames();
		writeln!(f)?;
		writeln!(f, "columns ({})", columns.row_count())?;
		write!(f, "{columns}")?;
		writeln!(f)?;
		writeln!(f, "constraints ({})", constraints.row_count())?;
		write!(f, "{constraints}")
	}
}
