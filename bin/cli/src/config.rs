// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fs,
	io::{self, Read},
	path::PathBuf,
};

use clap::{Parser, ValueEnum};

use crate::error::CliError;

#[derive(Parser, Debug)]
#[command(name = "table-info")]
#[command(version)]
#[command(about = "Describe a SQLite CREATE TABLE or ALTER TABLE statement")]
#[command(long_about = "Describe a SQLite CREATE TABLE or ALTER TABLE statement

EXAMPLES:
  table-info \"CREATE TABLE t (a INTEGER PRIMARY KEY, b TEXT)\"
  table-info --file schema.sql --format json
  echo \"ALTER TABLE t RENAME TO u\" | table-info")]
pub struct Args {
	/// Statement to describe; read from --file or stdin when absent
	#[arg(value_name = "SQL", conflicts_with = "file")]
	pub sql: Option<String>,

	/// Read the statement from a file
	#[arg(short, long, value_name = "PATH")]
	pub file: Option<PathBuf>,

	/// Output format
	#[arg(long, value_enum, default_value_t = OutputFormat::Table, env = "TABLE_INFO_FORMAT")]
	pub format: OutputFormat,

	/// Log filter, overrides RUST_LOG (e.g. `debug`, `table_info=trace`)
	#[arg(long, value_name = "LEVEL", env = "TABLE_INFO_LOG")]
	pub log: Option<String>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
	/// Statement fields followed by the columns and constraints frames
	Table,
	/// The statement as row-oriented JSON
	Json,
	/// The columns and constraints frames as columnar JSON
	FrameJson,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
	Inline(String),
	File(PathBuf),
	Stdin,
}

impl Input {
	pub fn read(&self) -> Result<String, CliError> {
		match self {
			Input::Inline(sql) => Ok(sql.clone()),
			Input::File(path) => fs::read_to_string(path).map_err(|source| CliError::Read {
				input: path.display().to_string(),
				source,
			}),
			Input::Stdin => {
				let mut sql = String::new();
				io::stdin().read_to_string(&mut sql).map_err(|source| CliError::Read {
					input: "stdin".to_string(),
					source,
				})?;
				Ok(sql)
			}
		}
	}
}

#[derive(Debug, Clone)]
pub struct Config {
	pub input: Input,
	pub format: OutputFormat,
	pub log: Option<String>,
}

impl From<Args> for Config {
	fn from(args: Args) -> Self {
		let input = match (args.sql, args.file) {
			(Some(sql), _) => Input::Inline(sql),
			(None, Some(path)) => Input::File(path),
			(None, None) => Input::Stdin,
		};
		Self {
			input,
			format: args.format,
			log: args.log,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn config(args: &[&str]) -> Config {
		Config::from(Args::try_parse_from(std::iter::once("table-info").chain(args.iter().copied())).unwrap())
	}

	#[test]
	fn test_inline_statement() {
		let config = config(&["CREATE TABLE t (a)", "--format", "json"]);
		assert_eq!(config.input, Input::Inline("CREATE TABLE t (a)".to_string()));
		assert_eq!(config.format, OutputFormat::Json);
	}

	#[test]
	fn test_file_input() {
		let config = config(&["--file", "schema.sql", "--format", "frame-json"]);
		assert_eq!(config.input, Input::File(PathBuf::from("schema.sql")));
		assert_eq!(config.format, OutputFormat::FrameJson);
	}

	#[test]
	fn test_sql_and_file_conflict() {
		assert!(Args::try_parse_from(["table-info", "CREATE TABLE t (a)", "--file", "schema.sql"]).is_err());
	}

	#[test]
	fn test_inline_read() {
		assert_eq!(Input::Inline("x".to_string()).read().unwrap(), "x");
	}

	#[test]
	fn test_missing_file() {
		let err = Input::File(PathBuf::from("/nonexistent/table-info.sql")).read().unwrap_err();
		assert!(matches!(err, CliError::Read { .. }));
	}
}
