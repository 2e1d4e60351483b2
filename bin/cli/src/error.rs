// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::io;

use reifydb_table_info::ParseError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
	#[error("failed to read {input}: {source}")]
	Read {
		input: String,
		source: io::Error,
	},

	#[error(transparent)]
	Parse(#[from] ParseError),

	#[error("failed to encode json: {0}")]
	Json(#[from] serde_json::Error),
}
