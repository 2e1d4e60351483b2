// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod config;
mod error;
mod output;

use std::{io, process::ExitCode};

use clap::Parser;
use config::{Args, Config};
use error::CliError;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
	let config = Config::from(Args::parse());
	init_logging(config.log.as_deref());

	match run(&config) {
		Ok(output) => {
			print!("{output}");
			ExitCode::SUCCESS
		}
		Err(err) => {
			eprintln!("error: {err}");
			ExitCode::from(1)
		}
	}
}

fn init_logging(level: Option<&str>) {
	let filter = match level {
		Some(level) => EnvFilter::new(level),
		None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
	};
	let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).try_init();
}

fn run(config: &Config) -> Result<String, CliError> {
	let sql = config.input.read()?;
	debug!(input = ?config.input, bytes = sql.len(), "read statement");
	let info = reifydb_table_info::parse(&sql)?;
	debug!(
		kind = %info.statement_kind,
		columns = info.columns.len(),
		constraints = info.constraints.len(),
		"projected statement"
	);
	output::render(&info, config.format)
}
