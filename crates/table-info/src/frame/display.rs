// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use unicode_width::UnicodeWidthStr;

use crate::frame::Frame;

fn escape_control_chars(s: &str) -> String {
	s.replace('\n', "\\n").replace('\t', "\\t")
}

/// Terminal display width; wide characters count double.
fn width(s: &str) -> usize {
	s.width()
}

fn centered(s: &str, w: usize) -> String {
	let pad = w - width(s);
	let l = pad / 2;
	let r = pad - l;
	format!(" {:l$}{}{:r$} ", "", s, "")
}

impl Display for Frame {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let row_count = self.row_count();

		let mut col_widths: Vec<usize> = Vec::with_capacity(self.columns.len());
		for col in &self.columns {
			let header_width = width(&escape_control_chars(&col.name));
			let mut max_val_width = 0;
			for i in 0..row_count {
				max_val_width = max_val_width.max(width(&escape_control_chars(&col.data.as_string(i))));
			}
			col_widths.push(header_width.max(max_val_width));
		}

		// padding
		for w in &mut col_widths {
			*w += 2;
		}

		let sep: String = if col_widths.is_empty() {
			"++".to_string()
		} else {
			col_widths.iter().map(|w| format!("+{}", "-".repeat(*w + 2))).collect::<String>() + "+"
		};

		writeln!(f, "{}", sep)?;

		let header: Vec<String> = self
			.columns
			.iter()
			.zip(&col_widths)
			.map(|(col, w)| centered(&escape_control_chars(&col.name), *w))
			.collect();
		writeln!(f, "|{}|", header.join("|"))?;
		writeln!(f, "{}", sep)?;

		for row_idx in 0..row_count {
			let row: Vec<String> = self
				.columns
				.iter()
				.zip(&col_widths)
				.map(|(col, w)| centered(&escape_control_chars(&col.data.as_string(row_idx)), *w))
				.collect();
			writeln!(f, "|{}|", row.join("|"))?;
		}

		writeln!(f, "{}", sep)
	}
}
