// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::Serialize;

use crate::frame::Frame;

/// Values of one frame column, each paired with a validity vector. An
/// invalid cell is "not available" and its value slot is a placeholder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum FrameColumnData {
	Text(Vec<String>, Vec<bool>),
	Bool(Vec<bool>, Vec<bool>),
	Int4(Vec<i32>, Vec<bool>),
	/// 1-based codes into `levels`.
	Factor {
		codes: Vec<i32>,
		validity: Vec<bool>,
		levels: &'static [&'static str],
	},
	TextList(Vec<Vec<String>>, Vec<bool>),
	Frame(Vec<Frame>, Vec<bool>),
}

impl FrameColumnData {
	pub fn len(&self) -> usize {
		self.validity().len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn validity(&self) -> &[bool] {
		match self {
			FrameColumnData::Text(_, validity)
			| FrameColumnData::Bool(_, validity)
			| FrameColumnData::Int4(_, validity)
			| FrameColumnData::Factor {
				validity,
				..
			}
			| FrameColumnData::TextList(_, validity)
			| FrameColumnData::Frame(_, validity) => validity,
		}
	}

	pub fn is_valid(&self, index: usize) -> bool {
		self.validity().get(index).copied().unwrap_or(false)
	}

	/// Renders a single cell; invalid and out-of-range cells render as
	/// `Undefined`.
	pub fn as_string(&self, index: usize) -> String {
		if !self.is_valid(index) {
			return "Undefined".to_string();
		}
		match self {
			FrameColumnData::Text(values, _) => values[index].clone(),
			FrameColumnData::Bool(values, _) => values[index].to_string(),
			FrameColumnData::Int4(values, _) => values[index].to_string(),
			FrameColumnData::Factor {
				codes,
				levels,
				..
			} => usize::try_from(codes[index] - 1)
				.ok()
				.and_then(|code| levels.get(code))
				.map_or_else(|| "Undefined".to_string(), |label| label.to_string()),
			FrameColumnData::TextList(values, _) => values[index].join(", "),
			FrameColumnData::Frame(values, _) => {
				let frame = &values[index];
				(0..frame.row_count())
					.map(|row| {
						frame.iter()
							.filter(|column| column.data.is_valid(row))
							.map(|column| column.data.as_string(row))
							.collect::<Vec<_>>()
							.join(" ")
					})
					.collect::<Vec<_>>()
					.join(", ")
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_invalid_cell_renders_undefined() {
		let data = FrameColumnData::Text(vec!["a".to_string(), String::new()], vec![true, false]);
		assert_eq!(data.len(), 2);
		assert_eq!(data.as_string(0), "a");
		assert_eq!(data.as_string(1), "Undefined");
		assert_eq!(data.as_string(7), "Undefined");
	}

	#[test]
	fn test_factor_renders_label() {
		let data = FrameColumnData::Factor {
			codes: vec![1, 3],
			validity: vec![true, true],
			levels: &["none", "ascending", "descending"],
		};
		assert_eq!(data.as_string(0), "none");
		assert_eq!(data.as_string(1), "descending");
	}

	#[test]
	fn test_text_list_joined() {
		let data = FrameColumnData::TextList(vec![vec!["a".to_string(), "b".to_string()]], vec![true]);
		assert_eq!(data.as_string(0), "a, b");
	}
}
