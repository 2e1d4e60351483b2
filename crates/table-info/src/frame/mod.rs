// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Column-oriented view of a [`crate::StatementInfo`].
//!
//! The row-oriented model stays the source of truth; frames are derived
//! from it for hosts that want one vector per field.

mod build;
mod data;
mod display;

use std::ops::{Deref, Index};

pub use build::{columns_frame, constraints_frame, indexed_columns_frame};
pub use data::FrameColumnData;
use serde::Serialize;

use crate::model::StatementInfo;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Frame {
	pub columns: Vec<FrameColumn>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameColumn {
	pub name: String,
	pub data: FrameColumnData,
}

impl Frame {
	pub fn new(columns: Vec<FrameColumn>) -> Self {
		Self {
			columns,
		}
	}

	pub fn row_count(&self) -> usize {
		self.columns.first().map_or(0, |c| c.data.len())
	}

	pub fn column(&self, name: &str) -> Option<&FrameColumn> {
		self.columns.iter().find(|c| c.name == name)
	}
}

impl Deref for Frame {
	type Target = [FrameColumn];

	fn deref(&self) -> &Self::Target {
		&self.columns
	}
}

impl Index<usize> for Frame {
	type Output = FrameColumn;

	fn index(&self, index: usize) -> &Self::Output {
		self.columns.index(index)
	}
}

impl Deref for FrameColumn {
	type Target = FrameColumnData;

	fn deref(&self) -> &Self::Target {
		&self.data
	}
}

impl StatementInfo {
	/// The columns frame and the constraints frame.
	pub fn frames(&self) -> (Frame, Frame) {
		(columns_frame(&self.columns), constraints_frame(&self.constraints))
	}
}
