// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Closed catalogs for every categorical SQL option.
//!
//! Each enumeration has a stable 0-based `code`, a lowercase `label` and a
//! 1-based `factor` code. Catalogs with a "nothing specified" level mark it
//! `#[default]`.

use std::fmt::{self, Display, Formatter};

use serde::{Serialize, Serializer};

pub trait Enumeration: Copy + Sized + 'static {
	/// Labels indexed by `code`.
	const LEVELS: &'static [&'static str];

	fn code(self) -> usize;

	fn from_code(code: usize) -> Option<Self>;

	fn label(self) -> &'static str {
		Self::LEVELS[self.code()]
	}

	fn factor(self) -> i32 {
		self.code() as i32 + 1
	}
}

macro_rules! enumeration {
	(
		$(#[$meta:meta])*
		$name:ident {
			$($(#[$variant_meta:meta])* $variant:ident => $label:literal),+ $(,)?
		}
	) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
		pub enum $name {
			$($(#[$variant_meta])* $variant,)+
		}

		impl $name {
			pub const ALL: &'static [$name] = &[$($name::$variant,)+];
		}

		impl Enumeration for $name {
			const LEVELS: &'static [&'static str] = &[$($label,)+];

			fn code(self) -> usize {
				self as usize
			}

			fn from_code(code: usize) -> Option<Self> {
				Self::ALL.get(code).copied()
			}
		}

		impl Display for $name {
			fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
				f.write_str(self.label())
			}
		}

		impl Serialize for $name {
			fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
				serializer.serialize_str(self.label())
			}
		}
	};
}

enumeration! {
	/// Sort order of a primary key or indexed column.
	#[derive(Default)]
	Order {
		#[default]
		None => "none",
		Ascending => "ascending",
		Descending => "descending",
	}
}

enumeration! {
	/// `ON CONFLICT` resolution.
	#[derive(Default)]
	ConflictPolicy {
		#[default]
		None => "none",
		Rollback => "rollback",
		Abort => "abort",
		Fail => "fail",
		Ignore => "ignore",
		Replace => "replace",
	}
}

enumeration! {
	/// Foreign key `ON DELETE` / `ON UPDATE` action.
	#[derive(Default)]
	FkAction {
		#[default]
		None => "none",
		SetNull => "set null",
		SetDefault => "set default",
		Cascade => "cascade",
		Restrict => "restrict",
		NoAction => "no action",
	}
}

enumeration! {
	#[derive(Default)]
	DeferrableMode {
		#[default]
		None => "none",
		Deferrable => "deferrable",
		DeferrableInitiallyDeferred => "deferrable initially deferred",
		DeferrableInitiallyImmediate => "deferrable initially immediate",
		NotDeferrable => "not deferrable",
		NotDeferrableInitiallyDeferred => "not deferrable initially deferred",
		NotDeferrableInitiallyImmediate => "not deferrable initially immediate",
	}
}

enumeration! {
	/// Kind of a table-level constraint.
	ConstraintKind {
		PrimaryKey => "primary key",
		Unique => "unique",
		Check => "check",
		ForeignKey => "foreign key",
	}
}

enumeration! {
	#[derive(Default)]
	StatementKind {
		#[default]
		Unknown => "unknown",
		Table => "table",
		RenameTable => "rename table",
		RenameColumn => "rename column",
		AddColumn => "add column",
		DropColumn => "drop column",
	}
}

enumeration! {
	/// Storage of a generated column; SQLite defaults to virtual.
	#[derive(Default)]
	GeneratedStorage {
		#[default]
		Virtual => "virtual",
		Stored => "stored",
	}
}
