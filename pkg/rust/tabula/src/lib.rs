// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! In-memory tables of typed columns and the relational joins between them.
//!
//! ```ignore
//! use tabula::JoinTable;
//!
//! let joined = people.join_on(["ID"]).with(&dogs).left_outer().join()?;
//! println!("{}", joined);
//! ```

pub use tabula_column as column;
pub use tabula_join as join;
pub use tabula_type as r#type;

pub use tabula_column::{Column, ColumnData, RowRef, Table};
pub use tabula_join::{JoinConfig, JoinConfigBuilder, JoinOn, JoinTable, JoinType, MissingKeys, TableIndex};
pub use tabula_type::{Date, DateTime, Diagnostic, Error, GetType, Result, Time, Type, Value};
