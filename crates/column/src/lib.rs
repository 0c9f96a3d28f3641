// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod column;
pub mod container;
mod data;
pub mod error;
mod table;

pub use column::Column;
pub use data::ColumnData;
pub use error::ColumnError;
pub use table::{RowRef, Table};
pub use tabula_type::{Error, Result, Type, Value};
