// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Relational joins between one left table and one or more right tables.
//!
//! A join runs as a fold over the right tables. Every step validates the key
//! columns, builds a [`MatchIndex`] over one side, enumerates [`RowPair`]s for
//! the requested [`JoinType`], computes the output schema and finally copies
//! the values into a fresh [`Table`](tabula_column::Table).

mod builder;
mod config;
pub mod error;
mod execute;
mod index;
mod key;
mod materialize;
mod orchestrate;
mod project;

pub use builder::{JoinOn, JoinTable};
pub use config::{JoinConfig, JoinConfigBuilder, JoinType, MissingKeys};
pub use error::{JoinError, JoinSide};
pub use execute::{RowPair, enumerate_pairs};
pub use index::MatchIndex;
pub use key::{CompositeKey, KeyColumns, KeyPart, check_key_types};
pub use orchestrate::{TableIndex, join};
pub use project::{OutputColumn, Projection, Source};
pub use tabula_type::{Error, Result};
