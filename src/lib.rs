//! An in-memory, schema-typed table store.
//!
//! - [`persistence`] is the engine: tables, their schemas and rows.
//! - [`conversion`] turns caller text into typed values at the boundary.
//! - [`sessions`] and [`cli`] make up the interactive access layer.

pub mod cli;
pub mod config;
pub mod conversion;
pub mod persistence;
pub mod sessions;
