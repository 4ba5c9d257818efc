//! Core types for Voidfarer: the Starforged oracle ruleset and its accessor.
//!
//! This crate defines the read-only rules dataset model — categories,
//! oracles, and the five table shapes — plus index- and name-based lookup.
//! It is independent of any roll engine: you can construct a [`RuleSet`]
//! programmatically or deserialize one from JSON.

pub mod error;
pub mod oracle;
pub mod ruleset;
pub mod table;

pub use error::{CoreError, CoreResult};
pub use oracle::{Oracle, OracleCategory};
pub use ruleset::{DEFAULT_REGION, RuleSet, normalize_region};
pub use table::{ColumnSpec, RegionTable, TableRow, TableVariant};
