//! Oracle resolution and randomized content generation for Voidfarer.
//!
//! Interprets the deeply nested Starforged oracle dataset through one
//! uniform interface: flat navigation tokens decode to structured
//! locators, locators resolve to oracle nodes, nodes resolve to rollable
//! tables across five structural shapes, and a d100 roller maps draws to
//! results. Chained generators compose these pieces for full planet
//! generation, sector names, and the "Pay the Price" move oracle.

pub mod dice;
pub mod favorites;
pub mod generate;
pub mod locator;
pub mod records;
pub mod resolve;
pub mod roll;

pub use dice::{DrawSource, ScriptedDraws};
pub use favorites::{Favorites, FavoritesDraft};
pub use generate::{
    GeneratedLocation, generate_planet, generate_sector_name, roll_pay_the_price,
};
pub use locator::{NavTarget, OracleDepth, OracleLocator, OracleView, decode};
pub use records::{RecordKey, RollLog, RollRecord};
pub use resolve::{ResolvedOracle, resolve_column_table, resolve_oracle, resolve_table};
pub use roll::{ColumnRoll, TableRoll, match_row, roll_column, roll_on_table, roll_result_columns};
