//! Chained, dependency-respecting content generation.
//!
//! Planet generation rolls several oracles in a fixed order because the
//! fields depend on each other: the planet class picks the oracle
//! category, and the "Life" result gates which peril/opportunity tables
//! apply. Sector names and the "Pay the Price" move consult fixed
//! oracles located by name.

pub mod location;
pub mod price;
pub mod sector;

pub use location::{GeneratedLocation, generate_planet};
pub use price::roll_pay_the_price;
pub use sector::generate_sector_name;

/// Life results that mean a world is lifeless, compared case-insensitively.
pub const LIFELESS_TERMS: &[&str] = &["none", "extinct", "sterile", "lifeless"];

/// Classify a rolled "Life" result as life-bearing or lifeless.
///
/// Absence from the lifelessness vocabulary implies life is present.
pub fn has_life(life_text: &str) -> bool {
    let trimmed = life_text.trim();
    !LIFELESS_TERMS
        .iter()
        .any(|term| trimmed.eq_ignore_ascii_case(term))
}
