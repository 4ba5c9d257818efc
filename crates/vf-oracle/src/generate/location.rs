//! Full planet generation.

use serde::{Deserialize, Serialize};

use vf_core::{Oracle, OracleCategory, RuleSet};

use super::has_life;
use crate::dice::DrawSource;
use crate::resolve::resolve_table;
use crate::roll::{TableRoll, roll_on_table};

/// A generated planetside location.
///
/// Fields stay unset until their oracle resolves; a skipped step never
/// aborts the rest of the generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedLocation {
    /// The planet class the location was generated for.
    pub planet_class: String,
    /// Atmosphere description.
    pub atmosphere: Option<String>,
    /// Settlement presence, rolled region-aware.
    pub settlements: Option<String>,
    /// What the planet looks like from orbit.
    pub observed_from_space: Option<String>,
    /// A notable planetside feature.
    pub feature: Option<String>,
    /// The planet's life status.
    pub life: Option<String>,
    /// A planetside peril, gated by life status.
    pub peril: Option<String>,
    /// A planetside opportunity, gated by life status.
    pub opportunity: Option<String>,
}

impl GeneratedLocation {
    /// Start an empty location for a planet class.
    pub fn new(planet_class: impl Into<String>) -> Self {
        Self {
            planet_class: planet_class.into(),
            ..Self::default()
        }
    }

    /// Set (or re-roll) the life result.
    ///
    /// Peril and opportunity are gated by life status, so changing life
    /// invalidates both.
    pub fn set_life(&mut self, life: impl Into<String>) {
        self.life = Some(life.into());
        self.peril = None;
        self.opportunity = None;
    }

    /// Life status of the rolled life result, or `None` if not yet rolled.
    pub fn life_status(&self) -> Option<bool> {
        self.life.as_deref().map(has_life)
    }
}

/// Generate a full planetside location.
///
/// The planet class is matched against category names with progressively
/// looser matching; each field is rolled independently in dependency
/// order, and steps whose oracle cannot be resolved are skipped.
pub fn generate_planet(
    ruleset: &RuleSet,
    planet_class: &str,
    region: &str,
    draws: &mut impl DrawSource,
) -> GeneratedLocation {
    let mut location = GeneratedLocation::new(planet_class);
    let Some(class_category) = ruleset.find_category_by_name(planet_class) else {
        return location;
    };

    location.atmosphere = roll_named(ruleset, class_category, "Atmosphere", region, draws);
    location.settlements = roll_named(ruleset, class_category, "Settlements", region, draws);
    location.observed_from_space =
        roll_named(ruleset, class_category, "Observed From Space", region, draws);
    location.feature = roll_named(ruleset, class_category, "Feature", region, draws);

    if let Some(life) = roll_named(ruleset, class_category, "Life", region, draws) {
        location.set_life(life);
    }
    let life_status = location.life_status();

    location.peril = roll_life_gated(ruleset, class_category, "Peril", life_status, region, draws);
    location.opportunity = roll_life_gated(
        ruleset,
        class_category,
        "Opportunity",
        life_status,
        region,
        draws,
    );
    location
}

/// Roll a named oracle within a category, skipping on any miss.
fn roll_named(
    ruleset: &RuleSet,
    category: &OracleCategory,
    oracle_name: &str,
    region: &str,
    draws: &mut impl DrawSource,
) -> Option<String> {
    let oracle = category.oracle_by_name(oracle_name)?;
    roll_oracle(ruleset, oracle, region, draws)
}

/// Roll a peril/opportunity oracle, preferring a class-local copy and
/// selecting the life variant of its table.
fn roll_life_gated(
    ruleset: &RuleSet,
    class_category: &OracleCategory,
    oracle_name: &str,
    life_status: Option<bool>,
    region: &str,
    draws: &mut impl DrawSource,
) -> Option<String> {
    let oracle = class_category
        .oracle_by_name(oracle_name)
        .or_else(|| ruleset.find_oracle_by_name(oracle_name).map(|(_, o)| o))?;
    let target = life_variant(oracle, life_status).unwrap_or(oracle);
    roll_oracle(ruleset, target, region, draws)
}

/// Pick the life-status variant among an oracle's nested sub-oracles.
///
/// Variants are matched by name substring ("Lifebearing" vs "Lifeless"
/// in the dataset); when no life-specific variant exists the first
/// sub-oracle stands in. Oracles without children select themselves.
fn life_variant(oracle: &Oracle, life_status: Option<bool>) -> Option<&Oracle> {
    if oracle.nested.is_empty() {
        return None;
    }
    let wanted = life_status.and_then(|alive| {
        oracle.nested.iter().find(|child| {
            let name = child.name.to_lowercase();
            if alive {
                name.contains("life") && !name.contains("lifeless")
            } else {
                name.contains("lifeless") || name.contains("none")
            }
        })
    });
    wanted.or_else(|| oracle.nested.first())
}

fn roll_oracle(
    ruleset: &RuleSet,
    oracle: &Oracle,
    region: &str,
    draws: &mut impl DrawSource,
) -> Option<String> {
    let rows = resolve_table(ruleset, oracle, Some(region))?;
    match roll_on_table(rows, draws)? {
        TableRoll::Hit { result, .. } => Some(result),
        TableRoll::NoMatchingRow { .. } => None,
    }
}
