//! Sector name generation.

use vf_core::RuleSet;

use crate::dice::DrawSource;
use crate::resolve::resolve_table;
use crate::roll::roll_on_table;

/// Name of the fixed sector-name oracle.
pub const SECTOR_NAME_ORACLE: &str = "Sector Name";
/// Name of its prefix sub-oracle.
pub const SECTOR_PREFIX: &str = "Prefix";
/// Name of its suffix sub-oracle.
pub const SECTOR_SUFFIX: &str = "Suffix";

/// Generate a two-part sector name ("<prefix> <suffix>").
///
/// Locates the fixed "Sector Name" oracle, rolls its prefix and suffix
/// tables independently, and joins the results with a single space.
/// Returns `None` if either sub-table is unreachable.
pub fn generate_sector_name(ruleset: &RuleSet, draws: &mut impl DrawSource) -> Option<String> {
    let (_, oracle) = ruleset.find_oracle_by_name(SECTOR_NAME_ORACLE)?;
    let prefix = roll_part(ruleset, oracle, SECTOR_PREFIX, draws)?;
    let suffix = roll_part(ruleset, oracle, SECTOR_SUFFIX, draws)?;
    Some(format!("{prefix} {suffix}"))
}

fn roll_part(
    ruleset: &RuleSet,
    oracle: &vf_core::Oracle,
    part: &str,
    draws: &mut impl DrawSource,
) -> Option<String> {
    let sub = oracle.nested_by_name(part)?;
    let rows = resolve_table(ruleset, sub, None)?;
    roll_on_table(rows, draws)?.result().map(str::to_string)
}
