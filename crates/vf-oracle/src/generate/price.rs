//! The "Pay the Price" oracle consulted on certain miss outcomes.

use vf_core::RuleSet;

use crate::dice::DrawSource;
use crate::records::RollRecord;
use crate::resolve::resolve_table;
use crate::roll::roll_on_table;

/// Name of the category holding move oracles.
pub const MOVES_CATEGORY: &str = "Moves";
/// Name of the Pay the Price oracle, and the substring that triggers it
/// in a move's miss text.
pub const PAY_THE_PRICE: &str = "Pay the Price";

/// Roll the fixed "Pay the Price" oracle under the "Moves" category.
///
/// Returns `None` when the oracle is missing, its table is unreachable,
/// or the roll lands in a coverage gap.
pub fn roll_pay_the_price(ruleset: &RuleSet, draws: &mut impl DrawSource) -> Option<RollRecord> {
    let category = ruleset
        .all_categories()
        .into_iter()
        .find(|c| c.name.eq_ignore_ascii_case(MOVES_CATEGORY))?;
    let oracle = category.oracle_by_name(PAY_THE_PRICE)?;
    let rows = resolve_table(ruleset, oracle, None)?;
    RollRecord::from_table_roll(&roll_on_table(rows, draws)?)
}
