//! Resolving locators to oracle nodes and oracles to rollable tables.
//!
//! Every oracle, whatever its structural shape, is reached through the
//! same two steps: a locator picks the node, then shape dispatch extracts
//! a rollable row set. A `None` table is not an error — the caller shows
//! a browse-children view instead of a roll button.

use vf_core::{ColumnSpec, Oracle, OracleCategory, RuleSet, TableRow, TableVariant};

use crate::locator::{OracleDepth, OracleLocator};

/// An oracle found in the tree, together with its containing category.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedOracle<'a> {
    /// The category the oracle lives under (the innermost one).
    pub category: &'a OracleCategory,
    /// The oracle itself.
    pub oracle: &'a Oracle,
}

/// Resolve a structured locator to its oracle node.
///
/// Returns `None` when any index along the path is out of range.
pub fn resolve_oracle<'a>(
    ruleset: &'a RuleSet,
    locator: &OracleLocator,
) -> Option<ResolvedOracle<'a>> {
    let category = match locator.depth {
        OracleDepth::Direct => ruleset.category(locator.category),
        OracleDepth::Sub => ruleset.subcategory(locator.category, locator.sub?),
        OracleDepth::Deep => {
            ruleset.sub_subcategory(locator.category, locator.sub?, locator.sub_sub?)
        }
    }?;
    let oracle = category.oracles.get(locator.oracle)?;
    Some(ResolvedOracle { category, oracle })
}

/// Extract the rollable row set for an oracle, if it has one.
///
/// Dispatch order: a direct table wins; region-keyed tables go through
/// the accessor's region fallback; a nested-choice oracle recurses into
/// the child whose name matches the region hint, else its first child.
/// Multi-column shapes have no single table and resolve per column via
/// [`resolve_column_table`].
pub fn resolve_table<'a>(
    ruleset: &RuleSet,
    oracle: &'a Oracle,
    region_hint: Option<&str>,
) -> Option<&'a [TableRow]> {
    match &oracle.table {
        TableVariant::Direct { rows } => Some(rows),
        TableVariant::RegionKeyed { .. } => {
            ruleset.find_table_for_region(oracle, region_hint.unwrap_or(vf_core::DEFAULT_REGION))
        }
        TableVariant::NestedChoice => {
            let child = region_hint
                .and_then(|hint| oracle.nested_by_name(hint))
                .or_else(|| oracle.nested.first())?;
            resolve_table(ruleset, child, region_hint)
        }
        TableVariant::MultiResultColumn { .. } | TableVariant::MultiRollColumn { .. } => None,
    }
}

/// Resolve one column of a multi-column oracle to its rollable rows.
///
/// The column's source oracle is looked up among the oracle's nested
/// children by identifier equality, then resolved like any other oracle.
pub fn resolve_column_table<'a>(
    ruleset: &RuleSet,
    oracle: &'a Oracle,
    column: &ColumnSpec,
    region_hint: Option<&str>,
) -> Option<&'a [TableRow]> {
    let source = oracle.nested_by_id(&column.source_oracle_id)?;
    resolve_table(ruleset, source, region_hint)
}
