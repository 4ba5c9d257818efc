//! Rolling on resolved tables.
//!
//! The roller is a pure mapping from a d100 draw to a row: rows that
//! cannot be addressed by a d100 value are filtered out before matching,
//! and a draw that lands in a coverage gap yields a distinct
//! [`TableRoll::NoMatchingRow`] sentinel rather than looking like an
//! empty table. Rolling never follows links inside result text —
//! navigating to a referenced table is a separate user action.

use serde::{Deserialize, Serialize};

use vf_core::{Oracle, RuleSet, TableRow, TableVariant};

use crate::dice::DrawSource;
use crate::resolve::resolve_column_table;

/// The outcome of one d100 roll against a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableRoll {
    /// The draw landed on a row.
    Hit {
        /// The d100 value drawn.
        roll: u32,
        /// The matched row's result text.
        result: String,
    },
    /// The draw landed in a gap of the table's coverage.
    NoMatchingRow {
        /// The d100 value drawn.
        roll: u32,
    },
}

impl TableRoll {
    /// The d100 value that was drawn.
    pub fn roll(&self) -> u32 {
        match self {
            Self::Hit { roll, .. } | Self::NoMatchingRow { roll } => *roll,
        }
    }

    /// The matched result text, or `None` for a coverage gap.
    pub fn result(&self) -> Option<&str> {
        match self {
            Self::Hit { result, .. } => Some(result),
            Self::NoMatchingRow { .. } => None,
        }
    }
}

/// Match a forced d100 value against a row set.
///
/// Returns the first valid row, in table order, whose bounds contain the
/// value.
pub fn match_row(rows: &[TableRow], value: u32) -> Option<&TableRow> {
    rows.iter().find(|row| row.contains(value))
}

/// Roll once on a row set.
///
/// Returns `None` when the set has no valid rows at all; otherwise draws
/// a d100 and returns a [`TableRoll`].
pub fn roll_on_table(rows: &[TableRow], draws: &mut impl DrawSource) -> Option<TableRoll> {
    if !rows.iter().any(TableRow::is_valid) {
        return None;
    }
    let roll = draws.d100();
    Some(match match_row(rows, roll) {
        Some(row) => TableRoll::Hit {
            roll,
            result: row.result.clone(),
        },
        None => TableRoll::NoMatchingRow { roll },
    })
}

/// One column's outcome within a shared-draw multi-result roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRoll {
    /// The column's display label.
    pub label: String,
    /// The column's outcome for the shared draw.
    pub outcome: TableRoll,
}

/// Roll a multi-result-column oracle: one draw, read across every column.
///
/// Columns whose source oracle cannot be resolved are skipped. Returns
/// `None` when the oracle is not a multi-result-column shape.
pub fn roll_result_columns(
    ruleset: &RuleSet,
    oracle: &Oracle,
    region_hint: Option<&str>,
    draws: &mut impl DrawSource,
) -> Option<Vec<ColumnRoll>> {
    let TableVariant::MultiResultColumn { columns } = &oracle.table else {
        return None;
    };
    let roll = draws.d100();
    let outcomes = columns
        .iter()
        .filter_map(|column| {
            let rows = resolve_column_table(ruleset, oracle, column, region_hint)?;
            let outcome = match match_row(rows, roll) {
                Some(row) => TableRoll::Hit {
                    roll,
                    result: row.result.clone(),
                },
                None => TableRoll::NoMatchingRow { roll },
            };
            Some(ColumnRoll {
                label: column.label.clone(),
                outcome,
            })
        })
        .collect();
    Some(outcomes)
}

/// Roll one column of a multi-roll-column oracle independently.
///
/// The column is selected by label, case-insensitively. Returns `None`
/// when the oracle has no such column or its table is unreachable or
/// empty.
pub fn roll_column(
    ruleset: &RuleSet,
    oracle: &Oracle,
    label: &str,
    region_hint: Option<&str>,
    draws: &mut impl DrawSource,
) -> Option<TableRoll> {
    let column = oracle
        .table
        .columns()?
        .iter()
        .find(|c| c.label.eq_ignore_ascii_case(label))?;
    let rows = resolve_column_table(ruleset, oracle, column, region_hint)?;
    roll_on_table(rows, draws)
}
