//! Rollable tables and their structural variants.
//!
//! The Starforged dataset is irregular: some oracles carry a flat d100
//! table, some key their tables by region, some only wrap named
//! sub-oracles, and some spread one logical oracle across several result
//! or roll columns. The closed [`TableVariant`] union captures all five
//! shapes so resolution is a single exhaustive match instead of chained
//! optional-field probing.

use serde::{Deserialize, Serialize};

/// A single row of a rollable table.
///
/// A row is addressable by a d100 value when it carries a `floor`/`ceiling`
/// pair, or a single `chance` value (a point match where chance acts as
/// both bounds). Rows with neither are display-only and are excluded from
/// roll resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    /// Lowest d100 value this row matches, inclusive.
    #[serde(default)]
    pub floor: Option<u32>,
    /// Highest d100 value this row matches, inclusive.
    #[serde(default)]
    pub ceiling: Option<u32>,
    /// Point-match value used when floor/ceiling are absent.
    #[serde(default)]
    pub chance: Option<u32>,
    /// The narrative result text.
    pub result: String,
}

impl TableRow {
    /// Create a row spanning `floor..=ceiling`.
    pub fn new(floor: u32, ceiling: u32, result: impl Into<String>) -> Self {
        Self {
            floor: Some(floor),
            ceiling: Some(ceiling),
            chance: None,
            result: result.into(),
        }
    }

    /// Create a point-match row at a single `chance` value.
    pub fn point(chance: u32, result: impl Into<String>) -> Self {
        Self {
            floor: None,
            ceiling: None,
            chance: Some(chance),
            result: result.into(),
        }
    }

    /// Effective match bounds, or `None` if the row is not rollable.
    ///
    /// Explicit floor/ceiling win; `chance` fills only the missing bound.
    pub fn bounds(&self) -> Option<(u32, u32)> {
        let floor = self.floor.or(self.chance)?;
        let ceiling = self.ceiling.or(self.chance)?;
        Some((floor, ceiling))
    }

    /// Returns true if this row can participate in roll resolution.
    pub fn is_valid(&self) -> bool {
        self.bounds().is_some()
    }

    /// Returns true if a d100 value lands on this row.
    pub fn contains(&self, value: u32) -> bool {
        self.bounds()
            .is_some_and(|(floor, ceiling)| floor <= value && value <= ceiling)
    }
}

/// One region's table within a region-keyed oracle.
///
/// Regions are kept as an ordered list rather than a map so the
/// first-defined-region fallback follows dataset insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionTable {
    /// Region label, e.g. "Terminus" or "Outlands".
    pub region: String,
    /// The rows rolled when playing in this region.
    pub rows: Vec<TableRow>,
}

/// One column of a multi-column oracle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSpec {
    /// Display label for the column, e.g. "In Space" or "Name".
    pub label: String,
    /// Identifier of the nested oracle whose table backs this column.
    pub source_oracle_id: String,
}

/// The five structural shapes an oracle's table data can take.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TableVariant {
    /// A single flat d100 table.
    Direct {
        /// The rollable rows.
        rows: Vec<TableRow>,
    },
    /// Alternate tables selected by play region.
    RegionKeyed {
        /// Region tables in dataset insertion order.
        regions: Vec<RegionTable>,
    },
    /// No table of its own; the rollable tables live on the oracle's
    /// nested children (e.g. paired yes/no sub-oracles).
    NestedChoice,
    /// One die roll read across several parallel result columns, each
    /// backed by its own nested oracle.
    MultiResultColumn {
        /// The parallel result columns.
        columns: Vec<ColumnSpec>,
    },
    /// Several independently rolled columns representing mutually
    /// exclusive contexts (e.g. "in space" vs "on land").
    MultiRollColumn {
        /// The independent columns.
        columns: Vec<ColumnSpec>,
    },
}

impl TableVariant {
    /// Returns the column specs for either multi-column shape, or `None`.
    pub fn columns(&self) -> Option<&[ColumnSpec]> {
        match self {
            Self::MultiResultColumn { columns } | Self::MultiRollColumn { columns } => {
                Some(columns)
            }
            Self::Direct { .. } | Self::RegionKeyed { .. } | Self::NestedChoice => None,
        }
    }
}
