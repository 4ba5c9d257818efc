//! The oracle content tree: categories, sub-categories, and oracles.

use serde::{Deserialize, Serialize};

use crate::table::TableVariant;

/// A named random table (or family of tables) producing narrative content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Oracle {
    /// Stable identifier from the dataset.
    pub id: String,
    /// Display name, e.g. "Planetside Peril".
    pub name: String,
    /// Optional descriptive text (markdown in the dataset, opaque here).
    #[serde(default)]
    pub description: Option<String>,
    /// The oracle's table data in one of the five structural shapes.
    pub table: TableVariant,
    /// Nested sub-oracles (column sources, yes/no pairs, life variants).
    #[serde(default)]
    pub nested: Vec<Oracle>,
}

impl Oracle {
    /// Find a nested sub-oracle by its dataset identifier.
    pub fn nested_by_id(&self, id: &str) -> Option<&Oracle> {
        self.nested.iter().find(|o| o.id == id)
    }

    /// Find a nested sub-oracle by name, case-insensitively.
    pub fn nested_by_name(&self, name: &str) -> Option<&Oracle> {
        self.nested
            .iter()
            .find(|o| o.name.eq_ignore_ascii_case(name))
    }
}

/// A grouping node in the oracle tree.
///
/// Categories may contain oracles, further subcategories, or both; the
/// observed dataset nests up to three levels deep (category → sub →
/// sub-sub).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OracleCategory {
    /// Stable identifier from the dataset.
    pub id: String,
    /// Display name, e.g. "Planets" or "Ice World".
    pub name: String,
    /// Optional descriptive text.
    #[serde(default)]
    pub description: Option<String>,
    /// Oracles directly under this category.
    #[serde(default)]
    pub oracles: Vec<Oracle>,
    /// Nested subcategories.
    #[serde(default)]
    pub subcategories: Vec<OracleCategory>,
}

impl OracleCategory {
    /// Find an oracle in this category by name, case-insensitively.
    pub fn oracle_by_name(&self, name: &str) -> Option<&Oracle> {
        self.oracles
            .iter()
            .find(|o| o.name.eq_ignore_ascii_case(name))
    }

    /// Number of entries shown for this category in a browse list.
    ///
    /// Oracles count first; a category with no oracles of its own counts
    /// its subcategories instead; an empty category counts 0.
    pub fn entry_count(&self) -> usize {
        if !self.oracles.is_empty() {
            self.oracles.len()
        } else {
            self.subcategories.len()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{TableRow, TableVariant};

    fn leaf(id: &str, name: &str) -> Oracle {
        Oracle {
            id: id.to_string(),
            name: name.to_string(),
            description: None,
            table: TableVariant::Direct {
                rows: vec![TableRow::new(1, 100, "x")],
            },
            nested: Vec::new(),
        }
    }

    #[test]
    fn nested_lookup_by_id_and_name() {
        let mut parent = leaf("parent", "Parent");
        parent.nested = vec![leaf("child-a", "Almost Certain"), leaf("child-b", "Unlikely")];

        assert_eq!(parent.nested_by_id("child-b").unwrap().name, "Unlikely");
        assert!(parent.nested_by_id("child-c").is_none());
        assert_eq!(parent.nested_by_name("almost certain").unwrap().id, "child-a");
    }

    #[test]
    fn oracle_by_name_is_case_insensitive() {
        let category = OracleCategory {
            id: "cat".to_string(),
            name: "Planets".to_string(),
            description: None,
            oracles: vec![leaf("atmo", "Atmosphere")],
            subcategories: Vec::new(),
        };
        assert!(category.oracle_by_name("ATMOSPHERE").is_some());
        assert!(category.oracle_by_name("Settlements").is_none());
    }
}
