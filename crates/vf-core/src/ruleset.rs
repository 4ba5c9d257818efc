//! The rules dataset accessor.
//!
//! Wraps the static oracle forest and exposes uniform lookup by tree
//! index or by name. All index lookups return `Option` — out-of-range
//! positions are an expected consequence of browsing a large, irregular
//! dataset and are never an error.

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::oracle::{Oracle, OracleCategory};
use crate::table::{TableRow, TableVariant};

/// The canonical fallback region for region-keyed tables.
pub const DEFAULT_REGION: &str = "Terminus";

/// Normalize a region label to its dataset capitalization.
///
/// Region labels arrive from UI state in whatever casing the caller used
/// ("terminus", "OUTLANDS"); the dataset keys them title-cased. All region
/// lookups funnel through this one normalization.
pub fn normalize_region(label: &str) -> String {
    let mut chars = label.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// The full oracle ruleset: a read-only forest of categories.
///
/// Loaded once at startup and shared freely for reads; nothing in the
/// core mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleSet {
    /// Top-level oracle categories.
    #[serde(default)]
    pub categories: Vec<OracleCategory>,
}

impl RuleSet {
    /// Create a ruleset from an already-built category forest.
    pub fn new(categories: Vec<OracleCategory>) -> Self {
        Self { categories }
    }

    /// Parse a ruleset from dataset JSON.
    pub fn from_json_str(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Get a top-level category by index.
    pub fn category(&self, index: usize) -> Option<&OracleCategory> {
        self.categories.get(index)
    }

    /// Get a second-level category by indices.
    pub fn subcategory(&self, index: usize, sub: usize) -> Option<&OracleCategory> {
        self.category(index)?.subcategories.get(sub)
    }

    /// Get a third-level category by indices.
    pub fn sub_subcategory(
        &self,
        index: usize,
        sub: usize,
        sub_sub: usize,
    ) -> Option<&OracleCategory> {
        self.subcategory(index, sub)?.subcategories.get(sub_sub)
    }

    /// All categories in the forest, depth-first.
    pub fn all_categories(&self) -> Vec<&OracleCategory> {
        fn walk<'a>(category: &'a OracleCategory, out: &mut Vec<&'a OracleCategory>) {
            out.push(category);
            for sub in &category.subcategories {
                walk(sub, out);
            }
        }
        let mut out = Vec::new();
        for category in &self.categories {
            walk(category, &mut out);
        }
        out
    }

    /// Find a category anywhere in the forest whose name matches a planet
    /// class, loosest match last.
    ///
    /// Matching passes: exact (case-insensitive); then with the trailing
    /// class-suffix word stripped from either side ("Ice World" matches
    /// "Ice"); then case-insensitive substring in either direction.
    pub fn find_category_by_name(&self, class_name: &str) -> Option<&OracleCategory> {
        let class = class_name.trim();
        let all = self.all_categories();

        if let Some(found) = all.iter().find(|c| c.name.eq_ignore_ascii_case(class)) {
            return Some(found);
        }

        let stripped_class = strip_last_word(class);
        if let Some(found) = all.iter().find(|c| {
            c.name.eq_ignore_ascii_case(stripped_class)
                || strip_last_word(&c.name).eq_ignore_ascii_case(class)
        }) {
            return Some(found);
        }

        let class_lower = class.to_lowercase();
        all.into_iter().find(|c| {
            let name_lower = c.name.to_lowercase();
            name_lower.contains(&class_lower) || class_lower.contains(&name_lower)
        })
    }

    /// Find an oracle anywhere in the forest by name, case-insensitively.
    ///
    /// Returns the oracle together with its containing category, in
    /// depth-first order (first match wins).
    pub fn find_oracle_by_name(&self, name: &str) -> Option<(&OracleCategory, &Oracle)> {
        self.all_categories().into_iter().find_map(|category| {
            category.oracle_by_name(name).map(|oracle| (category, oracle))
        })
    }

    /// Look up the table a region-keyed oracle uses for a given region.
    ///
    /// Falls back to [`DEFAULT_REGION`], then to the first region in
    /// dataset insertion order. Returns `None` for oracles that are not
    /// region-keyed or whose mapping is empty.
    pub fn find_table_for_region<'a>(
        &self,
        oracle: &'a Oracle,
        region: &str,
    ) -> Option<&'a [TableRow]> {
        let TableVariant::RegionKeyed { regions } = &oracle.table else {
            return None;
        };
        let wanted = normalize_region(region);
        regions
            .iter()
            .find(|r| r.region == wanted)
            .or_else(|| regions.iter().find(|r| r.region == DEFAULT_REGION))
            .or_else(|| regions.first())
            .map(|r| r.rows.as_slice())
    }
}

fn strip_last_word(name: &str) -> &str {
    match name.trim_end().rsplit_once(char::is_whitespace) {
        Some((head, _)) => head.trim_end(),
        None => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::RegionTable;

    fn direct_oracle(id: &str, name: &str) -> Oracle {
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

    fn category(name: &str, oracles: Vec<Oracle>, subs: Vec<OracleCategory>) -> OracleCategory {
        OracleCategory {
            id: name.to_lowercase().replace(' ', "-"),
            name: name.to_string(),
            description: None,
            oracles,
            subcategories: subs,
        }
    }

    fn sample_ruleset() -> RuleSet {
        RuleSet::new(vec![
            category(
                "Planets",
                vec![direct_oracle("peril", "Peril")],
                vec![
                    category("Ice World", vec![direct_oracle("atmo", "Atmosphere")], vec![]),
                    category("Jungle World", vec![], vec![]),
                ],
            ),
            category("Moves", vec![direct_oracle("ptp", "Pay the Price")], vec![]),
        ])
    }

    #[test]
    fn index_lookups_return_none_out_of_range() {
        let rs = sample_ruleset();
        assert!(rs.category(0).is_some());
        assert!(rs.category(99).is_none());
        assert_eq!(rs.subcategory(0, 1).unwrap().name, "Jungle World");
        assert!(rs.subcategory(0, 5).is_none());
        assert!(rs.sub_subcategory(0, 0, 0).is_none());
    }

    #[test]
    fn entry_count_prefers_oracles() {
        let rs = sample_ruleset();
        // "Planets" has one oracle, so subcategories don't count.
        assert_eq!(rs.category(0).unwrap().entry_count(), 1);
        // "Jungle World" has neither.
        assert_eq!(rs.subcategory(0, 1).unwrap().entry_count(), 0);
    }

    #[test]
    fn normalize_region_title_cases() {
        assert_eq!(normalize_region("terminus"), "Terminus");
        assert_eq!(normalize_region("OUTLANDS"), "Outlands");
        assert_eq!(normalize_region("  expanse "), "Expanse");
        assert_eq!(normalize_region(""), "");
    }

    #[test]
    fn region_lookup_with_fallbacks() {
        let oracle = Oracle {
            id: "settlements".to_string(),
            name: "Settlements".to_string(),
            description: None,
            table: TableVariant::RegionKeyed {
                regions: vec![
                    RegionTable {
                        region: "Terminus".to_string(),
                        rows: vec![TableRow::new(1, 100, "terminus row")],
                    },
                    RegionTable {
                        region: "Outlands".to_string(),
                        rows: vec![TableRow::new(1, 100, "outlands row")],
                    },
                ],
            },
            nested: Vec::new(),
        };
        let rs = RuleSet::new(Vec::new());

        let outlands = rs.find_table_for_region(&oracle, "outlands").unwrap();
        assert_eq!(outlands[0].result, "outlands row");

        // Unknown region falls back to Terminus.
        let void = rs.find_table_for_region(&oracle, "Void").unwrap();
        assert_eq!(void[0].result, "terminus row");
    }

    #[test]
    fn region_lookup_falls_back_to_first_without_terminus() {
        let oracle = Oracle {
            id: "o".to_string(),
            name: "O".to_string(),
            description: None,
            table: TableVariant::RegionKeyed {
                regions: vec![RegionTable {
                    region: "Expanse".to_string(),
                    rows: vec![TableRow::new(1, 100, "expanse row")],
                }],
            },
            nested: Vec::new(),
        };
        let rs = RuleSet::new(Vec::new());
        let rows = rs.find_table_for_region(&oracle, "Void").unwrap();
        assert_eq!(rows[0].result, "expanse row");
    }

    #[test]
    fn region_lookup_none_for_other_shapes() {
        let rs = RuleSet::new(Vec::new());
        let oracle = direct_oracle("d", "Direct");
        assert!(rs.find_table_for_region(&oracle, "Terminus").is_none());
    }

    #[test]
    fn find_category_exact_then_stripped_then_substring() {
        let rs = sample_ruleset();
        assert_eq!(rs.find_category_by_name("ice world").unwrap().name, "Ice World");
        // Stripped-word pass: "Ice World" with its suffix dropped matches "Ice".
        assert_eq!(rs.find_category_by_name("Ice").unwrap().name, "Ice World");
        assert_eq!(
            rs.find_category_by_name("Jungle").unwrap().name,
            "Jungle World"
        );
        assert!(rs.find_category_by_name("Gas Giant").is_none());
    }

    #[test]
    fn find_oracle_by_name_walks_the_forest() {
        let rs = sample_ruleset();
        let (category, oracle) = rs.find_oracle_by_name("pay the price").unwrap();
        assert_eq!(category.name, "Moves");
        assert_eq!(oracle.id, "ptp");
        let (category, _) = rs.find_oracle_by_name("Atmosphere").unwrap();
        assert_eq!(category.name, "Ice World");
    }

    #[test]
    fn from_json_round_trip() {
        let rs = sample_ruleset();
        let json = serde_json::to_string(&rs).unwrap();
        let back = RuleSet::from_json_str(&json).unwrap();
        assert_eq!(rs, back);
    }

    #[test]
    fn from_json_reports_dataset_unavailable() {
        let err = RuleSet::from_json_str("{not json").unwrap_err();
        assert!(err.to_string().starts_with("dataset unavailable"));
    }
}
