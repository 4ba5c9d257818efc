//! The oracle identifier codec.
//!
//! Navigation state addresses the oracle tree with flat, hyphen-delimited
//! string tokens. This module is the single chokepoint converting between
//! that external string form and the structured [`OracleLocator`] /
//! [`NavTarget`] forms — all internal logic operates on the structured
//! form only.
//!
//! Token grammar, most specific first:
//!
//! ```text
//! oracle-detail-deep-table-<cat>-<sub>-<subsub>-<oracle>   deep, table view
//! oracle-detail-deep-<cat>-<sub>-<subsub>-<oracle>         deep, detail view
//! oracle-detail-table-<cat>-<sub>-<oracle>                 sub, table view
//! oracle-detail-<cat>-<sub>-<oracle>                       sub, detail view
//! oracle-table-<cat>-<oracle>                              direct, table view
//! oracle-<cat>-<oracle>                                    direct, detail view
//! oracle-category-<cat>                                    browse a category
//! oracle-sub-<cat>-<sub>                                   browse a subcategory
//! oracle-sub-sub-<cat>-<sub>-<subsub>                      browse a sub-subcategory
//! ```
//!
//! Decoding checks the most-qualified patterns first; a deep-table token
//! starts with `oracle-detail-` and would otherwise be misread as a
//! sub-depth detail token. Anything unmatched decodes to
//! [`NavTarget::Unknown`], never a silent default.

use serde::{Deserialize, Serialize};

/// How deep in the category tree an oracle sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OracleDepth {
    /// Directly under a top-level category.
    Direct,
    /// Under a second-level subcategory.
    Sub,
    /// Under a third-level sub-subcategory.
    Deep,
}

/// Which view of an oracle a token addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OracleView {
    /// The oracle's description page.
    Detail,
    /// The oracle's rollable table page.
    Table,
}

/// A structured position in the oracle tree.
///
/// `sub` is present exactly when depth is at least [`OracleDepth::Sub`],
/// and `sub_sub` exactly when depth is [`OracleDepth::Deep`]; the
/// constructors maintain this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OracleLocator {
    /// Tree depth of the containing category.
    pub depth: OracleDepth,
    /// Top-level category index.
    pub category: usize,
    /// Second-level subcategory index, for sub and deep depths.
    pub sub: Option<usize>,
    /// Third-level sub-subcategory index, for deep depth.
    pub sub_sub: Option<usize>,
    /// Oracle index within the containing category.
    pub oracle: usize,
    /// Addressed view variant.
    pub view: OracleView,
}

impl OracleLocator {
    /// Locate an oracle directly under a top-level category.
    pub fn direct(category: usize, oracle: usize, view: OracleView) -> Self {
        Self {
            depth: OracleDepth::Direct,
            category,
            sub: None,
            sub_sub: None,
            oracle,
            view,
        }
    }

    /// Locate an oracle under a second-level subcategory.
    pub fn sub(category: usize, sub: usize, oracle: usize, view: OracleView) -> Self {
        Self {
            depth: OracleDepth::Sub,
            category,
            sub: Some(sub),
            sub_sub: None,
            oracle,
            view,
        }
    }

    /// Locate an oracle under a third-level sub-subcategory.
    pub fn deep(
        category: usize,
        sub: usize,
        sub_sub: usize,
        oracle: usize,
        view: OracleView,
    ) -> Self {
        Self {
            depth: OracleDepth::Deep,
            category,
            sub: Some(sub),
            sub_sub: Some(sub_sub),
            oracle,
            view,
        }
    }

    /// The same position addressed through the other view variant.
    pub fn with_view(mut self, view: OracleView) -> Self {
        self.view = view;
        self
    }

    /// Encode this locator as its flat token form.
    pub fn encode(&self) -> String {
        let c = self.category;
        let o = self.oracle;
        match (self.depth, self.view) {
            (OracleDepth::Direct, OracleView::Detail) => format!("oracle-{c}-{o}"),
            (OracleDepth::Direct, OracleView::Table) => format!("oracle-table-{c}-{o}"),
            (OracleDepth::Sub, OracleView::Detail) => {
                let s = self.sub.unwrap_or(0);
                format!("oracle-detail-{c}-{s}-{o}")
            }
            (OracleDepth::Sub, OracleView::Table) => {
                let s = self.sub.unwrap_or(0);
                format!("oracle-detail-table-{c}-{s}-{o}")
            }
            (OracleDepth::Deep, OracleView::Detail) => {
                let s = self.sub.unwrap_or(0);
                let ss = self.sub_sub.unwrap_or(0);
                format!("oracle-detail-deep-{c}-{s}-{ss}-{o}")
            }
            (OracleDepth::Deep, OracleView::Table) => {
                let s = self.sub.unwrap_or(0);
                let ss = self.sub_sub.unwrap_or(0);
                format!("oracle-detail-deep-table-{c}-{s}-{ss}-{o}")
            }
        }
    }
}

impl std::fmt::Display for OracleLocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.encode())
    }
}

/// What a navigation token addresses: a browse node, an oracle, or nothing
/// recognizable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavTarget {
    /// Browse a top-level category.
    Category {
        /// Top-level category index.
        category: usize,
    },
    /// Browse a second-level subcategory.
    Subcategory {
        /// Top-level category index.
        category: usize,
        /// Subcategory index.
        sub: usize,
    },
    /// Browse a third-level sub-subcategory.
    SubSubcategory {
        /// Top-level category index.
        category: usize,
        /// Subcategory index.
        sub: usize,
        /// Sub-subcategory index.
        sub_sub: usize,
    },
    /// View or roll a specific oracle.
    Oracle(OracleLocator),
    /// The token matched no known grammar case.
    Unknown,
}

impl NavTarget {
    /// Encode this target as its token form, or `None` for [`Self::Unknown`].
    pub fn encode(&self) -> Option<String> {
        match self {
            Self::Category { category } => Some(format!("oracle-category-{category}")),
            Self::Subcategory { category, sub } => Some(format!("oracle-sub-{category}-{sub}")),
            Self::SubSubcategory {
                category,
                sub,
                sub_sub,
            } => Some(format!("oracle-sub-sub-{category}-{sub}-{sub_sub}")),
            Self::Oracle(locator) => Some(locator.encode()),
            Self::Unknown => None,
        }
    }
}

/// Decode a navigation token into its structured form.
pub fn decode(token: &str) -> NavTarget {
    let segments: Vec<&str> = token.split('-').collect();
    try_decode(&segments).unwrap_or(NavTarget::Unknown)
}

fn try_decode(segments: &[&str]) -> Option<NavTarget> {
    let idx = |s: &str| s.parse::<usize>().ok();
    // Literal-segment patterns first; within the same segment count the
    // slice patterns disambiguate by literal words, and index parsing
    // rejects reserved words ("sub", "detail", "table", "category") in
    // numeric positions.
    match segments {
        ["oracle", "detail", "deep", "table", c, s, ss, o] => Some(NavTarget::Oracle(
            OracleLocator::deep(idx(c)?, idx(s)?, idx(ss)?, idx(o)?, OracleView::Table),
        )),
        ["oracle", "detail", "deep", c, s, ss, o] => Some(NavTarget::Oracle(
            OracleLocator::deep(idx(c)?, idx(s)?, idx(ss)?, idx(o)?, OracleView::Detail),
        )),
        ["oracle", "detail", "table", c, s, o] => Some(NavTarget::Oracle(OracleLocator::sub(
            idx(c)?,
            idx(s)?,
            idx(o)?,
            OracleView::Table,
        ))),
        ["oracle", "sub", "sub", c, s, ss] => Some(NavTarget::SubSubcategory {
            category: idx(c)?,
            sub: idx(s)?,
            sub_sub: idx(ss)?,
        }),
        ["oracle", "detail", c, s, o] => Some(NavTarget::Oracle(OracleLocator::sub(
            idx(c)?,
            idx(s)?,
            idx(o)?,
            OracleView::Detail,
        ))),
        ["oracle", "table", c, o] => Some(NavTarget::Oracle(OracleLocator::direct(
            idx(c)?,
            idx(o)?,
            OracleView::Table,
        ))),
        ["oracle", "sub", c, s] => Some(NavTarget::Subcategory {
            category: idx(c)?,
            sub: idx(s)?,
        }),
        ["oracle", "category", c] => Some(NavTarget::Category { category: idx(c)? }),
        ["oracle", c, o] => Some(NavTarget::Oracle(OracleLocator::direct(
            idx(c)?,
            idx(o)?,
            OracleView::Detail,
        ))),
        _ => None,
    }
}
