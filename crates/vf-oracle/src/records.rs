//! The session roll log.
//!
//! Each "roll oracle" action produces a [`RollRecord`] stored under the
//! oracle's locator token (plus a column label for multi-column oracles).
//! Re-rolling the same key overwrites the previous record; nothing is
//! cleared implicitly — records live until the user rolls again or the
//! session ends.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::roll::TableRoll;

/// The key a roll record is stored under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordKey {
    /// The oracle's locator token.
    pub token: String,
    /// Column label for multi-column oracles.
    pub column: Option<String>,
}

impl RecordKey {
    /// Key for a single-table oracle.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            column: None,
        }
    }

    /// Key for one column of a multi-column oracle.
    pub fn with_column(token: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            column: Some(column.into()),
        }
    }
}

impl std::fmt::Display for RecordKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.column {
            Some(column) => write!(f, "{}#{column}", self.token),
            None => write!(f, "{}", self.token),
        }
    }
}

/// One remembered oracle roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollRecord {
    /// The d100 value rolled (1-100).
    pub roll: u32,
    /// The result text shown to the player.
    pub result: String,
    /// When the roll happened.
    pub at: DateTime<Utc>,
}

impl RollRecord {
    /// Create a record stamped with the current time.
    pub fn new(roll: u32, result: impl Into<String>) -> Self {
        Self {
            roll,
            result: result.into(),
            at: Utc::now(),
        }
    }

    /// Convert a table roll into a record; coverage gaps produce none.
    pub fn from_table_roll(outcome: &TableRoll) -> Option<Self> {
        match outcome {
            TableRoll::Hit { roll, result } => Some(Self::new(*roll, result.clone())),
            TableRoll::NoMatchingRow { .. } => None,
        }
    }
}

/// All roll records for the active session, keyed by locator and column.
///
/// Records are stored under the key's string form (`token` or
/// `token#column`) so the log serializes as a plain JSON object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RollLog {
    records: HashMap<String, RollRecord>,
}

impl RollLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a record, overwriting any prior record at the same key.
    pub fn record(&mut self, key: &RecordKey, record: RollRecord) {
        self.records.insert(key.to_string(), record);
    }

    /// Look up the record for a key.
    pub fn get(&self, key: &RecordKey) -> Option<&RollRecord> {
        self.records.get(&key.to_string())
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no rolls have been recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_string_forms() {
        assert_eq!(RecordKey::new("oracle-0-1").to_string(), "oracle-0-1");
        assert_eq!(
            RecordKey::with_column("oracle-0-1", "In Space").to_string(),
            "oracle-0-1#In Space"
        );
    }

    #[test]
    fn record_overwrites_same_key() {
        let mut log = RollLog::new();
        let key = RecordKey::new("oracle-0-1");
        log.record(&key, RollRecord::new(10, "first"));
        log.record(&key, RollRecord::new(90, "second"));
        assert_eq!(log.len(), 1);
        assert_eq!(log.get(&key).unwrap().result, "second");
        assert_eq!(log.get(&key).unwrap().roll, 90);
    }

    #[test]
    fn column_keys_are_distinct() {
        let mut log = RollLog::new();
        log.record(
            &RecordKey::with_column("oracle-0-1", "In Space"),
            RollRecord::new(10, "space"),
        );
        log.record(
            &RecordKey::with_column("oracle-0-1", "On Land"),
            RollRecord::new(20, "land"),
        );
        log.record(&RecordKey::new("oracle-0-1"), RollRecord::new(30, "plain"));
        assert_eq!(log.len(), 3);
        assert_eq!(
            log.get(&RecordKey::with_column("oracle-0-1", "In Space"))
                .unwrap()
                .result,
            "space"
        );
    }

    #[test]
    fn from_table_roll_only_for_hits() {
        let hit = TableRoll::Hit {
            roll: 42,
            result: "something".to_string(),
        };
        let record = RollRecord::from_table_roll(&hit).unwrap();
        assert_eq!(record.roll, 42);
        assert_eq!(record.result, "something");
        assert!(RollRecord::from_table_roll(&TableRoll::NoMatchingRow { roll: 42 }).is_none());
    }

    #[test]
    fn serde_round_trip() {
        let mut log = RollLog::new();
        log.record(&RecordKey::new("oracle-1-2"), RollRecord::new(55, "result"));
        let json = serde_json::to_string(&log).unwrap();
        let back: RollLog = serde_json::from_str(&json).unwrap();
        assert_eq!(back.get(&RecordKey::new("oracle-1-2")).unwrap().roll, 55);
    }
}
