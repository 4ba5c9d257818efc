//! The character-sheet slice that interacts with rolls.
//!
//! Only stats and momentum matter to the roll engine; the rest of the
//! character sheet (assets, progress tracks, legacies) belongs to the
//! application shell.

use serde::{Deserialize, Serialize};

use crate::error::{MechError, MechResult};

/// The five Starforged character stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stat {
    /// Quickness, agility, and prowess at range.
    Edge,
    /// Courage, empathy, and loyalty.
    Heart,
    /// Physical strength and close-quarters fighting.
    Iron,
    /// Deception, stealth, and trickery.
    Shadow,
    /// Expertise, knowledge, and observation.
    Wits,
}

impl Stat {
    /// Parse a stat from a user-supplied string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "edge" => Some(Self::Edge),
            "heart" => Some(Self::Heart),
            "iron" => Some(Self::Iron),
            "shadow" => Some(Self::Shadow),
            "wits" => Some(Self::Wits),
            _ => None,
        }
    }

    /// All stats in sheet order.
    pub fn all() -> &'static [Self] {
        &[Self::Edge, Self::Heart, Self::Iron, Self::Shadow, Self::Wits]
    }
}

impl std::fmt::Display for Stat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Edge => write!(f, "Edge"),
            Self::Heart => write!(f, "Heart"),
            Self::Iron => write!(f, "Iron"),
            Self::Shadow => write!(f, "Shadow"),
            Self::Wits => write!(f, "Wits"),
        }
    }
}

/// The momentum track: a clamped resource burnable to replace a roll's
/// action score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Momentum {
    current: i32,
    max: i32,
    min: i32,
    reset: i32,
}

impl Momentum {
    /// Starting momentum track: 2, bounded -6..=10, reset floor 2.
    pub fn new() -> Self {
        Self {
            current: 2,
            max: 10,
            min: -6,
            reset: 2,
        }
    }

    /// Current momentum value.
    pub fn value(&self) -> i32 {
        self.current
    }

    /// The value momentum returns to after a burn.
    pub fn reset_floor(&self) -> i32 {
        self.reset
    }

    /// Maximum momentum (lowered by some assets; capped at 10).
    pub fn max(&self) -> i32 {
        self.max
    }

    /// Lower the maximum (and clamp the current value under it).
    pub fn set_max(&mut self, max: i32) {
        self.max = max.min(10);
        self.current = self.current.clamp(self.min, self.max);
    }

    /// Adjust momentum by a delta, clamping to bounds. Returns the new value.
    pub fn adjust(&mut self, delta: i32) -> i32 {
        self.current = (self.current + delta).clamp(self.min, self.max);
        self.current
    }

    /// Burn momentum: drop back to the reset floor.
    pub fn burn(&mut self) {
        self.current = self.reset;
    }
}

impl Default for Momentum {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Momentum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Momentum: {}/{}", self.current, self.max)
    }
}

/// A character's roll-relevant state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Character name.
    pub name: String,
    /// Edge stat value.
    pub edge: i32,
    /// Heart stat value.
    pub heart: i32,
    /// Iron stat value.
    pub iron: i32,
    /// Shadow stat value.
    pub shadow: i32,
    /// Wits stat value.
    pub wits: i32,
    /// The momentum track.
    pub momentum: Momentum,
}

impl Character {
    /// Create a character with the given stat array and fresh momentum.
    pub fn new(name: impl Into<String>, edge: i32, heart: i32, iron: i32, shadow: i32, wits: i32) -> Self {
        Self {
            name: name.into(),
            edge,
            heart,
            iron,
            shadow,
            wits,
            momentum: Momentum::new(),
        }
    }

    /// The value of a stat.
    pub fn stat_value(&self, stat: Stat) -> i32 {
        match stat {
            Stat::Edge => self.edge,
            Stat::Heart => self.heart,
            Stat::Iron => self.iron,
            Stat::Shadow => self.shadow,
            Stat::Wits => self.wits,
        }
    }

    /// Resolve a stat name from the UI boundary.
    pub fn stat_by_name(&self, name: &str) -> MechResult<(Stat, i32)> {
        let stat = Stat::parse(name).ok_or_else(|| MechError::UnknownStat(name.to_string()))?;
        Ok((stat, self.stat_value(stat)))
    }
}
