//! Starforged action-roll mechanics for Voidfarer.
//!
//! Provides the roll-relevant character sheet (five stats and the
//! momentum track) and the action-roll engine: outcome classification,
//! match detection, the "Pay the Price" trigger, and momentum burning.

pub mod action;
pub mod error;
pub mod sheet;

pub use action::{ActionOutcome, ActionRoll, make_action_roll};
pub use error::{MechError, MechResult};
pub use sheet::{Character, Momentum, Stat};
