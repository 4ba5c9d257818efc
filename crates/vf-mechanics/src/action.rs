//! The action roll: action die + stat + adds vs. two challenge dice.
//!
//! An action roll moves through at most two states: rolled, then
//! optionally burned. Burning momentum replaces the action score with
//! the character's momentum against the *same* challenge dice, at most
//! once per roll.

use serde::{Deserialize, Serialize};

use vf_core::RuleSet;
use vf_oracle::dice::DrawSource;
use vf_oracle::generate::price::{PAY_THE_PRICE, roll_pay_the_price};
use vf_oracle::records::RollRecord;

use crate::sheet::{Character, Stat};

/// How an action roll resolved against the challenge dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionOutcome {
    /// The action score exceeded neither challenge die.
    Miss,
    /// The action score exceeded exactly one challenge die.
    WeakHit,
    /// The action score exceeded both challenge dice.
    StrongHit,
}

impl ActionOutcome {
    /// Outcome rank for upgrade comparisons (miss < weak < strong).
    fn rank(self) -> u8 {
        match self {
            Self::Miss => 0,
            Self::WeakHit => 1,
            Self::StrongHit => 2,
        }
    }
}

impl std::fmt::Display for ActionOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Miss => write!(f, "Miss"),
            Self::WeakHit => write!(f, "Weak Hit"),
            Self::StrongHit => write!(f, "Strong Hit"),
        }
    }
}

/// Classify a score against two challenge dice. Ties do not count as
/// exceeding.
fn classify(score: i32, challenge: (u32, u32)) -> ActionOutcome {
    let beats = [challenge.0, challenge.1]
        .iter()
        .filter(|&&die| score > die as i32)
        .count();
    match beats {
        2 => ActionOutcome::StrongHit,
        1 => ActionOutcome::WeakHit,
        _ => ActionOutcome::Miss,
    }
}

/// The full result of an action roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRoll {
    /// The stat the roll used.
    pub stat: Stat,
    /// The stat's value at roll time.
    pub stat_value: i32,
    /// Situational adds.
    pub adds: i32,
    /// The d6 action die.
    pub action_die: u32,
    /// `min(10, action die + stat + adds)`, floored at 0.
    pub action_score: i32,
    /// The two d10 challenge dice. Never re-rolled.
    pub challenge: (u32, u32),
    /// The classified outcome.
    pub outcome: ActionOutcome,
    /// True when the challenge dice match.
    pub is_match: bool,
    /// True once momentum has been burned on this roll.
    pub burned: bool,
    /// The "Pay the Price" result attached on a triggering miss.
    pub pay_the_price: Option<RollRecord>,
    /// The move's miss text, kept for burn re-evaluation.
    miss_text: Option<String>,
}

/// Make an action roll for a character.
///
/// Draws the d6 action die and two independent d10 challenge dice. When
/// the outcome is a miss and the move's miss text mentions
/// "Pay the Price", the fixed oracle is consulted and its result
/// attached.
pub fn make_action_roll(
    stat: Stat,
    adds: i32,
    character: &Character,
    miss_text: Option<&str>,
    ruleset: &RuleSet,
    draws: &mut impl DrawSource,
) -> ActionRoll {
    let action_die = draws.draw(6);
    let stat_value = character.stat_value(stat);
    let action_score = (action_die as i32 + stat_value + adds).clamp(0, 10);
    let challenge = (draws.draw(10), draws.draw(10));
    let outcome = classify(action_score, challenge);
    let pay_the_price = pay_the_price_if_triggered(outcome, miss_text, ruleset, draws);

    ActionRoll {
        stat,
        stat_value,
        adds,
        action_die,
        action_score,
        challenge,
        outcome,
        is_match: challenge.0 == challenge.1,
        burned: false,
        pay_the_price,
        miss_text: miss_text.map(str::to_string),
    }
}

fn pay_the_price_if_triggered(
    outcome: ActionOutcome,
    miss_text: Option<&str>,
    ruleset: &RuleSet,
    draws: &mut impl DrawSource,
) -> Option<RollRecord> {
    if outcome == ActionOutcome::Miss && miss_text.is_some_and(|text| text.contains(PAY_THE_PRICE))
    {
        roll_pay_the_price(ruleset, draws)
    } else {
        None
    }
}

impl ActionRoll {
    /// Whether momentum can be burned on this roll.
    ///
    /// Burning requires an unburned roll that is not already a strong
    /// hit, and momentum above its reset floor.
    pub fn can_burn_momentum(&self, character: &Character) -> bool {
        !self.burned
            && self.outcome != ActionOutcome::StrongHit
            && character.momentum.value() > character.momentum.reset_floor()
    }

    /// Whether burning would strictly upgrade the outcome. Pure preview;
    /// mutates nothing.
    pub fn would_improve(&self, character: &Character) -> bool {
        let burned_outcome = classify(character.momentum.value().clamp(0, 10), self.challenge);
        burned_outcome.rank() > self.outcome.rank()
    }

    /// Burn momentum: replace the action score with the momentum value
    /// against the same challenge dice, and reset momentum.
    ///
    /// Re-evaluates the "Pay the Price" trigger for the new outcome.
    /// A call when burning is not permitted is a no-op.
    pub fn burn_momentum(
        &mut self,
        character: &mut Character,
        ruleset: &RuleSet,
        draws: &mut impl DrawSource,
    ) {
        if !self.can_burn_momentum(character) {
            return;
        }
        self.action_score = character.momentum.value().clamp(0, 10);
        self.outcome = classify(self.action_score, self.challenge);
        self.pay_the_price =
            pay_the_price_if_triggered(self.outcome, self.miss_text.as_deref(), ruleset, draws);
        self.burned = true;
        character.momentum.burn();
    }
}
