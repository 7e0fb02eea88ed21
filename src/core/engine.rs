//! The simulation engine: every state transition goes through here.
//!
//! The engine owns a [`SimState`] and mutates it only through the operations
//! below. Each operation runs to completion as one transition; randomness is
//! injected by the caller so tests can force deterministic outcomes with a
//! seeded generator.

use crate::core::constants::*;
use crate::core::investor::{join_level, Investor};
use crate::core::state::SimState;
use crate::core::tree;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Why an `add_investors` call was refused without touching state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundRejection {
    /// The scheme has collapsed; reset to continue.
    Collapsed,
    /// Zero joiners requested.
    InvalidCount,
}

impl RoundRejection {
    pub fn message(&self) -> &'static str {
        match self {
            RoundRejection::Collapsed => "The scheme has collapsed. Reset to continue.",
            RoundRejection::InvalidCount => "At least one investor must join a round.",
        }
    }
}

/// What ended the scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollapseReason {
    /// Recruitment fell below the sustaining rate.
    GrowthStalled,
    /// Investors lost confidence and ran for the exit.
    ConfidenceShock,
}

impl CollapseReason {
    pub fn describe(&self) -> &'static str {
        match self {
            CollapseReason::GrowthStalled => "recruitment stalled",
            CollapseReason::ConfidenceShock => "investors panicked",
        }
    }
}

/// What happened during one `add_investors` call.
///
/// The presentation layer folds this into its activity feed; the engine
/// itself never touches UI types.
#[derive(Debug, Clone, Default)]
pub struct RoundResult {
    /// Set when the call was refused; every other field is then zeroed.
    pub rejection: Option<RoundRejection>,
    /// The round this call produced.
    pub round: u32,
    /// How many investors joined.
    pub joined: u32,
    /// Fresh money taken in this round.
    pub new_money: f64,
    /// Amount actually distributed to existing investors (the rest of the
    /// 80% pool is lost to the per-investor cap, not carried forward).
    pub distributed: f64,
    /// How many investors received a payout.
    pub investors_paid: u32,
    /// Collapse fired during this round.
    pub collapsed: bool,
    pub collapse_reason: Option<CollapseReason>,
}

impl RoundResult {
    fn rejected(rejection: RoundRejection) -> Self {
        Self {
            rejection: Some(rejection),
            ..Self::default()
        }
    }
}

/// The simulation engine. Owns all state; see [`SimState`] for invariants.
pub struct Simulation {
    state: SimState,
}

impl Simulation {
    /// Fresh founder-only simulation.
    pub fn new() -> Self {
        Self {
            state: SimState::new(),
        }
    }

    /// Rehydrate an engine around an existing state (used by tests to build
    /// mature schemes without replaying every round).
    pub fn from_state(state: SimState) -> Self {
        Self { state }
    }

    /// Read-only snapshot of the current state.
    pub fn state(&self) -> &SimState {
        &self.state
    }

    /// Run one round: `count` new investors join, existing investors get
    /// paid from the fresh money, and the collapse condition is evaluated.
    ///
    /// A `count` of zero and any call after collapse are rejected no-ops;
    /// the rejection is reported through the returned [`RoundResult`].
    pub fn add_investors(&mut self, count: u32, rng: &mut impl Rng) -> RoundResult {
        if self.state.is_collapsed {
            return RoundResult::rejected(RoundRejection::Collapsed);
        }
        if count == 0 {
            return RoundResult::rejected(RoundRejection::InvalidCount);
        }

        let count_before = self.state.investors.len();
        let amount = self.state.investment_amount;
        let level = join_level(count_before + count as usize);
        let joining_round = self.state.current_round + 1;

        // Distribute 80% of the fresh money to existing investors, earliest
        // joiners first, capped at PAYOUT_RATE of each stake. The payout pass
        // runs against the pre-append list: joiners earn nothing in their own
        // joining round.
        let new_money = count as f64 * amount;
        let available = new_money * PAYOUT_POOL_SHARE;
        let mut remaining = available;
        let mut investors_paid = 0u32;
        for inv in self.state.investors.iter_mut() {
            if remaining <= 0.0 {
                break;
            }
            let payout = remaining.min(inv.investment * PAYOUT_RATE);
            inv.credit(payout);
            remaining -= payout;
            investors_paid += 1;
        }
        let distributed = available - remaining;

        let first_id = count_before as u32 + 1;
        for offset in 0..count {
            self.state
                .investors
                .push(Investor::joiner(first_id + offset, amount, joining_round, level));
        }
        for id in first_id..first_id + count {
            tree::assign_recruiter(&mut self.state.investors, id);
        }

        self.state.total_invested += new_money;
        self.state.total_paid_out += distributed;

        // Collapse is judged before the round counter moves, with the new
        // joiners counted toward recent growth.
        let collapse_reason = self.evaluate_collapse(count_before, rng);
        self.state.current_round += 1;
        if collapse_reason.is_some() {
            self.state.is_collapsed = true;
            self.state.auto_run = false;
        }

        RoundResult {
            rejection: None,
            round: self.state.current_round,
            joined: count,
            new_money,
            distributed,
            investors_paid,
            collapsed: collapse_reason.is_some(),
            collapse_reason,
        }
    }

    /// Discard everything and return to the founder-only state.
    pub fn reset(&mut self) {
        self.state = SimState::new();
    }

    /// Toggle auto-run. Enabling is refused while collapsed, so the flag can
    /// never sit true against a dead scheme.
    pub fn set_auto_run(&mut self, enabled: bool) {
        self.state.auto_run = enabled && !self.state.is_collapsed;
    }

    /// Set the default contribution for future joiners. Rejects non-positive
    /// or non-finite amounts; existing investors are unaffected either way.
    pub fn set_investment_amount(&mut self, amount: f64) -> bool {
        if !amount.is_finite() || amount <= 0.0 {
            return false;
        }
        self.state.investment_amount = amount;
        true
    }

    /// The scheme dies when it is mature and either recruitment stalls or a
    /// random confidence shock hits. `count_before` is the investor count
    /// before this round's joiners were appended.
    fn evaluate_collapse(&self, count_before: usize, rng: &mut impl Rng) -> Option<CollapseReason> {
        let state = &self.state;
        if state.current_round <= COLLAPSE_MIN_ROUND || count_before < COLLAPSE_MIN_INVESTORS {
            return None;
        }

        let round = state.current_round;
        let recent = state
            .investors
            .iter()
            .filter(|inv| inv.joined_round + RECENT_WINDOW_ROUNDS >= round)
            .count();
        let sustaining = (count_before as f64 * GROWTH_BASE_FRACTION).max(1.0);
        let growth_rate = recent as f64 / sustaining;

        if growth_rate < STALL_GROWTH_RATE {
            Some(CollapseReason::GrowthStalled)
        } else if rng.gen::<f64>() < CONFIDENCE_COLLAPSE_CHANCE {
            Some(CollapseReason::ConfidenceShock)
        } else {
            None
        }
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    /// RNG whose next f64 draw is ~0.0, forcing the confidence shock.
    fn shock_rng() -> StepRng {
        StepRng::new(0, 0)
    }

    /// RNG whose next f64 draw is ~1.0, so only a stall can collapse.
    fn calm_rng() -> StepRng {
        StepRng::new(u64::MAX, 0)
    }

    /// A mature scheme one round short of the collapse window.
    fn mature_sim() -> Simulation {
        let mut sim = Simulation::new();
        let mut rng = calm_rng();
        for _ in 0..9 {
            sim.add_investors(7, &mut rng);
        }
        assert_eq!(sim.state().current_round, 9);
        assert!(sim.state().investors.len() >= 50);
        assert!(!sim.state().is_collapsed);
        sim
    }

    #[test]
    fn zero_count_is_rejected_without_mutation() {
        let mut sim = Simulation::new();
        let before = sim.state().clone();
        let result = sim.add_investors(0, &mut calm_rng());
        assert_eq!(result.rejection, Some(RoundRejection::InvalidCount));
        assert_eq!(sim.state().current_round, before.current_round);
        assert_eq!(sim.state().investors.len(), before.investors.len());
        assert_eq!(sim.state().total_invested, before.total_invested);
    }

    #[test]
    fn first_round_pays_the_founder() {
        let mut sim = Simulation::new();
        let result = sim.add_investors(1, &mut calm_rng());
        assert!(result.rejection.is_none());
        assert_eq!(result.round, 1);
        assert_eq!(result.new_money, 500.0);
        // 400 available, but the founder caps at 200
        assert_eq!(result.distributed, 200.0);
        assert_eq!(result.investors_paid, 1);
        assert_eq!(sim.state().founder().total_earned, 200.0);
        assert_eq!(sim.state().founder().net_profit, -800.0);
    }

    #[test]
    fn joiners_earn_nothing_in_their_own_round() {
        let mut sim = Simulation::new();
        sim.add_investors(3, &mut calm_rng());
        for inv in sim.state().investors.iter().skip(1) {
            assert_eq!(inv.total_earned, 0.0);
            assert_eq!(inv.net_profit, -inv.investment);
        }
    }

    #[test]
    fn investment_amount_applies_to_future_joiners_only() {
        let mut sim = Simulation::new();
        sim.add_investors(1, &mut calm_rng());
        assert!(sim.set_investment_amount(250.0));
        sim.add_investors(1, &mut calm_rng());
        assert_eq!(sim.state().investors[1].investment, 500.0);
        assert_eq!(sim.state().investors[2].investment, 250.0);
    }

    #[test]
    fn bad_amounts_are_refused() {
        let mut sim = Simulation::new();
        assert!(!sim.set_investment_amount(0.0));
        assert!(!sim.set_investment_amount(-50.0));
        assert!(!sim.set_investment_amount(f64::NAN));
        assert!(!sim.set_investment_amount(f64::INFINITY));
        assert_eq!(sim.state().investment_amount, 500.0);
    }

    #[test]
    fn confidence_shock_collapses_a_mature_scheme() {
        let mut sim = mature_sim();
        sim.set_auto_run(true);
        let result = sim.add_investors(3, &mut shock_rng());
        assert!(result.collapsed);
        assert_eq!(result.collapse_reason, Some(CollapseReason::ConfidenceShock));
        assert!(sim.state().is_collapsed);
        assert!(!sim.state().auto_run, "collapse must switch auto-run off");
    }

    #[test]
    fn young_schemes_never_collapse() {
        let mut sim = Simulation::new();
        for _ in 0..8 {
            let result = sim.add_investors(10, &mut shock_rng());
            assert!(!result.collapsed, "round {} collapsed early", result.round);
        }
    }

    #[test]
    fn collapsed_scheme_rejects_more_rounds() {
        let mut sim = mature_sim();
        sim.add_investors(3, &mut shock_rng());
        let snapshot = sim.state().clone();
        let result = sim.add_investors(5, &mut calm_rng());
        assert_eq!(result.rejection, Some(RoundRejection::Collapsed));
        assert_eq!(sim.state().investors.len(), snapshot.investors.len());
        assert_eq!(sim.state().total_invested, snapshot.total_invested);
        assert_eq!(sim.state().total_paid_out, snapshot.total_paid_out);
        assert_eq!(sim.state().current_round, snapshot.current_round);
    }

    #[test]
    fn auto_run_cannot_be_enabled_while_collapsed() {
        let mut sim = mature_sim();
        sim.add_investors(3, &mut shock_rng());
        sim.set_auto_run(true);
        assert!(!sim.state().auto_run);
        sim.reset();
        sim.set_auto_run(true);
        assert!(sim.state().auto_run);
    }
}
