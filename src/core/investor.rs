//! Investor records and the pyramid-tier formula.

use crate::core::constants::{FOUNDER_ID, FOUNDER_INVESTMENT};
use serde::{Deserialize, Serialize};

/// One participant in the simulated scheme.
///
/// `id` is dense and equals the investor's 1-based position in the join
/// order; it never changes and is never reused. `recruits` is consumed only
/// by the tree visualization, never by payout logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Investor {
    pub id: u32,
    pub name: String,
    /// Amount contributed at join time. Fixed for the investor's lifetime.
    pub investment: f64,
    /// Ids of investors this one is credited with bringing in.
    pub recruits: Vec<u32>,
    /// Cumulative amount paid back. Never decreases.
    pub total_earned: f64,
    /// Always `total_earned - investment`.
    pub net_profit: f64,
    pub joined_round: u32,
    /// Coarse pyramid tier, fixed at join time. Founder is tier 0.
    pub level: u32,
}

impl Investor {
    /// The scheme operator, seeded at round 0.
    pub fn founder() -> Self {
        Self {
            id: FOUNDER_ID,
            name: "Founder (you)".to_string(),
            investment: FOUNDER_INVESTMENT,
            recruits: Vec::new(),
            total_earned: 0.0,
            net_profit: -FOUNDER_INVESTMENT,
            joined_round: 0,
            level: 0,
        }
    }

    /// A new participant joining in `joined_round` at pyramid tier `level`.
    pub fn joiner(id: u32, investment: f64, joined_round: u32, level: u32) -> Self {
        Self {
            id,
            name: format!("Investor {}", id),
            investment,
            recruits: Vec::new(),
            total_earned: 0.0,
            net_profit: -investment,
            joined_round,
            level,
        }
    }

    /// Credit a payout to this investor.
    pub fn credit(&mut self, amount: f64) {
        self.total_earned += amount;
        self.net_profit += amount;
    }

    pub fn is_in_profit(&self) -> bool {
        self.net_profit > 0.0
    }

    /// Return on investment as a percentage (negative while in loss).
    pub fn roi_percent(&self) -> f64 {
        self.net_profit / self.investment * 100.0
    }
}

/// Pyramid tier assigned to investors joining when the scheme reaches
/// `count_after_join` members: `floor(log2(n)) + 1`.
///
/// Only used for joiners (`count_after_join >= 2`); the founder is tier 0
/// by construction.
pub fn join_level(count_after_join: usize) -> u32 {
    (count_after_join as u32).ilog2() + 1
}
