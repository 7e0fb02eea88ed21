// Founder seed
pub const FOUNDER_ID: u32 = 1;
pub const FOUNDER_INVESTMENT: f64 = 1000.0;

// Contributions
pub const DEFAULT_INVESTMENT: f64 = 500.0;
pub const MIN_INVESTMENT: f64 = 100.0;
pub const MAX_INVESTMENT: f64 = 5000.0;
pub const INVESTMENT_STEP: f64 = 100.0;

// Payout policy: each round, 20% of new money is skimmed by the operator and
// the rest is distributed to existing investors, earliest joiners first,
// capped at 20% of each investor's original stake per round.
pub const PAYOUT_RATE: f64 = 0.2;
pub const OPERATOR_SKIM: f64 = 0.2;
/// Share of fresh money that reaches investors: 1 - OPERATOR_SKIM.
pub const PAYOUT_POOL_SHARE: f64 = 0.8;

// Collapse policy. Only checked once the scheme is mature (strictly more than
// COLLAPSE_MIN_ROUND rounds and at least COLLAPSE_MIN_INVESTORS members before
// the round). Growth is measured over the last RECENT_WINDOW_ROUNDS rounds.
pub const COLLAPSE_MIN_ROUND: u32 = 8;
pub const COLLAPSE_MIN_INVESTORS: usize = 50;
pub const RECENT_WINDOW_ROUNDS: u32 = 1;
pub const GROWTH_BASE_FRACTION: f64 = 0.3;
pub const STALL_GROWTH_RATE: f64 = 0.1;
pub const CONFIDENCE_COLLAPSE_CHANCE: f64 = 0.15;

// Recruit tree: capacity per recruiter is max(1, min(MAX, BUDGET - level))
pub const MAX_RECRUITS_PER_INVESTOR: u32 = 3;
pub const RECRUIT_LEVEL_BUDGET: u32 = 6;

// Auto-run cadence
pub const AUTO_RUN_INTERVAL_MS: u64 = 2000;
pub const AUTO_RUN_MIN_JOINERS: u32 = 1;
pub const AUTO_RUN_MAX_JOINERS: u32 = 3;

// Event polling and activity feed
pub const EVENT_POLL_MS: u64 = 50;
pub const ACTIVITY_FEED_CAPACITY: usize = 8;
