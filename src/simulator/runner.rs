//! Drives fresh simulations to collapse and collects their statistics.

use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::core::engine::Simulation;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Run the full batch and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed + run_idx as u64),
            None => ChaCha8Rng::from_entropy(),
        };

        let stats = simulate_single_run(config, &mut rng);

        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - {} rounds, {} investors, deficit {:.0}, {}",
                run_idx + 1,
                config.num_runs,
                stats.rounds,
                stats.final_investors,
                stats.deficit,
                if stats.collapsed { "collapsed" } else { "survived" }
            );
        }

        all_runs.push(stats);
    }

    SimReport::from_runs(all_runs)
}

/// Simulate one scheme until collapse or the round cap.
fn simulate_single_run(config: &SimConfig, rng: &mut ChaCha8Rng) -> RunStats {
    let mut sim = Simulation::new();
    sim.set_investment_amount(config.investment_amount);

    let mut collapse_reason = None;
    while sim.state().current_round < config.max_rounds_per_run && !sim.state().is_collapsed {
        // Joiner draw mirrors the interactive auto-run, floored at one so a
        // round always advances.
        let count = rng.gen_range(config.min_joiners.max(1)..=config.max_joiners.max(1));
        let result = sim.add_investors(count, rng);
        if result.collapsed {
            collapse_reason = result.collapse_reason;
        }
    }

    let state = sim.state();
    RunStats {
        collapsed: state.is_collapsed,
        rounds: state.current_round,
        final_investors: state.investors.len() as u32,
        total_invested: state.total_invested,
        total_paid_out: state.total_paid_out,
        deficit: state.deficit(),
        in_profit: state.people_in_profit() as u32,
        in_loss: state.people_in_loss() as u32,
        collapse_reason,
    }
}
