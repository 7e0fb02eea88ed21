//! Aggregate reporting over simulation runs.

use crate::core::engine::CollapseReason;
use serde::Serialize;
use std::collections::BTreeMap;

/// Final numbers from a single simulated scheme.
#[derive(Debug, Clone, Serialize)]
pub struct RunStats {
    pub collapsed: bool,
    pub rounds: u32,
    pub final_investors: u32,
    pub total_invested: f64,
    pub total_paid_out: f64,
    pub deficit: f64,
    pub in_profit: u32,
    pub in_loss: u32,
    pub collapse_reason: Option<CollapseReason>,
}

/// Aggregated results from a batch of runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub runs_collapsed: u32,
    /// Runs that hit the round cap without collapsing.
    pub runs_survived: u32,
    pub stall_collapses: u32,
    pub shock_collapses: u32,

    /// Average round of collapse, over collapsed runs only.
    pub avg_rounds_to_collapse: f64,
    pub avg_final_investors: f64,
    pub avg_deficit: f64,
    pub avg_in_profit: f64,
    pub avg_in_loss: f64,
    /// Average share of investors who ended in loss.
    pub avg_loss_share: f64,

    /// Collapse round -> number of runs that collapsed in it.
    pub collapse_round_distribution: BTreeMap<u32, u32>,

    /// Individual run stats for detailed analysis.
    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    /// Aggregate a batch of completed runs.
    pub fn from_runs(runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let collapsed: Vec<&RunStats> = runs.iter().filter(|r| r.collapsed).collect();
        let runs_collapsed = collapsed.len() as u32;
        let runs_survived = num_runs - runs_collapsed;

        let stall_collapses = collapsed
            .iter()
            .filter(|r| r.collapse_reason == Some(CollapseReason::GrowthStalled))
            .count() as u32;
        let shock_collapses = collapsed
            .iter()
            .filter(|r| r.collapse_reason == Some(CollapseReason::ConfidenceShock))
            .count() as u32;

        let avg_rounds_to_collapse = collapsed.iter().map(|r| r.rounds as f64).sum::<f64>()
            / runs_collapsed.max(1) as f64;

        let denom = num_runs.max(1) as f64;
        let avg_final_investors =
            runs.iter().map(|r| r.final_investors as f64).sum::<f64>() / denom;
        let avg_deficit = runs.iter().map(|r| r.deficit).sum::<f64>() / denom;
        let avg_in_profit = runs.iter().map(|r| r.in_profit as f64).sum::<f64>() / denom;
        let avg_in_loss = runs.iter().map(|r| r.in_loss as f64).sum::<f64>() / denom;
        let avg_loss_share = runs
            .iter()
            .map(|r| r.in_loss as f64 / r.final_investors.max(1) as f64)
            .sum::<f64>()
            / denom;

        let mut collapse_round_distribution = BTreeMap::new();
        for run in &collapsed {
            *collapse_round_distribution.entry(run.rounds).or_insert(0) += 1;
        }

        Self {
            num_runs,
            runs_collapsed,
            runs_survived,
            stall_collapses,
            shock_collapses,
            avg_rounds_to_collapse,
            avg_final_investors,
            avg_deficit,
            avg_in_profit,
            avg_in_loss,
            avg_loss_share,
            collapse_round_distribution,
            run_stats: runs,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("===============================================================\n");
        report.push_str("                    COLLAPSE REPORT\n");
        report.push_str("===============================================================\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} collapsed, {} survived the round cap\n",
            self.num_runs, self.runs_collapsed, self.runs_survived
        ));
        report.push_str(&format!(
            "Collapse causes: {} recruitment stalls, {} confidence shocks\n\n",
            self.stall_collapses, self.shock_collapses
        ));

        report.push_str(&format!(
            "Avg rounds to collapse:  {:>10.1}\n",
            self.avg_rounds_to_collapse
        ));
        report.push_str(&format!(
            "Avg final investors:     {:>10.1}\n",
            self.avg_final_investors
        ));
        report.push_str(&format!("Avg deficit:             {:>10.0}\n", self.avg_deficit));
        report.push_str(&format!(
            "Avg investors in profit: {:>10.1}\n",
            self.avg_in_profit
        ));
        report.push_str(&format!(
            "Avg investors in loss:   {:>10.1}\n",
            self.avg_in_loss
        ));
        report.push_str(&format!(
            "Avg loss share:          {:>9.1}%\n",
            self.avg_loss_share * 100.0
        ));

        if !self.collapse_round_distribution.is_empty() {
            report.push_str("\nCollapse round distribution:\n");
            let max_count = self
                .collapse_round_distribution
                .values()
                .copied()
                .max()
                .unwrap_or(1);
            for (round, count) in &self.collapse_round_distribution {
                let bar_len = (*count as usize * 40 / max_count as usize).max(1);
                report.push_str(&format!(
                    "  round {:>4}: {:>4}  {}\n",
                    round,
                    count,
                    "#".repeat(bar_len)
                ));
            }
        }

        report
    }

    /// JSON report for downstream tooling.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(collapsed: bool, rounds: u32, investors: u32, in_loss: u32) -> RunStats {
        RunStats {
            collapsed,
            rounds,
            final_investors: investors,
            total_invested: investors as f64 * 500.0,
            total_paid_out: 1000.0,
            deficit: investors as f64 * 500.0 - 1000.0,
            in_profit: investors - in_loss,
            in_loss,
            collapse_reason: collapsed.then_some(CollapseReason::ConfidenceShock),
        }
    }

    #[test]
    fn aggregates_are_consistent() {
        let report = SimReport::from_runs(vec![
            run(true, 20, 40, 36),
            run(true, 30, 60, 57),
            run(false, 200, 400, 390),
        ]);
        assert_eq!(report.num_runs, 3);
        assert_eq!(report.runs_collapsed, 2);
        assert_eq!(report.runs_survived, 1);
        assert_eq!(report.shock_collapses, 2);
        assert_eq!(report.avg_rounds_to_collapse, 25.0);
        assert_eq!(report.collapse_round_distribution.len(), 2);
    }

    #[test]
    fn text_and_json_render() {
        let report = SimReport::from_runs(vec![run(true, 20, 40, 36)]);
        let text = report.to_text();
        assert!(text.contains("COLLAPSE REPORT"));
        assert!(text.contains("round   20"));
        let json = report.to_json();
        assert!(json.contains("\"runs_collapsed\": 1"));
    }
}
