//! Recruitment tree screen: scrollable tree on the left, details for the
//! selected investor on the right.

use crate::core::state::SimState;
use crate::core::tree::{self, TreeNode};
use crate::ui::{money, theme};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows jumped by PgUp/PgDn.
const PAGE_JUMP: usize = 10;

/// One rendered line of the tree: an investor id plus the branch glyphs
/// leading to it.
pub struct TreeRow {
    pub id: u32,
    pub prefix: String,
}

/// View state for the tree screen. The selection indexes the flattened row
/// list; scrolling is derived from it, so there is nothing else to keep in
/// sync with the engine.
pub struct TreeScene {
    selected: usize,
}

impl TreeScene {
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    /// Flatten the recruitment tree into drawable rows, depth-first so
    /// children sit under their recruiter.
    pub fn rows(state: &SimState) -> Vec<TreeRow> {
        let mut rows = Vec::with_capacity(state.investors.len());
        if let Some(root) = tree::build_tree(&state.investors) {
            push_rows(&root, "", true, true, &mut rows);
        }
        rows
    }

    pub fn selected_row<'a>(&self, rows: &'a [TreeRow]) -> Option<&'a TreeRow> {
        rows.get(self.selected.min(rows.len().saturating_sub(1)))
    }

    pub fn select_next(&mut self, state: &SimState) {
        let last = Self::rows(state).len().saturating_sub(1);
        self.selected = (self.selected + 1).min(last);
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_founder(&mut self) {
        self.selected = 0;
    }

    pub fn page_down(&mut self, state: &SimState) {
        let last = Self::rows(state).len().saturating_sub(1);
        self.selected = (self.selected + PAGE_JUMP).min(last);
    }

    pub fn page_up(&mut self) {
        self.selected = self.selected.saturating_sub(PAGE_JUMP);
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect, state: &SimState) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area);

        let rows = Self::rows(state);
        let selected = self.selected.min(rows.len().saturating_sub(1));

        self.draw_tree(frame, columns[0], state, &rows, selected);
        self.draw_side_panel(frame, columns[1], state, &rows, selected);
    }

    fn draw_tree(
        &self,
        frame: &mut Frame,
        area: Rect,
        state: &SimState,
        rows: &[TreeRow],
        selected: usize,
    ) {
        let visible = area.height.saturating_sub(2) as usize;
        // Keep the selection roughly centered without scrolling past the end.
        let start = selected
            .saturating_sub(visible / 2)
            .min(rows.len().saturating_sub(visible.max(1)));

        let mut lines = Vec::with_capacity(visible);
        for (offset, row) in rows.iter().enumerate().skip(start).take(visible.max(1)) {
            let investor = match state.investor(row.id) {
                Some(inv) => inv,
                None => continue,
            };
            let color = theme::investor_color(investor, state.is_collapsed);
            let name_style = if offset == selected {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            lines.push(Line::from(vec![
                Span::styled(row.prefix.clone(), theme::muted_style()),
                Span::styled("o ", Style::default().fg(color)),
                Span::styled(investor.name.clone(), name_style),
                Span::raw("  "),
                Span::styled(money(investor.net_profit), theme::net_style(investor.net_profit)),
            ]));
        }

        let title = format!(" Recruitment Tree ({} investors) ", state.investors.len());
        let widget = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(title, theme::title_style())),
        );
        frame.render_widget(widget, area);
    }

    fn draw_side_panel(
        &self,
        frame: &mut Frame,
        area: Rect,
        state: &SimState,
        rows: &[TreeRow],
        selected: usize,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(6)])
            .split(area);

        if let Some(row) = rows.get(selected) {
            if let Some(investor) = state.investor(row.id) {
                draw_details(frame, chunks[0], investor);
            }
        }
        draw_legend(frame, chunks[1]);
    }
}

impl Default for TreeScene {
    fn default() -> Self {
        Self::new()
    }
}

fn draw_details(frame: &mut Frame, area: Rect, investor: &crate::core::investor::Investor) {
    let status = if investor.is_in_profit() {
        Span::styled("Profitable", Style::default().fg(theme::PROFIT))
    } else {
        Span::styled("In loss", Style::default().fg(theme::LOSS))
    };

    let recruits = if investor.recruits.is_empty() {
        "none".to_string()
    } else {
        investor
            .recruits
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let lines = vec![
        Line::from(Span::styled(investor.name.clone(), theme::title_style())),
        Line::from(""),
        Line::from(format!("Investment:   {}", money(investor.investment))),
        Line::from(format!("Total earned: {}", money(investor.total_earned))),
        Line::from(vec![
            Span::raw("Net:          "),
            Span::styled(money(investor.net_profit), theme::net_style(investor.net_profit)),
            Span::styled(
                format!("  ({:+.1}% ROI)", investor.roi_percent()),
                theme::muted_style(),
            ),
        ]),
        Line::from(vec![Span::raw("Status:       "), status]),
        Line::from(""),
        Line::from(format!("Joined round: {}", investor.joined_round)),
        Line::from(format!("Pyramid tier: {}", investor.level)),
        Line::from(format!("Recruits:     {}", recruits)),
    ];

    let details = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(" Investor Details ", theme::title_style())),
    );
    frame.render_widget(details, area);
}

fn draw_legend(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(vec![
            Span::styled("o ", Style::default().fg(theme::FOUNDER)),
            Span::raw("founder   "),
            Span::styled("o ", Style::default().fg(theme::PROFIT)),
            Span::raw("profitable"),
        ]),
        Line::from(vec![
            Span::styled("o ", Style::default().fg(theme::WAITING)),
            Span::raw("waiting   "),
            Span::styled("o ", Style::default().fg(theme::LOSS)),
            Span::raw("lost money"),
        ]),
    ];
    let legend = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(" Legend ", theme::title_style())),
    );
    frame.render_widget(legend, area);
}

fn push_rows(node: &TreeNode, prefix: &str, is_last: bool, is_root: bool, rows: &mut Vec<TreeRow>) {
    let connector = if is_root {
        String::new()
    } else {
        format!("{}{}", prefix, if is_last { "└─ " } else { "├─ " })
    };
    rows.push(TreeRow {
        id: node.id,
        prefix: connector,
    });

    let child_prefix = if is_root {
        String::new()
    } else {
        format!("{}{}", prefix, if is_last { "   " } else { "│  " })
    };
    for (i, child) in node.children.iter().enumerate() {
        push_rows(child, &child_prefix, i + 1 == node.children.len(), false, rows);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::Simulation;
    use rand::rngs::mock::StepRng;

    fn sim_with_rounds(rounds: u32) -> Simulation {
        let mut sim = Simulation::new();
        let mut rng = StepRng::new(u64::MAX, 0);
        for _ in 0..rounds {
            sim.add_investors(3, &mut rng);
        }
        sim
    }

    #[test]
    fn rows_cover_every_investor_starting_at_the_founder() {
        let sim = sim_with_rounds(4);
        let rows = TreeScene::rows(sim.state());
        assert_eq!(rows.len(), sim.state().investors.len());
        assert_eq!(rows[0].id, 1);
        assert!(rows[0].prefix.is_empty());
    }

    #[test]
    fn selection_stays_in_bounds() {
        let sim = sim_with_rounds(2);
        let mut scene = TreeScene::new();
        for _ in 0..100 {
            scene.select_next(sim.state());
        }
        let rows = TreeScene::rows(sim.state());
        assert_eq!(
            scene.selected_row(&rows).unwrap().id,
            rows.last().unwrap().id,
            "selection clamps to the last row"
        );
        scene.select_founder();
        assert_eq!(scene.selected_row(&rows).unwrap().id, 1);
    }
}
