//! Simulator screen: controls, financial metrics, pyramid summary, and the
//! round-by-round activity feed.

use crate::core::state::SimState;
use crate::ui::{money, theme};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use std::collections::VecDeque;

/// Markers shown per pyramid tier before switching to a "+N" suffix.
const MARKERS_PER_LEVEL: usize = 10;

pub fn draw(frame: &mut Frame, area: Rect, state: &SimState, feed: &VecDeque<String>) {
    let constraints = if state.is_collapsed {
        vec![
            Constraint::Length(7), // Collapse alert
            Constraint::Min(0),    // Panels
            Constraint::Length(6), // Activity feed
        ]
    } else {
        vec![Constraint::Min(0), Constraint::Length(6)]
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let (panel_area, feed_area) = if state.is_collapsed {
        draw_collapse_alert(frame, chunks[0], state);
        (chunks[1], chunks[2])
    } else {
        (chunks[0], chunks[1])
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(35),
            Constraint::Percentage(35),
        ])
        .split(panel_area);

    draw_controls(frame, columns[0], state);
    draw_metrics(frame, columns[1], state);
    draw_pyramid(frame, columns[2], state);
    draw_feed(frame, feed_area, feed);
}

fn draw_controls(frame: &mut Frame, area: Rect, state: &SimState) {
    let status = if state.is_collapsed {
        Span::styled("COLLAPSED", theme::collapsed_style())
    } else {
        Span::styled("Running", Style::default().fg(theme::PROFIT))
    };
    let auto = if state.auto_run {
        Span::styled("ON", Style::default().fg(theme::PROFIT))
    } else {
        Span::styled("off", theme::muted_style())
    };

    let lines = vec![
        Line::from(vec![
            Span::raw("Investment amount: "),
            Span::styled(money(state.investment_amount), theme::title_style()),
        ]),
        Line::from(Span::styled(
            "  adjust with + / -",
            theme::muted_style(),
        )),
        Line::from(""),
        Line::from(format!("Round:           {}", state.current_round)),
        Line::from(format!("Total investors: {}", state.investors.len())),
        Line::from(vec![Span::raw("Auto-run:        "), auto]),
        Line::from(vec![Span::raw("Status:          "), status]),
        Line::from(""),
        Line::from(Span::styled(
            "a: recruit 1   A: recruit 3",
            theme::muted_style(),
        )),
        Line::from(Span::styled(
            "space: auto-run   r: reset",
            theme::muted_style(),
        )),
    ];

    let controls = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(" Scheme Controls ", theme::title_style())),
    );
    frame.render_widget(controls, area);
}

fn draw_metrics(frame: &mut Frame, area: Rect, state: &SimState) {
    let deficit = state.deficit();
    let unpaid_share = if state.total_invested > 0.0 {
        deficit / state.total_invested * 100.0
    } else {
        0.0
    };

    let lines = vec![
        Line::from(vec![
            Span::raw("Total invested:  "),
            Span::styled(
                money(state.total_invested),
                Style::default().fg(theme::PROFIT),
            ),
        ]),
        Line::from(vec![
            Span::raw("Total paid out:  "),
            Span::styled(
                money(state.total_paid_out),
                Style::default().fg(theme::ACCENT),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::raw("Money still owed: "),
            Span::styled(money(deficit), theme::collapsed_style()),
        ]),
        Line::from(Span::styled(
            format!("  {:.1}% of investments unpaid", unpaid_share),
            theme::muted_style(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("In profit:  "),
            Span::styled(
                state.people_in_profit().to_string(),
                Style::default().fg(theme::PROFIT).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("Lost money: "),
            Span::styled(
                state.people_in_loss().to_string(),
                Style::default().fg(theme::LOSS).add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let metrics = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(" Financial Metrics ", theme::title_style())),
    );
    frame.render_widget(metrics, area);
}

fn draw_pyramid(frame: &mut Frame, area: Rect, state: &SimState) {
    let mut lines = Vec::new();

    for (level, investors) in state.pyramid_levels() {
        let mut spans = vec![Span::styled(
            format!("Tier {:<2} ({:>3})  ", level, investors.len()),
            theme::muted_style(),
        )];
        for inv in investors.iter().take(MARKERS_PER_LEVEL) {
            let marker = if inv.is_in_profit() { "+" } else { "-" };
            spans.push(Span::styled(
                marker,
                Style::default().fg(theme::investor_color(inv, state.is_collapsed)),
            ));
        }
        if investors.len() > MARKERS_PER_LEVEL {
            spans.push(Span::styled(
                format!(" +{}", investors.len() - MARKERS_PER_LEVEL),
                theme::muted_style(),
            ));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("+", Style::default().fg(theme::PROFIT)),
        Span::raw(" profitable  "),
        Span::styled("-", Style::default().fg(theme::WAITING)),
        Span::raw(" waiting/"),
        Span::styled("lost", Style::default().fg(theme::LOSS)),
    ]));

    let pyramid = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(" Pyramid Structure ", theme::title_style())),
    );
    frame.render_widget(pyramid, area);
}

fn draw_collapse_alert(frame: &mut Frame, area: Rect, state: &SimState) {
    let lines = vec![
        Line::from(Span::styled(
            "THE SCHEME HAS COLLAPSED!",
            theme::collapsed_style(),
        )),
        Line::from("New investors stopped joining, and there is no money left to pay anyone."),
        Line::from(format!(
            "{} people lost their money; only {} early investors made a profit.",
            state.people_in_loss(),
            state.people_in_profit()
        )),
        Line::from(format!(
            "{} in losses cannot be recovered. Press r to reset.",
            money(state.deficit())
        )),
    ];

    let alert = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::LOSS))
                .title(Span::styled(" Collapse ", theme::collapsed_style())),
        );
    frame.render_widget(alert, area);
}

fn draw_feed(frame: &mut Frame, area: Rect, feed: &VecDeque<String>) {
    let lines: Vec<Line> = feed.iter().map(|entry| Line::from(entry.as_str())).collect();
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(" Activity ", theme::title_style())),
    );
    frame.render_widget(paragraph, area);
}
