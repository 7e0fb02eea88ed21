//! Landing screen: what the app offers and why it exists.

use crate::core::state::SimState;
use crate::education::data::{DANGERS, WARNING_SIGNS};
use crate::ui::theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, state: &SimState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Intro banner
            Constraint::Length(8), // Feature cards
            Constraint::Min(0),    // Warning signs + dangers
            Constraint::Length(3), // Current simulation status
        ])
        .split(area);

    draw_intro(frame, chunks[0]);
    draw_features(frame, chunks[1]);
    draw_awareness(frame, chunks[2]);
    draw_status(frame, chunks[3], state);
}

fn draw_intro(frame: &mut Frame, area: Rect) {
    let intro = Paragraph::new(vec![
        Line::from(Span::styled(
            "What is a Ponzi scheme?",
            theme::title_style(),
        )),
        Line::from(
            "A fake investment plan where money from new investors is used to pay \
             returns to earlier investors - not from actual profits, but from deception.",
        ),
    ])
    .wrap(Wrap { trim: true })
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(" Educational Simulation ", theme::warning_style())),
    );
    frame.render_widget(intro, area);
}

fn draw_features(frame: &mut Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let features = [
        (
            " 2 Simulator ",
            "Experience how Ponzi schemes work from the inside: recruit investors, \
             watch the payouts flow uphill, and see the books fall apart.",
        ),
        (
            " 3 Tree ",
            "Explore the recruitment pyramid investor by investor and see who \
             actually made money.",
        ),
        (
            " 4 Education ",
            "Glossary, practical tips and official resources for reporting \
             suspicious schemes.",
        ),
    ];

    for (i, (title, text)) in features.iter().enumerate() {
        let card = Paragraph::new(*text)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(*title, theme::title_style())),
            );
        frame.render_widget(card, columns[i]);
    }
}

fn draw_awareness(frame: &mut Frame, area: Rect) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let mut sign_lines = Vec::new();
    for sign in WARNING_SIGNS {
        sign_lines.push(Line::from(vec![
            Span::styled("! ", theme::warning_style()),
            Span::raw(*sign),
        ]));
    }
    let signs = Paragraph::new(sign_lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" How to spot one ", theme::warning_style())),
        );
    frame.render_widget(signs, halves[0]);

    let mut danger_lines = Vec::new();
    for danger in DANGERS {
        danger_lines.push(Line::from(vec![
            Span::styled("x ", Style::default().fg(theme::LOSS)),
            Span::raw(*danger),
        ]));
    }
    let dangers = Paragraph::new(danger_lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" Why stay away ", theme::collapsed_style())),
        );
    frame.render_widget(dangers, halves[1]);
}

fn draw_status(frame: &mut Frame, area: Rect, state: &SimState) {
    let status = if state.is_collapsed {
        Span::styled("COLLAPSED", theme::collapsed_style())
    } else {
        Span::styled("running", Style::default().fg(theme::PROFIT))
    };
    let line = Line::from(vec![
        Span::raw(format!(
            "Current simulation: {} investors | round {} | ",
            state.investors.len(),
            state.current_round
        )),
        status,
    ]);
    let paragraph = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}
