//! Scene modules and the top-level frame layout.

pub mod education_scene;
pub mod home_scene;
pub mod simulator_scene;
pub mod theme;
pub mod tree_scene;

use crate::core::state::SimState;
use crate::ui::education_scene::EducationScene;
use crate::ui::tree_scene::TreeScene;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};
use std::collections::VecDeque;

/// Top-level screens, one per tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Simulator,
    Tree,
    Education,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Home, Tab::Simulator, Tab::Tree, Tab::Education];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Simulator => "Simulator",
            Tab::Tree => "Tree",
            Tab::Education => "Education",
        }
    }

    pub fn index(&self) -> usize {
        Tab::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(&self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn prev(&self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }

    fn key_hints(&self) -> &'static str {
        match self {
            Tab::Home => "Tab/1-4 switch screens | q quit",
            Tab::Simulator => {
                "a add 1 | A add 3 | space auto-run | r reset | +/- amount | Tab switch | q quit"
            }
            Tab::Tree => "Up/Down select | PgUp/PgDn jump | Home founder | Tab switch | q quit",
            Tab::Education => "Left/Right section | Up/Down scroll | Tab switch | q quit",
        }
    }
}

/// Draw the whole frame: tab bar, active scene, key hints.
pub fn draw_ui(
    frame: &mut Frame,
    tab: Tab,
    state: &SimState,
    feed: &VecDeque<String>,
    tree_scene: &TreeScene,
    education_scene: &EducationScene,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(0),    // Scene
            Constraint::Length(3), // Key hints
        ])
        .split(frame.size());

    draw_tab_bar(frame, chunks[0], tab, state);

    match tab {
        Tab::Home => home_scene::draw(frame, chunks[1], state),
        Tab::Simulator => simulator_scene::draw(frame, chunks[1], state, feed),
        Tab::Tree => tree_scene.draw(frame, chunks[1], state),
        Tab::Education => education_scene.draw(frame, chunks[1]),
    }

    draw_footer(frame, chunks[2], tab);
}

fn draw_tab_bar(frame: &mut Frame, area: Rect, active: Tab, state: &SimState) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .map(|t| Line::from(format!(" {} {} ", t.index() + 1, t.title())))
        .collect();

    let status = if state.is_collapsed {
        " COLLAPSED "
    } else {
        " PonziLab "
    };
    let status_style = if state.is_collapsed {
        theme::collapsed_style()
    } else {
        theme::title_style()
    };

    let tabs = Tabs::new(titles)
        .select(active.index())
        .highlight_style(
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(status, status_style)),
        );

    frame.render_widget(tabs, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, tab: Tab) {
    let footer = Paragraph::new(tab.key_hints())
        .style(theme::muted_style())
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

/// Format an amount as whole rupees with thousands separators.
pub fn money(amount: f64) -> String {
    let rounded = amount.abs().round() as i64;
    let mut digits = rounded.to_string();
    let mut pos = digits.len() as isize - 3;
    while pos > 0 {
        digits.insert(pos as usize, ',');
        pos -= 3;
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}₹{}", sign, digits)
}
