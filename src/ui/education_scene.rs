//! Education screen: glossary, tips, and resources as scrollable sections.

use crate::education::data::{GLOSSARY, RESOURCES, SAFE_ALTERNATIVES, TIPS};
use crate::ui::theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationSection {
    Glossary,
    Tips,
    Resources,
}

impl EducationSection {
    const ALL: [EducationSection; 3] = [
        EducationSection::Glossary,
        EducationSection::Tips,
        EducationSection::Resources,
    ];

    fn title(&self) -> &'static str {
        match self {
            EducationSection::Glossary => "Glossary",
            EducationSection::Tips => "Tips",
            EducationSection::Resources => "Resources",
        }
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }
}

/// View state for the education screen.
pub struct EducationScene {
    section: EducationSection,
    scroll: u16,
}

impl EducationScene {
    pub fn new() -> Self {
        Self {
            section: EducationSection::Glossary,
            scroll: 0,
        }
    }

    pub fn next_section(&mut self) {
        let idx = (self.section.index() + 1) % EducationSection::ALL.len();
        self.section = EducationSection::ALL[idx];
        self.scroll = 0;
    }

    pub fn prev_section(&mut self) {
        let len = EducationSection::ALL.len();
        let idx = (self.section.index() + len - 1) % len;
        self.section = EducationSection::ALL[idx];
        self.scroll = 0;
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        let max = self.content_lines().len().saturating_sub(5) as u16;
        self.scroll = (self.scroll + 1).min(max);
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        let titles: Vec<Line> = EducationSection::ALL
            .iter()
            .map(|s| Line::from(format!(" {} ", s.title())))
            .collect();
        let tabs = Tabs::new(titles)
            .select(self.section.index())
            .highlight_style(
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(" Education Center ", theme::title_style())),
            );
        frame.render_widget(tabs, chunks[0]);

        let content = Paragraph::new(self.content_lines())
            .wrap(Wrap { trim: true })
            .scroll((self.scroll, 0))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(content, chunks[1]);
    }

    fn content_lines(&self) -> Vec<Line<'static>> {
        match self.section {
            EducationSection::Glossary => glossary_lines(),
            EducationSection::Tips => tips_lines(),
            EducationSection::Resources => resources_lines(),
        }
    }
}

impl Default for EducationScene {
    fn default() -> Self {
        Self::new()
    }
}

fn glossary_lines() -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for entry in GLOSSARY {
        lines.push(Line::from(Span::styled(entry.term, theme::title_style())));
        lines.push(Line::from(entry.definition));
        lines.push(Line::from(Span::styled(
            format!("e.g. {}", entry.example),
            theme::muted_style(),
        )));
        lines.push(Line::from(""));
    }
    lines
}

fn tips_lines() -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for tip in TIPS {
        lines.push(Line::from(Span::styled(tip.title, theme::title_style())));
        lines.push(Line::from(tip.description));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "What to do instead",
        Style::default()
            .fg(theme::PROFIT)
            .add_modifier(Modifier::BOLD),
    )));
    for alternative in SAFE_ALTERNATIVES {
        lines.push(Line::from(format!("- {}", alternative)));
    }
    lines
}

fn resources_lines() -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for resource in RESOURCES {
        lines.push(Line::from(Span::styled(
            resource.title,
            theme::title_style(),
        )));
        lines.push(Line::from(resource.description));
        lines.push(Line::from(Span::styled(
            resource.url,
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::UNDERLINED),
        )));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(
        "Protect yourself. Spread awareness. Say no to scams.",
    ));
    lines
}
