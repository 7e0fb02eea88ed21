//! Shared palette and text styles for all scenes.

use crate::core::constants::FOUNDER_ID;
use crate::core::investor::Investor;
use ratatui::style::{Color, Modifier, Style};

pub const PROFIT: Color = Color::Green;
pub const LOSS: Color = Color::Red;
pub const WAITING: Color = Color::Yellow;
pub const FOUNDER: Color = Color::Magenta;
pub const ACCENT: Color = Color::Cyan;
pub const WARNING: Color = Color::Yellow;
pub const MUTED: Color = Color::DarkGray;

pub fn title_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn warning_style() -> Style {
    Style::default().fg(WARNING).add_modifier(Modifier::BOLD)
}

pub fn collapsed_style() -> Style {
    Style::default().fg(LOSS).add_modifier(Modifier::BOLD)
}

pub fn muted_style() -> Style {
    Style::default().fg(MUTED)
}

/// Green for gains, red for losses.
pub fn net_style(net_profit: f64) -> Style {
    if net_profit > 0.0 {
        Style::default().fg(PROFIT)
    } else {
        Style::default().fg(LOSS)
    }
}

/// Node color in the tree and pyramid views: the founder stands out, winners
/// are green, everyone else is "waiting" until the collapse turns them red.
pub fn investor_color(investor: &Investor, collapsed: bool) -> Color {
    if investor.id == FOUNDER_ID {
        FOUNDER
    } else if investor.is_in_profit() {
        PROFIT
    } else if collapsed {
        LOSS
    } else {
        WAITING
    }
}
