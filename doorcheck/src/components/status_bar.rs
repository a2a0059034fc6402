//! One-line status summary above the list

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};

use super::Component;
use crate::state::Status;

/// Props for [`StatusBar`]
pub struct StatusProps {
    pub status: Status,
}

/// Render-only remaining count, or a completion banner
#[derive(Default)]
pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }
}

impl Component for StatusBar {
    type Props<'a> = StatusProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let line = match props.status {
            Status::Complete => Paragraph::new("\u{1f389} Nothing forgotten!").style(
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Status::Remaining(n) => Paragraph::new(format!("{n} remaining")),
        };
        frame.render_widget(line, area);
    }
}
