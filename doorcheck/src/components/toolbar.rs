//! Bottom toolbar with clickable key hints

use crossterm::event::{MouseButton, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::modal::rect_contains;
use super::Component;
use crate::action::Action;
use crate::event::EventKind;

const SEGMENTS: [(&str, fn() -> Action); 4] = [
    ("[a] add", || Action::ModalOpen),
    ("[c] check all", || Action::ListCheckAll),
    ("[r] reset", || Action::ListResetRequest),
    ("[q] quit", || Action::Quit),
];
const GAP: u16 = 2;

/// Hint row whose segments double as mouse buttons
#[derive(Default)]
pub struct Toolbar {
    /// Segment hit areas captured at render time, matching [`SEGMENTS`]
    segment_areas: Vec<Rect>,
}

impl Toolbar {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component for Toolbar {
    type Props<'a> = ();

    fn handle_event(
        &mut self,
        event: &EventKind,
        _props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        let EventKind::Mouse(mouse) = event else {
            return None;
        };
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }

        self.segment_areas
            .iter()
            .zip(SEGMENTS.iter())
            .find(|(area, _)| rect_contains(**area, mouse.column, mouse.row))
            .map(|(_, (_, action))| action())
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, _props: Self::Props<'_>) {
        self.segment_areas.clear();

        let mut spans = Vec::new();
        let mut x = area.x;
        for (index, (label, _)) in SEGMENTS.iter().enumerate() {
            if index > 0 {
                spans.push(Span::raw(" ".repeat(GAP as usize)));
                x += GAP;
            }
            let width = label.len() as u16;
            self.segment_areas.push(Rect::new(x, area.y, width, 1));
            x += width;
            spans.push(Span::styled(
                *label,
                Style::default().fg(Color::DarkGray),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{mouse_down, RenderHarness};

    fn render_toolbar(toolbar: &mut Toolbar) -> String {
        let mut render = RenderHarness::new(50, 1);
        render.render_to_string_plain(|frame| {
            toolbar.render(frame, frame.area(), ());
        })
    }

    fn click(toolbar: &mut Toolbar, column: u16, row: u16) -> Vec<Action> {
        toolbar
            .handle_event(&mouse_down(column, row), ())
            .into_iter()
            .collect()
    }

    #[test]
    fn renders_all_hints() {
        let mut toolbar = Toolbar::new();
        let output = render_toolbar(&mut toolbar);
        assert!(output.contains("[a] add"));
        assert!(output.contains("[c] check all"));
        assert!(output.contains("[r] reset"));
        assert!(output.contains("[q] quit"));
    }

    #[test]
    fn clicking_a_segment_emits_its_action() {
        let mut toolbar = Toolbar::new();
        render_toolbar(&mut toolbar);

        // "[a] add" starts at column 0, "[c] check all" at column 9
        assert_eq!(click(&mut toolbar, 0, 0), vec![Action::ModalOpen]);
        assert_eq!(click(&mut toolbar, 9, 0), vec![Action::ListCheckAll]);
        assert_eq!(click(&mut toolbar, 24, 0), vec![Action::ListResetRequest]);
        assert_eq!(click(&mut toolbar, 35, 0), vec![Action::Quit]);
    }

    #[test]
    fn clicking_a_gap_emits_nothing() {
        let mut toolbar = Toolbar::new();
        render_toolbar(&mut toolbar);

        assert!(click(&mut toolbar, 7, 0).is_empty());
        assert!(click(&mut toolbar, 0, 1).is_empty());
    }
}
