//! Add-item dialog

use crossterm::event::{KeyCode, MouseButton, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::modal::{centered_rect, rect_contains, render_overlay};
use super::text_input::{TextInput, TextInputProps};
use super::Component;
use crate::action::Action;
use crate::event::EventKind;

/// Props for [`AddItemModal`]
pub struct AddItemProps<'a> {
    /// Current input value, owned by app state
    pub input: &'a str,
}

/// Centered dialog with a focused text input
///
/// Enter submits, Esc or a click outside the dialog closes. The input value
/// lives in app state so the reducer can clear it on open.
#[derive(Default)]
pub struct AddItemModal {
    input: TextInput,
    /// Dialog area captured at render time, for the click-outside check
    dialog_area: Option<Rect>,
    was_open: bool,
}

impl AddItemModal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track open state so a fresh dialog starts with the cursor at zero
    pub fn set_open(&mut self, open: bool) {
        if open && !self.was_open {
            self.input.reset();
        }
        self.was_open = open;
    }

    fn input_props<'a>(value: &'a str) -> TextInputProps<'a> {
        TextInputProps {
            value,
            placeholder: "What to bring?",
            is_focused: true,
            on_change: Action::InputChange,
            on_submit: Action::ItemAdd,
        }
    }
}

impl Component for AddItemModal {
    type Props<'a> = AddItemProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        match event {
            EventKind::Key(key) if key.code == KeyCode::Esc => {
                vec![Action::ModalClose]
            }
            EventKind::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                match self.dialog_area {
                    Some(area) if rect_contains(area, mouse.column, mouse.row) => Vec::new(),
                    _ => vec![Action::ModalClose],
                }
            }
            _ => self
                .input
                .handle_event(event, Self::input_props(props.input))
                .into_iter()
                .collect(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let dialog = centered_rect(40, 6, area);
        self.dialog_area = Some(dialog);
        render_overlay(frame, dialog);

        let block = Block::default().borders(Borders::ALL).title(" Add item ");
        let inner = block.inner(dialog);
        frame.render_widget(block, dialog);

        let input_area = Rect::new(inner.x, inner.y, inner.width, 3);
        self.input
            .render(frame, input_area, Self::input_props(props.input));

        let hint = Paragraph::new("Enter to add, Esc to cancel")
            .style(Style::default().fg(Color::DarkGray));
        let hint_area = Rect::new(inner.x, inner.y + 3, inner.width, 1);
        frame.render_widget(hint, hint_area);
    }
}
