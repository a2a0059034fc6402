//! Yes/no dialog gating destructive actions

use crossterm::event::{KeyCode, MouseButton, MouseEventKind};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::modal::{centered_rect, rect_contains, render_overlay};
use super::Component;
use crate::action::Action;
use crate::event::EventKind;
use crate::state::Confirm;

/// Props for [`ConfirmDialog`]
pub struct ConfirmProps {
    pub confirm: Confirm,
}

/// Centered prompt with Yes/No buttons
///
/// `y`/Enter accepts, `n`/Esc cancels, and so does clicking outside the
/// dialog. Nothing destructive happens here; the reducer acts on the answer.
#[derive(Default)]
pub struct ConfirmDialog {
    dialog_area: Option<Rect>,
    yes_area: Option<Rect>,
    no_area: Option<Rect>,
}

impl ConfirmDialog {
    pub fn new() -> Self {
        Self::default()
    }

    fn on_click(&self, column: u16, row: u16) -> Option<Action> {
        if let Some(yes) = self.yes_area {
            if rect_contains(yes, column, row) {
                return Some(Action::ConfirmAccept);
            }
        }
        if let Some(no) = self.no_area {
            if rect_contains(no, column, row) {
                return Some(Action::ConfirmCancel);
            }
        }
        match self.dialog_area {
            Some(dialog) if rect_contains(dialog, column, row) => None,
            _ => Some(Action::ConfirmCancel),
        }
    }
}

impl Component for ConfirmDialog {
    type Props<'a> = ConfirmProps;

    fn handle_event(
        &mut self,
        event: &EventKind,
        _props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Char('y') | KeyCode::Enter => Some(Action::ConfirmAccept),
                KeyCode::Char('n') | KeyCode::Esc => Some(Action::ConfirmCancel),
                _ => None,
            },
            EventKind::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                self.on_click(mouse.column, mouse.row)
            }
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let dialog = centered_rect(36, 5, area);
        self.dialog_area = Some(dialog);
        render_overlay(frame, dialog);

        let block = Block::default().borders(Borders::ALL).title(" Confirm ");
        let inner = block.inner(dialog);
        frame.render_widget(block, dialog);

        let prompt = Paragraph::new(props.confirm.prompt()).alignment(Alignment::Center);
        frame.render_widget(prompt, Rect::new(inner.x, inner.y, inner.width, 1));

        let buttons = Line::from(vec![
            Span::styled(
                "[Y]es",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled("[N]o", Style::default().add_modifier(Modifier::BOLD)),
        ]);
        // Buttons centered by hand so their hit areas are known exactly
        let buttons_width = 12u16;
        let buttons_x = inner.x + (inner.width.saturating_sub(buttons_width)) / 2;
        let buttons_y = inner.y + 2;
        frame.render_widget(
            Paragraph::new(buttons),
            Rect::new(buttons_x, buttons_y, buttons_width, 1),
        );

        self.yes_area = Some(Rect::new(buttons_x, buttons_y, 5, 1));
        self.no_area = Some(Rect::new(buttons_x + 8, buttons_y, 4, 1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{char_event, key_event, mouse_down, RenderHarness};
    use doorcheck_core::ItemId;

    fn render_dialog(dialog: &mut ConfirmDialog, confirm: Confirm) -> String {
        let mut render = RenderHarness::new(60, 16);
        render.render_to_string_plain(|frame| {
            dialog.render(frame, frame.area(), ConfirmProps { confirm });
        })
    }

    fn handle(dialog: &mut ConfirmDialog, confirm: Confirm, event: EventKind) -> Vec<Action> {
        dialog
            .handle_event(&event, ConfirmProps { confirm })
            .into_iter()
            .collect()
    }

    #[test]
    fn renders_the_prompt_for_each_request() {
        let mut dialog = ConfirmDialog::new();
        let output = render_dialog(&mut dialog, Confirm::DeleteItem(ItemId(1)));
        assert!(output.contains("Delete this item?"));

        let output = render_dialog(&mut dialog, Confirm::ResetAll);
        assert!(output.contains("Clear every checkmark?"));
        assert!(output.contains("[Y]es"));
        assert!(output.contains("[N]o"));
    }

    #[test]
    fn keys_answer_the_prompt() {
        let mut dialog = ConfirmDialog::new();
        let confirm = Confirm::ResetAll;

        assert_eq!(
            handle(&mut dialog, confirm, char_event('y')),
            vec![Action::ConfirmAccept]
        );
        assert_eq!(
            handle(&mut dialog, confirm, key_event(KeyCode::Enter)),
            vec![Action::ConfirmAccept]
        );
        assert_eq!(
            handle(&mut dialog, confirm, char_event('n')),
            vec![Action::ConfirmCancel]
        );
        assert_eq!(
            handle(&mut dialog, confirm, key_event(KeyCode::Esc)),
            vec![Action::ConfirmCancel]
        );
        assert!(handle(&mut dialog, confirm, char_event('x')).is_empty());
    }

    #[test]
    fn clicks_hit_the_buttons() {
        let mut dialog = ConfirmDialog::new();
        let confirm = Confirm::ResetAll;
        render_dialog(&mut dialog, confirm);

        let yes = dialog.yes_area.unwrap();
        let no = dialog.no_area.unwrap();

        assert_eq!(
            handle(&mut dialog, confirm, mouse_down(yes.x, yes.y)),
            vec![Action::ConfirmAccept]
        );
        assert_eq!(
            handle(&mut dialog, confirm, mouse_down(no.x, no.y)),
            vec![Action::ConfirmCancel]
        );
    }

    #[test]
    fn click_outside_cancels_inside_does_nothing() {
        let mut dialog = ConfirmDialog::new();
        let confirm = Confirm::DeleteItem(ItemId(2));
        render_dialog(&mut dialog, confirm);

        assert_eq!(
            handle(&mut dialog, confirm, mouse_down(0, 0)),
            vec![Action::ConfirmCancel]
        );

        // A click on the prompt line is inside the dialog but on no button
        let dialog_area = dialog.dialog_area.unwrap();
        let actions = handle(
            &mut dialog,
            confirm,
            mouse_down(dialog_area.x + 1, dialog_area.y + 1),
        );
        assert!(actions.is_empty());
    }
}
