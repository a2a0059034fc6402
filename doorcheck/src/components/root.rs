//! Root component: layout plus mode-based event routing

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use super::add_modal::{AddItemModal, AddItemProps};
use super::checklist_view::{ChecklistProps, ChecklistView};
use super::confirm_dialog::{ConfirmDialog, ConfirmProps};
use super::status_bar::{StatusBar, StatusProps};
use super::toolbar::Toolbar;
use super::Component;
use crate::action::Action;
use crate::event::EventKind;
use crate::state::{AppState, Mode};

/// Props for [`Root`]
pub struct RootProps<'a> {
    pub state: &'a AppState,
}

/// Owns every child component and routes events by [`Mode`]
///
/// An open dialog takes the whole event stream; the list surface splits it
/// between global keybindings, the checklist, and the toolbar.
#[derive(Default)]
pub struct Root {
    status_bar: StatusBar,
    checklist: ChecklistView,
    toolbar: Toolbar,
    add_modal: AddItemModal,
    confirm_dialog: ConfirmDialog,
}

impl Root {
    pub fn new() -> Self {
        Self::default()
    }

    fn global_key(event: &EventKind) -> Option<Action> {
        let EventKind::Key(key) = event else {
            return None;
        };
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }
        match key.code {
            KeyCode::Char('a') => Some(Action::ModalOpen),
            KeyCode::Char('c') => Some(Action::ListCheckAll),
            KeyCode::Char('r') => Some(Action::ListResetRequest),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        }
    }

    fn areas(area: Rect) -> [Rect; 3] {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .areas(area)
    }
}

impl Component for Root {
    type Props<'a> = RootProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        match &props.state.mode {
            Mode::AddItem { input } => self
                .add_modal
                .handle_event(event, AddItemProps { input })
                .into_iter()
                .collect(),
            Mode::Confirming(confirm) => self
                .confirm_dialog
                .handle_event(event, ConfirmProps { confirm: *confirm })
                .into_iter()
                .collect::<Vec<_>>(),
            Mode::List => {
                if let Some(action) = Self::global_key(event) {
                    return vec![action];
                }
                let mut actions: Vec<Action> = self
                    .checklist
                    .handle_event(
                        event,
                        ChecklistProps {
                            checklist: &props.state.checklist,
                        },
                    )
                    .into_iter()
                    .collect();
                actions.extend(self.toolbar.handle_event(event, ()));
                actions
            }
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let [status_area, list_area, toolbar_area] = Self::areas(area);

        self.status_bar.render(
            frame,
            status_area,
            StatusProps {
                status: props.state.status(),
            },
        );
        self.checklist.render(
            frame,
            list_area,
            ChecklistProps {
                checklist: &props.state.checklist,
            },
        );
        self.toolbar.render(frame, toolbar_area, ());

        // Dialogs draw last, over the dimmed list
        self.add_modal
            .set_open(matches!(props.state.mode, Mode::AddItem { .. }));
        match &props.state.mode {
            Mode::List => {}
            Mode::AddItem { input } => {
                // A drag cannot finish under a dialog
                self.checklist.cancel_gesture();
                self.add_modal.render(frame, area, AddItemProps { input });
            }
            Mode::Confirming(confirm) => {
                self.checklist.cancel_gesture();
                self.confirm_dialog
                    .render(frame, area, ConfirmProps { confirm: *confirm });
            }
        }
    }
}
