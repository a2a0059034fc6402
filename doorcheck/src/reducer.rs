//! Reducer: all state transitions in one pure function
//!
//! Every mutation that must outlive the session emits [`Effect::SaveList`];
//! the main loop persists and re-renders after dispatch, so state, screen,
//! and snapshot stay in step.

use crate::action::Action;
use crate::effect::Effect;
use crate::state::{AppState, Confirm, Mode};
use crate::store::DispatchResult;

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult {
    match action {
        // ===== Add modal =====
        Action::ModalOpen => {
            state.mode = Mode::AddItem {
                input: String::new(),
            };
            DispatchResult::changed()
        }

        Action::ModalClose => {
            if state.mode == Mode::List {
                DispatchResult::unchanged()
            } else {
                // dropping the mode also discards any typed input
                state.mode = Mode::List;
                DispatchResult::changed()
            }
        }

        Action::InputChange(value) => match &mut state.mode {
            Mode::AddItem { input } => {
                *input = value;
                DispatchResult::changed()
            }
            _ => DispatchResult::unchanged(),
        },

        // ===== Items =====
        Action::ItemAdd(text) => {
            // a blank submit leaves the modal open for correction; only a
            // successful add closes it
            match state.checklist.add(&text) {
                Some(_) => {
                    state.mode = Mode::List;
                    DispatchResult::changed_with(Effect::SaveList)
                }
                None => DispatchResult::unchanged(),
            }
        }

        Action::ItemToggle(id) => {
            if state.checklist.toggle(id) {
                DispatchResult::changed_with(Effect::SaveList)
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::ItemDeleteRequest(id) => {
            // stale ids (row gone between render and click) are ignored
            if state.checklist.get(id).is_none() {
                return DispatchResult::unchanged();
            }
            state.mode = Mode::Confirming(Confirm::DeleteItem(id));
            DispatchResult::changed()
        }

        // ===== Whole list =====
        Action::ListCheckAll => {
            state.checklist.check_all();
            DispatchResult::changed_with(Effect::SaveList)
        }

        Action::ListResetRequest => {
            state.mode = Mode::Confirming(Confirm::ResetAll);
            DispatchResult::changed()
        }

        Action::ListReorder(order) => {
            state.checklist.reorder(&order);
            DispatchResult::changed_with(Effect::SaveList)
        }

        // ===== Confirm dialog =====
        Action::ConfirmAccept => {
            let Mode::Confirming(confirm) = &state.mode else {
                return DispatchResult::unchanged();
            };
            let confirm = *confirm;
            state.mode = Mode::List;
            match confirm {
                Confirm::DeleteItem(id) => {
                    if state.checklist.remove(id) {
                        DispatchResult::changed_with(Effect::SaveList)
                    } else {
                        DispatchResult::changed()
                    }
                }
                Confirm::ResetAll => {
                    state.checklist.reset_all();
                    DispatchResult::changed_with(Effect::SaveList)
                }
            }
        }

        Action::ConfirmCancel => {
            if matches!(state.mode, Mode::Confirming(_)) {
                state.mode = Mode::List;
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        // ===== Global =====
        Action::Quit => {
            // handled in the main loop, not here
            DispatchResult::unchanged()
        }
    }
}
