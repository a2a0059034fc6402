//! Application state - single source of truth for rendering
//!
//! Components receive `&AppState` as props; only the reducer mutates it.

use doorcheck_core::{Checklist, ItemId};

/// What the confirm dialog is gating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirm {
    DeleteItem(ItemId),
    ResetAll,
}

impl Confirm {
    pub fn prompt(&self) -> &'static str {
        match self {
            Confirm::DeleteItem(_) => "Delete this item?",
            Confirm::ResetAll => "Clear every checkmark?",
        }
    }
}

/// Which surface currently owns the event stream
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    /// The checklist itself
    #[default]
    List,
    /// Add-item modal with the current input value
    AddItem { input: String },
    /// Yes/no prompt gating a destructive action
    Confirming(Confirm),
}

/// What the status bar shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// N items still unchecked (shown as "0 remaining" for an empty list)
    Remaining(usize),
    /// Non-empty list, everything checked
    Complete,
}

/// Everything the UI needs to render
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub checklist: Checklist,
    pub mode: Mode,
}

impl AppState {
    pub fn new(checklist: Checklist) -> Self {
        Self {
            checklist,
            mode: Mode::List,
        }
    }

    /// Status summary: completion once a non-empty list is fully checked,
    /// otherwise the remaining count
    pub fn status(&self) -> Status {
        let unchecked = self.checklist.unchecked_count();
        if !self.checklist.is_empty() && unchecked == 0 {
            Status::Complete
        } else {
            Status::Remaining(unchecked)
        }
    }

    pub fn is_modal_open(&self) -> bool {
        self.mode != Mode::List
    }
}
