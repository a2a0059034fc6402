//! Actions: every discrete thing that can happen to the app
//!
//! Naming is subject-first (ItemToggle, ListCheckAll) so related actions
//! group together. Destructive actions come in a Request/Accept pair: the
//! request only opens the confirm dialog, and the mutation happens when the
//! dialog is accepted.

use doorcheck_core::ItemId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ===== Add modal =====
    /// Open the add-item modal with a cleared, focused input
    ModalOpen,
    /// Close whatever modal is open, discarding input
    ModalClose,
    /// The add-item input changed
    InputChange(String),

    // ===== Items =====
    /// Submit the add form; blank text appends nothing and leaves the
    /// modal open
    ItemAdd(String),
    /// Flip one item's checked state
    ItemToggle(ItemId),
    /// Ask to delete one item (confirm-gated)
    ItemDeleteRequest(ItemId),

    // ===== Whole list =====
    /// Check every item, unconditionally
    ListCheckAll,
    /// Ask to clear every checkmark (confirm-gated)
    ListResetRequest,
    /// Commit a finished drag gesture's visual order
    ListReorder(Vec<ItemId>),

    // ===== Confirm dialog =====
    ConfirmAccept,
    ConfirmCancel,

    // ===== Global =====
    Quit,
}

impl Action {
    /// Stable name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Action::ModalOpen => "ModalOpen",
            Action::ModalClose => "ModalClose",
            Action::InputChange(_) => "InputChange",
            Action::ItemAdd(_) => "ItemAdd",
            Action::ItemToggle(_) => "ItemToggle",
            Action::ItemDeleteRequest(_) => "ItemDeleteRequest",
            Action::ListCheckAll => "ListCheckAll",
            Action::ListResetRequest => "ListResetRequest",
            Action::ListReorder(_) => "ListReorder",
            Action::ConfirmAccept => "ConfirmAccept",
            Action::ConfirmCancel => "ConfirmCancel",
            Action::Quit => "Quit",
        }
    }
}
