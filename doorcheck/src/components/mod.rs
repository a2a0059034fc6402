//! UI components
//!
//! Components are pure at the data level: props carry everything they read,
//! `handle_event` returns actions instead of mutating state, and `render`
//! draws from props plus internal UI state (cursor position, drag progress,
//! clickable areas captured at render time).

use ratatui::{layout::Rect, Frame};

use crate::action::Action;
use crate::event::EventKind;

mod add_modal;
mod checklist_view;
mod confirm_dialog;
mod modal;
mod root;
mod status_bar;
mod text_input;
mod toolbar;

pub use add_modal::AddItemModal;
pub use checklist_view::ChecklistView;
pub use confirm_dialog::ConfirmDialog;
pub use modal::{centered_rect, render_overlay};
pub use root::{Root, RootProps};
pub use status_bar::StatusBar;
pub use text_input::{TextInput, TextInputProps};
pub use toolbar::Toolbar;

/// A UI element that renders from props and emits actions
///
/// Internal UI state (cursor position, in-flight drag, hit-test areas) lives
/// in `&mut self`; everything else arrives through `Props`. Data mutations
/// must go through actions.
pub trait Component {
    /// Read-only data needed to handle events and render
    type Props<'a>;

    /// Handle an event and return actions to dispatch
    ///
    /// Returns any `IntoIterator` over [`Action`]: `None` for no actions,
    /// `Some(action)` for one, `vec![...]` for several. The default is a
    /// render-only component that emits nothing.
    #[allow(unused_variables)]
    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        None::<Action>
    }

    /// Render the component to the frame
    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}
