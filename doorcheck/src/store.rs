//! Centralized state store with reducer pattern
//!
//! The store holds the application state and provides the single point of
//! mutation through [`Store::dispatch`]. Every dispatch is logged with the
//! action name and its outcome.

use crate::action::Action;
use crate::effect::Effect;
use crate::state::AppState;

/// Result of dispatching an action
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DispatchResult {
    /// Whether the state changed and a re-render is needed
    pub changed: bool,
    /// Effects for the main loop to perform, in order
    pub effects: Vec<Effect>,
}

impl DispatchResult {
    pub fn unchanged() -> Self {
        Self::default()
    }

    pub fn changed() -> Self {
        Self {
            changed: true,
            effects: Vec::new(),
        }
    }

    pub fn changed_with(effect: Effect) -> Self {
        Self {
            changed: true,
            effects: vec![effect],
        }
    }
}

/// A reducer mutates state for one action and reports what happened
pub type Reducer = fn(&mut AppState, Action) -> DispatchResult;

pub struct Store {
    state: AppState,
    reducer: Reducer,
}

impl Store {
    pub fn new(state: AppState, reducer: Reducer) -> Self {
        Self { state, reducer }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run the reducer for one action
    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        let name = action.name();
        let result = (self.reducer)(&mut self.state, action);
        tracing::debug!(
            action = name,
            changed = result.changed,
            effects = result.effects.len(),
            "action processed"
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducer::reducer;
    use doorcheck_core::{Checklist, ItemId};

    #[test]
    fn dispatch_runs_the_reducer_and_reports_changes() {
        let mut store = Store::new(AppState::new(Checklist::seed()), reducer);

        let result = store.dispatch(Action::ItemToggle(ItemId(1)));
        assert!(result.changed);
        assert_eq!(result.effects, vec![Effect::SaveList]);
        assert!(store.state().checklist.get(ItemId(1)).unwrap().checked);
    }

    #[test]
    fn noop_actions_report_unchanged() {
        let mut store = Store::new(AppState::new(Checklist::seed()), reducer);

        let result = store.dispatch(Action::ItemToggle(ItemId(99)));
        assert!(!result.changed);
        assert!(result.effects.is_empty());
    }
}
