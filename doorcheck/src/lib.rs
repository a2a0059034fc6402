//! doorcheck - a leave-the-house checklist for the terminal
//!
//! The app follows a centralized-dispatch architecture:
//!
//! 1. Terminal events arrive through an async poller ([`event`])
//! 2. Components map events to [`action::Action`]s ([`components`])
//! 3. The reducer mutates [`state::AppState`] and emits [`effect::Effect`]s
//!    ([`reducer`], [`store`])
//! 4. The main loop performs effects (snapshot saves) and redraws
//!
//! All list semantics live in `doorcheck-core`; this crate is the wiring
//! between the terminal and that domain.

pub mod action;
pub mod components;
pub mod effect;
pub mod event;
pub mod reducer;
pub mod state;
pub mod store;
pub mod testing;
