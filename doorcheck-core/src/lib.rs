//! Domain logic for doorcheck
//!
//! This crate holds everything about the checklist that is independent of
//! the terminal UI:
//!
//! - **Items**: the ordered list and its pure mutation operations
//! - **Drag gesture**: the press/move/release state machine behind
//!   drag-to-reorder, expressed in abstract screen coordinates
//! - **Snapshot**: JSON persistence with a seed-list fallback
//!
//! The UI crate maps input events onto these types and renders their state.

pub mod drag;
pub mod item;
pub mod snapshot;

pub use drag::{DragGesture, RowBand, DRAG_THRESHOLD};
pub use item::{Checklist, Item, ItemId};
pub use snapshot::{default_data_path, SnapshotError, SnapshotStore};
