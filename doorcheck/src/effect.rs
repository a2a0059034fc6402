//! Declarative side effects emitted by the reducer
//!
//! Effects describe work for the main loop; the reducer itself never
//! touches the filesystem.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Persist the full checklist snapshot
    SaveList,
}
