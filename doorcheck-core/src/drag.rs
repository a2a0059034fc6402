//! Drag-to-reorder gesture state machine
//!
//! Tracks one press/move/release gesture in abstract screen coordinates,
//! decoupled from any input-device API. While a drag is live the machine's
//! working order is the single source of truth for row order; the renderer
//! draws rows in that order and feeds the resulting geometry back in on the
//! next move. The final order is handed back on release for the caller to
//! commit to the list.

use crate::item::ItemId;

/// Vertical movement (in cells) a press must exceed before it becomes a
/// drag. Zero means any whole-cell movement qualifies; terminal rows are
/// coarse enough that this cleanly separates taps from reorder gestures.
pub const DRAG_THRESHOLD: i32 = 0;

/// Screen-space band occupied by one rendered row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowBand {
    pub id: ItemId,
    pub top: i32,
    pub height: i32,
}

impl RowBand {
    pub fn contains(&self, y: i32) -> bool {
        y >= self.top && y < self.top + self.height
    }

    fn midpoint(&self) -> i32 {
        self.top + self.height / 2
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Pressed { start_y: i32 },
    Dragging,
}

/// Per-gesture state machine: Idle -> Pressed -> Dragging -> Idle
///
/// Only one gesture is tracked at a time; a fresh press replaces whatever
/// was in flight (pointer devices release before the next press).
#[derive(Debug, Clone)]
pub struct DragGesture {
    threshold: i32,
    phase: Phase,
    grabbed: Option<ItemId>,
    order: Vec<ItemId>,
}

impl Default for DragGesture {
    fn default() -> Self {
        Self::new(DRAG_THRESHOLD)
    }
}

impl DragGesture {
    pub fn new(threshold: i32) -> Self {
        Self {
            threshold,
            phase: Phase::Idle,
            grabbed: None,
            order: Vec::new(),
        }
    }

    /// Pointer pressed on a row's drag handle
    ///
    /// Records the row, the starting coordinate, and the visual order at
    /// press time. Nothing is reordered yet.
    pub fn press(&mut self, id: ItemId, y: i32, order: Vec<ItemId>) {
        self.phase = Phase::Pressed { start_y: y };
        self.grabbed = Some(id);
        self.order = order;
    }

    /// Pointer moved while held down
    ///
    /// `rows` describes the bands currently on screen (rendered from the
    /// working order); an empty slice means the pointer has no row under it.
    /// Returns true when the visual state changed and a redraw is due.
    pub fn move_to(&mut self, y: i32, rows: &[RowBand]) -> bool {
        let Some(grabbed) = self.grabbed else {
            return false;
        };
        match self.phase {
            Phase::Idle => false,
            Phase::Pressed { start_y } => {
                if (y - start_y).abs() > self.threshold {
                    self.phase = Phase::Dragging;
                    // the drag marker appeared, so a redraw is due either way
                    self.shift(grabbed, y, rows);
                    true
                } else {
                    false
                }
            }
            Phase::Dragging => self.shift(grabbed, y, rows),
        }
    }

    /// Pointer released, ending the gesture
    ///
    /// Returns the final visual order if the gesture reached `Dragging`;
    /// a tap that never crossed the threshold returns `None` and leaves
    /// nothing to commit.
    pub fn release(&mut self) -> Option<Vec<ItemId>> {
        let committed = matches!(self.phase, Phase::Dragging);
        self.phase = Phase::Idle;
        self.grabbed = None;
        let order = std::mem::take(&mut self.order);
        committed.then_some(order)
    }

    /// Id of the row currently carrying the drag marker
    pub fn dragging_id(&self) -> Option<ItemId> {
        match self.phase {
            Phase::Dragging => self.grabbed,
            _ => None,
        }
    }

    /// Whether a gesture (pressed or dragging) is in flight
    pub fn is_active(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    /// Working order while the drag is live
    pub fn visual_order(&self) -> Option<&[ItemId]> {
        match self.phase {
            Phase::Dragging => Some(&self.order),
            _ => None,
        }
    }

    /// Move the grabbed id next to the row under the pointer: before it
    /// when the pointer sits above the row's midpoint, after it otherwise.
    fn shift(&mut self, grabbed: ItemId, y: i32, rows: &[RowBand]) -> bool {
        let Some(target) = rows.iter().find(|band| band.id != grabbed && band.contains(y))
        else {
            return false;
        };
        let Some(from) = self.order.iter().position(|&id| id == grabbed) else {
            return false;
        };
        self.order.remove(from);
        let target_pos = self
            .order
            .iter()
            .position(|&id| id == target.id)
            .unwrap_or(self.order.len());
        let to = if y < target.midpoint() {
            target_pos
        } else {
            target_pos + 1
        };
        self.order.insert(to, grabbed);
        to != from
    }
}
