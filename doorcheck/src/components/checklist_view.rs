//! The checklist body: rows, checkboxes, and drag-to-reorder
//!
//! Mouse handling bypasses the store for in-flight drags: the gesture and
//! the geometry it hit-tests against live in `&mut self`, updated as rows
//! render. Only the finished gesture turns into a [`Action::ListReorder`].

use crossterm::event::{MouseButton, MouseEventKind};
use doorcheck_core::{Checklist, DragGesture, ItemId, RowBand};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::modal::rect_contains;
use super::Component;
use crate::action::Action;
use crate::event::EventKind;

/// Each row takes a text line plus a spacer, giving the pointer a half-row
/// above and below every midpoint to land in.
const ROW_HEIGHT: u16 = 2;
/// Columns at the left edge of a row that grab instead of toggle; the
/// checkbox starts right after this zone and belongs to toggle territory
const HANDLE_WIDTH: u16 = 3;
/// Columns at the right edge of a row that delete instead of toggle
const DELETE_WIDTH: u16 = 4;

const HANDLE: &str = "\u{2261}";
const DELETE: &str = "\u{2715}";

/// Props for [`ChecklistView`]
pub struct ChecklistProps<'a> {
    pub checklist: &'a Checklist,
}

/// Scrollable list of checklist rows with mouse interaction
#[derive(Default)]
pub struct ChecklistView {
    gesture: DragGesture,
    /// Inner list area captured at render time
    list_area: Option<Rect>,
    /// Geometry of the visible rows captured at render time, in visual order
    row_bands: Vec<RowBand>,
    /// Index of the first visible item; clamped at render time
    offset: usize,
}

impl ChecklistView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Abandon any in-flight gesture without committing it
    pub fn cancel_gesture(&mut self) {
        self.gesture.release();
    }

    fn band_at(&self, column: u16, row: u16) -> Option<&RowBand> {
        let area = self.list_area?;
        if !rect_contains(area, column, row) {
            return None;
        }
        self.row_bands.iter().find(|band| band.contains(row as i32))
    }

    fn on_press(&mut self, column: u16, row: u16, checklist: &Checklist) -> Option<Action> {
        let area = self.list_area?;
        let band = *self.band_at(column, row)?;

        if column < area.x + HANDLE_WIDTH {
            // the gesture works on the full order so rows scrolled out of
            // view keep their places when the new order is committed
            self.gesture.press(band.id, row as i32, checklist.ids());
            None
        } else if column >= area.x + area.width.saturating_sub(DELETE_WIDTH) {
            Some(Action::ItemDeleteRequest(band.id))
        } else {
            Some(Action::ItemToggle(band.id))
        }
    }

    fn on_drag(&mut self, column: u16, row: u16) {
        // Outside the list there is nothing to hit-test against; the
        // gesture keeps its current order until the pointer comes back.
        let rows: &[RowBand] = match self.list_area {
            Some(area) if rect_contains(area, column, row) => &self.row_bands,
            _ => &[],
        };
        self.gesture.move_to(row as i32, rows);
    }

    fn scroll(&mut self, delta: isize, column: u16, row: u16) {
        match self.list_area {
            Some(area) if rect_contains(area, column, row) => {
                self.offset = self.offset.saturating_add_signed(delta);
            }
            _ => {}
        }
    }

    fn row_line(item_text: &str, checked: bool, grabbed: bool, width: u16) -> Line<'static> {
        let checkbox = if checked { "[x]" } else { "[ ]" };
        let body = format!("{HANDLE}  {checkbox} {item_text}");

        let mut style = Style::default();
        if checked {
            style = style.fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT);
        }
        if grabbed {
            style = style.bg(Color::Indexed(237)).remove_modifier(Modifier::CROSSED_OUT);
        }

        // Pin the delete glyph to the right edge
        let pad = (width as usize)
            .saturating_sub(body.chars().count())
            .saturating_sub(DELETE_WIDTH as usize)
            .max(1);
        let close = format!("{}  {DELETE} ", " ".repeat(pad));

        Line::from(vec![
            Span::styled(body, style),
            Span::styled(close, Style::default().fg(Color::DarkGray)),
        ])
    }
}

impl Component for ChecklistView {
    type Props<'a> = ChecklistProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        let EventKind::Mouse(mouse) = event else {
            return None;
        };

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.on_press(mouse.column, mouse.row, props.checklist)
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.on_drag(mouse.column, mouse.row);
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.gesture.release().map(Action::ListReorder)
            }
            MouseEventKind::ScrollDown => {
                self.scroll(1, mouse.column, mouse.row);
                None
            }
            MouseEventKind::ScrollUp => {
                self.scroll(-1, mouse.column, mouse.row);
                None
            }
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let block = Block::default().borders(Borders::ALL).title(" Checklist ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        self.list_area = Some(inner);
        self.row_bands.clear();

        if props.checklist.is_empty() {
            let placeholder = Paragraph::new(vec![
                Line::from("Nothing here yet."),
                Line::from("Press a to add an item."),
            ])
            .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(placeholder, inner);
            return;
        }

        // During a drag the gesture's working order wins over stored order
        let order: Vec<ItemId> = match self.gesture.visual_order() {
            Some(order) => order.to_vec(),
            None => props.checklist.ids(),
        };

        let capacity = (inner.height / ROW_HEIGHT).max(1) as usize;
        self.offset = self.offset.min(order.len().saturating_sub(capacity));

        for (slot, id) in order.iter().skip(self.offset).take(capacity).enumerate() {
            let Some(item) = props.checklist.get(*id) else {
                continue;
            };
            let y = inner.y + slot as u16 * ROW_HEIGHT;

            self.row_bands.push(RowBand {
                id: *id,
                top: y as i32,
                height: ROW_HEIGHT as i32,
            });

            let grabbed = self.gesture.dragging_id() == Some(*id);
            let line = Self::row_line(&item.text, item.checked, grabbed, inner.width);
            let row_area = Rect::new(inner.x, y, inner.width, 1);
            frame.render_widget(Paragraph::new(line), row_area);
        }
    }
}
