//! Modal overlay helpers
//!
//! Dims the whole buffer fresh each frame and clears the dialog area, so
//! the background keeps rendering underneath an open dialog.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    widgets::{Clear, Widget},
    Frame,
};

/// Dim everything rendered so far, then clear the dialog area
///
/// Call after the background content and before the dialog widgets.
pub fn render_overlay(frame: &mut Frame, dialog_area: Rect) {
    dim_buffer(frame.buffer_mut());
    frame.render_widget(Clear, dialog_area);
}

/// Push every cell into the background by flattening its style
fn dim_buffer(buffer: &mut Buffer) {
    for cell in buffer.content.iter_mut() {
        cell.fg = Color::DarkGray;
        cell.bg = Color::Reset;
        cell.modifier = ratatui::style::Modifier::empty();
    }
}

/// Calculate a centered rectangle within an area
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width.saturating_sub(2));
    let height = height.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Whether a mouse position falls inside a rect
pub(crate) fn rect_contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}
