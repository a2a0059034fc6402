//! Single-line text input

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::Component;
use crate::action::Action;
use crate::event::EventKind;

/// Props for [`TextInput`]
pub struct TextInputProps<'a> {
    /// Current input value
    pub value: &'a str,
    /// Placeholder shown while the value is empty
    pub placeholder: &'a str,
    /// Whether keystrokes reach this input
    pub is_focused: bool,
    /// Action built from the new value on each edit
    pub on_change: fn(String) -> Action,
    /// Action built from the value on Enter
    pub on_submit: fn(String) -> Action,
}

/// A single-line text input with cursor
///
/// Handles typing, backspace, delete, and cursor movement. Emits
/// `on_change` for each edit and `on_submit` for Enter; the value itself
/// lives in app state, only the cursor is component-internal.
#[derive(Default)]
pub struct TextInput {
    /// Cursor position (byte index into the value)
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the cursor for a freshly opened, empty input
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    fn clamp_cursor(&mut self, value: &str) {
        self.cursor = self.cursor.min(value.len());
    }

    fn move_cursor_left(&mut self, value: &str) {
        if self.cursor > 0 {
            let mut new_pos = self.cursor - 1;
            while new_pos > 0 && !value.is_char_boundary(new_pos) {
                new_pos -= 1;
            }
            self.cursor = new_pos;
        }
    }

    fn move_cursor_right(&mut self, value: &str) {
        if self.cursor < value.len() {
            let mut new_pos = self.cursor + 1;
            while new_pos < value.len() && !value.is_char_boundary(new_pos) {
                new_pos += 1;
            }
            self.cursor = new_pos;
        }
    }

    fn insert_char(&mut self, value: &str, c: char) -> String {
        let mut new_value = String::with_capacity(value.len() + c.len_utf8());
        new_value.push_str(&value[..self.cursor]);
        new_value.push(c);
        new_value.push_str(&value[self.cursor..]);
        self.cursor += c.len_utf8();
        new_value
    }

    /// Delete the character before the cursor (backspace)
    fn delete_char_before(&mut self, value: &str) -> Option<String> {
        if self.cursor == 0 {
            return None;
        }

        let char_start = value[..self.cursor]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0);

        let mut new_value = String::with_capacity(value.len());
        new_value.push_str(&value[..char_start]);
        new_value.push_str(&value[self.cursor..]);
        self.cursor = char_start;
        Some(new_value)
    }

    /// Delete the character under the cursor (delete key)
    fn delete_char_at(&self, value: &str) -> Option<String> {
        if self.cursor >= value.len() {
            return None;
        }

        let mut new_value = String::with_capacity(value.len());
        new_value.push_str(&value[..self.cursor]);
        if let Some((_, c)) = value[self.cursor..].char_indices().next() {
            new_value.push_str(&value[self.cursor + c.len_utf8()..]);
        }
        Some(new_value)
    }
}

impl Component for TextInput {
    type Props<'a> = TextInputProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }

        // The value may have changed out from under the cursor
        self.clamp_cursor(props.value);

        let EventKind::Key(key) = event else {
            return None;
        };

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('a') => {
                    self.cursor = 0;
                    None
                }
                KeyCode::Char('e') => {
                    self.cursor = props.value.len();
                    None
                }
                // Ctrl+U clears the line
                KeyCode::Char('u') => {
                    self.cursor = 0;
                    Some((props.on_change)(String::new()))
                }
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char(c) => {
                let new_value = self.insert_char(props.value, c);
                Some((props.on_change)(new_value))
            }
            KeyCode::Backspace => self
                .delete_char_before(props.value)
                .map(|v| (props.on_change)(v)),
            KeyCode::Delete => self
                .delete_char_at(props.value)
                .map(|v| (props.on_change)(v)),
            KeyCode::Left => {
                self.move_cursor_left(props.value);
                None
            }
            KeyCode::Right => {
                self.move_cursor_right(props.value);
                None
            }
            KeyCode::Home => {
                self.cursor = 0;
                None
            }
            KeyCode::End => {
                self.cursor = props.value.len();
                None
            }
            KeyCode::Enter => Some((props.on_submit)(props.value.to_string())),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.clamp_cursor(props.value);

        let (display_text, style) = if props.value.is_empty() {
            (props.placeholder, Style::default().fg(Color::DarkGray))
        } else {
            (props.value, Style::default())
        };

        let border_style = if props.is_focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let paragraph = Paragraph::new(display_text)
            .style(style)
            .block(Block::default().borders(Borders::ALL).border_style(border_style));

        frame.render_widget(paragraph, area);

        if props.is_focused {
            // Offset by the border; byte index works as a column as long as
            // the input is ASCII, which item names overwhelmingly are
            let cursor_x = area.x + 1 + self.cursor as u16;
            let cursor_y = area.y + 1;
            if cursor_x < area.x + area.width.saturating_sub(1) {
                frame.set_cursor_position((cursor_x, cursor_y));
            }
        }
    }
}
