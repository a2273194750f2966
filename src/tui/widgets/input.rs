//! Text input widget
//!
//! A single-line field with a character-indexed cursor, so accented input
//! (cédula names, ñ) edits correctly. Secret fields render as bullets.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

const MASK_CHAR: char = '•';

/// A single-line text field
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position, in characters
    pub cursor: usize,
    pub focused: bool,
    pub placeholder: String,
    pub label: String,
    /// Render the content as bullets
    pub masked: bool,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    /// Set content and put the cursor at the end
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.set_value(content);
        self
    }

    pub fn set_value(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor = self.char_len();
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    pub fn value(&self) -> &str {
        &self.content
    }

    /// What the field shows: bullets for secrets, placeholder when empty
    pub fn display_text(&self) -> String {
        if self.content.is_empty() && !self.focused {
            self.placeholder.clone()
        } else if self.masked {
            MASK_CHAR.to_string().repeat(self.char_len())
        } else {
            self.content.clone()
        }
    }

    fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }
}

impl Widget for &TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label_width = if self.label.is_empty() {
            0
        } else {
            self.label.chars().count() as u16 + 2
        };
        let input_start = area.x + label_width;

        if !self.label.is_empty() {
            let label_style = if self.focused {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Cyan)
            };
            let label_line = Line::from(vec![
                Span::styled(self.label.as_str(), label_style),
                Span::raw(": "),
            ]);
            buf.set_line(area.x, area.y, &label_line, label_width);
        }

        let text_style = if self.content.is_empty() && !self.focused {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White)
        };
        let width = area.width.saturating_sub(label_width) as usize;
        buf.set_stringn(input_start, area.y, self.display_text(), width, text_style);

        if self.focused {
            let cursor_x = input_start + self.cursor as u16;
            if cursor_x < area.x + area.width {
                let cursor_char = if self.masked && self.cursor < self.char_len() {
                    MASK_CHAR
                } else {
                    self.content.chars().nth(self.cursor).unwrap_or(' ')
                };
                buf.set_string(
                    cursor_x,
                    area.y,
                    cursor_char.to_string(),
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multibyte_editing() {
        let mut input = TextInput::new().content("Muñoz");
        assert_eq!(input.cursor, 5);

        input.move_left();
        input.move_left();
        input.backspace();
        assert_eq!(input.value(), "Muoz");

        input.insert('ñ');
        input.move_end();
        input.insert('!');
        assert_eq!(input.value(), "Muñoz!");
    }

    #[test]
    fn test_delete_at_end_is_noop() {
        let mut input = TextInput::new().content("ab");
        input.delete();
        assert_eq!(input.value(), "ab");
        input.move_start();
        input.delete();
        assert_eq!(input.value(), "b");
    }

    #[test]
    fn test_masked_display() {
        let mut input = TextInput::new().masked().placeholder("contrasena");
        assert_eq!(input.display_text(), "contrasena");
        input.focused = true;
        input.insert('a');
        input.insert('é');
        assert_eq!(input.display_text(), "••");
        assert_eq!(input.value(), "aé");
    }
}
