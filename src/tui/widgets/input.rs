//! Text input widget
//!
//! A single-line text field with a character-based cursor and optional
//! masking for secrets.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// Character used in place of each masked character
const MASK_CHAR: char = '*';

/// A simple text input widget
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    content: String,
    /// Cursor position, in characters
    cursor: usize,
    /// Whether the input is focused
    pub focused: bool,
    /// Whether to echo `*` instead of the content
    pub masked: bool,
    /// Placeholder text
    pub placeholder: String,
    /// Label
    pub label: String,
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

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    /// Set content and move the cursor to the end
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.set_content(content);
        self
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor = self.char_len();
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_offset(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_offset(self.cursor);
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

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Text as it should appear on screen
    fn display_text(&self) -> String {
        if self.masked {
            MASK_CHAR.to_string().repeat(self.char_len())
        } else {
            self.content.clone()
        }
    }

    /// Styled spans for the value, including the cursor block when focused
    pub fn value_spans(&self) -> Vec<Span<'static>> {
        let value_style = Style::default().fg(Color::White);

        if self.content.is_empty() && !self.focused {
            return vec![Span::styled(
                self.placeholder.clone(),
                Style::default().fg(Color::DarkGray),
            )];
        }

        let text = self.display_text();
        if !self.focused {
            return vec![Span::styled(text, value_style)];
        }

        let chars: Vec<char> = text.chars().collect();
        let cursor = self.cursor.min(chars.len());
        let before: String = chars[..cursor].iter().collect();
        let at = chars.get(cursor).copied().unwrap_or(' ');
        let after: String = chars.iter().skip(cursor + 1).collect();

        vec![
            Span::styled(before, value_style),
            Span::styled(
                at.to_string(),
                Style::default().fg(Color::Black).bg(Color::Cyan),
            ),
            Span::styled(after, value_style),
        ]
    }

    /// Label plus value as one line
    pub fn line(&self) -> Line<'static> {
        let label_style = if self.focused {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow)
        };

        let mut spans = Vec::new();
        if !self.label.is_empty() {
            spans.push(Span::styled(format!("{}: ", self.label), label_style));
        }
        spans.extend(self.value_spans());
        Line::from(spans)
    }
}

impl Widget for TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_line(area.x, area.y, &self.line(), area.width);
    }
}
