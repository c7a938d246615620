use crate::keymap::Action;
use crossterm::event::KeyCode;

/// Single-line editable text with a character-indexed cursor.
///
/// Used by the sign-in and sign-up forms, the map search box and the chat
/// composer.
///
/// # Example
/// ```
/// use carpool::utils::text_input::TextInput;
///
/// let mut input = TextInput::new();
/// input.insert_char('¡');
/// input.insert_char('h');
/// assert_eq!(input.text(), "¡h");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    text: String,
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Input holding `text` with the cursor at the end
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in characters
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Text without surrounding whitespace
    pub fn text_trimmed(&self) -> &str {
        self.text.trim()
    }

    /// True when only whitespace has been typed
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Replace the text and move the cursor to the end
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.chars().count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Take the current text out, leaving the input empty
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }

    /// Text as drawn on screen; secret fields show one bullet per character
    pub fn display_text(&self, masked: bool) -> String {
        if masked {
            "•".repeat(self.text.chars().count())
        } else {
            self.text.clone()
        }
    }

    /// Insert at the cursor; control characters are ignored
    pub fn insert_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        let byte_index = self.byte_index(self.cursor);
        self.text.insert(byte_index, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let byte_index = self.byte_index(self.cursor - 1);
        self.text.remove(byte_index);
        self.cursor -= 1;
    }

    /// Delete the character under the cursor
    pub fn delete(&mut self) {
        if self.cursor >= self.text.chars().count() {
            return;
        }
        let byte_index = self.byte_index(self.cursor);
        self.text.remove(byte_index);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.chars().count() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.chars().count();
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .map(|(i, _)| i)
            .nth(char_index)
            .unwrap_or(self.text.len())
    }

    /// Handle an action from the keymap.
    ///
    /// Returns true if the action was handled.
    pub fn handle_action(&mut self, action: Action) -> bool {
        match action {
            Action::MoveLeft => self.move_left(),
            Action::MoveRight => self.move_right(),
            Action::Home => self.move_home(),
            Action::End => self.move_end(),
            Action::Backspace => self.backspace(),
            Action::DeleteChar => self.delete(),
            _ => return false,
        }
        true
    }

    /// Editing actions first, then printable characters.
    ///
    /// Returns true if the key changed the input or its cursor.
    pub fn handle_key(&mut self, key_code: KeyCode, action: Option<Action>) -> bool {
        if let Some(action) = action {
            if self.handle_action(action) {
                return true;
            }
        }
        match key_code {
            KeyCode::Char(c) => {
                self.insert_char(c);
                true
            }
            KeyCode::Backspace => {
                self.backspace();
                true
            }
            KeyCode::Delete => {
                self.delete();
                true
            }
            _ => false,
        }
    }

    /// Whether a mapped action should still fire while a text input has focus.
    ///
    /// Letters bound to actions (like `q` for Quit) must reach the input as
    /// text instead.
    pub fn is_action_allowed_when_focused(action: &Action) -> bool {
        matches!(
            action,
            Action::Back
                | Action::Confirm
                | Action::NextField
                | Action::PrevField
                | Action::MoveLeft
                | Action::MoveRight
                | Action::MoveUp
                | Action::MoveDown
                | Action::Home
                | Action::End
                | Action::Backspace
                | Action::DeleteChar
                | Action::GoHome
                | Action::Favorites
                | Action::ScrollUp
                | Action::ScrollDown
        )
    }
}
