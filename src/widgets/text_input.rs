//! Bordered single-line input for [`TextInput`] state.
//!
//! Handles placeholder text, password masking and the terminal cursor.

use crate::styles::theme;
use crate::utils::text_input::TextInput;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// # Example
/// ```
/// use carpool::utils::TextInput;
/// use carpool::widgets::TextInputWidget;
///
/// let input = TextInput::with_text("ana@ucc.edu.co");
/// let widget = TextInputWidget::new(&input)
///     .title("Correo")
///     .placeholder("correo@ucc.edu.co")
///     .focused(true);
/// // frame.render_text_input_widget(widget, area);
/// ```
pub struct TextInputWidget<'a> {
    input: &'a TextInput,
    title: Option<&'a str>,
    placeholder: Option<&'a str>,
    focused: bool,
    masked: bool,
}

impl<'a> TextInputWidget<'a> {
    /// Widget for `input`, unfocused and unmasked
    pub fn new(input: &'a TextInput) -> Self {
        Self {
            input,
            title: None,
            placeholder: None,
            focused: false,
            masked: false,
        }
    }

    /// Title drawn in the border
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    /// Text shown while the input is empty
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// Highlight the border and show the cursor
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Mask the text with bullets (passwords)
    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    fn display_text(&self) -> String {
        if self.input.text().is_empty() {
            self.placeholder.unwrap_or("").to_string()
        } else {
            self.input.display_text(self.masked)
        }
    }

    fn block(&self) -> Block<'a> {
        let t = theme();
        let border_style = if self.focused {
            t.border_focused_style()
        } else {
            t.border_style()
        };
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style);
        if let Some(title) = self.title {
            block = block.title(format!(" {} ", title));
        }
        block
    }
}

impl Widget for TextInputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = theme();
        let style = if self.input.text().is_empty() {
            t.muted_style()
        } else {
            t.text_style()
        };
        Paragraph::new(self.display_text())
            .block(self.block())
            .style(style)
            .render(area, buf);
    }
}

/// Render a [`TextInputWidget`] and place the terminal cursor when it is focused.
pub trait TextInputWidgetExt {
    fn render_text_input_widget(&mut self, widget: TextInputWidget, area: Rect);
}

impl TextInputWidgetExt for Frame<'_> {
    fn render_text_input_widget(&mut self, widget: TextInputWidget, area: Rect) {
        let focused = widget.focused;
        let cursor = widget.input.cursor();
        let inner = widget.block().inner(area);

        self.render_widget(widget, area);

        if focused && inner.width > 0 {
            let x = inner.x + (cursor as u16).min(inner.width - 1);
            self.set_cursor_position((x, inner.y));
        }
    }
}
