//! Chat with the selected driver.

use crate::components::{Footer, Header};
use crate::keymap::Action;
use crate::screens::screen_trait::{
    bottom_bar, edit_input, pressed_key, Screen, ScreenAction, ScreenContext,
};
use crate::services::{Author, ChatSession, Message};
use crate::styles::theme;
use crate::utils::{screen_layout, TextInput};
use crate::widgets::{TextInputWidget, TextInputWidgetExt};
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

/// Conversation with the selected driver
pub struct ChatScreen {
    input: TextInput,
    session: Option<ChatSession>,
    /// Lines scrolled up from the bottom; 0 follows new messages
    scroll_back: u16,
}

impl Default for ChatScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatScreen {
    pub fn new() -> Self {
        Self {
            input: TextInput::new(),
            session: None,
            scroll_back: 0,
        }
    }

    /// Snapshot of the conversation, oldest first
    pub fn messages(&self) -> Vec<Message> {
        self.session
            .as_ref()
            .map(ChatSession::messages)
            .unwrap_or_default()
    }

    fn send(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.send(self.input.text()) {
            self.input.clear();
            self.scroll_back = 0;
        }
    }

    fn message_lines(messages: &[Message]) -> Vec<Line<'static>> {
        let t = theme();
        let mut lines = Vec::new();
        for message in messages {
            let outgoing = message.author == Author::User;
            let alignment = if outgoing {
                Alignment::Right
            } else {
                Alignment::Left
            };
            let mut text = format!(" {} ", message.text);
            if !message.emojis.is_empty() {
                text.push_str(&message.emojis.join(""));
                text.push(' ');
            }
            lines.push(Line::from(Span::styled(text, t.bubble_style(outgoing))).alignment(alignment));
            lines.push(
                Line::from(Span::styled(message.timestamp.clone(), t.muted_style()))
                    .alignment(alignment),
            );
            lines.push(Line::from(""));
        }
        lines
    }
}

impl Screen for ChatScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &ScreenContext) -> Result<()> {
        let t = theme();
        let (header, body, footer) = screen_layout(area);
        Header::render(
            frame,
            header,
            &ctx.config.chat.driver_name,
            &ctx.config.chat.vehicle,
        );

        let [log_area, input_area] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(3)]).areas(body);

        let log = Paragraph::new(Self::message_lines(&self.messages())).wrap(Wrap { trim: false });
        // Rows after wrapping, measured inside the borders
        let total = u16::try_from(log.line_count(log_area.width.saturating_sub(2)))
            .unwrap_or(u16::MAX);
        let visible = log_area.height.saturating_sub(2);
        let max_offset = total.saturating_sub(visible);
        self.scroll_back = self.scroll_back.min(max_offset);
        let offset = max_offset - self.scroll_back;

        frame.render_widget(
            log.scroll((offset, 0))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(t.border_style()),
                ),
            log_area,
        );

        frame.render_text_input_widget(
            TextInputWidget::new(&self.input)
                .placeholder("Escribir un mensaje")
                .focused(true),
            input_area,
        );

        Footer::render(
            frame,
            footer,
            &ctx.hint(&[
                (Action::Confirm, "Enviar"),
                (Action::ScrollUp, "Historial"),
                (Action::GoHome, "Home"),
                (Action::Favorites, "Favoritos"),
                (Action::Back, "Atrás"),
            ]),
        );
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let Some(key) = pressed_key(&event) else {
            return Ok(ScreenAction::None);
        };
        let action = ctx.action_for(&key, self.is_input_focused());
        if let Some(nav) = action.and_then(bottom_bar) {
            return Ok(nav);
        }
        match action {
            Some(Action::Confirm) => self.send(),
            Some(Action::ScrollUp | Action::MoveUp) => {
                self.scroll_back = self.scroll_back.saturating_add(3);
            }
            Some(Action::ScrollDown | Action::MoveDown) => {
                self.scroll_back = self.scroll_back.saturating_sub(3);
            }
            _ => {
                edit_input(&mut self.input, &key, action);
            }
        }
        Ok(ScreenAction::None)
    }

    fn is_input_focused(&self) -> bool {
        true
    }

    fn on_enter(&mut self, ctx: &ScreenContext) -> Result<()> {
        if self.session.is_none() {
            self.session = Some(ChatSession::new(
                ctx.services.runtime.clone(),
                ctx.config.reply_delay(),
                ctx.config.chat.reply_policy,
            ));
        }
        Ok(())
    }

    fn on_exit(&mut self, _ctx: &ScreenContext) -> Result<()> {
        self.session = None;
        Ok(())
    }
}
