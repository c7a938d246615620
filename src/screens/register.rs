//! Account creation screen.

use crate::components::{button_line, Footer, Header};
use crate::keymap::Action;
use crate::navigation::Route;
use crate::screens::screen_trait::{edit_input, pressed_key, Screen, ScreenAction, ScreenContext};
use crate::services::{AuthHandle, AuthRequest, AuthService};
use crate::styles::theme;
use crate::utils::{centered_column, screen_layout, FocusRing, TextInput};
use crate::widgets::{TextInputWidget, TextInputWidgetExt};
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use std::sync::Arc;

/// Password and confirmation differ; checked before any request
pub const MISMATCH_ERROR: &str = "Las contraseñas no coinciden";
/// Shown when the provider rejects the sign-up
pub const SIGN_UP_ERROR: &str = "Error al registrar";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Email,
    Password,
    Confirm,
    Back,
    Create,
}

const FOCUS_ORDER: &[Focus] = &[
    Focus::Email,
    Focus::Password,
    Focus::Confirm,
    Focus::Back,
    Focus::Create,
];

/// Account creation form
pub struct RegisterScreen {
    email: TextInput,
    password: TextInput,
    confirm: TextInput,
    focus: FocusRing<Focus>,
    error: Option<String>,
    pending: Option<AuthHandle>,
}

impl Default for RegisterScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterScreen {
    pub fn new() -> Self {
        Self {
            email: TextInput::new(),
            password: TextInput::new(),
            confirm: TextInput::new(),
            focus: FocusRing::new(FOCUS_ORDER),
            error: None,
            pending: None,
        }
    }

    /// Inline error currently shown
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focus.current() {
            Focus::Email => Some(&mut self.email),
            Focus::Password => Some(&mut self.password),
            Focus::Confirm => Some(&mut self.confirm),
            _ => None,
        }
    }

    fn submit(&mut self, ctx: &ScreenContext) {
        if self.pending.is_some() {
            return;
        }
        if self.password.text() != self.confirm.text() {
            self.error = Some(MISMATCH_ERROR.to_string());
            return;
        }
        self.error = None;
        self.pending = Some(AuthService::start(
            &ctx.services.runtime,
            Arc::clone(&ctx.services.auth),
            AuthRequest::SignUp,
            self.email.text_trimmed().to_string(),
            self.password.text().to_string(),
        ));
    }

    fn confirm(&mut self, ctx: &ScreenContext) -> ScreenAction {
        match self.focus.current() {
            Focus::Email | Focus::Password => self.focus.next(),
            Focus::Confirm | Focus::Create => self.submit(ctx),
            Focus::Back => return ScreenAction::back(),
        }
        ScreenAction::None
    }
}

impl Screen for RegisterScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &ScreenContext) -> Result<()> {
        let t = theme();
        let (header, body, footer) = screen_layout(area);
        Header::render(frame, header, "Registro", "");

        let column = centered_column(body, 60);
        let [title, email, password, confirm, error, buttons] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Length(1),
        ])
        .areas(column);

        frame.render_widget(
            Paragraph::new("CREAR CUENTA")
                .style(t.title_style().add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center),
            title,
        );
        frame.render_text_input_widget(
            TextInputWidget::new(&self.email)
                .title("Email")
                .focused(self.focus.is(Focus::Email)),
            email,
        );
        frame.render_text_input_widget(
            TextInputWidget::new(&self.password)
                .title("Contraseña")
                .masked(true)
                .focused(self.focus.is(Focus::Password)),
            password,
        );
        frame.render_text_input_widget(
            TextInputWidget::new(&self.confirm)
                .title("Confirmar contraseña")
                .masked(true)
                .focused(self.focus.is(Focus::Confirm)),
            confirm,
        );

        let status = if self.pending.is_some() {
            Line::styled("Creando cuenta...", t.warning_style())
        } else if let Some(message) = &self.error {
            Line::styled(message.clone(), t.error_style())
        } else {
            Line::default()
        };
        frame.render_widget(Paragraph::new(status), error);

        let focused_button = match self.focus.current() {
            Focus::Back => Some(0),
            Focus::Create => Some(1),
            _ => None,
        };
        frame.render_widget(
            Paragraph::new(button_line(&["ATRÁS", "CREAR"], focused_button))
                .alignment(Alignment::Center),
            buttons,
        );

        Footer::render(
            frame,
            footer,
            &ctx.hint(&[
                (Action::NextField, "Siguiente"),
                (Action::Confirm, "Aceptar"),
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
        match action {
            Some(Action::NextField | Action::MoveDown) => self.focus.next(),
            Some(Action::PrevField | Action::MoveUp) => self.focus.prev(),
            Some(Action::Confirm) => return Ok(self.confirm(ctx)),
            Some(Action::Back) => return Ok(ScreenAction::back()),
            Some(Action::Help) => return Ok(ScreenAction::ShowHelp),
            Some(Action::Quit) => return Ok(ScreenAction::Quit),
            _ => {
                if let Some(input) = self.focused_input() {
                    edit_input(input, &key, action);
                }
            }
        }
        Ok(ScreenAction::None)
    }

    fn tick(&mut self, _ctx: &ScreenContext) -> Result<ScreenAction> {
        let Some(result) = self.pending.as_mut().and_then(AuthHandle::try_recv) else {
            return Ok(ScreenAction::None);
        };
        self.pending = None;
        match result {
            Ok(_) => Ok(ScreenAction::replace(Route::Login)),
            Err(_) => {
                self.error = Some(SIGN_UP_ERROR.to_string());
                Ok(ScreenAction::None)
            }
        }
    }

    fn is_input_focused(&self) -> bool {
        matches!(
            self.focus.current(),
            Focus::Email | Focus::Password | Focus::Confirm
        )
    }
}
