//! Sign-in screen, the root of the navigation graph.

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
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;
use std::sync::Arc;

/// Shown for empty fields and rejected credentials alike
pub const SIGN_IN_ERROR: &str = "Error al iniciar sesión";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Email,
    Password,
    SignIn,
    CreateAccount,
}

const FOCUS_ORDER: &[Focus] = &[
    Focus::Email,
    Focus::Password,
    Focus::SignIn,
    Focus::CreateAccount,
];

/// Email and password sign-in; the root of the stack
pub struct LoginScreen {
    email: TextInput,
    password: TextInput,
    focus: FocusRing<Focus>,
    error: Option<String>,
    pending: Option<AuthHandle>,
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginScreen {
    pub fn new() -> Self {
        Self {
            email: TextInput::new(),
            password: TextInput::new(),
            focus: FocusRing::new(FOCUS_ORDER),
            error: None,
            pending: None,
        }
    }

    /// Inline error currently shown
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// True while a sign-in request is in flight
    pub fn is_signing_in(&self) -> bool {
        self.pending.is_some()
    }

    fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focus.current() {
            Focus::Email => Some(&mut self.email),
            Focus::Password => Some(&mut self.password),
            _ => None,
        }
    }

    fn submit(&mut self, ctx: &ScreenContext) {
        if self.pending.is_some() {
            return;
        }
        if self.email.is_empty() || self.password.text().is_empty() {
            self.error = Some(SIGN_IN_ERROR.to_string());
            return;
        }
        self.error = None;
        self.pending = Some(AuthService::start(
            &ctx.services.runtime,
            Arc::clone(&ctx.services.auth),
            AuthRequest::SignIn,
            self.email.text_trimmed().to_string(),
            self.password.text().to_string(),
        ));
    }

    fn confirm(&mut self, ctx: &ScreenContext) -> ScreenAction {
        match self.focus.current() {
            Focus::Email => self.focus.next(),
            Focus::Password | Focus::SignIn => self.submit(ctx),
            // A covered login would still apply its sign-in result later
            Focus::CreateAccount if self.pending.is_some() => {}
            Focus::CreateAccount => return ScreenAction::push(Route::Register),
        }
        ScreenAction::None
    }
}

impl Screen for LoginScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &ScreenContext) -> Result<()> {
        let t = theme();
        let (header, body, footer) = screen_layout(area);
        Header::render(frame, header, "Iniciar sesión", "");

        let column = centered_column(body, 60);
        let [intro, email, password, forgot, error, buttons] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
        ])
        .areas(column);

        frame.render_widget(
            Paragraph::new(
                "Inicia sesión con tu correo electrónico para acceder a los servicios.",
            )
            .style(t.text_style())
            .wrap(Wrap { trim: true }),
            intro,
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
        frame.render_widget(
            Paragraph::new("¿Olvidaste la contraseña?")
                .style(t.muted_style())
                .alignment(ratatui::layout::Alignment::Right),
            forgot,
        );

        let status = if self.pending.is_some() {
            Line::styled("Iniciando sesión...", t.warning_style())
        } else if let Some(message) = &self.error {
            Line::styled(message.clone(), t.error_style())
        } else {
            Line::default()
        };
        frame.render_widget(Paragraph::new(status), error);

        let focused_button = match self.focus.current() {
            Focus::SignIn => Some(0),
            Focus::CreateAccount => Some(1),
            _ => None,
        };
        frame.render_widget(
            Paragraph::new(button_line(&["INICIAR SESIÓN", "CREAR CUENTA"], focused_button))
                .alignment(ratatui::layout::Alignment::Center),
            buttons,
        );

        Footer::render(
            frame,
            footer,
            &ctx.hint(&[
                (Action::NextField, "Siguiente"),
                (Action::Confirm, "Aceptar"),
                (Action::Help, "Ayuda"),
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
            Ok(_) => {
                self.password.clear();
                Ok(ScreenAction::replace(Route::Profile))
            }
            Err(_) => {
                self.error = Some(SIGN_IN_ERROR.to_string());
                Ok(ScreenAction::None)
            }
        }
    }

    fn is_input_focused(&self) -> bool {
        matches!(self.focus.current(), Focus::Email | Focus::Password)
    }
}
