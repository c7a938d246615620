//! Profile screen: signed-in user, favorites and the main actions.

use crate::components::{button_line, Footer, Header};
use crate::keymap::Action;
use crate::navigation::Route;
use crate::screens::screen_trait::{pressed_key, Screen, ScreenAction, ScreenContext};
use crate::services::UserProfile;
use crate::styles::theme;
use crate::utils::{centered_column, screen_layout, FocusRing};
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use tracing::info;

/// Shown when the signed-in user has no display name
pub const NAME_FALLBACK: &str = "Nombre no disponible";
/// Shown when the signed-in user has no email
pub const EMAIL_FALLBACK: &str = "Correo no disponible";
const PHONE: &str = "3202035472";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    FindDrivers,
    RequestService,
    SignOut,
}

const FOCUS_ORDER: &[Focus] = &[Focus::FindDrivers, Focus::RequestService, Focus::SignOut];

/// Signed-in user, favorites and the main actions
pub struct ProfileScreen {
    focus: FocusRing<Focus>,
    user: Option<UserProfile>,
}

impl Default for ProfileScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileScreen {
    pub fn new() -> Self {
        Self {
            focus: FocusRing::new(FOCUS_ORDER),
            user: None,
        }
    }

    /// Name and email shown on the card, with fallbacks for missing fields
    pub fn display_identity(user: Option<&UserProfile>) -> (String, String) {
        let name = user
            .and_then(|u| u.display_name.clone())
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| NAME_FALLBACK.to_string());
        let email = user
            .and_then(|u| u.email.clone())
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| EMAIL_FALLBACK.to_string());
        (name, email)
    }

    fn activate(&mut self, ctx: &ScreenContext) -> ScreenAction {
        match self.focus.current() {
            Focus::FindDrivers => ScreenAction::push(Route::Drivers),
            Focus::RequestService => ScreenAction::push(Route::Map),
            Focus::SignOut => {
                ctx.services.auth.sign_out();
                info!("Signed out");
                ScreenAction::replace(Route::Login)
            }
        }
    }

    fn section(title: &str) -> Line<'static> {
        Line::from(Span::styled(
            title.to_string(),
            theme().title_style().add_modifier(Modifier::BOLD),
        ))
    }
}

impl Screen for ProfileScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &ScreenContext) -> Result<()> {
        let t = theme();
        let (header, body, footer) = screen_layout(area);
        Header::render(frame, header, "Mi Perfil", "");

        let (name, email) = Self::display_identity(self.user.as_ref());
        let column = centered_column(body, 64);
        let [card, favorites, info, buttons] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Length(6),
            Constraint::Length(1),
        ])
        .areas(column);

        let card_block = Block::default()
            .borders(Borders::ALL)
            .title(" Mi Perfil ")
            .border_style(t.border_style());
        frame.render_widget(
            Paragraph::new(vec![
                Line::styled(name, t.emphasis_style().add_modifier(Modifier::BOLD)),
                Line::styled(email.clone(), t.muted_style()),
            ])
            .block(card_block),
            card,
        );

        frame.render_widget(
            Paragraph::new(vec![
                Self::section("Favoritos"),
                Line::from(vec![
                    Span::styled("⌂ ", t.accent_style()),
                    Span::styled("Add Home", t.text_style()),
                ]),
            ]),
            favorites,
        );

        let vehicle = ctx.config.chat.vehicle.clone();
        frame.render_widget(
            Paragraph::new(vec![
                Self::section("Más información"),
                Line::from(vec![
                    Span::styled("Número de teléfono: ", t.muted_style()),
                    Span::styled(PHONE, t.text_style()),
                ]),
                Line::from(vec![
                    Span::styled("Correo electrónico: ", t.muted_style()),
                    Span::styled(email, t.text_style()),
                ]),
                Line::from(vec![
                    Span::styled("Vehículo: ", t.muted_style()),
                    Span::styled(vehicle, t.text_style()),
                ]),
            ]),
            info,
        );

        let focused = FOCUS_ORDER.iter().position(|f| self.focus.is(*f));
        frame.render_widget(
            Paragraph::new(button_line(
                &["Buscar conductores", "Solicitar Servicio", "Cerrar sesión"],
                focused,
            ))
            .alignment(Alignment::Center),
            buttons,
        );

        Footer::render(
            frame,
            footer,
            &ctx.hint(&[
                (Action::MoveRight, "Siguiente"),
                (Action::Confirm, "Aceptar"),
                (Action::Back, "Atrás"),
                (Action::Help, "Ayuda"),
            ]),
        );
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let Some(key) = pressed_key(&event) else {
            return Ok(ScreenAction::None);
        };
        let action = match ctx.action_for(&key, false) {
            Some(action) => action,
            None => return Ok(ScreenAction::None),
        };
        Ok(match action {
            Action::NextField | Action::MoveRight | Action::MoveDown => {
                self.focus.next();
                ScreenAction::None
            }
            Action::PrevField | Action::MoveLeft | Action::MoveUp => {
                self.focus.prev();
                ScreenAction::None
            }
            Action::Confirm => self.activate(ctx),
            Action::Back => ScreenAction::back(),
            Action::GoHome => ScreenAction::push(Route::Map),
            Action::Help => ScreenAction::ShowHelp,
            Action::Quit => ScreenAction::Quit,
            _ => ScreenAction::None,
        })
    }

    fn on_enter(&mut self, ctx: &ScreenContext) -> Result<()> {
        self.user = ctx.services.auth.current_user();
        Ok(())
    }
}
