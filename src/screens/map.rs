//! Map screen: current location, destination search and nearby drivers.

use crate::components::{Footer, Header};
use crate::keymap::Action;
use crate::navigation::Route;
use crate::screens::screen_trait::{
    bottom_bar, edit_input, pressed_key, Screen, ScreenAction, ScreenContext,
};
use crate::services::drivers::AVAILABLE_NEARBY;
use crate::services::{LocationHandle, LocationService, LocationUpdate, Position};
use crate::styles::theme;
use crate::utils::{screen_layout, FocusRing, TextInput};
use crate::widgets::{MapView, MapWidget, TextInputWidget, TextInputWidgetExt, Toast};
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use std::sync::Arc;
use tracing::debug;

/// Status while waiting for the first fix
pub const LOCATING: &str = "Obteniendo ubicación...";
/// Status when location permission is refused
pub const PERMISSION_DENIED: &str = "Permiso de ubicación denegado";
/// Marker label for the user's position
pub const CURRENT_LOCATION: &str = "Ubicación actual";
pub const DRIVER_MARKER: &str = "Conductor";
/// Fixed driver marker near the campus
pub const SAMPLE_DRIVER: Position = Position::new(4.656_55, -74.087_44);
/// Zoom used when centering on a fix
pub const LOCATION_ZOOM: f64 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Destination,
    Map,
}

const FOCUS_ORDER: &[Focus] = &[Focus::Destination, Focus::Map];

/// Current location, nearby drivers and the destination search
pub struct MapScreen {
    destination: TextInput,
    focus: FocusRing<Focus>,
    map: MapView,
    status: String,
    location: Option<LocationHandle>,
}

impl Default for MapScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl MapScreen {
    pub fn new() -> Self {
        let mut map = MapView::new();
        map.place_marker(SAMPLE_DRIVER, DRIVER_MARKER);
        map.center_on(SAMPLE_DRIVER, LOCATION_ZOOM);
        Self {
            destination: TextInput::new(),
            focus: FocusRing::new(FOCUS_ORDER),
            map,
            status: LOCATING.to_string(),
            location: None,
        }
    }

    /// Location status line
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Markers and viewport as currently drawn
    pub fn map(&self) -> &MapView {
        &self.map
    }

    /// Fold one location outcome into the status line and the map
    pub fn apply_update(&mut self, update: LocationUpdate) {
        match update {
            LocationUpdate::PermissionDenied => self.status = PERMISSION_DENIED.to_string(),
            LocationUpdate::Fix(position) => {
                self.status = position.to_string();
                self.map.move_marker(CURRENT_LOCATION, position);
                self.map.center_on(position, LOCATION_ZOOM);
            }
            LocationUpdate::Unavailable(reason) => {
                debug!("Location unavailable: {}", reason);
                self.status = "Ubicación no disponible".to_string();
            }
        }
    }

    fn submit(&mut self) -> ScreenAction {
        let destination = self.destination.text_trimmed();
        if destination.is_empty() {
            return ScreenAction::Toast(Toast::warning("Ingresa una dirección de destino"));
        }
        ScreenAction::push(Route::route_to(destination))
    }

    fn render_sidebar(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let [search, status, drivers] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .areas(area);

        let [label, input] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(3)]).areas(search);
        frame.render_widget(
            Paragraph::new(Line::styled("¿A dónde vamos?", t.title_style())),
            label,
        );
        frame.render_text_input_widget(
            TextInputWidget::new(&self.destination)
                .placeholder("Ingresar Dirección")
                .focused(self.focus.is(Focus::Destination)),
            input,
        );

        let status_style = if self.status == PERMISSION_DENIED {
            t.error_style()
        } else {
            t.text_style()
        };
        frame.render_widget(
            Paragraph::new(Line::styled(self.status.clone(), status_style)).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Ubicación ")
                    .border_style(t.border_style()),
            ),
            status,
        );

        let mut lines = vec![Line::styled("Conductores Disponibles:", t.title_style())];
        lines.extend(AVAILABLE_NEARBY.iter().map(|name| {
            Line::from(vec![
                Span::styled(" ● ", t.success_style()),
                Span::styled(*name, t.text_style()),
            ])
        }));
        frame.render_widget(Paragraph::new(lines), drivers);
    }
}

impl Screen for MapScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &ScreenContext) -> Result<()> {
        let t = theme();
        let (header, body, footer) = screen_layout(area);
        Header::render(frame, header, "Mapa", "");

        let [sidebar, map_area] =
            Layout::horizontal([Constraint::Length(36), Constraint::Min(20)]).areas(body);
        self.render_sidebar(frame, sidebar);

        let border = if self.focus.is(Focus::Map) {
            t.border_focused_style()
        } else {
            t.border_style()
        };
        frame.render_widget(
            MapWidget::new(&self.map).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" Zoom {} ", self.map.zoom()))
                    .border_style(border),
            ),
            map_area,
        );

        Footer::render(
            frame,
            footer,
            &ctx.hint(&[
                (Action::Confirm, "Buscar"),
                (Action::NextField, "Foco"),
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
            Some(Action::NextField) => self.focus.next(),
            Some(Action::PrevField) => self.focus.prev(),
            Some(Action::Confirm) => return Ok(self.submit()),
            Some(Action::Help) => return Ok(ScreenAction::ShowHelp),
            Some(Action::Quit) => return Ok(ScreenAction::Quit),
            _ => {
                if self.focus.is(Focus::Destination) {
                    edit_input(&mut self.destination, &key, action);
                }
            }
        }
        Ok(ScreenAction::None)
    }

    fn tick(&mut self, _ctx: &ScreenContext) -> Result<ScreenAction> {
        if let Some(update) = self.location.as_mut().and_then(LocationHandle::try_latest) {
            self.apply_update(update);
        }
        Ok(ScreenAction::None)
    }

    fn is_input_focused(&self) -> bool {
        self.focus.is(Focus::Destination)
    }

    fn on_enter(&mut self, ctx: &ScreenContext) -> Result<()> {
        if self.location.is_none() {
            self.location = Some(LocationService::start(
                &ctx.services.runtime,
                Arc::clone(&ctx.services.location),
            ));
        }
        Ok(())
    }

    fn on_exit(&mut self, _ctx: &ScreenContext) -> Result<()> {
        self.location = None;
        Ok(())
    }
}
