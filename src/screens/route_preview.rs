//! Route preview towards a typed destination, with the assigned driver.

use crate::components::{button_line, Footer, Header};
use crate::keymap::Action;
use crate::screens::screen_trait::{pressed_key, Screen, ScreenAction, ScreenContext};
use crate::services::Position;
use crate::styles::theme;
use crate::utils::{screen_layout, FocusRing};
use crate::widgets::{MapView, MapWidget, Toast};
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use tracing::info;

/// Trips start at the university
pub const ORIGIN: Position = Position::new(4.634_00, -74.066_98);
pub const ORIGIN_LABEL: &str = "U. Católica";
/// Sample drop-off drawn on the preview map
pub const DESTINATION: Position = Position::new(4.667_09, -74.053_27);
pub const DESTINATION_LABEL: &str = "Centro Comercial Andino";
/// Zoom used when centering on the origin
pub const ROUTE_ZOOM: f64 = 12.0;

const DRIVER_NAME: &str = "Bryan Rincón";
const DRIVER_RATING: &str = "4.5 ★";
const PRICE: &str = "PRECIO $7,500";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Cancel,
    Confirm,
}

const FOCUS_ORDER: &[Focus] = &[Focus::Cancel, Focus::Confirm];

/// Route to a destination with the assigned driver and price
pub struct RoutePreviewScreen {
    destination: String,
    focus: FocusRing<Focus>,
    map: MapView,
}

impl RoutePreviewScreen {
    /// Preview towards `destination`; empty is allowed
    pub fn new(destination: impl Into<String>) -> Self {
        let mut map = MapView::new();
        map.place_marker(ORIGIN, ORIGIN_LABEL);
        map.place_marker(DESTINATION, DESTINATION_LABEL);
        map.draw_polyline(vec![ORIGIN, DESTINATION]);
        map.center_on(ORIGIN, ROUTE_ZOOM);
        Self {
            destination: destination.into(),
            focus: FocusRing::new(FOCUS_ORDER),
            map,
        }
    }

    /// Destination as typed on the map screen
    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn map(&self) -> &MapView {
        &self.map
    }

    fn activate(&self) -> ScreenAction {
        match self.focus.current() {
            Focus::Cancel => ScreenAction::back(),
            Focus::Confirm => {
                info!("Trip confirmed towards '{}'", self.destination);
                ScreenAction::Toast(Toast::success("Viaje confirmado"))
            }
        }
    }

    fn render_driver_card(&self, frame: &mut Frame, area: Rect, vehicle: &str) {
        let t = theme();
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Conductor ")
            .border_style(t.border_style());
        let lines = vec![
            Line::styled("Este conductor está disponible", t.success_style()),
            Line::from(""),
            Line::from(vec![
                Span::styled(DRIVER_NAME, t.emphasis_style().add_modifier(Modifier::BOLD)),
                Span::styled(format!("  {}", DRIVER_RATING), t.warning_style()),
            ]),
            Line::styled(vehicle.to_string(), t.muted_style()),
            Line::from(""),
            Line::styled(PRICE, t.title_style().add_modifier(Modifier::BOLD)),
        ];
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

impl Screen for RoutePreviewScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &ScreenContext) -> Result<()> {
        let t = theme();
        let (header, body, footer) = screen_layout(area);
        let destination = if self.destination.is_empty() {
            "Sin destino"
        } else {
            self.destination.as_str()
        };
        Header::render(frame, header, "Ruta", destination);

        let [map_area, side] =
            Layout::horizontal([Constraint::Min(20), Constraint::Length(38)]).areas(body);
        frame.render_widget(
            MapWidget::new(&self.map).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} → {} ", ORIGIN_LABEL, destination))
                    .border_style(t.border_style()),
            ),
            map_area,
        );

        let [card, buttons] =
            Layout::vertical([Constraint::Length(8), Constraint::Length(1)]).areas(side);
        self.render_driver_card(frame, card, &ctx.config.chat.vehicle);

        let focused = FOCUS_ORDER.iter().position(|f| self.focus.is(*f));
        frame.render_widget(
            Paragraph::new(button_line(&["Cancelar", "Confirmar"], focused))
                .alignment(Alignment::Center),
            buttons,
        );

        Footer::render(
            frame,
            footer,
            &ctx.hint(&[
                (Action::MoveRight, "Siguiente"),
                (Action::Confirm, "Aceptar"),
                (Action::Back, "Cancelar"),
            ]),
        );
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let Some(key) = pressed_key(&event) else {
            return Ok(ScreenAction::None);
        };
        let Some(action) = ctx.action_for(&key, false) else {
            return Ok(ScreenAction::None);
        };
        Ok(match action {
            Action::MoveLeft | Action::MoveRight | Action::NextField | Action::PrevField => {
                self.focus.next();
                ScreenAction::None
            }
            Action::Confirm => self.activate(),
            Action::Back => ScreenAction::back(),
            Action::Help => ScreenAction::ShowHelp,
            Action::Quit => ScreenAction::Quit,
            _ => ScreenAction::None,
        })
    }
}
