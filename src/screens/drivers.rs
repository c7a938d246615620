//! Driver roster with a name search.

use crate::components::{Footer, Header};
use crate::keymap::Action;
use crate::navigation::Route;
use crate::screens::screen_trait::{
    bottom_bar, edit_input, pressed_key, Screen, ScreenAction, ScreenContext,
};
use crate::services::Driver;
use crate::styles::{theme, LIST_HIGHLIGHT_SYMBOL};
use crate::utils::{screen_layout, ListStateExt, TextInput};
use crate::widgets::{TextInputWidget, TextInputWidgetExt};
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

/// Searchable driver roster
pub struct DriversScreen {
    query: TextInput,
    results: Vec<Driver>,
    list_state: ListState,
}

impl Default for DriversScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl DriversScreen {
    pub fn new() -> Self {
        Self {
            query: TextInput::new(),
            results: Vec::new(),
            list_state: ListState::default(),
        }
    }

    /// Drivers matching the current query
    pub fn results(&self) -> &[Driver] {
        &self.results
    }

    /// Highlighted driver, if any
    pub fn selected(&self) -> Option<&Driver> {
        self.list_state.selected().and_then(|i| self.results.get(i))
    }

    fn refresh(&mut self, ctx: &ScreenContext) {
        self.results = ctx.services.drivers.search(self.query.text());
        if self.list_state.selected().is_none() {
            self.list_state.select_first_item(self.results.len());
        } else {
            self.list_state.clamp_to(self.results.len());
        }
    }

    fn driver_item(driver: &Driver) -> ListItem<'static> {
        let t = theme();
        let status_style = if driver.online {
            t.success_style()
        } else {
            t.muted_style()
        };
        ListItem::new(vec![
            Line::from(vec![
                Span::styled(driver.name.clone(), t.emphasis_style()),
                Span::styled(format!("  {}", driver.stars()), t.warning_style()),
            ]),
            Line::from(Span::styled(format!("  {}", driver.status), status_style)),
        ])
    }
}

impl Screen for DriversScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &ScreenContext) -> Result<()> {
        let t = theme();
        let (header, body, footer) = screen_layout(area);
        let subtitle = format!("{} resultados", self.results.len());
        Header::render(frame, header, "Conductores", &subtitle);

        let [search, list_area, back] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(body);

        frame.render_text_input_widget(
            TextInputWidget::new(&self.query)
                .placeholder("Buscar conductores")
                .focused(true),
            search,
        );

        if self.results.is_empty() {
            frame.render_widget(
                Paragraph::new("Sin resultados")
                    .style(t.muted_style())
                    .block(Block::default().borders(Borders::ALL).border_style(t.border_style())),
                list_area,
            );
        } else {
            let items: Vec<ListItem> = self.results.iter().map(Self::driver_item).collect();
            let list = List::new(items)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(t.border_style()),
                )
                .highlight_style(t.highlight_style())
                .highlight_symbol(LIST_HIGHLIGHT_SYMBOL);
            frame.render_stateful_widget(list, list_area, &mut self.list_state);
        }

        frame.render_widget(
            Paragraph::new(Line::styled("[ ATRÁS ]", t.muted_style())),
            back,
        );

        Footer::render(
            frame,
            footer,
            &ctx.hint(&[
                (Action::Confirm, "Chat"),
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
        let total = self.results.len();
        match action {
            Some(Action::MoveUp) => self.list_state.select_previous_wrap(total),
            Some(Action::MoveDown) => self.list_state.select_next_wrap(total),
            Some(Action::ScrollUp) => self.list_state.select_first_item(total),
            Some(Action::ScrollDown) => self.list_state.select_last_item(total),
            Some(Action::Confirm) => {
                if self.selected().is_some() {
                    return Ok(ScreenAction::push(Route::Chat));
                }
            }
            _ => {
                if edit_input(&mut self.query, &key, action) {
                    self.refresh(ctx);
                }
            }
        }
        Ok(ScreenAction::None)
    }

    fn is_input_focused(&self) -> bool {
        true
    }

    fn on_enter(&mut self, ctx: &ScreenContext) -> Result<()> {
        self.refresh(ctx);
        Ok(())
    }
}
