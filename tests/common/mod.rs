//! Shared test utilities for navigation integration tests.
//!
//! Provides `Harness` - a navigator wired to real services, driven with
//! synthetic key events and rendered into a `TestBackend`.
//!
//! Build it inside a tokio test: services spawn their work on the current
//! runtime, and `settle()` yields so that work can finish.

#![allow(dead_code)]

use carpool::config::{AccountSeed, Config};
use carpool::navigation::{NavOutcome, Route};
use carpool::screens::{ScreenAction, ScreenContext};
use carpool::services::Services;
use carpool::widgets::Toast;
use carpool::Navigator;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use tokio::runtime::Handle;

pub const EMAIL: &str = "ana@ucc.edu.co";
pub const PASSWORD: &str = "secreto1";

/// Config with one local account and a short reply delay
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.auth.accounts.push(AccountSeed {
        email: EMAIL.to_string(),
        password: PASSWORD.to_string(),
        display_name: Some("Ana Pérez".to_string()),
        photo_url: None,
    });
    config.chat.reply_delay_ms = 100;
    config
}

pub struct Harness {
    pub config: Config,
    pub services: Services,
    pub navigator: Navigator,
    pub toasts: Vec<Toast>,
    pub boundary_hits: usize,
    pub quit: bool,
    pub help: bool,
}

impl Harness {
    pub fn new(config: Config) -> Self {
        Self::with_root(config, Route::Login)
    }

    pub fn with_root(config: Config, root: Route) -> Self {
        let services = Services::from_config(&config, Handle::current()).unwrap();
        let navigator = {
            let ctx = ScreenContext::new(&config, &services);
            Navigator::with_root(root, &ctx).unwrap()
        };
        Self {
            config,
            services,
            navigator,
            toasts: Vec::new(),
            boundary_hits: 0,
            quit: false,
            help: false,
        }
    }

    pub fn routes(&self) -> Vec<Route> {
        self.navigator.routes()
    }

    pub fn key_with(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        let event = Event::Key(KeyEvent::new(code, modifiers));
        let ctx = ScreenContext::new(&self.config, &self.services);
        let action = self.navigator.handle_event(event, &ctx).unwrap();
        self.apply(action);
    }

    pub fn key(&mut self, code: KeyCode) {
        self.key_with(code, KeyModifiers::NONE);
    }

    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.key(KeyCode::Char(c));
        }
    }

    pub fn tick(&mut self) {
        let ctx = ScreenContext::new(&self.config, &self.services);
        let action = self.navigator.tick(&ctx).unwrap();
        self.apply(action);
    }

    /// Let spawned work run, ticking the visible screen in between
    pub async fn settle(&mut self) {
        for _ in 0..20 {
            tokio::task::yield_now().await;
            self.tick();
        }
    }

    fn apply(&mut self, action: ScreenAction) {
        match action {
            ScreenAction::None => {}
            ScreenAction::Navigate(intent) => {
                let ctx = ScreenContext::new(&self.config, &self.services);
                if self.navigator.navigate(intent, &ctx).unwrap() == NavOutcome::AtRoot {
                    self.boundary_hits += 1;
                }
            }
            ScreenAction::Toast(toast) => self.toasts.push(toast),
            ScreenAction::ShowHelp => self.help = true,
            ScreenAction::Quit => self.quit = true,
        }
    }

    /// Render the visible screen and return the buffer as text, one row per line
    pub fn render(&mut self) -> String {
        let mut terminal = Terminal::new(TestBackend::new(110, 36)).unwrap();
        let ctx = ScreenContext::new(&self.config, &self.services);
        let navigator = &mut self.navigator;
        terminal
            .draw(|frame| {
                let area = frame.area();
                navigator.render(frame, area, &ctx).unwrap();
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        let area = buffer.area;
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Sign in with the seeded account from the login screen
    pub async fn sign_in(&mut self) {
        self.type_text(EMAIL);
        self.key(KeyCode::Tab);
        self.type_text(PASSWORD);
        self.key(KeyCode::Enter);
        self.settle().await;
    }
}
