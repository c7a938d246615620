use crate::components::HelpOverlay;
use crate::config::Config;
use crate::keymap::KeymapPreset;
use crate::navigation::NavigationIntent;
use crate::navigator::Navigator;
use crate::screens::screen_trait::pressed_key;
use crate::screens::{ScreenAction, ScreenContext};
use crate::services::Services;
use crate::tui::Tui;
use crate::widgets::ToastManager;
use anyhow::{Context, Result};
use crossterm::event::{Event, KeyCode, KeyModifiers};
use std::path::PathBuf;
use tokio::runtime::Runtime;
use tracing::{error, info};

/// Toast shown when back is pressed on the first screen
pub const ROOT_BACK_MESSAGE: &str = "No hay más pantallas para regresar";

/// Main application state
pub struct App {
    config: Config,
    config_path: PathBuf,
    tui: Tui,
    navigator: Navigator,
    services: Services,
    toasts: ToastManager,
    show_help: bool,
    should_quit: bool,
    /// Declared last so screens and their tasks are dropped before it
    #[allow(dead_code)]
    runtime: Runtime,
}

impl App {
    /// Build services and the navigator; the terminal is not touched until [`App::run`]
    pub fn new(config: Config, config_path: PathBuf) -> Result<Self> {
        let runtime = Runtime::new().context("Failed to create tokio runtime")?;
        let services = Services::from_config(&config, runtime.handle().clone())
            .context("Failed to set up services")?;
        let navigator = {
            let ctx = ScreenContext::new(&config, &services);
            Navigator::new(&ctx)?
        };
        let tui = Tui::new()?;

        Ok(Self {
            config,
            config_path,
            tui,
            navigator,
            services,
            toasts: ToastManager::new(),
            show_help: false,
            should_quit: false,
            runtime,
        })
    }

    /// Enter the terminal, run the event loop until quit, then restore the terminal
    pub fn run(&mut self) -> Result<()> {
        self.tui.enter()?;
        info!("TUI started on {}", self.navigator.current_route());

        let result = self.event_loop();

        self.tui.exit()?;
        info!("TUI stopped");
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        let tick_rate = self.config.tick_rate();
        while !self.should_quit {
            self.draw()?;

            if let Some(event) = self.tui.poll_event(tick_rate)? {
                self.handle_event(event)?;
            }

            let ctx = ScreenContext::new(&self.config, &self.services);
            let action = self.navigator.tick(&ctx)?;
            self.apply(action)?;
            self.toasts.tick();
        }
        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        let ctx = ScreenContext::new(&self.config, &self.services);
        let navigator = &mut self.navigator;
        let toasts = &self.toasts;
        let show_help = self.show_help;
        let config_path = self.config_path.display().to_string();
        let mut render_result: Result<()> = Ok(());

        self.tui.terminal_mut().draw(|frame| {
            let area = frame.area();
            render_result = navigator.render(frame, area, &ctx);
            if show_help {
                HelpOverlay::render(frame, area, &ctx.config.keymap, &config_path);
            }
            toasts.render(frame, area);
        })?;

        if let Err(e) = &render_result {
            error!("Render failed: {:#}", e);
        }
        render_result
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        if let Some(key) = pressed_key(&event) {
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                self.should_quit = true;
                return Ok(());
            }
            if self.show_help {
                if let KeyCode::Char(c) = key.code {
                    if let Some(preset) = HelpOverlay::preset_for_digit(c) {
                        self.switch_preset(preset)?;
                        return Ok(());
                    }
                }
                self.show_help = false;
                return Ok(());
            }
        }

        let ctx = ScreenContext::new(&self.config, &self.services);
        let action = self.navigator.handle_event(event, &ctx)?;
        self.apply(action)
    }

    fn switch_preset(&mut self, preset: KeymapPreset) -> Result<()> {
        if self.config.keymap.preset == preset {
            return Ok(());
        }
        info!("Switching keymap preset to {}", preset.name());
        self.config.keymap.preset = preset;
        if let Err(e) = self.config.save(&self.config_path) {
            error!("Failed to save config: {:#}", e);
            self.toasts.warning("No se pudo guardar la configuración");
        } else {
            self.toasts.info(format!("Atajos: {}", preset.name()));
        }
        Ok(())
    }

    fn apply(&mut self, action: ScreenAction) -> Result<()> {
        match action {
            ScreenAction::None => {}
            ScreenAction::Navigate(intent) => self.navigate(intent)?,
            ScreenAction::Toast(toast) => self.toasts.push(toast),
            ScreenAction::ShowHelp => self.show_help = true,
            ScreenAction::Quit => self.should_quit = true,
        }
        Ok(())
    }

    fn navigate(&mut self, intent: NavigationIntent) -> Result<()> {
        let ctx = ScreenContext::new(&self.config, &self.services);
        let outcome = self.navigator.navigate(intent, &ctx)?;
        if outcome.is_boundary() {
            if self.config.navigation.exit_on_root_back {
                info!("Back at root, exiting");
                self.should_quit = true;
            } else {
                self.toasts.info(ROOT_BACK_MESSAGE);
            }
        }
        Ok(())
    }
}
