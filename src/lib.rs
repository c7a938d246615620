//! Carpooling UCC - a terminal ride-sharing prototype
//!
//! Sign in, search drivers, preview a route on a map and chat with a driver.
//! Screens are driven by a back-stack navigation state machine
//! ([`navigation`]) and talk to pluggable collaborators ([`services`]).

// Core modules
pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod keymap;
pub mod navigation;
pub mod navigator;
pub mod screens;
pub mod services;
pub mod styles;
pub mod tui;
pub mod utils;
pub mod widgets;

// Re-exports for convenience
pub use config::Config;
pub use navigation::{BackStack, NavOutcome, NavigationIntent, Route, ScreenId};
pub use navigator::Navigator;

// Keymap re-exports (used by Config and for external API)
pub use keymap::{Action, KeyBinding, Keymap, KeymapPreset};
