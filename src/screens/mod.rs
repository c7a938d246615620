//! Screen controllers for the application.
//!
//! Every screen implements [`Screen`], owns its UI state and reports what it
//! wants through a [`ScreenAction`]. The [`Navigator`](crate::navigator::Navigator)
//! keeps one instance per back stack entry.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                      App                               │
//! │  ┌────────────────────────────────────────────────┐    │
//! │  │  Navigator (BackStack<Box<dyn Screen>>)        │    │
//! │  │    top.handle_event(event, ctx) -> Action      │    │
//! │  │    Action::Navigate(intent) -> stack.apply     │    │
//! │  └────────────────────────────────────────────────┘    │
//! │                                                        │
//! │  ┌────────────────────────────────────────────────┐    │
//! │  │               Screen Trait                     │    │
//! │  │  - render(frame, area, ctx)                    │    │
//! │  │  - handle_event(event, ctx) -> Action          │    │
//! │  │  - tick(ctx) -> Action                         │    │
//! │  │  - on_enter / on_exit                          │    │
//! │  └────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────┘
//! ```

pub mod chat;
pub mod drivers;
pub mod login;
pub mod map;
pub mod profile;
pub mod register;
pub mod registry;
pub mod route_preview;
pub mod screen_trait;

pub use chat::ChatScreen;
pub use drivers::DriversScreen;
pub use login::LoginScreen;
pub use map::MapScreen;
pub use profile::ProfileScreen;
pub use register::RegisterScreen;
pub use registry::build_screen;
pub use route_preview::RoutePreviewScreen;
pub use screen_trait::{Screen, ScreenAction, ScreenContext};
