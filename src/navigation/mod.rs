//! Screen navigation state machine.
//!
//! Screens never address each other. They raise a [`NavigationIntent`] and the
//! [`BackStack`] turns it into push/pop/replace operations.
//!
//! # Navigation Graph
//!
//! ```text
//!   Login ──login ok (replace)──► Profile ──find drivers──► Drivers ──row──► Chat
//!     │  ▲                          │  ▲                                    │
//!     │  └──register ok (replace)   │  └──favorites (Map/Drivers/Chat)       │
//!     ▼                             ▼                                       │
//!   Register                       Map ──search submit──► Route(destination) │
//!                                   ▲                                       │
//!                                   └──────────home (Map/Drivers/Chat)──────┘
//!
//!   back on any screen: pop (refused at the root)
//!   logout from Profile: replace with Login
//! ```

pub mod back_stack;
pub mod intent;
pub mod route;

pub use back_stack::{BackStack, StackEntry};
pub use intent::{NavOutcome, NavigationIntent};
pub use route::{Route, ScreenId};
