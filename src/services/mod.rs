//! Application services layer.
//!
//! Collaborators the screens talk to, kept behind traits so the UI never
//! depends on a concrete backend.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                   UI Layer                      │
//! │  (App, Navigator, Screens)                      │
//! └─────────────────────┬───────────────────────────┘
//!                       │ ScreenContext
//!                       ▼
//! ┌──────────────────────────────────────────────────┐
//! │               Services Layer                     │
//! │  ┌──────────────┐ ┌──────────────────┐           │
//! │  │ AuthProvider │ │ LocationProvider │           │
//! │  └──────────────┘ └──────────────────┘           │
//! │  ┌─────────────────┐ ┌─────────────┐             │
//! │  │ DriverDirectory │ │ ChatSession │             │
//! │  └─────────────────┘ └─────────────┘             │
//! └─────────────────────┬────────────────────────────┘
//!                       │
//!                       ▼
//! ┌──────────────────────────────────────────────────┐
//! │   tokio runtime, Identity Toolkit REST, Config   │
//! └──────────────────────────────────────────────────┘
//! ```

pub mod auth;
pub mod chat;
pub mod drivers;
pub mod firebase;
pub mod location;

pub use auth::{AuthHandle, AuthProvider, AuthRequest, AuthService, LocalAuthProvider, UserProfile};
pub use chat::{canned_reply, Author, ChatSession, Message};
pub use drivers::{Driver, DriverDirectory};
pub use firebase::FirebaseAuthProvider;
pub use location::{
    LocationHandle, LocationProvider, LocationService, LocationUpdate, PermissionStatus, Position,
    SimulatedLocationProvider,
};

use crate::config::{AuthBackend, Config};
use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::runtime::Handle;
use tracing::info;

/// Everything a screen may call out to.
#[derive(Clone)]
pub struct Services {
    pub runtime: Handle,
    pub auth: Arc<dyn AuthProvider>,
    pub location: Arc<dyn LocationProvider>,
    pub drivers: Arc<DriverDirectory>,
}

impl Services {
    /// Build the collaborators selected by `config`
    pub fn from_config(config: &Config, runtime: Handle) -> Result<Self> {
        let auth: Arc<dyn AuthProvider> = match config.auth.backend {
            AuthBackend::Local => {
                info!(
                    "Using local auth with {} seeded account(s)",
                    config.auth.accounts.len()
                );
                Arc::new(LocalAuthProvider::new(&config.auth.accounts))
            }
            AuthBackend::Firebase => {
                let api_key = config
                    .auth
                    .api_key
                    .clone()
                    .filter(|key| !key.trim().is_empty())
                    .context("auth.backend = \"firebase\" requires auth.api_key")?;
                info!("Using Firebase auth");
                Arc::new(FirebaseAuthProvider::new(api_key))
            }
        };

        Ok(Self {
            runtime,
            auth,
            location: Arc::new(SimulatedLocationProvider::new(&config.location)),
            drivers: Arc::new(DriverDirectory::new(&config.drivers)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_firebase_backend_requires_key() {
        let mut config = Config::default();
        config.auth.backend = AuthBackend::Firebase;
        assert!(Services::from_config(&config, Handle::current()).is_err());
        config.auth.api_key = Some("key".to_string());
        assert!(Services::from_config(&config, Handle::current()).is_ok());
    }

    #[tokio::test]
    async fn test_default_services_use_builtin_roster() {
        let services = Services::from_config(&Config::default(), Handle::current()).unwrap();
        assert_eq!(services.drivers.all().len(), 6);
        assert!(services.auth.current_user().is_none());
    }
}
