//! Authentication.
//!
//! Screens never call a provider directly from the UI thread: they start the
//! request through [`AuthService`] and poll the returned [`AuthHandle`] from
//! their tick.

use crate::config::AccountSeed;
use anyhow::{anyhow, bail, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tracing::{info, warn};

/// Minimum password length accepted on sign-up
pub const MIN_PASSWORD_LEN: usize = 6;

/// The signed-in user. Every field except `uid` may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserProfile {
    pub uid: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
}

/// Email/password authentication backend
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<UserProfile>;

    /// Create an account; on success the new user is signed in
    async fn sign_up(&self, email: &str, password: &str) -> Result<UserProfile>;

    fn sign_out(&self);

    fn current_user(&self) -> Option<UserProfile>;
}

/// Shared "who is signed in" slot used by both providers.
#[derive(Debug, Default)]
pub(crate) struct Session(Mutex<Option<UserProfile>>);

impl Session {
    fn lock(&self) -> MutexGuard<'_, Option<UserProfile>> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn set(&self, user: Option<UserProfile>) {
        *self.lock() = user;
    }

    pub(crate) fn get(&self) -> Option<UserProfile> {
        self.lock().clone()
    }
}

#[derive(Debug, Clone)]
struct Account {
    password: String,
    display_name: Option<String>,
    photo_url: Option<String>,
}

/// In-process accounts, seeded from `[[auth.accounts]]`.
#[derive(Debug, Default)]
pub struct LocalAuthProvider {
    accounts: Mutex<HashMap<String, Account>>,
    session: Session,
}

impl LocalAuthProvider {
    /// Provider holding the seeded accounts in memory
    pub fn new(seeds: &[AccountSeed]) -> Self {
        let accounts = seeds
            .iter()
            .map(|seed| {
                (
                    normalize_email(&seed.email),
                    Account {
                        password: seed.password.clone(),
                        display_name: seed.display_name.clone(),
                        photo_url: seed.photo_url.clone(),
                    },
                )
            })
            .collect();
        Self {
            accounts: Mutex::new(accounts),
            session: Session::default(),
        }
    }

    fn accounts(&self) -> MutexGuard<'_, HashMap<String, Account>> {
        self.accounts.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn profile(email: &str, account: &Account) -> UserProfile {
        UserProfile {
            uid: format!("local:{}", email),
            email: Some(email.to_string()),
            display_name: account.display_name.clone(),
            photo_url: account.photo_url.clone(),
        }
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Same checks the hosted backend applies before creating an account
pub fn validate_credentials(email: &str, password: &str) -> Result<()> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        bail!("invalid email address");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        bail!("password must be at least {} characters", MIN_PASSWORD_LEN);
    }
    Ok(())
}

#[async_trait]
impl AuthProvider for LocalAuthProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<UserProfile> {
        let email = normalize_email(email);
        let user = {
            let accounts = self.accounts();
            let account = accounts
                .get(&email)
                .filter(|account| account.password == password)
                .ok_or_else(|| anyhow!("invalid email or password"))?;
            Self::profile(&email, account)
        };
        self.session.set(Some(user.clone()));
        Ok(user)
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<UserProfile> {
        validate_credentials(email, password)?;
        let email = normalize_email(email);
        let user = {
            let mut accounts = self.accounts();
            if accounts.contains_key(&email) {
                bail!("an account already exists for {}", email);
            }
            let account = Account {
                password: password.to_string(),
                display_name: None,
                photo_url: None,
            };
            let user = Self::profile(&email, &account);
            accounts.insert(email, account);
            user
        };
        self.session.set(Some(user.clone()));
        Ok(user)
    }

    fn sign_out(&self) {
        self.session.set(None);
    }

    fn current_user(&self) -> Option<UserProfile> {
        self.session.get()
    }
}

/// Handle for polling an auth request started with [`AuthService`]
pub struct AuthHandle {
    receiver: oneshot::Receiver<Result<UserProfile>>,
}

impl AuthHandle {
    /// Try to receive the result without blocking
    pub fn try_recv(&mut self) -> Option<Result<UserProfile>> {
        match self.receiver.try_recv() {
            Ok(result) => Some(result),
            Err(oneshot::error::TryRecvError::Empty) => None,
            Err(oneshot::error::TryRecvError::Closed) => {
                Some(Err(anyhow!("Auth request channel closed unexpectedly")))
            }
        }
    }
}

/// Which call [`AuthService::start`] makes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthRequest {
    SignIn,
    SignUp,
}

/// Runs auth calls off the UI loop
pub struct AuthService;

impl AuthService {
    /// Run a sign-in or sign-up on `runtime` and return a pollable handle
    pub fn start(
        runtime: &Handle,
        provider: Arc<dyn AuthProvider>,
        request: AuthRequest,
        email: String,
        password: String,
    ) -> AuthHandle {
        let (sender, receiver) = oneshot::channel();
        runtime.spawn(async move {
            let result = match request {
                AuthRequest::SignIn => provider.sign_in(&email, &password).await,
                AuthRequest::SignUp => provider.sign_up(&email, &password).await,
            };
            match &result {
                Ok(user) => info!("{:?} succeeded for {}", request, user.uid),
                Err(e) => warn!("{:?} failed for {}: {:#}", request, email, e),
            }
            let _ = sender.send(result);
        });
        AuthHandle { receiver }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> LocalAuthProvider {
        LocalAuthProvider::new(&[AccountSeed {
            email: "Ana@UCC.edu.co".to_string(),
            password: "secreto1".to_string(),
            display_name: Some("Ana Pérez".to_string()),
            photo_url: None,
        }])
    }

    #[tokio::test]
    async fn test_sign_in_with_seeded_account() {
        let auth = seeded();
        let user = auth.sign_in("ana@ucc.edu.co", "secreto1").await.unwrap();
        assert_eq!(user.display_name.as_deref(), Some("Ana Pérez"));
        assert_eq!(auth.current_user(), Some(user));
    }

    #[tokio::test]
    async fn test_wrong_password_is_rejected() {
        let auth = seeded();
        assert!(auth.sign_in("ana@ucc.edu.co", "otro").await.is_err());
        assert!(auth.current_user().is_none());
    }

    #[tokio::test]
    async fn test_sign_up_validation() {
        let auth = LocalAuthProvider::default();
        assert!(auth.sign_up("sin-arroba", "secreto1").await.is_err());
        assert!(auth.sign_up("a@b.co", "corta").await.is_err());
        assert!(auth.sign_up("a@b.co", "larga123").await.is_ok());
    }

    #[tokio::test]
    async fn test_duplicate_sign_up_rejected() {
        let auth = seeded();
        assert!(auth.sign_up("ana@ucc.edu.co", "secreto2").await.is_err());
    }

    #[tokio::test]
    async fn test_sign_out_clears_session() {
        let auth = seeded();
        auth.sign_in("ana@ucc.edu.co", "secreto1").await.unwrap();
        auth.sign_out();
        assert!(auth.current_user().is_none());
    }

    #[tokio::test]
    async fn test_auth_handle_delivers_result() {
        let provider: Arc<dyn AuthProvider> = Arc::new(seeded());
        let mut handle = AuthService::start(
            &Handle::current(),
            provider,
            AuthRequest::SignIn,
            "ana@ucc.edu.co".to_string(),
            "secreto1".to_string(),
        );
        let result = loop {
            if let Some(result) = handle.try_recv() {
                break result;
            }
            tokio::task::yield_now().await;
        };
        assert!(result.is_ok());
    }
}
