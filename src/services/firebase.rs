use super::auth::{validate_credentials, AuthProvider, Session, UserProfile};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

const IDENTITY_TOOLKIT_URL: &str = "https://identitytoolkit.googleapis.com/v1";

/// Email/password auth against the Firebase Identity Toolkit REST API
pub struct FirebaseAuthProvider {
    http_client: Client,
    api_key: String,
    base_url: String,
    session: Session,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LookupRequest<'a> {
    id_token: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PasswordResponse {
    local_id: String,
    id_token: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    display_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LookupResponse {
    #[serde(default)]
    users: Vec<LookupUser>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LookupUser {
    local_id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    photo_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl FirebaseAuthProvider {
    /// Provider using the public Identity Toolkit endpoint
    pub fn new(api_key: String) -> Self {
        Self {
            http_client: Client::new(),
            api_key,
            base_url: IDENTITY_TOOLKIT_URL.to_string(),
            session: Session::default(),
        }
    }

    /// Talk to another Identity Toolkit host, such as the Auth emulator
    /// (`http://localhost:9099/identitytoolkit.googleapis.com/v1`)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn endpoint(&self, method: &str) -> String {
        format!("{}/accounts:{}?key={}", self.base_url, method, self.api_key)
    }

    async fn post<B: Serialize + ?Sized, T: for<'de> Deserialize<'de>>(
        &self,
        method: &str,
        body: &B,
    ) -> Result<T> {
        debug!("POST accounts:{}", method);
        let response = self
            .http_client
            .post(self.endpoint(method))
            .json(body)
            .send()
            .await
            .with_context(|| format!("Failed to call accounts:{}", method))?;

        let status = response.status();
        if !status.is_success() {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let reason = parse_error(&text);
            anyhow::bail!("Auth API error ({}): {}", status, reason);
        }

        response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to parse accounts:{} response", method))
    }

    /// Exchange email/password for a profile, filling in the photo via lookup
    async fn password_flow(&self, method: &str, email: &str, password: &str) -> Result<UserProfile> {
        let signed: PasswordResponse = self
            .post(
                method,
                &PasswordRequest {
                    email,
                    password,
                    return_secure_token: true,
                },
            )
            .await?;

        let lookup: Result<LookupResponse> = self
            .post(
                "lookup",
                &LookupRequest {
                    id_token: &signed.id_token,
                },
            )
            .await;
        let user = match lookup {
            Ok(lookup) => merge_profile(signed, lookup),
            Err(e) => {
                // The account is valid even if the profile lookup fails
                debug!("Profile lookup failed: {:#}", e);
                merge_profile(signed, LookupResponse { users: Vec::new() })
            }
        };
        self.session.set(Some(user.clone()));
        info!("Signed in {}", user.uid);
        Ok(user)
    }
}

fn parse_error(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| body.to_string())
}

fn merge_profile(signed: PasswordResponse, lookup: LookupResponse) -> UserProfile {
    let found = lookup
        .users
        .into_iter()
        .find(|user| user.local_id == signed.local_id);
    match found {
        Some(user) => UserProfile {
            uid: user.local_id,
            email: user.email.or(signed.email),
            display_name: user.display_name.or(signed.display_name),
            photo_url: user.photo_url,
        },
        None => UserProfile {
            uid: signed.local_id,
            email: signed.email,
            display_name: signed.display_name,
            photo_url: None,
        },
    }
}

#[async_trait]
impl AuthProvider for FirebaseAuthProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<UserProfile> {
        self.password_flow("signInWithPassword", email.trim(), password)
            .await
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<UserProfile> {
        validate_credentials(email, password)?;
        self.password_flow("signUp", email.trim(), password).await
    }

    fn sign_out(&self) {
        self.session.set(None);
    }

    fn current_user(&self) -> Option<UserProfile> {
        self.session.get()
    }
}
