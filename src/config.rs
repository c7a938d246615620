use crate::keymap::Keymap;
use crate::services::location::Position;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// UI theme: "dark", "light" or "nocolor"
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Keyboard bindings
    #[serde(default)]
    pub keymap: Keymap,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub navigation: NavigationConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub location: LocationConfig,
    /// Driver roster shown on the drivers screen (empty = built-in roster)
    #[serde(default)]
    pub drivers: Vec<DriverEntry>,
}

/// Terminal loop settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// How long the event loop waits for input before ticking screens
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

/// Back stack behavior
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NavigationConfig {
    /// Quit when back is pressed on the root screen instead of showing a toast
    #[serde(default)]
    pub exit_on_root_back: bool,
}

/// When a pending scripted reply is allowed to fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReplyPolicy {
    /// Each send restarts the reply timer; only the latest send may reply.
    #[default]
    Restart,
    /// Every send keeps its own timer; each fires if the last message is still the user's.
    FireAtDeadline,
}

/// Chat header and scripted driver replies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Delay before the scripted driver reply
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,
    #[serde(default)]
    pub reply_policy: ReplyPolicy,
    /// Name shown in the chat header
    #[serde(default = "default_chat_driver")]
    pub driver_name: String,
    #[serde(default = "default_vehicle")]
    pub vehicle: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: default_reply_delay_ms(),
            reply_policy: ReplyPolicy::default(),
            driver_name: default_chat_driver(),
            vehicle: default_vehicle(),
        }
    }
}

/// Which authentication provider to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthBackend {
    /// In-process accounts (seeded from `auth.accounts`)
    #[default]
    Local,
    /// Firebase Identity Toolkit REST API
    Firebase,
}

/// Authentication backend selection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub backend: AuthBackend,
    /// Web API key, required for the firebase backend
    #[serde(default)]
    pub api_key: Option<String>,
    /// Accounts available to the local backend at startup
    #[serde(default)]
    pub accounts: Vec<AccountSeed>,
}

/// Account created in the local backend at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountSeed {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
}

/// Simulated location provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    /// Whether the simulated provider grants location permission
    #[serde(default = "default_true")]
    pub permission_granted: bool,
    #[serde(default = "default_update_interval_ms")]
    pub update_interval_ms: u64,
    /// Cached fix returned immediately, if any
    #[serde(default)]
    pub last_known: Option<Position>,
    /// Fixes streamed to subscribers when no cached fix exists
    #[serde(default = "default_track")]
    pub track: Vec<Position>,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            permission_granted: true,
            update_interval_ms: default_update_interval_ms(),
            last_known: None,
            track: default_track(),
        }
    }
}

/// One `[[drivers]]` entry replacing the built-in roster
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverEntry {
    pub name: String,
    pub status: String,
    pub online: bool,
    pub rating: f32,
}

fn default_theme() -> String {
    "dark".to_string()
}

fn default_tick_rate_ms() -> u64 {
    100
}

fn default_reply_delay_ms() -> u64 {
    1000
}

fn default_chat_driver() -> String {
    "Brayan Rincón".to_string()
}

fn default_vehicle() -> String {
    "BMW".to_string()
}

fn default_true() -> bool {
    true
}

fn default_track() -> Vec<Position> {
    vec![
        Position::new(4.634_00, -74.066_98),
        Position::new(4.635_10, -74.066_20),
        Position::new(4.636_25, -74.065_41),
    ]
}

fn default_update_interval_ms() -> u64 {
    2000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            keymap: Keymap::default(),
            ui: UiConfig::default(),
            navigation: NavigationConfig::default(),
            chat: ChatConfig::default(),
            auth: AuthConfig::default(),
            location: LocationConfig::default(),
            drivers: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from file or create default
    pub fn load_or_create(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
            let config: Config =
                toml::from_str(&content).with_context(|| "Failed to parse config file")?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save(config_path)?;
            Ok(config)
        }
    }

    /// Save configuration to file with secure permissions
    pub fn save(&self, config_path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        std::fs::write(config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        // Accounts may hold passwords: owner read/write only
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(config_path)
                .with_context(|| format!("Failed to get file metadata: {:?}", config_path))?
                .permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(config_path, perms)
                .with_context(|| format!("Failed to set file permissions: {:?}", config_path))?;
        }

        Ok(())
    }

    /// Delay before the scripted driver reply
    pub fn reply_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.chat.reply_delay_ms)
    }

    /// How long the event loop waits for input before ticking
    pub fn tick_rate(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.ui.tick_rate_ms.max(10))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.chat.reply_delay_ms, 1000);
        assert_eq!(config.chat.reply_policy, ReplyPolicy::Restart);
        assert_eq!(config.auth.backend, AuthBackend::Local);
        assert!(!config.navigation.exit_on_root_back);
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.chat.reply_policy = ReplyPolicy::FireAtDeadline;
        config.location.last_known = Some(Position::new(4.6, -74.1));
        config.auth.accounts.push(AccountSeed {
            email: "ana@ucc.edu.co".to_string(),
            password: "secreto1".to_string(),
            display_name: Some("Ana".to_string()),
            photo_url: None,
        });
        config.save(&config_path).unwrap();

        let loaded = Config::load_or_create(&config_path).unwrap();
        assert_eq!(loaded.chat.reply_policy, ReplyPolicy::FireAtDeadline);
        assert_eq!(loaded.location.last_known, Some(Position::new(4.6, -74.1)));
        assert_eq!(loaded.auth.accounts.len(), 1);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            theme = "light"

            [chat]
            reply_policy = "fire-at-deadline"
            "#,
        )
        .unwrap();
        assert_eq!(config.theme, "light");
        assert_eq!(config.chat.reply_delay_ms, 1000);
        assert_eq!(config.chat.reply_policy, ReplyPolicy::FireAtDeadline);
        assert!(config.location.permission_granted);
    }

    #[test]
    fn test_load_creates_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");
        let config = Config::load_or_create(&config_path).unwrap();
        assert!(config_path.exists());
        assert_eq!(config.ui.tick_rate_ms, 100);
    }
}
