use carpool::config::{AuthBackend, Config, ReplyPolicy};
use carpool::keymap::KeymapPreset;
use carpool::services::{Position, Services};
use tokio::runtime::Handle;

const EXAMPLE: &str = r#"
theme = "light"

[keymap]
preset = "vim"
overrides = [{ key = "ctrl+h", action = "go_home" }]

[ui]
tick_rate_ms = 50

[navigation]
exit_on_root_back = true

[chat]
reply_delay_ms = 250
reply_policy = "fire-at-deadline"
driver_name = "Bryan Rincón"
vehicle = "Mazda 3"

[auth]
backend = "local"

[[auth.accounts]]
email = "ana@ucc.edu.co"
password = "secreto1"
display_name = "Ana Pérez"

[location]
permission_granted = false
last_known = { latitude = 4.634, longitude = -74.06698 }

[[drivers]]
name = "Laura Gómez"
status = "En línea"
online = true
rating = 4.9
"#;

#[test]
fn test_example_config_parses() {
    let config: Config = toml::from_str(EXAMPLE).unwrap();

    assert_eq!(config.theme, "light");
    assert_eq!(config.keymap.preset, KeymapPreset::Vim);
    assert_eq!(config.keymap.overrides.len(), 1);
    assert_eq!(config.tick_rate().as_millis(), 50);
    assert!(config.navigation.exit_on_root_back);
    assert_eq!(config.reply_delay().as_millis(), 250);
    assert_eq!(config.chat.reply_policy, ReplyPolicy::FireAtDeadline);
    assert_eq!(config.chat.vehicle, "Mazda 3");
    assert_eq!(config.auth.backend, AuthBackend::Local);
    assert_eq!(config.auth.accounts.len(), 1);
    assert!(!config.location.permission_granted);
    assert_eq!(
        config.location.last_known,
        Some(Position::new(4.634, -74.06698))
    );
    // Unset fields fall back to defaults
    assert_eq!(config.location.update_interval_ms, 2000);
    assert_eq!(config.drivers.len(), 1);
}

#[tokio::test]
async fn test_example_config_builds_services() {
    let config: Config = toml::from_str(EXAMPLE).unwrap();
    let services = Services::from_config(&config, Handle::current()).unwrap();

    let drivers = services.drivers.all();
    assert_eq!(drivers.len(), 1);
    assert_eq!(drivers[0].name, "Laura Gómez");
    assert_eq!(drivers[0].stars(), "★★★★");

    let user = services
        .auth
        .sign_in("ANA@ucc.edu.co", "secreto1")
        .await
        .unwrap();
    assert_eq!(user.display_name.as_deref(), Some("Ana Pérez"));
}

#[test]
fn test_firebase_backend_needs_api_key() {
    let config: Config = toml::from_str("[auth]\nbackend = \"firebase\"\n").unwrap();
    assert_eq!(config.auth.backend, AuthBackend::Firebase);
    assert!(config.auth.api_key.is_none());
}
