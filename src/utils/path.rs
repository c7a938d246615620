use std::path::PathBuf;

/// Environment variable that relocates the config directory
pub const CONFIG_DIR_ENV: &str = "CARPOOL_CONFIG_DIR";

/// Get the home directory, with fallback to "/"
pub fn get_home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"))
}

/// Config directory: `$CARPOOL_CONFIG_DIR` if set, else ~/.config/carpool on every OS
pub fn get_config_dir() -> PathBuf {
    match std::env::var_os(CONFIG_DIR_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => get_home_dir().join(".config").join("carpool"),
    }
}

/// Path of config.toml inside the config directory
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

/// Directory holding carpool.log
pub fn get_log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(get_home_dir)
        .join("carpool")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_is_inside_config_dir() {
        let path = get_config_path();
        assert_eq!(path.parent(), Some(get_config_dir().as_path()));
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some("config.toml")
        );
    }

    #[test]
    fn test_log_dir_ends_with_app_name() {
        assert!(get_log_dir().ends_with("carpool"));
    }
}
