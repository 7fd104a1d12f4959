use std::path::{Path, PathBuf};

/// Overrides the config directory (used by tests and portable setups)
pub const CONFIG_DIR_ENV: &str = "QUIZZO_CONFIG_DIR";

/// Get the home directory, with fallback to "/"
pub fn get_home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"))
}

/// Get the config directory (~/.config/quizzo unless overridden)
pub fn get_config_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return PathBuf::from(dir);
    }
    get_home_dir().join(".config").join("quizzo")
}

/// Get the config file path
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

/// Directory for the log file (user cache dir, falling back to home)
pub fn get_log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(get_home_dir)
        .join("quizzo")
}

/// Expand a path string, handling ~ and relative paths
///
/// Relative paths are resolved against the default config directory.
pub fn expand_path(path_str: &str) -> PathBuf {
    expand_path_from(path_str, &get_config_dir())
}

/// Like [`expand_path`], but relative paths resolve against `base`, so a
/// config file can refer to a bank file sitting next to it.
pub fn expand_path_from(path_str: &str, base: &Path) -> PathBuf {
    if let Some(rest) = path_str.strip_prefix("~/") {
        get_home_dir().join(rest)
    } else if path_str == "~" {
        get_home_dir()
    } else if Path::new(path_str).is_absolute() {
        PathBuf::from(path_str)
    } else {
        base.join(path_str)
    }
}
