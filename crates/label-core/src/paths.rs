/// Path constants for the label workflow
use std::path::PathBuf;

// Default root constants
pub const APP_ROOT: &str = "/app";

// Directory names (relative to roots)
pub const CONFIG_DIR_NAME: &str = "config";
pub const CONFIG_FILE_NAME: &str = "labels.json";

// Path builder functions
pub fn app_root() -> PathBuf {
    PathBuf::from(APP_ROOT)
}

pub fn config_dir() -> PathBuf {
    app_root().join(CONFIG_DIR_NAME)
}

/// Configuration file read when no `--config` is given
pub fn default_config_path() -> PathBuf {
    config_dir().join(CONFIG_FILE_NAME)
}
