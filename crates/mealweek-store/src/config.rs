use std::env;
use std::path::PathBuf;

/// Storage configuration: where the meal plan JSON file lives.
///
/// Reads from the `MEALWEEK_DATA_FILE` environment variable, falling back
/// to `$XDG_DATA_HOME/mealweek/meals.json` (or `~/.local/share/mealweek/`)
/// when unset.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Full path of the meal plan file.
    pub data_file: PathBuf,
}

impl StoreConfig {
    /// File name used within the default data directory.
    pub const DEFAULT_FILE_NAME: &str = "meals.json";

    /// Build a config from the environment.
    ///
    /// Priority: `MEALWEEK_DATA_FILE` env var, then the XDG default path.
    pub fn from_env() -> Self {
        let data_file = env::var("MEALWEEK_DATA_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| Self::default_data_file());
        Self { data_file }
    }

    /// Build a config from an explicit path (useful for tests and CLI flags).
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    /// Default data file location.
    ///
    /// Always uses XDG layout: `$XDG_DATA_HOME/mealweek` or
    /// `~/.local/share/mealweek`. We intentionally ignore the
    /// platform-specific `dirs::data_dir()` (which returns
    /// `~/Library/Application Support` on macOS).
    pub fn default_data_file() -> PathBuf {
        let base = if let Ok(xdg) = env::var("XDG_DATA_HOME") {
            PathBuf::from(xdg)
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".local")
                .join("share")
        };
        base.join("mealweek").join(Self::DEFAULT_FILE_NAME)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
