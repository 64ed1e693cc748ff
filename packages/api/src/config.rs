use std::path::PathBuf;

/// Loads a `.env` file from the working directory, if one exists. Variables
/// already set in the environment win.
#[cfg(feature = "server")]
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!("config.dotenv: loaded {}", path.display()),
        Err(err) if err.not_found() => {}
        Err(err) => tracing::warn!("config.dotenv: {err}"),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Local,
    Production,
}

impl AppMode {
    pub fn from_env() -> Self {
        Self::from_value(std::env::var("APP_MODE").ok().as_deref())
    }

    pub fn from_value(value: Option<&str>) -> Self {
        match value.unwrap_or_default().to_lowercase().as_str() {
            "local" => AppMode::Local,
            _ => AppMode::Production, // Default to production for safety
        }
    }
}

/// Where the event feed is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventsConfig {
    pub data_dir: PathBuf,
    pub mode: AppMode,
}

impl EventsConfig {
    pub const DEFAULT_DIR: &'static str = "data";

    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var("EVENTS_DIR").ok().as_deref(),
            AppMode::from_env(),
        )
    }

    pub fn from_values(dir: Option<&str>, mode: AppMode) -> Self {
        let data_dir = dir
            .map(str::trim)
            .filter(|dir| !dir.is_empty())
            .unwrap_or(Self::DEFAULT_DIR);
        Self {
            data_dir: PathBuf::from(data_dir),
            mode,
        }
    }

    pub fn active_path(&self) -> PathBuf {
        self.data_dir.join("events-active.json")
    }

    pub fn past_path(&self) -> PathBuf {
        self.data_dir.join("events-past.json")
    }
}
