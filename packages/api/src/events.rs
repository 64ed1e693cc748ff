use i18n::EventFeed;
use dioxus::prelude::*;
#[cfg(feature = "server")]
use tracing::{debug, warn};

const BUNDLED_ACTIVE: &str = include_str!("../data/events-active.json");
const BUNDLED_PAST: &str = include_str!("../data/events-past.json");

pub fn parse_feed(active: &str, past: &str) -> Result<EventFeed, serde_json::Error> {
    Ok(EventFeed {
        active: serde_json::from_str(active)?,
        past: serde_json::from_str(past)?,
    })
}

/// Sample feed shipped with the crate, used in local mode when no data files
/// are present.
pub fn bundled_feed() -> EventFeed {
    parse_feed(BUNDLED_ACTIVE, BUNDLED_PAST).unwrap_or_default()
}

/// Active and past events, each in the order the data files list them.
#[get("/api/events")]
pub async fn load_events() -> Result<EventFeed, ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("load_events is server-only"))
    }

    #[cfg(feature = "server")]
    {
        use crate::config::{AppMode, EventsConfig};

        let config = EventsConfig::from_env();
        debug!("events.load: dir={}", config.data_dir.display());
        match read_feed(&config).await {
            Ok(feed) => Ok(feed),
            Err(err) => match config.mode {
                AppMode::Local => {
                    warn!("events.load: {err:#}; serving bundled sample feed");
                    Ok(bundled_feed())
                }
                AppMode::Production => {
                    warn!("events.load: {err:#}; serving empty feed");
                    Ok(EventFeed::default())
                }
            },
        }
    }
}

#[cfg(feature = "server")]
pub(crate) async fn read_feed(config: &crate::config::EventsConfig) -> anyhow::Result<EventFeed> {
    use anyhow::Context;

    let active_path = config.active_path();
    let past_path = config.past_path();
    let active = tokio::fs::read_to_string(&active_path)
        .await
        .with_context(|| format!("reading {}", active_path.display()))?;
    let past = tokio::fs::read_to_string(&past_path)
        .await
        .with_context(|| format!("reading {}", past_path.display()))?;
    parse_feed(&active, &past).context("parsing event feed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use i18n::{EventStatus, Locale};

    #[test]
    fn bundled_feed_parses() {
        let feed = parse_feed(BUNDLED_ACTIVE, BUNDLED_PAST).unwrap();
        assert_eq!(feed.active.len(), 2);
        assert_eq!(feed.active[0].status, EventStatus::Live);
        assert_eq!(feed.past[1].name, "Winter Cup");
        assert_eq!(feed.past[1].duration.get(Locale::En), "3 Tage");
    }

    #[test]
    fn malformed_feed_is_an_error() {
        assert!(parse_feed("[{\"date\": 1}]", "[]").is_err());
        assert!(parse_feed("[]", "not json").is_err());
    }

    #[test]
    fn unknown_status_is_rejected() {
        let active = r#"[{"date": "2025-01-01", "name": "X", "status": "cancelled"}]"#;
        assert!(parse_feed(active, "[]").is_err());
    }

    #[cfg(feature = "server")]
    #[tokio::test]
    async fn reads_feed_from_data_dir() {
        use crate::config::{AppMode, EventsConfig};

        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("events-active.json"), "[]").unwrap();
        std::fs::write(dir.path().join("events-past.json"), BUNDLED_PAST).unwrap();

        let config = EventsConfig::from_values(dir.path().to_str(), AppMode::Production);
        let feed = read_feed(&config).await.unwrap();
        assert!(feed.active.is_empty());
        assert_eq!(feed.past.len(), 2);
    }

    #[cfg(feature = "server")]
    #[tokio::test]
    async fn missing_files_are_reported() {
        use crate::config::{AppMode, EventsConfig};

        let dir = tempfile::tempdir().unwrap();
        let config = EventsConfig::from_values(dir.path().to_str(), AppMode::Production);
        let err = read_feed(&config).await.unwrap_err();
        assert!(format!("{err:#}").contains("events-active.json"));
    }
}
