//! CLI configuration: an optional JSON file plus environment overrides.
//!
//! ```json
//! { "timezone": "America/New_York", "calendar": { "day_start": "06:00", "year_start_month": 4 } }
//! ```
//!
//! Every field is optional. A missing file path means built-in defaults.

use std::fs::read_to_string;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use time_window::ProjectCalendar;
use tracing::{info, warn};

/// Timezone used when neither the flag, the environment nor the file sets one.
pub const DEFAULT_TIMEZONE: &str = "UTC";

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub timezone: Option<String>,
    pub calendar: ProjectCalendar,
}

impl Config {
    /// Load the config file at `path`, or defaults when there is none.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            info!("no config file given, using default calendar");
            return Ok(Self::default());
        };
        let raw = read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&raw)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        info!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Pick the timezone: explicit value (flag or `TIMEWIN_TZ`), then the
    /// file, then [`DEFAULT_TIMEZONE`].
    pub fn timezone(&self, explicit: Option<&str>) -> String {
        explicit
            .or(self.timezone.as_deref())
            .map(str::to_string)
            .unwrap_or_else(|| {
                warn!("no timezone configured, using default: {DEFAULT_TIMEZONE}");
                DEFAULT_TIMEZONE.to_string()
            })
    }
}
