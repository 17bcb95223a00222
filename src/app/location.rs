//! Shared location service
//!
//! The browser-history analogue: one process-wide current location that the
//! navigation flow writes and the host's router reads. URLs are app-relative
//! (`/explore?left=...`); parsing goes through the `url` crate against a
//! fixed base so path and query split correctly.

use std::sync::RwLock;

use anyhow::{anyhow, Context as _, Result};
use url::Url;

/// Base used to parse app-relative URLs; never part of the stored location
const PARSE_BASE: &str = "http://localhost/";

/// A snapshot of the current location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Path component, always starting with `/`
    pub pathname: String,
    /// Query component including the leading `?`, or empty
    pub search: String,
}

impl Default for Location {
    fn default() -> Self {
        Self {
            pathname: "/".to_string(),
            search: String::new(),
        }
    }
}

impl Location {
    /// Path plus query, the form `push` accepts
    pub fn to_url(&self) -> String {
        format!("{}{}", self.pathname, self.search)
    }
}

/// Thread-shared current location
#[derive(Default)]
pub struct LocationService {
    current: RwLock<Location>,
}

impl LocationService {
    /// Create a service positioned at `/`
    pub fn new() -> Self {
        Self::default()
    }

    /// Navigate to an app-relative URL, replacing the current location
    pub fn push(&self, url: &str) -> Result<()> {
        let base = Url::parse(PARSE_BASE).context("Failed to parse location base")?;
        let parsed = base
            .join(url)
            .with_context(|| format!("Failed to parse navigation target '{}'", url))?;

        let location = Location {
            pathname: parsed.path().to_string(),
            search: parsed
                .query()
                .map(|query| format!("?{}", query))
                .unwrap_or_default(),
        };

        let mut current = self
            .current
            .write()
            .map_err(|_| anyhow!("location lock poisoned"))?;
        log_debug!(
            "Location change: {} -> {}",
            current.to_url(),
            location.to_url()
        );
        *current = location;
        Ok(())
    }

    /// Snapshot of the current location
    pub fn get_location(&self) -> Location {
        self.current
            .read()
            .map(|location| location.clone())
            .unwrap_or_default()
    }
}
