//! Explore URL state
//!
//! The serializable record that rides in the `left` query parameter of an
//! Explore URL: which data source, which queries, which time range. The
//! serialized form is compact JSON, percent-encoded into the URL; parsing is
//! the exact inverse so state round-trips through links and bookmarks.

use anyhow::{Context as _, Result};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use crate::app::panels::DataQuery;
use crate::app::time_srv::RawTimeRange;

/// Path of the Explore view
pub const EXPLORE_PATH: &str = "/explore";

/// State carried in an Explore URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExploreUrlState {
    /// Data-source name as shown to users
    pub datasource: String,
    #[serde(default)]
    pub queries: Vec<DataQuery>,
    pub range: RawTimeRange,
}

impl ExploreUrlState {
    pub fn new(datasource: impl Into<String>, queries: Vec<DataQuery>, range: RawTimeRange) -> Self {
        Self {
            datasource: datasource.into(),
            queries,
            range,
        }
    }
}

/// Serialize URL state to its query-parameter form (compact JSON)
pub fn serialize_state_to_url_param(state: &ExploreUrlState) -> Result<String> {
    serde_json::to_string(state).context("Failed to serialize Explore URL state")
}

/// Parse the query-parameter form back into URL state
pub fn parse_url_state(param: &str) -> Result<ExploreUrlState> {
    serde_json::from_str(param).context("Failed to parse Explore URL state")
}

fn encode(value: &str) -> String {
    utf8_percent_encode(value, NON_ALPHANUMERIC).to_string()
}

/// Build the full Explore URL for a serialized left-pane state
pub fn build_explore_url(serialized_state: &str) -> String {
    format!("{}?left={}", EXPLORE_PATH, encode(serialized_state))
}
