//! Dashboard panel descriptors
//!
//! The minimal view of a dashboard panel that the Explore navigation flow
//! consumes: which data source the panel points at and the queries it runs.
//! These are immutable inputs; the dashboard subsystem that produces them
//! lives outside this crate.

use serde::{Deserialize, Serialize};

use super::datasource::DataSourceRef;

/// A single query target on a panel.
///
/// `ref_id` is the query letter shown in editors ("A", "B", ...). The
/// remaining fields are optional because panels routinely carry partially
/// filled targets; they serialize camelCased to match the Explore URL state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataQuery {
    pub ref_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datasource: Option<DataSourceRef>,
    /// Hidden targets are skipped when building the Explore URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide: Option<bool>,
}

impl DataQuery {
    pub fn new(ref_id: impl Into<String>) -> Self {
        Self {
            ref_id: ref_id.into(),
            expr: None,
            datasource: None,
            hide: None,
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.hide.unwrap_or(false)
    }
}

/// The slice of a dashboard panel relevant to Explore navigation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PanelModel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datasource: Option<DataSourceRef>,
    #[serde(default)]
    pub targets: Vec<DataQuery>,
}

impl PanelModel {
    pub fn new(datasource: Option<DataSourceRef>, targets: Vec<DataQuery>) -> Self {
        Self {
            datasource,
            targets,
        }
    }

    /// Targets that should carry over into Explore (hidden ones dropped)
    pub fn explore_targets(&self) -> Vec<DataQuery> {
        self.targets
            .iter()
            .filter(|target| !target.is_hidden())
            .cloned()
            .collect()
    }
}
