//! Explore state machine
//!
//! The Explore view shows one pane, or two side-by-side in split mode. This
//! module defines the state types, the action enum, and the pure reducer
//! over them. The reducer is a total function of (state, action); it never
//! touches services or performs I/O, so every transition is directly
//! testable.
//!
//! Split-level flags only mean something while two panes exist:
//! `synced_times` links the panes' time ranges, `even_split_panes` /
//! `larger_explore_id` / `maxed_explore_id` describe how screen width is
//! divided. Closing a pane resets all of them.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::app::panels::DataQuery;
use crate::app::time_srv::RawTimeRange;

/// Pane key in the split view. Exactly two slots exist; the single-pane
/// state always uses `Left`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ExploreId {
    Left,
    Right,
}

impl ExploreId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExploreId::Left => "left",
            ExploreId::Right => "right",
        }
    }

    /// The other slot
    pub fn other(&self) -> ExploreId {
        match self {
            ExploreId::Left => ExploreId::Right,
            ExploreId::Right => ExploreId::Left,
        }
    }
}

impl fmt::Display for ExploreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-pane Explore state
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExploreItemState {
    /// Data source this pane queries, if one has been picked
    pub datasource_uid: Option<String>,
    /// Queries currently loaded in the pane
    pub queries: Vec<DataQuery>,
    /// The pane's raw time range
    pub range: RawTimeRange,
    /// Rendered width in pixels, updated by the host on layout changes
    pub container_width: u32,
    /// Whether the pane has finished its first initialization
    pub initialized: bool,
}

/// Top-level Explore state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExploreState {
    /// Open panes keyed by slot; at most two entries
    pub panes: BTreeMap<ExploreId, ExploreItemState>,
    /// Whether both panes share one time range (split mode only)
    pub synced_times: bool,
    /// Whether the panes split the width evenly
    pub even_split_panes: bool,
    /// Which pane has been dragged larger, if any
    pub larger_explore_id: Option<ExploreId>,
    /// Which pane is maximized, if any
    pub maxed_explore_id: Option<ExploreId>,
}

impl Default for ExploreState {
    fn default() -> Self {
        Self {
            panes: BTreeMap::new(),
            synced_times: false,
            even_split_panes: true,
            larger_explore_id: None,
            maxed_explore_id: None,
        }
    }
}

impl ExploreState {
    /// State with a single left pane
    pub fn with_left(item: ExploreItemState) -> Self {
        let mut state = Self::default();
        state.panes.insert(ExploreId::Left, item);
        state
    }

    /// State with both panes populated
    pub fn with_panes(left: ExploreItemState, right: ExploreItemState) -> Self {
        let mut state = Self::with_left(left);
        state.panes.insert(ExploreId::Right, right);
        state
    }

    /// Whether the view is currently split
    pub fn is_split(&self) -> bool {
        self.panes.len() == 2
    }

    pub fn pane(&self, id: ExploreId) -> Option<&ExploreItemState> {
        self.panes.get(&id)
    }
}

/// Actions consumed by [`explore_reducer`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExploreAction {
    /// Open the right pane, seeded from the given item or a copy of the left
    SplitOpen { item: Option<ExploreItemState> },
    /// Close one side of the split; the survivor becomes the left pane
    SplitClose(ExploreId),
    /// Record which pane the user dragged larger (`None` = back to even)
    SplitSizeUpdate {
        larger_explore_id: Option<ExploreId>,
    },
    /// Give one pane the full width
    MaximizePane { explore_id: ExploreId },
    /// Return to an even split
    EvenPaneResize,
    /// Toggle shared time ranges across the split
    SyncTimes { synced_times: bool },
}

/// Pure reducer for the Explore view.
///
/// Consumes the current state and returns the next one; callers that need
/// dispatch semantics go through [`super::store::ExploreStore`].
pub fn explore_reducer(mut state: ExploreState, action: ExploreAction) -> ExploreState {
    match action {
        ExploreAction::SplitOpen { item } => {
            let right = item
                .or_else(|| state.panes.get(&ExploreId::Left).cloned())
                .unwrap_or_default();
            state.panes.insert(ExploreId::Right, right);
            state.even_split_panes = true;
            state.larger_explore_id = None;
            state.maxed_explore_id = None;
            state
        }
        ExploreAction::SplitClose(id) => {
            // Keep the opposite pane; when it does not exist the requested
            // pane itself survives so the map never ends up empty.
            let survivor = state
                .panes
                .remove(&id.other())
                .or_else(|| state.panes.remove(&id));
            state.panes.clear();
            if let Some(item) = survivor {
                state.panes.insert(ExploreId::Left, item);
            }
            state.synced_times = false;
            state.even_split_panes = true;
            state.larger_explore_id = None;
            state.maxed_explore_id = None;
            state
        }
        ExploreAction::SplitSizeUpdate { larger_explore_id } => {
            state.even_split_panes = larger_explore_id.is_none();
            state.larger_explore_id = larger_explore_id;
            state.maxed_explore_id = None;
            state
        }
        ExploreAction::MaximizePane { explore_id } => {
            state.even_split_panes = false;
            state.larger_explore_id = Some(explore_id);
            state.maxed_explore_id = Some(explore_id);
            state
        }
        ExploreAction::EvenPaneResize => {
            state.even_split_panes = true;
            state.larger_explore_id = None;
            state.maxed_explore_id = None;
            state
        }
        ExploreAction::SyncTimes { synced_times } => {
            state.synced_times = synced_times;
            state
        }
    }
}
