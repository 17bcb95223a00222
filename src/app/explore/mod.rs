//! Explore feature state
//!
//! The split-pane Explore view as a state machine: `state` defines the types
//! and the pure reducer, `store` wraps it with dispatch/subscribe semantics,
//! `url_state` handles the serializable URL form, and `navigation` implements
//! the jump from a dashboard panel into Explore.

pub mod navigation;
pub mod state;
pub mod store;
pub mod url_state;

pub use navigation::{navigate_to_explore, NavigateToExploreDeps};
pub use state::{explore_reducer, ExploreAction, ExploreId, ExploreItemState, ExploreState};
pub use store::ExploreStore;
pub use url_state::ExploreUrlState;
