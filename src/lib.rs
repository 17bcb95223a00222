//! Dash Explore - Split-Pane Exploration State Engine
//!
//! Dash Explore is the state-management core for a dashboard application's
//! "Explore" feature: an ad-hoc data-exploration view with one or two
//! side-by-side panes that users typically reach by jumping from a dashboard
//! panel. The crate is headless by design - it owns the state transitions
//! and the navigation flow, not the rendering.
//!
//! # Core Features
//!
//! - **Split-Pane State Machine**: Pure reducer over the Explore view state
//!   (open/close/resize/maximize panes, time-range sync)
//! - **Panel Navigation**: Async flow that turns a dashboard panel into an
//!   Explore URL and either navigates the shared location service or hands
//!   the URL to a caller-supplied callback
//! - **URL State**: Serializable Explore URL state that round-trips through
//!   the `left` query parameter
//! - **Injectable Services**: Data-source registry, time service, and
//!   location service behind small seams so hosts can substitute their own
//!
//! # Architecture Overview
//!
//! - **State Layer** ([`app::explore::state`]): state types, action enum,
//!   and the pure [`app::explore::state::explore_reducer`]
//! - **Store** ([`app::explore::store::ExploreStore`]): dispatch/subscribe
//!   wrapper giving the reducer ordinary store semantics
//! - **Navigation** ([`app::explore::navigation`]): the
//!   `navigate_to_explore` flow with its injected dependency bundle
//! - **Services** ([`app::datasource`], [`app::time_srv`], [`app::location`]):
//!   the collaborators the navigation flow resolves
//!
//! All state types are serde-serializable so hosts can persist or transmit
//! them; failures from injected collaborators propagate as [`anyhow::Error`].

#![warn(clippy::all, rust_2018_idioms)]

// Include logging macros first
#[macro_use]
pub mod logging_macros;

pub mod app;
pub use app::explore::store::ExploreStore;
