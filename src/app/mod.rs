//! Application modules for the Explore state engine.
//!
//! `explore` holds the split-pane state machine, store, URL state, and the
//! panel-to-Explore navigation flow. The sibling modules are the services
//! that flow resolves: data sources, the current time range, and the shared
//! location (the browser-history analogue).

pub mod datasource;
pub mod explore;
pub mod location;
pub mod logging;
pub mod panels;
pub mod time_srv;
