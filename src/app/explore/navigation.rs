//! Panel-to-Explore navigation
//!
//! "Explore" on a dashboard panel resolves the panel into an Explore URL and
//! then either navigates the shared location service or, when the caller
//! wants a new window/tab, hands the URL to a callback and leaves location
//! state alone. All collaborators arrive through [`NavigateToExploreDeps`]
//! so hosts and tests can substitute any of them.

use std::sync::Arc;

use anyhow::Result;
use futures::future::BoxFuture;

use crate::app::datasource::DataSourceService;
use crate::app::location::LocationService;
use crate::app::panels::PanelModel;
use crate::app::time_srv::TimeSrv;

use super::store::ExploreStore;
use super::url_state::{build_explore_url, serialize_state_to_url_param, ExploreUrlState};

/// Arguments handed to the URL builder: the panel plus the services the
/// flow resolved for it
pub struct GetExploreUrlArgs {
    pub panel: PanelModel,
    pub datasource_srv: Arc<dyn DataSourceService>,
    pub time_srv: Arc<TimeSrv>,
}

/// Injectable async URL builder
pub type GetExploreUrlFn =
    Box<dyn Fn(GetExploreUrlArgs) -> BoxFuture<'static, Result<String>> + Send + Sync>;

/// Dependency bundle for [`navigate_to_explore`].
///
/// The service accessors are functions rather than values so each navigation
/// resolves them fresh (no caching across dispatches); `open_in_new_window`
/// switches the flow from in-app navigation to caller-managed opening.
pub struct NavigateToExploreDeps {
    pub get_datasource_srv: Box<dyn Fn() -> Arc<dyn DataSourceService> + Send + Sync>,
    pub get_time_srv: Box<dyn Fn() -> Arc<TimeSrv> + Send + Sync>,
    pub get_explore_url: GetExploreUrlFn,
    pub location_srv: Arc<LocationService>,
    pub open_in_new_window: Option<Box<dyn Fn(&str) + Send + Sync>>,
}

impl NavigateToExploreDeps {
    /// Production wiring: accessors return the given services and the URL
    /// builder is [`get_explore_url`]
    pub fn new(
        datasource_srv: Arc<dyn DataSourceService>,
        time_srv: Arc<TimeSrv>,
        location_srv: Arc<LocationService>,
    ) -> Self {
        Self {
            get_datasource_srv: Box::new(move || datasource_srv.clone()),
            get_time_srv: Box::new(move || time_srv.clone()),
            get_explore_url: Box::new(|args| Box::pin(get_explore_url(args))),
            location_srv,
            open_in_new_window: None,
        }
    }

    /// Route the resolved URL to a callback instead of navigating
    pub fn with_open_in_new_window(
        mut self,
        open: impl Fn(&str) + Send + Sync + 'static,
    ) -> Self {
        self.open_in_new_window = Some(Box::new(open));
        self
    }
}

/// Navigate from a dashboard panel to Explore.
///
/// Resolves the data-source service and time service exactly once each,
/// builds the Explore URL for the panel, then navigates the location
/// service - or, when `open_in_new_window` is set, invokes it once with the
/// URL and performs no navigation. Dispatches nothing on the store either
/// way; the resulting URL is returned for callers that want it. Failures
/// from the injected collaborators propagate unchanged.
pub async fn navigate_to_explore(
    store: &ExploreStore,
    panel: &PanelModel,
    deps: &NavigateToExploreDeps,
) -> Result<String> {
    let datasource_srv = (deps.get_datasource_srv)();
    let time_srv = (deps.get_time_srv)();

    trace_debug!(
        "navigate_to_explore: {} targets, split={}",
        panel.targets.len(),
        store.state().is_split()
    );

    let url = (deps.get_explore_url)(GetExploreUrlArgs {
        panel: panel.clone(),
        datasource_srv,
        time_srv,
    })
    .await?;

    if let Some(open_in_new_window) = &deps.open_in_new_window {
        open_in_new_window(&url);
        log_info!("Explore URL handed to open_in_new_window");
        return Ok(url);
    }

    deps.location_srv.push(&url)?;
    log_info!("Navigated to Explore");
    Ok(url)
}

/// Production Explore URL builder.
///
/// Resolves the panel's data source (falling back to the registry default
/// when the panel names none), carries over the panel's visible targets and
/// the current raw time range, and serializes everything into the `left`
/// query parameter.
pub async fn get_explore_url(args: GetExploreUrlArgs) -> Result<String> {
    let GetExploreUrlArgs {
        panel,
        datasource_srv,
        time_srv,
    } = args;

    let datasource = match &panel.datasource {
        Some(datasource_ref) => datasource_srv.get(&datasource_ref.uid).await?,
        None => {
            log_warn!("Panel has no data source, falling back to default");
            datasource_srv.get_default().await?
        }
    };

    let state = ExploreUrlState::new(
        datasource.name.clone(),
        panel.explore_targets(),
        time_srv.raw_range(),
    );
    let serialized = serialize_state_to_url_param(&state)?;
    Ok(build_explore_url(&serialized))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::datasource::{DataSourceInstance, DataSourceRef, DataSourceRegistry};
    use crate::app::panels::DataQuery;
    use crate::app::time_srv::RawTimeRange;
    use crate::app::explore::url_state::parse_url_state;

    fn registry_with(uid: &str, name: &str) -> Arc<DataSourceRegistry> {
        let registry = DataSourceRegistry::new();
        registry.register(DataSourceInstance::new(uid, name));
        Arc::new(registry)
    }

    fn decode_left_param(url: &str) -> ExploreUrlState {
        let (path, query) = url.split_once("?left=").unwrap();
        assert_eq!(path, "/explore");
        let decoded = percent_encoding::percent_decode_str(query)
            .decode_utf8()
            .unwrap();
        parse_url_state(&decoded).unwrap()
    }

    #[tokio::test]
    async fn test_get_explore_url_uses_panel_datasource() {
        let registry = registry_with("uid-1", "Prometheus");
        let panel = PanelModel::new(
            Some(DataSourceRef::new("uid-1")),
            vec![DataQuery::new("A")],
        );

        let url = get_explore_url(GetExploreUrlArgs {
            panel,
            datasource_srv: registry,
            time_srv: Arc::new(TimeSrv::default()),
        })
        .await
        .unwrap();

        let state = decode_left_param(&url);
        assert_eq!(state.datasource, "Prometheus");
        assert_eq!(state.queries.len(), 1);
        assert_eq!(state.range, RawTimeRange::new("now-6h", "now"));
    }

    #[tokio::test]
    async fn test_get_explore_url_falls_back_to_default() {
        let registry = registry_with("uid-1", "Default DS");
        let panel = PanelModel::new(None, vec![]);

        let url = get_explore_url(GetExploreUrlArgs {
            panel,
            datasource_srv: registry,
            time_srv: Arc::new(TimeSrv::default()),
        })
        .await
        .unwrap();

        assert_eq!(decode_left_param(&url).datasource, "Default DS");
    }

    #[tokio::test]
    async fn test_get_explore_url_drops_hidden_targets() {
        let registry = registry_with("uid-1", "DS");
        let mut hidden = DataQuery::new("B");
        hidden.hide = Some(true);
        let panel = PanelModel::new(
            Some(DataSourceRef::new("uid-1")),
            vec![DataQuery::new("A"), hidden],
        );

        let url = get_explore_url(GetExploreUrlArgs {
            panel,
            datasource_srv: registry,
            time_srv: Arc::new(TimeSrv::default()),
        })
        .await
        .unwrap();

        let state = decode_left_param(&url);
        assert_eq!(state.queries.len(), 1);
        assert_eq!(state.queries[0].ref_id, "A");
    }

    #[tokio::test]
    async fn test_get_explore_url_unknown_datasource_errors() {
        let registry = registry_with("uid-1", "DS");
        let panel = PanelModel::new(Some(DataSourceRef::new("missing")), vec![]);

        let result = get_explore_url(GetExploreUrlArgs {
            panel,
            datasource_srv: registry,
            time_srv: Arc::new(TimeSrv::default()),
        })
        .await;

        assert!(result.is_err());
    }
}
