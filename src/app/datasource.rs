//! Data-source lookup service
//!
//! The Explore navigation flow needs to resolve a panel's data-source
//! reference into a concrete instance. The plugin system that actually
//! instantiates data sources is outside this crate, so the seam is a small
//! async trait plus an in-memory registry suitable for hosts and tests.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Reference to a data source as stored on panels and queries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSourceRef {
    pub uid: String,
}

impl DataSourceRef {
    pub fn new(uid: impl Into<String>) -> Self {
        Self { uid: uid.into() }
    }
}

/// A resolved data-source instance
///
/// `name` is the human-readable name users picked at configuration time; it
/// is what the Explore URL state carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSourceInstance {
    pub uid: String,
    pub name: String,
}

impl DataSourceInstance {
    pub fn new(uid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            name: name.into(),
        }
    }
}

/// Async lookup of data-source instances by uid
#[async_trait]
pub trait DataSourceService: Send + Sync {
    /// Resolve a data source by uid
    async fn get(&self, uid: &str) -> Result<Arc<DataSourceInstance>>;

    /// Resolve the configured default data source
    async fn get_default(&self) -> Result<Arc<DataSourceInstance>>;
}

/// In-memory data-source registry
///
/// Hosts register instances at startup; the first registered instance
/// becomes the default unless one is marked explicitly.
#[derive(Default)]
pub struct DataSourceRegistry {
    instances: RwLock<HashMap<String, Arc<DataSourceInstance>>>,
    default_uid: RwLock<Option<String>>,
}

impl DataSourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an instance, keyed by its uid
    pub fn register(&self, instance: DataSourceInstance) {
        let uid = instance.uid.clone();
        if let Ok(mut instances) = self.instances.write() {
            instances.insert(uid.clone(), Arc::new(instance));
        }
        if let Ok(mut default_uid) = self.default_uid.write() {
            if default_uid.is_none() {
                trace_debug!("Registry default data source set to '{}'", uid);
                *default_uid = Some(uid);
            }
        }
    }

    /// Mark an already-registered instance as the default
    pub fn set_default(&self, uid: &str) {
        if let Ok(mut default_uid) = self.default_uid.write() {
            *default_uid = Some(uid.to_string());
        }
    }
}

#[async_trait]
impl DataSourceService for DataSourceRegistry {
    async fn get(&self, uid: &str) -> Result<Arc<DataSourceInstance>> {
        let instances = self
            .instances
            .read()
            .map_err(|_| anyhow!("data-source registry lock poisoned"))?;
        instances
            .get(uid)
            .cloned()
            .ok_or_else(|| anyhow!("data source '{}' not found", uid))
    }

    async fn get_default(&self) -> Result<Arc<DataSourceInstance>> {
        let default_uid = self
            .default_uid
            .read()
            .map_err(|_| anyhow!("data-source registry lock poisoned"))?
            .clone()
            .ok_or_else(|| anyhow!("no default data source configured"))?;
        self.get(&default_uid).await
    }
}
