//! The storage plugin configuration handed to the host.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use ndc_drill_configuration::{ConnectionConfig, ConnectionStringError};

use crate::data_source::{DataSourceFactory, PooledDataSourceConstructor};
use crate::dialect::ArpDialect;

/// How this connector registers itself with the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceType {
    pub value: &'static str,
    pub label: &'static str,
}

pub const SOURCE_TYPE: SourceType = SourceType {
    value: "DRILL",
    label: "Drill",
};

/// Schemas the host leaves out of catalog listings.
pub const HIDDEN_SCHEMAS: [&str; 1] = ["SYSTEM"];

/// Everything the host needs to run queries against a Drill source.
pub struct PluginConfig<C> {
    pub dialect: Arc<ArpDialect>,
    pub fetch_size: u32,
    pub data_source_factory: DataSourceFactory<C>,
    pub hidden_schemas: BTreeSet<String>,
}

impl<C: PooledDataSourceConstructor> PluginConfig<C> {
    /// Assemble the plugin configuration for `config`.
    ///
    /// The dialect is shared, not copied. The pool is not called here; the host
    /// invokes the factory when it first needs a connection.
    pub fn new(
        config: &ConnectionConfig,
        dialect: Arc<ArpDialect>,
        constructor: Arc<C>,
    ) -> Result<Self, ConnectionStringError> {
        Ok(Self {
            dialect,
            fetch_size: config.fetch_size,
            data_source_factory: DataSourceFactory::new(config, constructor)?,
            hidden_schemas: HIDDEN_SCHEMAS.iter().map(ToString::to_string).collect(),
        })
    }

    pub fn is_hidden_schema(&self, schema: &str) -> bool {
        self.hidden_schemas.contains(schema)
    }
}

impl<C> Clone for PluginConfig<C> {
    fn clone(&self) -> Self {
        Self {
            dialect: Arc::clone(&self.dialect),
            fetch_size: self.fetch_size,
            data_source_factory: self.data_source_factory.clone(),
            hidden_schemas: self.hidden_schemas.clone(),
        }
    }
}

impl<C> fmt::Debug for PluginConfig<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginConfig")
            .field("dialect", &self.dialect.metadata.name)
            .field("fetch_size", &self.fetch_size)
            .field("data_source_factory", &self.data_source_factory)
            .field("hidden_schemas", &self.hidden_schemas)
            .finish()
    }
}
