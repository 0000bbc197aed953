//! Entry point for a host framework loading a Drill source.
//!
//! The host reads a configuration directory through [`DrillSetup::parse_configuration`]
//! and then asks for the plugin configuration, supplying its own connection pool.

use std::path::Path;
use std::sync::Arc;

use thiserror::Error;
use tracing::{info_span, Instrument};

use ndc_drill_configuration as configuration;
use ndc_drill_configuration::environment::Environment;
use ndc_drill_configuration::error::{MakeRuntimeConfigurationError, ParseConfigurationError};
use ndc_drill_configuration::ConnectionStringError;

use crate::data_source::PooledDataSourceConstructor;
use crate::dialect::{self, DialectError};
use crate::plugin::PluginConfig;

pub struct DrillSetup<Env: Environment> {
    environment: Env,
}

impl<Env: Environment> DrillSetup<Env> {
    pub fn new(environment: Env) -> Self {
        Self { environment }
    }

    /// Read the configuration directory, resolve secrets and validate every field.
    pub async fn parse_configuration(
        &self,
        configuration_dir: impl AsRef<Path> + Send,
    ) -> Result<configuration::Configuration, InitializationError> {
        // Validation errors are not logged: they are part of the normal business of
        // checking user input and do not mean the connector itself is unhealthy.
        let parsed_configuration = configuration::parse_configuration(configuration_dir)
            .instrument(info_span!("parse configuration"))
            .await?;

        let runtime_configuration =
            configuration::make_runtime_configuration(parsed_configuration, &self.environment)?;

        Ok(runtime_configuration)
    }

    /// Build the plugin configuration, injecting the shared Drill dialect.
    pub fn plugin_config<C: PooledDataSourceConstructor>(
        &self,
        configuration: &configuration::Configuration,
        constructor: Arc<C>,
    ) -> Result<PluginConfig<C>, InitializationError> {
        let dialect = info_span!("load dialect").in_scope(dialect::drill_dialect)?;
        Ok(PluginConfig::new(
            &configuration.connection,
            dialect,
            constructor,
        )?)
    }
}

/// Errors raised while setting up a Drill source.
#[derive(Debug, Error)]
pub enum InitializationError {
    #[error("{0}")]
    ParseConfiguration(#[from] ParseConfigurationError),
    #[error("{0}")]
    MakeRuntimeConfiguration(#[from] MakeRuntimeConfigurationError),
    #[error("{0}")]
    Dialect(#[from] DialectError),
    #[error("{0}")]
    ConnectionString(#[from] ConnectionStringError),
}
