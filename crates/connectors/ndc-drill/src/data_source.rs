//! Handing connection details to the external connection pool.
//!
//! This crate never opens connections itself. A [`DataSourceFactory`] holds what
//! the pool needs and calls a [`PooledDataSourceConstructor`] when the host asks
//! for a data source.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use ndc_drill_configuration::{ConnectionConfig, ConnectionString, ConnectionStringError};

/// JDBC driver class of the Drill driver.
pub const DRIVER: &str = "org.apache.drill.jdbc.Driver";

/// How the pool manages transaction commits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommitMode {
    /// Turn auto-commit on for every connection.
    ForceAutoCommit,
    /// Turn auto-commit off for every connection.
    ForceManualCommit,
    /// Leave auto-commit at whatever the driver defaults to.
    DriverSpecified,
}

/// Everything the pool is given to build a data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PooledDataSourceRequest<'a> {
    pub driver: &'a str,
    pub connection_string: &'a ConnectionString,
    pub user: Option<&'a str>,
    pub password: Option<&'a str>,
    pub properties: Option<&'a BTreeMap<String, String>>,
    pub commit_mode: CommitMode,
}

/// The external connection pool.
///
/// Failures such as a missing driver, a refused connection or rejected
/// credentials are reported through `Error` and are returned to the caller
/// untouched.
pub trait PooledDataSourceConstructor: Send + Sync {
    type DataSource;
    type Error: std::error::Error + Send + Sync + 'static;

    fn new_pooled_data_source(
        &self,
        request: &PooledDataSourceRequest<'_>,
    ) -> Result<Self::DataSource, Self::Error>;
}

/// Creates pooled data sources for one Drill source on demand.
pub struct DataSourceFactory<C> {
    connection_string: ConnectionString,
    constructor: Arc<C>,
}

impl<C: PooledDataSourceConstructor> DataSourceFactory<C> {
    /// Capture the connection string of `config`. Nothing is connected yet.
    pub fn new(
        config: &ConnectionConfig,
        constructor: Arc<C>,
    ) -> Result<Self, ConnectionStringError> {
        Ok(Self {
            connection_string: config.connection_string()?,
            constructor,
        })
    }

    pub fn connection_string(&self) -> &ConnectionString {
        &self.connection_string
    }

    pub fn commit_mode(&self) -> CommitMode {
        CommitMode::DriverSpecified
    }

    /// Ask the pool for a new data source.
    ///
    /// Credentials and driver properties are never passed; Drill takes them
    /// from the connection string.
    pub fn create(&self) -> Result<C::DataSource, C::Error> {
        let request = PooledDataSourceRequest {
            driver: DRIVER,
            connection_string: &self.connection_string,
            user: None,
            password: None,
            properties: None,
            commit_mode: self.commit_mode(),
        };

        self.constructor
            .new_pooled_data_source(&request)
            .map_err(|err| {
                tracing::error!(
                    meta.signal_type = "log",
                    event.domain = "ndc",
                    event.name = "Data source error",
                    name = "Data source error",
                    body = %err,
                    error = true,
                );
                err
            })
    }
}

impl<C> Clone for DataSourceFactory<C> {
    fn clone(&self) -> Self {
        Self {
            connection_string: self.connection_string.clone(),
            constructor: Arc::clone(&self.constructor),
        }
    }
}

impl<C> fmt::Debug for DataSourceFactory<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataSourceFactory")
            .field("driver", &DRIVER)
            .field("connection_string", &self.connection_string)
            .finish_non_exhaustive()
    }
}
