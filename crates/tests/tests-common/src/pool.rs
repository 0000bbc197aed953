//! A stand-in for the external connection pool.

use std::collections::BTreeMap;
use std::sync::Mutex;

use ndc_drill::data_source::{CommitMode, PooledDataSourceConstructor, PooledDataSourceRequest};

/// What the pool was asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub driver: String,
    pub connection_string: String,
    pub user: Option<String>,
    pub password: Option<String>,
    pub properties: Option<BTreeMap<String, String>>,
    pub commit_mode: CommitMode,
}

/// A data source as handed back by [`RecordingPool`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeDataSource {
    pub connection_string: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    #[error("driver {0} not found")]
    DriverNotFound(String),
    #[error("connection refused: {0}")]
    ConnectionRefused(String),
    #[error("authentication failed")]
    AuthenticationFailed,
}

/// Records every request and answers with a fixed outcome.
#[derive(Debug, Default)]
pub struct RecordingPool {
    failure: Option<PoolError>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl RecordingPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// A pool that fails every request with `error`.
    pub fn failing(error: PoolError) -> Self {
        Self {
            failure: Some(error),
            requests: Mutex::default(),
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

impl PooledDataSourceConstructor for RecordingPool {
    type DataSource = FakeDataSource;
    type Error = PoolError;

    fn new_pooled_data_source(
        &self,
        request: &PooledDataSourceRequest<'_>,
    ) -> Result<FakeDataSource, PoolError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(RecordedRequest {
                driver: request.driver.to_string(),
                connection_string: request.connection_string.to_string(),
                user: request.user.map(ToString::to_string),
                password: request.password.map(ToString::to_string),
                properties: request.properties.cloned(),
                commit_mode: request.commit_mode,
            });
        }

        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(FakeDataSource {
                connection_string: request.connection_string.to_string(),
            }),
        }
    }
}
