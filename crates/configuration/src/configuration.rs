//! Configuration for the connector.

use crate::connection::ConnectionConfig;

/// The 'Configuration' type collects all the information necessary to reach a Drill
/// cluster at runtime.
///
/// Values of this type are produced from a 'ParsedConfiguration' using
/// 'make_runtime_configuration', after every secret has been resolved against the
/// environment and every field checked against the field table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub connection: ConnectionConfig,
}

impl Configuration {
    pub fn fetch_size(&self) -> u32 {
        self.connection.fetch_size
    }
}
