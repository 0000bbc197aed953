//! Version 1 of the on-disk configuration format.

use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::error::{ParseConfigurationError, WriteParsedConfigurationError};
use crate::fields::{DEFAULT_CLUSTER_ID, DEFAULT_DIRECTORY, DEFAULT_FETCH_SIZE};
use crate::values::{Host, Port, Secret};

pub const CURRENT_VERSION: u32 = 1;
pub const CONFIGURATION_FILENAME: &str = "configuration.json";
pub const CONFIGURATION_JSONSCHEMA_FILENAME: &str = "schema.json";
pub const DEFAULT_HOST_VARIABLE: &str = "DRILL_HOST";
pub const DEFAULT_PORT_VARIABLE: &str = "DRILL_PORT";

/// The settings of a Drill source, as written by the user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParsedConfiguration {
    // Which version of the configuration format are we using
    pub version: u32,
    /// Connect directly to a single Drillbit instead of discovering the cluster
    /// through ZooKeeper.
    #[serde(default)]
    pub drillbit: bool,
    /// Host of the Drillbit, or of the ZooKeeper quorum.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<Host>,
    /// Port of the Drillbit, or of the ZooKeeper quorum.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<Port>,
    /// ZooKeeper root directory of the Drill cluster.
    #[serde(default = "directory_default")]
    pub directory: String,
    /// Drill cluster id registered in ZooKeeper.
    #[serde(default = "cluster_id_default")]
    pub cluster_id: String,
    /// Default schema for the connection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    /// Number of records fetched per round trip.
    #[serde(default = "fetch_size_default")]
    pub fetch_size: u32,
}

impl ParsedConfiguration {
    pub fn initial() -> Self {
        ParsedConfiguration::empty()
    }

    /// A configuration that reads host and port from the default environment
    /// variables and leaves everything else at its default.
    pub fn empty() -> Self {
        Self {
            version: CURRENT_VERSION,
            drillbit: false,
            host: Some(Host(Secret::FromEnvironment {
                variable: DEFAULT_HOST_VARIABLE.into(),
            })),
            port: Some(Port(Secret::FromEnvironment {
                variable: DEFAULT_PORT_VARIABLE.into(),
            })),
            directory: directory_default(),
            cluster_id: cluster_id_default(),
            schema: None,
            fetch_size: fetch_size_default(),
        }
    }
}

// for serde default //
fn directory_default() -> String {
    DEFAULT_DIRECTORY.to_string()
}
fn cluster_id_default() -> String {
    DEFAULT_CLUSTER_ID.to_string()
}
fn fetch_size_default() -> u32 {
    DEFAULT_FETCH_SIZE
}

/// Parse the configuration format from a directory.
pub async fn parse_configuration(
    configuration_dir: impl AsRef<Path>,
) -> Result<ParsedConfiguration, ParseConfigurationError> {
    let configuration_file = configuration_dir.as_ref().join(CONFIGURATION_FILENAME);
    tracing::debug!(file = %configuration_file.display(), "reading configuration");

    let configuration_file_contents =
        fs::read_to_string(&configuration_file)
            .await
            .map_err(|err| {
                ParseConfigurationError::IoErrorButStringified(format!(
                    "{}: {}",
                    &configuration_file.display(),
                    err
                ))
            })?;

    let located = |error: serde_json::Error| ParseConfigurationError::ParseError {
        file_path: configuration_file.clone(),
        line: error.line(),
        column: error.column(),
        message: error.to_string(),
    };

    let raw: serde_json::Value =
        serde_json::from_str(&configuration_file_contents).map_err(located)?;
    match raw.get("version") {
        None => {
            return Err(ParseConfigurationError::DidNotFindExpectedVersionTag {
                file_path: configuration_file.clone(),
            });
        }
        Some(version) if version.as_u64() != Some(u64::from(CURRENT_VERSION)) => {
            return Err(ParseConfigurationError::UnsupportedVersion {
                file_path: configuration_file.clone(),
                version: version.clone(),
                expected: CURRENT_VERSION,
            });
        }
        Some(_) => {}
    }

    let parsed_config: ParsedConfiguration =
        serde_json::from_str(&configuration_file_contents).map_err(located)?;

    Ok(parsed_config)
}

/// Write the parsed configuration into a directory on disk, along with the JSON
/// schema describing it.
pub async fn write_parsed_configuration(
    parsed_config: ParsedConfiguration,
    out_dir: impl AsRef<Path>,
) -> Result<(), WriteParsedConfigurationError> {
    let configuration_file = out_dir.as_ref().to_owned().join(CONFIGURATION_FILENAME);
    fs::create_dir_all(out_dir.as_ref()).await?;

    // create the configuration file
    fs::write(
        configuration_file,
        serde_json::to_string_pretty(&parsed_config)
            .map_err(|e| WriteParsedConfigurationError::IoError(e.into()))?
            + "\n",
    )
    .await?;

    // create the jsonschema file
    let configuration_jsonschema_file_path = out_dir
        .as_ref()
        .to_owned()
        .join(CONFIGURATION_JSONSCHEMA_FILENAME);

    let output = schemars::schema_for!(ParsedConfiguration);
    fs::write(
        &configuration_jsonschema_file_path,
        serde_json::to_string_pretty(&output)
            .map_err(|e| WriteParsedConfigurationError::IoError(e.into()))?
            + "\n",
    )
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Variable;

    #[test]
    fn defaults_are_filled_in() {
        let parsed: ParsedConfiguration = serde_json::from_value(serde_json::json!({
            "version": 1,
            "host": "zk1",
            "port": "2181"
        }))
        .unwrap();

        assert_eq!(
            parsed,
            ParsedConfiguration {
                version: 1,
                drillbit: false,
                host: Some("zk1".into()),
                port: Some("2181".into()),
                directory: "/drill".to_string(),
                cluster_id: "drillbits1".to_string(),
                schema: None,
                fetch_size: 200,
            }
        );
    }

    #[test]
    fn secrets_can_come_from_the_environment() {
        let parsed: ParsedConfiguration = serde_json::from_value(serde_json::json!({
            "version": 1,
            "drillbit": true,
            "host": { "variable": "MY_DRILL_HOST" },
            "port": "31010",
            "clusterId": "prod",
            "fetchSize": 1000
        }))
        .unwrap();

        assert_eq!(
            parsed.host,
            Some(Host(Secret::FromEnvironment {
                variable: Variable::from("MY_DRILL_HOST")
            }))
        );
        assert_eq!(parsed.port, Some(Port(Secret::Plain("31010".to_string()))));
        assert_eq!(parsed.cluster_id, "prod");
        assert_eq!(parsed.fetch_size, 1000);
    }

    #[test]
    fn initial_configuration_serializes_in_camel_case() {
        let value = serde_json::to_value(ParsedConfiguration::initial()).unwrap();
        similar_asserts::assert_eq!(
            value,
            serde_json::json!({
                "version": 1,
                "drillbit": false,
                "host": { "variable": "DRILL_HOST" },
                "port": { "variable": "DRILL_PORT" },
                "directory": "/drill",
                "clusterId": "drillbits1",
                "fetchSize": 200
            })
        );
    }
}
