//! Connection settings for a Drill source and the JDBC URL derived from them.
//!
//! Two URL shapes are produced:
//!
//! - direct: `jdbc:drill:drillbit=<host>:<port>`
//! - discovery: `jdbc:drill:zk=<host>:<port><directory>/<clusterId>`
//!
//! Either may be followed by `;schema=<schema>`.

use std::fmt;

use thiserror::Error;

use crate::fields::{Field, DEFAULT_CLUSTER_ID, DEFAULT_DIRECTORY, DEFAULT_FETCH_SIZE};

const URL_PREFIX: &str = "jdbc:drill";

/// Resolved settings of a single Drill source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    /// Connect straight to a Drillbit instead of going through ZooKeeper.
    pub drillbit: bool,
    pub host: Option<String>,
    pub port: Option<String>,
    /// ZooKeeper root of the Drill cluster. Only used in discovery mode.
    pub directory: String,
    /// Only used in discovery mode.
    pub cluster_id: String,
    pub schema: Option<String>,
    /// Rows fetched per round trip. Not part of the connection URL.
    pub fetch_size: u32,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            drillbit: false,
            host: None,
            port: None,
            directory: DEFAULT_DIRECTORY.to_string(),
            cluster_id: DEFAULT_CLUSTER_ID.to_string(),
            schema: None,
            fetch_size: DEFAULT_FETCH_SIZE,
        }
    }
}

impl ConnectionConfig {
    /// Settings for a discovery-mode source with every optional field defaulted.
    pub fn new(host: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            host: Some(host.into()),
            port: Some(port.into()),
            ..Self::default()
        }
    }

    /// Build the JDBC URL for this source.
    ///
    /// Only `host` and `port` are checked for presence; an empty string counts
    /// as missing. An empty schema is treated as no schema.
    pub fn connection_string(&self) -> Result<ConnectionString, ConnectionStringError> {
        let host = required(self.host.as_deref(), Field::Host)?;
        let port = required(self.port.as_deref(), Field::Port)?;

        let mut url = String::from(URL_PREFIX);
        if self.drillbit {
            url.push_str(&format!(":drillbit={host}:{port}"));
        } else {
            url.push_str(&format!(
                ":zk={host}:{port}{}/{}",
                self.directory, self.cluster_id
            ));
        }

        if let Some(schema) = self.schema.as_deref().filter(|schema| !schema.is_empty()) {
            check_schema(schema)?;
            url.push_str(&format!(";schema={schema}"));
        }

        Ok(ConnectionString(url))
    }

    /// The value of a field rendered as text, or `None` when it is unset.
    pub fn field_value(&self, field: Field) -> Option<String> {
        match field {
            Field::Drillbit => Some(self.drillbit.to_string()),
            Field::Host => self.host.clone(),
            Field::Port => self.port.clone(),
            Field::Directory => Some(self.directory.clone()),
            Field::ClusterId => Some(self.cluster_id.clone()),
            Field::Schema => self.schema.clone(),
            Field::FetchSize => Some(self.fetch_size.to_string()),
        }
    }
}

fn required(value: Option<&str>, field: Field) -> Result<&str, MissingFieldError> {
    value
        .filter(|value| !value.trim().is_empty())
        .ok_or(MissingFieldError { field })
}

/// Reject schemas that would change the meaning of the URL.
///
/// `;` separates URL properties and `=` separates a key from its value, so
/// neither may appear in a schema name. Control characters are rejected too.
pub fn check_schema(schema: &str) -> Result<(), ConnectionStringError> {
    match schema
        .chars()
        .find(|&c| matches!(c, ';' | '=') || c.is_control())
    {
        Some(character) => Err(ConnectionStringError::InvalidSchema {
            schema: schema.to_string(),
            character,
        }),
        None => Ok(()),
    }
}

/// A JDBC URL accepted by the Drill driver.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConnectionString(String);

impl ConnectionString {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ConnectionString {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ConnectionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ConnectionString> for String {
    fn from(value: ConnectionString) -> Self {
        value.0
    }
}

/// A required field had no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("missing {field}")]
pub struct MissingFieldError {
    pub field: Field,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectionStringError {
    #[error(transparent)]
    MissingField(#[from] MissingFieldError),
    #[error("schema {schema:?} contains {character:?}, which is not allowed in a Drill connection string")]
    InvalidSchema { schema: String, character: char },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn direct() -> ConnectionConfig {
        ConnectionConfig {
            drillbit: true,
            ..ConnectionConfig::new("h", "p")
        }
    }

    fn discovery() -> ConnectionConfig {
        ConnectionConfig {
            directory: "/d".to_string(),
            cluster_id: "c1".to_string(),
            ..ConnectionConfig::new("h", "p")
        }
    }

    #[test]
    fn direct_connection() {
        let url = direct().connection_string().unwrap();
        assert_eq!(url.as_str(), "jdbc:drill:drillbit=h:p");
    }

    #[test]
    fn discovery_connection() {
        let url = discovery().connection_string().unwrap();
        assert_eq!(url.as_str(), "jdbc:drill:zk=h:p/d/c1");
    }

    #[test]
    fn discovery_connection_with_defaults() {
        let url = ConnectionConfig::new("zk1.example.com", "2181")
            .connection_string()
            .unwrap();
        insta::assert_snapshot!(url, @"jdbc:drill:zk=zk1.example.com:2181/drill/drillbits1");
    }

    #[test]
    fn schema_is_appended_to_both_forms() {
        for config in [direct(), discovery()] {
            let without = config.connection_string().unwrap();
            let with = ConnectionConfig {
                schema: Some("s".to_string()),
                ..config
            }
            .connection_string()
            .unwrap();
            assert_eq!(with.as_str(), format!("{without};schema=s"));
        }
    }

    #[test]
    fn empty_schema_is_the_same_as_no_schema() {
        for config in [direct(), discovery()] {
            let absent = config.connection_string().unwrap();
            let empty = ConnectionConfig {
                schema: Some(String::new()),
                ..config
            }
            .connection_string()
            .unwrap();
            assert_eq!(absent, empty);
            assert!(!empty.as_str().contains(";schema="));
        }
    }

    #[test]
    fn missing_host_is_reported() {
        for drillbit in [true, false] {
            let config = ConnectionConfig {
                drillbit,
                host: None,
                schema: Some("s".to_string()),
                ..ConnectionConfig::new("h", "p")
            };
            assert_eq!(
                config.connection_string(),
                Err(ConnectionStringError::MissingField(MissingFieldError {
                    field: Field::Host
                }))
            );
        }
    }

    #[test]
    fn missing_port_is_reported() {
        for drillbit in [true, false] {
            let config = ConnectionConfig {
                drillbit,
                port: Some(String::new()),
                ..ConnectionConfig::new("h", "p")
            };
            assert_eq!(
                config.connection_string(),
                Err(ConnectionStringError::MissingField(MissingFieldError {
                    field: Field::Port
                }))
            );
        }
    }

    #[test]
    fn host_is_checked_before_port() {
        let err = ConnectionConfig::default().connection_string().unwrap_err();
        assert_eq!(err.to_string(), "missing host");
    }

    #[test]
    fn identical_fields_give_identical_urls() {
        let first = ConnectionConfig {
            schema: Some("dfs.tmp".to_string()),
            fetch_size: 10,
            ..discovery()
        };
        let second = first.clone();
        assert_eq!(
            first.connection_string().unwrap(),
            second.connection_string().unwrap()
        );
        assert_eq!(
            first.connection_string().unwrap(),
            first.connection_string().unwrap()
        );
    }

    #[test]
    fn fetch_size_does_not_change_the_url() {
        let small = ConnectionConfig {
            fetch_size: 1,
            ..direct()
        };
        let large = ConnectionConfig {
            fetch_size: 10_000,
            ..direct()
        };
        assert_eq!(
            small.connection_string().unwrap(),
            large.connection_string().unwrap()
        );
    }

    #[test]
    fn schemas_that_break_the_url_are_rejected() {
        for (schema, character) in [("dfs;tmp", ';'), ("a=b", '='), ("dfs\ntmp", '\n')] {
            let config = ConnectionConfig {
                schema: Some(schema.to_string()),
                ..direct()
            };
            assert_eq!(
                config.connection_string(),
                Err(ConnectionStringError::InvalidSchema {
                    schema: schema.to_string(),
                    character,
                })
            );
        }
    }

    #[test]
    fn dotted_and_quoted_schemas_are_kept_verbatim() {
        let config = ConnectionConfig {
            schema: Some("dfs.`my tmp`".to_string()),
            ..direct()
        };
        assert_eq!(
            config.connection_string().unwrap().as_str(),
            "jdbc:drill:drillbit=h:p;schema=dfs.`my tmp`"
        );
    }
}
