//! The ARP dialect describing Drill's SQL to the host query engine.
//!
//! The dialect definition ships with the connector and is parsed at most once
//! per process; every plugin configuration shares the same read-only handle.

use std::sync::Arc;

use once_cell::sync::OnceCell;
use serde::Deserialize;
use thiserror::Error;

/// Name of the bundled dialect definition.
pub const DRILL_ARP_FILENAME: &str = "arp/implementation/drill-arp.yaml";
const DRILL_ARP: &str = include_str!("../arp/implementation/drill-arp.yaml");

static DRILL_DIALECT: OnceCell<Arc<ArpDialect>> = OnceCell::new();

/// The shared Drill dialect, parsed on first use.
pub fn drill_dialect() -> Result<Arc<ArpDialect>, DialectError> {
    DRILL_DIALECT
        .get_or_try_init(|| {
            ArpDialect::from_yaml(DRILL_ARP_FILENAME, DRILL_ARP).map(|dialect| {
                tracing::debug!(
                    name = %dialect.metadata.name,
                    mappings = dialect.data_types.mappings.len(),
                    "loaded ARP dialect"
                );
                Arc::new(dialect)
            })
        })
        .cloned()
}

/// An ARP dialect definition.
///
/// Only the sections this connector reads are typed. The relational algebra and
/// expression sections are kept as raw YAML for the host's dialect engine.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ArpDialect {
    pub metadata: Metadata,
    pub syntax: Syntax,
    #[serde(default)]
    pub data_types: DataTypes,
    #[serde(default)]
    pub relational_algebra: serde_yaml::Value,
    #[serde(default)]
    pub expressions: serde_yaml::Value,
}

impl ArpDialect {
    /// Parse a dialect definition. `resource` names the source in errors.
    pub fn from_yaml(resource: &str, contents: &str) -> Result<Self, DialectError> {
        serde_yaml::from_str(contents).map_err(|source| DialectError::Parse {
            resource: resource.to_string(),
            source,
        })
    }

    /// The host type a source type maps to, matched case-insensitively.
    pub fn host_type(&self, source_type: &str) -> Option<&str> {
        self.data_types
            .mappings
            .iter()
            .find(|mapping| mapping.source.name.eq_ignore_ascii_case(source_type))
            .map(|mapping| mapping.host.name.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Metadata {
    pub name: String,
    pub apiname: String,
    pub spec_version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Syntax {
    pub identifier_quote: String,
    #[serde(default)]
    pub identifier_length_limit: Option<u32>,
    #[serde(default)]
    pub allows_boolean_literal: bool,
    #[serde(default)]
    pub map_boolean_literal_to_bit: bool,
    #[serde(default)]
    pub supports_catalogs: bool,
    #[serde(default)]
    pub supports_schemas: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DataTypes {
    #[serde(default)]
    pub mappings: Vec<TypeMapping>,
}

/// How a type reported by the source is presented to the host.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TypeMapping {
    pub source: SourceType,
    #[serde(rename = "dremio")]
    pub host: HostType,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SourceType {
    pub name: String,
    #[serde(default)]
    pub max_precision: Option<u32>,
    #[serde(default)]
    pub max_scale: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HostType {
    pub name: String,
}

#[derive(Debug, Error)]
pub enum DialectError {
    #[error("unable to parse dialect {resource}: {source}")]
    Parse {
        resource: String,
        source: serde_yaml::Error,
    },
}
