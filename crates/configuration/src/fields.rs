//! The fields a Drill source accepts.
//!
//! Each field is described once in [`FIELDS`]: the key it is stored under, the
//! label shown to users, whether it must be set, its default, and whether
//! changing it affects the metadata the host catalogs from the source. The
//! table drives validation of a loaded configuration.

use std::fmt;

use crate::connection::{self, ConnectionConfig};

pub const DEFAULT_DIRECTORY: &str = "/drill";
pub const DEFAULT_CLUSTER_ID: &str = "drillbits1";
pub const DEFAULT_FETCH_SIZE: u32 = 200;

/// A user-facing field of a Drill source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Drillbit,
    Host,
    Port,
    Directory,
    ClusterId,
    Schema,
    FetchSize,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Drillbit,
        Field::Host,
        Field::Port,
        Field::Directory,
        Field::ClusterId,
        Field::Schema,
        Field::FetchSize,
    ];

    pub fn descriptor(self) -> &'static FieldDescriptor {
        &FIELDS[self as usize]
    }

    /// The key this field is stored under in `configuration.json`.
    pub fn name(self) -> &'static str {
        self.descriptor().name
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub field: Field,
    pub name: &'static str,
    pub label: &'static str,
    pub required: bool,
    pub default: Option<&'static str>,
    pub metadata_impacting: bool,
}

/// Indexed by `Field as usize`.
pub const FIELDS: [FieldDescriptor; 7] = [
    FieldDescriptor {
        field: Field::Drillbit,
        name: "drillbit",
        label: "Drillbit",
        required: false,
        default: Some("false"),
        metadata_impacting: true,
    },
    FieldDescriptor {
        field: Field::Host,
        name: "host",
        label: "Host",
        required: true,
        default: None,
        metadata_impacting: true,
    },
    FieldDescriptor {
        field: Field::Port,
        name: "port",
        label: "Port",
        required: true,
        default: None,
        metadata_impacting: true,
    },
    FieldDescriptor {
        field: Field::Directory,
        name: "directory",
        label: "Directory",
        required: false,
        default: Some(DEFAULT_DIRECTORY),
        metadata_impacting: true,
    },
    FieldDescriptor {
        field: Field::ClusterId,
        name: "clusterId",
        label: "Cluster ID",
        required: false,
        default: Some(DEFAULT_CLUSTER_ID),
        metadata_impacting: true,
    },
    FieldDescriptor {
        field: Field::Schema,
        name: "schema",
        label: "Schema",
        required: false,
        default: None,
        metadata_impacting: true,
    },
    FieldDescriptor {
        field: Field::FetchSize,
        name: "fetchSize",
        label: "Record fetch size",
        required: false,
        default: Some("200"),
        metadata_impacting: false,
    },
];

/// A single problem with a field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidField {
    pub field: Field,
    pub message: String,
}

impl fmt::Display for InvalidField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every problem found in a configuration, in field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidFields(pub Vec<InvalidField>);

impl fmt::Display for InvalidFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let InvalidFields(fields) = self;
        for (index, field) in fields.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{field}")?;
        }
        Ok(())
    }
}

/// Check a connection configuration against the field table.
///
/// All problems are reported together rather than stopping at the first.
pub fn validate(config: &ConnectionConfig) -> Result<(), InvalidFields> {
    let mut errors = vec![];

    for descriptor in &FIELDS {
        let value = config.field_value(descriptor.field);
        if descriptor.required && value.as_deref().map_or(true, is_blank) {
            errors.push(InvalidField {
                field: descriptor.field,
                message: format!("{} must be specified", descriptor.label),
            });
        }
    }

    if let Some(schema) = config.schema.as_deref() {
        if let Err(err) = connection::check_schema(schema) {
            errors.push(InvalidField {
                field: Field::Schema,
                message: err.to_string(),
            });
        }
    }

    // The coordination path only matters when going through ZooKeeper.
    if !config.drillbit {
        if !config.directory.starts_with('/') {
            errors.push(InvalidField {
                field: Field::Directory,
                message: format!(
                    "directory must be an absolute ZooKeeper path, got {:?}",
                    config.directory
                ),
            });
        }
        if is_blank(&config.cluster_id) {
            errors.push(InvalidField {
                field: Field::ClusterId,
                message: "Cluster ID must be specified in discovery mode".to_string(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        errors.sort_by_key(|error| error.field);
        Err(InvalidFields(errors))
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
