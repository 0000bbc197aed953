use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Secret;

/// Host of a Drillbit, or of the ZooKeeper quorum in discovery mode.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct Host(pub Secret);

impl From<String> for Host {
    fn from(value: String) -> Self {
        Self(value.into())
    }
}

impl From<&str> for Host {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

/// Port paired with the host. Kept as a string, as users enter it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct Port(pub Secret);

impl From<String> for Port {
    fn from(value: String) -> Self {
        Self(value.into())
    }
}

impl From<&str> for Port {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}
