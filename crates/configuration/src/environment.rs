//! Access to the environment the connector runs in.
//!
//! Configuration values wrapped in a [`crate::values::Secret`] may point at an
//! environment variable instead of carrying the value inline. They are resolved
//! through an [`Environment`] so tests can supply a fixed set of variables.

use std::collections::HashMap;
use std::env::VarError;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The name of an environment variable.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize, JsonSchema,
)]
#[serde(transparent)]
pub struct Variable(String);

impl Variable {
    pub fn new(name: String) -> Self {
        Self(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Variable {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Variable {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let Variable(name) = self;
        write!(f, "{name}")
    }
}

/// Errors raised while reading a variable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("the environment variable {0} is not set")]
    VariableNotPresent(Variable),
    #[error("the environment variable {0} does not contain valid unicode")]
    NonUnicodeValue(Variable),
}

/// A source of environment variables.
pub trait Environment {
    fn read(&self, variable: &Variable) -> Result<String, Error>;
}

impl<E: Environment> Environment for &E {
    fn read(&self, variable: &Variable) -> Result<String, Error> {
        (*self).read(variable)
    }
}

/// The environment of the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn read(&self, variable: &Variable) -> Result<String, Error> {
        std::env::var(variable.as_str()).map_err(|err| match err {
            VarError::NotPresent => Error::VariableNotPresent(variable.clone()),
            VarError::NotUnicode(_) => Error::NonUnicodeValue(variable.clone()),
        })
    }
}

/// An environment with no variables set.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyEnvironment;

impl Environment for EmptyEnvironment {
    fn read(&self, variable: &Variable) -> Result<String, Error> {
        Err(Error::VariableNotPresent(variable.clone()))
    }
}

impl Environment for HashMap<Variable, String> {
    fn read(&self, variable: &Variable) -> Result<String, Error> {
        self.get(variable)
            .cloned()
            .ok_or_else(|| Error::VariableNotPresent(variable.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_environment_reads_known_variables() {
        let environment = HashMap::from([(Variable::from("DRILL_HOST"), "zk1".to_string())]);

        assert_eq!(environment.read(&"DRILL_HOST".into()), Ok("zk1".to_string()));
        assert_eq!(
            environment.read(&"DRILL_PORT".into()),
            Err(Error::VariableNotPresent("DRILL_PORT".into()))
        );
    }

    #[test]
    fn empty_environment_has_nothing() {
        let variable = Variable::from("DRILL_HOST");
        assert_eq!(
            EmptyEnvironment.read(&variable),
            Err(Error::VariableNotPresent(variable))
        );
    }

    #[test]
    fn variables_serialize_as_plain_strings() {
        let variable = Variable::from("DRILL_PORT");
        assert_eq!(
            serde_json::to_value(&variable).unwrap(),
            serde_json::json!("DRILL_PORT")
        );
    }
}
