//! Convert a parsed configuration into the runtime configuration.

use crate::configuration::Configuration;
use crate::connection::ConnectionConfig;
use crate::environment::Environment;
use crate::error::MakeRuntimeConfigurationError;
use crate::fields::{self, Field};
use crate::values::{Host, Port, Secret};
use crate::version1::ParsedConfiguration;

/// Resolve every secret against the environment and check the result against the
/// field table.
pub fn make_runtime_configuration(
    parsed_config: ParsedConfiguration,
    environment: impl Environment,
) -> Result<Configuration, MakeRuntimeConfigurationError> {
    let host = parsed_config
        .host
        .map(|Host(secret)| resolve(secret, Field::Host, &environment))
        .transpose()?;
    let port = parsed_config
        .port
        .map(|Port(secret)| resolve(secret, Field::Port, &environment))
        .transpose()?;

    let connection = ConnectionConfig {
        drillbit: parsed_config.drillbit,
        host,
        port,
        directory: parsed_config.directory,
        cluster_id: parsed_config.cluster_id,
        schema: parsed_config.schema,
        fetch_size: parsed_config.fetch_size,
    };

    fields::validate(&connection).map_err(MakeRuntimeConfigurationError::InvalidFields)?;

    tracing::debug!(
        drillbit = connection.drillbit,
        fetch_size = connection.fetch_size,
        "resolved Drill source configuration"
    );

    Ok(Configuration { connection })
}

fn resolve(
    secret: Secret,
    field: Field,
    environment: impl Environment,
) -> Result<String, MakeRuntimeConfigurationError> {
    match secret {
        Secret::Plain(value) => Ok(value),
        Secret::FromEnvironment { variable } => environment.read(&variable).map_err(|error| {
            MakeRuntimeConfigurationError::MissingEnvironmentVariable {
                field,
                message: error.to_string(),
            }
        }),
    }
}
