pub mod configuration;
pub mod connection;
pub mod environment;
pub mod error;
pub mod fields;
pub mod to_runtime_configuration;
pub mod values;
pub mod version1;

pub use configuration::Configuration;
pub use connection::{ConnectionConfig, ConnectionString, ConnectionStringError, MissingFieldError};
pub use fields::Field;
pub use to_runtime_configuration::make_runtime_configuration;
pub use values::{Host, Port, Secret};
pub use version1::{parse_configuration, write_parsed_configuration, ParsedConfiguration};
