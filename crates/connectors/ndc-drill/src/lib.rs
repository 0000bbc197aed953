pub mod connector;
pub mod data_source;
pub mod dialect;
pub mod plugin;

pub use connector::{DrillSetup, InitializationError};
pub use data_source::{CommitMode, DataSourceFactory, PooledDataSourceConstructor, DRIVER};
pub use dialect::{drill_dialect, ArpDialect};
pub use plugin::PluginConfig;
