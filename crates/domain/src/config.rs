pub mod errors;
pub mod import;
pub mod logging;
pub mod root;

pub use errors::ConfigError;
pub use import::ImportConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use root::{CliOverrides, Config};
