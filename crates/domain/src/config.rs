pub mod errors;
pub mod logging;
pub mod provider;
pub mod root;
pub mod server;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use provider::{ProviderConfig, ProviderKind, StaticRecord, DEFAULT_ENS_REGISTRY};
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
