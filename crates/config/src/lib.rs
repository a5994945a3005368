mod error;
mod loader;
mod schema;
mod types;

pub use error::{ConfigError, ValidationError, ValidationResult};
pub use loader::{config_path, ensure_config_exists, load, load_from_path, load_from_str};
pub use schema::{schema, validate};
pub use types::{Config, OutputMode};
