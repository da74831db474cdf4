mod loader;
mod paths;
mod schema;
mod types;

pub use loader::{LoadError, config_path, load, load_from_path, load_from_str};
pub use paths::{BaseDirs, Paths, expand_tilde};
pub use schema::{ConfigError, ValidationError, ValidationResult, schema, validate};
pub use types::Config;
