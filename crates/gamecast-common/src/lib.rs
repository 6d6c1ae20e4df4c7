pub mod errors;
pub mod types;

pub use errors::{ConfigError, GamecastError, PlatformError};
pub use types::{ImageDetail, DEFAULT_BASE_URL};
