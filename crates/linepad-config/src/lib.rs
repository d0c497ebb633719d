pub mod config;

pub use config::{AppConfig, CONFIG_ENV_VAR, CONFIG_FILE_NAME};
