pub(crate) mod config;
pub use config::{AppConfig, AppConfigError, Config, GeneralConfig, Theme};

pub(crate) mod name;
pub use name::{MAX_NAME_LENGTH, Name, NameError};
