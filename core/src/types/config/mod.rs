mod app;
mod core;

pub use app::{AppConfig, AppConfigError, GeneralConfig, Theme};
pub use self::core::Config;

#[cfg(test)]
mod tests;
