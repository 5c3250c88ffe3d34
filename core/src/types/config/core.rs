use std::path::PathBuf;

/// Filesystem layout of the data directory.
///
/// Both the loadouts file and the app config live under `base_path`, which
/// defaults to the fixed `loadouts` directory relative to the working
/// directory.
#[derive(Clone, Debug)]
pub struct Config {
    pub base_path: PathBuf,
}

impl Config {
    /// Returns the loadouts JSON file path within the data directory.
    pub fn loadouts_path(&self) -> PathBuf {
        self.base_path.join("loadouts.json")
    }

    /// Returns the app config file path within the data directory.
    pub fn config_path(&self) -> PathBuf {
        self.base_path.join("config.toml")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("loadouts"),
        }
    }
}
