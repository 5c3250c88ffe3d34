//! Loadout collection and its JSON file persistence.
//!
//! [`Loadouts`] is the plain in-memory collection; [`LoadoutStore`] wraps it
//! with a backing file and rewrites that file after every mutation, so the
//! on-disk state never lags the screen.

use crate::clipboard;
use crate::clipboard::ClipboardError;
use crate::types::{Config, Name};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

pub mod error {
    use super::ClipboardError;
    use thiserror::Error;

    /// Failures of the in-memory collection operations.
    #[derive(Debug, Error)]
    pub enum LoadoutError {
        #[error("No loadout named \"{0}\"")]
        NotFound(String),

        #[error("Gun index {index} out of range for a loadout with {len} guns")]
        IndexOutOfRange { index: usize, len: usize },
    }

    /// Failures of the file-backed store.
    #[derive(Debug, Error)]
    pub enum StoreError {
        #[error("Loadout error: {0}")]
        Loadout(#[from] LoadoutError),

        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),

        #[error("Malformed loadouts file: {0}")]
        Parse(#[from] serde_json::Error),

        #[error("Clipboard error: {0}")]
        Clipboard(#[from] ClipboardError),
    }
}

use error::{LoadoutError, StoreError};

/// Prefix token of the exported chat command string.
pub const COMMAND_PREFIX: &str = "!sts";

/// The loadout collection: name -> ordered gun strings.
///
/// Gun strings are opaque. Their order is insertion order and is meaningful:
/// it is the on-screen order and the word order of the exported command.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Loadouts(BTreeMap<Name, Vec<String>>);

/// Read operations.
impl Loadouts {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, name: &Name) -> bool {
        self.0.contains_key(name)
    }

    /// Iterates loadout names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &Name> {
        self.0.keys()
    }

    /// Returns the guns of the named loadout, in insertion order.
    pub fn guns(&self, name: &Name) -> Option<&[String]> {
        self.0.get(name).map(|guns| guns.as_slice())
    }
}

/// Mutation operations.
impl Loadouts {
    /// Creates the named loadout with an empty gun list. Creating a name
    /// that already exists resets its guns.
    pub fn create_loadout(&mut self, name: Name) {
        self.0.insert(name, Vec::new());
    }

    /// Appends a gun string to the named loadout.
    pub fn add_gun(&mut self, name: &Name, gun: String) -> Result<(), LoadoutError> {
        self.guns_mut(name)?.push(gun);
        Ok(())
    }

    /// Removes the first occurrence of `gun` from the named loadout.
    /// Removing a gun that is not present is a no-op.
    pub fn remove_gun(&mut self, name: &Name, gun: &str) -> Result<(), LoadoutError> {
        let guns = self.guns_mut(name)?;
        if let Some(position) = guns.iter().position(|g| g == gun) {
            guns.remove(position);
        }
        Ok(())
    }

    /// Replaces the gun at `index` in the named loadout.
    pub fn edit_gun(&mut self, name: &Name, index: usize, gun: String) -> Result<(), LoadoutError> {
        let guns = self.guns_mut(name)?;
        let len = guns.len();
        let slot = guns
            .get_mut(index)
            .ok_or(LoadoutError::IndexOutOfRange { index, len })?;
        *slot = gun;
        Ok(())
    }

    fn guns_mut(&mut self, name: &Name) -> Result<&mut Vec<String>, LoadoutError> {
        self.0
            .get_mut(name)
            .ok_or_else(|| LoadoutError::NotFound(name.to_string()))
    }
}

/// Export operations.
impl Loadouts {
    /// Formats the named loadout as the chat command string: the [`COMMAND_PREFIX`]
    /// token followed by the guns, space-joined in order.
    ///
    /// Gun strings are joined verbatim; an empty loadout still yields the
    /// prefix and its trailing space.
    pub fn export(&self, name: &Name) -> Result<String, LoadoutError> {
        let guns = self
            .0
            .get(name)
            .ok_or_else(|| LoadoutError::NotFound(name.to_string()))?;
        Ok(format!("{} {}", COMMAND_PREFIX, guns.join(" ")))
    }
}

/// File-backed loadout store.
///
/// Owns the collection plus the path of its backing JSON file, and rewrites
/// the whole file after each mutation.
pub struct LoadoutStore {
    loadouts: Loadouts,
    path: Option<PathBuf>,
}

/// Open operations.
impl LoadoutStore {
    /// Opens the store backed by the configured loadouts file.
    ///
    /// An absent file yields an empty collection. A file that exists but
    /// fails to parse is an error; callers treat it as fatal at startup
    /// rather than silently discarding the user's data.
    pub fn open(config: &Config) -> Result<Self, StoreError> {
        let path = config.loadouts_path();
        let loadouts = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            serde_json::from_str(&content)?
        } else {
            Loadouts::default()
        };

        Ok(Self {
            loadouts,
            path: Some(path),
        })
    }

    /// Opens a store with no backing file; mutations skip persistence.
    /// A drop-in stand-in for the file-backed store in presentation tests.
    pub fn in_memory() -> Self {
        Self {
            loadouts: Loadouts::default(),
            path: None,
        }
    }

    /// Returns the collection for reading.
    pub fn loadouts(&self) -> &Loadouts {
        &self.loadouts
    }
}

/// Mutation operations. Each updates the collection, then rewrites the
/// backing file.
impl LoadoutStore {
    pub fn create_loadout(&mut self, name: Name) -> Result<(), StoreError> {
        self.loadouts.create_loadout(name);
        self.save()
    }

    pub fn add_gun(&mut self, name: &Name, gun: String) -> Result<(), StoreError> {
        self.loadouts.add_gun(name, gun)?;
        self.save()
    }

    pub fn remove_gun(&mut self, name: &Name, gun: &str) -> Result<(), StoreError> {
        self.loadouts.remove_gun(name, gun)?;
        self.save()
    }

    pub fn edit_gun(&mut self, name: &Name, index: usize, gun: String) -> Result<(), StoreError> {
        self.loadouts.edit_gun(name, index, gun)?;
        self.save()
    }

    /// Serializes the full collection to the backing file, creating a
    /// missing data directory first. Plain overwrite, no atomic rename:
    /// the file is small and single-user.
    pub fn save(&self) -> Result<(), StoreError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_pretty_json()?)?;
        Ok(())
    }

    /// The on-disk format: a UTF-8 JSON object with 4-space indentation.
    fn to_pretty_json(&self) -> Result<Vec<u8>, StoreError> {
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(Vec::new(), formatter);
        self.loadouts.serialize(&mut serializer)?;
        Ok(serializer.into_inner())
    }
}

/// Export operations.
impl LoadoutStore {
    /// Formats the named loadout as the chat command string.
    pub fn export(&self, name: &Name) -> Result<String, StoreError> {
        Ok(self.loadouts.export(name)?)
    }

    /// Exports the named loadout and places the command string on the
    /// system clipboard. Returns the exported string.
    pub fn copy_to_clipboard(&self, name: &Name) -> Result<String, StoreError> {
        let command = self.loadouts.export(name)?;
        clipboard::write_text(&command)?;
        Ok(command)
    }
}
