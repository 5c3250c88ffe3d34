pub(crate) mod clipboard;
pub mod store;
pub mod types;

pub use clipboard::ClipboardError;
