//! Storage layer for the flat-file user and task stores.

mod file;
mod traits;

pub use file::FileStorage;
pub use traits::{Storage, StoreKind};
