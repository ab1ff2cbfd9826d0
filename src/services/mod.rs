// Service exports
pub mod fixtures;
pub mod store;

pub use store::{DataStore, StoreError};
