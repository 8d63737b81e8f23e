// Service exports
pub mod store;

pub use store::{LoadError, ProviderStore};
