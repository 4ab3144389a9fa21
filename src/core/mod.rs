pub mod config;
pub mod ledger;
pub mod registry;
pub mod strength;

pub use registry::{RegistryError, UserRegistry};
