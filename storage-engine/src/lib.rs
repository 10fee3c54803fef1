//! Cache store adapters for the instance cache facade.

mod moka_cache;

pub use moka_cache::MokaStore;
