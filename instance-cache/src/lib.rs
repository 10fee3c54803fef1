//! Typed store/fetch/delete facade over an injected key-value cache.
//!
//! The facade owns no storage. Expiry, eviction and concurrency are the
//! business of whatever [`CacheStore`] it is given.

pub mod domain;
pub mod facade;
pub mod ports;
pub mod snapshot;

pub use domain::InstanceId;
pub use facade::CacheFacade;
pub use ports::CacheStore;
pub use shared::{Error, Result, TtlSecs};
