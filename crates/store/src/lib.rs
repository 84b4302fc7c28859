//! Client for the content-addressed object store.
//!
//! The store consumes a byte stream and returns a content-derived
//! identifier; the bytes are later retrievable through a public gateway at
//! `<gateway-base>/<content-id>`. Either a complete identifier comes back
//! or the upload failed wholesale; there is no partial-result contract.

pub mod errors;
pub mod http;
pub mod memory;
pub mod store;

pub use errors::{Result, StoreError};
pub use http::HttpObjectStore;
pub use memory::MemoryObjectStore;
pub use store::ObjectStore;
