//! Sentinel Session — authentication state, durable credential
//! storage, and typed UI-selection state.
//!
//! All session changes flow through [`SessionStore::login`],
//! [`SessionStore::logout`] and [`SessionStore::restore`]; consumers
//! only read derived values. The store is generic over its storage
//! seam so tests run against an in-memory backend.

pub mod credentials;
pub mod error;
pub mod selection;
pub mod store;

pub use credentials::{CredentialStore, FileCredentialStore, MemoryCredentialStore};
pub use error::StoreError;
pub use selection::{Preferences, SelectionState, Theme};
pub use store::SessionStore;
