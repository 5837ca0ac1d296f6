//! Sentinel Console core — domain models, error taxonomy, the
//! data-source contract, and the pure client-side engines (filtering,
//! route resolution, fetch sequencing).
//!
//! This crate performs no I/O. Backend implementations of
//! [`source::DataSource`] live in `sentinel-client`; session state
//! lives in `sentinel-session`.

pub mod error;
pub mod fetch;
pub mod filter;
pub mod models;
pub mod route;
pub mod source;

pub use error::{SentinelError, SentinelResult};
pub use source::DataSource;
