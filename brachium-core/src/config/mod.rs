//! Configuration types
//!
//! Board-agnostic configuration structures. With the `serde` feature they
//! can be stored as postcard binary data.

pub mod hardware;
pub mod machine;
pub mod types;

pub use hardware::*;
pub use machine::*;
pub use types::*;
