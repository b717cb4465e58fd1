//! Domain types shared by the notes service, its storage backends and the
//! client.

pub mod error;
pub mod memory;
pub mod note;
pub mod store;
pub mod types;
