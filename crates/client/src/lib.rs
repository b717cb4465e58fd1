//! Client side of the notes system.
//!
//! [`api::NotesApi`] wraps the four HTTP endpoints; [`page::NotesPage`] keeps
//! the local note list, form and editing selection in sync with the server;
//! [`render`] turns a page into text for the `notes` CLI.

pub mod api;
pub mod config;
pub mod error;
pub mod page;
pub mod render;
