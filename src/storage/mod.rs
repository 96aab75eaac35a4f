//! Persistent storage: the binary snapshot format.
//!
//! This module handles serialization of a whole [`crate::database::Database`]:
//! - [`codec`] - Little-endian primitive readers and writers
//! - [`save`] / [`load`] - Whole-file snapshot dump and restore

pub mod codec;
mod file;

pub use file::{load, save};
