//! Index structures.
//!
//! One index lives here today: the [`BPlusTree`] used by tables to
//! accelerate lookups on their first column.

pub mod btree;

pub use btree::BPlusTree;
