pub mod btree;

pub use btree::{BPlusTree, BPlusTreeError, BPlusTreeResult};
