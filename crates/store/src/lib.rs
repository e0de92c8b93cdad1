#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod error;
pub use error::StoreError;

mod format;
pub use format::StoreHeader;

mod writer;
pub use writer::{DEFAULT_BLOCK_SIZE, RecordWriter, StoreConfig};

mod reader;
pub use reader::RecordReader;
