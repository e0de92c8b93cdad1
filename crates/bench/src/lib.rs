#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod case;
pub use case::{DEFAULT_BLOCK_SIZE, DEFAULT_LINES, RAW_SIZES, StoreCase};

mod synth;
pub use synth::{record_at, synth_buffer};

mod error;
pub use error::{BenchError, ValidationError};

mod report;
pub use report::{
    JsonRawCase, JsonReport, JsonStoreCase, RawCaseReport, StoreCaseReport, TimingSample,
};

mod runner;
pub use runner::{BenchmarkRunner, default_registry};
