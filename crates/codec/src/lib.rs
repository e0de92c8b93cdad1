#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod codec;
pub use codec::{Codec, CodecConfig, CodecError};

mod registry;
pub use registry::{CodecFactory, CodecRegistry, ResolveError};

mod noop;
pub use noop::NoopCodec;
