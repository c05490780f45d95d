#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod capability;
mod error;
mod frame;
mod types;
mod value;

pub use capability::{CapabilityRegistry, TableCapability};
pub use error::{TableError, TableResult};
pub use frame::{FRAME_TYPE, Frame, FrameCapability, SERIES_TYPE, Series};
pub use types::SemanticType;
pub use value::Value;
