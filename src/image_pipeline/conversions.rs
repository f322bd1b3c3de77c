//! Pipeline orchestration module
//!
//! Decode, apply one effect, encode.

mod filter_pipeline;
pub mod types;


pub use filter_pipeline::FilterPipeline;
pub use types::{Backend, FilterConfig};
