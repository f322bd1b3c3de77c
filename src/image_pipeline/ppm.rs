//! PPM codec module
//!
//! Reading and writing of the ASCII (P3) and binary (P6) Portable Pixel Map
//! variants, with 8-bit and 16-bit big-endian samples.

mod reader;
mod writer;
mod ppm_reader;
mod ppm_writer;
mod file;
pub mod types;

pub use reader::ImageReader;
pub use writer::ImageWriter;
pub use ppm_reader::PpmReader;
pub use ppm_writer::PpmWriter;
pub use file::{decode, encode};
pub(crate) use file::{read_file, write_file};
pub use types::{AsciiLayout, PpmEncoding, PpmFormat, WriteOptions, MAX_DIMENSION};
