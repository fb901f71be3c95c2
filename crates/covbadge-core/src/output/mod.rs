//! Output handling

pub mod writer;

pub use writer::OutputWriter;
