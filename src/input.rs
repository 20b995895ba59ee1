//! Record catalog input

mod reader;

pub use reader::RecordReader;
