pub mod writer;

pub use writer::{DEFAULT_OUTPUT, write_report, write_rows};
