//! Per-file line, empty line, word and character counts.

pub mod driver;
pub mod error;
pub mod report;
pub mod scanner;

pub use driver::{run, scan_all, try_run, DriverConfig};
pub use error::{Error, ScanError};
pub use report::FileReport;
pub use scanner::scan;
