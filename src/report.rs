use std::fmt;

const SEPARATOR: &str = "---------------";

/// Counts for one input file. One slot is allocated per input before any scan
/// starts, and only the scan bound to that slot fills it in.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub name: String,
    pub lines: u64,
    pub empty_lines: u64,
    pub words: u64,
    pub chars: u64,
}

impl FileReport {
    pub fn new(name: impl Into<String>) -> FileReport {
        FileReport {
            name: name.into(),
            ..Default::default()
        }
    }
}

impl fmt::Display for FileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "File: {}", self.name)?;
        writeln!(f, "{}", SEPARATOR)?;
        writeln!(f, "{:<20}: {}", "Total Lines", self.lines)?;
        writeln!(f, "{:<20}: {}", "Total Empty Lines", self.empty_lines)?;
        writeln!(f, "{:<20}: {}", "Total Words", self.words)?;
        writeln!(f, "{:<20}: {}", "Total Characters", self.chars)
    }
}
