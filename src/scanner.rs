use std::io::{BufRead, BufReader, Read};
use std::str;

use crate::error::ScanError;
use crate::report::FileReport;

/// Counts lines, empty lines, words and characters of `input` in one pass.
///
/// A line ends at `\n` (a `\r` right before it is part of the terminator); a
/// trailing segment without a terminator is still a line. Characters are
/// Unicode code points, plus one per line for the stripped terminator.
///
/// Every line must be valid UTF-8. The first one that isn't aborts the scan and
/// the counts gathered so far are dropped. The reader is consumed to the end on
/// success.
pub fn scan<R: Read>(input: R, name: &str) -> Result<FileReport, ScanError> {
    let mut reader = BufReader::new(input);
    let mut report = FileReport::new(name);
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let n = reader.read_until(b'\n', &mut buf).map_err(|source| ScanError::Io {
            file: name.to_string(),
            source,
        })?;
        if n == 0 {
            break;
        }
        let line = str::from_utf8(strip_terminator(&buf)).map_err(|_| ScanError::Encoding {
            file: name.to_string(),
        })?;

        report.lines += 1;
        if line.trim().is_empty() {
            report.empty_lines += 1;
        }
        report.words += line.split_whitespace().count() as u64;
        report.chars += line.chars().count() as u64 + 1;
    }

    log::trace!("{}: {} lines scanned", name, report.lines);
    Ok(report)
}

fn strip_terminator(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
