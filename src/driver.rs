use std::fs::File;
use std::io::{self, Read, Write};
use std::thread;

use crate::error::{Error, ScanError};
use crate::report::FileReport;
use crate::scanner;

/// Knobs for a run. The file list itself is passed separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverConfig {
    /// Name shown in the usage line.
    pub program: String,
    /// Fewer paths than this is a usage error. Zero behaves like one.
    pub min_files: usize,
}

impl Default for DriverConfig {
    fn default() -> Self {
        DriverConfig {
            program: env!("CARGO_PKG_NAME").to_string(),
            min_files: 1,
        }
    }
}

/// Runs the whole pipeline, printing to stdout/stderr, and returns the exit code.
pub fn run(paths: &[String], config: &DriverConfig) -> i32 {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match try_run(paths, config, &mut out) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("{}", err);
            err.exit_code()
        }
    }
}

/// Opens every path, scans all of them concurrently and writes one block per
/// file to `out` in input order. Nothing is written unless every scan succeeded.
pub fn try_run<W: Write>(paths: &[String], config: &DriverConfig, out: &mut W) -> Result<(), Error> {
    let min_files = config.min_files.max(1);
    if paths.len() < min_files {
        return Err(Error::Usage {
            program: config.program.clone(),
            min_files,
        });
    }

    let files = open_all(paths)?;
    log::debug!("Opened {} file(s)", files.len());

    let reports = scan_all(files)?;
    render(&reports, out).map_err(Error::Output)
}

/// Opens paths in order. The first failure stops the run before any scan starts.
pub fn open_all(paths: &[String]) -> Result<Vec<(String, File)>, Error> {
    paths
        .iter()
        .map(|path| match File::open(path) {
            Ok(file) => Ok((path.clone(), file)),
            Err(source) => {
                log::debug!("Could not open {}: {}", path, source);
                Err(Error::Open {
                    path: path.clone(),
                    source,
                })
            }
        })
        .collect()
}

/// Scans every input on its own thread and returns the reports in input order.
///
/// Each thread writes only to its own pre-allocated slot. Errors go through a
/// channel with room for one per input, so reporting never blocks; when several
/// scans fail, whichever error was sent first is returned. Failing scans do not
/// cancel their siblings.
pub fn scan_all<R>(mut inputs: Vec<(String, R)>) -> Result<Vec<FileReport>, ScanError>
where
    R: Read + Send,
{
    // nothing to overlap with a single file
    if inputs.len() == 1 {
        let (name, input) = inputs.remove(0);
        return Ok(vec![scanner::scan(input, &name)?]);
    }

    let mut reports: Vec<FileReport> = inputs.iter().map(|(name, _)| FileReport::new(name.as_str())).collect();
    let (err_sender, err_receiver) = crossbeam_channel::bounded::<ScanError>(inputs.len());

    thread::scope(|scope| {
        for (slot, (name, input)) in reports.iter_mut().zip(inputs) {
            let err_sender = err_sender.clone();
            log::debug!("Dispatching scan of {}", name);
            scope.spawn(move || match scanner::scan(input, &name) {
                Ok(report) => {
                    log::debug!("{}: {} lines, {} words", name, report.lines, report.words);
                    *slot = report;
                }
                Err(err) => {
                    log::debug!("{}: scan failed: {}", name, err);
                    // one slot per input
                    let _ = err_sender.send(err);
                }
            });
        }
    });
    drop(err_sender);

    match err_receiver.try_recv() {
        Ok(err) => {
            log::debug!("First failing file in the batch: {}", err.file());
            Err(err)
        }
        Err(_) => Ok(reports),
    }
}

/// Writes the report blocks, separated by a blank line.
pub fn render<W: Write>(reports: &[FileReport], out: &mut W) -> io::Result<()> {
    for (i, report) in reports.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        write!(out, "{}", report)?;
    }
    out.flush()
}
