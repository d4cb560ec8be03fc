use std::io;

/// Failure while scanning a single file.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Error: {file:?} is not a valid UTF-8 text file")]
    Encoding { file: String },

    #[error("read {file}: {source}")]
    Io {
        file: String,
        #[source]
        source: io::Error,
    },
}

impl ScanError {
    pub fn file(&self) -> &str {
        match self {
            ScanError::Encoding { file } | ScanError::Io { file, .. } => file,
        }
    }
}

/// Anything that ends a run with a non-zero exit code.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Usage: {} {}", .program, file_args(.min_files))]
    Usage { program: String, min_files: usize },

    #[error("open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error("write report: {0}")]
    Output(#[source] io::Error),
}

fn file_args(min_files: &usize) -> String {
    let mut args = "<file> ".repeat(min_files.saturating_sub(1));
    args.push_str("<file> [file...]");
    args
}

impl Error {
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Usage { .. } | Error::Open { .. } | Error::Scan(_) | Error::Output(_) => 1,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_encoding_message_names_file() {
        let err = ScanError::Encoding {
            file: "bin.dat".to_string(),
        };
        assert_eq!(err.to_string(), "Error: \"bin.dat\" is not a valid UTF-8 text file");
        assert_eq!(err.file(), "bin.dat");
    }

    #[test]
    fn test_open_message() {
        let err = Error::Open {
            path: "missing.txt".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };
        assert_eq!(err.to_string(), "open missing.txt: No such file or directory");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_scan_error_is_transparent() {
        let err: Error = ScanError::Encoding {
            file: "a".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Error: \"a\" is not a valid UTF-8 text file");
        assert_eq!(err.exit_code(), 1);
    }
}
