use clap::{ErrorKind, Parser};
use std::path::Path;
use std::{env, process};
use textstat::DriverConfig;

/// Command-line options for textstat.
#[derive(Parser, Debug)]
#[clap(version, about = "Count lines, empty lines, words and characters per file")]
struct CmdOptions {
    #[clap(
        allow_hyphen_values = true,
        help = "Files to scan; reports are printed in this order"
    )]
    files: Vec<String>,
}

fn main() {
    // Diagnostics go to stderr and stay quiet unless RUST_LOG asks for more, so
    // they never mix into the report.
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "warn");
    }
    pretty_env_logger::init();

    let options = match CmdOptions::try_parse() {
        Ok(options) => options,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => err.exit(),
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    };

    let mut config = DriverConfig::default();
    if let Some(program) = env::args_os()
        .next()
        .and_then(|arg0| Path::new(&arg0).file_name().map(|name| name.to_string_lossy().into_owned()))
    {
        config.program = program;
    }
    process::exit(textstat::run(&options.files, &config));
}
