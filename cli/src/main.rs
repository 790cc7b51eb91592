use clap::Parser;
use dupdetect::args::Args;
use dupdetect::{run, ExitStatus};
use std::process::ExitCode;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> ExitCode {
    // stdout carries the report, logs go to stderr
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(std::io::stderr).init();
    let args = Args::parse();

    let stdout = std::io::stdout();
    match run(&args, &mut stdout.lock()) {
        Ok(status) => ExitCode::from(status.code()),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(ExitStatus::BadInput.code())
        }
    }
}
