use crate::cli::{Cli, LevelFilter};
use crate::runner::Invocation;
use anyhow::{Context, Result};
use clap::Parser;
use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};
use std::io;
use std::process::ExitCode;

mod cli;
mod runner;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args: Cli = Cli::parse();

    // Results go to stdout, so keep all logging on stderr.
    CombinedLogger::init(vec![TermLogger::new(
        match args.log_level {
            LevelFilter::Off => log::LevelFilter::Off,
            LevelFilter::Error => log::LevelFilter::Error,
            LevelFilter::Warn => log::LevelFilter::Warn,
            LevelFilter::Info => log::LevelFilter::Info,
            LevelFilter::Debug => log::LevelFilter::Debug,
            LevelFilter::Trace => log::LevelFilter::Trace,
        },
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )])
    .context("Could not configure the logger")?;

    let program = std::env::args()
        .next()
        .unwrap_or_else(|| String::from("usbnetpower"));
    let invocation = Invocation::from_args(&args.command);

    let outcome = runner::run(
        invocation,
        &program,
        usbnetpower_usb::open_device,
        &mut io::stdout(),
        &mut io::stderr(),
    )
    .await
    .context("Unable to write command output")?;

    Ok(outcome.into())
}
