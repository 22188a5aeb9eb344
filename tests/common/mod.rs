#![allow(dead_code)]

use clap::Parser;
use prereqs::cli::CliArgs;

/// Run the CLI in-process with `args` (without the program name) and return
/// everything it wrote to stdout.
pub fn run_cli(args: &[&str]) -> anyhow::Result<String> {
    prereqs_test_utils::init_tracing();

    let argv = std::iter::once("prereqs").chain(args.iter().copied());
    let args = CliArgs::try_parse_from(argv)?;

    let mut out = Vec::new();
    prereqs::run_with_writer(args, &mut out)?;
    Ok(String::from_utf8(out)?)
}
