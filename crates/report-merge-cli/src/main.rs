use std::process::ExitCode;

use clap::Parser;
use report_merge_cli::cli::{CliArgs, cli_main};
use report_merge_cli::logging::init_logger;
use report_merge_cli::print_err;

fn main() -> ExitCode {
    init_logger();
    let args = CliArgs::parse();

    match cli_main(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            print_err!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
