// mediascan-cli/src/main.rs
//
// Entry point of the `mediascan` binary.
//
// Responsibilities:
// - Parsing command-line arguments.
// - Installing the run log under <root>/logs.
// - Invoking the mediascan-core pipeline.
// - Reporting the outcome on the terminal and in the log.
// - Exit code 0 on success, 1 on any failure.

use clap::Parser;
use mediascan_cli::output::{print_error, print_success};
use mediascan_cli::{Cli, build_config, logging, run_pipeline};
use std::process::ExitCode;

const EXIT_FAILURE: u8 = 1;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are not failures.
            let code = if e.use_stderr() { EXIT_FAILURE } else { 0 };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            print_error(&format!("Invalid root directory '{}': {}", cli.root.display(), e));
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    if let Err(e) = logging::init_run_log(&config, cli.verbose) {
        print_error(&format!("{e:#}"));
        return ExitCode::from(EXIT_FAILURE);
    }

    match run_pipeline(&config, &cli.ffprobe) {
        Ok(summary) => {
            log::debug!(
                "{} video(s) reported in {}",
                summary.results.len(),
                summary.report_path.display()
            );
            print_success("Media automation completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            print_error(&e.to_string());
            ExitCode::from(EXIT_FAILURE)
        }
    }
}
