// colentropy/src/main.rs
//! colentropy entry point.
//!
//! Every failure is propagated up to here and turned into a message on stderr
//! plus exit code 1.

use clap::Parser;
use clap::error::ErrorKind;
use is_terminal::IsTerminal;
use std::io;
use std::process::ExitCode;

use colentropy::cli::Cli;
use colentropy::commands::entropy::{EntropyOptions, resolve_config, run_entropy};
use colentropy::logger;
use colentropy::ui::{print_error_message, print_success_message};

fn main() -> ExitCode {
    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    if args.quiet {
        logger::init_logger(Some(log::LevelFilter::Off));
    } else if args.debug {
        logger::init_logger(Some(log::LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }
    log::info!("colentropy started. Version: {}", env!("CARGO_PKG_VERSION"));

    let outcome = resolve_config(args.config.as_ref(), |config| args.apply_overrides(config))
        .and_then(|config| {
            run_entropy(&EntropyOptions {
                input: args.input.clone(),
                output: args.output.clone(),
                config,
            })
        });

    match outcome {
        Ok(path) => {
            let stdout = io::stdout();
            let supports_color = stdout.is_terminal();
            let _ = print_success_message(
                &mut stdout.lock(),
                &format!("Entropy values saved to {}", path.display()),
                supports_color,
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            let stderr = io::stderr();
            let supports_color = stderr.is_terminal();
            let _ = print_error_message(&mut stderr.lock(), &format!("{:#}", err), supports_color);
            ExitCode::FAILURE
        }
    }
}
