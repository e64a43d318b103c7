use std::env;
use std::process::ExitCode;

use hotseat_chess::session::logger::{init_logging, verbosity_flag};
use hotseat_chess::session::run_session_loop;

fn main() -> ExitCode {
    let mut verbosity = 0u8;
    for arg in env::args().skip(1) {
        match verbosity_flag(&arg) {
            Some(count) => verbosity = verbosity.saturating_add(count),
            None => {
                eprintln!("usage: hotseat_chess [-v|-vv|--verbose]...");
                return ExitCode::from(2);
            }
        }
    }

    if let Err(e) = init_logging(verbosity) {
        eprintln!("warning: {e}");
    }

    match run_session_loop() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
