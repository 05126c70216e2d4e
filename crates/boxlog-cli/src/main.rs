use boxlog_cli::{Cli, run};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    #[cfg(unix)]
    restore_default_sigpipe();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

/// `boxlog dump big.json | head` should end quietly once the reader closes the pipe,
/// not panic inside `println!`.
#[cfg(unix)]
fn restore_default_sigpipe() {
    // SAFETY: called once at startup before any other thread exists.
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}
