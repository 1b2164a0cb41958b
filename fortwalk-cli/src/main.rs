//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use fortwalk_cli::CliError;

#[expect(
    clippy::print_stderr,
    reason = "the binary reports failures on stderr"
)]
fn main() {
    if let Err(err) = fortwalk_cli::run() {
        if let CliError::ArgumentParsing(clap_err) = &err {
            clap_err.exit();
        }
        eprintln!("fortwalk: {err}");
        std::process::exit(1);
    }
}
