use clap::error::ErrorKind;
use clap::Parser;

use xit::cli::{self, exit_codes, Cli};

fn main() {
    // handle broken pipe gracefully (e.g., when piping to `head` or `jq` that exits early)
    reset_sigpipe();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // help and --version are successful; usage errors exit 1, not clap's 2
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => exit_codes::SUCCESS,
                _ => exit_codes::ERROR,
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    std::process::exit(cli::run(cli));
}

/// reset SIGPIPE to default behavior (terminate process) instead of panicking
/// this is the standard Unix behavior for CLI tools
fn reset_sigpipe() {
    #[cfg(unix)]
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}
