//! Interactive shell entry point.

use std::io;

use brinedb::shell::Shell;

fn main() {
    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut shell = Shell::new();
    if let Err(err) = shell.run(stdin.lock(), stdout.lock()) {
        eprintln!("fatal: {err}");
        std::process::exit(1);
    }
}
