mod logging;
mod shell;

use docshell::kernel::services::adapters::load_settings;
use std::path::Path;

fn main() {
    let logging = logging::init();
    if let Some(guard) = &logging {
        eprintln!("logs: {}", guard.log_dir().display());
    }

    let settings = load_settings();
    let mut shell = shell::Shell::new(settings.documents);
    for arg in std::env::args().skip(1) {
        shell.open(Path::new(&arg));
    }

    if let Err(e) = shell.run() {
        tracing::error!(error = %e, "shell terminated");
        eprintln!("docshell: {}", e);
        drop(logging);
        std::process::exit(1);
    }
}
