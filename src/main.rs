use a11y_help::cli::{self, Cli, LogLevelArg};
use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize unified logging: all log::info!() etc. go to the debug log file.
    // When RUST_LOG is set, also mirrors to stderr.
    a11y_help::debug::init_log_bridge(cli.log_level.map(LogLevelArg::to_level_filter));

    log::info!("Starting a11y-help");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = cli::run(&cli, &mut out) {
        log::error!("Command failed: {e:#}");
        eprintln!("a11y-help: error: {e:#}");
        std::process::exit(1);
    }

    log::logger().flush();
    Ok(())
}
