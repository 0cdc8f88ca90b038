use anyhow::Result;
use clap::Parser;
use log::info;

use textsift::cli;

fn main() -> Result<()> {
    let args = cli::Args::parse();

    // Quiet keeps the default error-only filter; RUST_LOG still wins if set
    if std::env::var_os("RUST_LOG").is_none() && !args.quiet {
        let level = if args.verbose { "debug" } else { "info" };
        std::env::set_var("RUST_LOG", level);
    }
    env_logger::init();

    info!("Starting textsift v{}", env!("CARGO_PKG_VERSION"));

    cli::run(args)
}
