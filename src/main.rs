use circ_reconcile::cli;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("circ_reconcile=debug,info")
    } else {
        EnvFilter::new("circ_reconcile=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Rotate(args) => {
            cli::rotate::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Statistics(args) => {
            cli::statistics::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
