use clap::Parser;
use tracing_subscriber::EnvFilter;

use genotype_crosscheck::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("genotype_crosscheck=debug,info")
    } else {
        EnvFilter::new("genotype_crosscheck=warn")
    };

    // Logs go to stderr so the report on stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    cli::compare::run(cli.compare, cli.format, cli.verbose)
}
