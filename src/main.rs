use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("subseries_rs=debug,info")
    } else {
        EnvFilter::new("subseries_rs=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Bench(args) => cli::run_bench(args, cli.format)?,
        cli::Commands::Search(args) => cli::run_search(args, cli.format)?,
    }

    Ok(())
}
