use batch_rewrite::cli::{self, Cli};
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "batch_rewrite=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Cli::parse();
    if let Err(err) = cli::run(&args) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
