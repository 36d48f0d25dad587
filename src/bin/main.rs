use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "cinedex")]
#[command(about = "Console movie catalogue with ratings and recommendations", long_about = None)]
struct Args {
    /// YAML config file. Without one the built-in defaults apply.
    #[arg(short, long)]
    config: Option<String>,
    /// Database file, overriding the configured path.
    #[arg(short, long)]
    database: Option<String>,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cinedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let options = cinedex::Options {
        config: args.config,
        database: args.database,
    };

    if let Err(e) = cinedex::run(options) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
