use clap::Parser;
use folio_core::config::Config;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio", about = "Portfolio section search in the terminal")]
struct Cli {
    /// Write debug logs to /tmp/folio-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,

    /// Config file to use instead of ~/.config/folio/config.toml.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the suggestion rows for a query as JSON lines and exit.
    #[arg(long, value_name = "Q")]
    query: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/folio-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("folio debug log started — tail -f /tmp/folio-debug.log");
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "config unreadable, using defaults");
            Config::defaults()
        }),
    };

    if let Some(query) = cli.query {
        folio::headless::write_suggestions(&config, &query, std::io::stdout().lock())?;
        return Ok(());
    }

    folio_tui::run(config)
}
