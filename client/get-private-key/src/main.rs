use clap::Parser;
use eyre::WrapErr;
use private_key::KeyResolver;
use std::{
    fs,
    io::{self, IsTerminal, Write},
    path::PathBuf,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;


#[derive(Parser, Debug)]
#[command(term_width = 0)]
#[command(name = "get-private-key")]
#[command(version = option_env!("BUILD_VERSION").unwrap_or(env!("CARGO_PKG_VERSION")))]
#[command(about = "Resolve the private key of a GitHub App", long_about = None)]
struct App {
    /// Path to the private key file
    #[arg(long, value_name = "PATH")]
    private_key: Option<PathBuf>,
    /// Write the key to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

fn main() -> eyre::Result<()> {
    let app = App::parse();

    // Logs go to stderr, stdout carries the key.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();

    let resolved = KeyResolver::new().resolve(app.private_key.as_deref())?;
    info!(
        source = %resolved.source,
        bytes = resolved.material.len(),
        "resolved private key"
    );
    if resolved.material.is_empty() {
        warn!(source = %resolved.source, "private key is empty");
    }

    match app.output {
        Some(path) => {
            fs::write(&path, resolved.material.as_bytes())
                .wrap_err_with(|| format!("Unable to write private key to {}", path.display()))?;
            info!(path = %path.display(), "private key written");
        }
        None => {
            let mut handle = io::stdout().lock();
            handle.write_all(resolved.material.as_bytes())?;
            handle.flush()?;
        }
    }

    Ok(())
}
