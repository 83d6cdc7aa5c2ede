use std::io::{self, Write};

use tracing::info;

use chatbird_decorator::Decorator;

mod config;
mod transcript;

use config::Config;
use transcript::Transcript;

fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chatbird_cli=info,chatbird_decorator=info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let config = Config::from_env(std::env::args().nth(1))?;
    let transcript = Transcript::load(&config.transcript)?;
    info!(
        path = %config.transcript.display(),
        items = transcript.items.len(),
        members = transcript.channel.member_count,
        "decorating transcript"
    );

    let decorator = Decorator::new(config.decorator);
    let decorated = decorator.decorate(
        &transcript.items,
        &transcript.channel,
        &transcript.current_user_id,
    );

    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, &decorated)?;
    writeln!(out)?;

    info!(rows = decorated.len(), "done");
    Ok(())
}
