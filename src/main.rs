use clap::Parser;
use itertools::Itertools;
use std::io::Write;

use httpstatus::StatusClass;

/// Look up registered HTTP status codes by number or name.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// codes (`404`) or symbolic names (`NotFound`); list the whole table when empty
    query: Vec<String>,
    /// only list codes of this class (`4xx`, `client_error`, ...)
    #[arg(short, long)]
    class: Option<StatusClass>,
    /// print JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> eyre::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("RUST_LOG", "info"))
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();

    let entries = if cli.query.is_empty() {
        httpstatus::list(cli.class)
    } else {
        match httpstatus::lookup(&cli.query) {
            Ok(entries) => entries,
            Err(errors) => eyre::bail!("{}", errors.iter().join(", ")),
        }
    };

    let mut out = std::io::stdout().lock();

    if cli.json {
        serde_json::to_writer_pretty(&mut out, &entries)?;
        writeln!(out)?;
        return Ok(());
    }

    if !cli.query.is_empty() {
        for entry in &entries {
            writeln!(out, "{entry}")?;
        }
        return Ok(());
    }

    for (class, entries) in &entries.iter().chunk_by(|e| e.class) {
        writeln!(out, "{class}:")?;
        for entry in entries {
            writeln!(out, "  {entry}")?;
        }
    }
    Ok(())
}
