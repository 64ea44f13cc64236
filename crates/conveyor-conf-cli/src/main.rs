//! Command-line front end: snapshot JSON in, config document out.

use anyhow::Context;
use clap::Parser;
use conveyor_conf::{generate, snapshot};
use std::io::Read;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "conveyor-conf", version, about = "Generate packaging config from a project snapshot")]
struct Args {
    /// Project snapshot JSON. Reads stdin when omitted or "-".
    snapshot: Option<PathBuf>,

    /// Write the generated config here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let text = read_snapshot(args.snapshot.as_deref())?;
    let snap = snapshot::from_json(&text)?;
    let config = generate(&snap)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &config)
                .with_context(|| format!("failed to write {}", path.display()))?;
            debug!(path = %path.display(), "wrote generated config");
        }
        None => print!("{config}"),
    }
    Ok(())
}

fn read_snapshot(path: Option<&std::path::Path>) -> anyhow::Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read snapshot from stdin")?;
            Ok(text)
        }
    }
}
