// File: crates/burndown-cli/src/main.rs
// Summary: `burndown` binary; renders one release's burndown chart to PNG.

use anyhow::Result;
use burndown_cli::{run, Args, Outcome};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(&args)? {
        Outcome::Written(path) => println!("Wrote {}", path.display()),
        Outcome::Placeholder(message) => println!("{message}"),
    }
    Ok(())
}
