use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};
use typed_option::O;

mod people;
mod report;

use people::Directory;
use report::Format;

/// Looks up people by name and prints their middle names
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Names to look up
    #[arg(required = true)]
    names: Vec<String>,

    /// JSON file with an array of `{ "name", "middleName" }` records
    #[arg(short, long)]
    people: Option<PathBuf>,

    /// Middle name to report when a person has none or is unknown
    #[arg(short, long)]
    default: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: Format,

    /// Log filter, overrides RUST_LOG
    #[arg(long)]
    log_level: Option<String>,
}

fn main() {
    let args = Args::parse();
    init_tracing(O::from(args.log_level.as_deref()));

    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing(log_level: O<&str>) {
    let filter = log_level.map(EnvFilter::new).get_or_else_with(|| {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    });

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(filter),
        )
        .init();
}

fn run(args: Args) -> Result<()> {
    let directory = match O::from(args.people) {
        O::Some(path) => Directory::load(&path)?,
        O::None => Directory::builtin(),
    };
    if directory.is_empty() {
        warn!("people directory is empty, every lookup will miss");
    }
    debug!(people = directory.len(), "directory ready");

    let default = O::from(args.default.as_deref());
    let results: Vec<_> = args
        .names
        .iter()
        .map(|name| directory.resolve(name, default))
        .collect();

    println!("{}", report::render(&results, args.format)?);
    Ok(())
}
