use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cachesim::config::{DEFAULT_LINE_SIZE, DEFAULT_NUM_LINES, DEFAULT_RAM_SIZE};
use cachesim::{Geometry, Session};

/// Replay a command file against a direct-mapped cache backed by RAM.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Command file: `R addr`, `W addr value`, DISPLAYCACHE, DISPLAYCACHEDELAY ms, DISPLAYRAM, WAIT
    #[arg(default_value = "commands.txt")]
    commands: PathBuf,

    /// Number of RAM cells
    #[arg(long, env = "CACHESIM_RAM_SIZE", default_value_t = DEFAULT_RAM_SIZE)]
    ram_size: usize,

    /// Number of cache lines
    #[arg(long, env = "CACHESIM_LINES", default_value_t = DEFAULT_NUM_LINES)]
    lines: usize,

    /// Slots per cache line
    #[arg(long, env = "CACHESIM_LINE_SIZE", default_value_t = DEFAULT_LINE_SIZE)]
    line_size: usize,

    /// JSON file with ram_size / num_lines / line_size, overrides the flags above
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the final cache, RAM and counters as JSON
    #[arg(long)]
    json: bool,
}

impl Args {
    fn geometry(&self) -> anyhow::Result<Geometry> {
        match &self.config {
            Some(path) => Geometry::load(path)
                .with_context(|| format!("could not load config {:?}", path)),
            None => Ok(Geometry {
                ram_size: self.ram_size,
                num_lines: self.lines,
                line_size: self.line_size,
            }),
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let geometry = args.geometry()?;
    let mut session = Session::new(geometry).context("bad cache geometry")?;

    let f = File::open(&args.commands)
        .with_context(|| format!("failed to open commands file {:?}", args.commands))?;
    tracing::info!(?geometry, file = ?args.commands, "starting session");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut err = io::stderr();

    let start = Instant::now();
    session.run(BufReader::new(f), &mut stdin.lock(), &mut out, &mut err)?;
    let elapsed = start.elapsed();

    writeln!(out, "Elapsed time: {} seconds", elapsed.as_secs_f64())?;
    if args.json {
        serde_json::to_writer_pretty(&mut out, &session.dump())?;
        writeln!(out)?;
    }
    Ok(())
}
