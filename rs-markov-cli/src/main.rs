use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use log::debug;

use rs_markov_core::io::load_corpus;
use rs_markov_core::model::{FallbackSeed, Query, Strategy, ThreadSource};

/// Generates text from a word-level Markov chain, or lists the most
/// probable words following a seed.
///
/// With a mode (`all` or `one`) the tool generates `k` words starting from
/// the seed. Without a mode it prints the `k` most probable words following
/// the seed, one per line.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Corpus text file
    filename: PathBuf,

    /// Word to start from (or to look up)
    seed: String,

    /// Number of words to generate (or to list)
    #[arg(allow_negative_numbers = true)]
    k: i64,

    /// `all` for a weighted random walk, `one` to always follow the most probable word
    mode: Option<Strategy>,

    /// Repeat the seed exactly as given when the walk reaches a dead end
    #[arg(long)]
    keep_seed_case: bool,
}

impl Cli {
    /// Maps the positional arguments to a query.
    fn query(&self) -> Query {
        match self.mode {
            Some(strategy) => Query::Generate {
                seed: self.seed.clone(),
                k: self.k,
                strategy,
                fallback: if self.keep_seed_case { FallbackSeed::Original } else { FallbackSeed::Folded },
            },
            None => Query::top_k(&self.seed, self.k),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr, stdout only carries results
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let query = cli.query();
    debug!("Running {:?} on {}", query, cli.filename.display());

    // The corpus is fully read (and the file closed) before any query work
    let lines = load_corpus(&cli.filename);
    let output = query.run(&lines, &mut ThreadSource::default());

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for line in output {
        writeln!(out, "{}", line)?;
    }
    out.flush()?;

    Ok(())
}
