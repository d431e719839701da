use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng, thread_rng};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use sha1fold::differential::{self, DEFAULT_TRACE_ROUNDS, DISTURBANCE_VECTOR};
use sha1fold::input::{self, ResolveOptions, Source};
use sha1fold::pad::block_count;
use sha1fold::present::{self, Format};
use sha1fold::schedule::BLOCK_WORDS;
use sha1fold::word::Word;

#[derive(Debug, Parser)]
#[command(name = "sha1fold", version, about = "Compute SHA-1 digests and trace compression rounds")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Hash a file, a literal string, standard input (`-`), or the default input
    Hash(HashArgs),
    /// Run two related blocks through the compression rounds side by side
    Trace(TraceArgs),
}

#[derive(Debug, Args)]
struct HashArgs {
    /// File path or literal text; omitted hashes "hi"
    #[arg(value_name = "INPUT")]
    input: Option<String>,

    /// Treat INPUT as text even if a file with that name exists
    #[arg(long)]
    literal: bool,

    /// Append a newline to literal text before hashing
    #[arg(long)]
    newline: bool,

    /// Output encoding of the digest
    #[arg(short, long, value_enum, default_value_t = Format::Hex)]
    format: Format,

    /// Print only the digest, without the source label
    #[arg(long)]
    bare: bool,
}

#[derive(Debug, Args)]
struct TraceArgs {
    /// First block as 128 hex digits; random when omitted
    #[arg(long, value_name = "HEX")]
    block: Option<String>,

    /// XOR mask producing the second block; defaults to the disturbance vector
    #[arg(long, value_name = "HEX")]
    mask: Option<String>,

    /// Seed for the random block
    #[arg(long)]
    seed: Option<u64>,

    /// Number of rounds to trace (1-80)
    #[arg(short, long, default_value_t = DEFAULT_TRACE_ROUNDS)]
    rounds: usize,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    match cli.command {
        Command::Hash(args) => run_hash(args),
        Command::Trace(args) => run_trace(args),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run_hash(args: HashArgs) -> Result<()> {
    let source = Source::classify(args.input.as_deref(), args.literal);
    let options = ResolveOptions {
        literal_newline: args.newline,
    };
    let message = input::resolve(&source, options)
        .with_context(|| format!("Failed to resolve input {}", source.label()))?;

    let started = Instant::now();
    let digest = sha1fold::digest(&message);
    let elapsed = started.elapsed();
    info!(
        "Hashed {} bytes ({} blocks) in {}",
        message.len(),
        block_count(message.len()),
        humantime::format_duration(elapsed)
    );

    let label = source.label();
    let label = (!args.bare).then_some(label.as_str());
    println!("{}", present::line(&digest, args.format, label));
    Ok(())
}

fn run_trace(args: TraceArgs) -> Result<()> {
    let left = match &args.block {
        Some(hex) => differential::parse_block_words(hex).context("Invalid --block")?,
        None => random_block(args.seed),
    };
    let mask = match &args.mask {
        Some(hex) => differential::parse_block_words(hex).context("Invalid --mask")?,
        None => DISTURBANCE_VECTOR,
    };
    let right = differential::perturb(&left, &mask);
    debug!("Left block {}", words_hex(&left));
    debug!("Right block {}", words_hex(&right));

    let started = Instant::now();
    let traced = differential::trace(&left, &right, args.rounds)?;
    info!(
        "Traced {} rounds in {}",
        traced.rounds.len(),
        humantime::format_duration(started.elapsed())
    );

    for diff in &traced.rounds {
        println!("{}", present::round_report(diff));
    }
    println!("{}", present::trace_summary(&traced));
    Ok(())
}

fn random_block(seed: Option<u64>) -> [Word; BLOCK_WORDS] {
    let mut words = [0; BLOCK_WORDS];
    match seed {
        Some(seed) => {
            info!("Using random block from seed {seed}");
            StdRng::seed_from_u64(seed).fill(&mut words[..]);
        }
        None => {
            info!("Using random block");
            thread_rng().fill(&mut words[..]);
        }
    }
    words
}

fn words_hex(words: &[Word; BLOCK_WORDS]) -> String {
    words.iter().map(|w| format!("{w:08x}")).collect::<Vec<_>>().join(" ")
}
