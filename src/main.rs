use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use msa_trim::batch;
use msa_trim::config::TrimConfig;
use msa_trim::io::fasta;
use msa_trim::trim;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[derive(Parser, Debug)]
#[command(name = "msa-trim", author, version, about = "Trim a multiple sequence alignment to a reference guide", arg_required_else_help = true)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Mask target flanks to the guide's span and depad the alignment
    Trim {
        /// Aligned FASTA file(s)
        #[arg(required = true)]
        inputs: Vec<String>,
        /// TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Trim guide (reference amplicon) identifier
        #[arg(short, long)]
        guide: Option<String>,
        /// Record to mask outside the guide's span (repeatable)
        #[arg(long = "target")]
        targets: Vec<String>,
        /// Gap character
        #[arg(long = "gap")]
        gap_char: Option<char>,
        /// Minimum number of sequences required before and after trimming
        #[arg(long = "min-seqs")]
        min_sequences: Option<usize>,
        /// Clean record and target identifiers before trimming
        #[arg(long)]
        sanitize_ids: bool,
        /// Output FASTA line width (0 = unwrapped)
        #[arg(long)]
        line_width: Option<usize>,
        /// Output FASTA path (single input only)
        #[arg(short, long)]
        out: Option<String>,
        /// Directory for `<name>.trimmed.fa` outputs (default: next to each input)
        #[arg(long)]
        out_dir: Option<PathBuf>,
        /// Write a JSON trim report
        #[arg(long)]
        report: Option<String>,
        #[arg(short = 't', long = "threads", default_value_t = 1)]
        threads: usize,
    },
    /// Print the trim guide's boundary in an alignment
    Boundary {
        /// Aligned FASTA file
        input: String,
        #[arg(short, long)]
        guide: String,
        #[arg(long = "gap", default_value_t = '-')]
        gap_char: char,
    },
}

fn setup_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Error
    } else {
        match verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    };
    let mut builder = env_logger::Builder::from_default_env();
    // RUST_LOG wins unless -v/-q was given explicitly
    if std::env::var_os("RUST_LOG").is_none() || verbose > 0 || quiet {
        builder.filter_level(level);
    }
    builder.format_timestamp_secs().init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Trim {
            inputs,
            config,
            guide,
            targets,
            gap_char,
            min_sequences,
            sanitize_ids,
            line_width,
            out,
            out_dir,
            report,
            threads,
        } => {
            let mut cfg = TrimConfig::load(config.as_deref())?;
            if guide.is_some() {
                cfg.guide = guide;
            }
            cfg.targets.extend(targets);
            if let Some(g) = gap_char {
                cfg.gap_char = g;
            }
            if let Some(m) = min_sequences {
                cfg.min_sequences = m;
            }
            if sanitize_ids {
                cfg.sanitize_ids = true;
            }
            if let Some(w) = line_width {
                cfg.line_width = w;
            }
            let outputs = batch::output_paths(&inputs, out.as_deref(), out_dir.as_deref())?;
            let outcomes = batch::run_batch(&inputs, &outputs, &cfg, threads)?;
            batch::finish_batch(outcomes, report.as_deref())
        }
        Commands::Boundary { input, guide, gap_char } => run_boundary(&input, &guide, gap_char),
    }
}

fn run_boundary(input: &str, guide: &str, gap_char: char) -> Result<()> {
    if !gap_char.is_ascii() {
        bail!("gap character '{}' is not a single ASCII character", gap_char);
    }
    let aln = fasta::read_alignment_file(input)?;
    let b = trim::find_boundary(&aln, guide, gap_char as u8)?;
    println!("guide: {}", guide);
    println!("start_col: {}", b.start_col);
    println!("end_col: {}", b.end_col);
    println!("residue_columns: {}..{} ({} columns)", b.start_col, b.end_col, b.width());
    Ok(())
}
