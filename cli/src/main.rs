#[macro_use]
extern crate log;

#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

use simplelog::*;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use suffix_tree::SuffixTree;

// CLI tools
use anyhow::{Context, Result};
use console::style;
use indicatif::{HumanBytes, ProgressBar, ProgressStyle};
use structopt::StructOpt;

mod sa_file;

// Docs @ https://docs.rs/structopt/0.3.20/structopt/
#[derive(StructOpt)]
struct CliInput {
    /// The file holding the text to index (one trailing newline is ignored)
    #[structopt(parse(from_os_str))]
    path: PathBuf,

    /// Where to write the suffix array, one 1-indexed offset per line
    #[structopt(short, long, parse(from_os_str), default_value = "output_sa.txt")]
    output: PathBuf,

    /// Also write the log to this file
    #[structopt(long, parse(from_os_str))]
    log_file: Option<PathBuf>,

    /// Log the whole tree at debug level after construction
    #[structopt(long)]
    print_tree: bool,

    /// More output, -v for debug and -vv for trace
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = CliInput::from_args();
    init_logging(args.verbose, args.log_file.as_deref())?;

    let text = sa_file::read_text(&args.path)?;
    info!(
        "Read {} from `{}`",
        HumanBytes(text.len() as u64),
        args.path.display()
    );

    let spinner_style = ProgressStyle::default_spinner()
        .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
        .template("{spinner} {wide_msg}");
    let pb = ProgressBar::new(1);
    pb.set_style(spinner_style);
    pb.enable_steady_tick(100);

    pb.set_message("Creating suffix tree...");
    let stopwatch = Instant::now();
    let tree = SuffixTree::new(&text)
        .with_context(|| format!("Could not index `{}`", args.path.display()))?;
    let build_time = stopwatch.elapsed();

    if args.print_tree {
        debug!("{:?}", tree);
    }

    pb.set_message("Writing suffix array...");
    let stopwatch = Instant::now();
    let suffix_array = tree.suffix_array();
    let file = File::create(&args.output)
        .with_context(|| format!("Could not create file `{}`", args.output.display()))?;
    sa_file::write_suffix_array(&mut BufWriter::new(file), &suffix_array)
        .with_context(|| format!("Could not write `{}`", args.output.display()))?;
    let write_time = stopwatch.elapsed();
    pb.finish_and_clear();

    print_construction_data(&tree, build_time);
    print_output_data(&args.output, suffix_array.len(), write_time);

    Ok(())
}

fn print_construction_data(tree: &SuffixTree, time: Duration) {
    let stats = tree.stats();
    info!(
        "Built suffix tree of {} ({} nodes, {} leaves) in {:?}",
        HumanBytes(tree.text().len() as u64),
        style(tree.node_count()).bold(),
        tree.leaf_count(),
        time
    );
    debug!(
        "{} phases, {} new leaves, {} splits, {} early stops, {} edge hops",
        stats.phases,
        stats.leaf_extensions,
        stats.splits,
        stats.early_stops,
        stats.edge_hops
    );
}

fn print_output_data(path: &Path, entries: usize, time: Duration) {
    info!(
        "Wrote {} suffix array entries to `{}` in {:?}",
        style(entries).green(),
        path.display(),
        time
    );
}

fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<()> {
    let level = match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
    )];
    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("Could not create log file `{}`", path.display()))?;
        loggers.push(WriteLogger::new(level, Config::default(), file));
    }
    CombinedLogger::init(loggers).context("Could not initialize logging")?;

    trace!("Loggers initialized.");
    Ok(())
}
