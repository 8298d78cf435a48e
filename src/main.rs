// See LICENSE for the program's license.

//! Command-line entry point for the layout enumerator.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;

use ginkgo_search::search::{run_parallel, Checkpoint, Enumerator, Outcome, SearchOptions, Statistics};
use ginkgo_search::{Board, PlacementOrder, RunSummary, Tables};

#[derive(Parser, Debug)]
#[command(
    name = "ginkgo",
    about = "Count the valid layouts of the Ginkgo rotational puzzle",
    version
)]
struct Args {
    /// Board radius; the physical puzzle is 3 (25 spaces).
    #[arg(long, default_value_t = 3)]
    radius: u8,

    /// Also reject layouts containing a 2x2 mutual-dependency loop.
    #[arg(long)]
    exclude_loops: bool,

    /// Search all four center facings instead of fixing the center to
    /// north and multiplying by four.
    #[arg(long)]
    no_symmetry: bool,

    /// Split the search across one worker per top-level orientation.
    /// Parallel runs cannot pause or resume.
    #[arg(long, conflicts_with_all = ["pause_after", "resume"])]
    parallel: bool,

    /// Emit a progress line every this many valid layouts; 0 disables.
    #[arg(long, default_value_t = 100_000)]
    progress_every: u64,

    /// Checkpoint file for pause and resume.
    #[arg(long)]
    checkpoint: Option<PathBuf>,

    /// Continue from the checkpoint file instead of starting fresh.
    #[arg(long, requires = "checkpoint")]
    resume: bool,

    /// Suspend after this many seconds and write the checkpoint.
    #[arg(long, value_name = "SECS", requires = "checkpoint")]
    pause_after: Option<u64>,

    /// Write a results summary to this file at the end of the run.
    #[arg(long)]
    results: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let board = Board::diamond(args.radius);
    let order = PlacementOrder::board_order(&board);
    let tables = Tables::new(&board, order);

    let options = SearchOptions {
        exclude_loops: args.exclude_loops,
        rotational_cut: !args.no_symmetry && tables.supports_rotational_cut(),
        progress_every: args.progress_every,
    };

    let start = Instant::now();

    if args.parallel {
        let (valid, statistics) = run_parallel(&tables, &options);
        finish(&args, &options, &statistics, valid, start.elapsed().as_secs_f64())?;
        return Ok(());
    }

    let mut enumerator = Enumerator::new(&tables, options.clone());
    if let Some(secs) = args.pause_after {
        let flag = Arc::new(AtomicBool::new(false));
        let watchdog = Arc::clone(&flag);
        std::thread::spawn(move || {
            std::thread::sleep(Duration::from_secs(secs));
            watchdog.store(true, Ordering::Relaxed);
        });
        enumerator.set_cancel_flag(flag);
    }

    let outcome = if args.resume {
        let path = args
            .checkpoint
            .as_deref()
            .context("--resume requires --checkpoint")?;
        let checkpoint = Checkpoint::load(path)
            .with_context(|| format!("loading checkpoint {}", path.display()))?;
        enumerator
            .resume(&checkpoint)
            .context("resuming from checkpoint")?
    } else {
        enumerator.run()
    };

    let elapsed = start.elapsed().as_secs_f64();
    match outcome {
        Outcome::Exhausted { valid } => {
            let statistics = enumerator.statistics().clone();
            finish(&args, &options, &statistics, valid, elapsed)?;
        }
        Outcome::Suspended(checkpoint) => {
            let path = args
                .checkpoint
                .as_deref()
                .context("suspended without a checkpoint path")?;
            checkpoint
                .save(path)
                .with_context(|| format!("writing checkpoint {}", path.display()))?;
            eprintln!(
                "[search] paused at depth {} after {:.1}s; checkpoint written to {}",
                checkpoint.prefix.len(),
                elapsed,
                path.display()
            );
            if let Some(results) = &args.results {
                let summary = RunSummary::from_statistics(
                    enumerator.statistics(),
                    checkpoint.valid,
                    options.exclude_loops,
                    options.rotational_cut,
                    elapsed,
                    false,
                );
                summary
                    .write(results)
                    .with_context(|| format!("writing results {}", results.display()))?;
            }
        }
    }
    Ok(())
}

fn finish(
    args: &Args,
    options: &SearchOptions,
    statistics: &Statistics,
    valid: u64,
    elapsed: f64,
) -> Result<()> {
    println!("validBoards = {}", valid);
    eprintln!("[search] finished in {:.1}s", elapsed);
    if let Some(results) = &args.results {
        let summary = RunSummary::from_statistics(
            statistics,
            valid,
            options.exclude_loops,
            options.rotational_cut,
            elapsed,
            true,
        );
        summary
            .write(results)
            .with_context(|| format!("writing results {}", results.display()))?;
    }
    Ok(())
}
