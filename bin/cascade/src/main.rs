//! Round-trip compression benchmark CLI.
//!
//! Drives the two benchmark operations against the built-in codec
//! registry:
//!
//! - **raw**: compress and decompress synthesized buffers, asserting
//!   byte-for-byte equality
//! - **store**: write key/value records through the block-compressed
//!   record store, read them back in order, and verify every pair
//!
//! A failed case surfaces as a nonzero exit; timing is reported, never
//! used for pass/fail.

mod cli;

use cascade_bench::{BenchmarkRunner, JsonReport, StoreCase, default_registry};
use clap::Parser;
use cli::{Args, Command};
use eyre::Result;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut report = JsonReport::default();

    match args.command {
        Command::Raw { codec, ref sizes } => {
            let runner = BenchmarkRunner::new(default_registry(), ".");
            for id in codec.ids() {
                let reports = runner.raw_round_trip(id, sizes)?;
                report.add_raw(&reports);
                for case in &reports {
                    println!(
                        "{id}: {} -> {} bytes, compress {:.2} ms, decompress {:.2} ms",
                        case.size,
                        case.compressed_size,
                        case.compress_time.as_secs_f64() * 1000.0,
                        case.decompress_time.as_secs_f64() * 1000.0,
                    );
                }
            }
        }
        Command::Store { codec, lines, block_size, ref dir } => {
            let runner = BenchmarkRunner::new(default_registry(), dir.clone());
            for id in codec.ids() {
                let case = StoreCase::new(id, lines).with_block_size(block_size);
                let result = runner.store_round_trip(&case)?;
                report.add_store(&result);
                println!(
                    "{id}: {lines} lines, {} bytes on disk, write {:.2} s, read {:.2} s",
                    result.file_size,
                    result.write_time.as_secs_f64(),
                    result.read_time.as_secs_f64(),
                );
            }
        }
    }

    if let Some(path) = &args.report {
        report.write(path)?;
        info!(path = %path.display(), "Wrote JSON report");
    }

    Ok(())
}

/// Initialize the tracing subscriber from the verbosity count.
///
/// 0 maps to INFO so phase logs show by default; `-v` is DEBUG and `-vv`
/// TRACE. The `RUST_LOG` environment variable overrides the default
/// filter.
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::builder().with_default_directive(level.into()).from_env_lossy();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_thread_ids(false))
        .init();
}
