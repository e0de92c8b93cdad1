//! CLI argument definitions.

use std::path::PathBuf;

use cascade_bench::{DEFAULT_BLOCK_SIZE, DEFAULT_LINES, RAW_SIZES};
use clap::{Parser, Subcommand, ValueEnum};

/// Codec selection for benchmark runs.
///
/// The `All` variant runs every single codec in turn so their timings and
/// file sizes can be compared from one invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum CodecChoice {
    /// Snappy (default).
    #[default]
    Snappy,
    /// Brotli.
    Brotli,
    /// Zlib (DEFLATE).
    Zlib,
    /// Zstandard.
    Zstd,
    /// Passthrough, for baselining harness overhead.
    Noop,
    /// Run every codec and compare.
    All,
}

impl CodecChoice {
    /// All single codec choices (excludes `All`).
    pub fn all_codecs() -> impl Iterator<Item = Self> {
        [Self::Snappy, Self::Brotli, Self::Zlib, Self::Zstd, Self::Noop].into_iter()
    }

    /// Registry identifiers selected by this choice.
    pub fn ids(self) -> Vec<&'static str> {
        match self {
            Self::Snappy => vec!["snappy"],
            Self::Brotli => vec!["brotli"],
            Self::Zlib => vec!["zlib"],
            Self::Zstd => vec!["zstd"],
            Self::Noop => vec!["noop"],
            Self::All => vec!["snappy", "brotli", "zlib", "zstd", "noop"],
        }
    }
}

impl std::fmt::Display for CodecChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Snappy => write!(f, "snappy"),
            Self::Brotli => write!(f, "brotli"),
            Self::Zlib => write!(f, "zlib"),
            Self::Zstd => write!(f, "zstd"),
            Self::Noop => write!(f, "noop"),
            Self::All => write!(f, "all"),
        }
    }
}

/// Round-trip compression benchmark driver.
#[derive(Debug, Parser)]
#[command(name = "cascade", about = "Correctness-checked compression round-trip benchmarks")]
pub struct Args {
    /// Verbosity (-v debug, -vv trace). `RUST_LOG` overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Write a JSON report of all cases to this path.
    #[arg(long, global = true)]
    pub report: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Benchmark subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Raw buffer round trips: compress and decompress synthesized buffers.
    Raw {
        /// Codec to exercise.
        #[arg(long, value_enum, default_value_t = CodecChoice::Snappy)]
        codec: CodecChoice,
        /// Buffer sizes in bytes, comma separated.
        #[arg(long, value_delimiter = ',', default_values_t = RAW_SIZES)]
        sizes: Vec<usize>,
    },
    /// Store round trip: write, read back, and verify key/value records.
    Store {
        /// Codec to exercise.
        #[arg(long, value_enum, default_value_t = CodecChoice::Snappy)]
        codec: CodecChoice,
        /// Number of records to write and verify.
        #[arg(long, default_value_t = DEFAULT_LINES)]
        lines: u64,
        /// Compression block size in bytes.
        #[arg(long, default_value_t = DEFAULT_BLOCK_SIZE)]
        block_size: usize,
        /// Directory for the transient store file.
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codec_choice_default() {
        assert_eq!(CodecChoice::default(), CodecChoice::Snappy);
    }

    #[test]
    fn codec_choice_display() {
        assert_eq!(CodecChoice::Snappy.to_string(), "snappy");
        assert_eq!(CodecChoice::Brotli.to_string(), "brotli");
        assert_eq!(CodecChoice::Zlib.to_string(), "zlib");
        assert_eq!(CodecChoice::Zstd.to_string(), "zstd");
        assert_eq!(CodecChoice::Noop.to_string(), "noop");
        assert_eq!(CodecChoice::All.to_string(), "all");
    }

    #[test]
    fn codec_choice_all_codecs_excludes_all() {
        let codecs: Vec<_> = CodecChoice::all_codecs().collect();
        assert_eq!(codecs.len(), 5);
        assert!(!codecs.contains(&CodecChoice::All));
    }

    #[test]
    fn codec_choice_all_selects_every_id() {
        assert_eq!(CodecChoice::All.ids().len(), CodecChoice::all_codecs().count());
    }

    #[test]
    fn args_parse_raw_defaults() {
        let args = Args::try_parse_from(["cascade", "raw"]).unwrap();
        match args.command {
            Command::Raw { codec, sizes } => {
                assert_eq!(codec, CodecChoice::Snappy);
                assert_eq!(sizes, RAW_SIZES.to_vec());
            }
            _ => panic!("expected raw subcommand"),
        }
    }

    #[test]
    fn args_parse_store_overrides() {
        let args = Args::try_parse_from([
            "cascade",
            "store",
            "--codec",
            "zstd",
            "--lines",
            "1000",
            "--block-size",
            "500",
        ])
        .unwrap();
        match args.command {
            Command::Store { codec, lines, block_size, .. } => {
                assert_eq!(codec, CodecChoice::Zstd);
                assert_eq!(lines, 1000);
                assert_eq!(block_size, 500);
            }
            _ => panic!("expected store subcommand"),
        }
    }

    #[test]
    fn args_parse_custom_sizes() {
        let args =
            Args::try_parse_from(["cascade", "raw", "--sizes", "1024,2048"]).unwrap();
        match args.command {
            Command::Raw { sizes, .. } => assert_eq!(sizes, vec![1024, 2048]),
            _ => panic!("expected raw subcommand"),
        }
    }

    #[test]
    fn args_verify_structure() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
