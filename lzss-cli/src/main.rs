//! LZSS CLI - classic sliding-window compression from the command line.

mod commands;
mod utils;

use clap::{Args, Parser, Subcommand, ValueEnum};
use commands::{cmd_decode, cmd_encode, cmd_info};
use lzss_codec::{LzssConfig, MATCH_CODE_BITS, MatchStrategy};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lzss")]
#[command(author, version, about = "LZSS compressor - 4 KB window, flag-byte token stream")]
#[command(long_about = "
Compresses and decompresses raw LZSS streams. The stream carries no header,
so decoding must use the same --length-bits and --threshold as encoding.

Examples:
  lzss encode notes.txt notes.lzss
  lzss decode notes.lzss notes.txt
  lzss info notes.lzss --json
  lzss -vv encode --strategy linear big.bin big.lzss
")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Show a progress bar over the input file
    #[arg(long, global = true)]
    progress: bool,

    /// Print statistics as JSON (machine-readable)
    #[arg(long, global = true)]
    json: bool,

    #[command(flatten)]
    params: CodecArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Parameters that must match between encode and decode.
#[derive(Args, Debug, Clone, Copy)]
struct CodecArgs {
    /// Width of the match-length field; the distance field gets the rest of 16 bits
    #[arg(long, global = true, default_value_t = 4, value_parser = clap::value_parser!(u8).range(1..16))]
    length_bits: u8,

    /// Longest match still written as literals
    #[arg(long, global = true, default_value_t = 2)]
    threshold: usize,

    /// Match finder used when encoding
    #[arg(long, global = true, value_enum, default_value = "tree")]
    strategy: Strategy,
}

impl CodecArgs {
    fn config(&self) -> LzssConfig {
        LzssConfig::new(
            MATCH_CODE_BITS - self.length_bits,
            self.length_bits,
            self.threshold,
        )
        .with_strategy(self.strategy.into())
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file
    #[command(alias = "e")]
    Encode {
        /// File to compress
        input: PathBuf,

        /// Compressed output file
        output: PathBuf,
    },

    /// Decompress a file
    #[command(alias = "d")]
    Decode {
        /// Compressed file
        input: PathBuf,

        /// Decompressed output file
        output: PathBuf,
    },

    /// Decode a file without writing it and report what it contains
    #[command(alias = "i")]
    Info {
        /// Compressed file to inspect
        input: PathBuf,
    },
}

/// Match finder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Strategy {
    /// Binary search trees
    Tree,
    /// Scan every distance
    Linear,
}

impl From<Strategy> for MatchStrategy {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Tree => MatchStrategy::Tree,
            Strategy::Linear => MatchStrategy::Linear,
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.params.config();
    let result = match cli.command {
        Commands::Encode { input, output } => {
            cmd_encode(&input, &output, config, cli.progress, cli.json)
        }
        Commands::Decode { input, output } => {
            cmd_decode(&input, &output, config, cli.progress, cli.json)
        }
        Commands::Info { input } => cmd_info(&input, config, cli.json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_encode() {
        let cli = Cli::try_parse_from(["lzss", "encode", "in.txt", "out.lzss"]).unwrap();

        assert!(matches!(cli.command, Commands::Encode { .. }));
        assert_eq!(cli.verbose, 0);
        assert!(!cli.progress);
        assert_eq!(cli.params.config(), LzssConfig::CLASSIC);
    }

    #[test]
    fn test_parse_aliases_and_globals() {
        let cli = Cli::try_parse_from([
            "lzss", "d", "in.lzss", "out.txt", "-vv", "--progress", "--json",
        ])
        .unwrap();

        assert!(matches!(cli.command, Commands::Decode { .. }));
        assert_eq!(cli.verbose, 2);
        assert!(cli.progress);
        assert!(cli.json);
    }

    #[test]
    fn test_parse_codec_parameters() {
        let cli = Cli::try_parse_from([
            "lzss",
            "e",
            "a",
            "b",
            "--length-bits",
            "5",
            "--threshold",
            "3",
            "--strategy",
            "linear",
        ])
        .unwrap();
        let config = cli.params.config();

        assert_eq!(config.distance_bits, 11);
        assert_eq!(config.length_bits, 5);
        assert_eq!(config.threshold, 3);
        assert_eq!(config.strategy, MatchStrategy::Linear);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_rejects_bad_arguments() {
        assert!(Cli::try_parse_from(["lzss", "encode", "only-one"]).is_err());
        assert!(Cli::try_parse_from(["lzss", "squash", "a", "b"]).is_err());
        assert!(Cli::try_parse_from(["lzss", "e", "a", "b", "--length-bits", "16"]).is_err());
        assert!(Cli::try_parse_from(["lzss", "e", "a", "b", "--strategy", "hash"]).is_err());
    }

    #[test]
    fn test_oversized_threshold_fails_validation() {
        let cli =
            Cli::try_parse_from(["lzss", "e", "a", "b", "--length-bits", "1", "--threshold", "16000"])
                .unwrap();

        let err = cli.params.config().validate().unwrap_err();
        assert!(err.to_string().contains("exceeds the limit"));
    }

    #[test]
    fn test_info_takes_single_path() {
        let cli = Cli::try_parse_from(["lzss", "info", "x.lzss"]).unwrap();
        assert!(matches!(cli.command, Commands::Info { .. }));
    }
}
