//! Info command implementation.

use crate::utils::{CliResult, StatsReport, open_input, print_report};
use lzss_codec::{LzssConfig, LzssDecoder};
use std::io;
use std::path::Path;

/// Decode `input` into a sink and report its token structure.
pub fn cmd_info(input: &Path, config: LzssConfig, json: bool) -> CliResult {
    let mut decoder = LzssDecoder::new(config)?;
    let (reader, _) = open_input(input)?;

    let stats = decoder.decode(reader, io::sink())?;

    if !json {
        println!("LZSS Stream Information");
        println!("=======================");
        println!(
            "Parameters: {} byte window, matches {}..={}",
            config.window_size(),
            config.min_match(),
            config.max_match()
        );
    }
    print_report(&StatsReport::new("info", input, None, &stats), json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_reports_truncation() {
        let path = std::env::temp_dir().join(format!("lzss-info-{}.lzss", std::process::id()));
        // Literal 'A' then a match cut after its first byte.
        std::fs::write(&path, [0x01, b'A', 0x0F]).unwrap();

        let err = cmd_info(&path, LzssConfig::CLASSIC, true).unwrap_err();
        assert!(err.to_string().contains("Truncated"));

        std::fs::remove_file(&path).unwrap();
    }
}
