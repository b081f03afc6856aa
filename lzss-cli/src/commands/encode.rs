//! Encode command implementation.

use crate::utils::{CliResult, StatsReport, create_output, create_progress_bar, open_input, print_report};
use lzss_codec::{LzssConfig, LzssEncoder};
use std::path::Path;

pub fn cmd_encode(
    input: &Path,
    output: &Path,
    config: LzssConfig,
    progress: bool,
    json: bool,
) -> CliResult {
    let mut encoder = LzssEncoder::new(config)?;
    let (reader, len) = open_input(input)?;
    let writer = create_output(output)?;

    let pb = create_progress_bar(len, progress);
    let result = encoder.encode(pb.wrap_read(reader), writer);
    pb.finish_and_clear();
    let stats = result?;

    tracing::info!(
        input = %input.display(),
        bytes_in = stats.bytes_in,
        bytes_out = stats.bytes_out,
        "encoded"
    );

    print_report(&StatsReport::new("encode", input, Some(output), &stats), json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cmd_decode;
    use lzss_codec::MatchStrategy;

    #[test]
    fn test_encode_decode_files() {
        let dir = std::env::temp_dir().join(format!("lzss-cli-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let original = b"file roundtrip, file roundtrip, file roundtrip!".repeat(50);
        let plain = dir.join("plain.txt");
        let packed = dir.join("plain.lzss");
        let restored = dir.join("restored.txt");
        std::fs::write(&plain, &original).unwrap();

        let config = LzssConfig::CLASSIC.with_strategy(MatchStrategy::Linear);
        cmd_encode(&plain, &packed, config, false, true).unwrap();
        cmd_decode(&packed, &restored, config, false, true).unwrap();

        assert!(std::fs::metadata(&packed).unwrap().len() < original.len() as u64);
        assert_eq!(std::fs::read(&restored).unwrap(), original);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_encode_read_failure_is_reported() {
        // Opening a directory succeeds; reading from it fails mid-encode.
        let dir = std::env::temp_dir().join(format!("lzss-cli-dir-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let output = dir.with_extension("lzss");

        let result = cmd_encode(&dir, &output, LzssConfig::CLASSIC, true, false);

        assert!(result.is_err());
        std::fs::remove_dir_all(&dir).unwrap();
        let _ = std::fs::remove_file(&output);
    }

    #[test]
    fn test_encode_rejects_bad_config_before_io() {
        let missing = Path::new("does-not-matter.txt");
        let err = cmd_encode(missing, missing, LzssConfig::new(12, 5, 2), false, false)
            .unwrap_err();
        assert!(err.to_string().contains("Invalid configuration"));
    }
}
