//! Decode command implementation.

use crate::utils::{CliResult, StatsReport, create_output, create_progress_bar, open_input, print_report};
use lzss_codec::{LzssConfig, LzssDecoder};
use std::path::Path;

pub fn cmd_decode(
    input: &Path,
    output: &Path,
    config: LzssConfig,
    progress: bool,
    json: bool,
) -> CliResult {
    let mut decoder = LzssDecoder::new(config)?;
    let (reader, len) = open_input(input)?;
    let writer = create_output(output)?;

    let pb = create_progress_bar(len, progress);
    let result = decoder.decode(pb.wrap_read(reader), writer);
    pb.finish_and_clear();
    let stats = result?;

    tracing::info!(
        input = %input.display(),
        bytes_in = stats.bytes_in,
        bytes_out = stats.bytes_out,
        "decoded"
    );

    print_report(&StatsReport::new("decode", input, Some(output), &stats), json)
}
