use clap::ValueEnum;
use data_encoding::BASE32_NOPAD;

use crate::differential::{RoundDiff, Trace};
use crate::digest::Digest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    /// 40 lowercase hex digits
    #[default]
    Hex,
    /// 40 uppercase hex digits
    Upper,
    /// RFC 4648 base32 without padding
    Base32,
}

pub fn render(digest: &Digest, format: Format) -> String {
    let bytes = digest.to_bytes();
    match format {
        Format::Hex => hex::encode(bytes),
        Format::Upper => hex::encode_upper(bytes),
        Format::Base32 => BASE32_NOPAD.encode(&bytes),
    }
}

/// `sha1sum`-style line: rendered digest, two spaces, source label.
pub fn line(digest: &Digest, format: Format, label: Option<&str>) -> String {
    let rendered = render(digest, format);
    match label {
        Some(label) => format!("{rendered}  {label}"),
        None => rendered,
    }
}

const REGISTERS: [char; 5] = ['A', 'B', 'C', 'D', 'E'];

/// One round of a trace: a header, then both values of every register with
/// their bit-difference counts.
pub fn round_report(diff: &RoundDiff) -> String {
    let left = diff.left.words();
    let right = diff.right.words();
    let counts = diff.bit_differences();

    let mut report = if diff.is_local_collision() {
        format!("round {:2}: local collision in A", diff.round)
    } else {
        format!("round {:2}:", diff.round)
    };
    for (i, name) in REGISTERS.iter().enumerate() {
        report.push_str(&format!(
            "\n\t{name}  = 0x{:08x},\t{:032b}\n\t{name}' = 0x{:08x},\t{:032b}\tbit differences = {}",
            left[i], left[i], right[i], right[i], counts[i]
        ));
    }
    report
}

pub fn trace_summary(trace: &Trace) -> String {
    let collisions: Vec<String> = trace.local_collisions().map(|d| d.round.to_string()).collect();
    let last = trace.rounds.last().map(|d| d.total_bit_differences()).unwrap_or(0);

    let mut summary = if collisions.is_empty() {
        format!(
            "{} rounds traced, no local collisions, {last} differing bits at the end",
            trace.rounds.len()
        )
    } else {
        format!(
            "{} rounds traced, local collisions in rounds {}, {last} differing bits at the end",
            trace.rounds.len(),
            collisions.join(", ")
        )
    };
    summary.push_str(&format!("\nsha-1 digest: {}", trace.left_digest));
    summary.push_str(&format!("\nsha-1 digest: {}", trace.right_digest));
    summary
}
