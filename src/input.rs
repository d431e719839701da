use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

/// Bytes hashed when no input is given.
pub const DEFAULT_INPUT: &[u8] = b"hi";
const STDIN_ARG: &str = "-";

/// Where the bytes to hash come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Default,
    Stdin,
    File(PathBuf),
    Literal(String),
}

impl Source {
    /// Classifies a command-line argument. An existing file wins over a
    /// literal unless `force_literal` is set.
    pub fn classify(arg: Option<&str>, force_literal: bool) -> Source {
        match arg {
            None => Source::Default,
            Some(value) if force_literal => Source::Literal(value.to_string()),
            Some(STDIN_ARG) => Source::Stdin,
            Some(value) if Path::new(value).is_file() => Source::File(PathBuf::from(value)),
            Some(value) => Source::Literal(value.to_string()),
        }
    }

    pub fn label(&self) -> String {
        match self {
            Source::Default => "(default)".to_string(),
            Source::Stdin => STDIN_ARG.to_string(),
            Source::File(path) => path.display().to_string(),
            Source::Literal(text) => format!("{text:?}"),
        }
    }
}

/// Options applied while resolving a [`Source`] to bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolveOptions {
    /// Append `\n` to literal input. Other sources are never modified.
    pub literal_newline: bool,
}

pub fn resolve(source: &Source, options: ResolveOptions) -> Result<Vec<u8>> {
    let bytes = match source {
        Source::Default => DEFAULT_INPUT.to_vec(),
        Source::Stdin => {
            let mut buffer = Vec::new();
            std::io::stdin()
                .lock()
                .read_to_end(&mut buffer)
                .context("Failed to read standard input")?;
            buffer
        }
        Source::File(path) => {
            fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?
        }
        Source::Literal(text) => {
            let mut bytes = text.as_bytes().to_vec();
            if options.literal_newline {
                bytes.push(b'\n');
            }
            bytes
        }
    };

    debug!("Resolved {} to {} bytes", source.label(), bytes.len());
    Ok(bytes)
}
