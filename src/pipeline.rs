//! Parallel batch processing over in-memory sources.
//!
//! The engine itself is single-threaded per file with no shared state, so
//! batches parallelize with zero coordination: every file gets a fresh
//! parse and a fresh traversal. Output order matches input order.

use glob::Pattern;
use rayon::prelude::*;

use crate::config::Config;
use crate::parsers::{ParsedJsx, parse_jsx_source};
use crate::transform::{TransformOutput, transform_module};

pub struct SourceFile {
    pub path: String,
    pub code: String,
}

pub struct FileOutcome {
    pub path: String,
    pub status: FileStatus,
}

pub enum FileStatus {
    /// Parsed and run through the engine. `output.transformed` reports
    /// whether anything changed; the module in `parsed` is ready for an
    /// external printer either way.
    Processed {
        parsed: ParsedJsx,
        output: TransformOutput,
    },
    /// Matched a configured skip pattern; not even parsed.
    Skipped,
    /// The source failed to parse. Parse errors never abort the batch.
    Failed { error: String },
}

/// Transform many sources in parallel.
pub fn transform_sources(files: Vec<SourceFile>, config: &Config) -> Vec<FileOutcome> {
    let skip_patterns: Vec<Pattern> = config
        .skip_patterns
        .iter()
        .filter_map(|pattern| Pattern::new(pattern).ok())
        .collect();

    files
        .into_par_iter()
        .map(|file| {
            let SourceFile { path, code } = file;

            if skip_patterns.iter().any(|pattern| pattern.matches(&path)) {
                return FileOutcome {
                    path,
                    status: FileStatus::Skipped,
                };
            }

            let status = match parse_jsx_source(code, &path) {
                Ok(mut parsed) => {
                    let relative = relative_path(&path, &config.source_root).to_string();
                    let output = transform_module(
                        &mut parsed.module,
                        &parsed.source_map,
                        &relative,
                        config,
                    );
                    FileStatus::Processed { parsed, output }
                }
                Err(error) => FileStatus::Failed {
                    error: error.to_string(),
                },
            };
            FileOutcome { path, status }
        })
        .collect()
}

/// Strip the configured source root so entry hashes stay stable across
/// machines and checkouts.
fn relative_path<'p>(path: &'p str, source_root: &str) -> &'p str {
    let root = source_root.trim_start_matches("./").trim_end_matches('/');
    if root.is_empty() {
        return path;
    }
    match path.strip_prefix(root) {
        Some(rest) => rest.trim_start_matches('/'),
        None => path,
    }
}
