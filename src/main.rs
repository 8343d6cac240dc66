//! doctree — resolve annotated comment records into a documentation
//! hierarchy.
//!
//! Input is the external parser's output: a JSON array of raw comment
//! records (tags plus source context). Two modes:
//!
//! - **stdin mode**: `doctree < records.json`
//! - **file mode**: `doctree parsed/*.json -o forest.json`
//!
//! Records from multiple files are concatenated in argument order and
//! resolved as a single run, so membership references across files work.

mod hierarchy;
mod infer;
mod lint;
mod model;
mod pipeline;

use anyhow::{Context, Result};
use clap::Parser;
use infer::InferConfig;
use model::Comment;
use pipeline::Pipeline;
use regex::Regex;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "doctree",
    about = "Build a documentation hierarchy from annotated comment records"
)]
struct Cli {
    /// Input record files (glob patterns supported). If omitted, reads a
    /// single JSON array from stdin.
    files: Vec<String>,

    /// Write the resolved forest to this file instead of stdout
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Report diagnostics as `file:line: message` lines instead of emitting
    /// the forest; exits 1 when any finding exists
    #[arg(long)]
    lint: bool,

    /// Treat names matching this pattern as private when no access tag is
    /// present (e.g. '^_')
    #[arg(long, value_name = "REGEX")]
    infer_private: Option<String>,

    /// Emit compact JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let records = if cli.files.is_empty() {
        stdin_records()?
    } else {
        file_records(&cli.files)?
    };

    let config = InferConfig {
        infer_private: cli
            .infer_private
            .as_deref()
            .map(|p| Regex::new(p).with_context(|| format!("invalid --infer-private pattern: {p}")))
            .transpose()?,
    };

    // The lint pipeline is the build pipeline with a leading validation
    // stage; both feed the same resolver.
    let mut stages = infer::stages(&config);
    if cli.lint {
        stages.insert(0, Some(lint::stage()));
    }
    let pipeline = Pipeline::new(stages);

    let forest = hierarchy::resolve(pipeline.run_all(records));

    if cli.lint {
        let report = lint::format_report(&forest);
        if !report.is_empty() {
            println!("{report}");
        }
        if lint::finding_count(&forest) > 0 {
            std::process::exit(1);
        }
        return Ok(());
    }

    let json = if cli.compact {
        serde_json::to_string(&forest)?
    } else {
        serde_json::to_string_pretty(&forest)?
    };

    match &cli.output {
        Some(path) => fs::write(path, json)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{json}"),
    }

    Ok(())
}

/// stdin mode: one JSON array of records.
fn stdin_records() -> Result<Vec<Comment>> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;
    serde_json::from_str(&input).context("stdin is not a JSON array of comment records")
}

/// file mode: expand globs, read each file, concatenate record sequences in
/// file order. Unreadable or malformed files are skipped with a warning so
/// one bad input cannot sink the run.
fn file_records(patterns: &[String]) -> Result<Vec<Comment>> {
    let mut records = Vec::new();
    for path in expand_globs(patterns)? {
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("warning: skipping {}: {}", path.display(), e);
                continue;
            }
        };
        match serde_json::from_str::<Vec<Comment>>(&content) {
            Ok(batch) => records.extend(batch),
            Err(e) => eprintln!("warning: skipping {}: {}", path.display(), e),
        }
    }
    Ok(records)
}

/// Expand glob patterns into a list of real file paths, keeping the
/// caller's argument order between patterns.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        let mut matches: Vec<PathBuf> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {pattern}"))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            eprintln!("warning: no files matched: {pattern}");
        }
        matches.sort();
        files.extend(matches);
    }
    files.dedup();
    Ok(files)
}
