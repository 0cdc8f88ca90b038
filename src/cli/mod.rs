use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use walkdir::WalkDir;

use crate::config::{Config, FileSettings};
use crate::pipeline::ClassificationPipeline;
use crate::report;

/// Suffix that marks a path as readable input.
const INPUT_EXTENSION: &str = "txt";

static PREFIX_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\w.-]+$").unwrap());

#[derive(Parser, Debug)]
#[command(name = "textsift")]
#[command(version, about = "Sorts text file lines into integer, float and string files", long_about = None)]
pub struct Args {
    /// Input .txt files, or directories to scan for them
    #[arg(value_name = "INPUTS", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Directory where the filtered files are stored (default: current directory)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Prefix prepended to the filtered file names
    #[arg(short, long, default_value = "")]
    pub prefix: String,

    /// Keep existing filtered file contents instead of rewriting them
    #[arg(short, long)]
    pub append: bool,

    /// Output full statistics (min/max/mean) after filtering
    #[arg(short, long)]
    pub full: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode (suppress output)
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn run(args: Args) -> Result<()> {
    let config = build_config(&args)?;

    let mut pipeline = ClassificationPipeline::from_config(&config);
    let buckets = pipeline.run(&config.inputs);

    info!(
        "Classified {} lines from {} input file(s)",
        buckets.integers.len() + buckets.floats.len() + buckets.strings.len(),
        config.inputs.len()
    );

    report::print_summary(&pipeline, config.full_stats);
    Ok(())
}

/// Merges CLI flags over the optional settings file and validates the result.
/// This is the only fatal path: an unusable destination directory, a bad
/// prefix, or an empty effective input set abort the run before any
/// classification starts.
pub fn build_config(args: &Args) -> Result<Config> {
    let settings = match &args.config {
        Some(path) => FileSettings::load(path)?,
        None => FileSettings::default(),
    };

    let dest_dir = args
        .output
        .clone()
        .or(settings.output)
        .unwrap_or_else(|| PathBuf::from("."));

    let prefix = if !args.prefix.is_empty() {
        args.prefix.clone()
    } else {
        settings.prefix.unwrap_or_default()
    };

    if !prefix.is_empty() && !PREFIX_REGEX.is_match(&prefix) {
        bail!("Invalid prefix {prefix:?}. Allowed characters: letters, digits, -, _, .");
    }

    if !dest_dir.exists() {
        fs::create_dir_all(&dest_dir).with_context(|| {
            format!("Cannot resolve destination directory {}", dest_dir.display())
        })?;
    }

    let inputs = collect_inputs(&args.inputs);
    if inputs.is_empty() {
        bail!("You did not specify what .txt files to read");
    }

    Ok(Config {
        dest_dir,
        prefix,
        overwrite: !(args.append || settings.append.unwrap_or(false)),
        full_stats: args.full || settings.full.unwrap_or(false),
        inputs,
    })
}

/// Expands the raw input arguments: directories are walked for .txt files in
/// name order, .txt paths pass through (missing ones are reported later by
/// the pipeline), and anything else is skipped with a warning.
fn collect_inputs(raw: &[PathBuf]) -> Vec<PathBuf> {
    let mut inputs = Vec::new();

    for path in raw {
        if path.is_dir() {
            let mut found: Vec<PathBuf> = WalkDir::new(path)
                .sort_by_file_name()
                .into_iter()
                .filter_map(|entry| entry.ok())
                .filter(|entry| entry.file_type().is_file())
                .map(|entry| entry.into_path())
                .filter(|p| has_input_extension(p))
                .collect();
            inputs.append(&mut found);
        } else if has_input_extension(path) {
            inputs.push(path.clone());
        } else {
            warn!("Skipping {}: not a .{INPUT_EXTENSION} file", path.display());
        }
    }

    inputs
}

fn has_input_extension(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some(INPUT_EXTENSION)
}
