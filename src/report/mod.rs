use colored::Colorize;
use log::info;

use crate::pipeline::ClassificationPipeline;

/// Summary of the integer bucket. Mean uses integer division, matching the
/// counts-of-whole-numbers character of the bucket.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct IntegerStats {
    pub min: i64,
    pub max: i64,
    pub mean: i64,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct FloatStats {
    pub min: f32,
    pub max: f32,
    pub mean: f32,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct TextStats {
    pub shortest: usize,
    pub longest: usize,
}

/// An empty bucket yields the zeroed default rather than an error.
pub fn integer_stats(values: &[i64]) -> IntegerStats {
    if values.is_empty() {
        return IntegerStats::default();
    }

    // Sum in i128 so a bucket of large i64 values cannot overflow; the mean
    // itself always lies between min and max and fits back into i64.
    let sum: i128 = values.iter().map(|&v| i128::from(v)).sum();
    IntegerStats {
        min: values.iter().copied().min().unwrap_or(0),
        max: values.iter().copied().max().unwrap_or(0),
        mean: (sum / values.len() as i128) as i64,
    }
}

pub fn float_stats(values: &[f32]) -> FloatStats {
    if values.is_empty() {
        return FloatStats::default();
    }

    let sum: f32 = values.iter().sum();
    FloatStats {
        min: values.iter().copied().fold(f32::INFINITY, f32::min),
        max: values.iter().copied().fold(f32::NEG_INFINITY, f32::max),
        mean: sum / values.len() as f32,
    }
}

pub fn text_stats(values: &[String]) -> TextStats {
    if values.is_empty() {
        return TextStats::default();
    }

    let lengths = values.iter().map(|s| s.len());
    TextStats {
        shortest: lengths.clone().min().unwrap_or(0),
        longest: lengths.max().unwrap_or(0),
    }
}

/// Prints counts for the three buckets and, when `full` is set, the
/// per-bucket statistics. Works from each store's last-written items, so a
/// bucket whose write failed reports as empty.
pub fn print_summary(pipeline: &ClassificationPipeline, full: bool) {
    info!("Integers written: {}", pipeline.integers().last_written().len());
    info!("Floats written: {}", pipeline.floats().last_written().len());
    info!("Strings written: {}", pipeline.strings().last_written().len());

    if !full {
        return;
    }

    let integers = integer_stats(pipeline.integers().last_written());
    let floats = float_stats(pipeline.floats().last_written());
    let strings = text_stats(pipeline.strings().last_written());

    println!();
    println!("{}", "Integers".bold());
    println!("  min:  {}", integers.min);
    println!("  max:  {}", integers.max);
    println!("  mean: {}", integers.mean);
    println!();
    println!("{}", "Floats".bold());
    println!("  min:  {}", floats.min);
    println!("  max:  {}", floats.max);
    println!("  mean: {}", floats.mean);
    println!();
    println!("{}", "Strings".bold());
    println!("  shortest: {}", strings.shortest);
    println!("  longest:  {}", strings.longest);
}
