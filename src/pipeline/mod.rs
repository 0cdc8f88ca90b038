use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{error, warn};

use crate::classifier::{self, ClassifiedValue};
use crate::config::Config;
use crate::store::DestinationStore;

/// The three ordered per-category sequences accumulated during one run.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Buckets {
    pub integers: Vec<i64>,
    pub floats: Vec<f32>,
    pub strings: Vec<String>,
}

/// Reads the input files, classifies every line, and hands each bucket to
/// its destination store. All I/O failures are contained: a bad input file
/// or a failed destination write is logged and the run moves on.
pub struct ClassificationPipeline {
    integers: DestinationStore<i64>,
    floats: DestinationStore<f32>,
    strings: DestinationStore<String>,
}

impl ClassificationPipeline {
    pub fn new(
        integers: DestinationStore<i64>,
        floats: DestinationStore<f32>,
        strings: DestinationStore<String>,
    ) -> Self {
        Self {
            integers,
            floats,
            strings,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            DestinationStore::new(config.destination_path("integers.txt"), config.overwrite),
            DestinationStore::new(config.destination_path("floats.txt"), config.overwrite),
            DestinationStore::new(config.destination_path("strings.txt"), config.overwrite),
        )
    }

    /// Classifies all inputs, then writes each bucket to its destination.
    /// Returns the buckets so callers can inspect what was classified even
    /// when a destination write failed.
    pub fn run(&mut self, inputs: &[impl AsRef<Path>]) -> Buckets {
        let buckets = self.classify_inputs(inputs);
        self.write_buckets(&buckets);
        buckets
    }

    /// Reads every input in argument order and classifies its lines,
    /// preserving line order within each bucket. A missing input is skipped
    /// with a warning; a read error mid-file keeps the lines classified so
    /// far and moves on to the next input.
    pub fn classify_inputs(&self, inputs: &[impl AsRef<Path>]) -> Buckets {
        let mut buckets = Buckets::default();

        for input in inputs {
            let path = input.as_ref();
            if !path.exists() {
                warn!("File {} does not exist!", path.display());
                continue;
            }

            classify_file(path, &mut buckets);
        }

        buckets
    }

    /// Writes each bucket to its store. Every result is inspected here; a
    /// failed write is logged and the remaining stores still get their turn.
    pub fn write_buckets(&mut self, buckets: &Buckets) {
        let results = [
            self.integers.write(&buckets.integers),
            self.floats.write(&buckets.floats),
            self.strings.write(&buckets.strings),
        ];

        for result in results {
            if let Err(err) = result {
                error!("{err}");
            }
        }
    }

    pub fn integers(&self) -> &DestinationStore<i64> {
        &self.integers
    }

    pub fn floats(&self) -> &DestinationStore<f32> {
        &self.floats
    }

    pub fn strings(&self) -> &DestinationStore<String> {
        &self.strings
    }
}

fn classify_file(path: &Path, buckets: &mut Buckets) {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => {
            error!("Failed to read file {}: {err}", path.display());
            return;
        }
    };

    for line in BufReader::new(file).lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                error!("Failed to read file {}: {err}", path.display());
                break;
            }
        };

        match classifier::classify(&line) {
            ClassifiedValue::Integer(value) => buckets.integers.push(value),
            ClassifiedValue::Float(value) => buckets.floats.push(value),
            ClassifiedValue::Text(value) => buckets.strings.push(value),
        }
    }
}
