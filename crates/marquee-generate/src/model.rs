use std::collections::BTreeMap;
use std::path::PathBuf;

use marquee_core::Category;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Options for the generation engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct GenerateOptions {
    /// Directory where run artifacts are written.
    pub out_dir: PathBuf,
    /// Number of rows to generate.
    pub rows: u64,
    /// Seed for the run's random stream.
    pub seed: u64,
    /// Columns to emit, one per category.
    pub categories: Vec<Category>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("out"),
            rows: 100,
            seed: 42,
            categories: Category::ALL.to_vec(),
        }
    }
}

/// Report for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GenerationReport {
    pub run_id: String,
    pub seed: u64,
    pub rows: u64,
    pub categories: Vec<Category>,
    pub generator_usage: BTreeMap<String, u64>,
    /// Distinct values emitted per category column.
    pub distinct_values: BTreeMap<String, u64>,
    pub bytes_written: u64,
    pub duration_ms: u64,
}

impl GenerationReport {
    pub fn new(run_id: String, options: &GenerateOptions) -> Self {
        Self {
            run_id,
            seed: options.seed,
            rows: 0,
            categories: options.categories.clone(),
            generator_usage: BTreeMap::new(),
            distinct_values: BTreeMap::new(),
            bytes_written: 0,
            duration_ms: 0,
        }
    }

    pub fn record_generator_usage(&mut self, id: &str, count: u64) {
        *self.generator_usage.entry(id.to_string()).or_insert(0) += count;
    }

    pub fn record_distinct(&mut self, category: Category, count: u64) {
        self.distinct_values
            .insert(category.as_str().to_string(), count);
    }
}
