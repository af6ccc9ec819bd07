use std::collections::{BTreeSet, HashSet};
use std::path::PathBuf;
use std::time::Instant;

use marquee_core::Category;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::errors::GenerationError;
use crate::generators::{Generator, GeneratorRegistry, generator_id};
use crate::model::{GenerateOptions, GenerationReport};
use crate::output::csv::CsvRowWriter;

pub const CSV_FILE_NAME: &str = "movies.csv";
pub const REPORT_FILE_NAME: &str = "generation_report.json";

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub run_dir: PathBuf,
    pub report: GenerationReport,
}

/// Rows held in memory, one column per category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedTable {
    pub categories: Vec<Category>,
    pub rows: Vec<Vec<&'static str>>,
}

impl GeneratedTable {
    pub fn column(&self, category: Category) -> Option<Vec<&'static str>> {
        let index = self.categories.iter().position(|c| *c == category)?;
        Some(self.rows.iter().map(|row| row[index]).collect())
    }

    /// Number of distinct values per column, in column order.
    pub fn distinct_counts(&self) -> Vec<(Category, u64)> {
        self.categories
            .iter()
            .enumerate()
            .map(|(index, category)| {
                let distinct: BTreeSet<&str> = self.rows.iter().map(|row| row[index]).collect();
                (*category, distinct.len() as u64)
            })
            .collect()
    }
}

/// Upper bound on `rows` for a single run.
pub const MAX_ROWS: u64 = 10_000_000;

/// Seeded stream of rows, one value per resolved generator.
struct RowSource<'a> {
    generators: Vec<&'a dyn Generator>,
    rng: ChaCha8Rng,
}

impl<'a> RowSource<'a> {
    fn new(
        registry: &'a GeneratorRegistry,
        options: &GenerateOptions,
    ) -> Result<Self, GenerationError> {
        Ok(Self {
            generators: resolve_generators(registry, &options.categories)?,
            rng: ChaCha8Rng::seed_from_u64(options.seed),
        })
    }

    fn fill(&mut self, row: &mut Vec<&'static str>) {
        row.clear();
        for generator in &self.generators {
            row.push(generator.generate(&mut self.rng));
        }
    }
}

/// Entry point for generating seeded movie datasets.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    /// Generate rows in memory without touching the filesystem.
    pub fn generate_records(&self) -> Result<GeneratedTable, GenerationError> {
        validate_options(&self.options)?;
        let registry = GeneratorRegistry::new();
        let mut source = RowSource::new(&registry, &self.options)?;

        let mut rows = Vec::new();
        let mut row = Vec::new();
        for _ in 0..self.options.rows {
            source.fill(&mut row);
            rows.push(row.clone());
        }

        Ok(GeneratedTable {
            categories: self.options.categories.clone(),
            rows,
        })
    }

    /// Stream rows into `movies.csv` and write a JSON report into a new run directory.
    pub fn run(&self) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();
        validate_options(&self.options)?;
        let registry = GeneratorRegistry::new();
        let mut source = RowSource::new(&registry, &self.options)?;

        let run_id = uuid::Uuid::new_v4().to_string();
        let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H-%M-%SZ").to_string();
        let run_dir = self
            .options
            .out_dir
            .join(format!("{timestamp}__run_{run_id}"));
        std::fs::create_dir_all(&run_dir)?;

        info!(
            run_id = %run_id,
            rows = self.options.rows,
            seed = self.options.seed,
            columns = self.options.categories.len(),
            "generation started"
        );

        let categories = &self.options.categories;
        let mut distinct: Vec<BTreeSet<&'static str>> = vec![BTreeSet::new(); categories.len()];
        let mut writer = CsvRowWriter::create(&run_dir.join(CSV_FILE_NAME), categories)?;
        let mut row = Vec::with_capacity(categories.len());
        for _ in 0..self.options.rows {
            source.fill(&mut row);
            for (seen, value) in distinct.iter_mut().zip(&row) {
                seen.insert(*value);
            }
            writer.write_row(&row)?;
        }

        let mut report = GenerationReport::new(run_id.clone(), &self.options);
        report.rows = writer.rows_written();
        report.bytes_written = writer.finish()?;
        for (&category, seen) in categories.iter().zip(&distinct) {
            debug!(category = %category, distinct = seen.len(), "column generated");
            report.record_generator_usage(generator_id(category), report.rows);
            report.record_distinct(category, seen.len() as u64);
        }
        report.duration_ms = start.elapsed().as_millis() as u64;

        let report_path = run_dir.join(REPORT_FILE_NAME);
        std::fs::write(&report_path, serde_json::to_vec_pretty(&report)?)?;

        info!(
            run_id = %run_id,
            rows = report.rows,
            bytes = report.bytes_written,
            duration_ms = report.duration_ms,
            "generation finished"
        );

        Ok(GenerationResult { run_dir, report })
    }
}

fn validate_options(options: &GenerateOptions) -> Result<(), GenerationError> {
    if options.rows == 0 {
        return Err(GenerationError::InvalidOptions(
            "rows must be at least 1".to_string(),
        ));
    }
    if options.rows > MAX_ROWS {
        return Err(GenerationError::InvalidOptions(format!(
            "rows {} exceeds the limit of {MAX_ROWS}",
            options.rows
        )));
    }
    if options.categories.is_empty() {
        return Err(GenerationError::InvalidOptions(
            "at least one category is required".to_string(),
        ));
    }
    let mut seen = HashSet::new();
    for category in &options.categories {
        if !seen.insert(category) {
            return Err(GenerationError::InvalidOptions(format!(
                "category '{category}' listed more than once"
            )));
        }
    }
    Ok(())
}

fn resolve_generators<'a>(
    registry: &'a GeneratorRegistry,
    categories: &[Category],
) -> Result<Vec<&'a dyn Generator>, GenerationError> {
    categories
        .iter()
        .map(|&category| {
            registry.for_category(category).ok_or_else(|| {
                GenerationError::InvalidOptions(format!(
                    "no generator registered for category '{category}'"
                ))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(rows: u64, categories: Vec<Category>) -> GenerateOptions {
        GenerateOptions {
            rows,
            categories,
            ..GenerateOptions::default()
        }
    }

    #[test]
    fn rejects_zero_rows() {
        let engine = GenerationEngine::new(options(0, Category::ALL.to_vec()));
        assert!(matches!(
            engine.generate_records(),
            Err(GenerationError::InvalidOptions(_))
        ));
    }

    #[test]
    fn rejects_rows_above_limit() {
        for rows in [MAX_ROWS + 1, u64::MAX / 2, u64::MAX] {
            let engine = GenerationEngine::new(options(rows, Category::ALL.to_vec()));
            assert!(matches!(
                engine.generate_records(),
                Err(GenerationError::InvalidOptions(_))
            ));
        }
    }

    #[test]
    fn rejects_duplicate_categories() {
        let engine =
            GenerationEngine::new(options(5, vec![Category::Actor, Category::Actor]));
        assert!(matches!(
            engine.generate_records(),
            Err(GenerationError::InvalidOptions(_))
        ));
    }

    #[test]
    fn columns_follow_requested_order() {
        let engine = GenerationEngine::new(options(
            25,
            vec![Category::Director, Category::Genre],
        ));
        let table = engine.generate_records().expect("generate");
        assert_eq!(table.rows.len(), 25);

        let directors = table.column(Category::Director).expect("director column");
        let genres = table.column(Category::Genre).expect("genre column");
        assert!(directors.iter().all(|d| Category::Director.table().contains(d)));
        assert!(genres.iter().all(|g| Category::Genre.table().contains(g)));
        assert!(table.column(Category::Actor).is_none());

        let distinct = table.distinct_counts();
        assert_eq!(distinct.len(), 2);
        assert_eq!(distinct[0].0, Category::Director);
        assert!(distinct.iter().all(|(_, count)| (1..=25).contains(count)));
    }
}
