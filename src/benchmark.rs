use anyhow::Result;
use serde_json::Value;

use std::{
    hint::black_box,
    path::Path,
    time::{Duration, Instant},
};

use crate::{error::BenchError, models::Person};

const CITY_SUBSTRING: &str = "New";
const AGE_BRACKET: std::ops::RangeInclusive<u32> = 20..=30;
const SCALE_FACTOR: f64 = 1.1;

#[derive(Debug, Clone, PartialEq)]
pub struct StringStats {
    pub concatenated_names: String,
    pub new_city_count: usize,
    pub reversed_names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntegerStats {
    pub total_age: u64,
    pub max_age: u32,
    pub min_age: u32,
    pub age_range_count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FloatStats {
    pub avg_height: f64,
    pub avg_weight: f64,
    pub max_height: f64,
    pub min_height: f64,
    pub max_weight: f64,
    pub min_weight: f64,
    pub scaled_heights: Vec<f64>,
    pub scaled_weights: Vec<f64>,
}

/// Elapsed wall-clock time of each timed operation group.
#[derive(Debug, Clone, Copy)]
pub struct Timings {
    pub load: Duration,
    pub strings: Duration,
    pub integers: Duration,
    pub floats: Duration,
}

/// Parses the contents of a samples file into records.
pub fn parse_people(path: &Path, bytes: &[u8]) -> Result<Vec<Person>, BenchError> {
    let value: Value = serde_json::from_slice(bytes).map_err(|source| BenchError::Malformed {
        path: path.to_path_buf(),
        source,
    })?;
    let Value::Array(records) = value else {
        return Err(BenchError::NotAnArray {
            path: path.to_path_buf(),
        });
    };

    let people = records
        .iter()
        .enumerate()
        .map(|(index, record)| Person::from_json(index, record))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(people)
}

pub async fn load_people(path: &Path) -> Result<Vec<Person>, BenchError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| BenchError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    parse_people(path, &bytes)
}

pub fn string_operations(people: &[Person]) -> StringStats {
    let concatenated_names = people
        .iter()
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    let new_city_count = people
        .iter()
        .filter(|p| p.city.contains(CITY_SUBSTRING))
        .count();

    let reversed_names: Vec<String> = people
        .iter()
        .map(|p| p.name.chars().rev().collect())
        .collect();

    StringStats {
        concatenated_names,
        new_city_count,
        reversed_names,
    }
}

pub fn integer_operations(people: &[Person]) -> Result<IntegerStats, BenchError> {
    if people.is_empty() {
        return Err(BenchError::EmptyDataset {
            operation: "integer operations",
        });
    }

    let total_age = people.iter().map(|p| u64::from(p.age)).sum();
    let ages = people.iter().map(|p| p.age);
    let max_age = ages.clone().max().unwrap_or_default();
    let min_age = ages.min().unwrap_or_default();
    let age_range_count = people
        .iter()
        .filter(|p| AGE_BRACKET.contains(&p.age))
        .count();

    Ok(IntegerStats {
        total_age,
        max_age,
        min_age,
        age_range_count,
    })
}

pub fn float_operations(people: &[Person]) -> Result<FloatStats, BenchError> {
    if people.is_empty() {
        return Err(BenchError::EmptyDataset {
            operation: "float operations",
        });
    }

    let count = people.len() as f64;
    let heights = people.iter().map(|p| p.height);
    let weights = people.iter().map(|p| p.weight);

    Ok(FloatStats {
        avg_height: heights.clone().sum::<f64>() / count,
        avg_weight: weights.clone().sum::<f64>() / count,
        max_height: heights.clone().fold(f64::NEG_INFINITY, f64::max),
        min_height: heights.clone().fold(f64::INFINITY, f64::min),
        max_weight: weights.clone().fold(f64::NEG_INFINITY, f64::max),
        min_weight: weights.clone().fold(f64::INFINITY, f64::min),
        scaled_heights: heights.map(|h| h * SCALE_FACTOR).collect(),
        scaled_weights: weights.map(|w| w * SCALE_FACTOR).collect(),
    })
}

fn report(label: &str, elapsed: Duration) {
    println!("{} took {:.6} seconds", label, elapsed.as_secs_f64());
}

/// Times `operation` and reports the elapsed time only if it succeeds.
fn timed<T>(
    label: &str,
    operation: impl FnOnce() -> Result<T, BenchError>,
) -> Result<(T, Duration), BenchError> {
    let start = Instant::now();
    let result = black_box(operation()?);
    let elapsed = start.elapsed();
    report(label, elapsed);
    Ok((result, elapsed))
}

/// Loads the samples file at `path` and times each operation group.
pub async fn run_benchmark(path: &Path) -> Result<Timings> {
    tracing::info!("Loading records from {}", path.display());

    let start = Instant::now();
    let people = load_people(path).await?;
    let load = start.elapsed();
    report("File loading", load);
    tracing::debug!("Loaded {} records", people.len());

    let (_, strings) = timed("String operations", || {
        Ok(string_operations(black_box(&people)))
    })?;
    let (_, integers) = timed("Integer operations", || {
        integer_operations(black_box(&people))
    })?;
    let (_, floats) = timed("Float operations", || float_operations(black_box(&people)))?;

    let timings = Timings {
        load,
        strings,
        integers,
        floats,
    };
    tracing::info!(
        "Benchmark over {} records completed in {:?}",
        people.len(),
        start.elapsed()
    );

    Ok(timings)
}
