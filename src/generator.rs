use anyhow::{Context, Result};
use chrono::{Days, Local, Months, NaiveDate};
use indicatif::{ProgressBar, ProgressStyle};
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tokio::{
    fs::File,
    io::{AsyncWriteExt, BufWriter},
};

use std::path::Path;

use crate::models::Person;

const FIRST_NAMES: [&str; 12] = [
    "Tom", "Johnny", "Jim", "Eric", "Amanda", "Grace", "Judy", "Frank", "Sally", "Will", "Ann",
    "Nora",
];
const LAST_NAMES: [&str; 10] = [
    "Connor",
    "Henderson",
    "Farley",
    "Henson",
    "Jeffries",
    "Carlin",
    "Anderson",
    "O' Sullivan",
    "Dorothy",
    "McDougal",
];
const CITIES: [&str; 12] = [
    "New York",
    "Newark",
    "New Orleans",
    "Newcastle",
    "York",
    "Boston",
    "Springfield",
    "Portland",
    "Lakewood",
    "Riverside",
    "Fairview",
    "Georgetown",
];

pub const AGE_RANGE: std::ops::RangeInclusive<u32> = 18..=80;
pub const HEIGHT_RANGE: std::ops::Range<f64> = 1.5..2.0;
pub const WEIGHT_RANGE: std::ops::Range<f64> = 50.0..100.0;
const HEIGHT_DECIMALS: i32 = 5;
const WEIGHT_DECIMALS: i32 = 3;

/// Clamps a requested record count to zero or more.
pub fn normalize_count(count: i64) -> usize {
    if count < 0 {
        tracing::warn!("Negative record count {} treated as zero", count);
        return 0;
    }
    usize::try_from(count).unwrap_or(usize::MAX)
}

/// Rounds half away from zero to `decimals` digits.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Picks a birth date that makes a person exactly `age` calendar years old on `today`.
pub fn birth_date<R: Rng + ?Sized>(rng: &mut R, age: u32, today: NaiveDate) -> NaiveDate {
    let latest = today
        .checked_sub_months(Months::new(age * 12))
        .unwrap_or(NaiveDate::MIN);
    let earliest = today
        .checked_sub_months(Months::new((age + 1) * 12))
        .and_then(|date| date.succ_opt())
        .unwrap_or(NaiveDate::MIN);
    let span = u64::try_from((latest - earliest).num_days()).unwrap_or(0);

    latest
        .checked_sub_days(Days::new(rng.random_range(0..=span)))
        .unwrap_or(latest)
}

/// Generates one record. `born` is derived from the age relative to `today`.
pub fn generate_person<R: Rng + ?Sized>(rng: &mut R, id: u64, today: NaiveDate) -> Person {
    let first_name = FIRST_NAMES[rng.random_range(0..FIRST_NAMES.len())];
    let last_name = LAST_NAMES[rng.random_range(0..LAST_NAMES.len())];
    let city = CITIES[rng.random_range(0..CITIES.len())];
    let age = rng.random_range(AGE_RANGE);
    let born = birth_date(rng, age, today);

    let height = round_to(rng.random_range(HEIGHT_RANGE), HEIGHT_DECIMALS);
    let weight = round_to(rng.random_range(WEIGHT_RANGE), WEIGHT_DECIMALS);

    Person::new(
        id,
        &format!("{} {}", first_name, last_name),
        age,
        city,
        born,
        height,
        weight,
    )
}

/// Generates `count` records with ids `1..=count`.
pub fn generate_people<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    today: NaiveDate,
    progress: &ProgressBar,
) -> Result<Vec<Person>> {
    let mut people = Vec::new();
    people
        .try_reserve_exact(count)
        .with_context(|| format!("Cannot allocate {} person records", count))?;
    for id in 1..=count as u64 {
        people.push(generate_person(rng, id, today));
        progress.inc(1);
    }
    progress.finish_and_clear();
    Ok(people)
}

/// Serializes records as a JSON array indented with four spaces.
pub fn to_pretty_json(people: &[Person]) -> Result<Vec<u8>> {
    let mut buffer = Vec::with_capacity(people.len() * 200 + 2);
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    people
        .serialize(&mut serializer)
        .context("Could not serialize person records")?;
    Ok(buffer)
}

fn progress_bar(count: usize) -> ProgressBar {
    let progress = ProgressBar::new(count as u64);
    if let Ok(style) =
        ProgressStyle::with_template("{spinner} [{elapsed_precise}] {bar:40} {pos}/{len} records")
    {
        progress.set_style(style);
    }
    progress
}

/// Generates `count` records and overwrites the samples file at `path`.
pub async fn create_samples(path: &Path, count: i64, seed: Option<u64>) -> Result<usize> {
    tracing::info!("Creating samples file {}", path.display());

    let start = std::time::Instant::now();

    let count = normalize_count(count);
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    let today = Local::now().date_naive();
    let people = generate_people(&mut rng, count, today, &progress_bar(count))?;

    let json = to_pretty_json(&people)?;

    let file = File::create(path)
        .await
        .with_context(|| format!("Could not create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(&json)
        .await
        .with_context(|| format!("Could not write {}", path.display()))?;
    writer.flush().await?;

    tracing::info!(
        "Samples file with {} records created in {:?}",
        people.len(),
        start.elapsed()
    );

    Ok(people.len())
}
