use std::path::PathBuf;

use anyhow::{Context, Result};
use futures::future::try_join_all;
use serde::Deserialize;
use serde_json::json;

use crate::cli::OutputFormat;
use crate::database::manager::DatabaseManager;
use crate::database::migrations;
use crate::database::models::industry::{self, IndustryInput};
use crate::database::models::job::{self, JobInput};
use crate::database::models::product::{self, ProductInput};
use crate::database::models::training::{self, TrainingInput};

/// YAML content pack: any of the four collections may be present.
#[derive(Debug, Default, Deserialize)]
pub struct SeedFile {
    #[serde(default)]
    pub products: Vec<ProductInput>,
    #[serde(default)]
    pub industries: Vec<IndustryInput>,
    #[serde(default)]
    pub trainings: Vec<TrainingInput>,
    #[serde(default)]
    pub jobs: Vec<JobInput>,
}

pub async fn handle(file: PathBuf, output: OutputFormat) -> Result<()> {
    let raw = std::fs::read_to_string(&file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let seed: SeedFile = serde_yaml::from_str(&raw).context("invalid seed file")?;

    let pool = DatabaseManager::pool().await?;
    migrations::ensure_schema(&pool).await?;

    let products = try_join_all(seed.products.iter().map(|input| product::insert(&pool, input))).await?;
    let industries =
        try_join_all(seed.industries.iter().map(|input| industry::insert(&pool, input))).await?;
    let trainings =
        try_join_all(seed.trainings.iter().map(|input| training::insert(&pool, input))).await?;
    let jobs = try_join_all(seed.jobs.iter().map(|input| job::insert(&pool, input))).await?;

    match output {
        OutputFormat::Json => println!(
            "{}",
            json!({
                "seeded": {
                    "products": products.len(),
                    "industries": industries.len(),
                    "trainings": trainings.len(),
                    "jobs": jobs.len(),
                }
            })
        ),
        OutputFormat::Text => println!(
            "Seeded {} products, {} industries, {} trainings, {} jobs",
            products.len(),
            industries.len(),
            trainings.len(),
            jobs.len()
        ),
    }

    Ok(())
}
