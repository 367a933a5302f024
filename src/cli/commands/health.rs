use anyhow::{Context, Result};
use serde_json::json;

use crate::cli::OutputFormat;

pub async fn handle(url: String, output: OutputFormat) -> Result<()> {
    let endpoint = format!("{}/health", url.trim_end_matches('/'));
    let response = reqwest::get(&endpoint)
        .await
        .with_context(|| format!("failed to reach {}", endpoint))?;

    let status = response.status();
    let body: serde_json::Value = response.json().await.unwrap_or(json!({}));

    match output {
        OutputFormat::Json => println!(
            "{}",
            json!({ "status": status.as_u16(), "body": body })
        ),
        OutputFormat::Text => {
            println!("{} -> {}", endpoint, status);
            if let Some(state) = body.pointer("/data/status").and_then(|v| v.as_str()) {
                println!("server reports: {}", state);
            }
        }
    }

    if status.is_success() {
        Ok(())
    } else {
        anyhow::bail!("server is unhealthy ({})", status)
    }
}
