use reqwest::Client;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::config;

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("Media host credentials are not configured")]
    NotConfigured,

    #[error("Invalid upload payload: {0}")]
    InvalidPayload(String),

    #[error("Upload rejected by media host: {0}")]
    Upload(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Client for the third-party media host holding resume files. Uploads are
/// signed form POSTs; the caller stores only the returned URL.
pub struct MediaClient {
    cloud_name: String,
    api_key: String,
    api_secret: String,
    folder: String,
    http: Client,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
}

impl MediaClient {
    /// Build a client from configuration. Returns NotConfigured when any of
    /// the three credentials is absent, so callers can degrade to 503
    /// without taking the rest of the API down.
    pub fn from_config() -> Result<Self, MediaError> {
        let media = &config::config().media;
        match (&media.cloud_name, &media.api_key, &media.api_secret) {
            (Some(cloud_name), Some(api_key), Some(api_secret)) => Ok(Self {
                cloud_name: cloud_name.clone(),
                api_key: api_key.clone(),
                api_secret: api_secret.clone(),
                folder: media.upload_folder.clone(),
                http: Client::new(),
            }),
            _ => Err(MediaError::NotConfigured),
        }
    }

    /// Upload a resume supplied as a data URI and return its hosted URL.
    pub async fn upload_resume(
        &self,
        data_uri: &str,
        filename: &str,
    ) -> Result<String, MediaError> {
        if !data_uri.starts_with("data:") {
            return Err(MediaError::InvalidPayload(
                "resume content must be a data URI".to_string(),
            ));
        }

        let timestamp = chrono::Utc::now().timestamp().to_string();
        let public_id = sanitize_public_id(filename);
        let signature = self.signature(&[
            ("folder", &self.folder),
            ("public_id", &public_id),
            ("timestamp", &timestamp),
        ]);

        let endpoint = format!(
            "https://api.cloudinary.com/v1_1/{}/raw/upload",
            self.cloud_name
        );
        let params = [
            ("file", data_uri),
            ("api_key", self.api_key.as_str()),
            ("timestamp", timestamp.as_str()),
            ("folder", self.folder.as_str()),
            ("public_id", public_id.as_str()),
            ("signature", signature.as_str()),
            ("signature_algorithm", "sha256"),
        ];

        let response = self.http.post(&endpoint).form(&params).send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(MediaError::Upload(format!("{}: {}", status, body)));
        }

        let body: UploadResponse = response.json().await?;
        Ok(body.secure_url)
    }

    /// Request signature: SHA-256 over the sorted `key=value` parameter
    /// string with the API secret appended.
    fn signature(&self, params: &[(&str, &str)]) -> String {
        let mut sorted: Vec<&(&str, &str)> = params.iter().collect();
        sorted.sort();

        let joined = sorted
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join("&");

        let mut hasher = Sha256::new();
        hasher.update(joined.as_bytes());
        hasher.update(self.api_secret.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

/// Reduce a client-supplied filename to a safe public id.
fn sanitize_public_id(filename: &str) -> String {
    let cleaned: String = filename
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.is_empty() {
        "resume".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> MediaClient {
        MediaClient {
            cloud_name: "norfab".to_string(),
            api_key: "key".to_string(),
            api_secret: "secret".to_string(),
            folder: "resumes".to_string(),
            http: Client::new(),
        }
    }

    #[test]
    fn signature_is_over_sorted_params_plus_secret() {
        let client = client();
        let signature = client.signature(&[("timestamp", "100"), ("folder", "resumes")]);

        let mut hasher = Sha256::new();
        hasher.update(b"folder=resumes&timestamp=100");
        hasher.update(b"secret");
        let expected = format!("{:x}", hasher.finalize());

        assert_eq!(signature, expected);

        // order of the input slice must not matter
        let reversed = client.signature(&[("folder", "resumes"), ("timestamp", "100")]);
        assert_eq!(signature, reversed);
    }

    #[test]
    fn public_id_is_sanitized() {
        assert_eq!(sanitize_public_id("Jane Doe CV.pdf"), "Jane_Doe_CV.pdf");
        assert_eq!(sanitize_public_id("../../etc/passwd"), ".._.._etc_passwd");
        assert_eq!(sanitize_public_id(""), "resume");
    }
}
