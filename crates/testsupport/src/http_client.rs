use anyhow::Result;
use iptv_models::Manifest;
use reqwest::Client;
use serde_json::Value;

use crate::daemon::TestDaemon;

pub struct AddonClient {
    client: Client,
    base_url: String,
}

impl AddonClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub async fn manifest(&self) -> Result<Manifest> {
        let response = self
            .client
            .get(format!("{}/manifest.json", self.base_url))
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await?;
            anyhow::bail!("Manifest request failed: {}", error_text);
        }

        Ok(response.json().await?)
    }

    pub async fn manifest_with_creds(&self, mfp: &str, psw: &str) -> Result<Manifest> {
        let response = self
            .client
            .get(format!("{}/mfp/{}/psw/{}/manifest.json", self.base_url, mfp, psw))
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await?;
            anyhow::bail!("Manifest request failed: {}", error_text);
        }

        Ok(response.json().await?)
    }

    pub async fn catalog(&self, mfp: &str, psw: &str, genre: &str) -> Result<Value> {
        let response = self
            .client
            .get(format!(
                "{}/mfp/{}/psw/{}/catalog/tv/mediaflow-{}.json",
                self.base_url, mfp, psw, genre
            ))
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await?;
            anyhow::bail!("Catalog request failed: {}", error_text);
        }

        Ok(response.json().await?)
    }

    pub async fn stream(&self, mfp: &str, psw: &str, id: &str) -> Result<Value> {
        let response = self
            .client
            .get(format!(
                "{}/mfp/{}/psw/{}/stream/tv/{}.json",
                self.base_url, mfp, psw, id
            ))
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await?;
            anyhow::bail!("Stream request failed: {}", error_text);
        }

        Ok(response.json().await?)
    }

    pub async fn healthz(&self) -> Result<String> {
        Ok(self
            .client
            .get(format!("{}/healthz", self.base_url))
            .send()
            .await?
            .text()
            .await?)
    }

    pub async fn metrics(&self) -> Result<String> {
        Ok(self
            .client
            .get(format!("{}/metrics", self.base_url))
            .send()
            .await?
            .text()
            .await?)
    }
}

// Convenience functions for tests
pub async fn manifest(daemon: &TestDaemon) -> Result<Manifest> {
    AddonClient::new(daemon.base_url.clone()).manifest().await
}

pub async fn catalog(daemon: &TestDaemon, mfp: &str, psw: &str, genre: &str) -> Result<Value> {
    AddonClient::new(daemon.base_url.clone())
        .catalog(mfp, psw, genre)
        .await
}
