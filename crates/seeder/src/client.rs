use std::time::Duration;

use anyhow::{Context, Result};
use firedoc::Document;
use reqwest::blocking::Client;

/// Thin wrapper over the Firestore REST `documents` endpoint.
pub struct SeedClient {
    http: Client,
    base_url: String,
}

impl SeedClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Issues one PATCH for `collection/doc_id` and reports the outcome.
    ///
    /// Returns whether the write landed. A non-success status or a
    /// transport failure is printed with the response body (or error) and
    /// swallowed, so a single bad write never aborts the run. There is no
    /// retry and no rollback of earlier writes.
    pub fn patch_document(&self, collection: &str, doc_id: &str, doc: &Document) -> bool {
        let url = format!("{}/{}/{}", self.base_url, collection, doc_id);
        let response = match self.http.patch(&url).json(doc).send() {
            Ok(r) => r,
            Err(e) => {
                println!("[ERROR] Failed to add {}/{}: {}", collection, doc_id, e);
                return false;
            }
        };

        if response.status().is_success() {
            println!("[OK] Added {}/{}", collection, doc_id);
            true
        } else {
            let body = response.text().unwrap_or_default();
            println!("[ERROR] Failed to add {}/{}: {}", collection, doc_id, body);
            false
        }
    }
}
