// API client module: contains a small blocking HTTP client that talks to
// the invoice extraction service. It is intentionally small and synchronous
// so one submission is in flight at a time.

use anyhow::{Context, Result};
use reqwest::blocking::{multipart, Client};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

/// Message rendered when the server reports a failure without saying why.
pub const FALLBACK_ERROR: &str = "Failed to process invoice";

/// Simple API client that holds a reqwest blocking client and the base URL
/// of the extraction service.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

/// Response shape of the `/upload` endpoint. Successful extractions arrive
/// as `{"success": true, "data": {...}}`; failures carry an `error` message
/// either in the same envelope or, for rejected requests (bad file type,
/// missing part), in a bare `{"error": "..."}` body with a non-2xx status.
/// `data` stays a `serde_json::Value` because the extracted fields depend on
/// the invoice and are rendered as-is rather than interpreted.
#[derive(Serialize, Deserialize, Debug)]
pub struct UploadEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiClient {
    /// Create an ApiClient configured from the environment variable
    /// `INVOICE_API_URL` or fallback to `http://localhost:5000`.
    pub fn from_env() -> Result<Self> {
        let base_url =
            std::env::var("INVOICE_API_URL").unwrap_or_else(|_| "http://localhost:5000".into());
        Self::new(base_url)
    }

    /// Create an ApiClient pointed at an explicit base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ApiClient {
            client,
            base_url: base_url.into(),
        })
    }

    /// Upload one invoice file as multipart/form-data to `/upload` and
    /// return the extracted-data object. The file goes under the part name
    /// `file` with its original filename and a MIME type inferred from the
    /// extension. Any failure (unreadable file, network error, unparsable
    /// body, or a server-reported error) comes back as an `anyhow` error
    /// whose message is suitable for inline display.
    pub fn upload_invoice(&self, file_path: &Path) -> Result<serde_json::Value> {
        let url = format!("{}/upload", &self.base_url);

        let file = File::open(file_path)
            .with_context(|| format!("Failed to open {}", file_path.display()))?;
        let file_name = file_path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("invoice")
            .to_string();

        let part = multipart::Part::reader(file)
            .file_name(file_name)
            .mime_str(mime_for_path(file_path))
            .context("Invalid mime type for upload part")?;
        let form = multipart::Form::new().part("file", part);

        let res = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .context("Failed to send upload request")?;

        // The body is decoded before the status check so that a malformed
        // body surfaces the decoder's message on any status.
        let status = res.status();
        let envelope: UploadEnvelope = res.json().context("Parsing upload response json")?;

        if !status.is_success() || !envelope.success {
            anyhow::bail!("{}", envelope.error.as_deref().unwrap_or(FALLBACK_ERROR));
        }
        envelope
            .data
            .ok_or_else(|| anyhow::anyhow!("{}", FALLBACK_ERROR))
    }
}

/// MIME type for an upload, inferred from the file extension. Covers the
/// types the service accepts; anything else is sent as an opaque blob and
/// left for the server to reject.
fn mime_for_path(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    }
}
