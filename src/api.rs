// API client module: contains a small blocking HTTP client that talks to
// the style-extraction service. It is intentionally small and synchronous;
// the tool sends one request per run and waits for the answer.

use anyhow::{Context, Result};
use reqwest::blocking::{multipart, Client};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// MIME type for .docx payloads. The service only accepts Word documents,
/// so both parts are labelled with it unconditionally.
const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// The service stores the second upload under this name no matter where the
/// file came from on disk (target files normally sit in `uploads/` under a
/// UUID file name).
const TARGET_UPLOAD_NAME: &str = "target.docx";

/// Simple API client that holds a reqwest blocking client and the base URL
/// of the style-extraction service.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

/// Top-level shape of the dual-upload response. Every field is optional:
/// the service omits keys rather than sending nulls, and the report layer
/// needs to see that absence to print its placeholders.
#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub session_id: Option<String>,
    pub style_extraction: Option<StyleExtraction>,
}

/// Style-extraction result as reported by the service. The two style
/// sections stay untyped maps because the report has to distinguish a key
/// that is missing from one that is present with an empty object, and the
/// service is free to add attributes we do not know about yet.
#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct StyleExtraction {
    pub success: Option<bool>,
    pub confidence: Option<Number>,
    pub raw_docx_styles: Option<Map<String, Value>>,
    pub simplified_styles: Option<Map<String, Value>>,
}

impl ApiClient {
    /// Create an ApiClient against an explicit base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ApiClient {
            client,
            base_url: base_url.into(),
        })
    }

    /// Create an ApiClient configured from the environment variable
    /// `API_GATEWAY_URL` or fallback to `http://localhost:3001`.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("API_GATEWAY_URL")
            .unwrap_or_else(|_| "http://localhost:3001".into());
        Self::new(base_url)
    }

    /// Upload a reference/target document pair using multipart/form-data
    /// and decode the service's JSON reply.
    ///
    /// The reference part keeps the file name from its path; the target
    /// part is always presented as `target.docx`. Both files are moved into
    /// the form body, so their handles are closed exactly once when the
    /// request is done, success or not.
    pub fn upload_dual(&self, reference: &Path, target: &Path) -> Result<UploadResponse> {
        let url = format!("{}/api/dual/upload-dual", &self.base_url);

        let reference_file = File::open(reference).with_context(|| {
            format!("Failed to open reference document {}", reference.display())
        })?;
        let reference_name = reference
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("reference.docx")
            .to_string();
        let reference_part = multipart::Part::reader(reference_file)
            .file_name(reference_name)
            .mime_str(DOCX_MIME)
            .context("Building reference document part")?;

        let target_file = File::open(target)
            .with_context(|| format!("Failed to open target document {}", target.display()))?;
        let target_part = multipart::Part::reader(target_file)
            .file_name(TARGET_UPLOAD_NAME)
            .mime_str(DOCX_MIME)
            .context("Building target document part")?;

        let form = multipart::Form::new()
            .part("referenceDocument", reference_part)
            .part("targetDocument", target_part);

        debug!(%url, "sending dual upload");
        let res = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .context("Failed to send upload request")?;
        debug!(status = %res.status(), "dual upload answered");

        if !res.status().is_success() {
            let status = res.status();
            let txt = res.text().unwrap_or_else(|_| "".into());
            anyhow::bail!("Upload failed: {} - {}", status, txt);
        }
        let resp: UploadResponse = res.json().context("Parsing upload response json")?;
        Ok(resp)
    }
}
