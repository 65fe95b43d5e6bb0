//! The network boundary: one multipart POST per submission attempt.

use reqwest::multipart::{Form, Part};

use crate::models::Report;

/// Terminal result of one upload attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum UploadOutcome {
    /// The server answered with a success status.
    Accepted,
    /// The server answered with the given non-success status.
    Rejected(u16),
    /// The request never completed (file, connection, or protocol failure).
    Failed(String),
}

/// Post one report to `endpoint` as a multipart form.
///
/// The body carries the parts `image` (binary, filename `photo.jpg`,
/// content type `image/jpeg`), `latitude`, `longitude`, and
/// `description`. Exactly one request is issued per call; there are no
/// retries. Failures are folded into [`UploadOutcome`] so the result
/// can be handed straight back to the submission flow.
pub async fn submit_report(
    client: reqwest::Client,
    endpoint: String,
    report: Report,
) -> UploadOutcome {
    let path = report
        .photo
        .strip_prefix("file://")
        .unwrap_or(&report.photo);
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) => {
            log::error!("could not read photo {path}: {err}");
            return UploadOutcome::Failed(err.to_string());
        }
    };

    let image = match Part::bytes(bytes)
        .file_name("photo.jpg")
        .mime_str("image/jpeg")
    {
        Ok(part) => part,
        Err(err) => {
            log::error!("could not assemble image part: {err}");
            return UploadOutcome::Failed(err.to_string());
        }
    };
    let form = Form::new()
        .part("image", image)
        .text("latitude", report.position.latitude.to_string())
        .text("longitude", report.position.longitude.to_string())
        .text("description", report.description);

    match client.post(&endpoint).multipart(form).send().await {
        Ok(response) if response.status().is_success() => UploadOutcome::Accepted,
        Ok(response) => {
            let status = response.status().as_u16();
            log::warn!("upload rejected by {endpoint}: HTTP {status}");
            UploadOutcome::Rejected(status)
        }
        Err(err) => {
            log::error!("upload to {endpoint} failed: {err}");
            UploadOutcome::Failed(err.to_string())
        }
    }
}
