//! Artifact fetching: download a generated image into durable local storage.

use std::path::Path;

use futures::StreamExt;
use tokio::io::AsyncWriteExt;

use tamagochi_core::generation::{artifact_file_name, extension_from_url, UPLOADS_URL_PREFIX};
use tamagochi_core::types::DbId;

use crate::error::PipelineError;

/// Download a remote image and store it under the uploads directory.
///
/// The storage root is created on demand. The file name combines the child
/// id with a millisecond timestamp so concurrent calls cannot collide. On
/// any error during the streamed write the partial file is removed before
/// the error propagates. Returns the root-relative serving path
/// (`/uploads/{file}`), not the filesystem path.
pub async fn fetch_and_store(
    client: &reqwest::Client,
    image_url: &str,
    child_id: DbId,
    uploads_dir: &Path,
) -> Result<String, PipelineError> {
    tokio::fs::create_dir_all(uploads_dir).await?;

    let ext = extension_from_url(image_url);
    let file_name = artifact_file_name(child_id, chrono::Utc::now().timestamp_millis(), &ext);
    let file_path = uploads_dir.join(&file_name);

    let response = client.get(image_url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(PipelineError::Download {
            status: status.as_u16(),
            status_text: status
                .canonical_reason()
                .unwrap_or("Unknown Status")
                .to_string(),
        });
    }

    let mut file = tokio::fs::File::create(&file_path).await?;
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let result = match chunk {
            Ok(bytes) => file.write_all(&bytes).await.map_err(PipelineError::from),
            Err(e) => Err(PipelineError::from(e)),
        };
        if let Err(e) = result {
            drop(file);
            remove_partial(&file_path).await;
            return Err(e);
        }
    }

    if let Err(e) = file.flush().await {
        drop(file);
        remove_partial(&file_path).await;
        return Err(e.into());
    }

    Ok(format!("{UPLOADS_URL_PREFIX}/{file_name}"))
}

/// Best-effort removal of a partially written file.
async fn remove_partial(path: &Path) {
    if let Err(e) = tokio::fs::remove_file(path).await {
        tracing::warn!(path = %path.display(), error = %e, "Failed to remove partial download");
    }
}
