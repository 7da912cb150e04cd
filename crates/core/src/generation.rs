//! Child-generation constants, validation, and pure helper functions.
//!
//! Provides media-kind validation, relative-to-absolute photo URL
//! resolution, file-extension derivation for downloaded artifacts, and
//! artifact file naming.

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Model constants
// ---------------------------------------------------------------------------

/// Replicate model used for child face synthesis.
pub const GENERATION_MODEL: &str = "easel/ai-avatars";

/// Prompt used when the caller does not supply one.
pub const DEFAULT_PROMPT: &str =
    "a realistic child portrait, natural lighting, high quality photo";

/// Gender parameter sent with every synthesis call. Generated children are
/// always requested gender-neutral regardless of parent profiles.
pub const GENDER_NEUTRAL: &str = "neutral";

// ---------------------------------------------------------------------------
// Media kind constants
// ---------------------------------------------------------------------------

/// Photograph media entry; the only kind eligible as generation input.
pub const MEDIA_PHOTO: &str = "photo";
/// Video media entry; never used as generation input.
pub const MEDIA_VIDEO: &str = "video";

/// All valid media kinds.
pub const VALID_MEDIA_TYPES: &[&str] = &[MEDIA_PHOTO, MEDIA_VIDEO];

/// URL prefix under which stored files are served.
pub const UPLOADS_URL_PREFIX: &str = "/uploads";

/// Fallback extension when a remote URL has none in its path.
pub const DEFAULT_ARTIFACT_EXT: &str = ".jpg";

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate that a media kind string is one of the known kinds.
pub fn validate_media_type(mt: &str) -> Result<(), CoreError> {
    if VALID_MEDIA_TYPES.contains(&mt) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown media type: '{mt}'. Valid types: {}",
            VALID_MEDIA_TYPES.join(", ")
        )))
    }
}

// ---------------------------------------------------------------------------
// URL resolution
// ---------------------------------------------------------------------------

/// Resolve a stored file path to an absolute URL.
///
/// Stored paths are usually root-relative (`/uploads/a.jpg`) and get the
/// configured base URL prefixed. Values that already carry an `http`
/// scheme pass through unchanged.
pub fn to_absolute_url(base_url: &str, file_path: &str) -> String {
    if file_path.starts_with("http") {
        file_path.to_string()
    } else {
        format!("{base_url}{file_path}")
    }
}

// ---------------------------------------------------------------------------
// Artifact naming
// ---------------------------------------------------------------------------

/// Derive a file extension (including the dot) from a URL's path component.
///
/// Strips query parameters and fragments, then looks at the last path
/// segment. Falls back to [`DEFAULT_ARTIFACT_EXT`] when the segment has no
/// extension.
pub fn extension_from_url(url: &str) -> String {
    // Strip query string and fragment.
    let clean = url.split('?').next().unwrap_or(url);
    let clean = clean.split('#').next().unwrap_or(clean);

    // Strip scheme and domain to get the path only.
    let path = if let Some(rest) = clean
        .strip_prefix("https://")
        .or_else(|| clean.strip_prefix("http://"))
    {
        rest.find('/').map(|i| &rest[i..]).unwrap_or("")
    } else {
        clean
    };

    let segment = path.rsplit('/').next().unwrap_or("");
    match segment.rfind('.') {
        Some(i) if i > 0 && i < segment.len() - 1 => segment[i..].to_string(),
        _ => DEFAULT_ARTIFACT_EXT.to_string(),
    }
}

/// Build the storage file name for a downloaded artifact.
///
/// The child id plus a millisecond timestamp keeps concurrent downloads
/// for different calls from colliding.
pub fn artifact_file_name(child_id: DbId, timestamp_millis: i64, ext: &str) -> String {
    format!("child-{child_id}-{timestamp_millis}{ext}")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
