//! Registry fetching.
//!
//! One GET per source over the shared client. Failure is transport-level and
//! fatal to the run; the fetch has no local side effects and may be repeated
//! freely.

use log::{debug, info};

use crate::error_handling::FetchError;
use crate::sources::SourceDescriptor;

/// Fetches the full decoded text of one registry source.
///
/// Requires a success status and strictly valid UTF-8 content; anything else
/// maps to a [`FetchError`] carrying the source name and URL.
///
/// # Errors
///
/// Returns `FetchError::Transport` on connection, timeout or body-read
/// failure, `FetchError::Status` on a non-success HTTP status, and
/// `FetchError::Decode` if the body is not valid UTF-8.
pub async fn fetch_source(
    client: &reqwest::Client,
    source: &SourceDescriptor,
) -> Result<String, FetchError> {
    debug!("fetching {} from {}", source.name, source.url);

    let response = client
        .get(source.url.clone())
        .send()
        .await
        .map_err(|cause| FetchError::Transport {
            registry: source.name.to_string(),
            url: source.url.to_string(),
            cause,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            registry: source.name.to_string(),
            url: source.url.to_string(),
            status: status.as_u16(),
        });
    }

    let bytes = response.bytes().await.map_err(|cause| FetchError::Transport {
        registry: source.name.to_string(),
        url: source.url.to_string(),
        cause,
    })?;

    let text = String::from_utf8(bytes.to_vec()).map_err(|cause| FetchError::Decode {
        registry: source.name.to_string(),
        url: source.url.to_string(),
        cause,
    })?;

    info!("{}: fetched {} bytes", source.name, text.len());
    Ok(text)
}
