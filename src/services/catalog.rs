//! src/services/catalog.rs
//!
//! CatalogClient: reads the gallery's photo records from a Directus
//! instance. One request per call: no retry, no cache, no timeout beyond the
//! transport defaults. Results come back newest first.

use crate::{
    config::RemoteConfig,
    models::photo::{FilesEnvelope, PhotoRecord},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Fields requested from `/files`; everything the gallery page displays.
const FILE_FIELDS: &str = "id,title,description,metadata,width,height";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("photo catalog unreachable: {0}")]
    Network(#[from] reqwest::Error),
    #[error("unexpected status code: {status}")]
    RemoteService { status: u16 },
    #[error("malformed catalog response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Client for the Directus `/files` listing of one folder.
///
/// Cheap to clone: the HTTP connection pool and the configuration are shared.
#[derive(Clone)]
pub struct CatalogClient {
    http: reqwest::Client,

    /// Read-only remote settings, also used to build asset URLs.
    pub remote: Arc<RemoteConfig>,
}

impl CatalogClient {
    pub fn new(remote: Arc<RemoteConfig>) -> Self {
        Self::with_client(reqwest::Client::new(), remote)
    }

    /// Reuse an existing [`reqwest::Client`] and its connection pool.
    pub fn with_client(http: reqwest::Client, remote: Arc<RemoteConfig>) -> Self {
        Self { http, remote }
    }

    /// The listing URL for the configured folder.
    pub fn files_url(&self) -> String {
        format!(
            "{}/files?fields={}&filter[folder][_eq]={}",
            self.remote.host, FILE_FIELDS, self.remote.folder_id
        )
    }

    /// Fetch every photo in the folder, sorted newest first.
    pub async fn fetch_photos(&self) -> CatalogResult<Vec<PhotoRecord>> {
        let url = self.files_url();
        debug!("Fetching photo catalog from {}", url);

        let mut request = self.http.get(&url);
        if let Some(token) = &self.remote.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::RemoteService {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let envelope: FilesEnvelope = serde_json::from_slice(&body)?;

        let mut photos = envelope.data;
        sort_newest_first(&mut photos);
        debug!("Fetched {} photos", photos.len());

        Ok(photos)
    }
}

/// Stable sort by capture time, descending. Photos without a timestamp go last.
pub fn sort_newest_first(photos: &mut [PhotoRecord]) {
    photos.sort_by(|a, b| b.taken_at().cmp(&a.taken_at()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::photo::{ExposureInfo, Metadata};
    use chrono::DateTime;

    fn photo(id: &str, taken: Option<&str>) -> PhotoRecord {
        PhotoRecord {
            id: id.into(),
            metadata: Metadata {
                exposure: ExposureInfo {
                    date_time_original: taken
                        .map(|ts| DateTime::parse_from_rfc3339(ts).unwrap()),
                    ..ExposureInfo::default()
                },
                ..Metadata::default()
            },
            ..PhotoRecord::default()
        }
    }

    fn ids(photos: &[PhotoRecord]) -> Vec<&str> {
        photos.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn sorts_newest_first_with_undated_last() {
        let mut photos = vec![
            photo("undated", None),
            photo("2019", Some("2019-06-01T10:00:00Z")),
            photo("2023", Some("2023-01-01T10:00:00Z")),
            photo("2021", Some("2021-03-15T10:00:00Z")),
        ];

        sort_newest_first(&mut photos);

        assert_eq!(ids(&photos), vec!["2023", "2021", "2019", "undated"]);
    }

    #[test]
    fn compares_instants_across_offsets() {
        // 09:00-05:00 is 14:00Z, later than 12:00Z.
        let mut photos = vec![
            photo("utc-noon", Some("2022-08-01T12:00:00Z")),
            photo("eastern-nine", Some("2022-08-01T09:00:00-05:00")),
        ];

        sort_newest_first(&mut photos);

        assert_eq!(ids(&photos), vec!["eastern-nine", "utc-noon"]);
    }

    #[test]
    fn sort_is_stable_for_undated_photos() {
        let mut photos = vec![photo("a", None), photo("b", None), photo("c", None)];
        sort_newest_first(&mut photos);
        assert_eq!(ids(&photos), vec!["a", "b", "c"]);
    }

    #[test]
    fn files_url_filters_by_folder() {
        let client = CatalogClient::new(Arc::new(RemoteConfig {
            host: "https://cms.example".into(),
            folder_id: "f-123".into(),
            token: Some("secret".into()),
        }));

        let url = client.files_url();
        assert_eq!(
            url,
            "https://cms.example/files?fields=id,title,description,metadata,width,height&filter[folder][_eq]=f-123"
        );
        assert!(!url.contains("secret"));
    }
}
