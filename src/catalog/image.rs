//! Rewrites file-hosting sharing links into links that can be used directly
//! as an image source.

use crate::catalog::config::DEFAULT_SHARING_HOST;

const PATH_MARKER: &str = "/file/d/";
const QUERY_MARKER: &str = "id=";

/// Normalizer bound to a single sharing host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageNormalizer {
    sharing_host: String,
}

impl Default for ImageNormalizer {
    fn default() -> Self {
        Self::new(DEFAULT_SHARING_HOST)
    }
}

impl ImageNormalizer {
    pub fn new(sharing_host: impl Into<String>) -> Self {
        Self {
            sharing_host: sharing_host.into(),
        }
    }

    pub fn sharing_host(&self) -> &str {
        &self.sharing_host
    }

    /// Returns the direct-view form of `link`, or `link` itself when it is
    /// not a sharing link or no file identifier can be found.
    pub fn normalize(&self, link: &str) -> String {
        if self.sharing_host.is_empty() || !link.contains(self.sharing_host.as_str()) {
            return link.to_string();
        }

        match extract_file_id(link) {
            Some(file_id) => format!(
                "https://{}/uc?export=view&id={file_id}",
                self.sharing_host
            ),
            None => {
                tracing::debug!(link, "could not extract file id from sharing link");
                link.to_string()
            }
        }
    }
}

/// Normalizes `link` against the default sharing host.
pub fn normalize_image_url(link: &str) -> String {
    ImageNormalizer::default().normalize(link)
}

fn extract_file_id(link: &str) -> Option<&str> {
    path_file_id(link).or_else(|| query_file_id(link))
}

fn path_file_id(link: &str) -> Option<&str> {
    link.match_indices(PATH_MARKER).find_map(|(start, _)| {
        let rest = &link[start + PATH_MARKER.len()..];
        let end = rest.find(['/', '?', '&', '#']).unwrap_or(rest.len());
        non_empty(&rest[..end])
    })
}

fn query_file_id(link: &str) -> Option<&str> {
    link.match_indices(QUERY_MARKER).find_map(|(start, _)| {
        let rest = &link[start + QUERY_MARKER.len()..];
        let end = rest.find('&').unwrap_or(rest.len());
        non_empty(&rest[..end])
    })
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() { None } else { Some(value) }
}
