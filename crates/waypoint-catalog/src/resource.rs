//! Catalog endpoints
//!
//! ```text
//! /movie/popular   /movie/{id}
//! /tv/popular      /tv/{id}
//! /person/popular  /person/{id}
//! ```
//! Every request carries `api_key` and `language`; list endpoints add `page`.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::FetchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "resource", rename_all = "camelCase")]
pub enum Resource {
    PopularMovies { page: u32 },
    MovieDetail { id: i64 },
    PopularTvShows { page: u32 },
    TvShowDetail { id: i64 },
    PopularPeople { page: u32 },
    PersonDetail { id: i64 },
}

impl Resource {
    pub fn path(&self) -> String {
        match self {
            Resource::PopularMovies { .. } => "/movie/popular".to_string(),
            Resource::MovieDetail { id } => format!("/movie/{}", id),
            Resource::PopularTvShows { .. } => "/tv/popular".to_string(),
            Resource::TvShowDetail { id } => format!("/tv/{}", id),
            Resource::PopularPeople { .. } => "/person/popular".to_string(),
            Resource::PersonDetail { id } => format!("/person/{}", id),
        }
    }

    /// Page number for list endpoints
    pub fn page(&self) -> Option<u32> {
        match self {
            Resource::PopularMovies { page }
            | Resource::PopularTvShows { page }
            | Resource::PopularPeople { page } => Some(*page),
            Resource::MovieDetail { .. }
            | Resource::TvShowDetail { .. }
            | Resource::PersonDetail { .. } => None,
        }
    }

    /// Build the full request URL
    pub fn url(&self, base_url: &str, api_key: &str, language: &str) -> Result<Url, FetchError> {
        let raw = format!("{}{}", base_url.trim_end_matches('/'), self.path());
        let mut url = Url::parse(&raw).map_err(|e| FetchError::InvalidRequest(e.to_string()))?;

        if url.cannot_be_a_base() {
            return Err(FetchError::InvalidRequest(raw));
        }

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("api_key", api_key);
            query.append_pair("language", language);
            if let Some(page) = self.page() {
                query.append_pair("page", &page.to_string());
            }
        }

        Ok(url)
    }
}

/// Envelope of every paged list response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub page: u32,
    pub results: Vec<T>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

impl<T> Page<T> {
    pub fn has_more(&self) -> bool {
        self.page < self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(Resource::PopularMovies { page: 1 }.path(), "/movie/popular");
        assert_eq!(Resource::MovieDetail { id: 550 }.path(), "/movie/550");
        assert_eq!(Resource::TvShowDetail { id: 1399 }.path(), "/tv/1399");
        assert_eq!(Resource::PersonDetail { id: 287 }.path(), "/person/287");
    }

    #[test]
    fn test_list_url_has_page() {
        let url = Resource::PopularPeople { page: 3 }
            .url("https://api.themoviedb.org/3/", "key", "en-US")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.themoviedb.org/3/person/popular?api_key=key&language=en-US&page=3"
        );
    }

    #[test]
    fn test_detail_url_has_no_page() {
        let url = Resource::MovieDetail { id: 550 }
            .url("https://api.themoviedb.org/3", "key", "tr-TR")
            .unwrap();
        assert_eq!(url.path(), "/3/movie/550");
        assert!(!url.query_pairs().any(|(k, _)| k == "page"));
    }

    #[test]
    fn test_bad_base_url() {
        let err = Resource::MovieDetail { id: 1 }
            .url("not a base", "key", "en-US")
            .unwrap_err();
        assert!(matches!(err, FetchError::InvalidRequest(_)));
    }

    #[test]
    fn test_page_has_more() {
        let page: Page<u32> = Page {
            page: 1,
            results: vec![1, 2],
            total_pages: 2,
            total_results: 4,
        };
        assert!(page.has_more());
    }
}
