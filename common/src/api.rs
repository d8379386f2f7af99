//! Wire types for the remote scraping endpoint.

use serde::{Deserialize, Serialize};

use crate::profile::Profile;

/// Path of the scrape endpoint, relative to the service base URL.
pub const SCRAPE_PATH: &str = "/linkedin/scrape_by_url";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ScrapeRequest {
    pub url: String,
    pub session_cookie: String,
    pub limit: u8,
}

/// Reply of the scraping service. An `error` field wins over everything else.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum ScrapeResponse {
    Failure { error: String },
    Success { profile: OneOrMany<Profile> },
}

/// The service answers with a bare object when a single profile was scraped.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}
