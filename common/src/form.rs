use serde::Deserialize;
use thiserror::Error;

use crate::api::ScrapeRequest;

pub const DEFAULT_LIMIT: u8 = 1;
pub const MAX_LIMIT: u8 = 5;

/// Raw search form as posted by the page. Every field is kept as text so a
/// bad value becomes a notice instead of a rejected request.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct SearchForm {
    pub url: String,
    pub session_cookie: String,
    pub limit: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Please provide both the search URL and the session cookie.")]
    MissingField,
    #[error("Max profiles must be a whole number between 1 and 5.")]
    InvalidLimit,
}

impl SearchForm {
    /// Checks presence of the required fields and the profile count range.
    /// URL and cookie are forwarded untouched.
    pub fn validate(&self) -> Result<ScrapeRequest, FormError> {
        if self.url.trim().is_empty() || self.session_cookie.trim().is_empty() {
            return Err(FormError::MissingField);
        }

        let limit = match self.limit.trim() {
            "" => DEFAULT_LIMIT,
            raw => raw.parse::<u8>().map_err(|_| FormError::InvalidLimit)?,
        };
        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(FormError::InvalidLimit);
        }

        Ok(ScrapeRequest {
            url: self.url.clone(),
            session_cookie: self.session_cookie.clone(),
            limit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(url: &str, cookie: &str, limit: &str) -> SearchForm {
        SearchForm {
            url: url.into(),
            session_cookie: cookie.into(),
            limit: limit.into(),
        }
    }

    #[test]
    fn test_missing_url_or_cookie() {
        assert_eq!(form("", "cookie", "1").validate(), Err(FormError::MissingField));
        assert_eq!(form("https://x", "", "1").validate(), Err(FormError::MissingField));
        assert_eq!(form("   ", "cookie", "1").validate(), Err(FormError::MissingField));
    }

    #[test]
    fn test_limit_defaults_to_one() {
        let request = form("https://x", "cookie", "").validate().unwrap();
        assert_eq!(request.limit, 1);
    }

    #[test]
    fn test_limit_out_of_range() {
        assert_eq!(form("https://x", "c", "0").validate(), Err(FormError::InvalidLimit));
        assert_eq!(form("https://x", "c", "6").validate(), Err(FormError::InvalidLimit));
        assert_eq!(form("https://x", "c", "-1").validate(), Err(FormError::InvalidLimit));
        assert_eq!(form("https://x", "c", "two").validate(), Err(FormError::InvalidLimit));
    }

    #[test]
    fn test_valid_form_forwards_values_verbatim() {
        let request = form("https://www.linkedin.com/search", " li_at=abc ", " 5 ")
            .validate()
            .unwrap();

        assert_eq!(request.url, "https://www.linkedin.com/search");
        assert_eq!(request.session_cookie, " li_at=abc ");
        assert_eq!(request.limit, 5);
    }
}
