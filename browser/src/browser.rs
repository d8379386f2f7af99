//! In-memory state behind the page: the loaded profiles, the carousel
//! position and the notice waiting to be shown.

use std::sync::atomic::{AtomicBool, Ordering};

use common::{Profile, ScrapeResponse};
use scrape_client::ClientError;

pub const FETCH_FAILED: &str = "Failed to fetch profiles. Please try again.";
pub const SEARCH_IN_PROGRESS: &str = "A search is already in progress.";
pub const NOTHING_TO_EXPORT: &str = "No profiles to export.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// One-shot message shown on the next page render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct ProfileBrowser {
    profiles: Vec<Profile>,
    index: usize,
    notice: Option<Notice>,
    /// Search URL and limit of the last submission, echoed back into the form.
    last_url: String,
    last_limit: String,
}

impl ProfileBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&Profile> {
        self.profiles.get(self.index)
    }

    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.profiles.len()
    }

    pub fn previous(&mut self) {
        if self.has_previous() {
            self.index -= 1;
        }
    }

    pub fn next(&mut self) {
        if self.has_next() {
            self.index += 1;
        }
    }

    pub fn notify(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    pub fn remember_form(&mut self, url: &str, limit: &str) {
        self.last_url = url.to_string();
        self.last_limit = limit.to_string();
    }

    pub fn last_url(&self) -> &str {
        &self.last_url
    }

    pub fn last_limit(&self) -> &str {
        &self.last_limit
    }

    /// Applies the outcome of a scrape. Only a successful reply touches the
    /// profile list; failures leave it as it was and raise a notice.
    pub fn apply(&mut self, outcome: Result<ScrapeResponse, ClientError>) {
        match outcome {
            Ok(ScrapeResponse::Success { profile }) => {
                self.profiles = profile.into_vec();
                self.index = 0;
                tracing::info!(count = self.profiles.len(), "Loaded profiles");
            }
            Ok(ScrapeResponse::Failure { error }) => {
                tracing::warn!(%error, "Scraping service reported an error");
                // A blank message tells the user nothing
                if error.trim().is_empty() {
                    self.notify(Notice::error(FETCH_FAILED));
                } else {
                    self.notify(Notice::error(error));
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Scrape request failed");
                self.notify(Notice::error(FETCH_FAILED));
            }
        }
    }
}

/// Single-slot flag marking a scrape in flight.
#[derive(Debug, Default)]
pub struct InFlight(AtomicBool);

impl InFlight {
    pub fn is_active(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Claims the slot, or returns `None` if a scrape is already running.
    pub fn try_begin(&self) -> Option<InFlightGuard<'_>> {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlightGuard(&self.0))
    }
}

/// Releases the slot when dropped, including when the request is abandoned.
#[derive(Debug)]
pub struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
