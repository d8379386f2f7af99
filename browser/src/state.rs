use std::sync::Arc;

use scrape_client::ScrapeApi;
use tokio::sync::Mutex;

use crate::browser::{InFlight, ProfileBrowser};

/// Shared application state
pub struct AppState {
    pub browser: Mutex<ProfileBrowser>,
    pub in_flight: InFlight,
    pub api: Arc<dyn ScrapeApi>,
}

impl AppState {
    pub fn new(api: Arc<dyn ScrapeApi>) -> Self {
        Self {
            browser: Mutex::new(ProfileBrowser::new()),
            in_flight: InFlight::default(),
            api,
        }
    }
}
