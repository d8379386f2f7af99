mod api;
mod form;
mod profile;

pub use api::{OneOrMany, SCRAPE_PATH, ScrapeRequest, ScrapeResponse};
pub use form::{DEFAULT_LIMIT, FormError, MAX_LIMIT, SearchForm};
pub use profile::{CategoryScore, Education, Evaluation, Experience, Profile, Role, Tenure};
