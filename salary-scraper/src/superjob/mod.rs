pub mod scraper;
pub(crate) mod types;

pub use scraper::SuperJob;
