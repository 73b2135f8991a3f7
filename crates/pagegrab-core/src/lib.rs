pub mod config;
pub mod logging;

pub mod checksum;
pub mod error;
pub mod fetcher;
pub mod naming;
pub mod transport;
pub mod url_model;

pub use config::PageGrabConfig;
pub use error::FetchError;
pub use fetcher::{fetch_and_save, run_once, PageFetcher, SavedPage};
pub use transport::FetchOptions;
