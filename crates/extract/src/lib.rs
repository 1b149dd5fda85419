// ABOUTME: Main library entry point for the job-posting field extractor.
// ABOUTME: Re-exports the public API: Client, ClientBuilder, JobPosting, ScrapeError, Site.

//! joblens-extract - best-effort field extraction from job-posting pages.
//!
//! Given a posting URL, this crate fetches the page with a browser-like
//! request signature and runs one of four site strategies (LinkedIn,
//! Indeed, Glassdoor, generic fallback) over the raw markup. Extraction is
//! best-effort: unmatched fields stay empty and a fully empty record is a
//! normal outcome, not an error.
//!
//! # Example
//!
//! ```no_run
//! use joblens_extract::{Client, ScrapeError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ScrapeError> {
//!     let client = Client::builder().build();
//!     let record = client.extract("https://www.linkedin.com/jobs/view/123").await?;
//!     println!("{} at {}", record.position, record.company);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod options;
pub mod resource;
pub mod result;
pub mod sites;

pub use crate::client::Client;
pub use crate::error::{ErrorCode, ScrapeError};
pub use crate::options::{ClientBuilder, Options, DEFAULT_USER_AGENT};
pub use crate::result::JobPosting;
pub use crate::sites::Site;
