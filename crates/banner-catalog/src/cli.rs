use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use url::Url;

use banner_common::http::SessionClientConfig;

use crate::enrich::EnrichConfig;
use crate::fetch::FetchConfig;
use crate::term::TermCode;

pub const DEFAULT_BASE_URL: &str =
    "https://studentregistration.swarthmore.edu/StudentRegistrationSsb/ssb/";

/// Scrapes a term's course catalog from a Banner self-service instance and
/// writes it to a JSON file.
#[derive(Debug, Parser)]
#[command(name = "banner-catalog", version, about)]
pub struct Cli {
    /// Semester label; "fall" selects the fall catalog, anything else spring
    #[arg(long)]
    pub semester: String,

    /// Four-digit academic year
    #[arg(long)]
    pub year: String,

    /// Output file for the assembled dataset
    #[arg(long, default_value = "courses.json")]
    pub out: PathBuf,

    /// Root of the StudentRegistrationSsb/ssb instance to scrape
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: Url,

    /// Courses per search request; the server caps pages at 500 rows
    #[arg(long, default_value_t = 500, value_parser = clap::value_parser!(u32).range(1..=500))]
    pub page_size: u32,

    /// Attempts per page offset before the run fails
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_attempts: u32,

    /// Seconds to wait before retrying a failed page fetch
    #[arg(long, default_value_t = 7)]
    pub retry_delay_secs: u64,

    /// Maximum concurrent description requests
    #[arg(long, default_value_t = 16, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_in_flight: u32,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,
}

impl Cli {
    pub fn term(&self) -> TermCode {
        TermCode::new(&self.semester, &self.year)
    }

    pub fn client_config(&self) -> SessionClientConfig {
        SessionClientConfig {
            request_timeout: Duration::from_secs(self.timeout_secs),
            ..SessionClientConfig::default()
        }
    }

    pub fn fetch_config(&self) -> FetchConfig {
        FetchConfig {
            page_size: self.page_size,
            max_attempts: self.max_attempts,
            retry_delay: Duration::from_secs(self.retry_delay_secs),
        }
    }

    pub fn enrich_config(&self) -> EnrichConfig {
        EnrichConfig {
            max_in_flight: self.max_in_flight as usize,
        }
    }
}
