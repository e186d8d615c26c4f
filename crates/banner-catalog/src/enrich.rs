use futures::stream::{self, StreamExt};
use scraper::{Html, Selector};
use tracing::{info, warn};
use url::Url;

use banner_common::http::HttpGet;

use crate::endpoints::Endpoints;
use crate::model::Course;
use crate::term::TermCode;

/// Marker phrase preceding the free-text description on the scraped page.
pub const DESCRIPTION_MARKER: &str = "Section information text:";

/// Sentinel stored when the page carries no description.
pub const MISSING_DESCRIPTION: &str = "No course description provided. Contact Professor.";

const DESCRIPTION_SELECTOR: &str = r#"section[aria-labelledby="courseDescription"]"#;

#[derive(Clone, Debug)]
pub struct EnrichConfig {
    /// Maximum concurrent description requests.
    pub max_in_flight: usize,
}

impl Default for EnrichConfig {
    fn default() -> Self {
        Self { max_in_flight: 16 }
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct EnrichmentReport {
    pub enriched: usize,
    pub failed: usize,
}

/// Pulls the description out of a course description page.
///
/// The page carries one section element labeled `courseDescription` whose
/// text holds the marker phrase followed by the description body. Returns
/// the trimmed remainder, or the sentinel when the section or the marker is
/// missing.
pub fn extract_description(html: &str) -> String {
    let selector = Selector::parse(DESCRIPTION_SELECTOR).expect("valid description selector");
    let document = Html::parse_document(html);
    let Some(section) = document.select(&selector).next() else {
        return MISSING_DESCRIPTION.to_string();
    };
    let text = section.text().collect::<String>();
    match text.split_once(DESCRIPTION_MARKER) {
        Some((_, rest)) => rest.trim().to_string(),
        None => MISSING_DESCRIPTION.to_string(),
    }
}

/// Fetches and fills the description for every course, with at most
/// `max_in_flight` requests in the air at once.
///
/// Each job carries its course index and writes back into its own slot, so
/// completion order does not matter. Failures are isolated: a course whose
/// page cannot be fetched keeps its empty description and the rest proceed.
pub async fn enrich_descriptions<H: HttpGet>(
    client: &H,
    endpoints: &Endpoints,
    term: &TermCode,
    courses: &mut [Course],
    config: &EnrichConfig,
) -> EnrichmentReport {
    let jobs: Vec<(usize, String, Url)> = courses
        .iter()
        .enumerate()
        .map(|(index, course)| {
            (
                index,
                course.course_reference_number.clone(),
                endpoints.course_description(term, &course.course_reference_number),
            )
        })
        .collect();

    let mut results = stream::iter(jobs)
        .map(|(index, reference_number, url)| async move {
            let outcome = client.get(url).await;
            (index, reference_number, outcome)
        })
        .buffer_unordered(config.max_in_flight.max(1));

    let mut report = EnrichmentReport::default();
    while let Some((index, reference_number, outcome)) = results.next().await {
        match outcome {
            Ok(body) => {
                courses[index].description = extract_description(&body);
                report.enriched += 1;
            }
            Err(err) => {
                warn!(
                    reference_number = %reference_number,
                    error = %err,
                    "description fetch failed, leaving description empty"
                );
                report.failed += 1;
            }
        }
    }

    info!(
        enriched = report.enriched,
        failed = report.failed,
        "descriptions enriched"
    );
    report
}
