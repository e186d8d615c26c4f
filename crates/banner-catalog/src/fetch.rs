use std::time::Duration;

use tracing::{info, warn};

use banner_common::error::CommonError;
use banner_common::http::HttpGet;

use crate::endpoints::Endpoints;
use crate::error::AppError;
use crate::model::{CatalogPage, Course, Dataset};
use crate::term::TermCode;

#[derive(Clone, Debug)]
pub struct FetchConfig {
    /// Courses requested per page. The server caps pages at 500 rows.
    pub page_size: u32,
    /// Attempts per offset before the run fails with `FetchExhausted`.
    pub max_attempts: u32,
    pub retry_delay: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            page_size: 500,
            max_attempts: 5,
            retry_delay: Duration::from_secs(7),
        }
    }
}

/// Fetches and decodes one page of search results.
pub async fn fetch_page<H: HttpGet>(
    client: &H,
    endpoints: &Endpoints,
    term: &TermCode,
    session_id: &str,
    offset: usize,
    page_size: usize,
) -> Result<CatalogPage, CommonError> {
    let url = endpoints.search(term, session_id, offset, page_size);
    let body = client.get(url).await?;
    let page = serde_json::from_str::<CatalogPage>(&body)?;
    Ok(page)
}

/// Walks the whole catalog for a term, page by page.
///
/// Offsets advance by the page size only after a verified success; a failed
/// fetch sleeps out the retry delay and re-requests the identical offset, so
/// pages are never skipped or double-counted. The declared total from the
/// first page decides when the walk is done.
pub async fn collect_catalog<H: HttpGet>(
    client: &H,
    endpoints: &Endpoints,
    term: &TermCode,
    session_id: &str,
    config: &FetchConfig,
) -> Result<Dataset, AppError> {
    let page_size = config.page_size as usize;
    let mut courses: Vec<Course> = Vec::new();
    let mut declared_total: Option<usize> = None;
    let mut offset = 0usize;

    loop {
        let page =
            fetch_page_with_retry(client, endpoints, term, session_id, offset, page_size, config)
                .await?;

        let total = match declared_total {
            Some(total) => {
                if page.total_count != total {
                    warn!(
                        declared = total,
                        reported = page.total_count,
                        "server changed the declared total mid-run, keeping the first value"
                    );
                }
                total
            }
            None => {
                info!(total = page.total_count, "declared catalog size");
                declared_total = Some(page.total_count);
                page.total_count
            }
        };

        if total == 0 {
            break;
        }
        if page.data.is_empty() {
            warn!(
                accumulated = courses.len(),
                total, "empty page before reaching the declared total, stopping early"
            );
            break;
        }

        courses.extend(page.data);
        info!(accumulated = courses.len(), total, "page fetched");

        if courses.len() >= total {
            break;
        }
        offset += page_size;
    }

    Ok(Dataset {
        total_count: declared_total.unwrap_or(0),
        data: courses,
    })
}

async fn fetch_page_with_retry<H: HttpGet>(
    client: &H,
    endpoints: &Endpoints,
    term: &TermCode,
    session_id: &str,
    offset: usize,
    page_size: usize,
    config: &FetchConfig,
) -> Result<CatalogPage, AppError> {
    let mut attempt: u32 = 0;
    loop {
        attempt += 1;
        match fetch_page(client, endpoints, term, session_id, offset, page_size).await {
            Ok(page) => return Ok(page),
            Err(err) => {
                if attempt >= config.max_attempts {
                    return Err(AppError::FetchExhausted {
                        offset,
                        attempts: attempt,
                        source: err,
                    });
                }
                warn!(
                    offset,
                    attempt,
                    delay_ms = config.retry_delay.as_millis(),
                    error = %err,
                    "page fetch failed, retrying same offset"
                );
                tokio::time::sleep(config.retry_delay).await;
            }
        }
    }
}
