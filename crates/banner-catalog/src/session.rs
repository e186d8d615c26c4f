use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tracing::{info, warn};

use banner_common::http::HttpGet;

use crate::endpoints::Endpoints;
use crate::term::TermCode;

/// Mints the session token Banner's front end generates in the browser:
/// five lowercase letters followed by the current epoch milliseconds.
pub fn unique_session_id() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_else(|_| Duration::from_secs(0));
    let mut state = u64::from(now.subsec_nanos()) ^ (u64::from(std::process::id()) << 32);

    let mut id = String::with_capacity(18);
    for _ in 0..5 {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        id.push(char::from(b'a' + ((state >> 33) % 26) as u8));
    }
    id.push_str(&now.as_millis().to_string());
    id
}

/// Walks the ordered priming sequence so the server binds the term to the
/// client's cookies before any bulk query. Response bodies are discarded.
///
/// Priming is best-effort: a failed call is logged and the walk continues.
/// Whether the server actually required that call only shows up later, so
/// these warnings are the place to look when searches come back empty.
/// Returns the number of priming calls that failed.
pub async fn prime_session<H: HttpGet>(
    client: &H,
    endpoints: &Endpoints,
    term: &TermCode,
    session_id: &str,
) -> usize {
    let mut failures = 0;
    for url in endpoints.priming_sequence(term, session_id) {
        if let Err(err) = client.get(url.clone()).await {
            failures += 1;
            warn!(url = %url, error = %err, "priming request failed, continuing");
        }
    }
    if failures == 0 {
        info!(term = %term, "session primed");
    } else {
        warn!(term = %term, failures, "session primed with failures");
    }
    failures
}
