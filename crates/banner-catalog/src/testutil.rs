use std::collections::VecDeque;
use std::sync::Mutex;

use url::Url;

use banner_common::error::{CommonError, StatusCode};
use banner_common::http::HttpGet;

use crate::model::Course;

pub(crate) fn status_error(code: u16) -> CommonError {
    CommonError::Status {
        status: StatusCode::from_u16(code).unwrap(),
        url: "scripted".to_string(),
    }
}

pub(crate) fn course_json(reference: &str) -> serde_json::Value {
    serde_json::json!({
        "id": reference.parse::<u64>().unwrap_or(0),
        "courseReferenceNumber": reference,
        "courseNumber": "001",
        "subject": "CPSC",
        "scheduleTypeDescription": "Lecture",
        "courseTitle": "Placeholder",
        "creditHours": 1.0,
        "maximumEnrollment": 30,
        "enrollment": 25,
        "seatsAvailable": 5,
        "faculty": [],
        "meetingsFaculty": [],
        "sectionAttributes": []
    })
}

pub(crate) fn course(reference: &str) -> Course {
    serde_json::from_value(course_json(reference)).unwrap()
}

pub(crate) fn page_body(total: usize, references: &[String]) -> String {
    let courses: Vec<serde_json::Value> =
        references.iter().map(|r| course_json(r)).collect();
    serde_json::json!({ "totalCount": total, "data": courses }).to_string()
}

pub(crate) fn description_page(text: &str) -> String {
    format!(
        r#"<html><body><section aria-labelledby="courseDescription">Section information text: {text}</section></body></html>"#
    )
}

pub(crate) fn query_param(url: &Url, key: &str) -> Option<String> {
    url.query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

/// Replays a fixed queue of responses in request order and records every
/// requested URL.
pub(crate) struct ScriptedHttp {
    responses: Mutex<VecDeque<Result<String, CommonError>>>,
    requests: Mutex<Vec<Url>>,
}

impl ScriptedHttp {
    pub(crate) fn new(responses: Vec<Result<String, CommonError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn requested_urls(&self) -> Vec<Url> {
        self.requests.lock().unwrap().clone()
    }
}

impl HttpGet for ScriptedHttp {
    async fn get(&self, url: Url) -> Result<String, CommonError> {
        self.requests.lock().unwrap().push(url);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(status_error(418)))
    }
}

pub(crate) enum Reply {
    Body(String),
    Fail,
}

/// Routes requests by URL substring, for tests where request order is not
/// deterministic.
pub(crate) struct RoutedHttp {
    routes: Vec<(String, Reply)>,
}

impl RoutedHttp {
    pub(crate) fn new(routes: Vec<(String, Reply)>) -> Self {
        Self { routes }
    }
}

impl HttpGet for RoutedHttp {
    async fn get(&self, url: Url) -> Result<String, CommonError> {
        for (needle, reply) in &self.routes {
            if url.as_str().contains(needle.as_str()) {
                return match reply {
                    Reply::Body(body) => Ok(body.clone()),
                    Reply::Fail => Err(status_error(500)),
                };
            }
        }
        Err(status_error(404))
    }
}
