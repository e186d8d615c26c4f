use url::Url;

use crate::term::TermCode;

/// URL builders for the self-service endpoints the pipeline talks to.
///
/// All paths hang off one base URL (the `StudentRegistrationSsb/ssb` root of
/// a Banner instance). Query strings are assembled through `Url` so values
/// are encoded rather than spliced.
#[derive(Clone, Debug)]
pub struct Endpoints {
    base: Url,
}

impl Endpoints {
    /// A missing trailing slash on `base` is corrected so joins extend the
    /// path instead of replacing its last segment.
    pub fn new(mut base: Url) -> Self {
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Self { base }
    }

    /// The ordered priming sequence. Order matters: the server accumulates
    /// session state across these calls, and the term-search call is the one
    /// that binds the term to the session cookies.
    pub fn priming_sequence(&self, term: &TermCode, session_id: &str) -> Vec<Url> {
        let mut term_selection = self.join("term/termSelection");
        term_selection
            .query_pairs_mut()
            .append_pair("mode", "search");

        let mut get_terms = self.join("classSearch/getTerms");
        get_terms
            .query_pairs_mut()
            .append_pair("searchTerm", "")
            .append_pair("offset", "1")
            .append_pair("max", "10");

        let mut term_search = self.join("term/search");
        term_search
            .query_pairs_mut()
            .append_pair("mode", "search")
            .append_pair("term", term.as_str())
            .append_pair("studyPath", "")
            .append_pair("studyPathText", "")
            .append_pair("startDatepicker", "")
            .append_pair("endDatepicker", "")
            .append_pair("uniqueSessionId", session_id);

        vec![
            self.join("registration"),
            self.join("selfServiceMenu/data"),
            term_selection,
            get_terms,
            term_search,
            self.join("classSearch/classSearch"),
        ]
    }

    pub fn search(&self, term: &TermCode, session_id: &str, offset: usize, page_size: usize) -> Url {
        let mut url = self.join("searchResults/searchResults");
        url.query_pairs_mut()
            .append_pair("txt_term", term.as_str())
            .append_pair("startDatepicker", "")
            .append_pair("endDatepicker", "")
            .append_pair("uniqueSessionId", session_id)
            .append_pair("pageOffset", &offset.to_string())
            .append_pair("pageMaxSize", &page_size.to_string())
            .append_pair("sortColumn", "subjectDescription")
            .append_pair("sortDirection", "asc");
        url
    }

    pub fn course_description(&self, term: &TermCode, reference_number: &str) -> Url {
        let mut url = self.join("searchResults/getCourseDescription");
        url.query_pairs_mut()
            .append_pair("term", term.as_str())
            .append_pair("courseReferenceNumber", reference_number);
        url
    }

    fn join(&self, path: &str) -> Url {
        self.base.join(path).expect("valid endpoint path")
    }
}
