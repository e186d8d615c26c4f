use std::fmt;

/// Banner term code: a four-digit year followed by a two-digit semester
/// suffix. Fall catalogs live under the `04` suffix; every other label
/// (spring, misspellings included) takes `02`. The registration server only
/// distinguishes these two buckets, so an unrecognized semester is not an
/// error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TermCode(String);

impl TermCode {
    pub fn new(semester: &str, year: &str) -> Self {
        let suffix = if semester == "fall" { "04" } else { "02" };
        Self(format!("{year}{suffix}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TermCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
