//! Query strings and path arguments of the list endpoints.

use chrono::NaiveDate;

// The intranet accepts unpadded dates, e.g. `2022-1-3`.
const QUERY_DATE_FORMAT: &str = "%Y-%-m-%-d";

/// Filters of the course catalogue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseFilters {
    /// Also return the `(id, semester, location, course, title)` preload table.
    pub preload: bool,
    /// e.g. `FR/RUN`.
    pub locations: Vec<String>,
    /// e.g. `bachelor/classic`.
    pub courses: Vec<String>,
    pub scolaryears: Vec<u32>,
}

impl CourseFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn preload(mut self, preload: bool) -> Self {
        self.preload = preload;
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.locations.push(location.into());
        self
    }

    pub fn course(mut self, course: impl Into<String>) -> Self {
        self.courses.push(course.into());
        self
    }

    pub fn scolaryear(mut self, scolaryear: u32) -> Self {
        self.scolaryears.push(scolaryear);
        self
    }

    /// Query string without the leading `?`, e.g.
    /// `preload=0&location[]=FR%2FRUN&scolaryear[]=2021`.
    pub fn query(&self) -> String {
        let mut params = vec![format!("preload={}", u8::from(self.preload))];
        params.extend(array_params("location", &self.locations));
        params.extend(array_params("course", &self.courses));
        params.extend(array_params("scolaryear", &self.scolaryears));
        params.join("&")
    }
}

fn array_params<'a, T: ToString>(
    key: &'a str,
    values: &'a [T],
) -> impl Iterator<Item = String> + 'a {
    values
        .iter()
        .map(move |value| format!("{key}[]={}", urlencoding::encode(&value.to_string())))
}

/// An inclusive range of days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// `start=Y-M-D&end=Y-M-D`.
    pub fn query(&self) -> String {
        format!(
            "start={}&end={}",
            self.start.format(QUERY_DATE_FORMAT),
            self.end.format(QUERY_DATE_FORMAT)
        )
    }
}

/// Removes the characters that would let a login escape its path segment.
pub fn sanitize_login(login: &str) -> String {
    login.replace(['?', '/', '#'], "")
}
