//! Wire types exchanged with the upstream job search provider.
//!
//! Only the fields this service consumes are modeled. Records stay raw JSON
//! until the caller has picked the ones it returns, so a malformed record past
//! the cutoff is never looked at. Record fields are read leniently: the
//! provider is free to send `null`, omit a field, or use a number where a
//! string is expected without failing the whole response.

use serde::de::{Error as _, Unexpected};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Parameters of one upstream search call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamQuery {
    /// Search string built from role, experience and job type
    pub query: String,
    /// Result page to fetch, always the first
    pub page: u32,
    /// Number of pages to fetch in one call
    pub num_pages: u32,
    /// Posting age filter
    pub date_posted: String,
    /// Explicit location filter, absent for remote searches
    pub location: Option<String>,
}

impl UpstreamQuery {
    /// Query for the first page of results posted at any time.
    ///
    /// The location filter is only sent when it is non-empty and not
    /// "remote" in any letter case.
    pub fn first_page(query: impl Into<String>, location: &str) -> Self {
        let location = Some(location)
            .filter(|loc| !loc.is_empty() && !loc.eq_ignore_ascii_case("remote"))
            .map(str::to_string);

        Self {
            query: query.into(),
            page: 1,
            num_pages: 1,
            date_posted: "all".to_string(),
            location,
        }
    }

    /// Query-string pairs in the order the provider documents them.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("query", self.query.clone()),
            ("page", self.page.to_string()),
            ("num_pages", self.num_pages.to_string()),
            ("date_posted", self.date_posted.clone()),
        ];

        if let Some(ref location) = self.location {
            params.push(("location", location.clone()));
        }

        params
    }
}

/// Body of a successful upstream search response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpstreamResponse {
    /// Raw job records in provider order
    #[serde(default, deserialize_with = "null_as_empty")]
    pub data: Vec<Value>,
}

impl UpstreamResponse {
    /// Parses a response body, which must be a JSON object.
    ///
    /// # Errors
    /// - `serde_json::Error` - Body is not JSON, not an object, or `data` is not a list
    pub fn parse(body: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(body)?;
        match value {
            Value::Object(_) => serde_json::from_value(value),
            other => Err(serde_json::Error::invalid_type(
                unexpected(&other),
                &"a JSON object",
            )),
        }
    }

    /// Decodes the first `limit` records, leaving the rest untouched.
    ///
    /// # Errors
    /// - `serde_json::Error` - One of the selected records is not a JSON object
    pub fn take_records(self, limit: usize) -> Result<Vec<UpstreamJob>, serde_json::Error> {
        self.data
            .into_iter()
            .take(limit)
            .map(UpstreamJob::from_value)
            .collect()
    }
}

/// Single job record as sent by the provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamJob {
    /// Provider job identifier
    #[serde(default, deserialize_with = "lenient_string")]
    pub job_id: Option<String>,
    /// Job title
    #[serde(default, deserialize_with = "lenient_string")]
    pub job_title: Option<String>,
    /// Employer name
    #[serde(default, deserialize_with = "lenient_string")]
    pub employer_name: Option<String>,
    /// City of the position
    #[serde(default, deserialize_with = "lenient_string")]
    pub job_city: Option<String>,
    /// Country of the position
    #[serde(default, deserialize_with = "lenient_string")]
    pub job_country: Option<String>,
    /// Salary text, free form
    #[serde(default, deserialize_with = "lenient_string")]
    pub job_salary: Option<String>,
    /// Direct application link
    #[serde(default, deserialize_with = "lenient_string")]
    pub job_apply_link: Option<String>,
    /// Google listing link
    #[serde(default, deserialize_with = "lenient_string")]
    pub job_google_link: Option<String>,
}

impl UpstreamJob {
    /// Decodes one raw record. Only JSON objects are accepted.
    ///
    /// # Errors
    /// - `serde_json::Error` - Record is not a JSON object
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        match value {
            Value::Object(_) => serde_json::from_value(value),
            other => Err(serde_json::Error::invalid_type(
                unexpected(&other),
                &"a job record object",
            )),
        }
    }
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(flag) => Unexpected::Bool(*flag),
        Value::Number(_) => Unexpected::Other("number"),
        Value::String(text) => Unexpected::Str(text),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(text)) => Some(text),
        Some(serde_json::Value::Number(number)) => Some(number.to_string()),
        _ => None,
    })
}
