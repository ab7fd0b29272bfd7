//! Mapping from provider records to the simplified job schema.

use crate::types::Job;
use crate::upstream::UpstreamJob;

/// Title used when the provider sends none.
pub const TITLE_PLACEHOLDER: &str = "Untitled Position";
/// Company used when the provider sends none.
pub const COMPANY_PLACEHOLDER: &str = "Company Name Not Available";
/// Location used when neither city nor country is present.
pub const LOCATION_PLACEHOLDER: &str = "Location Not Specified";

/// Maps one provider record into a [`Job`].
///
/// Title and company fall back to placeholders when absent or empty.
/// Location falls through city, country, then placeholder. The apply URL
/// prefers the direct apply link, then the Google link, then an empty string.
pub fn map_job(record: UpstreamJob) -> Job {
    let location = present(record.job_city)
        .or_else(|| present(record.job_country))
        .unwrap_or_else(|| LOCATION_PLACEHOLDER.to_string());

    let apply_url = present(record.job_apply_link)
        .or(record.job_google_link)
        .unwrap_or_default();

    Job {
        id: record.job_id.unwrap_or_default(),
        title: present(record.job_title).unwrap_or_else(|| TITLE_PLACEHOLDER.to_string()),
        company: present(record.employer_name).unwrap_or_else(|| COMPANY_PLACEHOLDER.to_string()),
        location: Some(location),
        salary: record.job_salary,
        apply_url: Some(apply_url),
    }
}

/// Treats empty strings as missing. Whitespace is kept as sent.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_record() -> UpstreamJob {
        UpstreamJob {
            job_id: Some("abc123".to_string()),
            job_title: Some("Line Cook".to_string()),
            employer_name: Some("Harbor Diner".to_string()),
            job_city: Some("Portland".to_string()),
            job_country: Some("US".to_string()),
            job_salary: Some("$20/hr".to_string()),
            job_apply_link: Some("https://apply.example/abc123".to_string()),
            job_google_link: Some("https://google.example/abc123".to_string()),
        }
    }

    #[test]
    fn test_complete_record_is_copied() {
        let job = map_job(full_record());

        assert_eq!(job.id, "abc123");
        assert_eq!(job.title, "Line Cook");
        assert_eq!(job.company, "Harbor Diner");
        assert_eq!(job.location.as_deref(), Some("Portland"));
        assert_eq!(job.salary.as_deref(), Some("$20/hr"));
        assert_eq!(job.apply_url.as_deref(), Some("https://apply.example/abc123"));
    }

    #[test]
    fn test_missing_title_and_company_get_placeholders() {
        let job = map_job(UpstreamJob {
            job_title: None,
            employer_name: Some(String::new()),
            ..full_record()
        });

        assert_eq!(job.title, "Untitled Position");
        assert_eq!(job.company, "Company Name Not Available");
    }

    #[test]
    fn test_location_falls_back_to_country() {
        let job = map_job(UpstreamJob {
            job_city: None,
            ..full_record()
        });
        assert_eq!(job.location.as_deref(), Some("US"));

        let job = map_job(UpstreamJob {
            job_city: Some(String::new()),
            ..full_record()
        });
        assert_eq!(job.location.as_deref(), Some("US"));
    }

    #[test]
    fn test_whitespace_values_are_kept() {
        let job = map_job(UpstreamJob {
            job_city: Some(" ".to_string()),
            job_apply_link: Some(" ".to_string()),
            ..full_record()
        });

        assert_eq!(job.location.as_deref(), Some(" "));
        assert_eq!(job.apply_url.as_deref(), Some(" "));
    }

    #[test]
    fn test_location_placeholder_when_both_missing() {
        let job = map_job(UpstreamJob {
            job_city: None,
            job_country: None,
            ..full_record()
        });

        assert_eq!(job.location.as_deref(), Some("Location Not Specified"));
    }

    #[test]
    fn test_apply_url_fallbacks() {
        let google = map_job(UpstreamJob {
            job_apply_link: Some(String::new()),
            ..full_record()
        });
        assert_eq!(
            google.apply_url.as_deref(),
            Some("https://google.example/abc123")
        );

        let empty = map_job(UpstreamJob {
            job_apply_link: None,
            job_google_link: None,
            ..full_record()
        });
        assert_eq!(empty.apply_url.as_deref(), Some(""));
    }

    #[test]
    fn test_empty_record_is_total() {
        let job = map_job(UpstreamJob::default());

        assert_eq!(job.id, "");
        assert_eq!(job.title, TITLE_PLACEHOLDER);
        assert_eq!(job.company, COMPANY_PLACEHOLDER);
        assert_eq!(job.location.as_deref(), Some(LOCATION_PLACEHOLDER));
        assert_eq!(job.salary, None);
    }
}
