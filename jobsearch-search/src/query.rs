//! Search string construction from role, experience level and job type.

use crate::types::DEFAULT_JOB_TYPE;

/// Experience level as understood by the query builder.
///
/// Unknown labels are kept as `Other` rather than rejected, so parsing
/// never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceLevel {
    /// "Entry"
    Entry,
    /// "1-3 years"
    OneToThreeYears,
    /// "3-5 years"
    ThreeToFiveYears,
    /// "5+ years"
    FivePlusYears,
    /// Any other label
    Other,
}

impl ExperienceLevel {
    /// Parses a caller-supplied label. Matching is exact.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Entry" => ExperienceLevel::Entry,
            "1-3 years" => ExperienceLevel::OneToThreeYears,
            "3-5 years" => ExperienceLevel::ThreeToFiveYears,
            "5+ years" => ExperienceLevel::FivePlusYears,
            _ => ExperienceLevel::Other,
        }
    }

    /// Seniority term prepended to the role, empty for unknown levels.
    pub fn search_modifier(self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "Junior",
            ExperienceLevel::OneToThreeYears => "Associate",
            ExperienceLevel::ThreeToFiveYears => "Senior",
            ExperienceLevel::FivePlusYears => "Lead OR Manager",
            ExperienceLevel::Other => "",
        }
    }
}

/// Builds the single query string sent to the provider.
///
/// The result is `"{modifier} {role}"` (or just `role` when the level is
/// unknown), followed by the job type when it is set and not the full-time
/// default. Nothing is escaped.
pub fn build_search_query(role: &str, experience: &str, job_type: &str) -> String {
    let modifier = ExperienceLevel::from_label(experience).search_modifier();

    let mut query = if modifier.is_empty() {
        role.to_string()
    } else {
        format!("{modifier} {role}")
    };

    if !job_type.is_empty() && job_type != DEFAULT_JOB_TYPE {
        query.push(' ');
        query.push_str(job_type);
    }

    query
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const KNOWN_LEVELS: [&str; 4] = ["Entry", "1-3 years", "3-5 years", "5+ years"];

    #[test]
    fn test_modifier_table() {
        assert_eq!(ExperienceLevel::from_label("Entry").search_modifier(), "Junior");
        assert_eq!(
            ExperienceLevel::from_label("1-3 years").search_modifier(),
            "Associate"
        );
        assert_eq!(
            ExperienceLevel::from_label("3-5 years").search_modifier(),
            "Senior"
        );
        assert_eq!(
            ExperienceLevel::from_label("5+ years").search_modifier(),
            "Lead OR Manager"
        );
        assert_eq!(ExperienceLevel::from_label("entry"), ExperienceLevel::Other);
    }

    #[test]
    fn test_senior_engineer() {
        assert_eq!(
            build_search_query("Engineer", "3-5 years", "Full-time"),
            "Senior Engineer"
        );
    }

    #[test]
    fn test_part_time_is_appended() {
        assert_eq!(
            build_search_query("Cook", "Entry", "Part-time"),
            "Junior Cook Part-time"
        );
    }

    #[test]
    fn test_empty_job_type_adds_nothing() {
        assert_eq!(
            build_search_query("Designer", "5+ years", ""),
            "Lead OR Manager Designer"
        );
    }

    #[test]
    fn test_unknown_level_with_contract() {
        assert_eq!(
            build_search_query("Nurse", "10 years", "Contract"),
            "Nurse Contract"
        );
    }

    proptest! {
        #[test]
        fn unknown_levels_leave_role_untouched(
            role in "[A-Za-z ]{1,24}",
            level in "\\PC{0,16}",
        ) {
            prop_assume!(!KNOWN_LEVELS.contains(&level.as_str()));

            prop_assert_eq!(ExperienceLevel::from_label(&level).search_modifier(), "");
            prop_assert_eq!(build_search_query(&role, &level, DEFAULT_JOB_TYPE), role.clone());
            prop_assert_eq!(
                build_search_query(&role, &level, "Internship"),
                format!("{role} Internship")
            );
        }
    }
}
