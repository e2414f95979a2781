use std::fmt;

use serde::{Deserialize, Serialize};

/// Specializations offered as filter choices.
pub const SPECIALIZATIONS: &[&str] = &[
    "Cardiologist",
    "Dentist",
    "General Practitioner",
    "Dermatologist",
    "Orthopedic",
    "Pediatrician",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorRecord {
    pub id: i64,
    /// Appointments and feedback are keyed by this id, not `id`.
    pub user_id: i64,
    pub username: String,
    pub specialization: String,
    pub experience: i32,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualification: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorFeedback {
    pub id: i64,
    pub feedback: String,
}

/// Everything the booking page shows about one doctor.
#[derive(Debug, Clone)]
pub struct DoctorDetail {
    pub doctor: DoctorRecord,
    pub feedbacks: Vec<DoctorFeedback>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationResponse {
    pub doctors: Vec<DoctorRecord>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOption {
    #[default]
    None,
    Name,
    Experience,
}

impl SortOption {
    /// Unrecognized keys keep input order.
    pub fn from_key(key: &str) -> Self {
        match key.trim() {
            "name" => SortOption::Name,
            "experience" => SortOption::Experience,
            _ => SortOption::None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            SortOption::None => "",
            SortOption::Name => "name",
            SortOption::Experience => "experience",
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The three user-controlled refinement inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefinementCriteria {
    pub search_query: String,
    /// Empty means every specialization.
    pub specialization: String,
    pub sort: SortOption,
}

impl RefinementCriteria {
    pub fn new(search_query: impl Into<String>, specialization: impl Into<String>, sort: SortOption) -> Self {
        Self {
            search_query: search_query.into(),
            specialization: specialization.into(),
            sort,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sort_option_keys() {
        assert_eq!(SortOption::from_key("experience"), SortOption::Experience);
        assert_eq!(SortOption::from_key("name"), SortOption::Name);
        assert_eq!(SortOption::from_key(""), SortOption::None);
        assert_eq!(SortOption::from_key("rating"), SortOption::None);
    }

    #[test]
    fn test_recommended_records_omit_qualification() {
        let record: DoctorRecord = serde_json::from_value(json!({
            "id": 1,
            "user_id": 101,
            "username": "amy",
            "specialization": "Dentist",
            "experience": 5,
            "address": "1 Main Street"
        }))
        .unwrap();

        assert_eq!(record.qualification, None);
    }
}
