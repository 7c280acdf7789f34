use chrono::NaiveDate;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// A résumé record as handed to the renderer.
///
/// Structurally required fields (`first_name`, `last_name`, `position`,
/// `city`) are validated by the API layer before a render is requested;
/// everything else is optional and omitted from output when absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub position: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desired_salary: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_schedule: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_ready_for_trips: Option<bool>,
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_relocate: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citizenship: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_children: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver_licenses: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_medical_book: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_qualities: Option<String>,
    /// Opaque key resolvable by the photo store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(default)]
    pub work_experiences: Vec<WorkExperience>,
    #[serde(default)]
    pub educations: Vec<Education>,
}

impl Resume {
    /// "First Middle Last" with the middle name omitted when absent.
    pub fn full_name(&self) -> String {
        [
            Some(self.first_name.as_str()),
            self.middle_name.as_deref(),
            Some(self.last_name.as_str()),
        ]
        .into_iter()
        .flatten()
        .join(" ")
    }
}

/// One work-history entry. `end_date = None` means the position is ongoing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    pub organization: String,
    pub position: String,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsibilities: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub institution: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faculty: Option<String>,
    pub specialty: String,
    pub graduation_year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub study_form: Option<String>,
}
