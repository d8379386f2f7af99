//! Profile records as returned by the scraping service.

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Profile {
    pub name: Option<String>,
    pub location: Option<String>,
    pub profile_url: Option<String>,
    pub title: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub experience: Vec<Experience>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub education: Vec<Education>,
    pub evaluation: Option<Evaluation>,
}

/// One company entry on a profile.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Experience {
    pub company: String,
    #[serde(flatten)]
    pub tenure: Tenure,
}

/// Either several roles held at the same company, or a single flat position.
///
/// The scraper emits a `roles` list only for multi-role tenures; otherwise the
/// position fields sit directly on the experience record.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum Tenure {
    Roles { roles: Vec<Role> },
    Single(Role),
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Role {
    pub title: Option<String>,
    #[serde(rename = "dateRange")]
    pub date_range: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Education {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub date: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub details: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Evaluation {
    pub personal_information: Option<CategoryScore>,
    pub education: Option<CategoryScore>,
    pub work_experience: Option<CategoryScore>,
    pub overall_score: Option<f64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub actionable_insights: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CategoryScore {
    pub score: f64,
    #[serde(default)]
    pub explanation: String,
}

impl Experience {
    /// Roles of a multi-role tenure, `None` for a flat position.
    pub fn roles(&self) -> Option<&[Role]> {
        match &self.tenure {
            Tenure::Roles { roles } => Some(roles),
            Tenure::Single(_) => None,
        }
    }

    /// The flat position, `None` when the entry carries a roles list.
    pub fn position(&self) -> Option<&Role> {
        match &self.tenure {
            Tenure::Roles { .. } => None,
            Tenure::Single(role) => Some(role),
        }
    }
}

impl Evaluation {
    /// Scored categories in display order, skipping the ones not present.
    pub fn categories(&self) -> impl Iterator<Item = (&'static str, &CategoryScore)> {
        [
            ("Personal Information", self.personal_information.as_ref()),
            ("Education", self.education.as_ref()),
            ("Work Experience", self.work_experience.as_ref()),
        ]
        .into_iter()
        .filter_map(|(label, score)| score.map(|s| (label, s)))
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
