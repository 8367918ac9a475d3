//! Career experience domain models.
//!
//! A career experience is one employment period owned by the authenticated
//! user; each experience exclusively owns its projects. Dates travel as
//! strings in the backend's wire format and are never parsed client-side.

use serde::{Deserialize, Serialize};

/// One project inside a career experience.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerProject {
    /// Server-assigned identifier; absent until first persisted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub project_name: String,
    pub company: String,
    pub department: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub role: String,
    pub countries: Vec<String>,
    pub industries: Vec<String>,
    pub business_types: Vec<String>,
    pub achievements: String,
    pub quantitative_results: String,
    pub is_active: bool,
}

/// One employment period with its nested projects.
///
/// Projects keep the order the backend returned them in; nothing on the
/// client reorders them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerExperience {
    /// Server-assigned identifier; absent until first persisted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub company: String,
    pub department: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub responsibilities: String,
    #[serde(default)]
    pub projects: Vec<CareerProject>,
}
