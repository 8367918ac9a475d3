//! Profile domain model.

use serde::{Deserialize, Serialize};

/// The single editable record for the current user.
///
/// There is exactly one profile per authenticated session. It is fetched
/// lazily after authentication and always updated wholesale; the backend
/// has no partial-patch endpoint for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Server-assigned identifier; absent until first persisted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub education: String,
    pub languages: String,
    pub certifications: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}
