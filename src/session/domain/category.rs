//! Task categories offered by the marketplace.

use serde::{Deserialize, Serialize};

/// Category as used throughout the client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    /// English display name.
    pub name: String,
    /// Backend identifier.
    pub id: String,
}

/// Localised category name as served by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedName {
    /// English name.
    pub en: String,
}

/// Category record as served by the categories endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    /// Localised names.
    pub name: LocalizedName,
    /// Backend identifier.
    #[serde(rename = "_id")]
    pub id: String,
}

impl From<CategoryRecord> for Category {
    fn from(record: CategoryRecord) -> Self {
        Self {
            name: record.name.en,
            id: record.id,
        }
    }
}
