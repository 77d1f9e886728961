//! Department records

use std::borrow::Cow;

use serde::Deserialize;
use serde::Serialize;
use staffdesk_table::SearchField;
use staffdesk_table::Searchable;
use uuid::Uuid;

/// A department. `manager_id` references an [`Employee`](super::Employee).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub manager_id: Option<Uuid>,
}

impl Department {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: None,
            manager_id: None,
        }
    }
}

impl Searchable for Department {
    fn search_field(&self, field: SearchField) -> Option<Cow<'_, str>> {
        match field {
            SearchField::Name => Some(Cow::Borrowed(&self.name)),
            _ => None,
        }
    }

    fn record_id(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Owned(self.id.to_string()))
    }

    /// Searching departments also matches their manager's name.
    fn foreign_id(&self) -> Option<Cow<'_, str>> {
        self.manager_id.map(|id| Cow::Owned(id.to_string()))
    }
}
