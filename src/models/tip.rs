use serde::{Deserialize, Serialize};

/// Security tip from the static library
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Tip {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub category: Option<String>,
}

/// Tip search criteria
///
/// Kept independent of storage: the store loads candidate rows and applies
/// `matches`, so an indexed backend only has to replace that step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TipFilter {
    /// Lowercased free-text needle
    query: Option<String>,
    category: Option<String>,
}

impl TipFilter {
    /// Build a filter; empty or whitespace-only inputs count as absent
    pub fn new(query: Option<&str>, category: Option<&str>) -> Self {
        let query = query
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase);
        let category = category
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string);

        Self { query, category }
    }

    /// Case-insensitive substring on title or content, AND exact category
    pub fn matches(&self, tip: &Tip) -> bool {
        if let Some(category) = &self.category {
            if tip.category.as_deref() != Some(category.as_str()) {
                return false;
            }
        }

        match &self.query {
            Some(needle) => {
                tip.title.to_lowercase().contains(needle)
                    || tip.content.to_lowercase().contains(needle)
            }
            None => true,
        }
    }
}
