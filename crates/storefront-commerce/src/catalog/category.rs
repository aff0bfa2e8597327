//! Category types for product organization.

use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// A product category.
///
/// Products reference categories by display name, so `name` is what the
/// catalog filters on and `id` is the URL slug.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// URL-friendly slug.
    pub id: CategoryId,
    /// Category name.
    pub name: String,
    /// Category description.
    pub description: String,
    /// Category image URL.
    pub image: String,
}

impl Category {
    pub fn new(
        id: impl Into<CategoryId>,
        name: impl Into<String>,
        description: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            image: image.into(),
        }
    }

    /// Derive a slug from a display name ("Home Decor" -> "home-decor").
    pub fn slugify(name: &str) -> String {
        name.split_whitespace()
            .map(|word| word.to_lowercase())
            .collect::<Vec<_>>()
            .join("-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(Category::slugify("Home Decor"), "home-decor");
        assert_eq!(Category::slugify("  Kitchen "), "kitchen");
    }
}
