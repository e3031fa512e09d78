use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryName, TypeConstraintError};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewCategory {
    pub name: String,
    pub slug: String,
    pub is_active: bool,
}

impl NewCategory {
    /// Builds a new category from a raw name, deriving the slug when absent.
    pub fn try_new(
        name: String,
        slug: Option<String>,
        is_active: bool,
    ) -> Result<Self, TypeConstraintError> {
        let name = CategoryName::new(name)?;
        let slug = match slug.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()) {
            Some(slug) => slugify(&slug),
            None => slugify(name.as_str()),
        };
        if slug.is_empty() {
            return Err(TypeConstraintError::InvalidValue(
                "slug cannot be empty".to_string(),
            ));
        }
        Ok(Self {
            name: name.into_inner(),
            slug,
            is_active,
        })
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateCategory {
    pub name: String,
    pub slug: String,
    pub is_active: bool,
}

impl UpdateCategory {
    pub fn try_new(
        name: String,
        slug: Option<String>,
        is_active: bool,
    ) -> Result<Self, TypeConstraintError> {
        let new = NewCategory::try_new(name, slug, is_active)?;
        Ok(Self {
            name: new.name,
            slug: new.slug,
            is_active: new.is_active,
        })
    }
}

/// Derives an URL-safe slug: lowercase ASCII alphanumerics joined by hyphens.
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut prev_dash = true;
    for ch in value.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            prev_dash = false;
        } else if !prev_dash {
            slug.push('-');
            prev_dash = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("Shoes  & Boots"), "shoes-boots");
        assert_eq!(slugify("--Deals--"), "deals");
        assert_eq!(slugify("2for1"), "2for1");
    }

    #[test]
    fn new_category_derives_slug_from_name() {
        let category = NewCategory::try_new("Summer Shoes".to_string(), None, true).unwrap();
        assert_eq!(category.slug, "summer-shoes");
        assert_eq!(category.name, "Summer Shoes");
    }

    #[test]
    fn new_category_prefers_explicit_slug() {
        let category =
            NewCategory::try_new("Shoes".to_string(), Some("Footwear Deals".to_string()), false)
                .unwrap();
        assert_eq!(category.slug, "footwear-deals");
        assert!(!category.is_active);
    }

    #[test]
    fn new_category_rejects_blank_name() {
        assert!(NewCategory::try_new("  ".to_string(), None, true).is_err());
    }
}
