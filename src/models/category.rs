use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::category::{
    Category as DomainCategory, NewCategory as DomainNewCategory,
    UpdateCategory as DomainUpdateCategory,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::categories)]
/// Diesel model for [`crate::domain::category::Category`].
pub struct Category {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::categories)]
/// Insertable form of [`Category`].
pub struct NewCategory<'a> {
    pub name: &'a str,
    pub slug: &'a str,
    pub is_active: bool,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::categories)]
/// Data used when updating a [`Category`] record.
pub struct UpdateCategory<'a> {
    pub name: &'a str,
    pub slug: &'a str,
    pub is_active: bool,
    pub updated_at: NaiveDateTime,
}

impl From<Category> for DomainCategory {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            slug: category.slug,
            is_active: category.is_active,
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewCategory> for NewCategory<'a> {
    fn from(category: &'a DomainNewCategory) -> Self {
        Self {
            name: category.name.as_str(),
            slug: category.slug.as_str(),
            is_active: category.is_active,
        }
    }
}

impl<'a> From<&'a DomainUpdateCategory> for UpdateCategory<'a> {
    fn from(category: &'a DomainUpdateCategory) -> Self {
        Self {
            name: category.name.as_str(),
            slug: category.slug.as_str(),
            is_active: category.is_active,
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn category_into_domain() {
        let now: NaiveDateTime = Utc::now().naive_utc();
        let db_category = Category {
            id: 3,
            name: "Обувь".to_string(),
            slug: "shoes".to_string(),
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        let domain: DomainCategory = db_category.into();
        assert_eq!(domain.id, 3);
        assert_eq!(domain.slug, "shoes");
        assert!(domain.is_active);
    }

    #[test]
    fn from_domain_new_borrows_fields() {
        let domain = DomainNewCategory::try_new("Shoes".to_string(), None, true).unwrap();
        let new: NewCategory = (&domain).into();
        assert_eq!(new.name, "Shoes");
        assert_eq!(new.slug, "shoes");
    }
}
