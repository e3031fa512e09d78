use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::template::{
    NewTemplate as DomainNewTemplate, NotificationTemplate as DomainTemplate,
    UpdateTemplate as DomainUpdateTemplate,
};
use crate::domain::types::TypeConstraintError;

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::notification_templates)]
/// Diesel model for [`crate::domain::template::NotificationTemplate`].
pub struct NotificationTemplate {
    pub id: i32,
    pub name: String,
    pub tag: String,
    pub title_template: String,
    pub body_template: String,
    pub deep_link_template: Option<String>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::notification_templates)]
/// Insertable form of [`NotificationTemplate`].
pub struct NewTemplate<'a> {
    pub name: &'a str,
    pub tag: String,
    pub title_template: &'a str,
    pub body_template: &'a str,
    pub deep_link_template: Option<&'a str>,
    pub is_active: bool,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::notification_templates, treat_none_as_null = true)]
/// Data used when updating a [`NotificationTemplate`] record. `None` clears
/// the deep link.
pub struct UpdateTemplate<'a> {
    pub name: &'a str,
    pub tag: String,
    pub title_template: &'a str,
    pub body_template: &'a str,
    pub deep_link_template: Option<&'a str>,
    pub is_active: bool,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<NotificationTemplate> for DomainTemplate {
    type Error = TypeConstraintError;

    fn try_from(template: NotificationTemplate) -> Result<Self, Self::Error> {
        Ok(Self {
            id: template.id,
            name: template.name,
            tag: template.tag.parse()?,
            title_template: template.title_template,
            body_template: template.body_template,
            deep_link_template: template.deep_link_template,
            is_active: template.is_active,
            created_at: template.created_at,
            updated_at: template.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewTemplate> for NewTemplate<'a> {
    fn from(template: &'a DomainNewTemplate) -> Self {
        Self {
            name: template.name.as_str(),
            tag: template.tag.to_string(),
            title_template: template.title_template.as_str(),
            body_template: template.body_template.as_str(),
            deep_link_template: template.deep_link_template.as_deref(),
            is_active: template.is_active,
        }
    }
}

impl<'a> From<&'a DomainUpdateTemplate> for UpdateTemplate<'a> {
    fn from(template: &'a DomainUpdateTemplate) -> Self {
        Self {
            name: template.name.as_str(),
            tag: template.tag.to_string(),
            title_template: template.title_template.as_str(),
            body_template: template.body_template.as_str(),
            deep_link_template: template.deep_link_template.as_deref(),
            is_active: template.is_active,
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::template::TemplateTag;
    use chrono::Utc;

    #[test]
    fn template_try_into_domain_parses_tag() {
        let now = Utc::now().naive_utc();
        let db_template = NotificationTemplate {
            id: 1,
            name: "Новая акция".to_string(),
            tag: "new_offer".to_string(),
            title_template: "New offer from {{brand_name}}!".to_string(),
            body_template: "{{offer_title}}".to_string(),
            deep_link_template: Some("app://offers/{{offer_id}}".to_string()),
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        let domain: DomainTemplate = db_template.try_into().unwrap();
        assert_eq!(domain.tag, TemplateTag::NewOffer);
        assert_eq!(domain.title_template, "New offer from {{brand_name}}!");
    }

    #[test]
    fn template_try_into_domain_rejects_unknown_tag() {
        let now = Utc::now().naive_utc();
        let db_template = NotificationTemplate {
            id: 1,
            name: "x".to_string(),
            tag: "broadcast".to_string(),
            title_template: String::new(),
            body_template: String::new(),
            deep_link_template: None,
            is_active: false,
            created_at: now,
            updated_at: now,
        };
        assert!(DomainTemplate::try_from(db_template).is_err());
    }
}
