use serde::Deserialize;
use validator::Validate;

use crate::domain::template::{NewTemplate, TemplateTag, UpdateTemplate};
use crate::domain::types::TypeConstraintError;
use crate::forms::checkbox;

#[derive(Deserialize, Validate)]
/// Form data for creating a notification template.
pub struct AddTemplateForm {
    #[validate(length(min = 1))]
    pub name: String,
    pub tag: String,
    #[validate(length(min = 1))]
    pub title_template: String,
    #[validate(length(min = 1))]
    pub body_template: String,
    pub deep_link_template: Option<String>,
    #[serde(default)]
    pub is_active: Option<String>,
}

impl TryFrom<AddTemplateForm> for NewTemplate {
    type Error = TypeConstraintError;

    fn try_from(form: AddTemplateForm) -> Result<Self, Self::Error> {
        NewTemplate::try_new(
            form.name,
            form.tag.parse::<TemplateTag>()?,
            form.title_template,
            form.body_template,
            form.deep_link_template,
            checkbox(&form.is_active),
        )
    }
}

#[derive(Deserialize, Validate)]
/// Form data for updating an existing notification template.
pub struct SaveTemplateForm {
    pub id: i32,
    #[validate(length(min = 1))]
    pub name: String,
    pub tag: String,
    #[validate(length(min = 1))]
    pub title_template: String,
    #[validate(length(min = 1))]
    pub body_template: String,
    pub deep_link_template: Option<String>,
    #[serde(default)]
    pub is_active: Option<String>,
}

impl TryFrom<&SaveTemplateForm> for UpdateTemplate {
    type Error = TypeConstraintError;

    fn try_from(form: &SaveTemplateForm) -> Result<Self, Self::Error> {
        UpdateTemplate::try_new(
            form.name.clone(),
            form.tag.parse::<TemplateTag>()?,
            form.title_template.clone(),
            form.body_template.clone(),
            form.deep_link_template.clone(),
            checkbox(&form.is_active),
        )
    }
}

#[derive(Deserialize)]
/// Form data posted by the confirmed delete dialog.
pub struct DeleteTemplateForm {
    pub id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_form_parses_tag_and_checkbox() {
        let form = AddTemplateForm {
            name: "Новая акция".to_string(),
            tag: "new_offer".to_string(),
            title_template: "New offer from {{brand_name}}!".to_string(),
            body_template: "{{offer_title}}".to_string(),
            deep_link_template: None,
            is_active: Some("on".to_string()),
        };
        let new = NewTemplate::try_from(form).unwrap();
        assert_eq!(new.tag, TemplateTag::NewOffer);
        assert!(new.is_active);
    }

    #[test]
    fn add_form_rejects_unknown_tag() {
        let form = AddTemplateForm {
            name: "x".to_string(),
            tag: "broadcast".to_string(),
            title_template: "t".to_string(),
            body_template: "b".to_string(),
            deep_link_template: None,
            is_active: None,
        };
        assert!(NewTemplate::try_from(form).is_err());
    }
}
