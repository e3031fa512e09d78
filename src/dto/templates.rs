use serde::{Deserialize, Serialize};

use crate::domain::template::{NotificationTemplate, placeholders};
use crate::filters::FilterSet;
use crate::pagination::Paginated;

pub const TEMPLATE_FILTER_KEYS: &[&str] = &["tag", "status"];

#[derive(Debug, Default, Deserialize)]
pub struct TemplatesQuery {
    pub tag: Option<String>,
    pub status: Option<String>,
    pub page: Option<usize>,
}

impl TemplatesQuery {
    pub fn filters(&self) -> FilterSet {
        FilterSet::seeded(
            TEMPLATE_FILTER_KEYS,
            [
                ("tag", self.tag.clone().unwrap_or_default()),
                ("status", self.status.clone().unwrap_or_default()),
            ],
        )
    }
}

pub struct TemplatesPageData {
    pub templates: Paginated<NotificationTemplate>,
    pub filters: FilterSet,
}

/// A template plus the placeholder tokens each of its fields references,
/// shown as chips in the editor modal.
#[derive(Debug, Serialize)]
pub struct TemplateEditorData {
    pub template: NotificationTemplate,
    pub title_placeholders: Vec<String>,
    pub body_placeholders: Vec<String>,
    pub deep_link_placeholders: Vec<String>,
}

impl TemplateEditorData {
    pub fn new(template: NotificationTemplate) -> Self {
        let to_owned = |tokens: Vec<&str>| tokens.into_iter().map(str::to_string).collect();
        let title_placeholders = to_owned(placeholders(&template.title_template));
        let body_placeholders = to_owned(placeholders(&template.body_template));
        let deep_link_placeholders = template
            .deep_link_template
            .as_deref()
            .map(|link| to_owned(placeholders(link)))
            .unwrap_or_default();
        Self {
            template,
            title_placeholders,
            body_placeholders,
            deep_link_placeholders,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::template::TemplateTag;

    #[test]
    fn editor_data_collects_placeholders_per_field() {
        let template = NotificationTemplate {
            id: 1,
            name: "Новая акция".to_string(),
            tag: TemplateTag::NewOffer,
            title_template: "New offer from {{brand_name}}!".to_string(),
            body_template: "{{offer_title}} until {{ends_at}}".to_string(),
            deep_link_template: Some("app://offers/{{offer_id}}".to_string()),
            ..Default::default()
        };
        let data = TemplateEditorData::new(template);
        assert_eq!(data.title_placeholders, vec!["brand_name"]);
        assert_eq!(data.body_placeholders, vec!["offer_title", "ends_at"]);
        assert_eq!(data.deep_link_placeholders, vec!["offer_id"]);
    }

    #[test]
    fn editor_data_handles_missing_deep_link() {
        let template = NotificationTemplate {
            title_template: "Hi {{user_name}}".to_string(),
            ..Default::default()
        };
        let data = TemplateEditorData::new(template);
        assert!(data.deep_link_placeholders.is_empty());
    }
}
