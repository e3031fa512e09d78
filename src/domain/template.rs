//! Push-notification templates.
//!
//! Template strings carry `{{identifier}}` placeholder tokens that are
//! substituted by the sending service at delivery time. The admin panel only
//! stores and displays the raw text; [`placeholders`] exists so the editor can
//! list the tokens a template references.

use std::fmt::Display;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{TemplateName, TypeConstraintError};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct NotificationTemplate {
    pub id: i32,
    pub name: String,
    pub tag: TemplateTag,
    pub title_template: String,
    pub body_template: String,
    pub deep_link_template: Option<String>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Delivery category of a template; the sending service picks the template by
/// tag.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum TemplateTag {
    Promotional,
    Nearby,
    NewOffer,
    OfferExpiring,
    BrandUpdate,
    #[default]
    System,
}

impl TemplateTag {
    pub const ALL: [TemplateTag; 6] = [
        TemplateTag::Promotional,
        TemplateTag::Nearby,
        TemplateTag::NewOffer,
        TemplateTag::OfferExpiring,
        TemplateTag::BrandUpdate,
        TemplateTag::System,
    ];
}

impl Display for TemplateTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateTag::Promotional => write!(f, "promotional"),
            TemplateTag::Nearby => write!(f, "nearby"),
            TemplateTag::NewOffer => write!(f, "new_offer"),
            TemplateTag::OfferExpiring => write!(f, "offer_expiring"),
            TemplateTag::BrandUpdate => write!(f, "brand_update"),
            TemplateTag::System => write!(f, "system"),
        }
    }
}

impl std::str::FromStr for TemplateTag {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "promotional" => Ok(TemplateTag::Promotional),
            "nearby" => Ok(TemplateTag::Nearby),
            "new_offer" => Ok(TemplateTag::NewOffer),
            "offer_expiring" => Ok(TemplateTag::OfferExpiring),
            "brand_update" => Ok(TemplateTag::BrandUpdate),
            "system" => Ok(TemplateTag::System),
            other => Err(TypeConstraintError::InvalidValue(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewTemplate {
    pub name: String,
    pub tag: TemplateTag,
    pub title_template: String,
    pub body_template: String,
    pub deep_link_template: Option<String>,
    pub is_active: bool,
}

impl NewTemplate {
    /// Validates the template name; template bodies are stored verbatim.
    pub fn try_new(
        name: String,
        tag: TemplateTag,
        title_template: String,
        body_template: String,
        deep_link_template: Option<String>,
        is_active: bool,
    ) -> Result<Self, TypeConstraintError> {
        let name = TemplateName::new(name)?;
        Ok(Self {
            name: name.into_inner(),
            tag,
            title_template,
            body_template,
            deep_link_template: deep_link_template.filter(|s| !s.trim().is_empty()),
            is_active,
        })
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateTemplate {
    pub name: String,
    pub tag: TemplateTag,
    pub title_template: String,
    pub body_template: String,
    pub deep_link_template: Option<String>,
    pub is_active: bool,
}

impl UpdateTemplate {
    pub fn try_new(
        name: String,
        tag: TemplateTag,
        title_template: String,
        body_template: String,
        deep_link_template: Option<String>,
        is_active: bool,
    ) -> Result<Self, TypeConstraintError> {
        let new = NewTemplate::try_new(
            name,
            tag,
            title_template,
            body_template,
            deep_link_template,
            is_active,
        )?;
        Ok(Self {
            name: new.name,
            tag: new.tag,
            title_template: new.title_template,
            body_template: new.body_template,
            deep_link_template: new.deep_link_template,
            is_active: new.is_active,
        })
    }
}

/// Extracts the `{{identifier}}` placeholder names from a template string, in
/// order of first appearance, without duplicates. Malformed tokens (unclosed
/// braces, empty or non-identifier content) are skipped.
pub fn placeholders(template: &str) -> Vec<&str> {
    let mut found: Vec<&str> = Vec::new();
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            break;
        };
        let token = &after[..end];
        if !token.is_empty()
            && token
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
            && !found.contains(&token)
        {
            found.push(token);
        }
        rest = &after[end + 2..];
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders_extracts_identifiers_in_order() {
        let text = "New offer from {{brand_name}}: {{offer_title}} ends {{ends_at}}";
        assert_eq!(
            placeholders(text),
            vec!["brand_name", "offer_title", "ends_at"]
        );
    }

    #[test]
    fn placeholders_deduplicates() {
        assert_eq!(
            placeholders("{{name}} and again {{name}}"),
            vec!["name"]
        );
    }

    #[test]
    fn placeholders_skips_malformed_tokens() {
        assert!(placeholders("no tokens here").is_empty());
        assert!(placeholders("{{unclosed").is_empty());
        assert!(placeholders("{{}}").is_empty());
        assert!(placeholders("{{not a token}}").is_empty());
        assert_eq!(placeholders("{{ok}} {{not ok}}"), vec!["ok"]);
    }

    #[test]
    fn tag_round_trips_through_strings() {
        for tag in TemplateTag::ALL {
            assert_eq!(tag.to_string().parse::<TemplateTag>().unwrap(), tag);
        }
        assert!("broadcast".parse::<TemplateTag>().is_err());
    }

    #[test]
    fn new_template_keeps_body_verbatim() {
        let template = NewTemplate::try_new(
            "Новая акция".to_string(),
            TemplateTag::NewOffer,
            "New offer from {{brand_name}}!".to_string(),
            "{{offer_title}} only until {{ends_at}}".to_string(),
            Some("  ".to_string()),
            true,
        )
        .unwrap();
        assert_eq!(template.title_template, "New offer from {{brand_name}}!");
        assert_eq!(template.deep_link_template, None);
    }
}
