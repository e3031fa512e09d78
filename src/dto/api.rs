use serde::{Deserialize, Serialize};

/// Query parameters for the JSON template collection. `seq` is an opaque
/// client token echoed back unchanged so callers can drop responses that
/// arrive out of order.
#[derive(Debug, Default, Deserialize)]
pub struct ApiTemplatesQuery {
    pub tag: Option<String>,
    pub status: Option<String>,
    pub page: Option<usize>,
    pub seq: Option<String>,
}

/// One page of a JSON collection response.
#[derive(Debug, Serialize)]
pub struct ApiPage<T> {
    pub total: usize,
    pub page: usize,
    pub total_pages: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seq: Option<String>,
    pub data: Vec<T>,
}

/// Body accepted by the template create and update endpoints.
#[derive(Debug, Deserialize)]
pub struct ApiTemplateBody {
    pub name: String,
    pub tag: String,
    pub title_template: String,
    pub body_template: String,
    #[serde(default)]
    pub deep_link_template: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// Uniform error payload for the JSON endpoints.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
