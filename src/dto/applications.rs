use serde::Deserialize;

use crate::domain::application::OnboardingApplication;
use crate::filters::FilterSet;
use crate::pagination::Paginated;

pub const APPLICATION_FILTER_KEYS: &[&str] = &["status"];

#[derive(Debug, Default, Deserialize)]
pub struct ApplicationsQuery {
    pub status: Option<String>,
    pub page: Option<usize>,
}

impl ApplicationsQuery {
    pub fn filters(&self) -> FilterSet {
        FilterSet::seeded(
            APPLICATION_FILTER_KEYS,
            [("status", self.status.clone().unwrap_or_default())],
        )
    }
}

pub struct ApplicationsPageData {
    pub applications: Paginated<OnboardingApplication>,
    pub filters: FilterSet,
}
