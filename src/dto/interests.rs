use serde::Deserialize;

use crate::domain::interest::Interest;
use crate::filters::FilterSet;
use crate::pagination::Paginated;

pub const INTEREST_FILTER_KEYS: &[&str] = &["search", "status"];

#[derive(Debug, Default, Deserialize)]
pub struct InterestsQuery {
    pub search: Option<String>,
    pub status: Option<String>,
    pub page: Option<usize>,
}

impl InterestsQuery {
    pub fn filters(&self) -> FilterSet {
        FilterSet::seeded(
            INTEREST_FILTER_KEYS,
            [
                ("search", self.search.clone().unwrap_or_default()),
                ("status", self.status.clone().unwrap_or_default()),
            ],
        )
    }
}

pub struct InterestsPageData {
    pub interests: Paginated<Interest>,
    pub filters: FilterSet,
}
