use serde::Deserialize;

use crate::domain::retailer::Retailer;
use crate::filters::FilterSet;
use crate::pagination::Paginated;

pub const RETAILER_FILTER_KEYS: &[&str] = &["search", "status"];

#[derive(Debug, Default, Deserialize)]
pub struct RetailersQuery {
    pub search: Option<String>,
    pub status: Option<String>,
    pub page: Option<usize>,
}

impl RetailersQuery {
    pub fn filters(&self) -> FilterSet {
        FilterSet::seeded(
            RETAILER_FILTER_KEYS,
            [
                ("search", self.search.clone().unwrap_or_default()),
                ("status", self.status.clone().unwrap_or_default()),
            ],
        )
    }
}

pub struct RetailersPageData {
    pub retailers: Paginated<Retailer>,
    pub filters: FilterSet,
}
