use serde::Deserialize;

use crate::domain::category::Category;
use crate::filters::FilterSet;
use crate::pagination::Paginated;

pub const CATEGORY_FILTER_KEYS: &[&str] = &["search", "status"];

/// Query parameters accepted by the categories list page.
#[derive(Debug, Default, Deserialize)]
pub struct CategoriesQuery {
    pub search: Option<String>,
    pub status: Option<String>,
    pub page: Option<usize>,
}

impl CategoriesQuery {
    /// Seeds the page filter state from the URL query.
    pub fn filters(&self) -> FilterSet {
        FilterSet::seeded(
            CATEGORY_FILTER_KEYS,
            [
                ("search", self.search.clone().unwrap_or_default()),
                ("status", self.status.clone().unwrap_or_default()),
            ],
        )
    }
}

/// Data required to render the categories index template.
pub struct CategoriesPageData {
    pub categories: Paginated<Category>,
    pub filters: FilterSet,
}
