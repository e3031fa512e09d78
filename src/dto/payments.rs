use serde::Deserialize;

use crate::domain::payment::Payment;
use crate::domain::retailer::Retailer;
use crate::filters::FilterSet;
use crate::pagination::Paginated;

pub const PAYMENT_FILTER_KEYS: &[&str] = &[
    "search",
    "status",
    "payment_method",
    "from_date",
    "to_date",
];

/// Query parameters accepted by the payments list page. Dates arrive as
/// `YYYY-MM-DD` strings and are parsed by the service.
#[derive(Debug, Default, Deserialize)]
pub struct PaymentsQuery {
    pub search: Option<String>,
    pub status: Option<String>,
    pub payment_method: Option<String>,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
    pub page: Option<usize>,
}

impl PaymentsQuery {
    pub fn filters(&self) -> FilterSet {
        FilterSet::seeded(
            PAYMENT_FILTER_KEYS,
            [
                ("search", self.search.clone().unwrap_or_default()),
                ("status", self.status.clone().unwrap_or_default()),
                (
                    "payment_method",
                    self.payment_method.clone().unwrap_or_default(),
                ),
                ("from_date", self.from_date.clone().unwrap_or_default()),
                ("to_date", self.to_date.clone().unwrap_or_default()),
            ],
        )
    }
}

pub struct PaymentsPageData {
    pub payments: Paginated<Payment>,
    pub filters: FilterSet,
}

/// A single payment joined with the retailer it belongs to.
pub struct PaymentDetail {
    pub payment: Payment,
    pub retailer: Retailer,
}
