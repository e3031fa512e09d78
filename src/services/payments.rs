use std::str::FromStr;

use chrono::NaiveDate;

use crate::domain::payment::{PaymentMethod, PaymentStatus};
use crate::domain::types::PaymentId;
use crate::dto::payments::{PaymentDetail, PaymentsPageData, PaymentsQuery};
use crate::filters::FilterSet;
use crate::models::auth::AuthenticatedUser;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{PaymentListQuery, PaymentReader};
use crate::routes::check_role;
use crate::services::{ServiceError, ServiceResult};
use crate::SERVICE_ACCESS_ROLE;

/// Translates the page filter state into a repository query. Filter values
/// that do not parse are ignored rather than failing the page.
fn build_list_query(filters: &FilterSet, page: usize) -> PaymentListQuery {
    let mut list_query = PaymentListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);
    if let Some(term) = filters.value("search") {
        list_query = list_query.search(term);
    }
    if let Some(status) = filters.value("status").and_then(|s| PaymentStatus::from_str(s).ok()) {
        list_query = list_query.status(status);
    }
    if let Some(method) = filters
        .value("payment_method")
        .and_then(|m| PaymentMethod::from_str(m).ok())
    {
        list_query = list_query.method(method);
    }
    if let Some(from) = filters
        .value("from_date")
        .and_then(|d| NaiveDate::from_str(d).ok())
    {
        list_query = list_query.from_date(from);
    }
    if let Some(to) = filters
        .value("to_date")
        .and_then(|d| NaiveDate::from_str(d).ok())
    {
        list_query = list_query.to_date(to);
    }
    list_query
}

/// Loads one page of the payment history.
pub fn load_payments_page<R>(
    repo: &R,
    user: &AuthenticatedUser,
    query: PaymentsQuery,
) -> ServiceResult<PaymentsPageData>
where
    R: PaymentReader + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let filters = query.filters();
    let page = query.page.unwrap_or(1);

    let (total, payments) = repo.list_payments(build_list_query(&filters, page))?;

    let total_pages = total.div_ceil(DEFAULT_ITEMS_PER_PAGE);
    let payments = Paginated::new(payments, page, total_pages);

    Ok(PaymentsPageData { payments, filters })
}

/// Loads a single payment together with its retailer.
pub fn get_payment_detail<R>(
    repo: &R,
    user: &AuthenticatedUser,
    payment_id: i32,
) -> ServiceResult<PaymentDetail>
where
    R: PaymentReader + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let payment_id = PaymentId::new(payment_id)?;
    let (payment, retailer) = repo
        .get_payment_by_id(payment_id)?
        .ok_or(ServiceError::NotFound)?;

    Ok(PaymentDetail { payment, retailer })
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::repository::mock::MockRepository;

    fn viewer() -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "1".to_string(),
            email: "viewer@example.com".to_string(),
            name: "Viewer".to_string(),
            roles: vec![SERVICE_ACCESS_ROLE.to_string()],
            exp: 0,
        }
    }

    #[test]
    fn load_page_parses_method_and_date_filters() {
        let mut repo = MockRepository::new();
        repo.expect_list_payments()
            .times(1)
            .withf(|query| {
                query.method == Some(PaymentMethod::Card)
                    && query.from_date == NaiveDate::from_ymd_opt(2026, 8, 1)
                    && query.to_date == NaiveDate::from_ymd_opt(2026, 8, 31)
            })
            .returning(|_| Ok((0, vec![])));

        let query = PaymentsQuery {
            payment_method: Some("card".to_string()),
            from_date: Some("2026-08-01".to_string()),
            to_date: Some("2026-08-31".to_string()),
            ..PaymentsQuery::default()
        };
        load_payments_page(&repo, &viewer(), query).unwrap();
    }

    #[test]
    fn load_page_ignores_malformed_dates() {
        let mut repo = MockRepository::new();
        repo.expect_list_payments()
            .times(1)
            .withf(|query| query.from_date.is_none() && query.to_date.is_none())
            .returning(|_| Ok((0, vec![])));

        let query = PaymentsQuery {
            from_date: Some("31.08.2026".to_string()),
            to_date: Some("not-a-date".to_string()),
            ..PaymentsQuery::default()
        };
        load_payments_page(&repo, &viewer(), query).unwrap();
    }

    #[test]
    fn detail_fails_for_missing_payment() {
        let mut repo = MockRepository::new();
        repo.expect_get_payment_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let result = get_payment_detail(&repo, &viewer(), 9);
        assert!(matches!(result, Err(ServiceError::NotFound)));
    }
}
