use diesel::prelude::*;

use crate::domain::payment::Payment;
use crate::domain::retailer::Retailer;
use crate::domain::types::PaymentId;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, PaymentListQuery, PaymentReader};

impl PaymentReader for DieselRepository {
    fn get_payment_by_id(
        &self,
        id: PaymentId,
    ) -> RepositoryResult<Option<(Payment, Retailer)>> {
        use crate::models::payment::Payment as DbPayment;
        use crate::models::retailer::Retailer as DbRetailer;
        use crate::schema::{payments, retailers};

        let mut conn = self.conn()?;
        let row = payments::table
            .inner_join(retailers::table)
            .filter(payments::id.eq(id.get()))
            .first::<(DbPayment, DbRetailer)>(&mut conn)
            .optional()?;

        row.map(|(payment, retailer)| {
            let payment: Payment = payment.try_into().map_err(RepositoryError::from)?;
            let retailer: Retailer = retailer.try_into().map_err(RepositoryError::from)?;
            Ok((payment, retailer))
        })
        .transpose()
    }

    fn list_payments(&self, query: PaymentListQuery) -> RepositoryResult<(usize, Vec<Payment>)> {
        use crate::models::payment::Payment as DbPayment;
        use crate::schema::payments;

        let mut conn = self.conn()?;

        let build = |query: &PaymentListQuery| {
            let mut stmt = payments::table.into_boxed();
            if let Some(term) = &query.search {
                stmt = stmt.filter(payments::reference.like(format!("%{term}%")));
            }
            if let Some(status) = query.status {
                stmt = stmt.filter(payments::status.eq(status.to_string()));
            }
            if let Some(method) = query.method {
                stmt = stmt.filter(payments::payment_method.eq(method.to_string()));
            }
            if let Some(from) = query.from_date {
                stmt = stmt.filter(payments::created_at.ge(from.and_time(chrono::NaiveTime::MIN)));
            }
            // inclusive upper bound: everything before the next day
            if let Some(next) = query.to_date.and_then(|to| to.succ_opt()) {
                stmt = stmt.filter(payments::created_at.lt(next.and_time(chrono::NaiveTime::MIN)));
            }
            stmt
        };

        let total: i64 = build(&query).count().get_result(&mut conn)?;

        let mut stmt = build(&query).order(payments::created_at.desc());
        if let Some(pagination) = &query.pagination {
            stmt = stmt.limit(pagination.limit()).offset(pagination.offset());
        }

        let items = stmt
            .load::<DbPayment>(&mut conn)?
            .into_iter()
            .map(|p| p.try_into().map_err(RepositoryError::from))
            .collect::<RepositoryResult<Vec<Payment>>>()?;

        Ok((total as usize, items))
    }
}
