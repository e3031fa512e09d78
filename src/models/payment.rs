use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::payment::{NewPayment as DomainNewPayment, Payment as DomainPayment};
use crate::domain::types::TypeConstraintError;

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::payments)]
/// Diesel model for [`crate::domain::payment::Payment`].
pub struct Payment {
    pub id: i32,
    pub retailer_id: i32,
    pub reference: String,
    pub amount_cents: i64,
    pub payment_method: String,
    pub status: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::payments)]
/// Insertable form of [`Payment`], used by tests and data seeding.
pub struct NewPayment<'a> {
    pub retailer_id: i32,
    pub reference: &'a str,
    pub amount_cents: i64,
    pub payment_method: String,
    pub status: String,
}

impl TryFrom<Payment> for DomainPayment {
    type Error = TypeConstraintError;

    fn try_from(payment: Payment) -> Result<Self, Self::Error> {
        Ok(Self {
            id: payment.id,
            retailer_id: payment.retailer_id,
            reference: payment.reference,
            amount_cents: payment.amount_cents,
            method: payment.payment_method.parse()?,
            status: payment.status.parse()?,
            created_at: payment.created_at,
        })
    }
}

impl<'a> From<&'a DomainNewPayment> for NewPayment<'a> {
    fn from(payment: &'a DomainNewPayment) -> Self {
        Self {
            retailer_id: payment.retailer_id,
            reference: payment.reference.as_str(),
            amount_cents: payment.amount_cents,
            payment_method: payment.method.to_string(),
            status: payment.status.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payment::{PaymentMethod, PaymentStatus};
    use chrono::Utc;

    #[test]
    fn payment_try_into_domain_parses_enums() {
        let db_payment = Payment {
            id: 9,
            retailer_id: 2,
            reference: "PAY-0009".to_string(),
            amount_cents: 159900,
            payment_method: "bank_transfer".to_string(),
            status: "completed".to_string(),
            created_at: Utc::now().naive_utc(),
        };
        let domain: DomainPayment = db_payment.try_into().unwrap();
        assert_eq!(domain.method, PaymentMethod::BankTransfer);
        assert_eq!(domain.status, PaymentStatus::Completed);
    }
}
