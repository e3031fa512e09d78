use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::retailer::{
    NewRetailer as DomainNewRetailer, Retailer as DomainRetailer,
    UpdateRetailer as DomainUpdateRetailer,
};
use crate::domain::types::TypeConstraintError;

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::retailers)]
/// Diesel model for [`crate::domain::retailer::Retailer`].
pub struct Retailer {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::retailers)]
/// Insertable form of [`Retailer`].
pub struct NewRetailer<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: Option<&'a str>,
    pub address: Option<&'a str>,
    pub status: String,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::retailers, treat_none_as_null = true)]
/// Data used when updating a [`Retailer`] record. `None` clears the column.
pub struct UpdateRetailer<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: Option<&'a str>,
    pub address: Option<&'a str>,
    pub status: String,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Retailer> for DomainRetailer {
    type Error = TypeConstraintError;

    fn try_from(retailer: Retailer) -> Result<Self, Self::Error> {
        Ok(Self {
            id: retailer.id,
            name: retailer.name,
            email: retailer.email,
            phone: retailer.phone,
            address: retailer.address,
            status: retailer.status.parse()?,
            created_at: retailer.created_at,
            updated_at: retailer.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewRetailer> for NewRetailer<'a> {
    fn from(retailer: &'a DomainNewRetailer) -> Self {
        Self {
            name: retailer.name.as_str(),
            email: retailer.email.as_str(),
            phone: retailer.phone.as_deref(),
            address: retailer.address.as_deref(),
            status: retailer.status.to_string(),
        }
    }
}

impl<'a> From<&'a DomainUpdateRetailer> for UpdateRetailer<'a> {
    fn from(retailer: &'a DomainUpdateRetailer) -> Self {
        Self {
            name: retailer.name.as_str(),
            email: retailer.email.as_str(),
            phone: retailer.phone.as_deref(),
            address: retailer.address.as_deref(),
            status: retailer.status.to_string(),
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::retailer::RetailerStatus;
    use chrono::Utc;

    #[test]
    fn retailer_try_into_domain_parses_status() {
        let now: NaiveDateTime = Utc::now().naive_utc();
        let db_retailer = Retailer {
            id: 1,
            name: "Лавка".to_string(),
            email: "lavka@example.com".to_string(),
            phone: None,
            address: None,
            status: "suspended".to_string(),
            created_at: now,
            updated_at: now,
        };
        let domain: DomainRetailer = db_retailer.try_into().unwrap();
        assert_eq!(domain.status, RetailerStatus::Suspended);
    }

    #[test]
    fn retailer_try_into_domain_rejects_unknown_status() {
        let now: NaiveDateTime = Utc::now().naive_utc();
        let db_retailer = Retailer {
            id: 1,
            name: "Лавка".to_string(),
            email: "lavka@example.com".to_string(),
            phone: None,
            address: None,
            status: "banned".to_string(),
            created_at: now,
            updated_at: now,
        };
        assert!(DomainRetailer::try_from(db_retailer).is_err());
    }
}
