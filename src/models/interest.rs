use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::interest::{
    Interest as DomainInterest, NewInterest as DomainNewInterest,
    UpdateInterest as DomainUpdateInterest,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::interests)]
/// Diesel model for [`crate::domain::interest::Interest`].
pub struct Interest {
    pub id: i32,
    pub name: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::interests)]
pub struct NewInterest<'a> {
    pub name: &'a str,
    pub is_active: bool,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::interests)]
pub struct UpdateInterest<'a> {
    pub name: &'a str,
    pub is_active: bool,
}

impl From<Interest> for DomainInterest {
    fn from(interest: Interest) -> Self {
        Self {
            id: interest.id,
            name: interest.name,
            is_active: interest.is_active,
            created_at: interest.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewInterest> for NewInterest<'a> {
    fn from(interest: &'a DomainNewInterest) -> Self {
        Self {
            name: interest.name.as_str(),
            is_active: interest.is_active,
        }
    }
}

impl<'a> From<&'a DomainUpdateInterest> for UpdateInterest<'a> {
    fn from(interest: &'a DomainUpdateInterest) -> Self {
        Self {
            name: interest.name.as_str(),
            is_active: interest.is_active,
        }
    }
}
