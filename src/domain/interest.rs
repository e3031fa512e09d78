use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{InterestName, TypeConstraintError};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Interest {
    pub id: i32,
    pub name: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewInterest {
    pub name: String,
    pub is_active: bool,
}

impl NewInterest {
    pub fn try_new(name: String, is_active: bool) -> Result<Self, TypeConstraintError> {
        let name = InterestName::new(name)?;
        Ok(Self {
            name: name.into_inner(),
            is_active,
        })
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateInterest {
    pub name: String,
    pub is_active: bool,
}

impl UpdateInterest {
    pub fn try_new(name: String, is_active: bool) -> Result<Self, TypeConstraintError> {
        let new = NewInterest::try_new(name, is_active)?;
        Ok(Self {
            name: new.name,
            is_active: new.is_active,
        })
    }
}
