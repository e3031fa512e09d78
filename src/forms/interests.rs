use serde::Deserialize;
use validator::Validate;

use crate::domain::interest::{NewInterest, UpdateInterest};
use crate::domain::types::TypeConstraintError;
use crate::forms::checkbox;

#[derive(Deserialize, Validate)]
/// Form data for creating an interest.
pub struct AddInterestForm {
    #[validate(length(min = 1))]
    pub name: String,
}

impl TryFrom<AddInterestForm> for NewInterest {
    type Error = TypeConstraintError;

    fn try_from(form: AddInterestForm) -> Result<Self, Self::Error> {
        NewInterest::try_new(form.name, true)
    }
}

#[derive(Deserialize, Validate)]
/// Form data for updating an existing interest.
pub struct SaveInterestForm {
    pub id: i32,
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub is_active: Option<String>,
}

impl TryFrom<&SaveInterestForm> for UpdateInterest {
    type Error = TypeConstraintError;

    fn try_from(form: &SaveInterestForm) -> Result<Self, Self::Error> {
        UpdateInterest::try_new(form.name.clone(), checkbox(&form.is_active))
    }
}

#[derive(Deserialize)]
/// Form data posted by the confirmed delete dialog.
pub struct DeleteInterestForm {
    pub id: i32,
}
