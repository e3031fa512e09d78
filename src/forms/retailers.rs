use serde::Deserialize;
use validator::Validate;

use crate::domain::retailer::{NewRetailer, RetailerStatus, UpdateRetailer};
use crate::domain::types::TypeConstraintError;

#[derive(Deserialize, Validate)]
/// Form data for creating a retailer.
pub struct AddRetailerForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl TryFrom<AddRetailerForm> for NewRetailer {
    type Error = TypeConstraintError;

    fn try_from(form: AddRetailerForm) -> Result<Self, Self::Error> {
        NewRetailer::try_new(
            form.name,
            form.email,
            form.phone,
            form.address,
            RetailerStatus::Active,
        )
    }
}

#[derive(Deserialize, Validate)]
/// Form data for updating an existing retailer.
pub struct SaveRetailerForm {
    pub id: i32,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub status: String,
}

impl TryFrom<&SaveRetailerForm> for UpdateRetailer {
    type Error = TypeConstraintError;

    fn try_from(form: &SaveRetailerForm) -> Result<Self, Self::Error> {
        UpdateRetailer::try_new(
            form.name.clone(),
            form.email.clone(),
            form.phone.clone(),
            form.address.clone(),
            form.status.parse::<RetailerStatus>()?,
        )
    }
}

#[derive(Deserialize)]
/// Form data posted by the confirmed delete dialog.
pub struct DeleteRetailerForm {
    pub id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_form_parses_status() {
        let form = SaveRetailerForm {
            id: 1,
            name: "Лавка".to_string(),
            email: "lavka@example.com".to_string(),
            phone: None,
            address: None,
            status: "suspended".to_string(),
        };
        let updates = UpdateRetailer::try_from(&form).unwrap();
        assert_eq!(updates.status, RetailerStatus::Suspended);
    }

    #[test]
    fn save_form_rejects_unknown_status() {
        let form = SaveRetailerForm {
            id: 1,
            name: "Лавка".to_string(),
            email: "lavka@example.com".to_string(),
            phone: None,
            address: None,
            status: "gone".to_string(),
        };
        assert!(UpdateRetailer::try_from(&form).is_err());
    }
}
